use std::str::FromStr;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use smaakbalans::routes::AppState;
use smaakbalans_catalog::{Catalog, CookingMethod, Ingredient};
use smaakbalans_composition::{CompositionAnalysis, CompositionAnalyzer, CookingAssignments};

/// smaakbalans - ingredient composition scoring
#[derive(Parser)]
#[command(name = "smaakbalans")]
#[command(about = "Score ingredient compositions and suggest what is missing", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Analyze one composition from the terminal
    Analyze {
        /// Ingredient names, English or Dutch
        #[arg(required = true)]
        ingredients: Vec<String>,

        /// Cooking method per ingredient, as name=method
        #[arg(long = "method", value_parser = parse_method_assignment)]
        methods: Vec<(String, CookingMethod)>,

        /// Print the raw JSON analysis instead of a report
        #[arg(long)]
        json: bool,
    },
    /// Inspect the ingredient catalog
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },
}

#[derive(Subcommand)]
enum CatalogCommands {
    /// List every ingredient with its structural flags
    List,
    /// Show the full catalog entry for one ingredient
    Show { id: String },
}

fn parse_method_assignment(raw: &str) -> Result<(String, CookingMethod), String> {
    let (name, method) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=method, got '{}'", raw))?;
    let method = CookingMethod::from_str(method.trim())
        .map_err(|_| format!("unknown cooking method '{}'", method.trim()))?;
    Ok((name.trim().to_string(), method))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = smaakbalans::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    // Initialize observability (tracing + logging)
    smaakbalans::observability::init_observability(
        "smaakbalans",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => serve_command(config, host, port).await,
        Commands::Analyze {
            ingredients,
            methods,
            json,
        } => analyze_command(config, ingredients, methods, json),
        Commands::Catalog { command } => catalog_command(config, command),
    }
}

fn load_catalog(config: &smaakbalans::config::Config) -> Result<Catalog> {
    let catalog = match &config.catalog.path {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::builtin()?,
    };
    tracing::info!(ingredients = catalog.len(), "Catalog loaded");
    Ok(catalog)
}

#[tracing::instrument(skip(config))]
async fn serve_command(
    config: smaakbalans::config::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting smaakbalans server...");

    // Use CLI overrides if provided, otherwise use config
    let host = host_override.unwrap_or_else(|| config.server.host.clone());
    let port = port_override.unwrap_or(config.server.port);

    let catalog = Arc::new(load_catalog(&config)?);

    let state = AppState { config, catalog };

    let app = smaakbalans::routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new());

    // Start server
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

#[tracing::instrument(skip(config, ingredients, methods))]
fn analyze_command(
    config: smaakbalans::config::Config,
    ingredients: Vec<String>,
    methods: Vec<(String, CookingMethod)>,
    json: bool,
) -> Result<()> {
    let catalog = load_catalog(&config)?;
    let assignments: CookingAssignments = methods.into_iter().collect();

    let analyzer = CompositionAnalyzer::new(&catalog);
    let analysis = analyzer.analyze(&ingredients, &assignments)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    print_report(&analysis);
    Ok(())
}

fn print_report(analysis: &CompositionAnalysis) {
    println!("Score: {}/100", analysis.overall_score);
    println!(
        "Balanced: {}",
        if analysis.is_balanced { "yes" } else { "no" }
    );
    match &analysis.carrier {
        Some(carrier) => println!("Carrier: {}", carrier.name),
        None => println!("Carrier: none"),
    }
    if !analysis.unrecognized.is_empty() {
        println!("Unrecognized: {}", analysis.unrecognized.join(", "));
    }

    if analysis.missing_elements.is_empty() {
        println!("\nNothing is missing.");
    } else {
        println!("\nMissing:");
        for element in &analysis.missing_elements {
            println!("  [{}] {}: {}", element.priority, element.kind, element.reason);
        }
    }

    if !analysis.suggestions.is_empty() {
        println!("\nSuggestions:");
        for suggestion in &analysis.suggestions {
            println!(
                "  {} ({}): {}",
                suggestion.ingredient.name, suggestion.addresses, suggestion.reason
            );
        }
    }
}

#[tracing::instrument(skip(config, command))]
fn catalog_command(config: smaakbalans::config::Config, command: CatalogCommands) -> Result<()> {
    let catalog = load_catalog(&config)?;

    match command {
        CatalogCommands::List => {
            for ingredient in catalog.iter() {
                println!(
                    "{:<24} {:<14} {}",
                    ingredient.id,
                    ingredient.molecule_type,
                    structural_flags(ingredient)
                );
            }
        }
        CatalogCommands::Show { id } => match catalog.get(&id) {
            Some(ingredient) => println!("{}", serde_json::to_string_pretty(ingredient)?),
            None => anyhow::bail!("no ingredient with id '{}'", id),
        },
    }

    Ok(())
}

fn structural_flags(ingredient: &Ingredient) -> String {
    let mut flags = Vec::new();
    if ingredient.can_be_carrier {
        flags.push("carrier");
    }
    if ingredient.provides_umami {
        flags.push("umami");
    }
    if ingredient.provides_acidity {
        flags.push("acid");
    }
    if ingredient.provides_crunch {
        flags.push("crunch");
    }
    if ingredient.has_fresh_aroma() {
        flags.push("freshness");
    }
    if ingredient.is_rich() {
        flags.push("richness");
    }
    flags.join(", ")
}
