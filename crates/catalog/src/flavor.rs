use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Minimum intensity for a taste to count as present in a profile.
pub const PRESENCE_THRESHOLD: f32 = 0.15;

/// A profile needs at least this many present tastes to be balanced.
pub const MIN_TASTES_PRESENT: usize = 2;

/// A taste at or above this intensity can dominate a profile.
pub const DOMINANCE_THRESHOLD: f32 = 0.75;

/// Gap to the second-strongest taste required before the strongest
/// counts as dominant.
pub const DOMINANCE_GAP: f32 = 0.30;

#[derive(
    EnumString,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Taste {
    Sweet,
    Salty,
    Sour,
    Bitter,
    Umami,
}

impl Taste {
    /// Fixed evaluation order. Every fold over tastes iterates this slice
    /// so results never depend on map iteration order.
    pub const ALL: [Taste; 5] = [
        Taste::Sweet,
        Taste::Salty,
        Taste::Sour,
        Taste::Bitter,
        Taste::Umami,
    ];
}

/// Five-dimensional taste intensity profile, each component in [0, 1].
///
/// Profiles describe a single ingredient in the catalog and, aggregated,
/// the whole composition. Aggregation uses `merge`, which saturates
/// towards 1.0 instead of summing, so a profile never leaves range and
/// adding an ingredient never weakens a taste that is already there.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FlavorProfile {
    pub sweetness: f32,
    pub saltiness: f32,
    pub sourness: f32,
    pub bitterness: f32,
    pub umami: f32,
}

impl FlavorProfile {
    pub fn new(sweetness: f32, saltiness: f32, sourness: f32, bitterness: f32, umami: f32) -> Self {
        Self {
            sweetness,
            saltiness,
            sourness,
            bitterness,
            umami,
        }
    }

    pub fn intensity(&self, taste: Taste) -> f32 {
        match taste {
            Taste::Sweet => self.sweetness,
            Taste::Salty => self.saltiness,
            Taste::Sour => self.sourness,
            Taste::Bitter => self.bitterness,
            Taste::Umami => self.umami,
        }
    }

    fn set_intensity(&mut self, taste: Taste, value: f32) {
        match taste {
            Taste::Sweet => self.sweetness = value,
            Taste::Salty => self.saltiness = value,
            Taste::Sour => self.sourness = value,
            Taste::Bitter => self.bitterness = value,
            Taste::Umami => self.umami = value,
        }
    }

    /// Combine two profiles per taste with `1 - (1-a)(1-b)`, floored at
    /// the larger input and capped at 1.0.
    ///
    /// Commutative and associative, so folding a set of ingredients gives
    /// the same aggregate in any order. The floor keeps f32 rounding from
    /// pulling a merged intensity below a value that is already there.
    pub fn merge(&self, other: &FlavorProfile) -> FlavorProfile {
        let mut merged = FlavorProfile::default();
        for taste in Taste::ALL {
            let a = self.intensity(taste);
            let b = other.intensity(taste);
            let union = 1.0 - (1.0 - a) * (1.0 - b);
            merged.set_intensity(taste, union.max(a.max(b)).min(1.0));
        }
        merged
    }

    /// Shift each intensity by a delta and clamp back into [0, 1].
    pub fn shifted(&self, deltas: &FlavorProfile) -> FlavorProfile {
        let mut shifted = FlavorProfile::default();
        for taste in Taste::ALL {
            let value = self.intensity(taste) + deltas.intensity(taste);
            shifted.set_intensity(taste, value.clamp(0.0, 1.0));
        }
        shifted
    }

    /// Tastes at or above the presence threshold, in `Taste::ALL` order.
    pub fn present_tastes(&self) -> Vec<Taste> {
        Taste::ALL
            .into_iter()
            .filter(|taste| self.intensity(*taste) >= PRESENCE_THRESHOLD)
            .collect()
    }

    /// Strongest taste when it dominates the profile: at least
    /// DOMINANCE_THRESHOLD and DOMINANCE_GAP above the runner-up.
    pub fn dominant_taste(&self) -> Option<Taste> {
        let mut strongest = Taste::Sweet;
        let mut max = f32::MIN;
        let mut second = f32::MIN;

        for taste in Taste::ALL {
            let value = self.intensity(taste);
            if value > max {
                second = max;
                max = value;
                strongest = taste;
            } else if value > second {
                second = value;
            }
        }

        if max >= DOMINANCE_THRESHOLD && (max - second) >= DOMINANCE_GAP {
            Some(strongest)
        } else {
            None
        }
    }

    /// A profile is balanced when enough tastes are present and none
    /// drowns out the others.
    pub fn is_balanced(&self) -> bool {
        self.present_tastes().len() >= MIN_TASTES_PRESENT && self.dominant_taste().is_none()
    }

    /// First field outside [0, 1], for catalog validation.
    pub fn out_of_range_field(&self) -> Option<&'static str> {
        let fields = [
            ("sweetness", self.sweetness),
            ("saltiness", self.saltiness),
            ("sourness", self.sourness),
            ("bitterness", self.bitterness),
            ("umami", self.umami),
        ];
        fields
            .into_iter()
            .find(|(_, value)| !(0.0..=1.0).contains(value))
            .map(|(name, _)| name)
    }
}
