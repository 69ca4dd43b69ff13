//! Urgency tiers over days open.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of four ordered buckets over the number of days a request is open
///
/// The buckets partition every non-negative day count: 0-30, 31-60, 61-90
/// and everything above 90.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UrgencyTier {
    /// 0 to 30 days
    Normal,
    /// 31 to 60 days
    Urgente,
    /// 61 to 90 days
    Critico,
    /// More than 90 days
    MuitoCritico,
}

impl UrgencyTier {
    /// All tiers in ascending order of urgency
    pub const ALL: [Self; 4] = [Self::Normal, Self::Urgente, Self::Critico, Self::MuitoCritico];

    /// Assign the tier for a number of days open
    #[must_use]
    pub fn from_days_open(days_open: u32) -> Self {
        match days_open {
            0..=30 => Self::Normal,
            31..=60 => Self::Urgente,
            61..=90 => Self::Critico,
            _ => Self::MuitoCritico,
        }
    }

    /// Chart label including the day range
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal (0-30d)",
            Self::Urgente => "Urgente (31-60d)",
            Self::Critico => "Crítico (61-90d)",
            Self::MuitoCritico => "Muito Crítico (>90d)",
        }
    }

    /// Chart colour for the tier
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Normal => "green",
            Self::Urgente => "gold",
            Self::Critico => "darkorange",
            Self::MuitoCritico => "red",
        }
    }

    /// Inclusive day range covered by the tier, `None` as upper bound when open-ended
    #[must_use]
    pub fn day_range(self) -> (u32, Option<u32>) {
        match self {
            Self::Normal => (0, Some(30)),
            Self::Urgente => (31, Some(60)),
            Self::Critico => (61, Some(90)),
            Self::MuitoCritico => (91, None),
        }
    }
}

impl fmt::Display for UrgencyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
