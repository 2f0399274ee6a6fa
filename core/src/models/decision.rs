use std::fmt;

use serde::{Deserialize, Serialize};

/// Tradeability label for one sample.
///
/// Anything other than `Favorable` names the first threshold the sample failed,
/// checked in the order spread, imbalance, intensity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Favorable,
    SpreadTooWide,
    ImbalanceTooWeak,
    IntensityTooLow,
}

impl Decision {
    pub const ALL: [Decision; 4] = [
        Decision::Favorable,
        Decision::SpreadTooWide,
        Decision::ImbalanceTooWeak,
        Decision::IntensityTooLow,
    ];

    pub fn is_favorable(&self) -> bool {
        matches!(self, Decision::Favorable)
    }

    /// Wire label, identical to the serde representation.
    pub fn label(&self) -> &'static str {
        match self {
            Decision::Favorable => "favorable",
            Decision::SpreadTooWide => "spread_too_wide",
            Decision::ImbalanceTooWeak => "imbalance_too_weak",
            Decision::IntensityTooLow => "intensity_too_low",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
