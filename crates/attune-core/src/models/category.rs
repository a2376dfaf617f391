use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AttuneError;

/// The fixed set of adaptation profiles the scoring engine selects from.
///
/// Declaration order is significant: it breaks score ties (first declared wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Fire: action, energy, momentum.
    ActionOriented,
    /// Water: flow, calm, reciprocity.
    Fluid,
    /// Earth: stability, learning, sustainability.
    Grounded,
    /// Air: communication, ideas, inspiration.
    Communicative,
    /// Spirit: purpose, common good, reflection.
    Transcendent,
}

impl Category {
    /// All categories in declaration (tie-break) order.
    pub const ALL: [Category; 5] = [
        Self::ActionOriented,
        Self::Fluid,
        Self::Grounded,
        Self::Communicative,
        Self::Transcendent,
    ];

    /// Category used when no rule matches.
    pub const DEFAULT: Category = Category::Grounded;

    /// Stable string id.
    pub fn id(self) -> &'static str {
        match self {
            Self::ActionOriented => "action-oriented",
            Self::Fluid => "fluid",
            Self::Grounded => "grounded",
            Self::Communicative => "communicative",
            Self::Transcendent => "transcendent",
        }
    }

    /// The element this profile was modelled on.
    pub fn element(self) -> &'static str {
        match self {
            Self::ActionOriented => "fire",
            Self::Fluid => "water",
            Self::Grounded => "earth",
            Self::Communicative => "air",
            Self::Transcendent => "spirit",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = AttuneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| AttuneError::UnknownCategory { id: s.to_string() })
    }
}
