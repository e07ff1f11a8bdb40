//! Closed three-step scales used across the trip-planning contract.
//!
//! Budget tiers and crowd levels share the `low | medium | high` wire form but
//! are distinct types so one cannot be passed where the other is expected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown level string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError {
    /// Name of the scale being parsed, e.g. `budget tier`.
    pub scale: &'static str,
    /// The unrecognised input value.
    pub input: String,
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: {}", self.scale, self.input)
    }
}

impl std::error::Error for ParseLevelError {}

macro_rules! define_level {
    (
        $(#[$outer:meta])*
        $name:ident, $scale:literal
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            /// Lowest step of the scale.
            Low,
            /// Middle step of the scale.
            Medium,
            /// Highest step of the scale.
            High,
        }

        impl $name {
            /// Every value in ascending order.
            pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

            /// Returns the wire representation.
            pub fn as_str(&self) -> &'static str {
                match self {
                    Self::Low => "low",
                    Self::Medium => "medium",
                    Self::High => "high",
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseLevelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    "low" => Ok(Self::Low),
                    "medium" => Ok(Self::Medium),
                    "high" => Ok(Self::High),
                    _ => Err(ParseLevelError {
                        scale: $scale,
                        input: s.to_owned(),
                    }),
                }
            }
        }
    };
}

define_level! {
    /// Spending tier a traveller is planning for.
    ///
    /// # Examples
    ///
    /// ```
    /// # use travel_backend::domain::BudgetTier;
    /// assert_eq!("medium".parse::<BudgetTier>(), Ok(BudgetTier::Medium));
    /// assert_eq!(BudgetTier::High.as_str(), "high");
    /// ```
    BudgetTier, "budget tier"
}

define_level! {
    /// Expected crowd density at a place or time.
    ///
    /// # Examples
    ///
    /// ```
    /// # use travel_backend::domain::CrowdLevel;
    /// assert!(CrowdLevel::Low < CrowdLevel::High);
    /// ```
    CrowdLevel, "crowd level"
}
