use std::{fmt, str::FromStr};

/// Quality tier of a Factorio thruster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quality {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Quality {
    pub const ALL: [Quality; 5] = [
        Quality::Common,
        Quality::Uncommon,
        Quality::Rare,
        Quality::Epic,
        Quality::Legendary,
    ];

    /// Maximum thrust of one thruster of this quality, in mega-newtons.
    pub fn thrust_mn(self) -> f64 {
        match self {
            Quality::Common => 102.0,
            Quality::Uncommon => 132.0,
            Quality::Rare => 163.0,
            Quality::Epic => 193.0,
            Quality::Legendary => 254.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Quality::Common => "common",
            Quality::Uncommon => "uncommon",
            Quality::Rare => "rare",
            Quality::Epic => "epic",
            Quality::Legendary => "legendary",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Quality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Quality::ALL
            .into_iter()
            .find(|quality| quality.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown thruster quality '{}'", s))
    }
}

/// Space platform description for the max speed calculator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpacePlatformParams {
    /// Widest row of the platform, in tiles.
    pub max_width: i64,
    pub num_of_thrusters: i64,
    /// Platform mass in tonnes.
    pub mass: f64,
    pub quality: Quality,
}

/// Platform speeds in km/s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformSpeeds {
    pub departure: f64,
    pub arrival: f64,
}
