//! Riot routing values: platforms and regional routes.
//!
//! The Riot API is sharded twice: summoner and league data live on
//! per-platform hosts (`na1`, `euw1`, …) while account and match data
//! live on continental hosts (`americas`, `europe`, `asia`, `sea`).
//! [`Platform`] is what clients send in the URL; [`RegionalRoute`] is
//! derived from it for the continental endpoints.

use std::fmt;

use crate::error::ServiceError;

/// A Riot platform routing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Brazil.
    Br1,
    /// Europe Nordic & East.
    Eun1,
    /// Europe West.
    Euw1,
    /// Japan.
    Jp1,
    /// Korea.
    Kr,
    /// Latin America North.
    La1,
    /// Latin America South.
    La2,
    /// North America.
    Na1,
    /// Oceania.
    Oc1,
    /// Russia.
    Ru,
    /// Turkey.
    Tr1,
    /// Singapore.
    Sg2,
    /// Taiwan.
    Tw2,
    /// Vietnam.
    Vn2,
}

impl Platform {
    /// Returns every supported platform.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Br1,
            Self::Eun1,
            Self::Euw1,
            Self::Jp1,
            Self::Kr,
            Self::La1,
            Self::La2,
            Self::Na1,
            Self::Oc1,
            Self::Ru,
            Self::Tr1,
            Self::Sg2,
            Self::Tw2,
            Self::Vn2,
        ]
    }

    /// Returns the lowercase host prefix for this platform.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Br1 => "br1",
            Self::Eun1 => "eun1",
            Self::Euw1 => "euw1",
            Self::Jp1 => "jp1",
            Self::Kr => "kr",
            Self::La1 => "la1",
            Self::La2 => "la2",
            Self::Na1 => "na1",
            Self::Oc1 => "oc1",
            Self::Ru => "ru",
            Self::Tr1 => "tr1",
            Self::Sg2 => "sg2",
            Self::Tw2 => "tw2",
            Self::Vn2 => "vn2",
        }
    }

    /// Parses a platform from a string, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "br1" => Some(Self::Br1),
            "eun1" => Some(Self::Eun1),
            "euw1" => Some(Self::Euw1),
            "jp1" => Some(Self::Jp1),
            "kr" => Some(Self::Kr),
            "la1" => Some(Self::La1),
            "la2" => Some(Self::La2),
            "na1" => Some(Self::Na1),
            "oc1" => Some(Self::Oc1),
            "ru" => Some(Self::Ru),
            "tr1" => Some(Self::Tr1),
            "sg2" => Some(Self::Sg2),
            "tw2" => Some(Self::Tw2),
            "vn2" => Some(Self::Vn2),
            _ => None,
        }
    }

    /// Returns the continental route serving account-v1 and match-v5
    /// data for this platform.
    #[must_use]
    pub const fn regional_route(&self) -> RegionalRoute {
        match self {
            Self::Br1 | Self::La1 | Self::La2 | Self::Na1 => RegionalRoute::Americas,
            Self::Eun1 | Self::Euw1 | Self::Ru | Self::Tr1 => RegionalRoute::Europe,
            Self::Jp1 | Self::Kr => RegionalRoute::Asia,
            Self::Oc1 | Self::Sg2 | Self::Tw2 | Self::Vn2 => RegionalRoute::Sea,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Platform {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ServiceError::UnknownPlatform(s.to_string()))
    }
}

/// A Riot continental routing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionalRoute {
    /// The Americas.
    Americas,
    /// Asia.
    Asia,
    /// Europe.
    Europe,
    /// South-East Asia and Oceania.
    Sea,
}

impl RegionalRoute {
    /// Returns the lowercase host prefix for this route.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Americas => "americas",
            Self::Asia => "asia",
            Self::Europe => "europe",
            Self::Sea => "sea",
        }
    }
}

impl fmt::Display for RegionalRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
