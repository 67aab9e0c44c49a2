//! Platform and OS version model used to pick a review tier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Platform family whose review APIs are being driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// iPhone and iPad.
    Ios,
    /// Desktop macOS.
    #[serde(rename = "macos")]
    MacOs,
}

impl Platform {
    /// Returns the lowercase platform name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::MacOs => "macos",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = PlatformParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ios" | "ipados" => Ok(Platform::Ios),
            "macos" | "osx" | "mac" => Ok(Platform::MacOs),
            other => Err(PlatformParseError::UnknownPlatform(other.to_string())),
        }
    }
}

/// Errors from parsing platform names and version strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlatformParseError {
    #[error("unknown platform: {0}")]
    UnknownPlatform(String),

    #[error("invalid version: {0}")]
    InvalidVersion(String),
}

/// Dotted OS version (`major.minor.patch`).
///
/// Missing components parse as zero, so `"16"` equals `"16.0.0"`. Ordering is
/// lexicographic over the three components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlatformVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl PlatformVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Returns true if this version is at least `major.minor`.
    pub fn at_least(&self, major: u32, minor: u32) -> bool {
        *self >= Self::new(major, minor, 0)
    }
}

impl fmt::Display for PlatformVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for PlatformVersion {
    type Err = PlatformParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PlatformParseError::InvalidVersion(s.to_string()));
        }

        let mut parts = [0u32; 3];
        for (i, component) in trimmed.split('.').enumerate() {
            if i >= parts.len() {
                return Err(PlatformParseError::InvalidVersion(s.to_string()));
            }
            parts[i] = component
                .parse()
                .map_err(|_| PlatformParseError::InvalidVersion(s.to_string()))?;
        }

        Ok(Self::new(parts[0], parts[1], parts[2]))
    }
}
