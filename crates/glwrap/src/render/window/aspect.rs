//! Width/height aspect ratios

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Aspect ratio used to derive a window height from its width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    /// HD video
    #[serde(rename = "16:9")]
    Ratio16x9,
    /// Standard monitor
    #[default]
    #[serde(rename = "4:3")]
    Ratio4x3,
    /// Classic film
    #[serde(rename = "3:2")]
    Ratio3x2,
    /// Cinemascope
    #[serde(rename = "21:9")]
    Ratio21x9,
    /// Square window
    #[serde(rename = "1:1")]
    Ratio1x1,
}

impl AspectRatio {
    /// All supported ratios
    pub const ALL: [Self; 5] = [
        Self::Ratio16x9,
        Self::Ratio4x3,
        Self::Ratio3x2,
        Self::Ratio21x9,
        Self::Ratio1x1,
    ];

    /// `(width, height)` parts of the ratio
    pub const fn parts(self) -> (u32, u32) {
        match self {
            Self::Ratio16x9 => (16, 9),
            Self::Ratio4x3 => (4, 3),
            Self::Ratio3x2 => (3, 2),
            Self::Ratio21x9 => (21, 9),
            Self::Ratio1x1 => (1, 1),
        }
    }

    /// Height for `width`, dividing before multiplying
    ///
    /// Widths that are not a multiple of the ratio's width part truncate:
    /// 16:9 at 1000 gives 558, not 562.
    pub const fn height_for(self, width: u32) -> u32 {
        let (w, h) = self.parts();
        width / w * h
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = self.parts();
        write!(f, "{w}:{h}")
    }
}

/// Error returned when a string is not one of the supported ratios
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("undefined aspect ratio '{0}'")]
pub struct ParseAspectRatioError(pub String);

impl FromStr for AspectRatio {
    type Err = ParseAspectRatioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|ratio| ratio.to_string() == trimmed)
            .ok_or_else(|| ParseAspectRatioError(s.to_string()))
    }
}
