//! Node input enums and their wire-format string forms.
//!
//! Each enum mirrors one dropdown on the host node. `as_str` returns the
//! exact value the host displays, which is also what goes on the wire.

use std::fmt;
use std::str::FromStr;

/// Supported Imagen model versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelVersion {
    /// `imagen-4.0-fast-generate-001`.
    Imagen4Fast,
    /// `imagen-4.0-ultra-generate-001`.
    Imagen4Ultra,
}

impl ModelVersion {
    /// The full model identifier used in the predict URL.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Imagen4Fast => "imagen-4.0-fast-generate-001",
            Self::Imagen4Ultra => "imagen-4.0-ultra-generate-001",
        }
    }

    /// All variants, in host display order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[Self::Imagen4Fast, Self::Imagen4Ultra]
    }
}

impl FromStr for ModelVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "imagen-4.0-fast-generate-001" => Ok(Self::Imagen4Fast),
            "imagen-4.0-ultra-generate-001" => Ok(Self::Imagen4Ultra),
            other => Err(format!(
                "unknown model version '{other}'. Valid: imagen-4.0-fast-generate-001, imagen-4.0-ultra-generate-001"
            )),
        }
    }
}

impl fmt::Display for ModelVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supported aspect ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectRatio {
    /// `1:1`.
    Square,
    /// `9:16`.
    Portrait9x16,
    /// `16:9`.
    Landscape16x9,
    /// `4:3`.
    Landscape4x3,
    /// `3:4`.
    Portrait3x4,
}

impl AspectRatio {
    /// The ratio string sent as the `aspectRatio` parameter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Square => "1:1",
            Self::Portrait9x16 => "9:16",
            Self::Landscape16x9 => "16:9",
            Self::Landscape4x3 => "4:3",
            Self::Portrait3x4 => "3:4",
        }
    }

    /// All variants, in host display order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[
            Self::Square,
            Self::Portrait9x16,
            Self::Landscape16x9,
            Self::Landscape4x3,
            Self::Portrait3x4,
        ]
    }
}

impl FromStr for AspectRatio {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1:1" => Ok(Self::Square),
            "9:16" => Ok(Self::Portrait9x16),
            "16:9" => Ok(Self::Landscape16x9),
            "4:3" => Ok(Self::Landscape4x3),
            "3:4" => Ok(Self::Portrait3x4),
            other => Err(format!(
                "unsupported aspect ratio '{other}'. Valid: 1:1, 9:16, 16:9, 4:3, 3:4"
            )),
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolution tier. Accepted on the node but not forwarded on the wire;
/// the endpoint derives output size from the model and aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Resolution {
    /// `standard`.
    #[default]
    Standard,
    /// `high`.
    High,
}

impl Resolution {
    /// The host display string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::High => "high",
        }
    }
}

impl FromStr for Resolution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Self::Standard),
            "high" => Ok(Self::High),
            other => Err(format!("unsupported resolution '{other}'. Valid: standard, high")),
        }
    }
}

/// Whether a masked edit fills the region in or extends the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Fill in the masked region.
    #[default]
    Inpainting,
    /// Extend the canvas beyond the masked region.
    Outpainting,
}

impl EditMode {
    /// The value sent as the instance's `edit_mode` field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inpainting => "inpainting",
            Self::Outpainting => "outpainting",
        }
    }
}

impl FromStr for EditMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inpainting" => Ok(Self::Inpainting),
            "outpainting" => Ok(Self::Outpainting),
            other => Err(format!("unsupported edit mode '{other}'. Valid: inpainting, outpainting")),
        }
    }
}

impl fmt::Display for EditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_version_round_trip() {
        for &model in ModelVersion::all() {
            assert_eq!(model.as_str().parse::<ModelVersion>().unwrap(), model);
        }
    }

    #[test]
    fn model_version_unknown() {
        assert!("imagen-3.0-generate-001".parse::<ModelVersion>().is_err());
    }

    #[test]
    fn aspect_ratio_round_trip() {
        for &ratio in AspectRatio::all() {
            assert_eq!(ratio.as_str().parse::<AspectRatio>().unwrap(), ratio);
        }
    }

    #[test]
    fn aspect_ratio_unknown() {
        assert!("21:9".parse::<AspectRatio>().is_err());
        assert!("square".parse::<AspectRatio>().is_err());
    }

    #[test]
    fn resolution_parse() {
        assert_eq!("standard".parse::<Resolution>().unwrap(), Resolution::Standard);
        assert_eq!("high".parse::<Resolution>().unwrap(), Resolution::High);
        assert!("8K".parse::<Resolution>().is_err());
    }

    #[test]
    fn edit_mode_defaults_to_inpainting() {
        assert_eq!(EditMode::default(), EditMode::Inpainting);
    }

    #[test]
    fn edit_mode_parse() {
        assert_eq!("outpainting".parse::<EditMode>().unwrap(), EditMode::Outpainting);
        assert!("crop".parse::<EditMode>().is_err());
    }
}
