//! Style Units
//!
//! Parsing and conversion of style lengths.

use crate::fixed::Fixed16;

// 1ex is approximated as 0.6em, 0.6 in 16.16 bits.
pub(crate) const EX_PER_EM: Fixed16 = Fixed16::from_bits(39321);

/// Units a style length can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Px,
    Pt,
    Em,
    Ex,
    Rem,
    Percent,
    Vw,
    Vh,
}

impl LengthUnit {
    /// True for units resolved against another font size (em, ex, percent).
    /// A resolved font size never carries one of these.
    pub fn is_relative(self) -> bool {
        matches!(self, Self::Em | Self::Ex | Self::Percent)
    }

    fn suffix(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Pt => "pt",
            Self::Em => "em",
            Self::Ex => "ex",
            Self::Rem => "rem",
            Self::Percent => "%",
            Self::Vw => "vw",
            Self::Vh => "vh",
        }
    }
}

/// A quantity with a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Length {
    pub value: Fixed16,
    pub unit: LengthUnit,
}

impl Length {
    pub fn new(value: Fixed16, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    pub fn px(value: f32) -> Self {
        Self::new(Fixed16::from_f32(value), LengthUnit::Px)
    }

    /// Convert to device pixels.
    ///
    /// `parent_px` anchors the font-relative units (em, ex, percent);
    /// viewport-relative units use `viewport`.
    pub fn to_pixels(&self, viewport: &Viewport, parent_px: Fixed16) -> Fixed16 {
        let hundred = Fixed16::from_i32(100);
        match self.unit {
            LengthUnit::Px => self.value,
            // 72pt per inch, 96px per inch.
            LengthUnit::Pt => self.value * Fixed16::from_i32(96) / Fixed16::from_i32(72),
            LengthUnit::Em => self.value * parent_px,
            LengthUnit::Ex => self.value * parent_px * EX_PER_EM,
            LengthUnit::Rem => self.value * viewport.rem_px,
            LengthUnit::Percent => self.value * parent_px / hundred,
            LengthUnit::Vw => self.value * viewport.width_px / hundred,
            LengthUnit::Vh => self.value * viewport.height_px / hundred,
        }
    }
}

/// Window metrics the viewport-relative units resolve against.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width_px: Fixed16,
    pub height_px: Fixed16,
    /// Root font size; 1rem in pixels.
    pub rem_px: Fixed16,
}

impl Viewport {
    pub fn new(width_px: f32, height_px: f32) -> Self {
        Self {
            width_px: Fixed16::from_f32(width_px),
            height_px: Fixed16::from_f32(height_px),
            ..Self::default()
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width_px: Fixed16::from_i32(1280),
            height_px: Fixed16::from_i32(720),
            rem_px: Fixed16::from_i32(16),
        }
    }
}

/// Size-parsing failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnitError {
    #[error("unsupported size: {0:?}")]
    Unsupported(String),
}

/// Parse a textual size: `"12px"`, `"1.5em"`, `"50%"`, or a bare number,
/// which is taken as pixels.
pub fn parse_size(text: &str) -> Result<Length, UnitError> {
    const SUFFIXED: [LengthUnit; 8] = [
        LengthUnit::Px,
        LengthUnit::Pt,
        // "rem" before "em": "em" is a suffix of "rem".
        LengthUnit::Rem,
        LengthUnit::Em,
        LengthUnit::Ex,
        LengthUnit::Percent,
        LengthUnit::Vw,
        LengthUnit::Vh,
    ];

    let trimmed = text.trim();
    if let Ok(value) = trimmed.parse::<f64>() {
        return Ok(Length::new(Fixed16::from_f64(value), LengthUnit::Px));
    }
    for unit in SUFFIXED {
        if let Some(number) = trimmed.strip_suffix(unit.suffix()) {
            if let Ok(value) = number.trim().parse::<f64>() {
                return Ok(Length::new(Fixed16::from_f64(value), unit));
            }
        }
    }
    Err(UnitError::Unsupported(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_number_is_px() {
        assert_eq!(parse_size("12").unwrap(), Length::px(12.0));
        assert_eq!(parse_size(" 2.5 ").unwrap(), Length::px(2.5));
    }

    #[test]
    fn test_parse_suffixed() {
        assert_eq!(
            parse_size("1.5em").unwrap(),
            Length::new(Fixed16::from_f32(1.5), LengthUnit::Em)
        );
        assert_eq!(
            parse_size("2rem").unwrap(),
            Length::new(Fixed16::from_i32(2), LengthUnit::Rem)
        );
        assert_eq!(
            parse_size("50%").unwrap(),
            Length::new(Fixed16::from_i32(50), LengthUnit::Percent)
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_size("wide"), Err(UnitError::Unsupported("wide".into())));
        assert_eq!(parse_size("12qx"), Err(UnitError::Unsupported("12qx".into())));
        assert!(parse_size("").is_err());
    }

    #[test]
    fn test_to_pixels() {
        let viewport = Viewport::default();
        let parent = Fixed16::from_i32(20);
        assert_eq!(Length::px(10.0).to_pixels(&viewport, parent), Fixed16::from_i32(10));
        assert_eq!(
            Length::new(Fixed16::from_i32(2), LengthUnit::Em).to_pixels(&viewport, parent),
            Fixed16::from_i32(40)
        );
        assert_eq!(
            Length::new(Fixed16::from_i32(50), LengthUnit::Percent).to_pixels(&viewport, parent),
            Fixed16::from_i32(10)
        );
        assert_eq!(
            Length::new(Fixed16::from_i32(2), LengthUnit::Rem).to_pixels(&viewport, parent),
            Fixed16::from_i32(32)
        );
        assert_eq!(
            Length::new(Fixed16::from_i32(10), LengthUnit::Vw).to_pixels(&viewport, parent),
            Fixed16::from_i32(128)
        );
        assert_eq!(
            Length::new(Fixed16::from_i32(72), LengthUnit::Pt).to_pixels(&viewport, parent),
            Fixed16::from_i32(96)
        );
    }
}
