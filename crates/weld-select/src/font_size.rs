//! Font-Size Resolution
//!
//! Turns keyword and relative font sizes into absolute lengths.
//!
//! The selection engine hands over whatever the stylesheet said (a keyword,
//! `larger`, `2em`, `120%`, `9pt`, ...) together with the parent's already
//! resolved size; this module produces a concrete value+unit pair. All
//! arithmetic is [`Fixed16`], so nested em-chains resolve identically
//! everywhere.

use crate::fixed::Fixed16;
use crate::units::{EX_PER_EM, LengthUnit};

// 1.2 in 16.16 bits; the step between a size and its larger/smaller
// neighbor.
const STEP: Fixed16 = Fixed16::from_bits(78643);

/// Absolute-size keywords, smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeKeyword {
    XxSmall,
    XSmall,
    Small,
    Medium,
    Large,
    XLarge,
    XxLarge,
}

impl SizeKeyword {
    /// All seven keywords, smallest to largest.
    pub const ALL: [SizeKeyword; 7] = [
        Self::XxSmall,
        Self::XSmall,
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::XLarge,
        Self::XxLarge,
    ];

    /// Scale factor relative to the user-agent base size.
    ///
    /// Every factor is a whole number of sixteenths, exact in 16.16 fixed
    /// point.
    pub fn scale(self) -> Fixed16 {
        let sixteenths = match self {
            Self::XxSmall => 9,  // 0.5625
            Self::XSmall => 10,  // 0.6250
            Self::Small => 13,   // 0.8125
            Self::Medium => 16,  // 1.0000
            Self::Large => 18,   // 1.1250
            Self::XLarge => 24,  // 1.5000
            Self::XxLarge => 32, // 2.0000
        };
        Fixed16::from_sixteenths(sixteenths)
    }
}

/// A font size the engine wants resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSizeRequest {
    /// One of the seven absolute keywords.
    Keyword(SizeKeyword),
    /// One step up from the parent size.
    Larger,
    /// One step down from the parent size.
    Smaller,
    /// An explicit length, possibly in a font-relative unit.
    Length { value: Fixed16, unit: LengthUnit },
}

/// A resolved font size: always a concrete value and a non-font-relative
/// unit, never a keyword or an inherit marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSize {
    pub value: Fixed16,
    pub unit: LengthUnit,
}

impl FontSize {
    pub fn new(value: Fixed16, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    pub fn pt(value: f32) -> Self {
        Self::new(Fixed16::from_f32(value), LengthUnit::Pt)
    }
}

/// User-agent font configuration.
#[derive(Debug, Clone, Copy)]
pub struct FontSizeConfig {
    /// Base font size in tenths of a point; 120 is 12pt.
    pub base_tenths_pt: i32,
}

impl Default for FontSizeConfig {
    fn default() -> Self {
        Self { base_tenths_pt: 120 }
    }
}

impl FontSizeConfig {
    /// The absolute size of a keyword: `base * scale(keyword) / 10`, in
    /// points.
    pub fn keyword_size(&self, keyword: SizeKeyword) -> FontSize {
        let value = keyword.scale() * Fixed16::from_i32(self.base_tenths_pt)
            / Fixed16::from_i32(10);
        FontSize::new(value, LengthUnit::Pt)
    }
}

/// Resolve `request` against `parent`, producing an absolute size.
///
/// A missing parent stands in for the document root and defaults to
/// `medium`. A supplied parent must already be resolved: font-relative
/// units (em, ex, percent) are not a valid parent and panic.
///
/// TODO: `Larger`/`Smaller` could step within the keyword table when the
/// parent sits on a keyword size, instead of applying a flat 1.2 factor.
pub fn resolve_font_size(
    config: &FontSizeConfig,
    parent: Option<FontSize>,
    request: FontSizeRequest,
) -> FontSize {
    let parent = parent.unwrap_or_else(|| config.keyword_size(SizeKeyword::Medium));
    assert!(
        !parent.unit.is_relative(),
        "parent font size must be absolute, got {:?}",
        parent.unit
    );

    match request {
        FontSizeRequest::Keyword(keyword) => config.keyword_size(keyword),
        FontSizeRequest::Larger => FontSize::new(parent.value * STEP, parent.unit),
        FontSizeRequest::Smaller => FontSize::new(parent.value / STEP, parent.unit),
        FontSizeRequest::Length { value, unit } => match unit {
            LengthUnit::Em => FontSize::new(value * parent.value, parent.unit),
            LengthUnit::Ex => FontSize::new(value * parent.value * EX_PER_EM, parent.unit),
            LengthUnit::Percent => {
                FontSize::new(value * parent.value / Fixed16::from_i32(100), parent.unit)
            }
            _ => FontSize::new(value, unit),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Fixed16, b: f32) -> bool {
        (a.to_f32() - b).abs() < 0.001
    }

    #[test]
    fn test_keywords_from_scale_table() {
        let config = FontSizeConfig::default();
        let expected = [6.75, 7.5, 9.75, 12.0, 13.5, 18.0, 24.0];
        for (keyword, want) in SizeKeyword::ALL.into_iter().zip(expected) {
            let size = resolve_font_size(&config, None, FontSizeRequest::Keyword(keyword));
            assert_eq!(size.unit, LengthUnit::Pt);
            assert!(close(size.value, want), "{keyword:?}: {} != {want}", size.value);
        }
    }

    #[test]
    fn test_missing_parent_defaults_to_medium() {
        let config = FontSizeConfig::default();
        let size = resolve_font_size(&config, None, FontSizeRequest::Larger);
        assert_eq!(size.unit, LengthUnit::Pt);
        assert!(close(size.value, 14.4));
    }

    #[test]
    fn test_larger_smaller_step() {
        let config = FontSizeConfig::default();
        let parent = Some(FontSize::pt(10.0));
        let larger = resolve_font_size(&config, parent, FontSizeRequest::Larger);
        assert!(close(larger.value, 12.0));
        assert_eq!(larger.unit, LengthUnit::Pt);
        let smaller = resolve_font_size(&config, parent, FontSizeRequest::Smaller);
        assert!(close(smaller.value, 10.0 / 1.2));
        assert_eq!(smaller.unit, LengthUnit::Pt);
    }

    #[test]
    fn test_em_scales_parent() {
        let config = FontSizeConfig::default();
        let parent = Some(FontSize::pt(12.0));
        let request = FontSizeRequest::Length {
            value: Fixed16::from_i32(2),
            unit: LengthUnit::Em,
        };
        let size = resolve_font_size(&config, parent, request);
        assert_eq!(size, FontSize::pt(24.0));
    }

    #[test]
    fn test_ex_applies_ex_factor() {
        let config = FontSizeConfig::default();
        let parent = Some(FontSize::pt(10.0));
        let request = FontSizeRequest::Length {
            value: Fixed16::from_i32(2),
            unit: LengthUnit::Ex,
        };
        let size = resolve_font_size(&config, parent, request);
        assert!(close(size.value, 12.0));
        assert_eq!(size.unit, LengthUnit::Pt);
    }

    #[test]
    fn test_percent_of_parent() {
        let config = FontSizeConfig::default();
        let parent = Some(FontSize::pt(12.0));
        let request = FontSizeRequest::Length {
            value: Fixed16::from_i32(50),
            unit: LengthUnit::Percent,
        };
        let size = resolve_font_size(&config, parent, request);
        assert_eq!(size, FontSize::pt(6.0));
    }

    #[test]
    fn test_absolute_passes_through() {
        let config = FontSizeConfig::default();
        let parent = Some(FontSize::pt(12.0));
        let request = FontSizeRequest::Length {
            value: Fixed16::from_i32(30),
            unit: LengthUnit::Px,
        };
        let size = resolve_font_size(&config, parent, request);
        assert_eq!(size.value, Fixed16::from_i32(30));
        assert_eq!(size.unit, LengthUnit::Px);
    }

    #[test]
    fn test_deep_em_chain_is_exact() {
        // medium is 12pt; 1em inherited repeatedly must stay exactly 12pt.
        let config = FontSizeConfig::default();
        let one_em = FontSizeRequest::Length {
            value: Fixed16::ONE,
            unit: LengthUnit::Em,
        };
        let mut size = resolve_font_size(&config, None, FontSizeRequest::Keyword(SizeKeyword::Medium));
        for _ in 0..50 {
            size = resolve_font_size(&config, Some(size), one_em);
        }
        assert_eq!(size, FontSize::pt(12.0));
    }
}
