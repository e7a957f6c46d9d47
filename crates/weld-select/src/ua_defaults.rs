//! User-Agent Property Defaults
//!
//! Hard-coded fallbacks the engine consults before falling back to its own
//! initial values. Only a handful of properties have one; everything else
//! answers `None`, which is a normal outcome, not a fault.

/// Properties the engine may request a user-agent default for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyId {
    // Text & fonts
    Color,
    FontFamily,
    FontSize,
    FontStyle,
    FontWeight,
    LineHeight,
    TextAlign,
    Quotes,
    VoiceFamily,

    // Box model
    Display,
    Position,
    Width,
    Height,
    Margin,
    Padding,
    BorderWidth,
    BorderColor,

    // Paint
    BackgroundColor,
    Opacity,
    Visibility,
    ZIndex,
}

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 255 };

    /// Packed 0xAARRGGBB.
    pub fn to_argb(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

/// Generic font families a default can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenericFamily {
    Serif,
    SansSerif,
    Monospace,
    Cursive,
    Fantasy,
}

/// A built-in user-agent default value.
#[derive(Debug, Clone, PartialEq)]
pub enum UaDefault {
    /// Initial text color.
    Color(Color),
    /// Generic family only; no concrete font names are configured.
    FontFamily(GenericFamily),
    /// No quote marks.
    QuotesNone,
    /// No voice family.
    VoiceFamilyNone,
}

/// The user-agent default for `property`, or `None` when the property has
/// no built-in default and the engine should use its own.
pub fn ua_default_for_property(property: PropertyId) -> Option<UaDefault> {
    match property {
        PropertyId::Color => Some(UaDefault::Color(Color::BLACK)),
        PropertyId::FontFamily => Some(UaDefault::FontFamily(GenericFamily::SansSerif)),
        PropertyId::Quotes => Some(UaDefault::QuotesNone),
        PropertyId::VoiceFamily => Some(UaDefault::VoiceFamilyNone),
        _ => None,
    }
}
