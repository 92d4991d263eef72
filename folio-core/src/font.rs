//! Font registry types.
//!
//! Font loading and shaping live outside this crate; renderers only need a
//! name-to-data map and a way to resolve the fallback entry.

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};

/// Name of the built-in default font.
pub const DEFAULT_FONT_NAME: &str = "Roboto";

/// One registered font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    /// Raw font program bytes. May be empty when the host resolves the font
    /// itself (for example a surface target using installed fonts).
    pub data: Vec<u8>,
    /// Whether this font is the fallback for schemas that name no font.
    pub fallback: bool,
    /// Whether the document target may subset this font on embed.
    pub subset: bool,
}

impl Font {
    /// Create a font entry from raw bytes.
    #[must_use]
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            fallback: false,
            subset: true,
        }
    }

    /// Mark this font as the fallback entry.
    #[must_use]
    pub fn with_fallback(mut self, fallback: bool) -> Self {
        self.fallback = fallback;
        self
    }
}

/// Available fonts keyed by name.
pub type FontMap = HashMap<String, Font>;

/// The font map used when the caller supplies none: a single default entry
/// flagged as fallback, with data resolved by the host.
#[must_use]
pub fn default_font() -> FontMap {
    let mut fonts = FontMap::new();
    fonts.insert(
        DEFAULT_FONT_NAME.to_string(),
        Font::new(Vec::new()).with_fallback(true),
    );
    fonts
}

/// Resolve the name of the fallback font.
///
/// Exactly one entry must be flagged as fallback; anything else is a
/// configuration error surfaced to the caller.
///
/// # Errors
///
/// Returns [`CoreError::FallbackFont`] when zero or multiple entries carry
/// the fallback flag.
pub fn fallback_font_name(fonts: &FontMap) -> CoreResult<&str> {
    let mut names = fonts
        .iter()
        .filter(|(_, font)| font.fallback)
        .map(|(name, _)| name.as_str());

    match (names.next(), names.next()) {
        (Some(name), None) => Ok(name),
        (None, _) => Err(CoreError::FallbackFont(
            "no font is flagged as fallback".to_string(),
        )),
        (Some(_), Some(_)) => Err(CoreError::FallbackFont(
            "multiple fonts are flagged as fallback".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_font_has_one_fallback() {
        let fonts = default_font();

        assert_eq!(fonts.len(), 1);
        assert_eq!(
            fallback_font_name(&fonts).expect("should resolve"),
            DEFAULT_FONT_NAME
        );
    }

    #[test]
    fn test_fallback_resolution() {
        let mut fonts = FontMap::new();
        fonts.insert("Serif".to_string(), Font::new(vec![1, 2, 3]));
        fonts.insert(
            "Sans".to_string(),
            Font::new(vec![4, 5]).with_fallback(true),
        );

        assert_eq!(fallback_font_name(&fonts).expect("should resolve"), "Sans");
    }

    #[test]
    fn test_missing_fallback_is_an_error() {
        let mut fonts = FontMap::new();
        fonts.insert("Serif".to_string(), Font::new(Vec::new()));

        assert!(fallback_font_name(&fonts).is_err());
    }

    #[test]
    fn test_multiple_fallbacks_are_an_error() {
        let mut fonts = FontMap::new();
        fonts.insert("A".to_string(), Font::new(Vec::new()).with_fallback(true));
        fonts.insert("B".to_string(), Font::new(Vec::new()).with_fallback(true));

        assert!(fallback_font_name(&fonts).is_err());
    }
}
