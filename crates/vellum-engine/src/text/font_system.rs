use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};

use super::{GlyphPlacement, TextLayout, TextShaper};
use crate::error::RenderError;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

struct NamedFont {
    font: fontdue::Font,
    px: f32,
}

/// Fonts registered by name, each at a fixed pixel size.
///
/// The first font loaded becomes the default unless [`set_default`] picks
/// another one.
///
/// [`set_default`]: FontSystem::set_default
#[derive(Default)]
pub struct FontSystem {
    fonts: HashMap<String, NamedFont>,
    default: Option<String>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a TrueType or OpenType font and registers it as `name`.
    pub fn load_font(&mut self, name: &str, bytes: &[u8], px: f32) -> Result<(), FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        self.fonts.insert(name.to_string(), NamedFont { font, px });
        if self.default.is_none() {
            self.default = Some(name.to_string());
        }
        log::debug!("FontSystem: loaded '{name}' at {px}px");
        Ok(())
    }

    /// Reads a font file and registers it as `name`.
    pub fn load_font_file(&mut self, name: &str, path: impl AsRef<Path>, px: f32) -> Result<()> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).with_context(|| format!("failed to read font {}", path.display()))?;
        self.load_font(name, &bytes, px)
            .with_context(|| format!("failed to parse font {}", path.display()))?;
        Ok(())
    }

    pub fn set_default(&mut self, name: &str) -> Result<(), RenderError> {
        if !self.fonts.contains_key(name) {
            return Err(RenderError::UnknownFont(name.to_string()));
        }
        self.default = Some(name.to_string());
        Ok(())
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.fonts.contains_key(name)
    }

    fn resolve(&self, font: Option<&str>) -> Result<&NamedFont, RenderError> {
        let name = match font {
            Some(name) => name,
            None => self
                .default
                .as_deref()
                .ok_or_else(|| RenderError::UnknownFont("<default>".to_string()))?,
        };
        self.fonts
            .get(name)
            .ok_or_else(|| RenderError::UnknownFont(name.to_string()))
    }
}

impl TextShaper for FontSystem {
    fn layout(&self, font: Option<&str>, text: &str) -> Result<TextLayout, RenderError> {
        use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

        let named = self.resolve(font)?;
        let px = named.px;

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[&named.font], &TextStyle::new(text, px, 0));

        let glyphs: Vec<GlyphPlacement> = layout
            .glyphs()
            .iter()
            .map(|g| GlyphPlacement {
                ch: g.parent,
                x: g.x,
                y: g.y,
                width: g.width as f32,
                height: g.height as f32,
            })
            .collect();

        // Width is the pen extent (origin to advance of the last glyph) rather
        // than the right edge of the last bitmap, so trailing spaces count.
        let width = layout
            .glyphs()
            .iter()
            .map(|g| {
                let m = named.font.metrics_indexed(g.key.glyph_index, px);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max);
        let height = layout.height().max(px);

        Ok(TextLayout { width, height, glyphs })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_fail_to_load() {
        let mut fonts = FontSystem::new();
        let err = fonts.load_font("bad", b"definitely not a font", 16.0).unwrap_err();
        assert!(err.to_string().starts_with("font load error"));
        assert!(!fonts.contains("bad"));
    }

    #[test]
    fn layout_without_fonts_reports_missing_default() {
        let fonts = FontSystem::new();
        assert_eq!(
            fonts.layout(None, "hi"),
            Err(RenderError::UnknownFont("<default>".into()))
        );
    }

    #[test]
    fn unknown_named_font_is_an_error() {
        let mut fonts = FontSystem::new();
        assert_eq!(fonts.set_default("serif"), Err(RenderError::UnknownFont("serif".into())));
        assert_eq!(
            fonts.layout(Some("serif"), "hi"),
            Err(RenderError::UnknownFont("serif".into()))
        );
    }

    #[test]
    fn missing_font_file_has_context() {
        let mut fonts = FontSystem::new();
        let err = fonts.load_font_file("ui", "no/such/font.ttf", 14.0).unwrap_err();
        assert!(format!("{err:#}").contains("no/such/font.ttf"));
    }
}
