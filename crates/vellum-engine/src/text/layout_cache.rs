use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::{TextLayout, TextShaper};
use crate::error::RenderError;

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
struct LayoutKey {
    font: Option<String>,
    text: String,
}

/// Two-generation cache of shaped text keyed by `(font, text)`.
///
/// Lookups hit the current frame's generation first, then promote entries from
/// the previous frame. [`end_frame`](Self::end_frame) discards whatever the
/// previous generation still holds, so a layout survives exactly as long as
/// it keeps being drawn.
#[derive(Debug, Default)]
pub struct LayoutCache {
    current: HashMap<LayoutKey, TextLayout>,
    previous: HashMap<LayoutKey, TextLayout>,
}

impl LayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_shape(
        &mut self,
        shaper: &dyn TextShaper,
        font: Option<&str>,
        text: &str,
    ) -> Result<&TextLayout, RenderError> {
        let key = LayoutKey { font: font.map(str::to_owned), text: text.to_owned() };

        match self.current.entry(key) {
            Entry::Occupied(e) => Ok(e.into_mut()),
            Entry::Vacant(e) => {
                let layout = match self.previous.remove(e.key()) {
                    Some(layout) => layout,
                    None => shaper.layout(font, text)?,
                };
                Ok(e.insert(layout))
            }
        }
    }

    /// Rotates generations: this frame's layouts become the previous frame's.
    pub fn end_frame(&mut self) {
        std::mem::swap(&mut self.current, &mut self.previous);
        self.current.clear();
    }

    /// Number of layouts held across both generations.
    pub fn len(&self) -> usize {
        self.current.len() + self.previous.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
