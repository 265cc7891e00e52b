use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::RgbaImage;

/// A parse error in a text atlas description.
#[derive(Debug, Clone, PartialEq)]
pub struct AtlasParseError {
    pub message: String,
    /// 1-based line number.
    pub line: usize,
}

impl AtlasParseError {
    fn new(msg: impl Into<String>, line: usize) -> Self {
        Self { message: msg.into(), line }
    }
}

impl fmt::Display for AtlasParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "atlas parse error at line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for AtlasParseError {}

/// Where the pixels of an atlas page come from.
#[derive(Debug, Clone)]
pub enum PageSource {
    /// Image file, decoded on first use.
    File(PathBuf),
    /// Already decoded pixels.
    Memory(RgbaImage),
}

#[derive(Debug, Clone)]
pub struct AtlasPage {
    pub source: PageSource,
    /// Declared page size, if the atlas file states one.
    pub size: Option<(u32, u32)>,
}

/// A region as declared by its atlas; `page` indexes [`TextureAtlas::pages`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtlasRegion {
    pub name: String,
    pub page: usize,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Pages plus the named regions packed into them.
///
/// Built either by hand (`add_page` / `add_region`) or from a libGDX-style text
/// atlas: a page image name, optional `key: value` page fields, then region
/// names each followed by indented `xy`/`size` (or `bounds`) fields. A blank
/// line starts the next page.
#[derive(Debug, Clone, Default)]
pub struct TextureAtlas {
    pages: Vec<AtlasPage>,
    regions: Vec<AtlasRegion>,
}

impl TextureAtlas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads and parses an atlas file. Page paths resolve relative to it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read atlas {}", path.display()))?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));

        let atlas = Self::parse(&text, base)
            .with_context(|| format!("failed to parse atlas {}", path.display()))?;

        log::debug!(
            "TextureAtlas: loaded {} ({} pages, {} regions)",
            path.display(),
            atlas.pages.len(),
            atlas.regions.len()
        );
        Ok(atlas)
    }

    pub fn parse(text: &str, base_dir: &Path) -> Result<Self, AtlasParseError> {
        let mut atlas = TextureAtlas::new();
        let mut expect_page = true;
        let mut open: Option<(PendingRegion, usize)> = None;

        for (index, raw) in text.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.trim();

            if line.is_empty() {
                if let Some((region, at)) = open.take() {
                    atlas.regions.push(region.finish(at)?);
                }
                expect_page = true;
                continue;
            }

            match line.split_once(':') {
                Some((key, value)) => {
                    let key = key.trim();
                    let value = value.trim();
                    match open.as_mut() {
                        Some((region, _)) => region.field(key, value, line_no)?,
                        None => atlas.page_field(key, value, line_no)?,
                    }
                }
                None if expect_page => {
                    atlas.add_page(PageSource::File(base_dir.join(line)));
                    expect_page = false;
                }
                None => {
                    if let Some((region, at)) = open.take() {
                        atlas.regions.push(region.finish(at)?);
                    }
                    let page = atlas
                        .pages
                        .len()
                        .checked_sub(1)
                        .ok_or_else(|| AtlasParseError::new("region declared before any page", line_no))?;
                    open = Some((PendingRegion::new(line, page), line_no));
                }
            }
        }

        if let Some((region, at)) = open.take() {
            atlas.regions.push(region.finish(at)?);
        }

        Ok(atlas)
    }

    /// Adds a page and returns its index.
    pub fn add_page(&mut self, source: PageSource) -> usize {
        let size = match &source {
            PageSource::Memory(img) => Some(img.dimensions()),
            PageSource::File(_) => None,
        };
        self.pages.push(AtlasPage { source, size });
        self.pages.len() - 1
    }

    pub fn add_region(&mut self, name: impl Into<String>, page: usize, x: u32, y: u32, width: u32, height: u32) {
        self.regions.push(AtlasRegion { name: name.into(), page, x, y, width, height });
    }

    #[inline]
    pub fn pages(&self) -> &[AtlasPage] {
        &self.pages
    }

    #[inline]
    pub fn regions(&self) -> &[AtlasRegion] {
        &self.regions
    }

    fn page_field(&mut self, key: &str, value: &str, line: usize) -> Result<(), AtlasParseError> {
        let Some(page) = self.pages.last_mut() else {
            return Err(AtlasParseError::new(format!("field '{key}' outside of a page"), line));
        };
        // format, filter, repeat, pma and scale only matter to a GPU uploader.
        if key == "size" {
            let [w, h] = parse_ints::<2>(value, line)?;
            page.size = Some((w, h));
        }
        Ok(())
    }
}

struct PendingRegion {
    name: String,
    page: usize,
    xy: Option<[u32; 2]>,
    size: Option<[u32; 2]>,
}

impl PendingRegion {
    fn new(name: &str, page: usize) -> Self {
        Self { name: name.to_string(), page, xy: None, size: None }
    }

    fn field(&mut self, key: &str, value: &str, line: usize) -> Result<(), AtlasParseError> {
        match key {
            "xy" => self.xy = Some(parse_ints::<2>(value, line)?),
            "size" => self.size = Some(parse_ints::<2>(value, line)?),
            "bounds" => {
                let [x, y, w, h] = parse_ints::<4>(value, line)?;
                self.xy = Some([x, y]);
                self.size = Some([w, h]);
            }
            "rotate" if value != "false" && value != "0" => {
                return Err(AtlasParseError::new(
                    format!("region '{}' is rotated; rotated regions are not supported", self.name),
                    line,
                ));
            }
            _ => {}
        }
        Ok(())
    }

    fn finish(self, line: usize) -> Result<AtlasRegion, AtlasParseError> {
        let (Some([x, y]), Some([width, height])) = (self.xy, self.size) else {
            return Err(AtlasParseError::new(
                format!("region '{}' has no position or size", self.name),
                line,
            ));
        };
        Ok(AtlasRegion { name: self.name, page: self.page, x, y, width, height })
    }
}

fn parse_ints<const N: usize>(value: &str, line: usize) -> Result<[u32; N], AtlasParseError> {
    let mut out = [0u32; N];
    let mut parts = value.split(',').map(str::trim);
    for slot in out.iter_mut() {
        let part = parts
            .next()
            .ok_or_else(|| AtlasParseError::new(format!("expected {N} values, got '{value}'"), line))?;
        *slot = part
            .parse()
            .map_err(|_| AtlasParseError::new(format!("'{part}' is not a non-negative integer"), line))?;
    }
    if parts.next().is_some() {
        return Err(AtlasParseError::new(format!("expected {N} values, got '{value}'"), line));
    }
    Ok(out)
}
