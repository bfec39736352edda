use std::sync::Arc;

use hashbrown::HashMap;

use crate::font::{FontCache, FontFace, Result};
use crate::layout::{Point, flow_text};
use crate::quirks::QuirkProfile;
use crate::shaping::TextShaper;

use super::{
    LayoutSurface, LineGeometry, RunStyle, SurfaceLayout, TextBlock, char_cell_at, place_lines,
};

/// Advance cache key: family, run text and font size bits.
type RunKey = (String, String, u32);

/// Surface backed by real font data: advances come from harfrust shaping
/// and line boxes from the face's scaled ascent and descent.
///
/// Family names are resolved through a [`FontCache`]; unknown families
/// render with the surface's default face.
#[derive(Debug)]
pub struct FontSurface {
    fonts: FontCache,
    default_face: Arc<FontFace>,
    origin: Point,
    quirks: QuirkProfile,
    advances: HashMap<RunKey, Vec<f32>>,
}

impl FontSurface {
    /// Surface that renders every family with `face`.
    pub fn new(face: Arc<FontFace>) -> Self {
        Self::with_fonts(FontCache::new(), face)
    }

    /// Surface resolving families through `fonts`, using `family` as the
    /// default face.
    pub fn from_family(mut fonts: FontCache, family: &str) -> Result<Self> {
        let face = fonts.resolve_family(family)?;
        Ok(Self::with_fonts(fonts, face))
    }

    fn with_fonts(fonts: FontCache, default_face: Arc<FontFace>) -> Self {
        Self {
            fonts,
            default_face,
            origin: Point::zero(),
            quirks: QuirkProfile::default(),
            advances: HashMap::new(),
        }
    }

    pub fn with_quirks(mut self, quirks: QuirkProfile) -> Self {
        self.quirks = quirks;
        self
    }

    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    fn face_for(&mut self, family: &str) -> Arc<FontFace> {
        match self.fonts.resolve_family(family) {
            Ok(face) => face,
            Err(err) => {
                log::debug!("using default face for {family:?}: {err}");
                self.default_face.clone()
            }
        }
    }

    fn run_advances(&mut self, run: &str, family: &str, font_size: f32) -> Vec<f32> {
        let key = (family.to_string(), run.to_string(), font_size.to_bits());
        if let Some(cached) = self.advances.get(&key) {
            return cached.clone();
        }

        let face = self.face_for(family);
        let advances = match TextShaper::shape_ltr(run, 0..run.len(), &face, font_size) {
            Some(shaped) => shaped.char_advances(run),
            None => {
                log::warn!("harfrust could not read face for {family:?}; estimating advances");
                vec![font_size * 0.6; run.chars().count()]
            }
        };
        self.advances.insert(key, advances.clone());
        advances
    }
}

impl LayoutSurface for FontSurface {
    fn layout(&mut self, block: &TextBlock<'_>) -> SurfaceLayout {
        self.advances.clear();

        let style = block.style;
        let face = self.face_for(style.font_family);
        let geometry = LineGeometry {
            line_px: style.font_size * block.line_height,
            content_px: face.scaled_metrics(style.font_size).content_height(),
        };
        let lines = flow_text(block.text, block.width, |line| {
            self.run_advances(line, style.font_family, style.font_size)
        });
        place_lines(block, &lines, geometry, self.origin, self.quirks)
    }

    fn char_index_at(&mut self, run: &str, style: &RunStyle<'_>, point: Point) -> Option<usize> {
        if run.is_empty() {
            return None;
        }
        let advances = self.run_advances(run, style.font_family, style.font_size);
        char_cell_at(&advances, point.x)
    }

    fn quirks(&self) -> QuirkProfile {
        self.quirks
    }
}
