use core::ops::Range;

use harfrust::{
    Direction as HbDirection, FontRef as HbFontRef, Script as HbScript, ShaperData,
    ShaperInstance, Tag as HbTag, UnicodeBuffer as HbUnicodeBuffer,
};

use crate::font::FontFace;

/// A run of text shaped with a single font.
#[derive(Debug, Clone)]
pub struct ShapedRun {
    /// Byte range in source text.
    pub text_range: Range<usize>,
    /// Font size in pixels.
    pub font_size: f32,
    /// Glyph advances in pixels.
    pub advances: Vec<f32>,
    /// Byte offset (relative to `text_range.start`) of the cluster each
    /// glyph belongs to.
    pub clusters: Vec<u32>,
    /// Total advance width of the run in pixels.
    pub width: f32,
}

impl ShapedRun {
    /// Distribute glyph advances over the chars of `text` (the shaped
    /// string). A cluster's advance goes to its first char; the remaining
    /// chars of a ligature or combining sequence get zero.
    pub fn char_advances(&self, text: &str) -> Vec<f32> {
        let starts: Vec<usize> = text.char_indices().map(|(byte, _)| byte).collect();
        let mut out = vec![0.0; starts.len()];
        for (advance, cluster) in self.advances.iter().zip(&self.clusters) {
            let byte = *cluster as usize;
            let idx = match starts.binary_search(&byte) {
                Ok(i) => i,
                Err(i) => i.saturating_sub(1),
            };
            if let Some(slot) = out.get_mut(idx) {
                *slot += advance;
            }
        }
        out
    }
}

/// Text shaper built on harfrust (pure-Rust HarfBuzz port).
///
/// Handles single-font, left-to-right Latin runs with kerning and
/// ligatures.
pub struct TextShaper;

impl TextShaper {
    /// Shape a UTF-8 string with the given font and size. Returns `None`
    /// when harfrust cannot read the font data.
    pub fn shape_ltr(
        text: &str,
        text_range: Range<usize>,
        font: &FontFace,
        font_size: f32,
    ) -> Option<ShapedRun> {
        let font_data = font.as_bytes();
        let font_ref = HbFontRef::from_index(&font_data, font.index()).ok()?;

        let data = ShaperData::new(&font_ref);
        let instance =
            ShaperInstance::from_variations(&font_ref, core::iter::empty::<harfrust::Variation>());
        let shaper = data
            .shaper(&font_ref)
            .instance(Some(&instance))
            .point_size(None)
            .build();

        let mut buffer = HbUnicodeBuffer::new();
        buffer.push_str(text);
        buffer.set_direction(HbDirection::LeftToRight);
        if let Some(script) = HbScript::from_iso15924_tag(HbTag::new(b"Latn")) {
            buffer.set_script(script);
        }
        buffer.guess_segment_properties();

        let glyph_buffer = shaper.shape(buffer, &[]);
        let infos = glyph_buffer.glyph_infos();
        let positions = glyph_buffer.glyph_positions();

        // harfrust reports design units.
        let scale = font.metrics().scale(font_size);

        let mut advances = Vec::with_capacity(infos.len());
        let mut clusters = Vec::with_capacity(infos.len());
        let mut width = 0.0f32;
        for (info, pos) in infos.iter().zip(positions.iter()) {
            let x_advance = pos.x_advance as f32 * scale;
            advances.push(x_advance);
            clusters.push(info.cluster);
            width += x_advance;
        }

        Some(ShapedRun {
            text_range,
            font_size,
            advances,
            clusters,
            width,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(advances: Vec<f32>, clusters: Vec<u32>) -> ShapedRun {
        let width = advances.iter().sum();
        ShapedRun {
            text_range: 0..0,
            font_size: 12.0,
            advances,
            clusters,
            width,
        }
    }

    #[test]
    fn ligature_advance_lands_on_first_char() {
        // "ffi" shaped as a single ligature glyph.
        let shaped = run(vec![9.0, 4.0], vec![0, 3]);
        assert_eq!(shaped.char_advances("ffix"), vec![9.0, 0.0, 0.0, 4.0]);
    }

    #[test]
    fn shapes_with_a_system_face() {
        let Some(face) = crate::font::system_face() else {
            eprintln!("no system fonts installed; skipping");
            return;
        };

        let text = "office cafe\u{301}";
        let shaped = TextShaper::shape_ltr(text, 0..text.len(), &face, 20.0).unwrap();
        assert!(shaped.width > 0.0);
        assert!((shaped.advances.iter().sum::<f32>() - shaped.width).abs() < 1e-3);

        let per_char = shaped.char_advances(text);
        assert_eq!(per_char.len(), text.chars().count());
        assert!((per_char.iter().sum::<f32>() - shaped.width).abs() < 1e-3);
        assert!(per_char[0] > 0.0);
    }

    #[test]
    fn multibyte_clusters_map_to_char_indices() {
        let shaped = run(vec![5.0, 6.0, 7.0], vec![0, 2, 3]);
        assert_eq!(shaped.char_advances("éab"), vec![5.0, 6.0, 7.0]);
    }
}
