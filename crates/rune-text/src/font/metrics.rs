/// Font-level metrics in font units.
#[derive(Debug, Clone, Copy)]
pub struct FontMetrics {
    /// Ascent above baseline (positive).
    pub ascent: f32,
    /// Descent below baseline (positive).
    pub descent: f32,
    /// Line gap (leading).
    pub line_gap: f32,
    /// Units per em.
    pub units_per_em: u16,
}

impl FontMetrics {
    /// Scale metrics to pixel size, where `font_size` is in logical pixels
    /// (px per em).
    pub fn scale_to_pixels(&self, font_size: f32) -> ScaledFontMetrics {
        ScaledFontMetrics {
            ascent: self.ascent * self.scale(font_size),
            descent: self.descent * self.scale(font_size),
            line_gap: self.line_gap * self.scale(font_size),
            font_size,
        }
    }

    /// Factor converting design units to pixels at `font_size`.
    pub fn scale(&self, font_size: f32) -> f32 {
        if self.units_per_em != 0 {
            font_size / f32::from(self.units_per_em)
        } else {
            1.0
        }
    }
}

/// Scaled font metrics in pixels.
#[derive(Debug, Clone, Copy)]
pub struct ScaledFontMetrics {
    pub ascent: f32,
    pub descent: f32,
    pub line_gap: f32,
    pub font_size: f32,
}

impl ScaledFontMetrics {
    /// Height of the glyph content area (ascent + descent), the box an
    /// inline run occupies inside its line.
    pub fn content_height(&self) -> f32 {
        self.ascent + self.descent
    }
}
