//! rune-text: text measurement and line wrapping for Rune Draw text boxes.
//!
//! - `surface`: layout surfaces a text block is measured against
//! - `measure`: normalized line geometry of a text box ([`Measurement`])
//! - `wrap`: assignment of text fragments to measured lines
//! - `quirks`: the per-engine wrapping rules both of the above follow
//! - `font`, `shaping`: font loading and harfrust shaping for [`FontSurface`]

pub mod font;
pub mod layout;
pub mod measure;
pub mod quirks;
pub mod shaping;
pub mod surface;
pub mod wrap;

pub use font::{FontCache, FontError, FontFace, FontKey, FontMetrics, ScaledFontMetrics};
pub use layout::{Point, Rect, TextAlign};
pub use measure::{LineRect, MeasureContext, Measurement, TextBlockStyle};
pub use quirks::{ParseQuirkError, QuirkProfile, SoftBreakTrim};
pub use surface::{
    FontSurface, LayoutSurface, MonospaceSurface, RunStyle, SurfaceLayout, TextBlock,
};
pub use wrap::{WrappedLine, wrap_lines};
