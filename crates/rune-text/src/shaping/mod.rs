//! Single-run shaping used to obtain per-character advances.

pub mod shaper;

pub use shaper::{ShapedRun, TextShaper};
