pub mod face;
pub mod loader;
pub mod metrics;

pub use face::FontFace;
pub use loader::{FontCache, FontKey};
pub use metrics::{FontMetrics, ScaledFontMetrics};

use thiserror::Error;

/// Errors that can occur while working with fonts.
#[derive(Error, Debug)]
pub enum FontError {
    #[error("font I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid font data")]
    InvalidFont,
    #[error("no font face matches family {0:?}")]
    FamilyNotFound(String),
}

/// Convenient result alias for font-related operations.
pub type Result<T> = std::result::Result<T, FontError>;

/// A sans face from the system fonts; `None` on machines without fonts.
#[cfg(test)]
pub(crate) fn system_face() -> Option<std::sync::Arc<FontFace>> {
    let mut cache = FontCache::with_system_fonts();
    if cache.face_count() == 0 {
        return None;
    }
    cache.resolve_family("sans-serif").ok()
}
