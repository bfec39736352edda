use std::path::{Path, PathBuf};
use std::sync::Arc;

use fontdb::{Database, Family, Query};
use hashbrown::HashMap;

use crate::font::{FontError, FontFace, Result};

/// Key for identifying a file-backed font within the cache.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct FontKey {
    /// Path to the font file on disk.
    pub path: PathBuf,
    /// Font index within the file (for collections).
    pub index: u32,
}

impl FontKey {
    pub fn new(path: impl AsRef<Path>, index: u32) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            index,
        }
    }
}

/// In-memory font cache.
///
/// Faces are found either by explicit file path or by CSS-style family
/// name through a `fontdb` database, falling back to the database's
/// sans-serif family when the name is unknown.
#[derive(Debug, Default)]
pub struct FontCache {
    files: HashMap<FontKey, Arc<FontFace>>,
    families: HashMap<String, Arc<FontFace>>,
    db: Database,
}

impl FontCache {
    /// Empty cache with an empty font database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache whose database is populated with the system fonts.
    pub fn with_system_fonts() -> Self {
        let mut cache = Self::new();
        cache.db.load_system_fonts();
        log::debug!("font database loaded {} faces", cache.face_count());
        cache
    }

    /// Number of faces in the family database.
    pub fn face_count(&self) -> usize {
        self.db.len()
    }

    /// Register in-memory font data for family lookups.
    pub fn load_font_data(&mut self, data: Vec<u8>) {
        self.db.load_font_data(data);
        self.families.clear();
    }

    /// Get a font face from the cache or load it from disk.
    pub fn get_or_load(&mut self, path: impl AsRef<Path>, index: u32) -> Result<Arc<FontFace>> {
        let key = FontKey::new(&path, index);
        if let Some(face) = self.files.get(&key) {
            return Ok(face.clone());
        }

        let face = Arc::new(FontFace::from_path(&key.path, index as usize)?);
        self.files.insert(key, face.clone());
        Ok(face)
    }

    /// Resolve a family name (case-insensitive) to a face, falling back to
    /// sans-serif.
    pub fn resolve_family(&mut self, family: &str) -> Result<Arc<FontFace>> {
        let name = family.trim().to_ascii_lowercase();
        if let Some(face) = self.families.get(&name) {
            return Ok(face.clone());
        }

        let families = [Family::Name(family.trim()), Family::SansSerif];
        let query = Query {
            families: &families,
            ..Query::default()
        };
        let id = self
            .db
            .query(&query)
            .or_else(|| self.fallback_face())
            .ok_or_else(|| FontError::FamilyNotFound(family.to_string()))?;
        let face = self
            .db
            .with_face_data(id, |data, index| FontFace::from_vec(data.to_vec(), index as usize))
            .ok_or_else(|| FontError::FamilyNotFound(family.to_string()))??;

        let face = Arc::new(face);
        self.families.insert(name, face.clone());
        Ok(face)
    }

    /// Any loaded face, preferring a sans family, for databases whose
    /// generic sans-serif name is not installed.
    fn fallback_face(&self) -> Option<fontdb::ID> {
        let is_sans = |info: &&fontdb::FaceInfo| {
            info.families.iter().any(|(name, _)| {
                let name = name.to_ascii_lowercase();
                name.contains("sans") && !name.contains("mono")
            })
        };
        let face = self
            .db
            .faces()
            .find(is_sans)
            .or_else(|| self.db.faces().next())?;
        log::debug!("falling back to font family {:?}", face.families.first().map(|(n, _)| n));
        Some(face.id)
    }
}
