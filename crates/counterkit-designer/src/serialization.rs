//! Serialization and deserialization for layout files.
//!
//! Piece records are plain JSON objects with camelCase keys (`borderRadius`,
//! `edgePrice`, ...). A [`LayoutDocument`] wraps the records with a format
//! version and timestamps for on-disk use.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use counterkit_core::LayoutError;

use crate::layout_store::LayoutStore;
use crate::model::Piece;

/// Layout file format version
const FILE_FORMAT_VERSION: &str = "1.0";

/// Parses a JSON array of piece records, checking each piece's dimensions.
pub fn pieces_from_json(json: &str) -> counterkit_core::Result<Vec<Piece>> {
    let pieces: Vec<Piece> = serde_json::from_str(json)?;
    for piece in &pieces {
        piece.validate_dimensions()?;
    }
    Ok(pieces)
}

/// Emits piece records as a pretty-printed JSON array.
pub fn pieces_to_json(pieces: &[Piece]) -> counterkit_core::Result<String> {
    Ok(serde_json::to_string_pretty(pieces)?)
}

/// Complete layout file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutDocument {
    pub version: String,
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    pub pieces: Vec<Piece>,
}

impl LayoutDocument {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            name: name.into(),
            created: now,
            modified: now,
            pieces: Vec::new(),
        }
    }

    /// Captures the store's current pieces.
    pub fn from_store(name: impl Into<String>, store: &LayoutStore) -> Self {
        let mut doc = Self::new(name);
        doc.pieces = store.pieces().to_vec();
        doc
    }

    /// Loads the document's pieces into `store` and starts a fresh history.
    pub fn apply_to(&self, store: &mut LayoutStore) -> Result<(), LayoutError> {
        store.load_layout(self.pieces.clone())?;
        store.reset_history();
        store.mark_saved();
        Ok(())
    }

    /// Save layout to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize layout")?;

        std::fs::write(path.as_ref(), json).context("Failed to write layout file")?;

        Ok(())
    }

    /// Load layout from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read layout file")?;

        let mut doc: LayoutDocument =
            serde_json::from_str(&content).context("Failed to parse layout file")?;

        if doc.version != FILE_FORMAT_VERSION {
            tracing::warn!(
                "Layout file version {} differs from {}",
                doc.version,
                FILE_FORMAT_VERSION
            );
        }
        doc.modified = Utc::now();

        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PieceDimensions;

    #[test]
    fn test_pieces_from_json() {
        let json = r##"[
            {"id": 1, "x": 0, "y": 0, "width": 72, "height": 24, "depth": 1.5,
             "rotation": 90, "borderRadius": 4, "color": "#ffffff", "pattern": "granite",
             "edge": "bullnose", "edgePrice": 12.5}
        ]"##;
        let pieces = pieces_from_json(json).unwrap();
        assert_eq!(pieces.len(), 1);
        assert_eq!(pieces[0].border_radius, 4.0);
        assert_eq!(pieces[0].finish.edge_profile.as_deref(), Some("bullnose"));
        assert_eq!(pieces[0].finish.edge_price, Some(12.5));
    }

    #[test]
    fn test_pieces_from_json_rejects_bad_dimension() {
        let json = r#"[{"id": 1, "x": 0, "y": 0, "width": 0, "height": 24, "depth": 1.5}]"#;
        let err = pieces_from_json(json).unwrap_err();
        assert!(err.is_layout_error());
        assert!(pieces_from_json("not json").is_err());
    }

    #[test]
    fn test_pieces_json_keys() {
        let pieces = vec![Piece::new(3, 1.0, 2.0, PieceDimensions::new(30.0, 20.0, 1.5))];
        let json = pieces_to_json(&pieces).unwrap();
        assert!(json.contains("\"borderRadius\""));
        assert!(!json.contains("edgePrice"));
        assert_eq!(pieces_from_json(&json).unwrap(), pieces);
    }

    #[test]
    fn test_document_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kitchen.json");

        let mut store = LayoutStore::new();
        store
            .add_new_piece(0.0, 0.0, PieceDimensions::new(72.0, 24.0, 1.5))
            .unwrap();
        let doc = LayoutDocument::from_store("Kitchen", &store);
        doc.save_to_file(&path).unwrap();

        let loaded = LayoutDocument::load_from_file(&path).unwrap();
        assert_eq!(loaded.version, "1.0");
        assert_eq!(loaded.name, "Kitchen");
        assert_eq!(loaded.created, doc.created);
        assert_eq!(loaded.pieces, doc.pieces);

        let mut other = LayoutStore::new();
        loaded.apply_to(&mut other).unwrap();
        assert_eq!(other.pieces(), store.pieces());
        assert!(!other.is_modified());
        assert!(!other.can_undo());
    }

    #[test]
    fn test_load_missing_file_has_context() {
        let dir = tempfile::tempdir().unwrap();
        let err = LayoutDocument::load_from_file(dir.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read layout file"));
    }
}
