//! # Layout Template Module
//!
//! Ready-made countertop arrangements and user-saved layouts.
//!
//! Features:
//! - Built-in L-shaped and U-shaped kitchen layouts
//! - Save the current pieces as a named template
//! - Name/description search
//! - JSON persistence of user templates (built-ins are never written out)
//!
//! Templates own their pieces; applying one copies the pieces into the
//! layout store, so later edits never reach back into the template.

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use counterkit_core::LayoutError;

use crate::layout_store::LayoutStore;
use crate::model::{Piece, PieceDimensions};

/// Named set of pieces that can replace the current layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub pieces: Vec<Piece>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip)]
    pub builtin: bool,
}

impl LayoutTemplate {
    /// Creates a user template from a copy of `pieces`.
    pub fn from_pieces(name: impl Into<String>, pieces: &[Piece]) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            description: "Custom template".to_string(),
            pieces: pieces.to_vec(),
            created_at: Some(Utc::now()),
            builtin: false,
        }
    }

    /// Case-insensitive match on name or description.
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}

fn standard_run(id: u64, x: f64, y: f64, width: f64, height: f64, rotation: f64) -> Piece {
    Piece::new(id, x, y, PieceDimensions::new(width, height, 1.5)).with_rotation(rotation)
}

/// The built-in kitchen layouts.
pub fn builtin_templates() -> Vec<LayoutTemplate> {
    vec![
        LayoutTemplate {
            id: "L-shaped".to_string(),
            name: "L-Shaped Countertop".to_string(),
            description: "Corner kitchen run in an L shape".to_string(),
            pieces: vec![
                standard_run(1, 0.0, 0.0, 72.0, 24.0, 0.0),
                standard_run(2, 72.0, 24.0, 24.0, 72.0, 90.0),
            ],
            created_at: None,
            builtin: true,
        },
        LayoutTemplate {
            id: "U-shaped".to_string(),
            name: "U-Shaped Countertop".to_string(),
            description: "Three runs in a U shape for larger kitchens".to_string(),
            pieces: vec![
                standard_run(1, 0.0, 0.0, 72.0, 24.0, 0.0),
                standard_run(2, 72.0, 72.0, 72.0, 24.0, 90.0),
                standard_run(3, 144.0, 0.0, 72.0, 24.0, 0.0),
            ],
            created_at: None,
            builtin: true,
        },
    ]
}

/// User templates plus the built-ins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateLibrary {
    templates: Vec<LayoutTemplate>,
}

impl TemplateLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add template to library
    pub fn add_template(&mut self, template: LayoutTemplate) -> Result<()> {
        if self.get_template(&template.id).is_some() {
            return Err(anyhow!("Template with ID '{}' already exists", template.id));
        }
        self.templates.push(template);
        Ok(())
    }

    /// Saves the current store pieces as a new template and returns its id.
    pub fn save_from_layout(&mut self, name: &str, store: &LayoutStore) -> Result<String> {
        if name.trim().is_empty() {
            return Err(anyhow!("Template name must not be empty"));
        }
        let template = LayoutTemplate::from_pieces(name.trim(), store.pieces());
        let id = template.id.clone();
        self.add_template(template)?;
        tracing::info!("Saved template '{}' ({})", name.trim(), id);
        Ok(id)
    }

    /// Looks up a built-in or user template by id.
    pub fn get_template(&self, id: &str) -> Option<LayoutTemplate> {
        builtin_templates()
            .into_iter()
            .chain(self.templates.iter().cloned())
            .find(|t| t.id == id)
    }

    /// Removes a user template. Built-ins cannot be removed.
    pub fn remove_template(&mut self, id: &str) -> Option<LayoutTemplate> {
        let index = self.templates.iter().position(|t| t.id == id)?;
        Some(self.templates.remove(index))
    }

    /// Built-ins first, then user templates in the order they were saved.
    pub fn list_all(&self) -> Vec<LayoutTemplate> {
        builtin_templates()
            .into_iter()
            .chain(self.templates.iter().cloned())
            .collect()
    }

    pub fn search(&self, query: &str) -> Vec<LayoutTemplate> {
        self.list_all()
            .into_iter()
            .filter(|t| t.matches_search(query))
            .collect()
    }

    /// Number of user templates.
    pub fn count(&self) -> usize {
        self.templates.len()
    }
}

/// Template persistence manager
pub struct TemplatePersistence;

impl TemplatePersistence {
    /// Save the user templates to a JSON file
    pub fn save(library: &TemplateLibrary, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(library)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load user templates from a JSON file; a missing file is an empty library
    pub fn load(path: &Path) -> Result<TemplateLibrary> {
        if !path.exists() {
            return Ok(TemplateLibrary::new());
        }
        let content = std::fs::read_to_string(path)?;
        let library = serde_json::from_str(&content)?;
        Ok(library)
    }
}

impl LayoutStore {
    /// Replaces the layout with a copy of the template's pieces.
    ///
    /// Like `load_layout`, this does not record history.
    pub fn apply_template(&mut self, template: &LayoutTemplate) -> Result<(), LayoutError> {
        tracing::info!("Applying template '{}'", template.name);
        self.load_layout(template.pieces.clone())
    }
}
