//! # CounterKit
//!
//! A countertop layout designer: rectangular slab pieces placed on a 2D
//! canvas, grid-snapped dragging, zoom and pan, undoable layout history and
//! a price estimate derived from the finished layout.
//!
//! ## Architecture
//!
//! CounterKit is organized as a workspace with multiple crates:
//!
//! 1. **counterkit-core** - Error types, layout constants, unit helpers
//! 2. **counterkit-designer** - Pieces, selection, drag, viewport, history,
//!    templates, measurement, serialization and estimates
//! 3. **counterkit-settings** - Designer configuration (JSON/TOML)
//! 4. **counterkit** - Headless binary that integrates all crates

pub mod cli;

use std::path::Path;

use anyhow::Context;

pub use counterkit_core::{Error, LayoutError, MeasurementSystem, Result};
pub use counterkit_designer as designer;
pub use counterkit_designer::{
    Delta, LayoutDocument, LayoutEstimate, LayoutOptions, LayoutSnapshot, LayoutStore, Piece,
    PieceDimensions, Point, PriceTable, TemplateLibrary, ZoomLimits,
};
pub use counterkit_settings::{Config, DesignerSettings, EstimateSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, so stdout stays free for reports
/// - RUST_LOG environment variable support (default `info`)
/// - JSON lines instead of pretty output when `json` is set
pub fn init_logging(json: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if json {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .json();
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true)
            .pretty();
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}

/// Layout store options from the designer section of the config.
pub fn layout_options_from(settings: &DesignerSettings) -> LayoutOptions {
    LayoutOptions {
        zoom: ZoomLimits {
            initial: settings.initial_zoom,
            min: settings.min_zoom,
            max: settings.max_zoom,
            step: settings.zoom_step,
        },
        grid_unit: settings.grid_unit,
        show_grid: settings.show_grid,
        snap_to_grid: settings.snap_to_grid,
        max_history_depth: settings.max_history_depth,
        max_border_radius: settings.max_border_radius,
    }
}

/// Price table from the estimate section of the config.
pub fn price_table_from(settings: &EstimateSettings) -> PriceTable {
    PriceTable {
        materials: settings.materials.clone(),
        default_price_per_sq_ft: settings.default_price_per_sq_ft,
        finish_multiplier: settings.finish_multiplier,
        tax_rate: settings.tax_rate,
    }
}

/// Reads a layout file: either a full layout document or a bare JSON array
/// of piece records.
pub fn read_layout_file(path: &Path) -> anyhow::Result<LayoutDocument> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout file {}", path.display()))?;

    if content.trim_start().starts_with('[') {
        let pieces = counterkit_designer::pieces_from_json(&content)
            .with_context(|| format!("Invalid piece records in {}", path.display()))?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_string());
        let mut doc = LayoutDocument::new(name);
        doc.pieces = pieces;
        return Ok(doc);
    }

    LayoutDocument::load_from_file(path)
}
