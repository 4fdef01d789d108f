//! Headless command line front end.
//!
//! Usage examples:
//!   counterkit --input kitchen.json
//!   counterkit --template L-shaped --output kitchen.json
//!   counterkit -i pieces.json --config prices.toml --json
//!   counterkit --piece "72,25 1/2" --piece "36,25 1/2,3"

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context};
use clap::Parser;
use serde::Serialize;

use counterkit_core::constants::STANDARD_DEPTH;
use counterkit_core::units::{format_area, format_dimension, parse_length};
use counterkit_core::MeasurementSystem;
use counterkit_designer::{
    estimate_layout, LayoutDocument, LayoutEstimate, LayoutStore, PieceDimensions, TemplateLibrary,
};
use counterkit_settings::{default_config_path, Config};

use crate::{layout_options_from, price_table_from, read_layout_file};

/// CounterKit headless layout tool.
///
/// Loads a layout (or a built-in template), validates it, and prints a
/// summary with a price estimate.
#[derive(Parser, Debug)]
#[command(name = "counterkit", version, about = "Countertop layout summary and estimate")]
pub struct CliArgs {
    /// Layout document or JSON array of piece records.
    #[arg(short, long, value_name = "FILE", conflicts_with = "template")]
    pub input: Option<PathBuf>,

    /// Start from a built-in template (L-shaped, U-shaped).
    #[arg(short, long, value_name = "ID")]
    pub template: Option<String>,

    /// Append a piece as "WIDTH,HEIGHT[,DEPTH]" in the configured units.
    /// Fractional inches are accepted, e.g. "72,25 1/2".
    #[arg(short, long = "piece", value_name = "W,H[,D]")]
    pub pieces: Vec<String>,

    /// Config file (.toml or .json). Defaults to the platform config dir.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the loaded layout as a layout document.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Emit logs as JSON lines.
    #[arg(long)]
    pub log_json: bool,
}

#[derive(Debug, Serialize)]
struct Report {
    name: String,
    piece_count: usize,
    estimate: LayoutEstimate,
}

fn load_config(args: &CliArgs) -> anyhow::Result<Config> {
    let path = match &args.config {
        Some(path) => path.clone(),
        None => match default_config_path() {
            Ok(path) => path,
            Err(err) => {
                tracing::warn!("{}; using default settings", err);
                return Ok(Config::default());
            }
        },
    };
    Config::load_or_default(&path).with_context(|| format!("Loading config {}", path.display()))
}

fn load_document(args: &CliArgs) -> anyhow::Result<LayoutDocument> {
    if let Some(path) = &args.input {
        return read_layout_file(path);
    }
    if let Some(id) = &args.template {
        let library = TemplateLibrary::new();
        let Some(template) = library.get_template(id) else {
            bail!("Unknown template '{}'", id);
        };
        let mut doc = LayoutDocument::new(template.name.clone());
        doc.pieces = template.pieces;
        return Ok(doc);
    }
    if !args.pieces.is_empty() {
        return Ok(LayoutDocument::new("Untitled"));
    }
    bail!("Nothing to do: pass --input, --template or --piece")
}

/// Parses "WIDTH,HEIGHT[,DEPTH]" into inches. Depth defaults to a standard
/// slab.
pub fn parse_piece_dimensions(
    spec: &str,
    system: MeasurementSystem,
) -> anyhow::Result<PieceDimensions> {
    let lengths = spec
        .split(',')
        .map(|part| {
            parse_length(part, system)
                .map_err(|e| anyhow!("Invalid length '{}': {}", part.trim(), e))
        })
        .collect::<anyhow::Result<Vec<f64>>>()?;

    let dims = match lengths.as_slice() {
        [width, height] => PieceDimensions::new(*width, *height, STANDARD_DEPTH),
        [width, height, depth] => PieceDimensions::new(*width, *height, *depth),
        _ => bail!("Expected WIDTH,HEIGHT[,DEPTH], got '{}'", spec),
    };
    dims.validate()?;
    Ok(dims)
}

/// Adds pieces left to right, after everything already in the layout.
fn append_pieces(
    store: &mut LayoutStore,
    specs: &[String],
    system: MeasurementSystem,
) -> anyhow::Result<()> {
    for spec in specs {
        let dims = parse_piece_dimensions(spec, system)?;
        let x = store
            .pieces()
            .iter()
            .map(|p| p.bounds().2)
            .fold(0.0, f64::max);
        let id = store.add_new_piece(x, 0.0, dims)?;
        tracing::info!("Added piece {} from '{}'", id, spec);
    }
    Ok(())
}

/// Runs the command and returns the text written to stdout.
pub fn run(args: &CliArgs) -> anyhow::Result<String> {
    let config = load_config(args)?;
    let doc = load_document(args)?;

    let mut store = LayoutStore::with_options(layout_options_from(&config.designer));
    doc.apply_to(&mut store)
        .with_context(|| format!("Layout '{}' is invalid", doc.name))?;
    append_pieces(&mut store, &args.pieces, config.measurement_system)?;
    tracing::info!("Loaded '{}' with {} pieces", doc.name, store.piece_count());

    if let Some(path) = &args.output {
        LayoutDocument::from_store(doc.name.clone(), &store).save_to_file(path)?;
        tracing::info!("Wrote {}", path.display());
    }

    let estimate = estimate_layout(store.pieces(), &price_table_from(&config.estimate));
    let report = Report {
        name: doc.name,
        piece_count: store.piece_count(),
        estimate,
    };

    if args.json {
        return Ok(serde_json::to_string_pretty(&report)?);
    }
    Ok(render_text(&report, &store, config.measurement_system))
}

fn render_text(report: &Report, store: &LayoutStore, system: MeasurementSystem) -> String {
    let mut out = format!("{} ({} pieces)\n", report.name, report.piece_count);
    for (piece, est) in store.pieces().iter().zip(&report.estimate.pieces) {
        out.push_str(&format!(
            "  #{} {} x {} x {} @ {:.0}°  {}  ${:.2}\n",
            piece.id,
            format_dimension(piece.width, system),
            format_dimension(piece.height, system),
            format_dimension(piece.depth, system),
            piece.rotation,
            format_area(piece.area()),
            est.price
        ));
    }
    let e = &report.estimate;
    out.push_str(&format!(
        "Subtotal ${:.2}  Tax ${:.2}  Total ${:.2}\n",
        e.subtotal, e.tax, e.total
    ));
    out
}
