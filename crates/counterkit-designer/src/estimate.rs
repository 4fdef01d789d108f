//! Price estimate for a layout.
//!
//! Per piece:
//!
//! ```text
//! price = area_ft2 * material_rate * finish_multiplier
//!       + perimeter_ft * edge_rate
//! price *= depth_factor            (depth / 1.5 for slabs thicker than 1.5)
//! ```
//!
//! Rates come from a caller-supplied [`PriceTable`]; this module only
//! evaluates the formula.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use counterkit_core::constants::SQ_IN_PER_SQ_FT;

use crate::model::Piece;

fn default_rate() -> f64 {
    50.0
}

fn default_multiplier() -> f64 {
    1.0
}

fn default_tax_rate() -> f64 {
    0.18
}

/// Static pricing inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTable {
    /// Material name to price per square foot
    #[serde(default)]
    pub materials: HashMap<String, f64>,
    /// Rate for pieces whose material is missing from `materials`
    #[serde(default = "default_rate")]
    pub default_price_per_sq_ft: f64,
    #[serde(default = "default_multiplier")]
    pub finish_multiplier: f64,
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            materials: HashMap::new(),
            default_price_per_sq_ft: default_rate(),
            finish_multiplier: default_multiplier(),
            tax_rate: default_tax_rate(),
        }
    }
}

impl PriceTable {
    fn material_rate(&self, piece: &Piece) -> f64 {
        piece
            .finish
            .material
            .as_ref()
            .and_then(|m| self.materials.get(m))
            .copied()
            .unwrap_or(self.default_price_per_sq_ft)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieceEstimate {
    pub id: u64,
    pub area_sq_ft: f64,
    pub perimeter_ft: f64,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutEstimate {
    pub pieces: Vec<PieceEstimate>,
    pub area_sq_ft: f64,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

pub fn estimate_piece(piece: &Piece, table: &PriceTable) -> PieceEstimate {
    let area_sq_ft = piece.area() / SQ_IN_PER_SQ_FT;
    let perimeter_ft = piece.perimeter_ft();

    let mut price = area_sq_ft * table.material_rate(piece) * table.finish_multiplier;
    if let Some(edge_rate) = piece.finish.edge_price {
        price += perimeter_ft * edge_rate;
    }
    price *= piece.depth_factor();

    PieceEstimate {
        id: piece.id,
        area_sq_ft,
        perimeter_ft,
        price,
    }
}

pub fn estimate_layout(pieces: &[Piece], table: &PriceTable) -> LayoutEstimate {
    let pieces: Vec<PieceEstimate> = pieces.iter().map(|p| estimate_piece(p, table)).collect();
    let area_sq_ft = pieces.iter().map(|p| p.area_sq_ft).sum();
    let subtotal: f64 = pieces.iter().map(|p| p.price).sum();
    let tax = subtotal * table.tax_rate;
    LayoutEstimate {
        pieces,
        area_sq_ft,
        subtotal,
        tax,
        total: subtotal + tax,
    }
}
