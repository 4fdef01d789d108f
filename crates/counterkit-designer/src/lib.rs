//! # CounterKit Designer
//!
//! This crate provides the editing core of the countertop layout designer:
//! rectangular slab pieces on a 2D canvas, selection, dragging with optional
//! grid snapping, zoom and pan, and linear undo/redo of whole-layout
//! snapshots.
//!
//! ## Core Components
//!
//! ### Layout Elements
//! - **Pieces**: Slabs with dimensions, rotation, corner radius and finish
//! - **Templates**: Built-in L/U-shaped kitchens and user-saved layouts
//! - **Viewport**: Zoom and pan, screen/layout coordinate conversion
//!
//! ### Interaction
//! - **Selection**: Ordered multi-selection with an active piece
//! - **Drag**: Pointer deltas scaled by zoom, optionally snapped to the grid
//! - **Measurement**: On-canvas measuring tape
//!
//! ### Persistence & Pricing
//! - **History/Undo-Redo**: Deep-copy snapshots, one entry per gesture
//! - **Serialization**: JSON piece records and layout documents
//! - **Estimate**: Area, edge and depth based pricing
//!
//! ## Architecture
//!
//! ```text
//! LayoutStore (single owner of layout state)
//!   ├── Pieces
//!   ├── SelectionManager
//!   ├── Viewport (zoom/pan)
//!   ├── DragController
//!   └── History (undo/redo)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use counterkit_designer::{Delta, LayoutStore, PieceDimensions};
//!
//! let mut store = LayoutStore::new();
//! let id = store
//!     .add_new_piece(0.0, 0.0, PieceDimensions::new(72.0, 24.0, 1.5))
//!     .unwrap();
//! store.commit();
//!
//! store.move_pieces(&[id], Delta::new(10.0, 5.0)).unwrap();
//! store.commit();
//!
//! store.undo();
//! assert_eq!(store.piece(id).map(|p| (p.x, p.y)), Some((0.0, 0.0)));
//! ```

pub mod drag;
pub mod estimate;
pub mod history;
pub mod layout_store;
pub mod measurement;
pub mod model;
pub mod selection_manager;
pub mod serialization;
pub mod templates;
pub mod viewport;

pub use drag::{DragController, DragState};
pub use estimate::{estimate_layout, estimate_piece, LayoutEstimate, PieceEstimate, PriceTable};
pub use history::{History, HistoryEntry};
pub use layout_store::{LayoutOptions, LayoutSnapshot, LayoutStore};
pub use measurement::{Measurement, MeasurementTool};
pub use model::{normalize_rotation, Delta, Piece, PieceDimensions, PieceFinish, Point};
pub use selection_manager::SelectionManager;
pub use serialization::{pieces_from_json, pieces_to_json, LayoutDocument};
pub use templates::{builtin_templates, LayoutTemplate, TemplateLibrary, TemplatePersistence};
pub use viewport::{Viewport, ZoomLimits};
