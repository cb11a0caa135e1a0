//! refselect: range-based reference designator selection for PCB boards
//!
//! This library selects footprints on a board document whose reference
//! designators match a prefix and carry a numeric suffix within an inclusive
//! range (e.g. `SW33` through `SW62`), then asks the host view to refresh.
//!
//! # Architecture
//!
//! The selection pass is pure with respect to its inputs: it takes an explicit
//! [`board::Board`] handle, explicit [`select::Criteria`], and a
//! [`host::ViewRefresher`] seam standing in for the host editor's redraw
//! request. Nothing is read from ambient state, so the pass can be exercised
//! against a fabricated in-memory board.
//!
//! # Modules
//!
//! - [`board`] — Board document model and JSON snapshot loading
//! - [`config`] — Configuration loading and validation
//! - [`error`] — Configuration error types
//! - [`host`] — Host view seam (refresh requests)
//! - [`select`] — Selection criteria and the selection pass

pub mod board;
pub mod config;
pub mod error;
pub mod host;
pub mod select;

pub use board::{Board, Footprint};
pub use select::{run_selection, Criteria, MalformedPolicy, SelectionReport};
