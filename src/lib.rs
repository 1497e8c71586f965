//! # sheetframe
//!
//! Converts loosely typed spreadsheet grids into strongly typed columnar
//! frames for downstream charting and analysis, avoiding redundant remote
//! fetches through a short lived in-memory cache.
//!
//! ## Features
//!
//! - **Schema inference**: per-column type and unit detection from each
//!   cell's number format metadata, with a safe text fallback whenever a
//!   column's cells disagree
//! - **Null safe population**: typed column vectors of equal length, with
//!   absent values, blank cells, and short rows becoming nulls instead of
//!   errors
//! - **Header resolution**: blank headers synthesized and duplicate
//!   headers disambiguated, so column names are always unique
//! - **Fetch caching**: a TTL bounded key/value store over
//!   (spreadsheet id, range), safe to share between concurrent queries
//! - **Warnings, not failures**: per-cell anomalies accumulate on the
//!   frame's metadata; only an empty grid or a missing header row aborts
//!
//! ## Pipeline
//!
//! The hosting layer fetches raw grid data (through [`load_grid`] so the
//! cache is consulted first) and hands it to [`transform`], which
//! resolves column names from row 0, profiles every column across the
//! data rows, and builds the typed [`Frame`].

pub mod cache;
pub mod error;
pub mod frame;
pub mod grid;
pub mod transform;

pub use crate::cache::CacheHit;
pub use crate::cache::FetchCache;
pub use crate::error::FrameError;
pub use crate::frame::Field;
pub use crate::frame::FieldValues;
pub use crate::frame::Frame;
pub use crate::frame::FrameMeta;
pub use crate::grid::cell::Cell;
pub use crate::grid::cell::NumberFormatKind;
pub use crate::grid::cell::TypeTag;
pub use crate::grid::Grid;
pub use crate::grid::Row;
pub use crate::transform::load_grid;
pub use crate::transform::transform;
pub use crate::transform::QueryModel;
