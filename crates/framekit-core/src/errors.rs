//! Error types for the framekit crates.

use thiserror::Error;

/// Top-level error type for framekit.
#[derive(Debug, Error)]
pub enum FramekitError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Errors in frame arithmetic inputs.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("invalid geometry: {property} is {value}")]
    InvalidGeometry { property: &'static str, value: f64 },
}

/// Errors during layout operations on a view tree.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("view {view} and reference {reference} do not share a parent coordinate space")]
    CoordinateSpaceMismatch { view: u64, reference: u64 },

    #[error("operation requires at least one view")]
    EmptyGroup,

    #[error("unknown view {id}")]
    UnknownView { id: u64 },

    #[error("geometry error: {0}")]
    Geometry(#[from] GeometryError),
}
