// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for rejected geometry writes.

/// Errors reported by geometry writes.
///
/// A write that fails leaves the box untouched and does not notify its surface.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// A NaN or infinite value was supplied.
    #[error("`{field}` must be finite, got {value}")]
    NonFinite {
        /// The property being written.
        field: &'static str,
        /// The offending value.
        value: f64,
    },
}

/// Result type for geometry writes.
pub type Result<T, E = GeometryError> = core::result::Result<T, E>;

pub(crate) fn finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeometryError::NonFinite { field, value })
    }
}
