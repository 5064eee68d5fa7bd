//! Thermal systems models.
//!
//! This module contains models that reason about temperatures, currently the
//! heat/cold advisory classifier.

pub mod advisory;
