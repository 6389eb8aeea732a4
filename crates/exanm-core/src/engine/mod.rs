//! # Engine Module
//!
//! This module implements the stateful side of an exANM calculation: the model
//! that owns the reduced Hessian, the configuration it is built from, progress
//! reporting, error propagation, and the seam to an external eigensolver.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - The flat option set with defaults, a builder, and TOML loading
//! - **Model** ([`model`]) - The `ExAnm` model orchestrating membrane growth, assembly, and reduction
//! - **Mode Extraction** ([`modes`]) - The eigensolver seam consuming the reduced Hessian
//! - **Progress Monitoring** ([`progress`]) - Injected observer for phase timings and diagnostics
//! - **Error Handling** ([`error`]) - Engine-level error type wrapping the core errors

pub mod config;
pub mod error;
pub mod model;
pub mod modes;
pub mod progress;
