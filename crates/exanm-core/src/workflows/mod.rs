//! # Workflows Module
//!
//! The highest-level, user-facing layer. Each workflow ties the `engine` and
//! `core` together into a complete procedure; [`membrane_anm`] runs a full
//! explicit-membrane model build from a coordinate source and a configuration.

pub mod membrane_anm;
