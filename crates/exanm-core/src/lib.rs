//! # exANM Core Library
//!
//! A library for explicit-membrane anisotropic network model (exANM) analysis,
//! which studies the normal-mode dynamics of membrane proteins by embedding the
//! protein in a synthetic lattice of membrane particles.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains the pure numerical building blocks:
//!   lattice bases, clash rejection, membrane lattice growth, pairwise Hessian
//!   assembly, and the degrees-of-freedom reduction.
//!
//! - **[`engine`]: The Logic Core.** This stateful layer orchestrates a full model
//!   build. It owns configuration, error types, progress reporting, the `ExAnm`
//!   model itself, and the seam to an external eigensolver.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer. It
//!   ties the `engine` and `core` together into a single call that takes a set of
//!   coordinates and produces a model carrying the reduced Hessian.

pub mod core;
pub mod engine;
pub mod workflows;
