//! # Core Module
//!
//! This module provides the fundamental numerical building blocks of the exANM
//! method, serving as the computational core of the library.
//!
//! ## Overview
//!
//! An explicit-membrane elastic network model connects nearby particles with
//! harmonic springs, surrounds the protein with a lattice of synthetic membrane
//! particles, and then condenses the membrane degrees of freedom back out of
//! the system so that only the protein's own motions remain.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules that handle different
//! stages of that pipeline:
//!
//! - **Coordinate Handling** ([`coords`]) - Coordinate validation and the source trait
//! - **Lattice Bases** ([`lattice`]) - Primitive vectors for the supported crystal families
//! - **Clash Rejection** ([`clash`]) - Minimum-separation test for candidate particles
//! - **Membrane Growth** ([`membrane`]) - Lattice enumeration and particle placement
//! - **Hessian Assembly** ([`hessian`]) - Pairwise spring interactions as a block matrix
//! - **Reduction** ([`reduction`]) - Schur-complement elimination of membrane freedom

pub mod clash;
pub mod coords;
pub mod hessian;
pub mod lattice;
pub mod membrane;
pub mod reduction;
