//! Reconstruction of **brain-surface meshes** from semantically tagged numeric
//! arrays, with optional refinement through feature-preserving Laplacian
//! smoothing and auto-oriented normal estimation.
//!
//! A surface file reader hands [`surface_to_mesh`] an ordered bag of
//! [`TaggedArray`]s; the pipeline classifies them by role, assembles a
//! validated indexed triangle [`Mesh`], and runs the refinement stages the
//! caller enabled. Construction failures are typed and fatal; degenerate
//! geometry found during normal estimation is recovered in place and reported
//! alongside the mesh as [`Diagnostic`]s.
//!
//! # Features
//! - **f64**: use f64 as Real (default)
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod connectome;
pub mod errors;
pub mod float_types;
pub mod mesh;
pub mod pipeline;
pub mod tagged;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::{DegenerateKind, Diagnostic, Element, Error};
pub use mesh::{Mesh, SmoothParams, TopologyAnalysis};
pub use pipeline::{Reconstruction, ReconstructionOptions, surface_to_mesh};
pub use tagged::{ArrayData, Intent, TaggedArray};
