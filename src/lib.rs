//! A **2D beam-tracing** library: every specular reflection path between a fixed point source
//! and any listener position inside an enclosure made of line-segment walls, up to a maximum
//! reflection order.
//!
//! A [`Solver`] builds two immutable structures once per (walls, source, order):
//! - a [BSP](bsp) occlusion index over the walls, answering front-to-back ray queries,
//! - a [beam tree](beam) enumerating each reflection chain that survives clipping,
//!   with the mirrored (image) source of the chain at every node.
//!
//! Each [`Solver::get_paths`] call then [validates](paths) every chain against the listener.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon for multithreading
//! - **cli**: build the `beamtrace2d` demo binary (pulls in `env_logger`)

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod beam;
pub mod bsp;
pub mod errors;
pub mod float_types;
pub mod geometry;
pub mod paths;
pub mod solver;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::ValidationError;
pub use float_types::Real;
pub use geometry::{Segment, Wall, WallId};
pub use paths::{PathPoint, ReflectionPath};
pub use solver::{DEFAULT_MAX_ORDER, Solver, SolverConfig, Splitting};
