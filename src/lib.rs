//! Numerical quadrature over a finite interval.
//!
//! This crate provides two independent families of methods for computing
//! definite integrals of a scalar function `f: f64 -> f64`.
//!
//! # Available Methods
//!
//! | Method | Use Case | Accuracy |
//! |--------|----------|----------|
//! | [`newton_cotes()`] | Fixed cost, known smoothness | Exact for polynomials up to the rule order |
//! | [`adaptive_trapezoid`] | Unknown smoothness, target tolerance | Adaptive, capped at [`MAX_REFINEMENTS`] doublings |
//!
//! # Choosing a Method
//!
//! - **Known step budget**: use [`newton_cotes()`] with order 2 or 4 for smooth
//!   integrands; it also returns the cumulative integral trace.
//! - **Target error bound**: use [`adaptive_trapezoid`], but treat tight
//!   tolerances as potentially expensive — each refinement pass doubles the
//!   number of function evaluations.
//!
//! # Accumulation Precision
//!
//! The fixed-order engine's running sum goes through a pluggable
//! [`Accumulator`](accumulate::Accumulator) policy, so callers can trade
//! precision for cost without touching the algorithm:
//!
//! ```
//! use ncquad::accumulate::KahanSum;
//! use ncquad::newton_cotes_with;
//!
//! let result = newton_cotes_with::<_, KahanSum>(|x| x * x, (0.0, 1.0), 100, 2).unwrap();
//! assert!((result.integral - 1.0 / 3.0).abs() < 1e-14);
//! ```

pub mod accumulate;
pub mod adaptive;
pub mod error;
pub mod newton_cotes;

pub use adaptive::{
    MAX_REFINEMENTS, RefineSink, RefineStep, TracingSink, adaptive_trapezoid,
    adaptive_trapezoid_with,
};
pub use error::{QuadError, QuadResult};
pub use newton_cotes::{
    ENDPOINT_WEIGHTS, INTERIOR_WEIGHTS, NewtonCotesResult, newton_cotes, newton_cotes_with,
};
