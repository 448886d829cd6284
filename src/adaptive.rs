//! Adaptive trapezoidal refinement.
//!
//! Starts from a single trapezoid and doubles the number of subdivisions each
//! pass, reusing previous evaluations by summing only the newly introduced
//! midpoints. The error between successive estimates is `|I_new - I_old| / 3`
//! (the Richardson factor for the trapezoidal rule); refinement stops when it
//! drops to the requested tolerance or after [`MAX_REFINEMENTS`] passes.

use tracing::{debug, info};

/// Hard cap on refinement passes.
///
/// Each pass doubles the number of function evaluations, so this is a cost
/// ceiling as much as an error-bound safeguard: pass `n` evaluates
/// `2^(n-1)` new midpoints.
pub const MAX_REFINEMENTS: usize = 20;

/// One refinement pass, as observed through a [`RefineSink`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefineStep {
    /// Pass number, starting at 1.
    pub iteration: usize,
    /// Exponent of the current subdivision count: this pass used `2^power`
    /// subintervals.
    pub power: u32,
    /// Estimate before this pass.
    pub previous: f64,
    /// Estimate after this pass.
    pub current: f64,
    /// Richardson error estimate `|current - previous| / 3`.
    pub error: f64,
}

/// Reporting channel for the refiner's diagnostics.
///
/// Which method fires depends on the `verbose` flag: when verbose,
/// [`refinement`](Self::refinement) is called once per pass and the final
/// estimate is never reported; when quiet, only
/// [`final_estimate`](Self::final_estimate) is called, once, after the loop.
/// The asymmetry is part of the contract.
pub trait RefineSink {
    /// One refinement pass completed (verbose channel).
    fn refinement(&mut self, step: &RefineStep);

    /// Final integral estimate (quiet channel).
    fn final_estimate(&mut self, integral: f64);
}

/// Default sink that reports through `tracing`.
///
/// Per-pass diagnostics go to `debug!`, the final estimate to `info!`. No
/// subscriber is installed by this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl RefineSink for TracingSink {
    fn refinement(&mut self, step: &RefineStep) {
        debug!(
            iteration = step.iteration,
            power = step.power,
            previous = step.previous,
            current = step.current,
            error = step.error,
            "trapezoid refinement pass"
        );
    }

    fn final_estimate(&mut self, integral: f64) {
        info!(integral, "adaptive trapezoid estimate");
    }
}

/// Integrate `f` over `(a, b)` by adaptive trapezoidal refinement,
/// reporting through [`TracingSink`].
///
/// Returns the iteration counter at termination. The counter is incremented
/// after the convergence check, so the returned value is one more than the
/// number of refinement passes actually performed; this quirk is kept for
/// compatibility with existing callers.
///
/// Non-convergence is silent: if the tolerance is still unmet after
/// [`MAX_REFINEMENTS`] passes, the loop exits normally and the last estimate
/// is reported as usual, with no indication that the tolerance was missed.
///
/// # Arguments
///
/// * `f` - Function to integrate; evaluated at the endpoints and at every
///   midpoint introduced by halving
/// * `interval` - Integration region `(a, b)`
/// * `tolerance` - Positive error bound for the Richardson estimate
/// * `verbose` - Report per-pass diagnostics instead of the final estimate
///
/// # Example
///
/// ```
/// use ncquad::adaptive_trapezoid;
///
/// // ∫₀¹ x² dx = 1/3
/// let passes = adaptive_trapezoid(|x| x * x, (0.0, 1.0), 1e-6, false);
/// assert!(passes < ncquad::MAX_REFINEMENTS);
/// ```
pub fn adaptive_trapezoid<F>(f: F, interval: (f64, f64), tolerance: f64, verbose: bool) -> usize
where
    F: Fn(f64) -> f64,
{
    adaptive_trapezoid_with(f, interval, tolerance, verbose, &mut TracingSink)
}

/// [`adaptive_trapezoid`] with an explicit reporting sink.
pub fn adaptive_trapezoid_with<F, S>(
    f: F,
    interval: (f64, f64),
    tolerance: f64,
    verbose: bool,
    sink: &mut S,
) -> usize
where
    F: Fn(f64) -> f64,
    S: RefineSink,
{
    let (a, b) = interval;

    let seed = (b - a) * 0.5 * (f(a) + f(b));
    let mut h = (b - a) / 2.0;
    let mut current = seed;
    let mut error = 2.0 * tolerance;
    let mut n: usize = 1;

    while error > tolerance {
        let previous = if n == 1 {
            seed
        } else if n >= MAX_REFINEMENTS {
            // Silent cap: exit with the last estimate, tolerance unmet.
            break;
        } else {
            h /= 2.0;
            current
        };

        // Only the midpoints introduced by this halving; all earlier
        // evaluations are carried in `previous / 2`.
        let mut midpoint_sum = 0.0;
        for i in (1..(1u64 << n)).step_by(2) {
            midpoint_sum += f(a + i as f64 * h);
        }
        current = h * midpoint_sum + previous / 2.0;

        error = ((current - previous) / 3.0).abs();
        n += 1;

        if verbose {
            sink.refinement(&RefineStep {
                iteration: n - 1,
                power: (n - 1) as u32,
                previous,
                current,
                error,
            });
        }
    }

    if !verbose {
        sink.final_estimate(current);
    }

    n
}
