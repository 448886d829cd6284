//! Accumulation policies for the running quadrature sum.
//!
//! The fixed-order engine adds one weighted term per sample point. The policy
//! chosen here controls the intermediate rounding of that running sum, which
//! is a caller-facing precision/performance trade-off: a compensated sum
//! reduces cancellation error, while an `f32` sum deliberately coarsens it
//! for precision experiments.

/// A running sum with a pluggable rounding policy.
///
/// Each weighted term `w_k * f(x_k)` is fed through [`add_term`]; the current
/// value of the sum is read back with [`total`]. Implementations must start
/// from zero via `Default`.
///
/// [`add_term`]: Accumulator::add_term
/// [`total`]: Accumulator::total
pub trait Accumulator: Default {
    /// Add one weighted term to the running sum.
    fn add_term(&mut self, term: f64);

    /// Current value of the running sum.
    fn total(&self) -> f64;
}

/// Plain `f64` running sum. The default policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct F64Sum {
    sum: f64,
}

impl Accumulator for F64Sum {
    fn add_term(&mut self, term: f64) {
        self.sum += term;
    }

    fn total(&self) -> f64 {
        self.sum
    }
}

/// Reduced-precision running sum held in `f32`.
///
/// Each term is rounded to `f32` before addition, so accumulation error grows
/// much faster than with [`F64Sum`]. Useful for demonstrating how the
/// accumulation type affects quadrature accuracy.
#[derive(Debug, Clone, Copy, Default)]
pub struct F32Sum {
    sum: f32,
}

impl Accumulator for F32Sum {
    fn add_term(&mut self, term: f64) {
        self.sum += term as f32;
    }

    fn total(&self) -> f64 {
        f64::from(self.sum)
    }
}

/// Kahan compensated summation.
///
/// Maintains a compensation term that recovers low-order bits lost in each
/// addition, keeping total rounding error O(ε) independent of the number of
/// terms. The extended-precision direction of the policy axis.
#[derive(Debug, Clone, Copy, Default)]
pub struct KahanSum {
    sum: f64,
    compensation: f64,
}

impl Accumulator for KahanSum {
    fn add_term(&mut self, term: f64) {
        let y = term - self.compensation;
        let t = self.sum + y;
        self.compensation = (t - self.sum) - y;
        self.sum = t;
    }

    fn total(&self) -> f64 {
        self.sum
    }
}
