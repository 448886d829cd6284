//! Composite Newton-Cotes quadrature of fixed order.
//!
//! The classical closed Newton-Cotes rules (trapezoidal, Simpson's 1/3,
//! Simpson's 3/8, Boole's) applied repeatedly across a uniformly subdivided
//! interval. An order-`p` rule is exact for polynomials up to degree `p`
//! (degree `p+1` when `p` is even, by symmetry).

use crate::accumulate::{Accumulator, F64Sum};
use crate::error::{QuadError, QuadResult};

/// Weight applied to the two interval endpoints, indexed by `order - 1`.
pub const ENDPOINT_WEIGHTS: [f64; 4] = [1.0 / 2.0, 1.0 / 3.0, 3.0 / 8.0, 14.0 / 45.0];

/// Weights applied to interior points, indexed by `order - 1` then by
/// `k % order`. The pattern repeats every `order` points, which is why the
/// step count must be a multiple of the order.
pub const INTERIOR_WEIGHTS: [&[f64]; 4] = [
    &[1.0],
    &[2.0 / 3.0, 4.0 / 3.0],
    &[3.0 / 4.0, 9.0 / 8.0, 9.0 / 8.0],
    &[28.0 / 45.0, 64.0 / 45.0, 8.0 / 15.0, 64.0 / 45.0],
];

/// Result of a fixed-order Newton-Cotes integration.
#[derive(Debug, Clone)]
pub struct NewtonCotesResult {
    /// Total integral over the interval.
    pub integral: f64,
    /// Sample abscissas: `steps + 1` points, `x[k] = a + h*k`.
    pub x: Vec<f64>,
    /// Cumulative partial integrals, index-aligned with `x`. Entry `k` is the
    /// running weighted sum through `x[k]`, scaled by the step size, so it
    /// approximates the integral over `[a, x[k]]`. The last entry equals
    /// [`integral`](Self::integral) exactly.
    pub cumulative: Vec<f64>,
}

/// Integrate `f` over `(a, b)` by a composite Newton-Cotes rule.
///
/// Accumulates in plain `f64`; see [`newton_cotes_with`] to choose a
/// different accumulation policy.
///
/// # Arguments
///
/// * `f` - Function to integrate; must be finite at every sample point
/// * `interval` - Integration region `(a, b)`. A reversed or degenerate
///   interval is not detected: it yields a negative or zero step size and is
///   the caller's error.
/// * `steps` - Number of uniform steps; must be a positive multiple of `order`
/// * `order` - Rule order in `1..=4` (1 = trapezoidal, 2 = Simpson's 1/3,
///   3 = Simpson's 3/8, 4 = Boole's)
///
/// # Errors
///
/// Returns [`QuadError::InvalidSteps`] if `steps` is zero or not a multiple
/// of `order`.
///
/// # Panics
///
/// An `order` outside `1..=4` is a contract violation and panics on the
/// weight-table lookup.
///
/// # Example
///
/// ```
/// use ncquad::newton_cotes;
///
/// // Simpson's rule is exact for cubics: ∫₀¹ x³ dx = 1/4
/// let result = newton_cotes(|x| x * x * x, (0.0, 1.0), 10, 2).unwrap();
/// assert!((result.integral - 0.25).abs() < 1e-14);
/// assert_eq!(result.x.len(), 11);
/// ```
pub fn newton_cotes<F>(
    f: F,
    interval: (f64, f64),
    steps: usize,
    order: usize,
) -> QuadResult<NewtonCotesResult>
where
    F: Fn(f64) -> f64,
{
    newton_cotes_with::<F, F64Sum>(f, interval, steps, order)
}

/// [`newton_cotes`] with an explicit accumulation policy.
///
/// Each weighted term passes through the policy `A` before joining the
/// running sum, so intermediate rounding is under caller control: use
/// [`KahanSum`](crate::accumulate::KahanSum) to suppress cancellation error
/// over many steps, or [`F32Sum`](crate::accumulate::F32Sum) to observe
/// reduced-precision behavior.
///
/// # Example
///
/// ```
/// use ncquad::accumulate::KahanSum;
/// use ncquad::newton_cotes_with;
///
/// let result =
///     newton_cotes_with::<_, KahanSum>(|x| x.sin(), (0.0, std::f64::consts::PI), 1000, 2)
///         .unwrap();
/// assert!((result.integral - 2.0).abs() < 1e-10);
/// ```
pub fn newton_cotes_with<F, A>(
    f: F,
    interval: (f64, f64),
    steps: usize,
    order: usize,
) -> QuadResult<NewtonCotesResult>
where
    F: Fn(f64) -> f64,
    A: Accumulator,
{
    // All validation happens before any output is allocated; an error never
    // exposes a partially computed result.
    if steps == 0 || steps % order != 0 {
        return Err(QuadError::InvalidSteps { steps, order });
    }

    let endpoint_weight = ENDPOINT_WEIGHTS[order - 1];
    let interior_weights = INTERIOR_WEIGHTS[order - 1];

    let (a, b) = interval;
    let h = (b - a) / steps as f64;

    let mut x = Vec::with_capacity(steps + 1);
    let mut cumulative = Vec::with_capacity(steps + 1);
    let mut sum = A::default();

    for k in 0..=steps {
        let weight = if k == 0 || k == steps {
            endpoint_weight
        } else {
            interior_weights[k % order]
        };

        let xk = a + h * k as f64;
        sum.add_term(weight * f(xk));

        x.push(xk);
        // Scaled at every step, so each entry is itself an integral estimate
        // over [a, x_k] rather than a raw partial sum.
        cumulative.push(sum.total() * h);
    }

    Ok(NewtonCotesResult {
        integral: sum.total() * h,
        x,
        cumulative,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accumulate::{F32Sum, KahanSum};
    use approx::assert_relative_eq;

    #[test]
    fn test_trapezoid_exact_for_linear() {
        // Order 1 is exact for degree-1 polynomials: ∫₀² x dx = 2.
        for steps in [1, 2, 7, 100] {
            let result = newton_cotes(|x| x, (0.0, 2.0), steps, 1).unwrap();
            assert_relative_eq!(result.integral, 2.0, max_relative = 1e-14);
        }
    }

    #[test]
    fn test_boole_exact_for_cubic() {
        // Order 4 is exact for any polynomial of degree <= 3.
        // ∫₀² (x³ - 2x² + 3x - 1) dx = 4 - 16/3 + 6 - 2 = 8/3.
        let f = |x: f64| x * x * x - 2.0 * x * x + 3.0 * x - 1.0;
        let result = newton_cotes(f, (0.0, 2.0), 8, 4).unwrap();
        assert_relative_eq!(result.integral, 8.0 / 3.0, max_relative = 1e-13);
    }

    #[test]
    fn test_simpson_exact_for_cubic() {
        // ∫₀¹ x³ dx = 1/4.
        let result = newton_cotes(|x| x * x * x, (0.0, 1.0), 4, 2).unwrap();
        assert_relative_eq!(result.integral, 0.25, max_relative = 1e-14);
    }

    #[test]
    fn test_all_orders_on_sine() {
        // ∫₀^π sin(x) dx = 2; every order converges, higher orders faster.
        for order in 1..=4 {
            let result = newton_cotes(|x: f64| x.sin(), (0.0, std::f64::consts::PI), 48, order)
                .unwrap();
            // Order 1 at 48 steps is the least accurate case, ~4e-4 relative.
            assert_relative_eq!(result.integral, 2.0, max_relative = 1e-3);
        }
    }

    #[test]
    fn test_cumulative_trace_matches_total() {
        let result = newton_cotes(|x: f64| x.exp(), (0.0, 1.0), 12, 3).unwrap();
        assert_eq!(*result.cumulative.last().unwrap(), result.integral);
    }

    #[test]
    fn test_cumulative_trace_is_prefix_integral() {
        // For f(x) = x with order 1, the trace at an interior x_k carries a
        // full weight there instead of the trapezoid's half weight, so it
        // equals x_k²/2 plus an excess of h·x_k/2.
        let result = newton_cotes(|x| x, (0.0, 1.0), 10, 1).unwrap();
        let h = 0.1;
        let last = result.x.len() - 1;
        for (k, (&xk, &ik)) in result.x.iter().zip(&result.cumulative).enumerate() {
            if k == 0 {
                assert_eq!(ik, 0.0);
            } else if k < last {
                let expected = xk * xk / 2.0 + h * xk / 2.0;
                assert_relative_eq!(ik, expected, epsilon = 1e-14);
            } else {
                // Endpoint weight restores the exact trapezoid total.
                assert_relative_eq!(ik, 0.5, epsilon = 1e-14);
            }
        }
    }

    #[test]
    fn test_abscissas_uniform_and_inclusive() {
        let result = newton_cotes(|_| 1.0, (-1.0, 3.0), 16, 2).unwrap();
        assert_eq!(result.x.len(), 17);
        let h = 4.0 / 16.0;
        assert_eq!(result.x[0], -1.0);
        assert_relative_eq!(*result.x.last().unwrap(), 3.0, epsilon = 1e-14);
        for pair in result.x.windows(2) {
            assert!(pair[1] > pair[0]);
            assert_relative_eq!(pair[1] - pair[0], h, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_invalid_steps_rejected() {
        // 5 is not a multiple of 2.
        let err = newton_cotes(|x| x, (0.0, 1.0), 5, 2).unwrap_err();
        assert_eq!(err, QuadError::InvalidSteps { steps: 5, order: 2 });

        let err = newton_cotes(|x| x, (0.0, 1.0), 0, 1).unwrap_err();
        assert_eq!(err, QuadError::InvalidSteps { steps: 0, order: 1 });
    }

    #[test]
    #[should_panic]
    fn test_order_out_of_range_panics() {
        let _ = newton_cotes(|x| x, (0.0, 1.0), 10, 5);
    }

    #[test]
    fn test_reversed_interval_flips_sign() {
        // Not validated: a reversed interval gives a negative step size and a
        // sign-flipped result.
        let forward = newton_cotes(|x| x * x, (0.0, 1.0), 10, 2).unwrap();
        let reversed = newton_cotes(|x| x * x, (1.0, 0.0), 10, 2).unwrap();
        assert_relative_eq!(reversed.integral, -forward.integral, epsilon = 1e-15);
    }

    #[test]
    fn test_f32_accumulation_is_coarser() {
        let n = 10_000;
        let exact = 1.0 / 3.0;
        let fine = newton_cotes_with::<_, F64Sum>(|x| x * x, (0.0, 1.0), n, 1)
            .unwrap()
            .integral;
        let coarse = newton_cotes_with::<_, F32Sum>(|x| x * x, (0.0, 1.0), n, 1)
            .unwrap()
            .integral;
        assert!((coarse - exact).abs() > (fine - exact).abs());
    }

    #[test]
    fn test_kahan_accumulation_no_worse_than_naive() {
        // A constant integrand has zero truncation error for every order, so
        // any deviation from 0.1 is pure accumulation rounding.
        let n = 100_000;
        let naive = newton_cotes_with::<_, F64Sum>(|_| 0.1, (0.0, 1.0), n, 1)
            .unwrap()
            .integral;
        let kahan = newton_cotes_with::<_, KahanSum>(|_| 0.1, (0.0, 1.0), n, 1)
            .unwrap()
            .integral;
        assert!((kahan - 0.1).abs() <= (naive - 0.1).abs());
        assert!((kahan - 0.1).abs() < 1e-15);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            // --- Output shapes and the trace/total invariant ---
            #[test]
            fn structural_invariants(
                order in 1_usize..=4,
                multiple in 1_usize..=25,
                a in -10.0_f64..10.0,
                width in 0.1_f64..10.0,
            ) {
                let steps = order * multiple;
                let result = newton_cotes(|x: f64| x.cos(), (a, a + width), steps, order).unwrap();

                prop_assert_eq!(result.x.len(), steps + 1);
                prop_assert_eq!(result.cumulative.len(), steps + 1);
                prop_assert_eq!(*result.cumulative.last().unwrap(), result.integral);

                let h = width / steps as f64;
                for pair in result.x.windows(2) {
                    prop_assert!((pair[1] - pair[0] - h).abs() < 1e-12);
                }
            }

            // --- Any non-multiple step count is rejected ---
            #[test]
            fn non_multiple_steps_rejected(
                order in 2_usize..=4,
                steps in 1_usize..1000,
            ) {
                prop_assume!(steps % order != 0);
                let err = newton_cotes(|x| x, (0.0, 1.0), steps, order).unwrap_err();
                prop_assert_eq!(err, QuadError::InvalidSteps { steps, order });
            }
        }
    }
}
