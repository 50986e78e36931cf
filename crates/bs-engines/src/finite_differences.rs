//! Finite-difference PDE pricing.
//!
//! Solves the Black–Scholes PDE backward from maturity on a uniform
//! log-price grid. In `x = ln S` the PDE has constant coefficients,
//!
//! `∂V/∂t + D·∂²V/∂x² + β·∂V/∂x − r·V = 0`, `D = σ²/2`, `β = r − σ²/2`,
//!
//! so the discretisation weights are the same at every interior node. The
//! spatial operator uses exponentially-fitted (Scharfetter–Gummel) weights,
//! which stay monotone for any ratio of convection to diffusion; time
//! integration is Crank–Nicolson with Dirichlet boundary values injected at
//! each step and a tridiagonal solve per step.
//!
//! # Overview
//!
//! * [`TridiagonalOperator`] — tridiagonal matrix with Thomas-algorithm solver
//! * [`FittedFdmSolver`] — the grid solver; [`fdm_price`] is the convenience
//!   entry point
//! * [`interpolate_at`] — linear interpolation with boundary clamping

use bs_core::{Real, Size, Time};
use bs_instruments::{EuropeanOption, OptionType};

// ─── Tridiagonal operator ─────────────────────────────────────────────────────

/// A tridiagonal matrix operator.
///
/// Stores the lower, diagonal, and upper bands. Row 0's lower entry and the
/// last row's upper entry are unused.
#[derive(Debug, Clone)]
pub struct TridiagonalOperator {
    /// Lower diagonal (index 0 unused — starts from row 1).
    pub lower: Vec<Real>,
    /// Main diagonal.
    pub diag: Vec<Real>,
    /// Upper diagonal (last index unused — ends at row n−2).
    pub upper: Vec<Real>,
}

impl TridiagonalOperator {
    /// Create a zero tridiagonal operator of size `n`.
    pub fn new(n: Size) -> Self {
        Self {
            lower: vec![0.0; n],
            diag: vec![0.0; n],
            upper: vec![0.0; n],
        }
    }

    /// A tridiagonal operator with the same `lower`/`diag`/`upper` weight in
    /// every row, as produced by a uniform-grid constant-coefficient
    /// discretisation.
    pub fn with_constant_rows(n: Size, lower: Real, diag: Real, upper: Real) -> Self {
        Self {
            lower: vec![lower; n],
            diag: vec![diag; n],
            upper: vec![upper; n],
        }
    }

    /// Size (number of rows/columns).
    pub fn size(&self) -> usize {
        self.diag.len()
    }

    /// Apply the operator: `y = A · x`.
    pub fn apply(&self, x: &[Real]) -> Vec<Real> {
        let n = self.size();
        assert_eq!(x.len(), n);
        let mut y = vec![0.0; n];
        y[0] = self.diag[0] * x[0] + self.upper[0] * x[1];
        for i in 1..n - 1 {
            y[i] = self.lower[i] * x[i - 1] + self.diag[i] * x[i] + self.upper[i] * x[i + 1];
        }
        y[n - 1] = self.lower[n - 1] * x[n - 2] + self.diag[n - 1] * x[n - 1];
        y
    }

    /// Solve `A · x = rhs` using the Thomas algorithm (forward elimination +
    /// back substitution).
    pub fn solve(&self, rhs: &[Real]) -> Vec<Real> {
        let n = self.size();
        assert_eq!(rhs.len(), n);

        // Forward sweep
        let mut c_prime = vec![0.0; n];
        let mut d_prime = vec![0.0; n];

        c_prime[0] = self.upper[0] / self.diag[0];
        d_prime[0] = rhs[0] / self.diag[0];

        for i in 1..n {
            let m = self.diag[i] - self.lower[i] * c_prime[i - 1];
            if i < n - 1 {
                c_prime[i] = self.upper[i] / m;
            }
            d_prime[i] = (rhs[i] - self.lower[i] * d_prime[i - 1]) / m;
        }

        // Back substitution
        let mut x = vec![0.0; n];
        x[n - 1] = d_prime[n - 1];
        for i in (0..n - 1).rev() {
            x[i] = d_prime[i] - c_prime[i] * x[i + 1];
        }

        x
    }

    /// Scale all entries by a scalar.
    pub fn scale(&mut self, factor: Real) {
        for v in &mut self.lower {
            *v *= factor;
        }
        for v in &mut self.diag {
            *v *= factor;
        }
        for v in &mut self.upper {
            *v *= factor;
        }
    }

    /// Add the identity matrix scaled by `factor`: `A ← A + factor · I`.
    pub fn add_identity(&mut self, factor: Real) {
        for d in &mut self.diag {
            *d += factor;
        }
    }
}

// ─── Exponential fitting ──────────────────────────────────────────────────────

/// The Scharfetter–Gummel fitting function `B(z) = z / (exp(z) − 1)`.
///
/// Near `z = 0` the quotient cancels catastrophically, so a 4-term Taylor
/// expansion takes over below `|z| = 1e-6`.
fn fitting_weight(z: Real) -> Real {
    if z.abs() < 1e-6 {
        // series: 1 - z/2 + z²/12 - z⁴/720 ...
        let z2 = z * z;
        1.0 - 0.5 * z + z2 / 12.0 - z2 * z2 / 720.0
    } else {
        z / (z.exp() - 1.0)
    }
}

// ─── Step-count selection ─────────────────────────────────────────────────────

/// Number of time steps satisfying the diffusion and convection step-size
/// bounds, floored at both the requested minimum and `6·nodes`, and capped
/// at 20000 to bound worst-case runtime.
///
/// The bounds are the explicit-scheme stability margins; Crank–Nicolson does
/// not need them for stability, but honouring them suppresses the scheme's
/// finite oscillations and improves accuracy.
fn stable_step_count(
    maturity: Time,
    hx: Real,
    diffusion: Real,
    drift: Real,
    min_steps: Size,
    nodes: Size,
) -> Size {
    let dt_diff = 0.45 * hx * hx / diffusion.max(1e-16);
    let dt_conv = 0.80 * hx / (drift.abs() + 1e-12);
    let dt_cap = dt_diff.min(dt_conv);
    let needed = (maturity / dt_cap.max(1e-12)).ceil() as Size;
    min_steps.max(needed).max(6 * nodes).min(20_000)
}

// ─── Interpolation ────────────────────────────────────────────────────────────

/// Linear interpolation of `values` at `spot` over the sorted price levels
/// `prices`, clamping to the nearest boundary value when `spot` lies outside
/// the grid.
pub fn interpolate_at(prices: &[Real], values: &[Real], spot: Real) -> Real {
    let n = prices.len();
    assert_eq!(values.len(), n);
    assert!(n >= 2, "need at least two grid nodes to interpolate");

    if spot <= prices[0] {
        return values[0];
    }
    if spot >= prices[n - 1] {
        return values[n - 1];
    }
    let i = (prices.partition_point(|&p| p <= spot) - 1).min(n - 2);
    let w = (spot - prices[i]) / (prices[i + 1] - prices[i]);
    (1.0 - w) * values[i] + w * values[i + 1]
}

// ─── The grid solver ──────────────────────────────────────────────────────────

/// Exponentially-fitted Crank–Nicolson solver for European vanilla options.
///
/// `nodes` is the number of spatial grid intervals (the grid has `nodes + 1`
/// price levels); `min_steps` is the minimum number of time steps — the
/// effective count is raised to whatever the stability bounds require.
///
/// Each call to [`price`](Self::price) builds a fresh grid and value array;
/// nothing is cached between calls.
#[derive(Debug, Clone, Copy)]
pub struct FittedFdmSolver {
    nodes: Size,
    min_steps: Size,
}

impl FittedFdmSolver {
    /// Create a new solver.
    pub fn new(nodes: Size, min_steps: Size) -> Self {
        assert!(nodes >= 3, "need at least 3 grid intervals, got {nodes}");
        Self { nodes, min_steps }
    }

    /// Solve the PDE backward from maturity and return the present value at
    /// the contract's spot.
    pub fn price(&self, opt: &EuropeanOption) -> Real {
        let (s0, k) = (opt.spot(), opt.strike());
        let (r, sigma, maturity) = (opt.rate(), opt.volatility(), opt.maturity());
        let n = self.nodes;

        // Domain: ±4 standard deviations of log-price movement, and always
        // past 4× strike so boundary effects stay away from S0 and K.
        let vol_r = sigma * maturity.sqrt();
        let s_min = (s0 * (-4.0 * vol_r).exp()).max(1e-12);
        let s_max = (4.0 * k).max(s0 * (4.0 * vol_r).exp());
        let x_l = s_min.ln();
        let x_r = s_max.ln();
        let hx = (x_r - x_l) / n as Real;
        let s: Vec<Real> = (0..=n).map(|i| (x_l + i as Real * hx).exp()).collect();

        // Fitted spatial weights, uniform across interior rows.
        let diffusion = 0.5 * sigma * sigma;
        let drift = r - 0.5 * sigma * sigma;
        let peclet = drift * hx / diffusion.max(1e-16);
        let coef = diffusion / (hx * hx);
        let a_lower = coef * fitting_weight(peclet);
        let a_upper = coef * fitting_weight(-peclet);
        let a_diag = -(a_lower + a_upper) - r;

        let m = stable_step_count(maturity, hx, diffusion, drift, self.min_steps, n);
        let dt = maturity / m as Real;

        // Crank–Nicolson matrices over the interior nodes, built once:
        // implicit (I − ½·dt·L) and explicit (I + ½·dt·L). Only the RHS and
        // the boundary injections change from step to step.
        let n_in = n - 1;
        let operator = TridiagonalOperator::with_constant_rows(n_in, a_lower, a_diag, a_upper);
        let mut implicit = operator.clone();
        implicit.scale(-0.5 * dt);
        implicit.add_identity(1.0);
        let mut explicit = operator;
        explicit.scale(0.5 * dt);
        explicit.add_identity(1.0);

        // Terminal condition: the payoff at every interior price level.
        let mut values: Vec<Real> = s[1..n].iter().map(|&si| opt.payoff(si)).collect();

        // Dirichlet boundary values as functions of time-to-maturity τ.
        // Put: V(S→0) = K·e^{-rτ}, V(S→∞) = 0; call is the mirror image.
        let s_right = s[n];
        let option_type = opt.option_type();
        let boundary_left = |tau: Time| match option_type {
            OptionType::Call => 0.0,
            OptionType::Put => k * (-r * tau).exp(),
        };
        let boundary_right = |tau: Time| match option_type {
            OptionType::Call => s_right - k * (-r * tau).exp(),
            OptionType::Put => 0.0,
        };

        // March backward from maturity (τ = 0) to the valuation date (τ = T).
        for step in 0..m {
            let tau_known = step as Real * dt;
            let tau_next = (step + 1) as Real * dt;

            let mut rhs = explicit.apply(&values);
            // Boundary contributions enter the first and last interior
            // equations from both time layers (½ each, as in the interior).
            rhs[0] += 0.5 * dt * a_lower * (boundary_left(tau_known) + boundary_left(tau_next));
            rhs[n_in - 1] +=
                0.5 * dt * a_upper * (boundary_right(tau_known) + boundary_right(tau_next));

            values = implicit.solve(&rhs);
        }

        // Rebuild the full value array at the valuation date and read off S0.
        let mut full = Vec::with_capacity(n + 1);
        full.push(boundary_left(maturity));
        full.extend_from_slice(&values);
        full.push(boundary_right(maturity));

        interpolate_at(&s, &full, s0)
    }
}

/// Convenience entry point: price `opt` on a grid with `nodes` intervals and
/// at least `min_steps` time steps.
pub fn fdm_price(opt: &EuropeanOption, nodes: Size, min_steps: Size) -> Real {
    FittedFdmSolver::new(nodes, min_steps).price(opt)
}

// ─── Tests ────────────────────────────────────────────────────────────────────
