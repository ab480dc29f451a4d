#![forbid(unsafe_code)]

//! Damped harmonic oscillator (spring) integrator.
//!
//! Advances a scalar `(position, velocity)` pair one fixed time-step toward a
//! target, using the exact closed-form solution of
//!
//!   x'' = -ω² (x - target) - 2ζω x'
//!
//! # Parameters
//!
//! - **angular frequency** (ω, rad/s): how fast the spring swings. Higher =
//!   snappier motion.
//! - **damping ratio** (ζ): how quickly oscillation decays.
//!   - Under-damped (ζ < 1): overshoots and rings before settling
//!   - Critically damped (ζ = 1): fastest approach without overshoot
//!   - Over-damped (ζ > 1): slow approach, no overshoot
//! - **sample rate** (steps per second): every [`step`] advances by exactly
//!   `1 / sample_rate` seconds.
//!
//! # Integration
//!
//! Because the time-step is fixed, the analytic solution collapses into a
//! 2×2 linear map on `(position - target, velocity)`. [`SpringParams::new`]
//! computes the four coefficients once; each [`step`] is then four
//! multiply-adds and is unconditionally stable for any step size.
//!
//! # Invariants
//!
//! 1. [`step`] is pure: same inputs, same output, bit for bit.
//! 2. A state exactly at its target with zero velocity is a fixed point.
//! 3. With ζ ≥ 1 the position never crosses the target when starting from
//!    rest.
//! 4. Angular frequency and damping ratio are never negative (clamped on
//!    construction). ω = 0 yields the identity step.
//!
//! # Failure Modes
//!
//! None are reported. Non-finite inputs propagate through the arithmetic; the
//! animation only ever feeds fixed, known-good constants.

/// Threshold for treating a damping ratio as exactly critical.
const CRITICAL_EPSILON: f64 = f64::EPSILON;

/// Physical state of one animated channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringState {
    pub position: f64,
    pub velocity: f64,
    pub target: f64,
}

impl SpringState {
    /// A motionless state at `position`, targeting `target`.
    #[must_use]
    pub const fn new(position: f64, target: f64) -> Self {
        Self {
            position,
            velocity: 0.0,
            target,
        }
    }

    /// A motionless state at the origin targeting the origin.
    #[must_use]
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Signed distance from the target.
    #[inline]
    #[must_use]
    pub fn error(&self) -> f64 {
        self.position - self.target
    }

    /// Settling predicate: visually arrived and no residual momentum.
    ///
    /// Both `|position - target| < epsilon` and `|velocity| < epsilon` must
    /// hold, so a spring swinging through its target at speed is not settled.
    #[inline]
    #[must_use]
    pub fn is_settled(&self, epsilon: f64) -> bool {
        self.error().abs() < epsilon && self.velocity.abs() < epsilon
    }
}

impl Default for SpringState {
    fn default() -> Self {
        Self::origin()
    }
}

/// Damping regime selected by the damping ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Damping {
    Under,
    Critical,
    Over,
}

/// Precomputed transition coefficients for a fixed time-step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    angular_frequency: f64,
    damping_ratio: f64,
    sample_rate: f64,
    pos_pos: f64,
    pos_vel: f64,
    vel_pos: f64,
    vel_vel: f64,
}

impl SpringParams {
    /// Build the step coefficients for `sample_rate` steps per second.
    ///
    /// Negative frequency or damping are clamped to zero.
    #[must_use]
    pub fn new(sample_rate: f64, angular_frequency: f64, damping_ratio: f64) -> Self {
        let angular_frequency = angular_frequency.max(0.0);
        let damping_ratio = damping_ratio.max(0.0);
        let dt = 1.0 / sample_rate;

        let mut params = Self {
            angular_frequency,
            damping_ratio,
            sample_rate,
            pos_pos: 1.0,
            pos_vel: 0.0,
            vel_pos: 0.0,
            vel_vel: 1.0,
        };

        // A spring without stiffness never moves.
        if angular_frequency < CRITICAL_EPSILON {
            return params;
        }

        let w = angular_frequency;
        let z = damping_ratio;
        match Self::classify(z) {
            Damping::Over => {
                let za = -w * z;
                let zb = w * (z * z - 1.0).sqrt();
                let z1 = za - zb;
                let z2 = za + zb;

                let e1 = (z1 * dt).exp();
                let e2 = (z2 * dt).exp();

                let inv_two_zb = 1.0 / (2.0 * zb);
                let e1_over_two_zb = e1 * inv_two_zb;
                let e2_over_two_zb = e2 * inv_two_zb;
                let z1e1_over_two_zb = z1 * e1_over_two_zb;
                let z2e2_over_two_zb = z2 * e2_over_two_zb;

                params.pos_pos = e1_over_two_zb * z2 - z2e2_over_two_zb + e2;
                params.pos_vel = -e1_over_two_zb + e2_over_two_zb;
                params.vel_pos = (z1e1_over_two_zb - z2e2_over_two_zb + e2) * z2;
                params.vel_vel = -z1e1_over_two_zb + z2e2_over_two_zb;
            }
            Damping::Under => {
                let omega_zeta = w * z;
                let alpha = w * (1.0 - z * z).sqrt();

                let exp_term = (-omega_zeta * dt).exp();
                let cos_term = (alpha * dt).cos();
                let sin_term = (alpha * dt).sin();

                let exp_sin = exp_term * sin_term;
                let exp_cos = exp_term * cos_term;
                let exp_omega_zeta_sin_over_alpha = exp_term * omega_zeta * sin_term / alpha;

                params.pos_pos = exp_cos + exp_omega_zeta_sin_over_alpha;
                params.pos_vel = exp_sin / alpha;
                params.vel_pos = -exp_sin * alpha - omega_zeta * exp_omega_zeta_sin_over_alpha;
                params.vel_vel = exp_cos - exp_omega_zeta_sin_over_alpha;
            }
            Damping::Critical => {
                let exp_term = (-w * dt).exp();
                let time_exp = dt * exp_term;
                let time_exp_freq = time_exp * w;

                params.pos_pos = time_exp_freq + exp_term;
                params.pos_vel = time_exp;
                params.vel_pos = -w * time_exp_freq;
                params.vel_vel = -time_exp_freq + exp_term;
            }
        }

        params
    }

    fn classify(damping_ratio: f64) -> Damping {
        if damping_ratio > 1.0 + CRITICAL_EPSILON {
            Damping::Over
        } else if damping_ratio < 1.0 - CRITICAL_EPSILON {
            Damping::Under
        } else {
            Damping::Critical
        }
    }

    #[inline]
    #[must_use]
    pub fn angular_frequency(&self) -> f64 {
        self.angular_frequency
    }

    #[inline]
    #[must_use]
    pub fn damping_ratio(&self) -> f64 {
        self.damping_ratio
    }

    #[inline]
    #[must_use]
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Seconds covered by one [`step`].
    #[inline]
    #[must_use]
    pub fn time_step(&self) -> f64 {
        1.0 / self.sample_rate
    }

    /// Damping regime for these parameters.
    #[must_use]
    pub fn damping(&self) -> Damping {
        Self::classify(self.damping_ratio)
    }
}

/// Advance `state` by one time-step of `params`.
#[must_use]
pub fn step(state: SpringState, params: &SpringParams) -> SpringState {
    let offset = state.position - state.target;
    SpringState {
        position: offset * params.pos_pos + state.velocity * params.pos_vel + state.target,
        velocity: offset * params.vel_pos + state.velocity * params.vel_vel,
        target: state.target,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
