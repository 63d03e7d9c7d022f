//! Kepler equation solvers used to locate a body on its conic at epoch.

use core::f64::consts::{PI, TAU};

/// A constant used to get the initial seed for the eccentric anomaly.
///
/// Source:
/// "Two fast and accurate routines for solving the elliptic Kepler
/// equation for all values of the eccentricity and mean anomaly"
/// by Daniele Tommasini and David N. Olivieri,
/// section 2.1.2, 'The "rational seed"'
///
/// <https://doi.org/10.1051/0004-6361/202141423>
const B: f64 = 0.999999;

/// Order of the Laguerre iteration.
const LAGUERRE_N: f64 = 5.0;

/// The maximum number of iterations for the numerical approach algorithms.
///
/// This is used to prevent infinite loops in case the method fails to converge.
const NUMERIC_MAX_ITERS: u32 = 1000;

/// Convergence threshold on the step size, in radians.
const TOLERANCE: f64 = 1e-14;

const PI_SQUARED: f64 = PI * PI;

#[inline]
fn keplers_equation(mean_anomaly: f64, eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    eccentric_anomaly - eccentricity * eccentric_anomaly.sin() - mean_anomaly
}

/// Solves `E - e sin E = M` for an elliptic orbit (`0 <= e < 1`).
///
/// The result lies in `(-PI, PI]` offset by the same number of turns the
/// mean anomaly was reduced by, so it is continuous in `M`.
///
/// # Source
/// Seed from Tommasini & Olivieri, equation 19; refinement with the Laguerre
/// method from
/// "An improved algorithm due to laguerre for the solution of Kepler's equation."
/// by Bruce A. Conway
/// <https://doi.org/10.1007/bf01230852>
pub fn eccentric_anomaly_elliptic(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let turns = (mean_anomaly / TAU).round();
    let mut reduced = mean_anomaly - turns * TAU;

    let mut sign = 1.0;
    if reduced < 0.0 {
        reduced = -reduced;
        sign = -1.0;
    }

    // E_0 = M + (4beM(pi - M)) / (8eM + 4e(e-pi) + pi^2)
    let mut eccentric_anomaly = reduced
        + (4.0 * eccentricity * B * reduced * (PI - reduced))
            / (8.0 * eccentricity * reduced
                + 4.0 * eccentricity * (eccentricity - PI)
                + PI_SQUARED);

    let n = LAGUERRE_N;
    for _ in 0..NUMERIC_MAX_ITERS {
        let f = keplers_equation(reduced, eccentric_anomaly, eccentricity);
        let fp = 1.0 - eccentricity * eccentric_anomaly.cos();
        let fpp = eccentricity * eccentric_anomaly.sin();

        let d = ((n - 1.0).powi(2) * fp * fp - n * (n - 1.0) * f * fpp)
            .abs()
            .sqrt()
            .copysign(fp);

        let step = n * f / (fp + d);
        if !step.is_finite() {
            break;
        }

        eccentric_anomaly -= step;

        if step.abs() < TOLERANCE {
            break;
        }
    }

    sign * eccentric_anomaly + turns * TAU
}

/// Solves `e sinh H - H = M` for a hyperbolic orbit (`e > 1`) with
/// Newton's method.
pub fn eccentric_anomaly_hyperbolic(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let mut hyperbolic_anomaly = (mean_anomaly / eccentricity).asinh();

    for _ in 0..NUMERIC_MAX_ITERS {
        let f = eccentricity * hyperbolic_anomaly.sinh() - hyperbolic_anomaly - mean_anomaly;
        let fp = eccentricity * hyperbolic_anomaly.cosh() - 1.0;

        let step = f / fp;
        if !step.is_finite() {
            break;
        }

        hyperbolic_anomaly -= step;

        if step.abs() < TOLERANCE * hyperbolic_anomaly.abs().max(1.0) {
            break;
        }
    }

    hyperbolic_anomaly
}

/// Solves Barker's equation `D + D^3 / 3 = M` for a parabolic orbit,
/// returning `D = tan(f / 2)`.
///
/// With `D = 2 sinh(t)` the equation becomes `sinh(3t) = 3M / 2`.
pub fn parabolic_anomaly(mean_anomaly: f64) -> f64 {
    2.0 * ((1.5 * mean_anomaly).asinh() / 3.0).sinh()
}

/// Converts an eccentric anomaly into a true anomaly on an elliptic orbit.
pub fn true_anomaly_elliptic(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    // https://en.wikipedia.org/wiki/True_anomaly#From_the_eccentric_anomaly
    let (s, c) = eccentric_anomaly.sin_cos();
    let beta = eccentricity / (1.0 + (1.0 - eccentricity * eccentricity).sqrt());

    eccentric_anomaly + 2.0 * (beta * s / (1.0 - beta * c)).atan()
}

/// Converts a hyperbolic eccentric anomaly into a true anomaly.
pub fn true_anomaly_hyperbolic(hyperbolic_anomaly: f64, eccentricity: f64) -> f64 {
    // tan(f/2) = sqrt((e+1)/(e-1)) * tanh(H/2)
    2.0 * (((eccentricity + 1.0) / (eccentricity - 1.0)).sqrt() * (hyperbolic_anomaly * 0.5).tanh())
        .atan()
}
