//! Shared helpers for conformal projections
//!
//! Naming follows the usual cartographic notation: `ms` is the radius of
//! the parallel divided by `a`, `ts` the isometric-latitude function used by
//! conformal conic and Mercator projections.

use std::f64::consts::{FRAC_PI_2, PI};

/// Threshold used to detect poles and coincident standard parallels
pub const EPSLN: f64 = 1.0e-10;

/// Convergence threshold for the inverse latitude iteration
const PHI_TOLERANCE: f64 = 1.0e-15;
const PHI_MAX_ITERATIONS: usize = 30;

/// Radius of the parallel at `phi`, in units of the semi-major axis
pub fn msfnz(e: f64, sinphi: f64, cosphi: f64) -> f64 {
    let con = e * sinphi;
    cosphi / (1.0 - con * con).sqrt()
}

/// Isometric latitude function t(phi)
pub fn tsfnz(e: f64, phi: f64, sinphi: f64) -> f64 {
    let con = e * sinphi;
    let com = 0.5 * e;
    let con = ((1.0 - con) / (1.0 + con)).powf(com);
    (0.5 * (FRAC_PI_2 - phi)).tan() / con
}

/// Inverse of [`tsfnz`]: latitude from t by fixed-point iteration
///
/// Returns NaN when the iteration does not converge or when `ts` is NaN.
pub fn phi2z(e: f64, ts: f64) -> f64 {
    let eccnth = 0.5 * e;
    let mut phi = FRAC_PI_2 - 2.0 * ts.atan();

    for _ in 0..PHI_MAX_ITERATIONS {
        let con = e * phi.sin();
        let dphi = FRAC_PI_2 - 2.0 * (ts * ((1.0 - con) / (1.0 + con)).powf(eccnth)).atan() - phi;
        phi += dphi;
        if dphi.abs() <= PHI_TOLERANCE {
            return phi;
        }
    }

    f64::NAN
}

/// Wrap a longitude in radians back into [-PI, PI]
pub fn adjust_lon(lon: f64) -> f64 {
    if lon.abs() <= PI {
        lon
    } else {
        lon - lon.signum() * 2.0 * PI
    }
}
