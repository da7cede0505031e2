//! Mercator projection (`+proj=merc`)
//!
//! With `+a` equal to `+b` this is the spherical Web Mercator used by
//! EPSG:3857.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use super::ellipsoid::Ellipsoid;
use super::handler::Projection;
use super::math::{adjust_lon, msfnz, phi2z, tsfnz, EPSLN};
use super::params::ProjParams;
use crate::errors::MetroResult;

/// Normal aspect Mercator on a sphere or an ellipsoid
#[derive(Debug, Clone)]
pub struct Mercator {
    a: f64,
    e: f64,
    sphere: bool,
    k0: f64,
    long0: f64,
    x0: f64,
    y0: f64,
}

impl Mercator {
    /// Build the projection from proj4 parameters
    pub fn from_params(params: &ProjParams, ellipsoid: &Ellipsoid) -> MetroResult<Self> {
        let sphere = ellipsoid.is_sphere();
        let e = ellipsoid.e();

        let k0 = match params.get_radians("lat_ts")? {
            Some(lat_ts) if sphere => lat_ts.cos(),
            Some(lat_ts) => msfnz(e, lat_ts.sin(), lat_ts.cos()),
            None => match params.get_f64("k_0")? {
                Some(k) => k,
                None => params.get_f64("k")?.unwrap_or(1.0),
            },
        };

        Ok(Mercator {
            a: ellipsoid.a,
            e,
            sphere,
            k0,
            long0: params.get_radians("lon_0")?.unwrap_or(0.0),
            x0: params.get_f64("x_0")?.unwrap_or(0.0),
            y0: params.get_f64("y_0")?.unwrap_or(0.0),
        })
    }
}

impl Projection for Mercator {
    fn forward(&self, lam: f64, phi: f64) -> (f64, f64) {
        if phi.abs() > FRAC_PI_2 || (phi.abs() - FRAC_PI_2).abs() <= EPSLN {
            return (f64::NAN, f64::NAN);
        }

        let x = self.x0 + self.a * self.k0 * adjust_lon(lam - self.long0);
        let y = if self.sphere {
            self.y0 + self.a * self.k0 * (FRAC_PI_4 + 0.5 * phi).tan().ln()
        } else {
            let ts = tsfnz(self.e, phi, phi.sin());
            self.y0 - self.a * self.k0 * ts.ln()
        };

        (x, y)
    }

    fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        let x = x - self.x0;
        let y = y - self.y0;

        let lat = if self.sphere {
            FRAC_PI_2 - 2.0 * (-y / (self.a * self.k0)).exp().atan()
        } else {
            let ts = (-y / (self.a * self.k0)).exp();
            phi2z(self.e, ts)
        };
        let lon = adjust_lon(self.long0 + x / (self.a * self.k0));

        (lon, lat)
    }

    fn name(&self) -> &'static str {
        "merc"
    }
}
