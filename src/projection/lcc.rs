//! Lambert Conformal Conic projection (`+proj=lcc`)
//!
//! Handles both the one standard parallel form (scale factor `k_0` on
//! `lat_1`) and the two standard parallel form used by Lambert 93.

use std::f64::consts::FRAC_PI_2;

use super::ellipsoid::Ellipsoid;
use super::handler::Projection;
use super::math::{adjust_lon, msfnz, phi2z, tsfnz, EPSLN};
use super::params::ProjParams;
use crate::errors::{MetroError, MetroResult};

/// Lambert Conformal Conic on an ellipsoid
#[derive(Debug, Clone)]
pub struct LambertConformalConic {
    a: f64,
    e: f64,
    k0: f64,
    /// Cone constant
    ns: f64,
    /// Scaled constant F of the cone
    f0: f64,
    /// Radius of the parallel of origin
    rh: f64,
    long0: f64,
    x0: f64,
    y0: f64,
}

impl LambertConformalConic {
    /// Build the projection from proj4 parameters
    pub fn from_params(params: &ProjParams, ellipsoid: &Ellipsoid) -> MetroResult<Self> {
        let lat0_param = params.get_radians("lat_0")?;
        let lat1 = params.get_radians("lat_1")?.or(lat0_param).unwrap_or(0.0);
        let lat2 = params.get_radians("lat_2")?.unwrap_or(lat1);
        let lat0 = lat0_param.unwrap_or(lat1);
        let long0 = params.get_radians("lon_0")?.unwrap_or(0.0);
        let k0 = match params.get_f64("k_0")? {
            Some(k) => k,
            None => params.get_f64("k")?.unwrap_or(1.0),
        };
        let x0 = params.get_f64("x_0")?.unwrap_or(0.0);
        let y0 = params.get_f64("y_0")?.unwrap_or(0.0);

        Self::new(ellipsoid, lat0, lat1, lat2, long0, k0, (x0, y0))
    }

    /// Build the projection from angles in radians
    pub fn new(
        ellipsoid: &Ellipsoid,
        lat0: f64,
        lat1: f64,
        lat2: f64,
        long0: f64,
        k0: f64,
        false_origin: (f64, f64),
    ) -> MetroResult<Self> {
        if (lat1 + lat2).abs() < EPSLN {
            return Err(MetroError::InvalidDefinition(
                "lcc standard parallels are symmetric around the equator".to_string(),
            ));
        }

        let a = ellipsoid.a;
        let e = ellipsoid.e();

        let (sin1, cos1) = lat1.sin_cos();
        let ms1 = msfnz(e, sin1, cos1);
        let ts1 = tsfnz(e, lat1, sin1);

        let (sin2, cos2) = lat2.sin_cos();
        let ms2 = msfnz(e, sin2, cos2);
        let ts2 = tsfnz(e, lat2, sin2);

        let ts0 = tsfnz(e, lat0, lat0.sin());

        let mut ns = if (lat1 - lat2).abs() > EPSLN {
            (ms1 / ms2).ln() / (ts1 / ts2).ln()
        } else {
            sin1
        };
        if ns.is_nan() {
            ns = sin1;
        }

        let f0 = ms1 / (ns * ts1.powf(ns));
        let rh = a * f0 * ts0.powf(ns);

        Ok(LambertConformalConic {
            a,
            e,
            k0,
            ns,
            f0,
            rh,
            long0,
            x0: false_origin.0,
            y0: false_origin.1,
        })
    }

    /// Cone constant n
    pub fn cone_constant(&self) -> f64 {
        self.ns
    }
}

impl Projection for LambertConformalConic {
    fn forward(&self, lam: f64, phi: f64) -> (f64, f64) {
        let mut lat = phi;

        // Nudge exact poles so the isometric latitude stays finite
        if ((2.0 * lat.abs()) - std::f64::consts::PI).abs() <= EPSLN {
            lat = lat.signum() * (FRAC_PI_2 - 2.0 * EPSLN);
        }

        let ts = tsfnz(self.e, lat, lat.sin());
        let rh1 = self.a * self.f0 * ts.powf(self.ns);

        let theta = self.ns * adjust_lon(lam - self.long0);
        let x = self.k0 * (rh1 * theta.sin()) + self.x0;
        let y = self.k0 * (self.rh - rh1 * theta.cos()) + self.y0;

        (x, y)
    }

    fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        let x = (x - self.x0) / self.k0;
        let y = self.rh - (y - self.y0) / self.k0;

        let (rh1, con) = if self.ns > 0.0 {
            ((x * x + y * y).sqrt(), 1.0)
        } else {
            (-(x * x + y * y).sqrt(), -1.0)
        };

        let theta = if rh1 != 0.0 {
            (con * x).atan2(con * y)
        } else {
            0.0
        };

        let lat = if rh1 != 0.0 || self.ns > 0.0 {
            let ts = (rh1 / (self.a * self.f0)).powf(1.0 / self.ns);
            phi2z(self.e, ts)
        } else {
            -FRAC_PI_2
        };

        let lon = adjust_lon(theta / self.ns + self.long0);

        (lon, lat)
    }

    fn name(&self) -> &'static str {
        "lcc"
    }
}
