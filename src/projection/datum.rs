//! Geodetic datums and the WGS84 Helmert shift

use super::ellipsoid::Ellipsoid;
use super::params::ProjParams;
use crate::errors::{MetroError, MetroResult};

/// Arc-seconds to radians
const SEC_TO_RAD: f64 = 4.84813681109535993589914102357e-6;

const GEOCENTRIC_TOLERANCE: f64 = 1.0e-15;
const GEOCENTRIC_MAX_ITERATIONS: usize = 30;

/// Shift from a datum to WGS84
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DatumShift {
    /// WGS84 compatible, coordinates are used as they are
    None,
    /// Translation only (dx, dy, dz) in meters
    ThreeParam([f64; 3]),
    /// Position vector transformation: translations in meters, rotations in
    /// radians and the scale as a multiplier
    SevenParam([f64; 7]),
}

/// A datum: its ellipsoid and its relation to WGS84
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Datum {
    pub ellipsoid: Ellipsoid,
    pub shift: DatumShift,
}

impl Datum {
    /// Resolve ellipsoid and datum shift from proj4 parameters
    ///
    /// Precedence: explicit axes (`+a`, `+b`, `+rf`, `+R`), then `+ellps`, then
    /// the ellipsoid of `+datum`, then WGS84. An explicit `+towgs84` wins over
    /// the shift implied by `+datum`.
    pub fn from_params(params: &ProjParams) -> MetroResult<Self> {
        let (datum_ellipsoid, datum_shift) = match params.get_str("datum") {
            None => (None, DatumShift::None),
            Some(name) => match name.to_uppercase().as_str() {
                "WGS84" => (Some(Ellipsoid::WGS84), DatumShift::None),
                "NAD83" => (Some(Ellipsoid::GRS80), DatumShift::None),
                "NTF" => (
                    Ellipsoid::named("clrk80ign"),
                    DatumShift::ThreeParam([-168.0, -60.0, 320.0]),
                ),
                other => {
                    return Err(MetroError::InvalidDefinition(format!("unknown datum '{}'", other)))
                }
            },
        };

        let ellipsoid = match Self::explicit_ellipsoid(params)? {
            Some(ellipsoid) => ellipsoid,
            None => match params.get_str("ellps") {
                Some(name) => Ellipsoid::named(name).ok_or_else(|| {
                    MetroError::InvalidDefinition(format!("unknown ellipsoid '{}'", name))
                })?,
                None => datum_ellipsoid.unwrap_or(Ellipsoid::WGS84),
            },
        };

        let shift = match params.get_list("towgs84")? {
            Some(values) => Self::parse_towgs84(&values)?,
            None => datum_shift,
        };

        Ok(Datum { ellipsoid, shift })
    }

    fn explicit_ellipsoid(params: &ProjParams) -> MetroResult<Option<Ellipsoid>> {
        if let Some(r) = params.get_f64("r")? {
            return Ok(Some(Ellipsoid::sphere(r)));
        }

        let a = match params.get_f64("a")? {
            Some(a) => a,
            None => return Ok(None),
        };

        if let Some(b) = params.get_f64("b")? {
            Ok(Some(Ellipsoid::from_a_b(a, b)))
        } else if let Some(rf) = params.get_f64("rf")? {
            Ok(Some(Ellipsoid::from_a_rf(a, rf)))
        } else if let Some(f) = params.get_f64("f")? {
            Ok(Some(Ellipsoid::from_a_rf(a, 1.0 / f)))
        } else {
            Ok(Some(Ellipsoid::sphere(a)))
        }
    }

    fn parse_towgs84(values: &[f64]) -> MetroResult<DatumShift> {
        if values.iter().all(|v| *v == 0.0) {
            return Ok(DatumShift::None);
        }

        match values.len() {
            3 => Ok(DatumShift::ThreeParam([values[0], values[1], values[2]])),
            7 => {
                if values[3..6].iter().all(|v| *v == 0.0) && values[6] == 0.0 {
                    return Ok(DatumShift::ThreeParam([values[0], values[1], values[2]]));
                }
                Ok(DatumShift::SevenParam([
                    values[0],
                    values[1],
                    values[2],
                    values[3] * SEC_TO_RAD,
                    values[4] * SEC_TO_RAD,
                    values[5] * SEC_TO_RAD,
                    1.0 + values[6] / 1_000_000.0,
                ]))
            }
            n => Err(MetroError::InvalidDefinition(format!(
                "+towgs84 expects 3 or 7 values, got {}",
                n
            ))),
        }
    }

    /// Whether moving between these datums requires a geocentric shift
    pub fn needs_shift_to(&self, other: &Datum) -> bool {
        if self.shift == DatumShift::None && other.shift == DatumShift::None {
            return false;
        }
        !(self.shift == other.shift && self.ellipsoid.same_shape(&other.ellipsoid))
    }

    /// Geocentric coordinates on this datum to geocentric WGS84
    pub fn to_wgs84(&self, (x, y, z): (f64, f64, f64)) -> (f64, f64, f64) {
        match self.shift {
            DatumShift::None => (x, y, z),
            DatumShift::ThreeParam([dx, dy, dz]) => (x + dx, y + dy, z + dz),
            DatumShift::SevenParam([dx, dy, dz, rx, ry, rz, m]) => (
                m * (x - rz * y + ry * z) + dx,
                m * (rz * x + y - rx * z) + dy,
                m * (-ry * x + rx * y + z) + dz,
            ),
        }
    }

    /// Geocentric WGS84 coordinates to geocentric coordinates on this datum
    pub fn from_wgs84(&self, (x, y, z): (f64, f64, f64)) -> (f64, f64, f64) {
        match self.shift {
            DatumShift::None => (x, y, z),
            DatumShift::ThreeParam([dx, dy, dz]) => (x - dx, y - dy, z - dz),
            DatumShift::SevenParam([dx, dy, dz, rx, ry, rz, m]) => {
                let xt = (x - dx) / m;
                let yt = (y - dy) / m;
                let zt = (z - dz) / m;
                (
                    xt + rz * yt - ry * zt,
                    -rz * xt + yt + rx * zt,
                    ry * xt - rx * yt + zt,
                )
            }
        }
    }
}

/// Geodetic (radians, meters) to geocentric cartesian coordinates
pub fn geodetic_to_geocentric(ellipsoid: &Ellipsoid, lam: f64, phi: f64, h: f64) -> (f64, f64, f64) {
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_lam, cos_lam) = lam.sin_cos();
    let n = ellipsoid.a / (1.0 - ellipsoid.es * sin_phi * sin_phi).sqrt();

    (
        (n + h) * cos_phi * cos_lam,
        (n + h) * cos_phi * sin_lam,
        (n * (1.0 - ellipsoid.es) + h) * sin_phi,
    )
}

/// Geocentric cartesian coordinates to geodetic (radians, meters)
pub fn geocentric_to_geodetic(ellipsoid: &Ellipsoid, (x, y, z): (f64, f64, f64)) -> (f64, f64, f64) {
    let p = x.hypot(y);
    let lam = y.atan2(x);

    if p == 0.0 {
        let phi = if z >= 0.0 {
            std::f64::consts::FRAC_PI_2
        } else {
            -std::f64::consts::FRAC_PI_2
        };
        return (lam, phi, z.abs() - ellipsoid.b);
    }

    let es = ellipsoid.es;
    let mut phi = z.atan2(p * (1.0 - es));
    let mut h = 0.0;

    for _ in 0..GEOCENTRIC_MAX_ITERATIONS {
        let sin_phi = phi.sin();
        let n = ellipsoid.a / (1.0 - es * sin_phi * sin_phi).sqrt();
        h = p / phi.cos() - n;
        let next = z.atan2(p * (1.0 - es * n / (n + h)));
        let delta = (next - phi).abs();
        phi = next;
        if delta <= GEOCENTRIC_TOLERANCE {
            break;
        }
    }

    (lam, phi, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_towgs84_is_no_shift() {
        let params = ProjParams::parse("+ellps=GRS80 +towgs84=0,0,0,0,0,0,0").unwrap();
        let datum = Datum::from_params(&params).unwrap();
        assert_eq!(datum.shift, DatumShift::None);
        assert_eq!(datum.ellipsoid, Ellipsoid::GRS80);
    }

    #[test]
    fn test_wgs84_datum() {
        let params = ProjParams::parse("+proj=longlat +datum=WGS84").unwrap();
        let datum = Datum::from_params(&params).unwrap();
        assert_eq!(datum.ellipsoid, Ellipsoid::WGS84);
        assert!(!datum.needs_shift_to(&Datum { ellipsoid: Ellipsoid::GRS80, shift: DatumShift::None }));
    }

    #[test]
    fn test_bad_towgs84_length() {
        let params = ProjParams::parse("+towgs84=1,2").unwrap();
        assert!(Datum::from_params(&params).is_err());
    }

    #[test]
    fn test_geocentric_round_trip() {
        let ellipsoid = Ellipsoid::GRS80;
        let (lam, phi) = (2.3522_f64.to_radians(), 48.8566_f64.to_radians());
        let xyz = geodetic_to_geocentric(&ellipsoid, lam, phi, 35.0);
        let (lam2, phi2, h2) = geocentric_to_geodetic(&ellipsoid, xyz);
        assert!((lam2 - lam).abs() < 1e-14);
        assert!((phi2 - phi).abs() < 1e-14);
        assert!((h2 - 35.0).abs() < 1e-6);
    }

    #[test]
    fn test_helmert_round_trip() {
        let params = ProjParams::parse("+a=6378249.2 +b=6356515 +towgs84=-168,-60,320,1.2,-0.5,0.8,2.1").unwrap();
        let datum = Datum::from_params(&params).unwrap();
        assert!(matches!(datum.shift, DatumShift::SevenParam(_)));

        let xyz = (4201000.0, 172000.0, 4780000.0);
        let back = datum.from_wgs84(datum.to_wgs84(xyz));
        assert!((back.0 - xyz.0).abs() < 1e-2);
        assert!((back.1 - xyz.1).abs() < 1e-2);
        assert!((back.2 - xyz.2).abs() < 1e-2);
    }
}
