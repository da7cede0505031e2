//! Reference ellipsoids

/// An ellipsoid of revolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    /// Semi-major axis in meters
    pub a: f64,
    /// Semi-minor axis in meters
    pub b: f64,
    /// First eccentricity squared
    pub es: f64,
}

impl Ellipsoid {
    /// GRS 1980, used by RGF93 (Lambert 93)
    pub const GRS80: Ellipsoid = Ellipsoid {
        a: 6378137.0,
        b: 6356752.314140356,
        es: 0.006694380022900787,
    };
    /// WGS 84
    pub const WGS84: Ellipsoid = Ellipsoid {
        a: 6378137.0,
        b: 6356752.314245179,
        es: 0.0066943799901413165,
    };

    /// Build an ellipsoid from its semi-major axis and inverse flattening
    pub fn from_a_rf(a: f64, rf: f64) -> Self {
        let f = 1.0 / rf;
        let b = a * (1.0 - f);
        Ellipsoid { a, b, es: 2.0 * f - f * f }
    }

    /// Build an ellipsoid from both semi-axes
    pub fn from_a_b(a: f64, b: f64) -> Self {
        Ellipsoid { a, b, es: 1.0 - (b * b) / (a * a) }
    }

    /// Build a sphere of radius `r`
    pub fn sphere(r: f64) -> Self {
        Ellipsoid { a: r, b: r, es: 0.0 }
    }

    /// Look up an ellipsoid by its proj4 `+ellps` name
    pub fn named(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "grs80" => Some(Self::GRS80),
            "wgs84" => Some(Self::WGS84),
            "clrk80ign" => Some(Self::from_a_b(6378249.2, 6356515.0)),
            "clrk80" => Some(Self::from_a_rf(6378249.145, 293.4663)),
            "intl" => Some(Self::from_a_rf(6378388.0, 297.0)),
            "bessel" => Some(Self::from_a_rf(6377397.155, 299.1528128)),
            "sphere" => Some(Self::sphere(6370997.0)),
            _ => None,
        }
    }

    /// First eccentricity
    pub fn e(&self) -> f64 {
        self.es.sqrt()
    }

    /// Whether this ellipsoid is a sphere
    pub fn is_sphere(&self) -> bool {
        self.es == 0.0
    }

    /// Whether two ellipsoids are the same up to rounding of their definition
    pub fn same_shape(&self, other: &Ellipsoid) -> bool {
        (self.a - other.a).abs() <= 1e-9 && (self.es - other.es).abs() <= 5e-11
    }
}
