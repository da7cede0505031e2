//! Tests for the Lambert Conformal Conic projection

use crate::projection::{Ellipsoid, LambertConformalConic, ProjParams, Projection};

fn lambert93() -> LambertConformalConic {
    let params = ProjParams::parse(
        "+proj=lcc +lat_1=49 +lat_2=44 +lat_0=46.5 +lon_0=3 +x_0=700000 +y_0=6600000 +ellps=GRS80",
    )
    .unwrap();
    LambertConformalConic::from_params(&params, &Ellipsoid::GRS80).unwrap()
}

#[test]
fn test_lambert93_cone_constant() {
    // Published value for RGF93 / Lambert-93
    assert!((lambert93().cone_constant() - 0.7256077650532670).abs() < 1e-12);
}

#[test]
fn test_origin_maps_to_false_origin() {
    let lcc = lambert93();
    let (x, y) = lcc.forward(3.0_f64.to_radians(), 46.5_f64.to_radians());
    assert!((x - 700000.0).abs() < 1e-6);
    assert!((y - 6600000.0).abs() < 1e-6);

    let (lam, phi) = lcc.inverse(700000.0, 6600000.0);
    assert!((lam.to_degrees() - 3.0).abs() < 1e-12);
    assert!((phi.to_degrees() - 46.5).abs() < 1e-12);
}

#[test]
fn test_paris_forward() {
    let (x, y) = lambert93().forward(2.3522_f64.to_radians(), 48.8566_f64.to_radians());
    assert!((x - 652469.0227).abs() < 1e-3, "x = {}", x);
    assert!((y - 6862035.2594).abs() < 1e-3, "y = {}", y);
}

#[test]
fn test_inverse_round_trip_across_france() {
    let lcc = lambert93();
    for &(x, y) in &[(100000.0, 6100000.0), (652000.0, 6862000.0), (1200000.0, 7100000.0), (1240000.0, 6050000.0)] {
        let (lam, phi) = lcc.inverse(x, y);
        let (x2, y2) = lcc.forward(lam, phi);
        assert!((x2 - x).abs() < 1e-6, "x {} -> {}", x, x2);
        assert!((y2 - y).abs() < 1e-6, "y {} -> {}", y, y2);
    }
}

#[test]
fn test_nan_propagates() {
    let (x, y) = lambert93().forward(f64::NAN, 0.8);
    assert!(x.is_nan() && y.is_nan());
    let (x, y) = lambert93().forward(0.05, f64::NAN);
    assert!(x.is_nan() && y.is_nan());
    let (lam, phi) = lambert93().inverse(f64::NAN, 6600000.0);
    assert!(lam.is_nan() && phi.is_nan());
}

#[test]
fn test_poles_stay_finite() {
    use std::f64::consts::FRAC_PI_2;

    let lon0 = 3f64.to_radians();
    let (x, y) = lambert93().forward(lon0, FRAC_PI_2);
    assert!((x - 700000.0).abs() < 1e-3);
    assert!(y.is_finite() && y > 6600000.0);

    let (x, y) = lambert93().forward(lon0, -FRAC_PI_2);
    assert!((x - 700000.0).abs() < 1e-3);
    assert!(y.is_finite() && y < -1e12);
}

#[test]
fn test_symmetric_parallels_rejected() {
    let params = ProjParams::parse("+proj=lcc +lat_1=30 +lat_2=-30").unwrap();
    assert!(LambertConformalConic::from_params(&params, &Ellipsoid::GRS80).is_err());
}

#[test]
fn test_single_parallel_with_scale() {
    let params = ProjParams::parse("+proj=lcc +lat_1=46.8 +lat_0=46.8 +lon_0=0 +k_0=0.99987742 +x_0=600000 +y_0=2200000").unwrap();
    let lcc = LambertConformalConic::from_params(&params, &Ellipsoid::named("clrk80ign").unwrap()).unwrap();
    let (x, y) = lcc.forward(0.0, 46.8_f64.to_radians());
    assert!((x - 600000.0).abs() < 1e-6);
    assert!((y - 2200000.0).abs() < 1e-6);
}
