//! Reading raw open-data records and writing clean ones

use serde_json::json;

use crate::model::{Access, Line, Zone, ZoneAccessRelationship, ZoneLineRelationship};

#[test]
fn test_access_from_raw_columns() {
    let raw = json!({
        "accid": "ACC1",
        "accname": "Rue de Rivoli",
        "accshortname": "2",
        "accxespg2154": 652310.0,
        "accyespg2154": "6862250",
        "accgeopoint": {"lon": 2.3497, "lat": 48.8587},
        "acctxt": "ignored"
    });

    let access: Access = serde_json::from_value(raw).unwrap();
    assert_eq!(access.id, "ACC1");
    assert_eq!(access.short_name, Some(2));
    assert_eq!(access.x_lambert_93, 652310);
    assert_eq!(access.y_lambert_93, 6862250);
    assert_eq!(access.geo_point.lat, 48.8587);

    let clean = serde_json::to_value(&access).unwrap();
    assert_eq!(clean["x_lambert_93"], json!(652310));
    assert_eq!(clean["geo_point"]["lon"], json!(2.3497));
    assert!(clean.get("accid").is_none());
}

#[test]
fn test_access_short_name_absent_or_null() {
    let base = json!({
        "id": "A", "name": "n", "x_lambert_93": 1, "y_lambert_93": 2,
        "geo_point": {"lon": 0.0, "lat": 0.0}
    });
    let access: Access = serde_json::from_value(base.clone()).unwrap();
    assert_eq!(access.short_name, None);

    let mut with_null = base;
    with_null["short_name"] = json!(null);
    let access: Access = serde_json::from_value(with_null).unwrap();
    assert_eq!(access.short_name, None);
    assert_eq!(serde_json::to_value(&access).unwrap()["short_name"], json!(null));
}

#[test]
fn test_non_integral_coordinate_rejected() {
    let raw = json!({
        "id": "A", "name": "n", "short_name": null, "x_lambert_93": 1.5, "y_lambert_93": 2,
        "geo_point": {"lon": 0.0, "lat": 0.0}
    });
    assert!(serde_json::from_value::<Access>(raw).is_err());
}

#[test]
fn test_out_of_range_coordinate_rejected() {
    let base = json!({
        "id": "A", "name": "n", "x_lambert_93": 652000, "y_lambert_93": 6862000,
        "geo_point": {"lon": 0.0, "lat": 0.0}
    });

    let mut as_float = base.clone();
    as_float["x_lambert_93"] = json!(1e30);
    assert!(serde_json::from_value::<Access>(as_float).is_err());

    let mut as_text = base.clone();
    as_text["y_lambert_93"] = json!("1e30");
    assert!(serde_json::from_value::<Access>(as_text).is_err());

    let mut upper_bound = base.clone();
    upper_bound["x_lambert_93"] = json!(9223372036854775808.0);
    assert!(serde_json::from_value::<Access>(upper_bound).is_err());

    let mut at_limit = base;
    at_limit["x_lambert_93"] = json!(i64::MAX);
    assert_eq!(serde_json::from_value::<Access>(at_limit).unwrap().x_lambert_93, i64::MAX);
}

#[test]
fn test_zone_from_raw_columns() {
    let raw = json!({
        "zdaid": "474151",
        "zdaname": "Châtelet",
        "zdatype": "metroStation",
        "zdatown": "Paris",
        "zdapostalregion": "75101",
        "zdaxepsg2154": 651936,
        "zdayepsg2154": 6862116
    });

    let zone: Zone = serde_json::from_value(raw).unwrap();
    assert!(zone.is_metro_station());
    assert!(zone.accesses.is_empty());
    assert!(zone.lines.is_empty());

    let clean = serde_json::to_value(&zone).unwrap();
    assert_eq!(clean["type"], json!("metroStation"));
    assert_eq!(clean["accesses"], json!([]));
    assert!(clean.get("kind").is_none());
}

#[test]
fn test_zone_without_type() {
    let raw = json!({
        "id": "1", "name": "n", "type": null, "town": "t", "postal_region": "p",
        "x_lambert_93": 0, "y_lambert_93": 0
    });
    let zone: Zone = serde_json::from_value(raw).unwrap();
    assert_eq!(zone.kind, None);
    assert!(!zone.is_metro_station());
}

#[test]
fn test_zone_line_relationship_from_raw() {
    let raw = json!({
        "id_ref_zda": 474151,
        "idrefliga": "C01371",
        "res_com": "METRO 1",
        "picto": {"url": "https://example.org/m1.svg", "width": 100},
        "mode": "METRO"
    });

    let rel: ZoneLineRelationship = serde_json::from_value(raw).unwrap();
    assert_eq!(rel.zone_id, "474151");
    assert_eq!(rel.line_icon_url.as_deref(), Some("https://example.org/m1.svg"));
    assert!(rel.is_metro());

    let clean = serde_json::to_value(&rel).unwrap();
    assert_eq!(clean["line_icon_url"], json!("https://example.org/m1.svg"));

    let reread: ZoneLineRelationship = serde_json::from_value(clean).unwrap();
    assert_eq!(reread, rel);
}

#[test]
fn test_zone_line_relationship_without_picto() {
    let raw = json!({
        "id_ref_zda": "474151",
        "idrefliga": "C01742",
        "res_com": "RER A",
        "picto": null,
        "mode": "RER"
    });
    let rel: ZoneLineRelationship = serde_json::from_value(raw).unwrap();
    assert_eq!(rel.line_icon_url, None);
    assert!(!rel.is_metro());
}

#[test]
fn test_zone_access_relationship_aliases() {
    let rel: ZoneAccessRelationship = serde_json::from_value(json!({"zdaid": "Z", "accid": "A"})).unwrap();
    assert_eq!(rel, ZoneAccessRelationship { zone_id: "Z".into(), access_id: "A".into() });
}

#[test]
fn test_line_color_omitted_when_absent() {
    let line = Line { id: "L".into(), name: "M1".into(), icon_url: None, color: None };
    let value = serde_json::to_value(&line).unwrap();
    assert!(value.get("color").is_none());
    assert_eq!(value["icon_url"], json!(null));
}
