use super::*;

#[test]
fn constants_follow_flags() {
    let c = RowLayoutConfig::compact();
    assert_eq!(c.collapsed_width(), 75.0);
    assert_eq!(c.collapsed_spacing(), 1.0);
    assert_eq!(c.expanded_spacing(), 12.0);

    let r = RowLayoutConfig::new(DeviceClass::Regular, true);
    assert_eq!(r.collapsed_width(), 95.0);
    assert_eq!(r.collapsed_spacing(), 3.0);
    assert_eq!(r.expanded_spacing(), 12.0);
}

#[test]
fn default_is_compact_narrow() {
    assert_eq!(RowLayoutConfig::default(), RowLayoutConfig::compact());
}

#[test]
fn from_reader_fills_missing_fields() {
    let c = RowLayoutConfig::from_reader(r#"{"device_class":"regular"}"#.as_bytes()).unwrap();
    assert_eq!(c, RowLayoutConfig::regular());

    let c = RowLayoutConfig::from_reader("{}".as_bytes()).unwrap();
    assert_eq!(c, RowLayoutConfig::compact());
}

#[test]
fn from_reader_rejects_bad_json() {
    let err = RowLayoutConfig::from_reader(r#"{"device_class":"watch"}"#.as_bytes()).unwrap_err();
    assert!(matches!(err, ThumbstripError::Validation(_)));
    assert!(err.to_string().contains("parse layout config JSON"));
}

#[test]
fn from_path_reports_missing_file() {
    let err = RowLayoutConfig::from_path("does/not/exist.json").unwrap_err();
    assert!(err.to_string().contains("open layout config"));
}
