use super::*;

#[test]
fn focus_index_is_only_set_when_expanded() {
    assert_eq!(LayoutMode::Collapsed.focus_index(), None);
    assert_eq!(LayoutMode::expanded(4).focus_index(), Some(4));
    let hinted = LayoutMode::Expanded {
        focus_index: 1,
        expanding_width_hint: Some(1.5),
    };
    assert_eq!(hinted.focus_index(), Some(1));
    assert!(hinted.is_expanded());
    assert!(!LayoutMode::Collapsed.is_expanded());
}

#[test]
fn json_shape_is_tagged_snake_case() {
    let m: LayoutMode = serde_json::from_str(r#"{"expanded":{"focus_index":2}}"#).unwrap();
    assert_eq!(m, LayoutMode::expanded(2));

    let m: LayoutMode = serde_json::from_str(r#""collapsed""#).unwrap();
    assert_eq!(m, LayoutMode::Collapsed);

    let s = serde_json::to_string(&LayoutMode::expanded(3)).unwrap();
    assert_eq!(s, r#"{"expanded":{"focus_index":3}}"#);
}
