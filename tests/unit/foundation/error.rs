use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ThumbstripError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ThumbstripError::invalid_focus_index(7, 3)
            .to_string()
            .contains("invalid focus index:")
    );
}

#[test]
fn invalid_focus_index_reports_both_bounds() {
    let msg = ThumbstripError::invalid_focus_index(7, 3).to_string();
    assert!(msg.contains('7'));
    assert!(msg.contains("3 items"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ThumbstripError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
