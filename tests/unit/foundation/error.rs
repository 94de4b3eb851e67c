use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ViewError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ViewError::unsupported("x")
            .to_string()
            .contains("unsupported:")
    );
    assert!(ViewError::layout("x").to_string().contains("layout error:"));
    assert!(ViewError::render("x").to_string().contains("render error:"));
    assert!(
        ViewError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn only_unsupported_reports_unsupported() {
    assert!(ViewError::unsupported("baseline").is_unsupported());
    assert!(!ViewError::layout("cycle").is_unsupported());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ViewError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
