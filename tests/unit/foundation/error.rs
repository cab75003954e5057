use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        KonaError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(KonaError::surface("x").to_string().contains("surface error:"));
    assert!(KonaError::config("x").to_string().contains("config error:"));
    assert!(
        KonaError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = KonaError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn serde_json_errors_map_to_serde_variant() {
    let err: KonaError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, KonaError::Serde(_)));
}
