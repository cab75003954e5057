use super::*;
use serde_json::json;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn parses_hex_forms() {
    assert_eq!(
        ColorDef::parse("#ff0000").unwrap(),
        ColorDef::rgba(1.0, 0.0, 0.0, 1.0)
    );
    assert_eq!(
        ColorDef::parse("#0f0").unwrap(),
        ColorDef::rgba(0.0, 1.0, 0.0, 1.0)
    );
    let c = ColorDef::parse("#0000ff80").unwrap();
    assert!(close(c.b, 1.0));
    assert!(close(c.a, 128.0 / 255.0));
    let c = ColorDef::parse("#FFF8").unwrap();
    assert!(close(c.a, 136.0 / 255.0));
}

#[test]
fn parses_rgb_functions() {
    let c = ColorDef::parse("rgba(56, 189, 248, 0.8)").unwrap();
    assert!(close(c.r, 56.0 / 255.0));
    assert!(close(c.a, 0.8));

    let c = ColorDef::parse("rgb(255 0 0 / 50%)").unwrap();
    assert!(close(c.r, 1.0));
    assert!(close(c.a, 0.5));

    let c = ColorDef::parse("RGB(100%, 0%, 0%)").unwrap();
    assert!(close(c.r, 1.0));
}

#[test]
fn parses_hsl_functions() {
    let c = ColorDef::parse("hsl(0, 100%, 50%)").unwrap();
    assert!(close(c.r, 1.0));
    assert!(close(c.g, 0.0));
    assert!(close(c.b, 0.0));

    let c = ColorDef::parse("hsla(120deg, 100%, 50%, 0.25)").unwrap();
    assert!(close(c.g, 1.0));
    assert!(close(c.a, 0.25));
}

#[test]
fn named_colors() {
    assert_eq!(ColorDef::parse("white").unwrap(), ColorDef::FALLBACK);
    assert_eq!(ColorDef::parse("transparent").unwrap().a, 0.0);
}

#[test]
fn malformed_input_is_an_error_but_falls_back_when_asked() {
    for bad in ["", "#12", "#zzzzzz", "rgb(1,2)", "rgb(a,b,c)", "cmyk(1,2,3,4)", "chartreuse-ish"] {
        assert!(ColorDef::parse(bad).is_err(), "{bad}");
        assert_eq!(ColorDef::parse_or_default(bad), ColorDef::FALLBACK, "{bad}");
    }
    assert_eq!(ColorDef::FALLBACK.a, 1.0);
}

#[test]
fn deserializes_from_css_object_and_array() {
    let c: ColorDef = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, ColorDef::rgba(1.0, 0.0, 0.0, 1.0));

    let c: ColorDef = serde_json::from_value(json!({"r": 0.25, "g": 0.5, "b": 0.75})).unwrap();
    assert_eq!(c, ColorDef::rgba(0.25, 0.5, 0.75, 1.0));

    let c: ColorDef = serde_json::from_value(json!([0.25, 0.5, 0.75, 0.9])).unwrap();
    assert_eq!(c, ColorDef::rgba(0.25, 0.5, 0.75, 0.9));

    assert!(serde_json::from_value::<ColorDef>(json!([1.0])).is_err());
}

#[test]
fn premultiplies_with_opacity() {
    let c = ColorDef::rgba(1.0, 0.5, 0.0, 1.0).with_opacity(0.5);
    let p = c.to_rgba8_premul();
    assert_eq!(p.a, 128);
    assert_eq!(p.r, 128);
    assert_eq!(p.g, 64);
    assert_eq!(p.b, 0);
}
