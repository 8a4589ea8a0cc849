use kubefont_core::*;

#[test]
fn hex_color_parses_as_integer() {
    assert_eq!(parse_hex_color("#dddddd"), Ok(0xdddddd));
    assert_eq!(parse_hex_color("#dddddd"), Ok(14_540_253));
    assert_eq!(parse_hex_color("#000000"), Ok(0));
    assert_eq!(parse_hex_color("#FF8000"), Ok(0xff8000));
    // short forms are plain numbers, not expanded
    assert_eq!(parse_hex_color("#fff"), Ok(0xfff));
}

#[test]
fn hex_color_rejects_garbage() {
    assert!(matches!(parse_hex_color("dddddd"), Err(ColorError::MissingHash(_))));
    assert!(matches!(parse_hex_color("#"), Err(ColorError::Empty(_))));
    assert!(matches!(parse_hex_color("#ggg"), Err(ColorError::InvalidDigits(_))));
    assert!(matches!(parse_hex_color("#1234567"), Err(ColorError::TooLong(_))));
    assert!(matches!(parse_hex_color("#ddddddff"), Err(ColorError::TooLong(_))));
    assert!(matches!(parse_hex_color("#dddzzz"), Err(ColorError::InvalidDigits(_))));
}

#[test]
fn color_channels_and_display() {
    let c: Color = "#ff8000".parse().unwrap();
    assert_eq!(c.to_srgb(), [1.0, 128.0 / 255.0, 0.0]);
    assert_eq!(c.to_string(), "#ff8000");
    let lin = c.to_linear();
    assert!((lin[0] - 1.0).abs() < 1e-5);
    assert!(lin[1] < 0.5 && lin[1] > 0.2);
    assert_eq!(Color::BLACK.to_linear(), [0.0; 3]);
}

#[test]
fn minimal_options_take_defaults() {
    let cfg = KubefontConfig::from_json(r#"{ "text": "HELLO", "textFontUrl": "/font.json" }"#)
        .unwrap();
    assert_eq!(cfg, KubefontConfig::new("HELLO", "/font.json"));
    assert_eq!(cfg.text_color.hex(), 0xdddddd);
    assert_eq!(cfg.camera_distance, 400.0);
    assert_eq!(cfg.cubes_color.hex(), 0xdddddd);
    assert_eq!(cfg.particles_number, 50);
    assert_eq!(cfg.scattering, 1.5);
    assert_eq!(cfg.background_color, Color::BLACK);
    assert!(!cfg.use_gyroscope);
    assert_eq!(cfg.spread(), 600.0);
}

#[test]
fn full_options_use_camel_case_keys() {
    let cfg = KubefontConfig::from_json(
        r##"{
            "text": "HI",
            "textFontUrl": "/f.json",
            "textColor": "#ff0000",
            "cameraDistance": 250,
            "cubesColor": "#00ff00",
            "particlesNumber": 5,
            "scattering": 2,
            "backgroundColor": "#102030",
            "useGyroscope": true,
            "GyroscopeRequestComponent": null
        }"##,
    )
    .unwrap();
    assert_eq!(cfg.text_color.hex(), 0xff0000);
    assert_eq!(cfg.camera_distance, 250.0);
    assert_eq!(cfg.cubes_color.hex(), 0x00ff00);
    assert_eq!(cfg.particles_number, 5);
    assert_eq!(cfg.scattering, 2.0);
    assert_eq!(cfg.background_color.hex(), 0x102030);
    assert!(cfg.use_gyroscope);
}

#[test]
fn required_options_are_enforced() {
    assert!(matches!(
        KubefontConfig::from_json(r#"{ "textFontUrl": "/f.json" }"#),
        Err(ConfigError::Json(_))
    ));
    assert!(matches!(
        KubefontConfig::from_json(r#"{ "text": "A", "textFontUrl": " " }"#),
        Err(ConfigError::Missing("textFontUrl"))
    ));
}

#[test]
fn bad_values_are_reported() {
    assert!(matches!(
        KubefontConfig::from_json(r#"{ "text": "A", "textFontUrl": "/f", "textColor": "red" }"#),
        Err(ConfigError::Json(_))
    ));
    assert!(matches!(
        KubefontConfig::from_json(r#"{ "text": "A", "textFontUrl": "/f", "scattering": -1 }"#),
        Err(ConfigError::InvalidValue { .. })
    ));
}

#[test]
fn attributes_accept_kebab_and_camel_case() {
    let cfg = KubefontConfig::from_attributes([
        ("text", "HELLO WORLD"),
        ("text-font-url", "/font.json"),
        ("particlesNumber", "12"),
        ("scattering", " 0.5 "),
        ("cubes-color", "#123456"),
        ("use-gyroscope", ""),
        ("unrelated", "ignored"),
    ])
    .unwrap();
    assert_eq!(cfg.text, "HELLO WORLD");
    assert_eq!(cfg.text_font_url, "/font.json");
    assert_eq!(cfg.particles_number, 12);
    assert_eq!(cfg.scattering, 0.5);
    assert_eq!(cfg.cubes_color.hex(), 0x123456);
    assert!(cfg.use_gyroscope);
}

#[test]
fn attributes_report_missing_and_invalid() {
    assert!(matches!(
        KubefontConfig::from_attributes([("textFontUrl", "/f")]),
        Err(ConfigError::Missing("text"))
    ));
    assert!(matches!(
        KubefontConfig::from_attributes([("text", "A"), ("textFontUrl", "/f"), ("particlesNumber", "many")]),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert!(matches!(
        KubefontConfig::from_attributes([("text", "A"), ("textFontUrl", "/f"), ("textColor", "#zz")]),
        Err(ConfigError::Color(ColorError::InvalidDigits(_)))
    ));
}
