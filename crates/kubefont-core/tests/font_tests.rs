mod common;

use common::*;
use kubefont_core::*;

fn first_point(path: &[PathCommand]) -> glam::Vec2 {
    match path[0] {
        PathCommand::MoveTo(p) => p,
        other => panic!("path should start with a move, got {other:?}"),
    }
}

#[test]
fn parses_glyphs_and_metrics() {
    let font = blocky_font();
    assert_eq!(font.family_name, "Blocky");
    assert_eq!(font.glyph_count(), 7);
    assert!((font.line_height(70.0) - LINE_HEIGHT_UNITS * 0.07).abs() < 1e-4);
    let o = font.glyph('O').unwrap();
    assert_eq!(o.advance, GLYPH_ADVANCE);
    assert_eq!(o.commands.len(), 8);
    assert!(font.glyph(' ').unwrap().commands.is_empty());
}

#[test]
fn quadratic_lists_end_point_before_control() {
    let font = blocky_font();
    let d = font.glyph('D').unwrap();
    assert_eq!(
        d.commands[2],
        PathCommand::QuadTo {
            ctrl: glam::Vec2::new(500.0, 350.0),
            to: glam::Vec2::new(200.0, 700.0),
        }
    );
}

#[test]
fn layout_advances_and_scales() {
    let font = blocky_font();
    let paths = font.layout("LL", 70.0);
    assert_eq!(paths.len(), 2);
    assert_eq!(first_point(&paths[0]), glam::Vec2::ZERO);
    let second = first_point(&paths[1]);
    assert!((second.x - 49.0).abs() < 1e-4, "advance 700 * 0.07, got {}", second.x);
    assert_eq!(second.y, 0.0);
}

#[test]
fn space_advances_without_geometry() {
    let font = blocky_font();
    let paths = font.layout(" L", 1000.0);
    assert_eq!(paths.len(), 1);
    assert_eq!(first_point(&paths[0]).x, GLYPH_ADVANCE);
}

#[test]
fn newline_resets_x_and_moves_down() {
    let font = blocky_font();
    let paths = font.layout("L\nL", 1000.0);
    assert_eq!(paths.len(), 2);
    let p = first_point(&paths[1]);
    assert_eq!(p.x, 0.0);
    assert!((p.y + LINE_HEIGHT_UNITS).abs() < 1e-3);
}

#[test]
fn missing_glyph_uses_question_mark() {
    let font = blocky_font();
    let paths = font.layout("Z", 1000.0);
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0], font.glyph('?').unwrap().commands);
}

#[test]
fn missing_glyph_without_fallback_is_skipped() {
    let font = Font::from_json(&typeface_json(false)).unwrap();
    let paths = font.layout("ZL", 1000.0);
    assert_eq!(paths.len(), 1);
    // skipped characters do not advance
    assert_eq!(first_point(&paths[0]).x, 0.0);
}

#[test]
fn rejects_malformed_outline() {
    let json = r#"{ "glyphs": { "A": { "ha": 10, "o": "m 0" } },
                    "boundingBox": { "yMin": 0, "yMax": 10 }, "resolution": 1000 }"#;
    match Font::from_json(json) {
        Err(FontError::Outline { glyph, .. }) => assert_eq!(glyph, 'A'),
        other => panic!("expected outline error, got {other:?}"),
    }
}

#[test]
fn rejects_unknown_command_and_bad_json() {
    let json = r#"{ "glyphs": { "A": { "ha": 10, "o": "z 0 0" } },
                    "boundingBox": { "yMin": 0, "yMax": 10 }, "resolution": 1000 }"#;
    assert!(matches!(Font::from_json(json), Err(FontError::Outline { .. })));
    assert!(matches!(Font::from_json("not json"), Err(FontError::Json(_))));
}

#[test]
fn rejects_non_positive_resolution() {
    let json = r#"{ "glyphs": {}, "boundingBox": { "yMin": 0, "yMax": 10 }, "resolution": 0 }"#;
    assert!(matches!(Font::from_json(json), Err(FontError::BadResolution(_))));
}

#[test]
fn letter_with_counter_becomes_one_shape_with_a_hole() {
    let font = blocky_font();
    let shapes = font.generate_shapes("O", 1000.0, 4);
    assert_eq!(shapes.len(), 1);
    assert_eq!(shapes[0].holes.len(), 1);
    assert!((shapes[0].area() - 300_000.0).abs() < 1.0);
}

#[test]
fn curves_are_flattened_into_segments() {
    let font = blocky_font();
    let d = &font.glyph('D').unwrap().commands;
    let contours = flatten(d, 10);
    assert_eq!(contours.len(), 1);
    // move + line + 10 curve points + line
    assert_eq!(contours[0].len(), 13);
    let end = contours[0][11];
    assert!((end - glam::Vec2::new(200.0, 700.0)).length() < 1e-3);
}
