// Shared fixtures: a tiny typeface font with blocky glyphs.

#![allow(dead_code)]

use kubefont_core::Font;

pub const GLYPH_ADVANCE: f32 = 700.0;
pub const LINE_HEIGHT_UNITS: f32 = 1350.0; // yMax - yMin + underlineThickness

pub fn typeface_json(with_fallback: bool) -> String {
    let fallback = if with_fallback {
        r#","?": { "ha": 700, "x_min": 0, "x_max": 100, "o": "m 0 0 l 100 0 l 100 100 l 0 100" }"#
    } else {
        ""
    };
    format!(
        r#"{{
  "glyphs": {{
    "O": {{ "ha": 700, "x_min": 0, "x_max": 600,
           "o": "m 0 0 l 600 0 l 600 700 l 0 700 m 150 150 l 150 550 l 450 550 l 450 150" }},
    "H": {{ "ha": 700, "x_min": 0, "x_max": 500,
           "o": "m 0 0 l 100 0 l 100 300 l 400 300 l 400 0 l 500 0 l 500 700 l 400 700 l 400 400 l 100 400 l 100 700 l 0 700" }},
    "E": {{ "ha": 700, "x_min": 0, "x_max": 400, "o": "m 0 0 l 400 0 l 400 700 l 0 700" }},
    "L": {{ "ha": 700, "x_min": 0, "x_max": 400,
           "o": "m 0 0 l 400 0 l 400 100 l 100 100 l 100 700 l 0 700" }},
    "D": {{ "ha": 700, "x_min": 0, "x_max": 500,
           "o": "m 0 0 l 200 0 q 200 700 500 350 l 0 700" }},
    " ": {{ "ha": 700 }}{fallback}
  }},
  "familyName": "Blocky",
  "ascender": 1000,
  "descender": -300,
  "underlinePosition": -100,
  "underlineThickness": 50,
  "boundingBox": {{ "yMin": -300, "xMin": 0, "xMax": 600, "yMax": 1000 }},
  "resolution": 1000,
  "original_font_information": {{ "format": 0 }}
}}"#
    )
}

pub fn blocky_font() -> Font {
    Font::from_json(&typeface_json(true)).expect("fixture font parses")
}
