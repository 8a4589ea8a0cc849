//! Typeface JSON fonts (the format produced by facetype.js).
//!
//! A font is a map of glyphs, each with an advance width `ha` and an outline
//! string `o` made of `m`/`l`/`q`/`b` commands in font units. Quadratic and
//! cubic commands list the end point first, then the control point(s).

use crate::error::FontError;
use crate::shape::{shapes_from_path, PathCommand, Shape};
use fnv::FnvHashMap;
use glam::Vec2;
use serde::Deserialize;

const FALLBACK_GLYPH: char = '?';

#[derive(Deserialize)]
struct TypefaceJson {
    glyphs: FnvHashMap<String, GlyphJson>,
    #[serde(rename = "familyName", default)]
    family_name: String,
    #[serde(default = "default_resolution")]
    resolution: f32,
    #[serde(rename = "boundingBox")]
    bounding_box: BoundingBoxJson,
    #[serde(rename = "underlineThickness", default)]
    underline_thickness: f32,
}

fn default_resolution() -> f32 {
    1000.0
}

#[derive(Deserialize)]
struct GlyphJson {
    ha: f32,
    #[serde(default)]
    o: Option<String>,
}

#[derive(Deserialize)]
struct BoundingBoxJson {
    #[serde(rename = "yMin")]
    y_min: f32,
    #[serde(rename = "yMax")]
    y_max: f32,
}

#[derive(Clone, Debug)]
pub struct Glyph {
    pub advance: f32,
    pub commands: Vec<PathCommand>,
}

#[derive(Clone, Debug)]
pub struct Font {
    pub family_name: String,
    pub resolution: f32,
    line_height_units: f32,
    glyphs: FnvHashMap<char, Glyph>,
}

impl Font {
    pub fn from_json(json: &str) -> Result<Self, FontError> {
        let raw: TypefaceJson = serde_json::from_str(json)?;
        if !(raw.resolution > 0.0) {
            return Err(FontError::BadResolution(raw.resolution));
        }
        let mut glyphs = FnvHashMap::default();
        for (key, g) in raw.glyphs {
            // Keys are single characters; anything else cannot be looked up.
            let mut chars = key.chars();
            let (Some(ch), None) = (chars.next(), chars.next()) else {
                log::debug!("[font] skipping multi-char glyph key {:?}", key);
                continue;
            };
            let commands = match g.o.as_deref() {
                Some(o) => parse_outline(o).map_err(|reason| FontError::Outline { glyph: ch, reason })?,
                None => Vec::new(),
            };
            glyphs.insert(
                ch,
                Glyph {
                    advance: g.ha,
                    commands,
                },
            );
        }
        Ok(Self {
            family_name: raw.family_name,
            resolution: raw.resolution,
            line_height_units: raw.bounding_box.y_max - raw.bounding_box.y_min
                + raw.underline_thickness,
            glyphs,
        })
    }

    #[inline]
    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&ch)
    }

    #[inline]
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Vertical distance between lines at the given text size.
    pub fn line_height(&self, size: f32) -> f32 {
        self.line_height_units * size / self.resolution
    }

    /// Lay out `text` at `size` and return one scaled path per drawn glyph.
    ///
    /// Missing glyphs fall back to `?`; characters with neither are skipped.
    pub fn layout(&self, text: &str, size: f32) -> Vec<Vec<PathCommand>> {
        let scale = size / self.resolution;
        let line_height = self.line_height(size);
        let mut offset = Vec2::ZERO;
        let mut paths = Vec::new();
        for ch in text.chars() {
            if ch == '\n' {
                offset.x = 0.0;
                offset.y -= line_height;
                continue;
            }
            let Some(glyph) = self.glyph(ch).or_else(|| self.glyph(FALLBACK_GLYPH)) else {
                log::error!(
                    "[font] character {:?} does not exist in font family {}",
                    ch,
                    self.family_name
                );
                continue;
            };
            if !glyph.commands.is_empty() {
                let placed = glyph
                    .commands
                    .iter()
                    .map(|c| c.transformed(|p| p * scale + offset))
                    .collect();
                paths.push(placed);
            }
            offset.x += glyph.advance * scale;
        }
        paths
    }

    /// Filled shapes for `text`, curves flattened into `curve_segments` steps.
    pub fn generate_shapes(&self, text: &str, size: f32, curve_segments: usize) -> Vec<Shape> {
        self.layout(text, size)
            .iter()
            .flat_map(|path| shapes_from_path(path, curve_segments))
            .collect()
    }
}

fn parse_outline(o: &str) -> Result<Vec<PathCommand>, String> {
    let mut tokens = o.split_whitespace();
    let mut commands = Vec::new();
    while let Some(op) = tokens.next() {
        let mut point = || -> Result<Vec2, String> {
            let mut coord = || -> Result<f32, String> {
                let tok = tokens
                    .next()
                    .ok_or_else(|| format!("command `{op}` is missing coordinates"))?;
                tok.parse::<f32>()
                    .map_err(|_| format!("bad coordinate `{tok}` after `{op}`"))
            };
            let x = coord()?;
            let y = coord()?;
            Ok(Vec2::new(x, y))
        };
        let cmd = match op {
            "m" => PathCommand::MoveTo(point()?),
            "l" => PathCommand::LineTo(point()?),
            "q" => {
                let to = point()?;
                let ctrl = point()?;
                PathCommand::QuadTo { ctrl, to }
            }
            "b" => {
                let to = point()?;
                let ctrl1 = point()?;
                let ctrl2 = point()?;
                PathCommand::CubicTo { ctrl1, ctrl2, to }
            }
            other => return Err(format!("unknown outline command `{other}`")),
        };
        commands.push(cmd);
    }
    Ok(commands)
}
