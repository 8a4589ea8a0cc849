//! Options accepted when mounting a scene.
//!
//! Keys follow the camelCase names of the JS options object so that the same
//! object can be handed over as JSON.

use crate::color::Color;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TEXT_COLOR: Color = Color::from_hex(0xdddddd);
pub const DEFAULT_CAMERA_DISTANCE: f32 = 400.0;
pub const DEFAULT_CUBES_COLOR: Color = Color::from_hex(0xdddddd);
pub const DEFAULT_PARTICLES_NUMBER: usize = 50;
pub const DEFAULT_SCATTERING: f32 = 1.5;
pub const DEFAULT_BACKGROUND_COLOR: Color = Color::BLACK;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KubefontConfig {
    pub text: String,
    pub text_font_url: String,
    #[serde(default = "default_text_color")]
    pub text_color: Color,
    #[serde(default = "default_camera_distance")]
    pub camera_distance: f32,
    #[serde(default = "default_cubes_color")]
    pub cubes_color: Color,
    #[serde(default = "default_particles_number")]
    pub particles_number: usize,
    #[serde(default = "default_scattering")]
    pub scattering: f32,
    #[serde(default = "default_background_color")]
    pub background_color: Color,
    #[serde(default)]
    pub use_gyroscope: bool,
}

fn default_text_color() -> Color {
    DEFAULT_TEXT_COLOR
}
fn default_camera_distance() -> f32 {
    DEFAULT_CAMERA_DISTANCE
}
fn default_cubes_color() -> Color {
    DEFAULT_CUBES_COLOR
}
fn default_particles_number() -> usize {
    DEFAULT_PARTICLES_NUMBER
}
fn default_scattering() -> f32 {
    DEFAULT_SCATTERING
}
fn default_background_color() -> Color {
    DEFAULT_BACKGROUND_COLOR
}

impl KubefontConfig {
    /// Required fields only; everything else takes its default.
    pub fn new(text: impl Into<String>, text_font_url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            text_font_url: text_font_url.into(),
            text_color: DEFAULT_TEXT_COLOR,
            camera_distance: DEFAULT_CAMERA_DISTANCE,
            cubes_color: DEFAULT_CUBES_COLOR,
            particles_number: DEFAULT_PARTICLES_NUMBER,
            scattering: DEFAULT_SCATTERING,
            background_color: DEFAULT_BACKGROUND_COLOR,
            use_gyroscope: false,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Build from string key/value pairs, e.g. an element's `data-*` attributes.
    ///
    /// Keys may be camelCase (`textFontUrl`) or kebab-case (`text-font-url`).
    /// Unknown keys are ignored.
    pub fn from_attributes<'a, I>(attrs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut text = None;
        let mut font_url = None;
        let mut config = Self::new("", "");
        for (key, value) in attrs {
            let invalid = || ConfigError::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
            };
            match normalize_key(key).as_str() {
                "text" => text = Some(value.to_string()),
                "textfonturl" => font_url = Some(value.to_string()),
                "textcolor" => config.text_color = value.parse()?,
                "cubescolor" => config.cubes_color = value.parse()?,
                "backgroundcolor" => config.background_color = value.parse()?,
                "cameradistance" => {
                    config.camera_distance = value.trim().parse().map_err(|_| invalid())?
                }
                "particlesnumber" => {
                    config.particles_number = value.trim().parse().map_err(|_| invalid())?
                }
                "scattering" => config.scattering = value.trim().parse().map_err(|_| invalid())?,
                "usegyroscope" => config.use_gyroscope = parse_flag(value).ok_or_else(invalid)?,
                _ => {}
            }
        }
        config.text = text.ok_or(ConfigError::Missing("text"))?;
        config.text_font_url = font_url.ok_or(ConfigError::Missing("textFontUrl"))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.text_font_url.trim().is_empty() {
            return Err(ConfigError::Missing("textFontUrl"));
        }
        if !self.camera_distance.is_finite() {
            return Err(ConfigError::InvalidValue {
                key: "cameraDistance".into(),
                value: self.camera_distance.to_string(),
            });
        }
        if !self.scattering.is_finite() || self.scattering < 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "scattering".into(),
                value: self.scattering.to_string(),
            });
        }
        Ok(())
    }

    /// Edge length of the cube scattering volume.
    #[inline]
    pub fn spread(&self) -> f32 {
        crate::constants::SCATTERING_LEVEL * self.scattering
    }
}

fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| *c != '-' && *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

// A bare attribute (`data-use-gyroscope`) reads as an empty string.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim() {
        "" | "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
