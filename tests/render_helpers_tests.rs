// Host-side tests for the GPU packing helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod helpers {
    include!("../src/render/helpers.rs");
}

use helpers::*;
use kubefont_core::{Color, Material};

#[test]
fn clear_color_defaults_to_black() {
    let c = clear_color(None);
    assert_eq!((c.r, c.g, c.b, c.a), (0.0, 0.0, 0.0, 1.0));
}

#[test]
fn clear_color_is_linear() {
    let c = clear_color(Some(Color::from_hex(0x808080)));
    // sRGB 0.5 is about 0.214 linear
    assert!((c.r - 0.2158).abs() < 1e-3, "{}", c.r);
    assert_eq!(c.r, c.g);
    assert_eq!(c.a, 1.0);
}

#[test]
fn cube_material_is_diffuse_only() {
    let [color, emissive, specular] = material_words(&Material::cube(Color::WHITE));
    assert_eq!(color[3], 0.0);
    assert!(color[..3].iter().all(|c| (c - 1.0).abs() < 1e-5));
    assert_eq!(emissive[3], 0.2);
    assert_eq!(specular, [0.0; 4]);
}

#[test]
fn text_material_carries_highlight() {
    let [color, emissive, specular] = material_words(&Material::text(Color::from_hex(0xff0000)));
    assert_eq!(color[3], 30.0);
    assert_eq!(&emissive[..3], &color[..3]);
    assert_eq!(emissive[3], 0.8);
    assert!(specular[0] > 0.0 && specular[0] < 0.01);
}

#[test]
fn depth_format_is_depth_only() {
    assert!(constants::DEPTH_FORMAT.is_depth_stencil_format());
    assert!(!constants::DEPTH_FORMAT.has_stencil_aspect());
}

#[test]
fn pipeline_is_multisampled() {
    let ms = multisample_state();
    assert_eq!(ms.count, constants::MSAA_SAMPLES);
    assert_eq!(ms.count, 4);
    assert_eq!(ms.mask, u64::MAX);
    assert!(!ms.alpha_to_coverage_enabled);
}

#[test]
fn attachments_are_never_empty() {
    let size = attachment_size(0, 0);
    assert_eq!((size.width, size.height, size.depth_or_array_layers), (1, 1, 1));
    let size = attachment_size(1280, 720);
    assert_eq!((size.width, size.height), (1280, 720));
}
