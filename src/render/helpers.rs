use crate::constants::{DEPTH_FORMAT, MSAA_SAMPLES};
use kubefont_core::{Color, Material, Shading};
use wgpu;

pub fn attachment_size(width: u32, height: u32) -> wgpu::Extent3d {
    wgpu::Extent3d {
        width: width.max(1),
        height: height.max(1),
        depth_or_array_layers: 1,
    }
}

pub fn create_attachment(
    device: &wgpu::Device,
    label: &str,
    width: u32,
    height: u32,
    format: wgpu::TextureFormat,
) -> (wgpu::Texture, wgpu::TextureView) {
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: attachment_size(width, height),
        mip_level_count: 1,
        sample_count: MSAA_SAMPLES,
        dimension: wgpu::TextureDimension::D2,
        format,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    let view = tex.create_view(&wgpu::TextureViewDescriptor::default());
    (tex, view)
}

pub fn create_depth_texture(
    device: &wgpu::Device,
    width: u32,
    height: u32,
) -> (wgpu::Texture, wgpu::TextureView) {
    create_attachment(device, "depth_tex", width, height, DEPTH_FORMAT)
}

pub fn multisample_state() -> wgpu::MultisampleState {
    wgpu::MultisampleState {
        count: MSAA_SAMPLES,
        mask: !0,
        alpha_to_coverage_enabled: false,
    }
}

#[inline]
pub fn linear_rgba(color: Color, w: f32) -> [f32; 4] {
    let [r, g, b] = color.to_linear();
    [r, g, b, w]
}

#[inline]
pub fn clear_color(background: Option<Color>) -> wgpu::Color {
    let [r, g, b] = background.unwrap_or(Color::BLACK).to_linear();
    wgpu::Color {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: 1.0,
    }
}

/// Per-instance material words: (color.rgb, shininess), (emissive.rgb,
/// intensity), (specular.rgb, 0). Zero shininess selects diffuse only.
pub fn material_words(material: &Material) -> [[f32; 4]; 3] {
    let (specular, shininess) = match material.shading {
        Shading::Lambert => (Color::BLACK, 0.0),
        Shading::Phong {
            specular,
            shininess,
        } => (specular, shininess.max(f32::EPSILON)),
    };
    [
        linear_rgba(material.color, shininess),
        linear_rgba(material.emissive, material.emissive_intensity),
        linear_rgba(specular, 0.0),
    ]
}
