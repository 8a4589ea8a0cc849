use super::helpers;

/// Multisampled attachments drawn into each frame.
///
/// - `color_*` is resolved into the surface texture at the end of the pass.
/// - `depth_*` matches its sample count.
pub(crate) struct RenderTargets {
    pub(crate) color_tex: wgpu::Texture,
    pub(crate) color_view: wgpu::TextureView,
    pub(crate) _depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) -> Self {
        let (color_tex, color_view) =
            helpers::create_attachment(device, "msaa_color_tex", width, height, format);
        let (depth_tex, depth_view) = helpers::create_depth_texture(device, width, height);
        Self {
            color_tex,
            color_view,
            _depth_tex: depth_tex,
            depth_view,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        let format = self.color_tex.format();
        (self.color_tex, self.color_view) =
            helpers::create_attachment(device, "msaa_color_tex", width, height, format);
        (self._depth_tex, self.depth_view) = helpers::create_depth_texture(device, width, height);
    }
}
