/// Elements carrying this attribute are mounted on module start.
pub const AUTO_MOUNT_SELECTOR: &str = "[data-kubefont]";

pub const CANVAS_CLASS: &str = "kubefont-canvas";

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

// Color and depth samples per pixel; the color target resolves into the
// surface texture.
pub const MSAA_SAMPLES: u32 = 4;

// Debug-level frame timing line every N frames.
pub const FRAME_STATS_INTERVAL: u32 = 600;
