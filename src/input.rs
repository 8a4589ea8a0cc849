use glam::Vec2;

/// Layout box of the container in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CssRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl CssRect {
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.left + self.width * 0.5,
            self.top + self.height * 0.5,
        )
    }
}

/// Pointer offset from the container center, +y pointing down like the DOM.
#[inline]
pub fn container_center_delta(client: Vec2, rect: CssRect) -> Vec2 {
    client - rect.center()
}

/// Canvas backing store size for a CSS box at the given device pixel ratio.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64) -> (u32, u32) {
    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    let w = (css_width.max(0.0) * dpr) as u32;
    let h = (css_height.max(0.0) * dpr) as u32;
    (w.max(1), h.max(1))
}

#[inline]
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    width.max(1) as f32 / height.max(1) as f32
}

/// Option key carried by a `data-*` attribute (`data-text-font-url` ->
/// `text-font-url`). The `data-kubefont` marker itself is not an option.
#[inline]
pub fn data_attribute_key(attribute: &str) -> Option<&str> {
    attribute
        .strip_prefix("data-")
        .filter(|key| !key.is_empty() && *key != "kubefont")
}
