use crate::constants::CANVAS_CLASS;
use crate::input::{self, CssRect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn css_rect(element: &web::Element) -> CssRect {
    let rect = element.get_bounding_client_rect();
    CssRect {
        left: rect.left() as f32,
        top: rect.top() as f32,
        width: rect.width() as f32,
        height: rect.height() as f32,
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let rect = canvas.get_bounding_client_rect();
        let (w_px, h_px) = input::backing_size(rect.width(), rect.height(), w.device_pixel_ratio());
        if canvas.width() != w_px || canvas.height() != h_px {
            canvas.set_width(w_px);
            canvas.set_height(h_px);
        }
    }
}

/// Append a canvas that fills `container`.
pub fn create_canvas(
    document: &web::Document,
    container: &web::HtmlElement,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_class_name(CANVAS_CLASS);
    let style = canvas.style();
    _ = style.set_property("display", "block");
    _ = style.set_property("width", "100%");
    _ = style.set_property("height", "100%");

    // Children positioned by the host (the permission prompt) stack over it.
    if container.style().get_property_value("position").unwrap_or_default().is_empty() {
        _ = container.style().set_property("position", "relative");
    }
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("append canvas: {:?}", e))?;
    sync_canvas_backing_size(&canvas);
    Ok(canvas)
}

/// A DOM listener that detaches itself when dropped.
pub struct EventListener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", kind, e))?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
        log::debug!("[dom] removed {} listener", self.kind);
    }
}

/// Keep the canvas backing store matched to its CSS size on window resize.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) -> anyhow::Result<EventListener> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let canvas_resize = canvas.clone();
    EventListener::new(&window, "resize", move |_| {
        sync_canvas_backing_size(&canvas_resize);
    })
}
