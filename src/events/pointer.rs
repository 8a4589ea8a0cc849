use crate::dom::{self, EventListener};
use crate::input;
use glam::Vec2;
use kubefont_core::{pointer_motion, MotionState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `mousemove` on the container drives pan and rotation.
pub fn wire_pointer(
    container: &web::HtmlElement,
    motion: Rc<RefCell<MotionState>>,
) -> anyhow::Result<EventListener> {
    let container_rect = container.clone();
    EventListener::new(container, "mousemove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let delta = input::container_center_delta(client, dom::css_rect(&container_rect));
        *motion.borrow_mut() = pointer_motion(delta.x, delta.y);
    })
}
