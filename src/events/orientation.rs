use crate::dom::EventListener;
use kubefont_core::{MotionState, OrientationMapper};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `deviceorientation` on the window drives pan and rotation. The first event
/// fixes the neutral pose.
pub fn wire_orientation(
    window: &web::Window,
    motion: Rc<RefCell<MotionState>>,
) -> anyhow::Result<EventListener> {
    let mut mapper = OrientationMapper::new();
    EventListener::new(window, "deviceorientation", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::DeviceOrientationEvent>() else {
            return;
        };
        if mapper.origin().is_none() {
            log::info!(
                "[gyro] origin alpha={:?} beta={:?}",
                ev.alpha(),
                ev.beta()
            );
        }
        *motion.borrow_mut() = mapper.update(ev.alpha(), ev.beta());
    })
}
