//! Orientation permission flow for the browser.
//!
//! iOS Safari exposes `DeviceOrientationEvent.requestPermission()`, which must
//! be answered with `"granted"` before any `deviceorientation` event fires.
//! Elsewhere the listener is attached straight away.

use crate::dom::EventListener;
use crate::events::orientation::wire_orientation;
use kubefont_core::{sync_prompt, MotionState, PermissionGate, PermissionPrompt, RetryFn};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub fn orientation_supported(window: &web::Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("DeviceOrientationEvent")).unwrap_or(false)
}

/// `DeviceOrientationEvent` and its `requestPermission` function, when the
/// platform has one.
fn request_permission_fn(window: &web::Window) -> Option<(js_sys::Object, js_sys::Function)> {
    let ctor = js_sys::Reflect::get(window, &JsValue::from_str("DeviceOrientationEvent")).ok()?;
    let ctor = ctor.dyn_into::<js_sys::Object>().ok()?;
    let func = js_sys::Reflect::get(&ctor, &JsValue::from_str("requestPermission")).ok()?;
    let func = func.dyn_into::<js_sys::Function>().ok()?;
    Some((ctor, func))
}

pub struct Gyroscope {
    gate: RefCell<PermissionGate>,
    listener: RefCell<Option<EventListener>>,
    prompt: Box<dyn PermissionPrompt>,
    motion: Rc<RefCell<MotionState>>,
    disposed: Cell<bool>,
}

impl Gyroscope {
    pub fn new(motion: Rc<RefCell<MotionState>>, prompt: Box<dyn PermissionPrompt>) -> Rc<Self> {
        Rc::new(Self {
            gate: RefCell::new(PermissionGate::new()),
            listener: RefCell::new(None),
            prompt,
            motion,
            disposed: Cell::new(false),
        })
    }

    #[inline]
    pub fn is_granted(&self) -> bool {
        self.gate.borrow().is_granted()
    }

    /// Ask for orientation access. Ignored while a request is in flight or
    /// after access was granted.
    pub fn request(self: &Rc<Self>) {
        if self.disposed.get() {
            return;
        }
        let Some(window) = web::window() else {
            return;
        };
        match request_permission_fn(&window) {
            Some((ctor, func)) => {
                if !self.gate.borrow_mut().begin_request() {
                    log::debug!("[gyro] request already {:?}", self.gate.borrow().state());
                    return;
                }
                log::info!("[gyro] requesting permission");
                let promise = func
                    .call0(&ctor)
                    .and_then(|p| p.dyn_into::<js_sys::Promise>());
                match promise {
                    Ok(promise) => {
                        let this = self.clone();
                        spawn_local(async move {
                            match JsFuture::from(promise).await {
                                Ok(answer) => {
                                    let answer = answer.as_string().unwrap_or_default();
                                    if this.gate.borrow_mut().resolve(&answer) {
                                        this.attach(&window);
                                    }
                                }
                                Err(e) => this.gate.borrow_mut().reject(format!("{:?}", e)),
                            }
                            this.refresh_prompt();
                        });
                    }
                    Err(e) => self.gate.borrow_mut().reject(format!("{:?}", e)),
                }
            }
            None => {
                if self.gate.borrow_mut().grant_without_prompt() {
                    self.attach(&window);
                }
            }
        }
        self.refresh_prompt();
    }

    fn attach(&self, window: &web::Window) {
        if self.disposed.get() || self.listener.borrow().is_some() {
            return;
        }
        match wire_orientation(window, self.motion.clone()) {
            Ok(listener) => {
                log::info!("[gyro] orientation listener attached");
                *self.listener.borrow_mut() = Some(listener);
            }
            Err(e) => log::error!("[gyro] {:?}", e),
        }
    }

    fn refresh_prompt(self: &Rc<Self>) {
        if self.disposed.get() {
            return;
        }
        let weak = Rc::downgrade(self);
        let retry: RetryFn = Rc::new(move || {
            if let Some(gyro) = weak.upgrade() {
                gyro.request();
            }
        });
        // The host may call `retry` from inside `show`, so no borrow is held.
        let gate = self.gate.borrow().clone();
        sync_prompt(&gate, self.prompt.as_ref(), retry);
    }

    /// Detach the listener and hide the prompt. Later answers are ignored.
    pub fn dispose(&self) {
        if self.disposed.replace(true) {
            return;
        }
        self.listener.borrow_mut().take();
        self.prompt.hide();
    }
}

/// Prompt backed by a host callback: called with a retry function while
/// permission is missing, and with `null` once it is granted.
pub struct JsPrompt {
    callback: js_sys::Function,
    retry: RefCell<Option<Closure<dyn Fn()>>>,
}

impl JsPrompt {
    pub fn new(callback: js_sys::Function) -> Self {
        Self {
            callback,
            retry: RefCell::new(None),
        }
    }
}

impl PermissionPrompt for JsPrompt {
    fn show(&self, retry: RetryFn) {
        // One closure for the prompt's lifetime: the host may call it again
        // while it is still running.
        let mut slot = self.retry.borrow_mut();
        let closure = slot
            .get_or_insert_with(|| Closure::wrap(Box::new(move || retry()) as Box<dyn Fn()>));
        let func: JsValue = closure.as_ref().clone();
        drop(slot);
        if let Err(e) = self.callback.call1(&JsValue::NULL, &func) {
            log::warn!("[gyro] prompt callback failed: {:?}", e);
        }
    }

    fn hide(&self) {
        if let Err(e) = self.callback.call1(&JsValue::NULL, &JsValue::NULL) {
            log::warn!("[gyro] prompt callback failed: {:?}", e);
        }
    }
}
