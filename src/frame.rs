use crate::constants::FRAME_STATS_INTERVAL;
use crate::render;
use instant::Instant;
use kubefont_core::{MotionState, PerspectiveCamera};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub gpu: render::GpuState,
    pub camera: PerspectiveCamera,
    pub motion: Rc<RefCell<MotionState>>,
    pub canvas: web::HtmlCanvasElement,

    pub last_instant: Instant,
    pub frames: u32,
    pub busy: Duration,
}

impl FrameContext {
    pub fn new(
        gpu: render::GpuState,
        camera: PerspectiveCamera,
        motion: Rc<RefCell<MotionState>>,
        canvas: web::HtmlCanvasElement,
    ) -> Self {
        Self {
            gpu,
            camera,
            motion,
            canvas,
            last_instant: Instant::now(),
            frames: 0,
            busy: Duration::ZERO,
        }
    }

    pub fn frame(&mut self) {
        let start = Instant::now();

        let w = self.canvas.width();
        let h = self.canvas.height();
        self.gpu.resize_if_needed(w, h);
        self.camera.set_aspect(crate::input::aspect_ratio(w, h));
        self.camera.apply_motion(&self.motion.borrow());

        match self.gpu.render(&self.camera) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[frame] surface lost; reconfiguring");
                self.gpu.reconfigure();
            }
            Err(e) => log::error!("render error: {:?}", e),
        }

        self.busy += start.elapsed();
        self.frames += 1;
        if self.frames % FRAME_STATS_INTERVAL == 0 {
            let wall = self.last_instant.elapsed();
            log::debug!(
                "[frame] {} frames in {:.1}s, {:.2}ms avg cpu",
                FRAME_STATS_INTERVAL,
                wall.as_secs_f32(),
                self.busy.as_secs_f32() * 1000.0 / FRAME_STATS_INTERVAL as f32
            );
            self.last_instant = Instant::now();
            self.busy = Duration::ZERO;
        }
    }
}

/// A running `requestAnimationFrame` loop. Cancelling stops the pending
/// callback and releases the frame context.
pub struct FrameLoop {
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    pub fn start(frame_ctx: FrameContext) -> Self {
        let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        let raf_id_tick = raf_id.clone();
        let mut frame_ctx = frame_ctx;
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            raf_id_tick.set(None);
            frame_ctx.frame();
            if let Some(cb) = tick_clone.borrow().as_ref() {
                raf_id_tick.set(request_frame(cb));
            }
        }) as Box<dyn FnMut()>));
        if let Some(cb) = tick.borrow().as_ref() {
            raf_id.set(request_frame(cb));
        }
        log::info!("[frame] loop started");
        Self { raf_id, tick }
    }

    pub fn cancel(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        if self.tick.borrow_mut().take().is_some() {
            log::info!("[frame] loop cancelled");
        }
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
    web::window().and_then(|w| w.request_animation_frame(cb.as_ref().unchecked_ref()).ok())
}
