#![cfg(target_arch = "wasm32")]
use kubefont_core::{
    build_scene, select_input_mode, ConfigError, Disposer, InputMode, KubefontConfig,
    KubefontError, MotionState, NoPrompt, PermissionPrompt,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod font_loader;
mod frame;
mod gyroscope;
mod input;
mod render;

thread_local! {
    // Auto-mounted scenes live as long as the page.
    static AUTO_MOUNTED: RefCell<Vec<Kubefont>> = const { RefCell::new(Vec::new()) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("kubefont starting");

    let Some(document) = dom::window_document() else {
        return Ok(());
    };
    let loading = js_sys::Reflect::get(&document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|s| s.as_string())
        .is_some_and(|s| s == "loading");
    if loading {
        let ready = Closure::once_into_js(auto_mount_all);
        _ = document
            .add_event_listener_with_callback("DOMContentLoaded", ready.unchecked_ref());
    } else {
        auto_mount_all();
    }
    Ok(())
}

/// Mount every `[data-kubefont]` element from its `data-*` attributes.
fn auto_mount_all() {
    let Some(document) = dom::window_document() else {
        return;
    };
    let nodes = match document.query_selector_all(constants::AUTO_MOUNT_SELECTOR) {
        Ok(nodes) => nodes,
        Err(e) => {
            log::error!("[mount] query failed: {:?}", e);
            return;
        }
    };
    for i in 0..nodes.length() {
        let Some(container) = nodes
            .item(i)
            .and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
        else {
            continue;
        };
        let config = match config_from_attributes(&container) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("[mount] skipping element: {}", e);
                continue;
            }
        };
        spawn_local(async move {
            match mount_config(container, config, Box::new(NoPrompt)).await {
                Ok(handle) => AUTO_MOUNTED.with(|m| m.borrow_mut().push(handle)),
                Err(e) => log::error!("[mount] {:#}", e),
            }
        });
    }
}

fn config_from_attributes(element: &web::Element) -> Result<KubefontConfig, ConfigError> {
    let pairs: Vec<(String, String)> = element
        .get_attribute_names()
        .iter()
        .filter_map(|name| name.as_string())
        .filter_map(|name| {
            let key = input::data_attribute_key(&name)?.to_string();
            let value = element.get_attribute(&name).unwrap_or_default();
            Some((key, value))
        })
        .collect();
    KubefontConfig::from_attributes(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
}

/// A mounted scene. Dropping or unmounting tears it down.
#[wasm_bindgen]
pub struct Kubefont {
    disposer: Disposer,
    gyroscope: Option<Rc<gyroscope::Gyroscope>>,
}

#[wasm_bindgen]
impl Kubefont {
    /// Mount into `container`. `options` uses the camelCase option names;
    /// `prompt` is called with a retry function while orientation
    /// permission is missing and with `null` once granted.
    pub async fn mount(
        container: web::HtmlElement,
        options: JsValue,
        prompt: Option<js_sys::Function>,
    ) -> Result<Kubefont, JsValue> {
        let json = js_sys::JSON::stringify(&options)?
            .as_string()
            .ok_or_else(|| JsValue::from_str("options are not serializable"))?;
        let config = KubefontConfig::from_json(&json).map_err(|e| js_error(e.into()))?;
        let prompt: Box<dyn PermissionPrompt> = match prompt {
            Some(callback) => Box::new(gyroscope::JsPrompt::new(callback)),
            None => Box::new(NoPrompt),
        };
        mount_config(container, config, prompt).await.map_err(|e| {
            log::error!("[mount] {:#}", e);
            JsValue::from_str(&format!("{:#}", e))
        })
    }

    pub fn unmount(&mut self) {
        if !self.disposer.is_disposed() {
            log::info!("[mount] unmounting");
        }
        self.disposer.dispose();
    }

    /// Re-issue the orientation permission request, e.g. from a button.
    #[wasm_bindgen(js_name = requestGyroscope)]
    pub fn request_gyroscope(&self) {
        match &self.gyroscope {
            Some(gyro) => gyro.request(),
            None => log::warn!("[gyro] scene is driven by the pointer"),
        }
    }

    #[wasm_bindgen(js_name = gyroscopeGranted)]
    pub fn gyroscope_granted(&self) -> bool {
        self.gyroscope.as_ref().is_some_and(|g| g.is_granted())
    }
}

fn js_error(e: KubefontError) -> JsValue {
    log::error!("[mount] {}", e);
    JsValue::from_str(&e.to_string())
}

async fn mount_config(
    container: web::HtmlElement,
    config: KubefontConfig,
    prompt: Box<dyn PermissionPrompt>,
) -> anyhow::Result<Kubefont> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let mut disposer = Disposer::new();

    let canvas = dom::create_canvas(&document, &container)?;
    // A scene that never completes leaves its blank canvas in place.
    let completed = Rc::new(Cell::new(false));
    {
        let canvas = canvas.clone();
        let completed = completed.clone();
        disposer.defer("canvas", move || {
            if completed.get() {
                canvas.remove();
            }
        });
    }
    let resize = dom::wire_canvas_resize(&canvas)?;
    disposer.defer("resize listener", move || drop(resize));

    let motion = Rc::new(RefCell::new(MotionState::default()));
    let mode = select_input_mode(
        config.use_gyroscope,
        gyroscope::orientation_supported(&window),
    );
    log::info!("[mount] text {:?}, {:?} input", config.text, mode);
    let gyroscope = match mode {
        InputMode::Pointer => {
            let listener = events::pointer::wire_pointer(&container, motion.clone())?;
            disposer.defer("pointer listener", move || drop(listener));
            None
        }
        InputMode::Orientation => {
            let gyro = gyroscope::Gyroscope::new(motion.clone(), prompt);
            gyro.request();
            let gyro_dispose = gyro.clone();
            disposer.defer("gyroscope", move || gyro_dispose.dispose());
            Some(gyro)
        }
    };

    let font = font_loader::load_font(&config.text_font_url).await?;
    let mut gpu = render::GpuState::new(&canvas).await?;

    let aspect = input::aspect_ratio(canvas.width(), canvas.height());
    let mut rng = StdRng::from_entropy();
    let parts = build_scene(&config, &font, aspect, &mut rng);
    gpu.upload_scene(&parts.scene);

    let frame_loop = frame::FrameLoop::start(frame::FrameContext::new(
        gpu,
        parts.camera,
        motion,
        canvas,
    ));
    disposer.defer("frame loop", move || frame_loop.cancel());
    completed.set(true);
    log::info!(
        "[mount] scene ready: {} objects",
        parts.scene.objects().len()
    );

    Ok(Kubefont {
        disposer,
        gyroscope,
    })
}
