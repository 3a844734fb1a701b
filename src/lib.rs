#![cfg(target_arch = "wasm32")]
use dial_core::{AppContext, Dial, DialConfig, SyncLoop};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod constants;
mod cookie;
mod dom;
mod events;
mod input;
mod media;
mod sync;

use canvas::CanvasSurface;
use cookie::CookieStore;
use media::MediaVolume;

pub(crate) type WebApp = AppContext<CanvasSurface, CookieStore, MediaVolume>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("dial-web starting");

    if let Err(e) = install_with(constants::meter_preset()) {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Mount another dial configured from a JS options object. Keys follow the
/// flat option names (`angle`, `radius`, `offsetAngle`, `colorFill`,
/// `canvasWidth`, ...); anything left out takes its default.
#[wasm_bindgen]
pub fn install(options: JsValue) -> Result<(), JsValue> {
    let config = config_from_js(&options).map_err(|e| JsValue::from_str(&e.to_string()))?;
    install_with(config)
        .map(|_| ())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn config_from_js(options: &JsValue) -> anyhow::Result<DialConfig> {
    if options.is_undefined() || options.is_null() {
        return Ok(DialConfig::default());
    }
    serde_wasm_bindgen::from_value::<DialConfig>(options.clone())
        .map_err(|e| anyhow::anyhow!("invalid dial options: {}", e))
}

fn install_with(config: DialConfig) -> anyhow::Result<Rc<RefCell<WebApp>>> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("document has no body"))?;
    let tail = dom::build_scaffold(&document, &body)?;

    let surface = CanvasSurface::new(&document)?;
    let canvas = surface.canvas().clone();
    let dial = Dial::new(config, surface)?;

    let html_document = document
        .clone()
        .dyn_into::<web::HtmlDocument>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let store = Rc::new(CookieStore::new(html_document, constants::cookie_scope()));
    let sink = Rc::new(MediaVolume::new(document));

    let mut app = AppContext::new(dial, store, sink, SyncLoop::default());
    app.dial_mut().append_to(&tail);
    log::info!(
        "[dial] mounted at {:.2}, syncing via cookie {}",
        app.value(),
        app.store().scope().key()
    );

    let app = Rc::new(RefCell::new(app));
    events::wire_input_handlers(events::InputWiring {
        canvas,
        app: app.clone(),
    });
    sync::start_sync_loop(app.clone());
    Ok(app)
}
