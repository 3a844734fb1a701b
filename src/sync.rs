use crate::WebApp;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Poll the shared cookie for the lifetime of the page. Returns the interval
/// handle, or `None` if no timer could be installed.
pub fn start_sync_loop(app: Rc<RefCell<WebApp>>) -> Option<i32> {
    let window = web::window()?;
    let period_ms = app.borrow().sync().period().as_millis() as i32;

    let closure = Closure::<dyn FnMut()>::new(move || {
        app.borrow_mut().sync_tick();
    });

    let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        period_ms,
    );
    closure.forget();

    match handle {
        Ok(id) => {
            log::info!("[sync] polling every {}ms", period_ms);
            Some(id)
        }
        Err(e) => {
            log::error!("[sync] setInterval failed: {:?}", e);
            None
        }
    }
}
