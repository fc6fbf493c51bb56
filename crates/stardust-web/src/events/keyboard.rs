use crate::frame::App;
use crate::overlay;
use stardust_core::{key_action, InputEvent, KeyAction};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Apply a key to the app. Returns whether the key was bound.
pub fn handle_key(key: &str, app: &Rc<RefCell<App>>, document: &web::Document) -> bool {
    let Some(action) = key_action(key) else {
        return false;
    };
    match action {
        KeyAction::Pause => {
            let paused = app.borrow_mut().clock.toggle_pause();
            log::info!("{}", if paused { "paused" } else { "resumed" });
        }
        KeyAction::ToggleHint => {
            let shown = overlay::toggle(document);
            log::debug!("hint {}", if shown { "shown" } else { "hidden" });
        }
        other => app.borrow_mut().send(InputEvent::Key(other)),
    }
    true
}

pub fn wire_global_keydown(app: Rc<RefCell<App>>, document: web::Document) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                // leave browser shortcuts alone
                if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
                    return;
                }
                if handle_key(&ev.key(), &app, &document) {
                    ev.prevent_default();
                }
            }) as Box<dyn FnMut(_)>);
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
