use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Registration {
    target: web::EventTarget,
    name: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

/// Event listeners owned by one view.
///
/// Every handler runs behind a shared enabled flag, and all registrations are
/// removed from their targets when the set is dropped.
pub struct ListenerSet {
    enabled: Rc<Cell<bool>>,
    registrations: Vec<Registration>,
}

impl Default for ListenerSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ListenerSet {
    pub fn new() -> Self {
        Self {
            enabled: Rc::new(Cell::new(true)),
            registrations: Vec::new(),
        }
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }

    /// Register `handler` for `name` events of type `E` on `target`.
    ///
    /// Non-passive listeners may call `prevent_default`.
    pub fn add<E, F>(&mut self, target: &web::EventTarget, name: &'static str, passive: bool, mut handler: F)
    where
        E: JsCast + 'static,
        F: FnMut(E) + 'static,
    {
        let enabled = self.enabled.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            if enabled.get() {
                handler(ev.unchecked_into::<E>());
            }
        }) as Box<dyn FnMut(_)>);

        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(passive);
        if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
            name,
            closure.as_ref().unchecked_ref(),
            &opts,
        ) {
            log::warn!("[input] could not listen for {}: {:?}", name, e);
            return;
        }
        self.registrations.push(Registration {
            target: target.clone(),
            name,
            closure,
        });
    }

    /// Remove every listener now.
    pub fn clear(&mut self) {
        for r in self.registrations.drain(..) {
            _ = r
                .target
                .remove_event_listener_with_callback(r.name, r.closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for ListenerSet {
    fn drop(&mut self) {
        self.clear();
    }
}
