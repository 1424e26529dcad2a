use super::{ListenerSet, QueuedView};
use crate::core::{Carousel, KeyCommand, View};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn is_typing_target(ev: &web::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::HtmlElement>().ok())
        .map(|el| {
            let tag = el.tag_name();
            tag.eq_ignore_ascii_case("input") || tag.eq_ignore_ascii_case("textarea")
        })
        .unwrap_or(false)
}

/// Arrow keys step one tile, Home/End jump to the first/last project.
pub fn wire_carousel_keys(carousel: &Rc<RefCell<Carousel>>, set: &mut ListenerSet) {
    let Some(window) = web::window() else {
        return;
    };
    let carousel = carousel.clone();
    set.add(&window.into(), "keydown", false, move |ev: web::KeyboardEvent| {
        if ev.alt_key() || ev.ctrl_key() || ev.meta_key() || is_typing_target(&ev) {
            return;
        }
        let Some(cmd) = KeyCommand::from_key(&ev.key()) else {
            return;
        };
        if carousel.borrow_mut().key(cmd) {
            log::debug!("[input] key {:?}", cmd);
            ev.prevent_default();
        }
    });
}

/// `Escape` on a project page goes back to the carousel.
pub fn wire_escape_home(queued_view: &QueuedView, set: &mut ListenerSet) {
    let Some(window) = web::window() else {
        return;
    };
    let queued = queued_view.clone();
    set.add(&window.into(), "keydown", false, move |ev: web::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            *queued.borrow_mut() = Some(View::Home);
        }
    });
}
