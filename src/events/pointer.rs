use super::{ListenerSet, QueuedView};
use crate::core::{Carousel, CarouselEvent, HoverSource, View};
use glam::Vec2;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    /// Element that starts drags (the slider or its drag area).
    pub drag_area: web::HtmlElement,
    pub carousel: Rc<RefCell<Carousel>>,
    pub queued_view: QueuedView,
    /// Set while a drag along the carousel axis owns the gesture.
    pub scroll_locked: Rc<Cell<bool>>,
}

#[inline]
fn client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

fn queue_open(queued: &QueuedView, event: Option<CarouselEvent>) {
    if let Some(CarouselEvent::Open(project)) = event {
        log::info!("[input] open project {}", project);
        *queued.borrow_mut() = Some(View::Project(project));
    }
}

pub fn wire_input_handlers(w: &InputWiring, set: &mut ListenerSet) {
    let Some(window) = web::window() else {
        return;
    };
    let window: web::EventTarget = window.into();
    let area: web::EventTarget = w.drag_area.clone().into();

    wire_pointerdown(w, &area, set);
    wire_pointermove(w, &window, set);
    wire_pointerup(w, &window, set);
    wire_pointercancel(w, &window, set);
    wire_pointerleave(w, &area, set);
    wire_touchmove(w, &area, set);
    wire_wheel(w, &area, set);
}

fn wire_pointerdown(w: &InputWiring, area: &web::EventTarget, set: &mut ListenerSet) {
    let w = w.clone();
    set.add(area, "pointerdown", false, move |ev: web::PointerEvent| {
        if !ev.is_primary() || ev.button() > 0 {
            return;
        }
        let accepted = w
            .carousel
            .borrow_mut()
            .pointer_down(client_pos(&ev), ev.time_stamp());
        if !accepted {
            return;
        }
        _ = w.drag_area.set_pointer_capture(ev.pointer_id());
        if ev.pointer_type() == "mouse" {
            // keeps the browser from starting a native image drag
            ev.prevent_default();
        }
    });
}

fn wire_pointermove(w: &InputWiring, window: &web::EventTarget, set: &mut ListenerSet) {
    let w = w.clone();
    set.add(window, "pointermove", false, move |ev: web::PointerEvent| {
        if !ev.is_primary() {
            return;
        }
        let outcome = w
            .carousel
            .borrow_mut()
            .pointer_move(client_pos(&ev), Instant::now());
        let lock = outcome.should_prevent_default();
        w.scroll_locked.set(lock);
        if lock {
            ev.prevent_default();
        }
    });
}

fn wire_pointerup(w: &InputWiring, window: &web::EventTarget, set: &mut ListenerSet) {
    let w = w.clone();
    set.add(window, "pointerup", false, move |ev: web::PointerEvent| {
        if !ev.is_primary() {
            return;
        }
        w.scroll_locked.set(false);
        let event = w
            .carousel
            .borrow_mut()
            .pointer_up(client_pos(&ev), ev.time_stamp());
        queue_open(&w.queued_view, event);
    });
}

fn wire_pointercancel(w: &InputWiring, window: &web::EventTarget, set: &mut ListenerSet) {
    let w = w.clone();
    set.add(window, "pointercancel", true, move |_ev: web::PointerEvent| {
        w.scroll_locked.set(false);
        w.carousel.borrow_mut().pointer_cancel();
    });
}

fn wire_pointerleave(w: &InputWiring, area: &web::EventTarget, set: &mut ListenerSet) {
    let w = w.clone();
    set.add(area, "pointerleave", true, move |_ev: web::PointerEvent| {
        w.carousel.borrow_mut().pointer_leave(Instant::now());
    });
}

// Pointer events cannot cancel touch scrolling; a non-passive touchmove can.
fn wire_touchmove(w: &InputWiring, area: &web::EventTarget, set: &mut ListenerSet) {
    let w = w.clone();
    set.add(area, "touchmove", false, move |ev: web::TouchEvent| {
        if w.scroll_locked.get() && ev.cancelable() {
            ev.prevent_default();
        }
    });
}

fn wire_wheel(w: &InputWiring, area: &web::EventTarget, set: &mut ListenerSet) {
    let w = w.clone();
    set.add(area, "wheel", false, move |ev: web::WheelEvent| {
        let delta = Vec2::new(ev.delta_x() as f32, ev.delta_y() as f32);
        if w.carousel.borrow_mut().wheel(delta) {
            ev.prevent_default();
        }
    });
}

/// Hover and click on the `.project-item` list; item `i` stands for project `i`.
pub fn wire_project_items(
    items: &[web::Element],
    carousel: &Rc<RefCell<Carousel>>,
    queued_view: &QueuedView,
    set: &mut ListenerSet,
) {
    for (index, item) in items.iter().enumerate() {
        let target: web::EventTarget = item.clone().unchecked_into();

        let c = carousel.clone();
        set.add(&target, "mouseenter", true, move |_ev: web::MouseEvent| {
            c.borrow_mut()
                .set_hover(HoverSource::List, Some(index), Instant::now());
        });

        let c = carousel.clone();
        set.add(&target, "mouseleave", true, move |_ev: web::MouseEvent| {
            c.borrow_mut()
                .set_hover(HoverSource::List, None, Instant::now());
        });

        let c = carousel.clone();
        let q = queued_view.clone();
        set.add(&target, "click", false, move |ev: web::MouseEvent| {
            ev.prevent_default();
            let event = c.borrow_mut().click_item(index);
            queue_open(&q, event);
        });
    }
}
