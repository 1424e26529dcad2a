use crate::constants::selectors;
use crate::core::{
    ClassOp, ClassTarget, DeviceClass, Environment, SliderConfig, Viewport, OVERRIDE_KEYS,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
pub fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn query_html(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    query(document, selector).and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn create_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// Match the canvas backing store to its CSS box at the given pixel ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, pixel_ratio: f32) {
    let rect = canvas.get_bounding_client_rect();
    let dpr = pixel_ratio as f64;
    let w_px = (rect.width() * dpr) as u32;
    let h_px = (rect.height() * dpr) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
}

/// Snapshot of the window: size, pixel ratio and device class.
pub fn read_environment(window: &web::Window) -> Environment {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    let viewport = Viewport::new(width, height, window.device_pixel_ratio() as f32);
    let user_agent = window.navigator().user_agent().unwrap_or_default();
    let coarse = window
        .match_media("(pointer: coarse)")
        .ok()
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false);
    Environment::new(viewport, DeviceClass::detect(&user_agent, coarse))
}

/// Device preset with any `data-*` overrides found on the slider element.
pub fn read_slider_config(slider: Option<&web::HtmlElement>, device: DeviceClass) -> SliderConfig {
    let mut config = SliderConfig::for_device(device);
    let Some(el) = slider else {
        return config;
    };
    let data = el.dataset();
    for key in OVERRIDE_KEYS {
        if let Some(value) = data.get(key) {
            if let Err(e) = config.apply_override(key, &value) {
                log::warn!("[slider] ignoring data-{}: {}", key, e);
            }
        }
    }
    config
}

/// Elements the highlight instructions address.
pub struct ClassTargets {
    pub items: Vec<web::Element>,
    pub description: Option<web::Element>,
}

impl ClassTargets {
    pub fn find(document: &web::Document) -> Self {
        Self {
            items: query_all(document, selectors::PROJECT_ITEM),
            description: query(document, selectors::PROJECT_DESCRIPTION),
        }
    }

    fn element(&self, target: ClassTarget) -> Option<&web::Element> {
        match target {
            ClassTarget::ProjectItem(i) => self.items.get(i),
            ClassTarget::Description => self.description.as_ref(),
        }
    }

    /// Apply instructions; ops for missing elements are skipped.
    pub fn apply<'a>(&self, ops: impl IntoIterator<Item = &'a ClassOp>) {
        for op in ops {
            let Some(el) = self.element(op.target) else {
                continue;
            };
            let list = el.class_list();
            let name = op.class.as_str();
            _ = if op.add {
                list.add_1(name)
            } else {
                list.remove_1(name)
            };
        }
    }
}

#[inline]
pub fn set_text(el: Option<&web::Element>, text: &str) {
    if let Some(el) = el {
        el.set_text_content(Some(text));
    }
}

pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::debug!("style {} failed: {:?}", property, e);
    }
}

#[inline]
pub fn set_opacity(el: &web::HtmlElement, opacity: f32) {
    set_style(el, "opacity", &format!("{:.3}", opacity.clamp(0.0, 1.0)));
}

/// Wait for an image to finish decoding, giving up after `timeout_ms`.
pub async fn await_image(
    window: &web::Window,
    img: &web::HtmlImageElement,
    timeout_ms: i32,
) -> anyhow::Result<()> {
    let src = img.current_src();
    let timeout = js_sys::Promise::new(&mut |_resolve, reject| {
        let label = src.clone();
        let on_timeout = Closure::once_into_js(move || {
            _ = reject.call1(
                &wasm_bindgen::JsValue::NULL,
                &wasm_bindgen::JsValue::from_str(&format!("timed out: {}", label)),
            );
        });
        if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            on_timeout.unchecked_ref(),
            timeout_ms,
        ) {
            log::warn!("set_timeout failed: {:?}", e);
        }
    });
    let race = js_sys::Promise::race(&js_sys::Array::of2(&img.decode(), &timeout));
    JsFuture::from(race)
        .await
        .map_err(|e| anyhow::anyhow!("image {} failed: {:?}", src, e))?;
    if img.natural_width() == 0 || img.natural_height() == 0 {
        anyhow::bail!("image {} has no pixels", src);
    }
    Ok(())
}
