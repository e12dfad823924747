use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::constants::{
    HIDDEN_CLASS, MOBILE_MENU_BUTTON_ID, MOBILE_MENU_ID, REVEAL_SELECTOR, REVEAL_THRESHOLD,
    VISIBLE_CLASS,
};
use crate::dom;
use crate::error::js_err;

/// Hamburger button toggles the mobile menu. Either element missing: no-op.
pub fn wire_mobile_menu(document: &web::Document) {
    let Some(menu) = document.get_element_by_id(MOBILE_MENU_ID) else {
        return;
    };
    dom::add_click_listener(document, MOBILE_MENU_BUTTON_ID, move || {
        let _ = menu.class_list().toggle(HIDDEN_CLASS);
    });
}

/// Mark `.animate-on-scroll` elements visible the first time they scroll
/// into view. Without IntersectionObserver they are all revealed at once.
pub fn wire_reveal_on_scroll(document: &web::Document) -> anyhow::Result<()> {
    let targets = dom::query_all(document, REVEAL_SELECTOR);
    if targets.is_empty() {
        return Ok(());
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries
                .iter()
                .filter_map(|e| e.dyn_into::<web::IntersectionObserverEntry>().ok())
            {
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1(VISIBLE_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        match web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        {
            Ok(o) => o,
            Err(e) => {
                for el in &targets {
                    let _ = el.class_list().add_1(VISIBLE_CLASS);
                }
                return Err(js_err(e).context("IntersectionObserver unavailable"));
            }
        };
    for el in &targets {
        observer.observe(el);
    }
    callback.forget();
    Ok(())
}
