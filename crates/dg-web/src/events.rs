use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::error::js_err;
use crate::frame::Animation;

type TimerSlot = Rc<RefCell<Option<i32>>>;
type CallbackSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Forward section visibility to the animation. When several entries arrive
/// in one batch, the latest one wins.
pub fn wire_visibility(
    section: &web::Element,
    threshold: f64,
    animation: Rc<RefCell<Animation>>,
) -> anyhow::Result<()> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            let latest = entries
                .iter()
                .filter_map(|e| e.dyn_into::<web::IntersectionObserverEntry>().ok())
                .last();
            if let Some(entry) = latest {
                animation.borrow_mut().on_visibility(entry.is_intersecting());
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(js_err)?;
    observer.observe(section);
    callback.forget();
    Ok(())
}

/// Debounce window `resize` events: every event restarts a `delay_ms`
/// timer, and only the timer callback rebuilds the scene.
pub fn wire_resize(
    window: &web::Window,
    delay_ms: i32,
    animation: Rc<RefCell<Animation>>,
) -> anyhow::Result<()> {
    let timer: TimerSlot = Rc::new(RefCell::new(None));
    let fire: CallbackSlot = Rc::new(RefCell::new(None));

    {
        let animation = animation.clone();
        let timer = timer.clone();
        let fire_again = fire.clone();
        *fire.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            timer.borrow_mut().take();
            let remaining = animation.borrow_mut().on_resize_timer();
            if let Some(wait) = remaining {
                // fired a little before the deadline: wait out the rest
                arm(&timer, &fire_again, remaining_ms(wait));
            }
        }) as Box<dyn FnMut()>));
    }

    let on_resize = Closure::wrap(Box::new(move || {
        animation.borrow_mut().on_resize();
        arm(&timer, &fire, delay_ms);
    }) as Box<dyn FnMut()>);
    window
        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
        .map_err(js_err)?;
    on_resize.forget();
    Ok(())
}

fn arm(timer: &TimerSlot, fire: &CallbackSlot, delay_ms: i32) {
    let Some(window) = web::window() else {
        return;
    };
    if let Some(handle) = timer.borrow_mut().take() {
        window.clear_timeout_with_handle(handle);
    }
    if let Some(cb) = fire.borrow().as_ref() {
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            delay_ms,
        ) {
            Ok(handle) => *timer.borrow_mut() = Some(handle),
            Err(e) => log::warn!("setTimeout failed: {:?}", e),
        }
    }
}

#[inline]
fn remaining_ms(wait: Duration) -> i32 {
    (wait.as_millis() as i32).saturating_add(1)
}
