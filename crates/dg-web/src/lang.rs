//! Spanish/English toggle: shows the matching `[data-lang]` blocks and keeps
//! the `lang` query parameter on the current URL and same-origin links.
//! Every browser call is best-effort.

use dg_core::lang::{resolve_initial, should_rewrite_href, PREFERENCE_KEY, QUERY_PARAM};
use dg_core::Lang;
use wasm_bindgen::JsValue;
use web_sys as web;

use crate::constants::{
    ACTIVE_CLASS, HIDDEN_CLASS, LANG_DATA_ATTRIBUTE, LANG_DATA_SELECTOR, LINK_SELECTOR,
};
use crate::dom;

fn storage() -> Option<web::Storage> {
    web::window()?.local_storage().ok().flatten()
}

/// Raw stored preference, unvalidated.
pub fn stored_preference() -> Option<String> {
    storage()?.get_item(PREFERENCE_KEY).ok().flatten()
}

/// Saved preference, if any and valid.
pub fn get_preference() -> Option<Lang> {
    stored_preference()?.parse().ok()
}

pub fn set_preference(lang: Lang) {
    if let Some(s) = storage() {
        if s.set_item(PREFERENCE_KEY, lang.as_str()).is_err() {
            log::debug!("language preference not persisted");
        }
    }
}

fn url_param(window: &web::Window) -> Option<String> {
    let search = window.location().search().ok()?;
    web::UrlSearchParams::new_with_str(&search).ok()?.get(QUERY_PARAM)
}

/// URL parameter, then saved preference, then the browser language.
pub fn initial_language(window: &web::Window) -> Lang {
    let from_url = url_param(window);
    let saved = get_preference();
    let navigator = window.navigator().language().unwrap_or_default();
    resolve_initial(from_url.as_deref(), saved.map(Lang::as_str), &navigator)
}

pub fn apply(window: &web::Window, document: &web::Document, lang: Lang) {
    set_preference(lang);
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("lang", lang.as_str());
    }

    for candidate in Lang::ALL {
        if let Some(button) = document.get_element_by_id(&candidate.button_id()) {
            let _ = button
                .class_list()
                .toggle_with_force(ACTIVE_CLASS, candidate == lang);
        }
    }

    for el in dom::query_all(document, LANG_DATA_SELECTOR) {
        let matches = el.get_attribute(LANG_DATA_ATTRIBUTE).as_deref() == Some(lang.as_str());
        let _ = el.class_list().toggle_with_force(HIDDEN_CLASS, !matches);
    }

    let attr = lang.placeholder_attribute();
    for el in dom::query_all(document, &format!("[{attr}]")) {
        if let Some(text) = el.get_attribute(&attr) {
            let _ = el.set_attribute("placeholder", &text);
        }
    }

    if replace_current_url(window, lang).is_none() {
        log::debug!("current URL left unchanged");
    }
    rewrite_internal_links(window, document, lang);
    log::info!("language set to {lang}");
}

fn replace_current_url(window: &web::Window, lang: Lang) -> Option<()> {
    let url = web::Url::new(&window.location().href().ok()?).ok()?;
    url.search_params().set(QUERY_PARAM, lang.as_str());
    let relative = format!("{}{}{}", url.pathname(), url.search(), url.hash());
    window
        .history()
        .ok()?
        .replace_state_with_url(&JsValue::from(js_sys::Object::new()), "", Some(&relative))
        .ok()
}

/// Carry the language on same-origin links; external and malformed links
/// are left alone.
fn rewrite_internal_links(window: &web::Window, document: &web::Document, lang: Lang) {
    let location = window.location();
    let (Ok(origin), Ok(base)) = (location.origin(), location.href()) else {
        return;
    };
    for a in dom::query_all(document, LINK_SELECTOR) {
        let Some(href) = a.get_attribute("href") else {
            continue;
        };
        if !should_rewrite_href(&href) {
            continue;
        }
        let Ok(url) = web::Url::new_with_base(&href, &base) else {
            continue;
        };
        if url.origin() != origin {
            continue;
        }
        url.search_params().set(QUERY_PARAM, lang.as_str());
        let _ = a.set_attribute("href", &url.href());
    }
}

/// Wire the `#lang-es` / `#lang-en` buttons and apply the initial language.
pub fn init(window: &web::Window, document: &web::Document) {
    for lang in Lang::ALL {
        let (w, d) = (window.clone(), document.clone());
        if !dom::add_click_listener(document, &lang.button_id(), move || apply(&w, &d, lang)) {
            log::debug!("no #{} button", lang.button_id());
        }
    }
    apply(window, document, initial_language(window));
}
