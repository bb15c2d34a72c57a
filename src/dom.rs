//! Browser glue over `web-sys`.
//!
//! Lookups return `PageError` instead of panicking; listeners are attached
//! for the lifetime of the page and log handler failures at debug level.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition, Storage, Window,
};

use crate::consts::PREFERS_LIGHT_QUERY;
use crate::error::PageError;
use crate::theme::PreferenceStore;

pub fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or(PageError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document, PageError> {
    window.document().ok_or(PageError::NoDocument)
}

/// All HTML elements matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, PageError> {
    let list = document.query_selector_all(selector)?;
    let mut out = Vec::new();
    for i in 0..list.length() {
        let Some(node) = list.item(i) else {
            continue;
        };
        if let Ok(el) = node.dyn_into::<HtmlElement>() {
            out.push(el);
        }
    }
    Ok(out)
}

/// Add or remove `class` on `el`.
pub fn set_class(el: &Element, class: &str, enabled: bool) -> Result<(), PageError> {
    let class_list = el.class_list();
    if enabled {
        class_list.add_1(class)?;
    } else {
        class_list.remove_1(class)?;
    }
    Ok(())
}

/// Set one inline style property. An empty value removes it.
pub fn set_style(el: &HtmlElement, property: &str, value: &str) -> Result<(), PageError> {
    el.style().set_property(property, value)?;
    Ok(())
}

/// Smooth-scroll so the top of `target` meets the top of the viewport.
pub fn scroll_to_start(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// System light color-scheme preference, if the query is supported.
pub fn prefers_light(window: &Window) -> Option<bool> {
    match window.match_media(PREFERS_LIGHT_QUERY) {
        Ok(Some(query)) => Some(query.matches()),
        Ok(None) | Err(_) => None,
    }
}

/// Attach `handler` to `event` on `target` for the life of the page.
///
/// Passive listeners cannot call `preventDefault`.
pub fn listen<F>(target: &EventTarget, event: &str, passive: bool, handler: F) -> Result<(), PageError>
where
    F: FnMut(Event) -> Result<(), PageError> + 'static,
{
    let options = AddEventListenerOptions::new();
    options.set_passive(passive);
    attach(target, event, &options, handler)
}

/// Like [`listen`], but the browser drops the listener after one dispatch.
pub fn listen_once<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), PageError>
where
    F: FnMut(Event) -> Result<(), PageError> + 'static,
{
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    attach(target, event, &options, handler)
}

fn attach<F>(
    target: &EventTarget,
    event: &str,
    options: &AddEventListenerOptions,
    mut handler: F,
) -> Result<(), PageError>
where
    F: FnMut(Event) -> Result<(), PageError> + 'static,
{
    let name = event.to_owned();
    let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if let Err(err) = handler(event) {
            log::debug!("{name} handler failed: {err}");
        }
    });
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        options,
    )?;
    closure.forget();
    Ok(())
}

/// `localStorage`-backed preference store.
///
/// When storage is blocked (private mode, sandboxed iframe) reads return
/// nothing and writes are dropped.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn new(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::debug!("localStorage unavailable: {}", PageError::from(err));
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("read of {key} failed: {}", PageError::from(err));
                None
            }
        }
    }

    fn save(&mut self, key: &str, value: &str) {
        let Some(storage) = self.storage.as_ref() else {
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::debug!("write of {key} failed: {}", PageError::from(err));
        }
    }
}
