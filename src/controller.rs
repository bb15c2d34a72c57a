//! The page interaction controller.
//!
//! Collects the sections, cards, and nav links once, then installs each
//! behavior independently. A behavior that cannot be installed is logged and
//! skipped; the others still run.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent, Window,
};

use crate::config::PageConfig;
use crate::dom::{self, LocalStore};
use crate::error::PageError;
use crate::nav::{self, NavLinks, SectionOffset};
use crate::reveal::{self, RevealLedger};
use crate::theme::{Theme, ThemeState};
use crate::tilt::{self, Bounds};

/// Browser handles and the elements captured at startup.
struct Page {
    config: Rc<PageConfig>,
    window: Window,
    document: Document,
    sections: Rc<Vec<HtmlElement>>,
    cards: Vec<HtmlElement>,
    links: Rc<Vec<HtmlElement>>,
}

/// Install every behavior on the current document.
///
/// # Errors
///
/// Fails only when there is no window or document to work with.
pub fn install(config: PageConfig) -> Result<(), PageError> {
    let window = dom::window()?;
    let document = dom::document(&window)?;
    let sections = collect(&document, &config.section_selector);
    let cards = collect(&document, &config.card_selector);
    let links = collect(&document, &config.nav_link_selector);

    let page = Page {
        config: Rc::new(config),
        window,
        document,
        sections: Rc::new(sections),
        cards,
        links: Rc::new(links),
    };
    log::info!(
        "page controller ready: {} sections, {} cards, {} nav links",
        page.sections.len(),
        page.cards.len(),
        page.links.len()
    );

    let nav = Rc::new(RefCell::new(NavLinks::new(
        page.links.iter().map(|link| link.get_attribute("href")),
    )));

    report("scroll reveal", install_reveal(&page));
    report("smooth navigation", install_smooth_nav(&page, &nav));
    report("theme toggle", install_theme(&page));
    report("nav highlighting", install_scroll_highlight(&page, &nav));
    report("card tilt", install_tilt(&page));
    Ok(())
}

/// Elements matching `selector`, or none if the selector is rejected.
fn collect(document: &Document, selector: &str) -> Vec<HtmlElement> {
    dom::query_all(document, selector).unwrap_or_else(|err| {
        log::warn!("selector {selector:?} matched nothing: {err}");
        Vec::new()
    })
}

fn report(feature: &str, result: Result<(), PageError>) {
    if let Err(err) = result {
        log::warn!("{feature} disabled: {err}");
    }
}

/// Mirror the active nav slot onto the link classes.
fn render_active(links: &[HtmlElement], active: Option<usize>, class: &str) -> Result<(), PageError> {
    for (index, link) in links.iter().enumerate() {
        dom::set_class(link, class, active == Some(index))?;
    }
    Ok(())
}

// --- Scroll reveal ---

fn install_reveal(page: &Page) -> Result<(), PageError> {
    let config = &page.config;
    for (index, card) in page.cards.iter().enumerate() {
        dom::set_style(card, "transition-delay", &reveal::stagger_delay_css(index, config.stagger_step_ms))?;
    }

    let mut targets: Vec<Element> = page.sections.iter().cloned().map(Element::from).collect();
    for card in &page.cards {
        let card = Element::from(card.clone());
        if !targets.contains(&card) {
            targets.push(card);
        }
    }
    if targets.is_empty() {
        return Ok(());
    }

    let targets = Rc::new(targets);
    let ledger = RefCell::new(RevealLedger::new(targets.len()));
    let callback = {
        let targets = Rc::clone(&targets);
        let class = config.reveal_class.clone();
        Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let Some(index) = targets.iter().position(|t| *t == target) else {
                        continue;
                    };
                    if !ledger.borrow_mut().observe(index, entry.is_intersecting()) {
                        continue;
                    }
                    log::debug!("revealed {}/{}", ledger.borrow().revealed_count(), targets.len());
                    if let Err(err) = dom::set_class(&target, &class, true) {
                        log::debug!("reveal failed: {err}");
                    }
                    observer.unobserve(&target);
                }
            },
        )
    };

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    for target in targets.iter() {
        observer.observe(target);
    }
    callback.forget();
    Ok(())
}

// --- Smooth navigation ---

fn install_smooth_nav(page: &Page, nav: &Rc<RefCell<NavLinks>>) -> Result<(), PageError> {
    for (index, link) in page.links.iter().enumerate() {
        let Some(fragment) = nav.borrow().fragment(index).map(str::to_owned) else {
            continue;
        };
        let nav = Rc::clone(nav);
        let links = Rc::clone(&page.links);
        let document = page.document.clone();
        let config = Rc::clone(&page.config);
        dom::listen(link, "click", false, move |event| {
            event.prevent_default();
            if let Some(target) = document.get_element_by_id(&fragment) {
                dom::scroll_to_start(&target);
            }
            nav.borrow_mut().activate(index);
            render_active(&links, nav.borrow().active(), &config.active_class)
        })?;
    }
    Ok(())
}

// --- Theme toggle ---

fn render_theme(body: &HtmlElement, toggle: Option<&Element>, theme: Theme, light_class: &str) -> Result<(), PageError> {
    dom::set_class(body, light_class, theme.is_light())?;
    if let Some(toggle) = toggle {
        let view = theme.toggle_view();
        toggle.set_text_content(Some(view.icon));
        toggle.set_attribute("aria-pressed", view.pressed)?;
        toggle.set_attribute("title", view.title)?;
    }
    Ok(())
}

fn install_theme(page: &Page) -> Result<(), PageError> {
    let config = Rc::clone(&page.config);
    let body = page.document.body().ok_or(PageError::NoBody)?;
    let toggle = page.document.get_element_by_id(&config.theme_toggle_id);

    let store = LocalStore::new(&page.window);
    let state = ThemeState::init(store, config.storage_key.as_str(), dom::prefers_light(&page.window));
    render_theme(&body, toggle.as_ref(), state.current(), &config.light_class)?;
    log::debug!("theme resolved to {}", state.current().as_str());

    let Some(toggle) = toggle else {
        return Ok(());
    };
    let state = RefCell::new(state);
    let control = toggle.clone();
    dom::listen(&toggle, "click", false, move |_event| {
        let theme = state.borrow_mut().toggle();
        render_theme(&body, Some(&control), theme, &config.light_class)
    })
}

// --- Scroll-based highlighting ---

fn section_offsets(sections: &[HtmlElement]) -> Vec<SectionOffset> {
    sections
        .iter()
        .map(|s| SectionOffset::new(s.id(), f64::from(s.offset_top())))
        .collect()
}

fn install_scroll_highlight(page: &Page, nav: &Rc<RefCell<NavLinks>>) -> Result<(), PageError> {
    let update: Rc<dyn Fn() -> Result<(), PageError>> = {
        let window = page.window.clone();
        let sections = Rc::clone(&page.sections);
        let links = Rc::clone(&page.links);
        let config = Rc::clone(&page.config);
        let nav = Rc::clone(nav);
        Rc::new(move || {
            let offsets = section_offsets(&sections);
            let current = nav::active_section(&offsets, window.scroll_y()?, config.scroll_margin_px);
            nav.borrow_mut().activate_section(current);
            render_active(&links, nav.borrow().active(), &config.active_class)
        })
    };

    // At most one recomputation per animation frame.
    let pending = Rc::new(Cell::new(false));
    let frame = {
        let pending = Rc::clone(&pending);
        let update = Rc::clone(&update);
        Closure::<dyn FnMut(f64)>::new(move |_ts: f64| {
            pending.set(false);
            if let Err(err) = update() {
                log::debug!("nav highlight failed: {err}");
            }
        })
    };

    let window = page.window.clone();
    dom::listen(&page.window, "scroll", true, move |_event| {
        if pending.get() {
            return Ok(());
        }
        match window.request_animation_frame(frame.as_ref().unchecked_ref()) {
            Ok(_) => {
                pending.set(true);
                Ok(())
            }
            Err(err) => {
                log::debug!("animation frame unavailable: {}", PageError::from(err));
                update()
            }
        }
    })
}

// --- Card tilt ---

fn install_tilt(page: &Page) -> Result<(), PageError> {
    for card in &page.cards {
        let target = card.clone();
        dom::listen(card, "mousemove", true, move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return Ok(());
            };
            let rect = target.get_bounding_client_rect();
            let bounds = Bounds {
                left: rect.left(),
                top: rect.top(),
                width: rect.width(),
                height: rect.height(),
            };
            let tilt = tilt::tilt_at(bounds, f64::from(event.client_x()), f64::from(event.client_y()));
            dom::set_style(&target, "transform", &tilt.to_css())
        })?;

        let target = card.clone();
        dom::listen(card, "mouseleave", true, move |_event| {
            dom::set_style(&target, "transform", tilt::RESET_TRANSFORM)
        })?;
    }
    Ok(())
}
