//! Browser wiring. Each submodule mounts one feature onto the page; a feature
//! whose markup is missing mounts nothing.

pub mod cards;
pub mod faq;
pub mod filter;
pub mod forms;
pub mod gallery;
pub mod nav;
pub mod quote;
pub mod signup;

use std::borrow::Cow;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent, NodeList, Window};

use crate::config::{CONFIG_ELEMENT_ID, SiteConfig};
use crate::error::{SiteError, SiteResult};

type Mount = fn(&Document, &Rc<SiteConfig>) -> SiteResult<()>;

const FEATURES: [(&str, Mount); 9] = [
    ("mobile nav", nav::mount_mobile_nav),
    ("smooth scroll", nav::mount_smooth_scroll),
    ("gallery", gallery::mount),
    ("project cards", cards::mount),
    ("faq", faq::mount),
    ("portfolio filter", filter::mount),
    ("quote form", forms::mount),
    ("quote estimator", quote::mount),
    ("signup", signup::mount),
];

pub fn window() -> SiteResult<Window> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document() -> SiteResult<Document> {
    window()?.document().ok_or(SiteError::NoDocument)
}

/// Mounts every feature now, or once the DOM has finished parsing.
pub fn mount_page() -> SiteResult<()> {
    let document = document()?;
    if document.ready_state() == "loading" {
        let target = document.clone();
        EventListener::once(&document, "DOMContentLoaded", move |_| {
            mount_all(&target);
        })
        .forget();
        return Ok(());
    }
    mount_all(&document);
    Ok(())
}

pub fn mount_all(document: &Document) {
    let config = Rc::new(load_config(document));
    for (name, mount) in FEATURES {
        match mount(document, &config) {
            Ok(()) => debug!("{name} mounted"),
            Err(err) => warn!("{name} not mounted: {err}"),
        }
    }
}

pub fn load_config(document: &Document) -> SiteConfig {
    let Some(text) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(&text) {
        Ok(config) => config,
        Err(err) => {
            warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
            SiteConfig::default()
        }
    }
}

// --------------------------- query helpers ---------------------------

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub(crate) fn first(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub(crate) fn all(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(elements)
        .unwrap_or_default()
}

pub(crate) fn first_in(parent: &Element, selector: &str) -> Option<Element> {
    parent.query_selector(selector).ok().flatten()
}

pub(crate) fn all_in(parent: &Element, selector: &str) -> Vec<Element> {
    parent
        .query_selector_all(selector)
        .map(elements)
        .unwrap_or_default()
}

pub(crate) fn as_html(element: &Element) -> Option<&HtmlElement> {
    element.dyn_ref::<HtmlElement>()
}

/// Element the event was dispatched on, widened to the nearest ancestor
/// (itself included) matching `selector`.
pub(crate) fn event_target_closest(event: &Event, selector: &str) -> Option<Element> {
    event
        .target()?
        .dyn_into::<Element>()
        .ok()?
        .closest(selector)
        .ok()
        .flatten()
}

// --------------------------- mutation helpers ---------------------------

pub(crate) fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

pub(crate) fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

pub(crate) fn set_attr(element: &Element, name: &str, value: &str) {
    let _ = element.set_attribute(name, value);
}

pub(crate) fn set_hidden(element: &Element, hidden: bool) {
    if let Some(html) = as_html(element) {
        html.set_hidden(hidden);
    }
}

pub(crate) fn set_text(element: Option<Element>, text: &str) {
    if let Some(element) = element {
        element.set_text_content(Some(text));
    }
}

pub(crate) fn alert(message: &str) {
    if let Ok(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

pub(crate) fn viewport_width() -> f64 {
    window()
        .ok()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}

// --------------------------- events ---------------------------

/// Enter and Space activate buttons-by-role.
pub(crate) fn is_activation_key(event: &Event) -> bool {
    event
        .dyn_ref::<KeyboardEvent>()
        .map(|key| matches!(key.key().as_str(), "Enter" | " "))
        .unwrap_or(false)
}

/// Binds a listener for the page's lifetime. Listeners are not passive, so
/// callbacks may `prevent_default`.
pub(crate) fn listen<F>(target: &web_sys::EventTarget, event_type: &'static str, callback: F)
where
    F: FnMut(&Event) + 'static,
{
    EventListener::new_with_options(
        target,
        Cow::Borrowed(event_type),
        EventListenerOptions::enable_prevent_default(),
        callback,
    )
    .forget();
}
