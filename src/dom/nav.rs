//! Header menu and in-page anchor scrolling.

use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use super::{all, as_html, first, first_in, listen, set_attr, set_class, window};
use crate::config::SiteConfig;
use crate::config::selectors::*;
use crate::error::SiteResult;

const SCROLL_MARGIN_PX: f64 = 20.0;

pub fn mount_mobile_nav(document: &Document, _config: &Rc<SiteConfig>) -> SiteResult<()> {
    let (Some(toggle), Some(menu)) = (first(document, MOBILE_TOGGLE), first(document, MOBILE_NAV))
    else {
        debug!("no mobile nav on page");
        return Ok(());
    };

    let (button, panel) = (toggle.clone(), menu.clone());
    listen(&toggle, "click", move |_| {
        let open = button.get_attribute("aria-expanded").as_deref() != Some("true");
        set_menu_open(&button, &panel, open);
    });

    for link in all(document, MOBILE_LINK) {
        let (button, panel) = (toggle.clone(), menu.clone());
        listen(&link, "click", move |_| set_menu_open(&button, &panel, false));
    }
    Ok(())
}

pub fn set_menu_open(toggle: &Element, menu: &Element, open: bool) {
    set_attr(toggle, "aria-expanded", if open { "true" } else { "false" });
    set_class(menu, MOBILE_NAV_OPEN, open);
    if let Some(hamburger) = first_in(toggle, HAMBURGER) {
        if let Some(html) = as_html(&hamburger) {
            let angle = if open { "rotate(45deg)" } else { "rotate(0deg)" };
            let _ = html.style().set_property("transform", angle);
        }
    }
}

pub fn mount_smooth_scroll(document: &Document, _config: &Rc<SiteConfig>) -> SiteResult<()> {
    for link in all(document, ANCHOR_LINKS) {
        let doc = document.clone();
        let anchor = link.clone();
        listen(&link, "click", move |event| {
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            if href == "#" {
                return;
            }
            let Some(top) = scroll_target_top(&doc, &href) else {
                return;
            };
            event.prevent_default();
            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            if let Ok(window) = window() {
                window.scroll_to_with_scroll_to_options(&options);
            }
        });
    }
    Ok(())
}

/// Document offset of the anchor target, less the sticky header and a
/// margin. `None` when the target does not exist.
fn scroll_target_top(document: &Document, href: &str) -> Option<f64> {
    let target = first(document, href)?.dyn_into::<HtmlElement>().ok()?;
    let header_height = first(document, HEADER)
        .as_ref()
        .and_then(as_html)
        .map(|header| header.offset_height())
        .unwrap_or(0);
    Some(f64::from(target.offset_top() - header_height) - SCROLL_MARGIN_PX)
}
