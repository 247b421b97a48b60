//! Project cards: expand-in-place on narrow viewports, featured-project
//! switching on wide ones. The mode is decided per interaction from the
//! current viewport width; resizing only refreshes the accessibility
//! attributes.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::{Document, Element};

use super::{
    all, first_in, gallery, has_class, is_activation_key, listen, set_attr, set_class,
    viewport_width, window,
};
use crate::config::SiteConfig;
use crate::config::selectors::*;
use crate::error::SiteResult;
use crate::selection::{InteractionMode, accordion_toggle};

/// Reports the viewport width in CSS px when asked.
pub type WidthSource = Rc<dyn Fn() -> f64>;

pub fn mount(document: &Document, config: &Rc<SiteConfig>) -> SiteResult<()> {
    mount_with_width(document, config, Rc::new(viewport_width))
}

/// Like [`mount`], reading the width from `width` at every interaction.
pub fn mount_with_width(
    document: &Document,
    config: &Rc<SiteConfig>,
    width: WidthSource,
) -> SiteResult<()> {
    let modes = Rc::new(ModeSource {
        width,
        config: Rc::clone(config),
    });
    mount_clickable(document, &modes);
    mount_expandable(document, &modes)
}

struct ModeSource {
    width: WidthSource,
    config: Rc<SiteConfig>,
}

impl ModeSource {
    fn current(&self) -> InteractionMode {
        InteractionMode::for_viewport((self.width)(), self.config.mobile_breakpoint_px)
    }
}

fn mount_clickable(document: &Document, modes: &Rc<ModeSource>) {
    for card in all(document, CLICKABLE_CARD) {
        make_focusable(&card);
        if let Some(title) = first_in(&card, CARD_TITLE).and_then(|t| t.text_content()) {
            set_attr(&card, "aria-label", &format!("View {} in featured section", title.trim()));
        }

        let (doc, source, target) = (document.clone(), Rc::clone(modes), card.clone());
        listen(&card, "click", move |_| {
            if source.current() == InteractionMode::SwitchFeatured {
                switch_to(&doc, &target);
            }
        });

        let (doc, source, target) = (document.clone(), Rc::clone(modes), card.clone());
        listen(&card, "keydown", move |event| {
            if !is_activation_key(event) {
                return;
            }
            event.prevent_default();
            if source.current() == InteractionMode::SwitchFeatured {
                switch_to(&doc, &target);
            }
        });
    }
}

fn switch_to(document: &Document, card: &Element) {
    if let Some(project_id) = card.get_attribute(DATA_PROJECT_ID) {
        gallery::show_project(document, &project_id);
    }
}

fn mount_expandable(document: &Document, modes: &Rc<ModeSource>) -> SiteResult<()> {
    let cards = Rc::new(all(document, SMALL_CARD));
    if cards.is_empty() {
        debug!("no compact project cards");
        return Ok(());
    }
    apply_mode(&cards, modes.current());

    for (index, card) in cards.iter().enumerate() {
        let (group, source) = (Rc::clone(&cards), Rc::clone(modes));
        listen(card, "click", move |_| {
            if source.current() == InteractionMode::ExpandInPlace {
                toggle_card(&group, index);
            }
        });

        let (group, source) = (Rc::clone(&cards), Rc::clone(modes));
        listen(card, "keydown", move |event| {
            if is_activation_key(event) && source.current() == InteractionMode::ExpandInPlace {
                event.prevent_default();
                toggle_card(&group, index);
            }
        });
    }

    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let (group, source) = (Rc::clone(&cards), Rc::clone(modes));
    let win = window()?;
    listen(&win, "resize", move |_| {
        let (group, source) = (Rc::clone(&group), Rc::clone(&source));
        let timeout = Timeout::new(source.config.resize_debounce_ms, move || {
            apply_mode(&group, source.current());
        });
        // Replacing the pending timeout drops and cancels the previous one.
        *pending.borrow_mut() = Some(timeout);
    });
    Ok(())
}

/// Expands card `index` (or collapses it if open) and collapses the rest.
pub fn toggle_card(cards: &[Element], index: usize) {
    let expanded: Vec<bool> = cards.iter().map(|card| has_class(card, CARD_EXPANDED)).collect();
    for (card, open) in cards.iter().zip(accordion_toggle(&expanded, index)) {
        set_class(card, CARD_EXPANDED, open);
        set_attr(card, "aria-expanded", if open { "true" } else { "false" });
    }
}

pub fn apply_mode(cards: &[Element], mode: InteractionMode) {
    for card in cards {
        match mode {
            InteractionMode::ExpandInPlace => {
                make_focusable(card);
                let open = has_class(card, CARD_EXPANDED);
                set_attr(card, "aria-expanded", if open { "true" } else { "false" });
            }
            InteractionMode::SwitchFeatured => {
                set_class(card, CARD_EXPANDED, false);
                let _ = card.remove_attribute("aria-expanded");
                if !has_class(card, CLICKABLE_CARD_CLASS) {
                    let _ = card.remove_attribute("tabindex");
                    let _ = card.remove_attribute("role");
                }
            }
        }
    }
}

fn make_focusable(card: &Element) {
    set_attr(card, "tabindex", "0");
    set_attr(card, "role", "button");
}
