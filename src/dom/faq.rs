use std::rc::Rc;

use log::debug;
use web_sys::{Document, Element};

use super::{all, first_in, has_class, is_activation_key, listen, set_attr, set_class};
use crate::config::SiteConfig;
use crate::config::selectors::*;
use crate::error::SiteResult;
use crate::selection::accordion_toggle;

pub fn mount(document: &Document, _config: &Rc<SiteConfig>) -> SiteResult<()> {
    let items = Rc::new(all(document, FAQ_ITEM));
    if items.is_empty() {
        debug!("no faq on page");
        return Ok(());
    }

    for (index, item) in items.iter().enumerate() {
        let Some(question) = first_in(item, FAQ_QUESTION) else {
            continue;
        };
        let open = has_class(item, FAQ_EXPANDED);
        set_attr(&question, "aria-expanded", if open { "true" } else { "false" });

        let group = Rc::clone(&items);
        listen(&question, "click", move |_| toggle_item(&group, index));

        let group = Rc::clone(&items);
        listen(&question, "keydown", move |event| {
            if is_activation_key(event) {
                event.prevent_default();
                toggle_item(&group, index);
            }
        });
    }
    Ok(())
}

/// Collapses every other item, then flips item `index`.
pub fn toggle_item(items: &[Element], index: usize) {
    let expanded: Vec<bool> = items.iter().map(|item| has_class(item, FAQ_EXPANDED)).collect();
    for (item, open) in items.iter().zip(accordion_toggle(&expanded, index)) {
        set_class(item, FAQ_EXPANDED, open);
        if let Some(question) = first_in(item, FAQ_QUESTION) {
            set_attr(&question, "aria-expanded", if open { "true" } else { "false" });
        }
    }
}
