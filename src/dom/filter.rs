use std::rc::Rc;

use log::debug;
use web_sys::{Document, Element};

use super::{all, listen, set_class, set_hidden};
use crate::config::SiteConfig;
use crate::config::selectors::*;
use crate::error::SiteResult;
use crate::selection::single_active;

pub fn mount(document: &Document, _config: &Rc<SiteConfig>) -> SiteResult<()> {
    let buttons = Rc::new(all(document, FILTER_BUTTON));
    if buttons.is_empty() {
        debug!("no portfolio filter on page");
        return Ok(());
    }
    let items = Rc::new(all(document, FILTER_ITEM));

    for (index, button) in buttons.iter().enumerate() {
        let (group, items) = (Rc::clone(&buttons), Rc::clone(&items));
        listen(button, "click", move |_| apply_filter(&group, &items, index));
    }
    Ok(())
}

/// Activates filter button `index` and shows only items in its category.
pub fn apply_filter(buttons: &[Element], items: &[Element], index: usize) {
    let Some(filter) = buttons.get(index).and_then(|b| b.get_attribute(DATA_FILTER)) else {
        return;
    };
    for (button, active) in buttons.iter().zip(single_active(buttons.len(), index)) {
        set_class(button, FILTER_ACTIVE, active);
    }
    for item in items {
        let visible = filter == FILTER_ALL
            || item.get_attribute(DATA_CATEGORY).as_deref() == Some(filter.as_str());
        set_hidden(item, !visible);
    }
}
