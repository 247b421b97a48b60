//! Model upload zone and the live price estimate next to it.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};
use wasm_bindgen::JsCast;
use web_sys::{Document, DragEvent, Element, File, HtmlInputElement, HtmlSelectElement};

use super::{alert, first, listen, set_class, set_hidden, set_text};
use crate::config::SiteConfig;
use crate::config::selectors::*;
use crate::error::SiteResult;
use crate::quote::{
    QuoteInputs, estimate, format_mass, format_money, parse_factor, parse_quantity,
};
use crate::upload::UploadedFile;

/// Owns the last accepted upload; every control change re-reads the rest.
pub struct QuoteWidget {
    document: Document,
    config: Rc<SiteConfig>,
    file: RefCell<Option<UploadedFile>>,
}

pub fn mount(document: &Document, config: &Rc<SiteConfig>) -> SiteResult<()> {
    if QuoteWidget::attach(document, config).is_none() {
        debug!("no quote upload zone on page");
    }
    Ok(())
}

impl QuoteWidget {
    /// Wires the upload zone and option controls. `None` without a zone.
    pub fn attach(document: &Document, config: &Rc<SiteConfig>) -> Option<Rc<Self>> {
        let zone = first(document, UPLOAD_ZONE)?;
        let widget = Rc::new(QuoteWidget {
            document: document.clone(),
            config: Rc::clone(config),
            file: RefCell::new(None),
        });
        widget.bind_intake(&zone);
        widget.bind_controls();
        widget.recompute();
        Some(widget)
    }

    pub fn uploaded(&self) -> Option<UploadedFile> {
        self.file.borrow().clone()
    }

    fn bind_intake(self: &Rc<Self>, zone: &Element) {
        let input = first(&self.document, UPLOAD_INPUT)
            .and_then(|element| element.dyn_into::<HtmlInputElement>().ok());

        if let Some(input) = input {
            let picker = input.clone();
            listen(zone, "click", move |event| {
                let from_input = event
                    .target()
                    .is_some_and(|target| target.dyn_ref::<HtmlInputElement>() == Some(&picker));
                if !from_input {
                    picker.click();
                }
            });

            let (widget, source) = (Rc::clone(self), input.clone());
            listen(&input, "change", move |_| {
                if let Some(file) = source.files().and_then(|files| files.get(0)) {
                    widget.receive(&file);
                }
            });
        }

        for event_type in ["dragenter", "dragover"] {
            let target = zone.clone();
            listen(zone, event_type, move |event| {
                event.prevent_default();
                set_class(&target, UPLOAD_DRAGOVER, true);
            });
        }

        let target = zone.clone();
        listen(zone, "dragleave", move |_| set_class(&target, UPLOAD_DRAGOVER, false));

        let (widget, target) = (Rc::clone(self), zone.clone());
        listen(zone, "drop", move |event| {
            event.prevent_default();
            set_class(&target, UPLOAD_DRAGOVER, false);
            let dropped = event
                .dyn_ref::<DragEvent>()
                .and_then(DragEvent::data_transfer)
                .and_then(|transfer| transfer.files())
                .and_then(|files| files.get(0));
            if let Some(file) = dropped {
                widget.receive(&file);
            }
        });
    }

    fn bind_controls(self: &Rc<Self>) {
        let controls = [
            (MATERIAL_SELECT, "change"),
            (QUALITY_SELECT, "change"),
            (QUANTITY_INPUT, "input"),
            (QUANTITY_INPUT, "change"),
            (RUSH_INPUT, "change"),
        ];
        for (selector, event_type) in controls {
            if let Some(control) = first(&self.document, selector) {
                let widget = Rc::clone(self);
                listen(&control, event_type, move |_| widget.recompute());
            }
        }
    }

    /// Validates a picked or dropped file and, if accepted, makes it the
    /// file the estimate is based on.
    pub fn receive(&self, file: &File) {
        let size = file.size().max(0.0) as u64;
        match UploadedFile::accept(&file.name(), size, self.config.max_upload_bytes) {
            Ok(upload) => {
                info!("model accepted: {} ({})", upload.name, upload.display_size());
                set_text(first(&self.document, UPLOAD_FILE_NAME), &upload.name);
                set_text(first(&self.document, UPLOAD_FILE_SIZE), &upload.display_size());
                if let Some(info) = first(&self.document, UPLOAD_FILE_INFO) {
                    set_hidden(&info, false);
                }
                *self.file.borrow_mut() = Some(upload);
                self.recompute();
            }
            Err(rejection) => {
                debug!("model rejected: {rejection}");
                alert(&rejection.to_string());
            }
        }
    }

    fn inputs(&self) -> Option<QuoteInputs> {
        let material_unit_price = selected_factor(&self.document, MATERIAL_SELECT, DATA_PRICE)?;
        let quality_multiplier = selected_factor(&self.document, QUALITY_SELECT, DATA_MULTIPLIER)?;
        let quantity = first(&self.document, QUANTITY_INPUT)
            .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
            .map(|input| parse_quantity(&input.value()))
            .unwrap_or(1);
        let rush = first(&self.document, RUSH_INPUT)
            .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
            .is_some_and(|input| input.checked());
        Some(QuoteInputs {
            material_unit_price,
            quality_multiplier,
            quantity,
            rush,
        })
    }

    pub fn recompute(&self) {
        let Some(panel) = first(&self.document, ESTIMATE_PANEL) else {
            return;
        };
        let file_size = self.file.borrow().as_ref().map(|file| file.size);
        let (Some(file_size), Some(inputs)) = (file_size, self.inputs()) else {
            set_hidden(&panel, true);
            return;
        };

        let quote = estimate(file_size, &inputs);
        let doc = &self.document;
        set_text(first(doc, ESTIMATE_WEIGHT), &format_mass(quote.mass_grams));
        set_text(first(doc, ESTIMATE_BASE), &format_money(quote.base_cost));
        set_text(first(doc, ESTIMATE_QUALITY), &format_money(quote.quality_cost));
        set_text(first(doc, ESTIMATE_RUSH), &format_money(quote.rush_cost));
        set_text(first(doc, ESTIMATE_TOTAL), &format_money(quote.total));
        if let Some(row) = first(doc, ESTIMATE_RUSH_ROW) {
            set_hidden(&row, !inputs.rush);
        }
        set_hidden(&panel, false);
    }
}

/// Numeric data attribute of the selected option, if a non-empty option is
/// selected and the attribute parses.
fn selected_factor(document: &Document, selector: &str, attribute: &str) -> Option<f64> {
    let select = first(document, selector)?.dyn_into::<HtmlSelectElement>().ok()?;
    if select.value().is_empty() {
        return None;
    }
    let index = u32::try_from(select.selected_index()).ok()?;
    let option = select.item(index)?;
    parse_factor(&option.get_attribute(attribute)?)
}
