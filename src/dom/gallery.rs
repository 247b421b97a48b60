//! Project galleries and the featured-project switcher.
//!
//! Thumbnail clicks are handled by one listener per `.project-gallery`, so
//! thumbnails rebuilt by [`show_project`] work without rebinding.

use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlImageElement};

use super::{
    all, all_in, event_target_closest, first, first_in, is_activation_key, listen, set_attr,
    set_class, set_text,
};
use crate::catalog::{ImageRecord, ProjectRecord, project_by_id};
use crate::config::SiteConfig;
use crate::config::selectors::*;
use crate::error::{SiteError, SiteResult};
use crate::selection::single_active;

pub fn mount(document: &Document, _config: &Rc<SiteConfig>) -> SiteResult<()> {
    let galleries = all(document, GALLERY);
    if galleries.is_empty() {
        debug!("no galleries on page");
    }
    for gallery in galleries {
        bind_gallery(&gallery);
    }
    Ok(())
}

fn bind_gallery(gallery: &Element) {
    let on_click = gallery.clone();
    listen(gallery, "click", move |event| {
        if let Some(thumbnail) = owned_thumbnail(&on_click, event) {
            activate_thumbnail(&on_click, &thumbnail);
        }
    });

    let on_key = gallery.clone();
    listen(gallery, "keydown", move |event| {
        if !is_activation_key(event) {
            return;
        }
        if let Some(thumbnail) = owned_thumbnail(&on_key, event) {
            event.prevent_default();
            activate_thumbnail(&on_key, &thumbnail);
        }
    });
}

/// The thumbnail the event hit, if it belongs to this gallery.
fn owned_thumbnail(gallery: &Element, event: &web_sys::Event) -> Option<Element> {
    let thumbnail = event_target_closest(event, THUMBNAIL)?;
    let owner = thumbnail.closest(GALLERY).ok().flatten()?;
    (&owner == gallery).then_some(thumbnail)
}

/// Makes `thumbnail` the only active one in its gallery and shows its image.
pub fn activate_thumbnail(gallery: &Element, thumbnail: &Element) {
    let thumbnails = all_in(gallery, THUMBNAIL);
    let index = thumbnails
        .iter()
        .position(|candidate| candidate == thumbnail)
        .unwrap_or(usize::MAX);
    for (candidate, active) in thumbnails.iter().zip(single_active(thumbnails.len(), index)) {
        set_class(candidate, THUMBNAIL_ACTIVE, active);
    }

    let (Some(src), Some(alt)) = (
        thumbnail.get_attribute(DATA_IMAGE),
        thumbnail.get_attribute(DATA_ALT),
    ) else {
        return;
    };
    if let Some(main_image) = main_image(first_in(gallery, GALLERY_MAIN_IMAGE)) {
        main_image.set_src(&src);
        main_image.set_alt(&alt);
    }
}

fn main_image(element: Option<Element>) -> Option<HtmlImageElement> {
    element?.dyn_into::<HtmlImageElement>().ok()
}

/// Puts the catalog entry for `project_id` into the featured panel. Unknown
/// identifiers leave the page untouched and return `false`.
pub fn show_project(document: &Document, project_id: &str) -> bool {
    let Some(project) = project_by_id(project_id) else {
        debug!("unknown project {project_id:?}");
        return false;
    };

    set_text(first(document, FEATURED_TITLE), project.title);
    set_text(first(document, FEATURED_DESCRIPTION), project.description);
    replace_gallery(document, project);

    for card in all(document, CLICKABLE_CARD) {
        set_class(&card, CARD_SELECTED, false);
    }
    // Catalog ids are plain slugs, safe to splice into a selector.
    if let Some(selected) = first(document, &format!("[{DATA_PROJECT_ID}=\"{}\"]", project.id)) {
        set_class(&selected, CARD_SELECTED, true);
    }
    true
}

fn replace_gallery(document: &Document, project: &ProjectRecord) {
    let Some(cover) = project.cover() else {
        return;
    };
    let (Some(image), Some(strip)) = (
        main_image(first(document, GALLERY_MAIN_IMAGE)),
        first(document, GALLERY_THUMBNAILS),
    ) else {
        return;
    };

    image.set_src(cover.src);
    image.set_alt(cover.alt);

    strip.set_text_content(None);
    for (index, record) in project.gallery.iter().enumerate() {
        match build_thumbnail(document, record, index == 0) {
            Ok(thumbnail) => {
                let _ = strip.append_child(&thumbnail);
            }
            Err(err) => debug!("thumbnail for {} skipped: {err}", record.src),
        }
    }
}

fn build_thumbnail(document: &Document, record: &ImageRecord, active: bool) -> SiteResult<Element> {
    let button = document.create_element("button")?;
    set_attr(&button, "type", "button");
    button.set_class_name(THUMBNAIL_CLASS);
    set_class(&button, THUMBNAIL_ACTIVE, active);
    set_attr(&button, DATA_IMAGE, record.src);
    set_attr(&button, DATA_ALT, record.alt);

    let image = document
        .create_element("img")?
        .dyn_into::<HtmlImageElement>()
        .map_err(|_| SiteError::Js("img is not an image element".into()))?;
    image.set_src(record.src);
    image.set_alt(record.caption);
    button.append_child(&image)?;
    Ok(button)
}
