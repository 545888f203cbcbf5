#![forbid(unsafe_code)]

//! DOM surface of the image lightbox.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use cardshelf_core::{
    CLOSE_ATTR, Lightbox, LightboxItem, LightboxSurface, OPEN_CLASS, overlay_structure,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, FocusOptions, HtmlElement, KeyboardEvent};

use crate::dom::materialize;

/// The page's lightbox, shared between image grids and its own listeners.
pub type SharedLightbox = Rc<RefCell<Lightbox<DomLightbox>>>;

struct OverlayNodes {
    root: Element,
    image: Option<Element>,
    caption: Option<Element>,
    close_button: Option<HtmlElement>,
}

pub struct DomLightbox {
    document: Document,
    nodes: Option<OverlayNodes>,
    /// Back-reference handed to the overlay's listeners.
    handle: Weak<RefCell<Lightbox<DomLightbox>>>,
}

/// Create the page's lightbox. The overlay is built on first open.
pub fn shared(document: Document) -> SharedLightbox {
    Rc::new_cyclic(|handle| {
        RefCell::new(Lightbox::new(DomLightbox {
            document,
            nodes: None,
            handle: handle.clone(),
        }))
    })
}

impl DomLightbox {
    /// Overlay root, once built.
    pub fn root(&self) -> Option<&Element> {
        self.nodes.as_ref().map(|n| &n.root)
    }

    fn install_listeners(&self, root: &Element) {
        let handle = self.handle.clone();
        let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let dismiss = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .is_some_and(|el| el.get_attribute(CLOSE_ATTR).as_deref() == Some("true"));
            if dismiss && let Some(lightbox) = handle.upgrade() {
                lightbox.borrow_mut().close();
            }
        });
        let _ = root.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();

        let handle = self.handle.clone();
        let on_key = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            if let Some(lightbox) = handle.upgrade() {
                lightbox.borrow_mut().handle_key(&event.key());
            }
        });
        let _ = self
            .document
            .add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref());
        on_key.forget();
    }
}

impl LightboxSurface for DomLightbox {
    type Focus = Element;

    fn mount(&mut self) {
        let Some(body) = self.document.body() else {
            tracing::warn!("no document body for the lightbox");
            return;
        };
        let root = match materialize(&self.document, &overlay_structure()) {
            Ok(root) => root,
            Err(err) => {
                tracing::warn!(error = ?err, "failed to build lightbox");
                return;
            }
        };
        let _ = body.append_child(&root);

        let find = |selector: &str| root.query_selector(selector).ok().flatten();
        let nodes = OverlayNodes {
            image: find(".lightbox-image"),
            caption: find(".lightbox-title"),
            close_button: find(".lightbox-close").and_then(|el| el.dyn_into::<HtmlElement>().ok()),
            root: root.clone(),
        };
        self.install_listeners(&root);
        self.nodes = Some(nodes);
    }

    fn show(&mut self, item: &LightboxItem) {
        let Some(nodes) = &self.nodes else { return };
        if let Some(image) = &nodes.image {
            let _ = image.set_attribute("src", &item.src);
            let _ = image.set_attribute("alt", &item.caption);
        }
        if let Some(caption) = &nodes.caption {
            caption.set_text_content(Some(&item.caption));
        }
    }

    fn clear(&mut self) {
        let Some(nodes) = &self.nodes else { return };
        if let Some(image) = &nodes.image {
            let _ = image.set_attribute("src", "");
            let _ = image.set_attribute("alt", "");
        }
        if let Some(caption) = &nodes.caption {
            caption.set_text_content(Some(""));
        }
    }

    fn set_open(&mut self, open: bool) {
        if let Some(nodes) = &self.nodes {
            let _ = nodes.root.class_list().toggle_with_force(OPEN_CLASS, open);
        }
    }

    fn active_element(&self) -> Option<Element> {
        self.document.active_element()
    }

    fn focus_close_button(&mut self) {
        if let Some(button) = self.nodes.as_ref().and_then(|n| n.close_button.as_ref()) {
            let _ = button.focus();
        }
    }

    fn restore_focus(&mut self, target: &Element) -> bool {
        if !target.is_connected() {
            return false;
        }
        let Some(html) = target.dyn_ref::<HtmlElement>() else {
            return false;
        };
        let options = FocusOptions::new();
        options.set_prevent_scroll(true);
        html.focus_with_options(&options).is_ok()
    }
}
