#![forbid(unsafe_code)]

//! Module entry point: discovery, listeners and per-collection loads.

use std::cell::RefCell;
use std::rc::Rc;

use cardshelf_core::{
    CARD_INDEX_ATTR, CollectionKind, DatasetController, Fetcher, discover_collections,
    is_activation_key,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, KeyboardEvent};

use crate::console::{install_logging, install_panic_hook};
use crate::dom::{DomGrid, DomInput, DomPage};
use crate::fetch::DomFetcher;
use crate::lightbox::{SharedLightbox, shared};

type SharedController = Rc<RefCell<DatasetController<DomGrid, DomInput>>>;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    install_panic_hook();
    install_logging(tracing::Level::INFO);
    boot();
}

/// Enhance the current page, fetching collections with `window.fetch`.
pub fn boot() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let _ = boot_page(document, DomFetcher::new(window));
}

/// Enhance `document`, loading every discovered collection through `fetcher`.
///
/// Returns the page's lightbox, or `None` when no grid container exists.
pub fn boot_page<F: Fetcher + 'static>(document: Document, fetcher: F) -> Option<SharedLightbox> {
    let collections = discover_collections(&mut DomPage::new(document.clone()));
    if collections.is_empty() {
        return None;
    }

    let lightbox = shared(document);
    let fetcher = Rc::new(fetcher);
    for controller in collections {
        let kind = controller.config().kind;
        let controller = Rc::new(RefCell::new(controller));
        install_search(&controller);
        if kind == CollectionKind::Images {
            install_activation(&controller, &lightbox);
        }
        spawn_load(controller, Rc::clone(&fetcher));
    }
    Some(lightbox)
}

fn install_search(controller: &SharedController) {
    let Some(input) = controller.borrow().input().map(|i| i.element().clone()) else {
        return;
    };
    let target = Rc::clone(controller);
    let field = input.clone();
    let on_input = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        target.borrow_mut().on_search_input(&field.value());
    });
    let _ = input.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref());
    on_input.forget();
}

/// Position of the card an event originated in, from its `data-card-index`.
fn card_position(event: &Event) -> Option<usize> {
    event
        .target()?
        .dyn_into::<Element>()
        .ok()?
        .closest(&format!("[{CARD_INDEX_ATTR}]"))
        .ok()??
        .get_attribute(CARD_INDEX_ATTR)?
        .parse()
        .ok()
}

/// Delegated click/keydown handling for every card of an image grid.
fn install_activation(controller: &SharedController, lightbox: &SharedLightbox) {
    let container = controller.borrow().grid().container().clone();

    let (target, overlay) = (Rc::clone(controller), Rc::clone(lightbox));
    let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let item = card_position(&event).and_then(|pos| target.borrow().activation(pos).cloned());
        if let Some(item) = item {
            overlay.borrow_mut().open(item);
        }
    });
    let _ = container.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();

    let (target, overlay) = (Rc::clone(controller), Rc::clone(lightbox));
    let on_key = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        if !is_activation_key(&event.key()) {
            return;
        }
        let item = card_position(&event).and_then(|pos| target.borrow().activation(pos).cloned());
        if let Some(item) = item {
            event.prevent_default();
            overlay.borrow_mut().open(item);
        }
    });
    let _ = container.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref());
    on_key.forget();
}

fn spawn_load<F: Fetcher + 'static>(controller: SharedController, fetcher: Rc<F>) {
    let url = controller.borrow_mut().begin_load();
    wasm_bindgen_futures::spawn_local(async move {
        let result = fetcher.fetch(&url).await;
        controller.borrow_mut().finish_load(result);
    });
}
