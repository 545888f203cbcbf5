#![forbid(unsafe_code)]

//! In-memory host implementations.
//!
//! These stand in for the browser so the full pipeline (discovery, load,
//! search, render, lightbox) can run in native tests and tools.

use std::collections::{HashMap, HashSet};

use crate::card::Card;
use crate::config::ContainerAttrs;
use crate::controller::{Fetcher, SearchField};
use crate::error::LoadError;
use crate::grid::GridSurface;
use crate::kind::{CollectionKind, CollectionSpec};
use crate::lightbox::{LightboxItem, LightboxSurface};
use crate::page::{FoundContainer, PageProbe};

/// The empty-state element of a [`HeadlessGrid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub visible: bool,
}

/// Grid container that records what was rendered into it.
#[derive(Debug, Clone, Default)]
pub struct HeadlessGrid {
    pub cards: Vec<Card>,
    pub empty_state: Option<EmptyState>,
}

impl HeadlessGrid {
    pub fn card_titles(&self) -> Vec<&str> {
        self.cards.iter().filter_map(Card::title).collect()
    }

    pub fn empty_state_visible(&self) -> bool {
        self.empty_state.as_ref().is_some_and(|e| e.visible)
    }

    pub fn empty_state_message(&self) -> Option<&str> {
        self.empty_state.as_ref().map(|e| e.message.as_str())
    }
}

impl GridSurface for HeadlessGrid {
    fn clear(&mut self) {
        self.cards.clear();
        self.empty_state = None;
    }

    fn append_cards(&mut self, cards: Vec<Card>) {
        self.cards.extend(cards);
    }

    fn set_empty_state(&mut self, message: &str, visible: bool) {
        self.empty_state = Some(EmptyState {
            message: message.to_owned(),
            visible,
        });
    }
}

#[derive(Debug, Clone, Default)]
pub struct HeadlessInput {
    pub disabled: bool,
}

impl SearchField for HeadlessInput {
    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }
}

/// Lightbox surface with a simulated focus model keyed by element id.
#[derive(Debug, Clone, Default)]
pub struct HeadlessLightbox {
    pub mount_count: usize,
    pub open: bool,
    pub src: String,
    pub alt: String,
    pub caption: String,
    pub focused: Option<String>,
    detached: HashSet<String>,
}

impl HeadlessLightbox {
    /// Id of the overlay's close button in the focus model.
    pub const CLOSE_BUTTON: &'static str = "lightbox-close";

    pub fn with_focus(id: &str) -> Self {
        Self {
            focused: Some(id.to_owned()),
            ..Self::default()
        }
    }

    /// Simulate the user focusing another element.
    pub fn focus(&mut self, id: &str) {
        self.focused = Some(id.to_owned());
    }

    /// Simulate removing an element from the page.
    pub fn detach(&mut self, id: &str) {
        self.detached.insert(id.to_owned());
    }
}

impl LightboxSurface for HeadlessLightbox {
    type Focus = String;

    fn mount(&mut self) {
        self.mount_count += 1;
    }

    fn show(&mut self, item: &LightboxItem) {
        self.src = item.src.clone();
        self.alt = item.caption.clone();
        self.caption = item.caption.clone();
    }

    fn clear(&mut self) {
        self.src.clear();
        self.alt.clear();
        self.caption.clear();
    }

    fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    fn active_element(&self) -> Option<String> {
        self.focused.clone()
    }

    fn focus_close_button(&mut self) {
        self.focused = Some(Self::CLOSE_BUTTON.to_owned());
    }

    fn restore_focus(&mut self, target: &String) -> bool {
        if self.detached.contains(target) {
            return false;
        }
        self.focused = Some(target.clone());
        true
    }
}

#[derive(Debug, Clone)]
enum Canned {
    Body(String),
    Status(u16),
    Unreachable,
}

/// Fetcher answering from a fixed table. Unknown URLs answer 404.
#[derive(Debug, Clone, Default)]
pub struct StaticFetcher {
    responses: HashMap<String, Canned>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn ok(mut self, url: &str, body: &str) -> Self {
        self.responses
            .insert(url.to_owned(), Canned::Body(body.to_owned()));
        self
    }

    #[must_use]
    pub fn status(mut self, url: &str, status: u16) -> Self {
        self.responses.insert(url.to_owned(), Canned::Status(status));
        self
    }

    #[must_use]
    pub fn unreachable(mut self, url: &str) -> Self {
        self.responses.insert(url.to_owned(), Canned::Unreachable);
        self
    }
}

impl Fetcher for StaticFetcher {
    async fn fetch(&self, url: &str) -> Result<String, LoadError> {
        match self.responses.get(url) {
            Some(Canned::Body(body)) => Ok(body.clone()),
            Some(Canned::Status(status)) => Err(LoadError::Status {
                url: url.to_owned(),
                status: *status,
            }),
            Some(Canned::Unreachable) => Err(LoadError::Transport {
                url: url.to_owned(),
                reason: "network unreachable".to_owned(),
            }),
            None => Err(LoadError::Status {
                url: url.to_owned(),
                status: 404,
            }),
        }
    }
}

/// Page with a configurable set of grid containers.
#[derive(Debug, Clone, Default)]
pub struct HeadlessPage {
    containers: HashMap<&'static str, ContainerAttrs>,
    inputs: HashSet<&'static str>,
}

impl HeadlessPage {
    /// Add the container for `kind`, optionally with its search input.
    #[must_use]
    pub fn with_container(mut self, kind: CollectionKind, attrs: ContainerAttrs, search: bool) -> Self {
        let spec = kind.spec();
        self.containers.insert(spec.container_selector, attrs);
        if search {
            self.inputs.insert(spec.search_selector);
        }
        self
    }
}

impl PageProbe for HeadlessPage {
    type Grid = HeadlessGrid;
    type Input = HeadlessInput;

    fn find_container(&mut self, spec: &CollectionSpec) -> Option<FoundContainer<HeadlessGrid>> {
        self.containers
            .get(spec.container_selector)
            .map(|attrs| FoundContainer {
                grid: HeadlessGrid::default(),
                attrs: attrs.clone(),
            })
    }

    fn find_search_input(&mut self, spec: &CollectionSpec) -> Option<HeadlessInput> {
        self.inputs
            .contains(spec.search_selector)
            .then(HeadlessInput::default)
    }
}
