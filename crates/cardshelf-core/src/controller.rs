#![forbid(unsafe_code)]

//! Per-collection lifecycle: load, index, filter, render.

use crate::config::CollectionConfig;
use crate::error::LoadError;
use crate::filter::filter_records;
use crate::grid::{GridSurface, render_grid, show_status};
use crate::index::{IndexedRecord, index_collection};
use crate::lightbox::LightboxItem;
use crate::record::decode_collection;

/// Search box bound to a collection.
pub trait SearchField {
    fn set_disabled(&mut self, disabled: bool);
}

/// Source of collection bodies.
///
/// Implementations report non-success statuses as [`LoadError::Status`] and
/// return the raw body otherwise; decoding happens in the controller.
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<String, LoadError>;
}

/// Where a collection is in its single load attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    /// Terminal: the input stays disabled and the error message stays up.
    Failed,
}

/// State holder for one grid.
pub struct DatasetController<G, I> {
    config: CollectionConfig,
    grid: G,
    input: Option<I>,
    records: Vec<IndexedRecord>,
    state: LoadState,
    /// Activation of each rendered card, by position.
    rendered: Vec<Option<LightboxItem>>,
}

impl<G: GridSurface, I: SearchField> DatasetController<G, I> {
    pub fn new(config: CollectionConfig, grid: G, input: Option<I>) -> Self {
        Self {
            config,
            grid,
            input,
            records: Vec::new(),
            state: LoadState::Idle,
            rendered: Vec::new(),
        }
    }

    pub fn config(&self) -> &CollectionConfig {
        &self.config
    }

    pub fn grid(&self) -> &G {
        &self.grid
    }

    pub fn input(&self) -> Option<&I> {
        self.input.as_ref()
    }

    pub fn records(&self) -> &[IndexedRecord] {
        &self.records
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Fetch, index and render the collection.
    pub async fn load<F: Fetcher>(&mut self, fetcher: &F) {
        let url = self.begin_load();
        let result = fetcher.fetch(&url).await;
        self.finish_load(result);
    }

    /// First half of [`load`](Self::load): disable the input and show the
    /// loading message. Returns the URL to fetch.
    ///
    /// Hosts that cannot hold the controller across the fetch call this, run
    /// the fetch themselves, and pass the outcome to
    /// [`finish_load`](Self::finish_load).
    pub fn begin_load(&mut self) -> String {
        tracing::debug!(collection = %self.config.kind, url = %self.config.url, "loading collection");
        if let Some(input) = self.input.as_mut() {
            input.set_disabled(true);
        }
        self.state = LoadState::Loading;
        self.rendered.clear();
        show_status(&mut self.grid, &self.config.loading_message);
        self.config.url.clone()
    }

    /// Second half of [`load`](Self::load): decode, index and render `body`,
    /// or show the error message.
    pub fn finish_load(&mut self, body: Result<String, LoadError>) {
        let decoded = body.and_then(|body| decode_collection(&self.config.url, &body));
        match decoded {
            Ok(raw) => {
                self.records = index_collection(self.config.kind, raw);
                self.state = LoadState::Ready;
                tracing::debug!(
                    collection = %self.config.kind,
                    records = self.records.len(),
                    "collection loaded"
                );
                self.render_matching("");
                if let Some(input) = self.input.as_mut() {
                    input.set_disabled(false);
                }
            }
            Err(error) => {
                tracing::error!(url = %error.url(), %error, "unable to load collection");
                self.state = LoadState::Failed;
                self.rendered.clear();
                show_status(&mut self.grid, &self.config.error_message);
            }
        }
    }

    /// Records matching `keyword`; everything when it is blank.
    pub fn filter(&self, keyword: &str) -> Vec<&IndexedRecord> {
        filter_records(&self.records, keyword)
    }

    /// React to a search-field change. Ignored (returns `false`) until the
    /// collection has loaded.
    pub fn on_search_input(&mut self, keyword: &str) -> bool {
        if self.state != LoadState::Ready {
            return false;
        }
        self.render_matching(keyword);
        true
    }

    /// Lightbox item of the card rendered at `position`, if it has one.
    pub fn activation(&self, position: usize) -> Option<&LightboxItem> {
        self.rendered.get(position).and_then(Option::as_ref)
    }

    fn render_matching(&mut self, keyword: &str) {
        let matching = filter_records(&self.records, keyword);
        tracing::debug!(
            collection = %self.config.kind,
            matches = matching.len(),
            "render grid"
        );
        let cards = render_grid(
            &mut self.grid,
            self.config.kind,
            &matching,
            self.config.limit,
            &self.config.empty_message,
        );
        self.rendered = cards.into_iter().map(|card| card.activation).collect();
    }
}
