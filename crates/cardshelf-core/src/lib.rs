#![forbid(unsafe_code)]

//! Core of cardshelf, a client-side browser for a static site's JSON
//! collections (apps, code samples, images).
//!
//! The pipeline per collection is fetch → decode → index → filter → render,
//! driven by a [`DatasetController`]. Image cards open the page's single
//! [`Lightbox`]. Everything that touches the page goes through small host
//! traits ([`GridSurface`], [`SearchField`], [`Fetcher`], [`PageProbe`],
//! [`LightboxSurface`]); `cardshelf-web` implements them over the DOM and
//! [`headless`] implements them in memory.

pub mod card;
pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod grid;
pub mod headless;
pub mod index;
pub mod kind;
pub mod lightbox;
pub mod node;
pub mod page;
pub mod record;
pub mod text;

pub use card::{Card, build_card, is_activation_key};
pub use config::{CollectionConfig, ContainerAttrs, parse_limit};
pub use controller::{DatasetController, Fetcher, LoadState, SearchField};
pub use error::LoadError;
pub use filter::filter_records;
pub use grid::{CARD_INDEX_ATTR, EMPTY_STATE_CLASS, GridSurface, render_grid, show_status};
pub use index::{IndexedRecord, index_collection, index_record};
pub use kind::{CollectionKind, CollectionSpec};
pub use lightbox::{
    CLOSE_ATTR, Lightbox, LightboxItem, LightboxPhase, LightboxSurface, OPEN_CLASS,
    overlay_structure,
};
pub use node::ElementNode;
pub use page::{FoundContainer, PageProbe, discover_collections};
pub use record::{Record, decode_collection};
pub use text::normalize;
