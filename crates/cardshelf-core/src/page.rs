#![forbid(unsafe_code)]

//! Startup discovery of the grids present on a page.

use crate::config::{CollectionConfig, ContainerAttrs};
use crate::controller::{DatasetController, SearchField};
use crate::grid::GridSurface;
use crate::kind::{CollectionKind, CollectionSpec};

/// A grid container found on the page.
pub struct FoundContainer<G> {
    pub grid: G,
    pub attrs: ContainerAttrs,
}

/// Read access to the page for discovery.
pub trait PageProbe {
    type Grid: GridSurface;
    type Input: SearchField;

    fn find_container(&mut self, spec: &CollectionSpec) -> Option<FoundContainer<Self::Grid>>;

    fn find_search_input(&mut self, spec: &CollectionSpec) -> Option<Self::Input>;
}

/// One controller per collection whose container exists, in page order.
///
/// Missing containers disable that collection silently; a missing search
/// input only disables live filtering.
pub fn discover_collections<P: PageProbe>(
    page: &mut P,
) -> Vec<DatasetController<P::Grid, P::Input>> {
    CollectionKind::ALL
        .into_iter()
        .filter_map(|kind| {
            let spec = kind.spec();
            let FoundContainer { grid, attrs } = page.find_container(spec)?;
            let input = page.find_search_input(spec);
            tracing::debug!(collection = %kind, has_search = input.is_some(), "found grid");
            let config = CollectionConfig::from_page(kind, &attrs);
            Some(DatasetController::new(config, grid, input))
        })
        .collect()
}
