#![forbid(unsafe_code)]

//! Grid rendering: cards or a status message in one container.

use std::num::NonZeroUsize;

use crate::card::{Card, build_card};
use crate::index::IndexedRecord;
use crate::kind::CollectionKind;

/// Class of the message element shown in place of cards.
pub const EMPTY_STATE_CLASS: &str = "empty-state";
/// Attribute holding a card's position within the rendered slice.
pub const CARD_INDEX_ATTR: &str = "data-card-index";

/// Container a collection renders into.
pub trait GridSurface {
    /// Remove every child, the empty-state element included.
    fn clear(&mut self);

    /// Append cards in order.
    fn append_cards(&mut self, cards: Vec<Card>);

    /// Create the empty-state element if missing, set its text and visibility.
    fn set_empty_state(&mut self, message: &str, visible: bool);
}

/// Render `records` (at most `limit` of them) as cards.
///
/// The empty-state message is visible exactly when `records` is empty; the
/// limit does not affect it. Returns the rendered cards in order.
pub fn render_grid<G: GridSurface>(
    grid: &mut G,
    kind: CollectionKind,
    records: &[&IndexedRecord],
    limit: Option<NonZeroUsize>,
    empty_message: &str,
) -> Vec<Card> {
    grid.clear();
    let shown = limit.map_or(records.len(), |n| n.get().min(records.len()));
    let cards: Vec<Card> = records[..shown]
        .iter()
        .enumerate()
        .map(|(position, record)| {
            let mut card = build_card(kind, record.record());
            card.root.set_attr(CARD_INDEX_ATTR, position.to_string());
            card
        })
        .collect();
    grid.append_cards(cards.clone());
    grid.set_empty_state(empty_message, records.is_empty());
    cards
}

/// Replace the grid's content with a visible status message.
pub fn show_status<G: GridSurface>(grid: &mut G, message: &str) {
    grid.clear();
    grid.set_empty_state(message, true);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessGrid;
    use crate::index::index_record;
    use crate::record::Record;
    use proptest::prelude::*;

    fn records(n: usize) -> Vec<IndexedRecord> {
        (0..n)
            .map(|i| index_record(Record::titled(format!("r{i}")), &[]))
            .collect()
    }

    #[test]
    fn limit_keeps_the_first_cards() {
        let owned = records(5);
        let refs: Vec<_> = owned.iter().collect();
        let mut grid = HeadlessGrid::default();
        render_grid(&mut grid, CollectionKind::Apps, &refs, NonZeroUsize::new(2), "none");
        assert_eq!(grid.card_titles(), vec!["r0", "r1"]);
        assert!(!grid.empty_state_visible());
    }

    #[test]
    fn cards_are_stamped_with_positions() {
        let owned = records(3);
        let refs: Vec<_> = owned.iter().collect();
        let mut grid = HeadlessGrid::default();
        let cards = render_grid(&mut grid, CollectionKind::Images, &refs, None, "none");
        let positions: Vec<_> = cards
            .iter()
            .map(|c| c.root.get_attr(CARD_INDEX_ATTR).unwrap_or_default().to_owned())
            .collect();
        assert_eq!(positions, vec!["0", "1", "2"]);
    }

    #[test]
    fn empty_set_shows_message() {
        let mut grid = HeadlessGrid::default();
        render_grid(&mut grid, CollectionKind::Samples, &[], None, "nothing here");
        assert!(grid.cards.is_empty());
        assert!(grid.empty_state_visible());
        assert_eq!(grid.empty_state_message(), Some("nothing here"));
    }

    #[test]
    fn rerender_replaces_previous_cards() {
        let owned = records(4);
        let refs: Vec<_> = owned.iter().collect();
        let mut grid = HeadlessGrid::default();
        render_grid(&mut grid, CollectionKind::Apps, &refs, None, "none");
        render_grid(&mut grid, CollectionKind::Apps, &refs[..1], None, "none");
        assert_eq!(grid.card_titles(), vec!["r0"]);
    }

    #[test]
    fn status_clears_cards() {
        let owned = records(2);
        let refs: Vec<_> = owned.iter().collect();
        let mut grid = HeadlessGrid::default();
        render_grid(&mut grid, CollectionKind::Apps, &refs, None, "none");
        show_status(&mut grid, "loading");
        assert!(grid.cards.is_empty());
        assert_eq!(grid.empty_state_message(), Some("loading"));
        assert!(grid.empty_state_visible());
    }

    proptest! {
        #[test]
        fn rendered_count_respects_limit(k in 0usize..40, l in 1usize..50) {
            let owned = records(k);
            let refs: Vec<_> = owned.iter().collect();
            let mut grid = HeadlessGrid::default();
            render_grid(&mut grid, CollectionKind::Apps, &refs, NonZeroUsize::new(l), "none");
            prop_assert_eq!(grid.cards.len(), k.min(l));
            prop_assert_eq!(grid.empty_state_visible(), k == 0);
        }
    }
}
