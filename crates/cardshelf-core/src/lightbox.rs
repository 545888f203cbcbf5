#![forbid(unsafe_code)]

//! Image lightbox state machine.
//!
//! One [`Lightbox`] exists per page. Its surface is built lazily on the first
//! open and then toggled between closed and open for the rest of the page's
//! life:
//!
//! ```text
//! Uninitialized --open--> Open --close--> Closed --open--> Open ...
//! ```
//!
//! DOM effects are delegated to a [`LightboxSurface`]; the state machine owns
//! the phase, the displayed image and the element to refocus on close.

use crate::node::ElementNode;

/// Class that marks the overlay as visible.
pub const OPEN_CLASS: &str = "is-open";
/// Attribute marking elements whose click dismisses the overlay.
pub const CLOSE_ATTR: &str = "data-close";

/// Image shown by the lightbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxItem {
    pub src: String,
    pub caption: String,
}

/// Lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightboxPhase {
    #[default]
    Uninitialized,
    Closed,
    Open,
}

/// DOM side of the lightbox.
pub trait LightboxSurface {
    /// Handle to a focusable element.
    type Focus;

    /// Build the overlay and attach it to the page. Called once.
    fn mount(&mut self);

    /// Show `item` in the image and caption slots.
    fn show(&mut self, item: &LightboxItem);

    /// Empty the image and caption slots, releasing the image.
    fn clear(&mut self);

    fn set_open(&mut self, open: bool);

    /// Element that currently has focus, if any.
    fn active_element(&self) -> Option<Self::Focus>;

    fn focus_close_button(&mut self);

    /// Move focus back to `target`. Returns `false` when the element can no
    /// longer take focus (for example after it was removed from the page).
    fn restore_focus(&mut self, target: &Self::Focus) -> bool;
}

/// The page's single lightbox.
pub struct Lightbox<S: LightboxSurface> {
    surface: S,
    phase: LightboxPhase,
    current: Option<LightboxItem>,
    return_focus: Option<S::Focus>,
}

impl<S: LightboxSurface> Lightbox<S> {
    /// Wrap `surface`; nothing is built until the first [`open`](Self::open).
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            phase: LightboxPhase::Uninitialized,
            current: None,
            return_focus: None,
        }
    }

    pub fn phase(&self) -> LightboxPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase == LightboxPhase::Open
    }

    pub fn current(&self) -> Option<&LightboxItem> {
        self.current.as_ref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Show `item`, building the overlay first if needed.
    ///
    /// Opening while already open swaps the image but keeps the focus target
    /// recorded by the first open.
    pub fn open(&mut self, item: LightboxItem) {
        if self.phase == LightboxPhase::Uninitialized {
            tracing::debug!("building image lightbox");
            self.surface.mount();
            self.phase = LightboxPhase::Closed;
        }

        if self.phase == LightboxPhase::Closed {
            self.return_focus = self.surface.active_element();
        }

        tracing::debug!(src = %item.src, "lightbox open");
        self.surface.show(&item);
        self.current = Some(item);
        self.surface.set_open(true);
        self.phase = LightboxPhase::Open;
        self.surface.focus_close_button();
    }

    /// Hide the overlay, clear the image and restore focus. No-op unless open.
    pub fn close(&mut self) {
        if self.phase != LightboxPhase::Open {
            return;
        }
        tracing::debug!("lightbox close");
        self.surface.set_open(false);
        self.surface.clear();
        self.current = None;
        self.phase = LightboxPhase::Closed;

        if let Some(target) = self.return_focus.take()
            && !self.surface.restore_focus(&target)
        {
            tracing::debug!("focus target no longer focusable");
        }
    }

    /// Page-wide key handler. Returns `true` when the key closed the overlay.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.is_open() {
            self.close();
            return true;
        }
        false
    }
}

/// Overlay structure: backdrop plus a panel with close button, image and caption.
pub fn overlay_structure() -> ElementNode {
    ElementNode::new("div")
        .class("image-lightbox")
        .child(
            ElementNode::new("div")
                .class("lightbox-backdrop")
                .attr(CLOSE_ATTR, "true"),
        )
        .child(
            ElementNode::new("div")
                .class("lightbox-panel")
                .child(
                    ElementNode::new("button")
                        .class("lightbox-close")
                        .attr("type", "button")
                        .attr("aria-label", "關閉圖片")
                        .attr(CLOSE_ATTR, "true")
                        .text("×"),
                )
                .child(
                    ElementNode::new("img")
                        .class("lightbox-image")
                        .attr("alt", ""),
                )
                .child(ElementNode::new("p").class("lightbox-title")),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessLightbox;

    fn item(src: &str, caption: &str) -> LightboxItem {
        LightboxItem {
            src: src.into(),
            caption: caption.into(),
        }
    }

    #[test]
    fn first_open_mounts_once() {
        let mut lightbox = Lightbox::new(HeadlessLightbox::default());
        assert_eq!(lightbox.phase(), LightboxPhase::Uninitialized);
        lightbox.open(item("a.png", "A"));
        lightbox.close();
        lightbox.open(item("b.png", "B"));
        assert_eq!(lightbox.surface().mount_count, 1);
        assert_eq!(lightbox.phase(), LightboxPhase::Open);
    }

    #[test]
    fn close_before_any_open_is_noop() {
        let mut lightbox = Lightbox::new(HeadlessLightbox::default());
        lightbox.close();
        assert_eq!(lightbox.phase(), LightboxPhase::Uninitialized);
        assert_eq!(lightbox.surface().mount_count, 0);
    }

    #[test]
    fn double_close_is_noop() {
        let mut lightbox = Lightbox::new(HeadlessLightbox::with_focus("card-1"));
        lightbox.open(item("a.png", "A"));
        lightbox.close();
        lightbox.surface_mut().focus("elsewhere");
        lightbox.close();
        assert_eq!(lightbox.surface().focused.as_deref(), Some("elsewhere"));
    }

    #[test]
    fn open_focuses_close_button() {
        let mut lightbox = Lightbox::new(HeadlessLightbox::with_focus("card-1"));
        lightbox.open(item("a.png", "A"));
        assert_eq!(
            lightbox.surface().focused.as_deref(),
            Some(HeadlessLightbox::CLOSE_BUTTON)
        );
        assert!(lightbox.surface().open);
    }

    #[test]
    fn escape_only_acts_when_open() {
        let mut lightbox = Lightbox::new(HeadlessLightbox::default());
        assert!(!lightbox.handle_key("Escape"));
        lightbox.open(item("a.png", "A"));
        assert!(!lightbox.handle_key("Enter"));
        assert!(lightbox.handle_key("Escape"));
        assert!(!lightbox.is_open());
        assert!(!lightbox.handle_key("Escape"));
    }

    #[test]
    fn removed_focus_target_is_skipped() {
        let mut lightbox = Lightbox::new(HeadlessLightbox::with_focus("card-1"));
        lightbox.open(item("a.png", "A"));
        lightbox.surface_mut().detach("card-1");
        lightbox.close();
        assert_eq!(
            lightbox.surface().focused.as_deref(),
            Some(HeadlessLightbox::CLOSE_BUTTON)
        );
    }

    #[test]
    fn overlay_has_dismiss_targets() {
        let overlay = overlay_structure();
        let backdrop = overlay.find_by_class("lightbox-backdrop").unwrap();
        let close = overlay.find_by_class("lightbox-close").unwrap();
        assert_eq!(backdrop.get_attr(CLOSE_ATTR), Some("true"));
        assert_eq!(close.get_attr(CLOSE_ATTR), Some("true"));
        assert!(overlay.find_by_class("lightbox-image").is_some());
        assert!(overlay.find_by_class("lightbox-title").is_some());
    }
}
