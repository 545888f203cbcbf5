#![forbid(unsafe_code)]

//! Card builders, one per collection kind.
//!
//! Every card root carries `data-title` and `data-tags` so pages and tests can
//! inspect what was rendered without going through the search index.

use crate::kind::CollectionKind;
use crate::lightbox::LightboxItem;
use crate::node::ElementNode;
use crate::record::Record;

const APP_LINK_LABEL: &str = "前往 App";
const GITHUB_LINK_LABEL: &str = "前往 GitHub";
const SOURCE_LINK_LABEL: &str = "檢視程式碼";

/// A rendered visual unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub root: ElementNode,
    /// Image to show in the lightbox when the card is activated.
    pub activation: Option<LightboxItem>,
}

impl Card {
    pub fn title(&self) -> Option<&str> {
        self.root.get_attr("data-title")
    }

    pub fn tags(&self) -> Option<&str> {
        self.root.get_attr("data-tags")
    }
}

/// Build the card for `record` with the builder selected by `kind`.
pub fn build_card(kind: CollectionKind, record: &Record) -> Card {
    match kind {
        CollectionKind::Apps => app_card(record),
        CollectionKind::Samples => sample_card(record),
        CollectionKind::Images => image_card(record),
    }
}

/// Keys that activate a focused image card.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

fn card_root(class: &str, record: &Record) -> ElementNode {
    ElementNode::new("article")
        .class(class)
        .attr("data-title", record.title.as_str())
        .attr("data-tags", record.joined_tags())
}

fn external_link(href: &str, label: &str) -> ElementNode {
    ElementNode::new("a")
        .class("card-link")
        .attr("href", href)
        .attr("target", "_blank")
        .attr("rel", "noopener")
        .text(label)
}

fn lazy_image(src: &str, alt: String) -> ElementNode {
    ElementNode::new("img")
        .attr("src", src)
        .attr("alt", alt)
        .attr("loading", "lazy")
        .attr("decoding", "async")
}

fn heading(record: &Record) -> ElementNode {
    ElementNode::new("h3").text(record.title.as_str())
}

fn app_card(app: &Record) -> Card {
    let mut actions = ElementNode::new("div").class("card-actions").child(external_link(
        app.url.as_deref().unwrap_or_default(),
        APP_LINK_LABEL,
    ));
    if let Some(github) = app.github_link() {
        actions = actions.child(external_link(github, GITHUB_LINK_LABEL));
    }

    Card {
        root: card_root("card", app).child(heading(app)).child(actions),
        activation: None,
    }
}

fn sample_card(sample: &Record) -> Card {
    let mut root = card_root("card sample-card", sample);
    if let Some(preview) = sample.preview_image_src() {
        let thumb = lazy_image(preview, format!("{} 預覽圖", sample.title)).class("sample-thumb");
        root = root.child(ElementNode::new("div").class("sample-visual").child(thumb));
    }

    let actions = ElementNode::new("div").class("card-actions").child(external_link(
        sample.url.as_deref().unwrap_or_default(),
        SOURCE_LINK_LABEL,
    ));

    Card {
        root: root.child(heading(sample)).child(actions),
        activation: None,
    }
}

fn image_card(image: &Record) -> Card {
    let mut root = card_root("card image-card", image)
        .attr("tabindex", "0")
        .attr("role", "button")
        .attr("aria-label", format!("{} - 點擊放大檢視", image.title));
    if let Some(src) = image.image_src() {
        root = root.child(
            ElementNode::new("div")
                .class("image-visual")
                .child(lazy_image(src, image.title.clone())),
        );
    }

    Card {
        root: root.child(heading(image)),
        activation: Some(LightboxItem {
            src: image.image_src().unwrap_or_default().to_owned(),
            caption: image.title.clone(),
        }),
    }
}
