#![forbid(unsafe_code)]

//! DOM implementations of the grid, search field and page probe.

use cardshelf_core::{
    Card, CollectionSpec, ContainerAttrs, EMPTY_STATE_CLASS, ElementNode, FoundContainer,
    GridSurface, PageProbe, SearchField,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

/// Create real elements for `node` and its subtree.
pub fn materialize(document: &Document, node: &ElementNode) -> Result<Element, JsValue> {
    let element = document.create_element(node.tag)?;
    if let Some(class) = &node.class {
        element.set_class_name(class);
    }
    for (name, value) in &node.attrs {
        element.set_attribute(name, value)?;
    }
    if let Some(text) = &node.text {
        element.set_text_content(Some(text));
    }
    for child in &node.children {
        element.append_child(&materialize(document, child)?)?;
    }
    Ok(element)
}

/// A grid container element.
pub struct DomGrid {
    document: Document,
    container: Element,
}

impl DomGrid {
    pub fn new(document: Document, container: Element) -> Self {
        Self {
            document,
            container,
        }
    }

    pub fn container(&self) -> &Element {
        &self.container
    }

    fn empty_state_element(&self) -> Result<Element, JsValue> {
        if let Some(existing) = self
            .container
            .query_selector(&format!(".{EMPTY_STATE_CLASS}"))?
        {
            return Ok(existing);
        }
        let created = self.document.create_element("div")?;
        created.set_class_name(EMPTY_STATE_CLASS);
        self.container.append_child(&created)?;
        Ok(created)
    }
}

impl GridSurface for DomGrid {
    fn clear(&mut self) {
        self.container.set_inner_html("");
    }

    fn append_cards(&mut self, cards: Vec<Card>) {
        let fragment = self.document.create_document_fragment();
        for card in &cards {
            match materialize(&self.document, &card.root) {
                Ok(element) => {
                    let _ = fragment.append_child(&element);
                }
                Err(err) => tracing::warn!(error = ?err, "failed to build card"),
            }
        }
        let _ = self.container.append_child(&fragment);
    }

    fn set_empty_state(&mut self, message: &str, visible: bool) {
        let element = match self.empty_state_element() {
            Ok(element) => element,
            Err(err) => {
                tracing::warn!(error = ?err, "failed to build empty state");
                return;
            }
        };
        element.set_text_content(Some(message));
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            let display = if visible { "block" } else { "none" };
            let _ = html.style().set_property("display", display);
        }
    }
}

/// A search `<input>`.
pub struct DomInput {
    element: HtmlInputElement,
}

impl DomInput {
    pub fn element(&self) -> &HtmlInputElement {
        &self.element
    }
}

impl SearchField for DomInput {
    fn set_disabled(&mut self, disabled: bool) {
        self.element.set_disabled(disabled);
    }
}

/// The live document.
pub struct DomPage {
    document: Document,
}

impl DomPage {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl PageProbe for DomPage {
    type Grid = DomGrid;
    type Input = DomInput;

    fn find_container(&mut self, spec: &CollectionSpec) -> Option<FoundContainer<DomGrid>> {
        let container = self
            .document
            .query_selector(spec.container_selector)
            .ok()
            .flatten()?;
        let attrs = ContainerAttrs {
            empty_message: container.get_attribute("data-empty-message"),
            limit: container.get_attribute("data-limit"),
        };
        Some(FoundContainer {
            grid: DomGrid::new(self.document.clone(), container),
            attrs,
        })
    }

    fn find_search_input(&mut self, spec: &CollectionSpec) -> Option<DomInput> {
        let element = self
            .document
            .query_selector(spec.search_selector)
            .ok()
            .flatten()?
            .dyn_into::<HtmlInputElement>()
            .ok()?;
        Some(DomInput { element })
    }
}
