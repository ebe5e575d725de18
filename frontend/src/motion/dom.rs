//! Browser side of the motion core: node registration, measurements and
//! style writes through `web-sys`.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use web_sys::{window, Element};

use super::layout::{Layout, NodeId, Rect, StyleWrite, Viewport};

/// Where `scroll_to` should go.
#[derive(Clone, Debug, PartialEq)]
pub enum ScrollTarget {
    Position(f64),
    Node(NodeId),
    /// CSS selector, resolved against the document at call time.
    Selector(String),
}

struct Registered {
    element: Element,
    authored: Option<String>,
}

#[derive(Default)]
pub struct DomNodes {
    next_id: Cell<NodeId>,
    nodes: RefCell<HashMap<NodeId, Registered>>,
}

fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

fn document_rect(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    let scroll = scroll_y();
    Rect {
        top: rect.top() + scroll,
        left: rect.left(),
        width: rect.width(),
        height: rect.height(),
    }
}

impl DomNodes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remembers `element` and the style it was authored with.
    pub fn register(&self, element: Element) -> NodeId {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let authored = element.get_attribute("style");
        self.nodes
            .borrow_mut()
            .insert(id, Registered { element, authored });
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub fn apply(&self, writes: &[StyleWrite]) {
        let nodes = self.nodes.borrow();
        for write in writes {
            let Some(node) = nodes.get(&write.node) else {
                continue;
            };
            let style = match (&node.authored, write.css.is_empty()) {
                (Some(authored), false) => format!("{} {}", authored, write.css),
                (None, false) => write.css.clone(),
                (Some(authored), true) => authored.clone(),
                (None, true) => String::new(),
            };
            if let Err(err) = node.element.set_attribute("style", &style) {
                log::warn!("failed to write style on node {}: {:?}", write.node, err);
            }
        }
    }

    /// Restores the authored style and forgets the nodes.
    pub fn revert(&self, ids: &[NodeId]) {
        let mut nodes = self.nodes.borrow_mut();
        for id in ids {
            let Some(node) = nodes.remove(id) else {
                continue;
            };
            let restored = match node.authored {
                Some(authored) => node.element.set_attribute("style", &authored),
                None => node.element.remove_attribute("style"),
            };
            if let Err(err) = restored {
                log::warn!("failed to restore style on node {}: {:?}", id, err);
            }
        }
    }

    /// Absolute document position for `target`, if it can be found.
    pub fn resolve(&self, target: &ScrollTarget) -> Option<f64> {
        match target {
            ScrollTarget::Position(position) => Some(*position),
            ScrollTarget::Node(id) => self.rect(*id).map(|rect| rect.top),
            ScrollTarget::Selector(selector) => window()
                .and_then(|w| w.document())
                .and_then(|d| d.query_selector(selector).ok().flatten())
                .map(|element| document_rect(&element).top),
        }
    }
}

impl Layout for DomNodes {
    fn rect(&self, node: NodeId) -> Option<Rect> {
        self.nodes
            .borrow()
            .get(&node)
            .map(|registered| document_rect(&registered.element))
    }

    fn scroll_width(&self, node: NodeId) -> Option<f64> {
        self.nodes
            .borrow()
            .get(&node)
            .map(|registered| registered.element.scroll_width() as f64)
    }

    fn viewport(&self) -> Viewport {
        let Some(window) = window() else {
            return Viewport::default();
        };
        Viewport {
            width: window
                .inner_width()
                .ok()
                .and_then(|w| w.as_f64())
                .unwrap_or(0.0),
            height: window
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or(0.0),
        }
    }

    fn document_height(&self) -> f64 {
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .map(|root| root.scroll_height() as f64)
            .unwrap_or(0.0)
    }
}

/// Moves the browser's own scroll position.
pub fn set_window_scroll(position: f64) {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, position);
    }
}

pub fn window_scroll() -> f64 {
    scroll_y()
}

pub fn now() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
