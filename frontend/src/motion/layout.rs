//! Geometry seen by the motion core.
//!
//! Nodes are registered with the DOM adapter and referred to by [`NodeId`];
//! the core only ever asks for measurements through the [`Layout`] trait and
//! answers with [`StyleWrite`]s, so it runs without a browser.

pub type NodeId = u32;

/// Box in document coordinates (scroll offset already added).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

pub trait Layout {
    fn rect(&self, node: NodeId) -> Option<Rect>;
    fn scroll_width(&self, node: NodeId) -> Option<f64>;
    fn viewport(&self) -> Viewport;
    fn document_height(&self) -> f64;
}

/// Inline style a node should carry on top of its authored style.
/// An empty `css` means "back to the authored style".
#[derive(Clone, Debug, PartialEq)]
pub struct StyleWrite {
    pub node: NodeId,
    pub css: String,
}

#[cfg(test)]
pub mod fake {
    use super::*;
    use std::collections::HashMap;

    /// In-memory layout for tests.
    #[derive(Clone, Debug)]
    pub struct FakeLayout {
        pub rects: HashMap<NodeId, Rect>,
        pub scroll_widths: HashMap<NodeId, f64>,
        pub viewport: Viewport,
        pub document_height: f64,
    }

    impl Default for FakeLayout {
        fn default() -> Self {
            Self {
                rects: HashMap::new(),
                scroll_widths: HashMap::new(),
                viewport: Viewport {
                    width: 1_280.0,
                    height: 800.0,
                },
                document_height: 6_000.0,
            }
        }
    }

    impl FakeLayout {
        pub fn with_node(mut self, node: NodeId, top: f64, height: f64) -> Self {
            self.rects.insert(
                node,
                Rect {
                    top,
                    left: 0.0,
                    width: self.viewport.width,
                    height,
                },
            );
            self
        }

        pub fn with_scroll_width(mut self, node: NodeId, width: f64) -> Self {
            self.scroll_widths.insert(node, width);
            self
        }
    }

    impl Layout for FakeLayout {
        fn rect(&self, node: NodeId) -> Option<Rect> {
            self.rects.get(&node).copied()
        }

        fn scroll_width(&self, node: NodeId) -> Option<f64> {
            self.scroll_widths.get(&node).copied()
        }

        fn viewport(&self) -> Viewport {
            self.viewport
        }

        fn document_height(&self) -> f64 {
            self.document_height
        }
    }
}
