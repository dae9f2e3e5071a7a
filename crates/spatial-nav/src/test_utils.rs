//! Shared test utilities for the navigation crate.
//!
//! Provides a [`PageBuilder`] for laying out small documents and a
//! [`RecordingSink`] that records every cue for assertion.

use spatial_types::geometry::{ScreenRect, Viewport};

use crate::dom::{Document, TagName};
use crate::feedback::{Cue, CueKind, FeedbackSink};
use crate::page::{ComputedStyle, NodeId, Overflow};

/// Fluent wrapper around [`Document`] for building test pages.
pub struct PageBuilder {
    doc: Document,
}

#[allow(dead_code)]
impl PageBuilder {
    /// An empty 800x600 page.
    pub fn new() -> Self {
        Self::with_viewport(Viewport::new(800.0, 600.0))
    }

    pub fn with_viewport(viewport: Viewport) -> Self {
        Self {
            doc: Document::new(viewport),
        }
    }

    pub fn body(&self) -> NodeId {
        self.doc.body()
    }

    pub fn element(&mut self, parent: NodeId, tag: TagName, rect: ScreenRect) -> NodeId {
        self.doc.add_element(parent, tag, rect)
    }

    pub fn text(&mut self, parent: NodeId, text: &str) {
        self.doc.add_text(parent, text);
    }

    pub fn attr(&mut self, id: NodeId, name: &str, value: &str) {
        self.doc.set_attribute(id, name, value);
    }

    pub fn style(&mut self, id: NodeId, style: ComputedStyle) {
        self.doc.set_style(id, style);
    }

    /// `<p>` with a single text node.
    pub fn paragraph(&mut self, parent: NodeId, rect: ScreenRect, text: &str) -> NodeId {
        let p = self.element(parent, TagName::P, rect);
        self.text(p, text);
        p
    }

    /// `<a>` with a single text node.
    pub fn link(&mut self, parent: NodeId, rect: ScreenRect, text: &str) -> NodeId {
        let a = self.element(parent, TagName::A, rect);
        self.text(a, text);
        a
    }

    /// `<div style="overflow-y: auto">`.
    pub fn scroll_box(&mut self, parent: NodeId, rect: ScreenRect) -> NodeId {
        let div = self.element(parent, TagName::Div, rect);
        self.style(
            div,
            ComputedStyle {
                overflow_y: Overflow::Auto,
                ..Default::default()
            },
        );
        div
    }

    pub fn build(self) -> Document {
        self.doc
    }
}

/// Three full-width paragraphs at y = 0, 100 and 200.
pub fn stacked_paragraphs() -> (Document, [NodeId; 3]) {
    let mut b = PageBuilder::new();
    let body = b.body();
    let ids = [0.0, 100.0, 200.0].map(|y| {
        b.paragraph(body, ScreenRect::from_xywh(0.0, y, 800.0, 20.0), &format!("Paragraph at {y}"))
    });
    (b.build(), ids)
}

/// A 200px-tall scroll box holding ten 100px rows (1000px of content).
/// Returns the page, the box, and the rows.
pub fn scroll_list() -> (Document, NodeId, Vec<NodeId>) {
    let mut b = PageBuilder::new();
    let list = b.scroll_box(b.body(), ScreenRect::from_xywh(0.0, 0.0, 800.0, 200.0));
    let rows = (0..10)
        .map(|i| {
            let y = i as f32 * 100.0;
            b.paragraph(list, ScreenRect::from_xywh(0.0, y, 800.0, 20.0), &format!("Row {i}"))
        })
        .collect();
    (b.build(), list, rows)
}

/// Two links side by side, vertically centred in the viewport.
pub fn adjacent_links() -> (Document, NodeId, NodeId) {
    let mut b = PageBuilder::new();
    let left = b.link(b.body(), ScreenRect::from_xywh(100.0, 290.0, 150.0, 20.0), "Previous");
    let right = b.link(b.body(), ScreenRect::from_xywh(550.0, 290.0, 150.0, 20.0), "Next");
    (b.build(), left, right)
}

/// A feedback sink that records all cues for test assertions.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub cues: Vec<Cue>,
    pub stops: usize,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of every speech cue, in order.
    pub fn spoken(&self) -> Vec<&str> {
        self.cues
            .iter()
            .filter_map(|c| match &c.kind {
                CueKind::Speech { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn beep_count(&self) -> usize {
        self.cues
            .iter()
            .filter(|c| matches!(c.kind, CueKind::ScrollBeep))
            .count()
    }

    pub fn click_count(&self) -> usize {
        self.cues
            .iter()
            .filter(|c| matches!(c.kind, CueKind::Click))
            .count()
    }

    pub fn clear(&mut self) {
        self.cues.clear();
        self.stops = 0;
    }
}

impl FeedbackSink for RecordingSink {
    fn play(&mut self, cue: Cue) {
        self.cues.push(cue);
    }

    fn stop_all(&mut self) {
        self.stops += 1;
    }
}
