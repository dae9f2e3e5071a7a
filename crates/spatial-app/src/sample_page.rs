//! The demo page: a sticky header with navigation links, an article, a
//! scrollable comment list, and a footer below the fold.

use spatial_nav::{ComputedStyle, Document, NodeId, Overflow, Position, TagName};
use spatial_types::geometry::{ScreenRect, Viewport};

pub struct SamplePage {
    pub doc: Document,
    /// Element focused when the demo starts.
    pub start: NodeId,
}

fn text_el(doc: &mut Document, parent: NodeId, tag: TagName, rect: ScreenRect, text: &str) -> NodeId {
    let id = doc.add_element(parent, tag, rect);
    doc.add_text(id, text);
    id
}

pub fn build() -> SamplePage {
    let mut doc = Document::new(Viewport::new(1024.0, 768.0));
    let body = doc.body();

    // Header
    let header = doc.add_element(body, TagName::Header, ScreenRect::from_xywh(0.0, 0.0, 1024.0, 60.0));
    doc.set_style(
        header,
        ComputedStyle {
            position: Position::Sticky,
            ..Default::default()
        },
    );
    let logo = doc.add_element(header, TagName::A, ScreenRect::from_xywh(20.0, 10.0, 120.0, 40.0));
    let img = doc.add_element(logo, TagName::Img, ScreenRect::from_xywh(20.0, 10.0, 120.0, 40.0));
    doc.set_attribute(img, "alt", "Home");
    let nav = doc.add_element(header, TagName::Nav, ScreenRect::from_xywh(600.0, 10.0, 400.0, 40.0));
    for (i, label) in ["News", "Sport", "Weather"].iter().enumerate() {
        let x = 600.0 + i as f32 * 130.0;
        text_el(&mut doc, nav, TagName::A, ScreenRect::from_xywh(x, 10.0, 120.0, 40.0), label);
    }

    // Article
    let main = doc.add_element(body, TagName::Main, ScreenRect::from_xywh(0.0, 60.0, 1024.0, 1400.0));
    text_el(
        &mut doc,
        main,
        TagName::H1,
        ScreenRect::from_xywh(40.0, 100.0, 944.0, 50.0),
        "Spatial navigation explained",
    );
    let intro = text_el(
        &mut doc,
        main,
        TagName::P,
        ScreenRect::from_xywh(40.0, 180.0, 944.0, 60.0),
        "Arrow keys move focus to whatever sits next to the current element on screen.",
    );
    let para = doc.add_element(main, TagName::P, ScreenRect::from_xywh(40.0, 270.0, 944.0, 60.0));
    doc.add_text(para, "Readouts are spoken with stereo panning; see the");
    text_el(&mut doc, para, TagName::A, ScreenRect::from_xywh(500.0, 300.0, 120.0, 20.0), "audio notes");
    doc.add_text(para, "for details.");

    let search = doc.add_element(main, TagName::Input, ScreenRect::from_xywh(40.0, 360.0, 400.0, 36.0));
    doc.set_attribute(search, "placeholder", "Search the site");
    let go = text_el(&mut doc, main, TagName::Button, ScreenRect::from_xywh(460.0, 360.0, 100.0, 36.0), "Go");
    doc.set_attribute(go, "id", "go");

    // Comments: a 240px scroll box holding eight comments.
    text_el(&mut doc, main, TagName::H2, ScreenRect::from_xywh(40.0, 430.0, 944.0, 40.0), "Comments");
    let comments = doc.add_element(main, TagName::Section, ScreenRect::from_xywh(40.0, 480.0, 944.0, 240.0));
    doc.set_style(
        comments,
        ComputedStyle {
            overflow_y: Overflow::Auto,
            ..Default::default()
        },
    );
    for i in 0..8 {
        let y = 490.0 + i as f32 * 90.0;
        text_el(
            &mut doc,
            comments,
            TagName::P,
            ScreenRect::from_xywh(60.0, y, 900.0, 40.0),
            &format!("Comment {} from reader {}", i + 1, i * 7 + 3),
        );
    }

    // Footer
    let footer = doc.add_element(body, TagName::Footer, ScreenRect::from_xywh(0.0, 1300.0, 1024.0, 80.0));
    text_el(&mut doc, footer, TagName::Small, ScreenRect::from_xywh(40.0, 1320.0, 300.0, 20.0), "Copyright");
    text_el(&mut doc, footer, TagName::A, ScreenRect::from_xywh(700.0, 1320.0, 120.0, 20.0), "Contact");

    SamplePage { doc, start: intro }
}
