//! Spoken readout of an element.
//!
//! The readout doubles as the readability test: an element whose readout is
//! the empty string must never receive focus. Readouts are rendered as
//! `"{label}; {content}"` or `"{content}; {label}"`; the `"; "` separator is
//! a pause cue for the speech synthesizer and is part of the output format.

use crate::dom::TagName;
use crate::page::{NodeId, Page};

const SEPARATOR: &str = "; ";

// ------------------------------------------------------------------
// Classification
// ------------------------------------------------------------------

/// What an element is, as far as speech is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ElementKind {
    Link,
    Heading(Option<u8>),
    /// Block container (`div`, `section`, `li`, ...).
    Group,
    /// Text-bearing element (`p`, `span`, `strong`, ...).
    InlineText,
    Image,
    Input,
    Button,
    /// `path` / `g` inside an inline SVG.
    SvgPart,
    Other,
}

impl ElementKind {
    /// Classify by ARIA role first, then by tag.
    fn of<P: Page + ?Sized>(page: &P, node: NodeId) -> Self {
        if let Some(kind) = Self::from_role(page, node) {
            return kind;
        }
        match page.tag(node) {
            Some(tag) => Self::from_tag(tag),
            None => Self::Other,
        }
    }

    fn from_role<P: Page + ?Sized>(page: &P, node: NodeId) -> Option<Self> {
        let role = page
            .attribute(node, "role")?
            .split_ascii_whitespace()
            .next()?
            .to_ascii_lowercase();
        let kind = match role.as_str() {
            "link" => Self::Link,
            "heading" => {
                let level = page
                    .attribute(node, "aria-level")
                    .and_then(|l| l.trim().parse::<u8>().ok())
                    .or_else(|| page.tag(node).and_then(TagName::heading_level));
                Self::Heading(level)
            },
            "button" => Self::Button,
            "img" | "image" => Self::Image,
            "textbox" | "searchbox" | "combobox" => Self::Input,
            "group" => Self::Group,
            "text" | "paragraph" => Self::InlineText,
            _ => return None,
        };
        Some(kind)
    }

    fn from_tag(tag: &TagName) -> Self {
        match tag {
            TagName::A => Self::Link,
            TagName::H1
            | TagName::H2
            | TagName::H3
            | TagName::H4
            | TagName::H5
            | TagName::H6 => Self::Heading(tag.heading_level()),
            TagName::Div
            | TagName::Li
            | TagName::Section
            | TagName::Article
            | TagName::Header
            | TagName::Footer
            | TagName::Nav
            | TagName::Main
            | TagName::Aside => Self::Group,
            TagName::Span
            | TagName::Strong
            | TagName::B
            | TagName::P
            | TagName::Em
            | TagName::I
            | TagName::Label => Self::InlineText,
            TagName::Img | TagName::Svg => Self::Image,
            TagName::Input | TagName::Textarea => Self::Input,
            TagName::Button => Self::Button,
            TagName::Path | TagName::G => Self::SvgPart,
            _ => Self::Other,
        }
    }

    fn label(self) -> String {
        match self {
            Self::Link => "link".into(),
            Self::Heading(Some(level)) => format!("heading level {level}"),
            Self::Heading(None) => "heading".into(),
            Self::Group => "group".into(),
            Self::InlineText => "text".into(),
            Self::Image => "image".into(),
            Self::Input => "input".into(),
            Self::Button => "button".into(),
            Self::SvgPart | Self::Other => String::new(),
        }
    }

    fn order(self) -> Order {
        match self {
            Self::Link | Self::Input => Order::LabelFirst,
            _ => Order::ContentFirst,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Order {
    LabelFirst,
    ContentFirst,
}

/// Label and content of a readout before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Parts {
    label: String,
    content: String,
    order: Order,
}

impl Parts {
    fn empty() -> Self {
        Self {
            label: String::new(),
            content: String::new(),
            order: Order::ContentFirst,
        }
    }

    fn render(self) -> String {
        if self.content.is_empty() {
            return String::new();
        }
        if self.label.is_empty() {
            return self.content;
        }
        match self.order {
            Order::LabelFirst => format!("{}{SEPARATOR}{}", self.label, self.content),
            Order::ContentFirst => format!("{}{SEPARATOR}{}", self.content, self.label),
        }
    }
}

/// Derivation context threaded through redirects.
#[derive(Debug, Clone, Copy, Default)]
struct Ctx {
    /// Derivation was started by an ancestor looking for its content.
    /// Sticks across upward redirects so a descendant never hands the
    /// lookup back to the ancestor that asked for it.
    from_parent: bool,
    depth: u8,
}

impl Ctx {
    fn up(self) -> Self {
        Self {
            depth: self.depth + 1,
            ..self
        }
    }

    fn down(self) -> Self {
        Self {
            from_parent: true,
            depth: self.depth + 1,
        }
    }
}

// ------------------------------------------------------------------
// Oracle
// ------------------------------------------------------------------

/// Derives readouts with a bounded redirect depth.
#[derive(Debug, Clone, Copy)]
pub struct ReadoutOracle {
    max_depth: u8,
}

impl Default for ReadoutOracle {
    fn default() -> Self {
        Self { max_depth: 8 }
    }
}

impl ReadoutOracle {
    pub fn new(max_depth: u8) -> Self {
        Self { max_depth }
    }

    /// Text to speak for `node`, or `""` if it must not receive focus.
    pub fn readout<P: Page + ?Sized>(&self, page: &P, node: NodeId) -> String {
        self.parts(page, node, Ctx::default()).render()
    }

    pub fn is_readable<P: Page + ?Sized>(&self, page: &P, node: NodeId) -> bool {
        !self.readout(page, node).is_empty()
    }

    fn parts<P: Page + ?Sized>(&self, page: &P, node: NodeId, ctx: Ctx) -> Parts {
        if ctx.depth >= self.max_depth {
            return Parts::empty();
        }
        let kind = ElementKind::of(page, node);

        if let Some(parts) = self.redirect(page, node, kind, ctx) {
            return parts;
        }

        let content = match labelled_by(page, node) {
            Some(text) => text,
            None => self.default_content(page, node, kind, ctx),
        };
        let content = if content.is_empty() {
            aria_label(page, node).unwrap_or_default()
        } else {
            content
        };

        Parts {
            label: kind.label(),
            content,
            order: kind.order(),
        }
    }

    /// Elements that speak for a parent instead of themselves.
    fn redirect<P: Page + ?Sized>(
        &self,
        page: &P,
        node: NodeId,
        kind: ElementKind,
        ctx: Ctx,
    ) -> Option<Parts> {
        let parent = page.parent(node)?;
        match kind {
            ElementKind::InlineText if !ctx.from_parent => {
                if !is_sole_element_child(page, parent, node) {
                    return None;
                }
                let own = page.inner_text(node).chars().count();
                if page.inner_text(parent).chars().count() <= own {
                    return None;
                }
                let parts = self.parts(page, parent, ctx.up());
                // An unreadable parent leaves the text readable on its own.
                (!parts.content.is_empty()).then_some(parts)
            },
            ElementKind::Image if !ctx.from_parent => {
                let wraps = matches!(
                    ElementKind::of(page, parent),
                    ElementKind::Link | ElementKind::Button
                );
                (wraps && is_sole_element_child(page, parent, node))
                    .then(|| self.parts(page, parent, ctx.up()))
            },
            ElementKind::SvgPart if !ctx.from_parent => {
                let in_svg = matches!(
                    page.tag(parent),
                    Some(TagName::Svg | TagName::G | TagName::Path)
                );
                in_svg.then(|| self.parts(page, parent, ctx.up()))
            },
            _ => None,
        }
    }

    fn default_content<P: Page + ?Sized>(
        &self,
        page: &P,
        node: NodeId,
        kind: ElementKind,
        ctx: Ctx,
    ) -> String {
        match kind {
            ElementKind::Link => {
                let text = page.inner_text(node);
                if !text.is_empty() {
                    return text;
                }
                first_labelled_descendant(page, node)
                    .map(|d| self.parts(page, d, ctx.down()).content)
                    .unwrap_or_default()
            },
            ElementKind::Heading(_) | ElementKind::InlineText | ElementKind::Button => {
                page.inner_text(node)
            },
            ElementKind::Group => {
                let only_inline = page
                    .children(node)
                    .into_iter()
                    .all(|c| page.tag(c).is_some_and(TagName::is_inline_text_wrapper));
                if page.has_direct_text(node) && only_inline {
                    page.inner_text(node)
                } else {
                    String::new()
                }
            },
            ElementKind::Image => non_blank(page.attribute(node, "alt")).unwrap_or_default(),
            ElementKind::Input => aria_label(page, node)
                .or_else(|| non_blank(page.attribute(node, "placeholder")))
                .unwrap_or_default(),
            ElementKind::SvgPart => String::new(),
            ElementKind::Other => aria_label(page, node).unwrap_or_default(),
        }
    }
}

/// Readout with the default redirect depth.
pub fn readout<P: Page + ?Sized>(page: &P, node: NodeId) -> String {
    ReadoutOracle::default().readout(page, node)
}

// ------------------------------------------------------------------
// Helpers
// ------------------------------------------------------------------

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn aria_label<P: Page + ?Sized>(page: &P, node: NodeId) -> Option<String> {
    non_blank(page.attribute(node, "aria-label"))
}

/// Text of the elements named by `aria-labelledby`, resolved by id and then
/// by class name. `Some` whenever the attribute is present, even if nothing
/// resolves.
fn labelled_by<P: Page + ?Sized>(page: &P, node: NodeId) -> Option<String> {
    let refs = page.attribute(node, "aria-labelledby")?;
    let text = refs
        .split_ascii_whitespace()
        .filter_map(|r| page.element_by_id(r).or_else(|| page.element_by_class(r)))
        .map(|n| page.inner_text(n))
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    Some(text)
}

fn is_sole_element_child<P: Page + ?Sized>(page: &P, parent: NodeId, node: NodeId) -> bool {
    page.children(parent) == [node]
}

/// First descendant, in document order, that carries its own label.
fn first_labelled_descendant<P: Page + ?Sized>(page: &P, node: NodeId) -> Option<NodeId> {
    let mut stack: Vec<NodeId> = page.children(node).into_iter().rev().collect();
    while let Some(n) = stack.pop() {
        let labelled = ["alt", "aria-label", "aria-labelledby"]
            .iter()
            .any(|a| page.attribute(n, a).is_some());
        if labelled {
            return Some(n);
        }
        stack.extend(page.children(n).into_iter().rev());
    }
    None
}
