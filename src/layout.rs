// Layout tree - the display boundary between renderer and presentation
//
// The renderer describes each slide as a tree of typed nodes; the
// presentation layer walks the tree and draws it with whatever widget
// toolkit it owns. Nothing in here knows about terminals, colors, or
// fonts - those are presentation concerns.

use crate::deck::NavSignal;

/// Split direction for a region's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
}

/// Semantic role of a text node. The presentation layer maps roles to
/// styles; the renderer only states intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    /// Slide title (title variant).
    Heading,
    /// Subtitle under the heading.
    Subheading,
    /// Author / attribution line.
    Attribution,
    /// Body prose (full-text variant).
    Body,
    /// Caption column beside an image.
    Caption,
    /// Quotation text.
    Quote,
    /// Previous/next navigation chevron.
    NavChevron,
}

/// Where an overlay layer sits relative to its base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Center,
    LeftEdge,
    RightEdge,
}

/// A child of a region together with its share of the split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Weighted {
    pub weight: u16,
    pub node: LayoutNode,
}

/// Container splitting its area among weighted children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub direction: Direction,
    pub children: Vec<Weighted>,
}

/// An image reference. The source is an opaque path/URI string passed
/// through untouched; resolving it is the host's problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageNode {
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    pub content: String,
    pub role: TextRole,
}

/// A layer floated above an overlay's base. Layers tagged with a
/// navigation signal are activatable triggers (the prev/next affordances).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    pub anchor: Anchor,
    pub node: LayoutNode,
    pub action: Option<NavSignal>,
}

/// Base content with layers stacked on top. `scrim` darkens the base
/// before the layers are drawn (title-slide legibility treatment).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayNode {
    pub base: Box<LayoutNode>,
    pub scrim: bool,
    pub layers: Vec<Layer>,
}

/// One node of the layout description tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutNode {
    Region(Region),
    Image(ImageNode),
    Text(TextNode),
    Overlay(OverlayNode),
}

impl LayoutNode {
    pub fn region(direction: Direction, children: Vec<Weighted>) -> Self {
        LayoutNode::Region(Region {
            direction,
            children,
        })
    }

    pub fn image(source: impl Into<String>) -> Self {
        LayoutNode::Image(ImageNode {
            source: source.into(),
        })
    }

    pub fn text(content: impl Into<String>, role: TextRole) -> Self {
        LayoutNode::Text(TextNode {
            content: content.into(),
            role,
        })
    }

    /// An empty region: takes up its share of a split, draws nothing.
    pub fn spacer() -> Self {
        LayoutNode::Region(Region {
            direction: Direction::Vertical,
            children: Vec::new(),
        })
    }
}

impl Weighted {
    pub fn new(weight: u16, node: LayoutNode) -> Self {
        Self { weight, node }
    }
}
