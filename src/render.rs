// Renderer - pure mapping from a slide to its layout description
//
// Dispatch is an exhaustive match over the slide variants; adding a
// variant without a layout policy is a compile error, not a blank screen.
// The renderer never touches deck state and performs no I/O: the same
// slide always yields the same tree.

use crate::catalog::Slide;
use crate::deck::NavSignal;
use crate::layout::{Anchor, Direction, Layer, LayoutNode, TextRole, Weighted};
use crate::placeholder::title_background_placeholder;

/// Chevrons used for the fixed previous/next triggers.
const PREV_CHEVRON: &str = "‹";
const NEXT_CHEVRON: &str = "›";

/// Describe one slide as a layout tree. The navigation affordances are
/// layered atop every variant's output, independent of slide content.
pub fn render(slide: &Slide) -> LayoutNode {
    with_nav_triggers(render_content(slide))
}

/// Variant dispatch: one layout policy per variant, no default arm.
fn render_content(slide: &Slide) -> LayoutNode {
    match slide {
        Slide::Title {
            title,
            subtitle,
            author,
            background_image,
        } => render_title(title, subtitle.as_deref(), author.as_deref(), background_image.as_deref()),
        Slide::FullText { text } => render_full_text(text),
        Slide::ImageCaption { image, caption } => render_image_caption(image, caption.as_deref()),
        Slide::ImageQuote {
            image,
            quote,
            author,
        } => render_image_quote(image, quote.as_deref(), author.as_deref()),
    }
}

/// Full-bleed background (or generated placeholder) behind a darkening
/// scrim, with title, subtitle, and author stacked in the center.
fn render_title(
    title: &str,
    subtitle: Option<&str>,
    author: Option<&str>,
    background_image: Option<&str>,
) -> LayoutNode {
    let background = match background_image {
        Some(source) => LayoutNode::image(source),
        None => LayoutNode::image(title_background_placeholder()),
    };

    let mut stack = vec![Weighted::new(1, LayoutNode::text(title, TextRole::Heading))];
    if let Some(subtitle) = subtitle {
        stack.push(Weighted::new(
            1,
            LayoutNode::text(subtitle, TextRole::Subheading),
        ));
    }
    if let Some(author) = author {
        stack.push(Weighted::new(
            1,
            LayoutNode::text(author, TextRole::Attribution),
        ));
    }

    LayoutNode::Overlay(crate::layout::OverlayNode {
        base: Box::new(background),
        scrim: true,
        layers: vec![Layer {
            anchor: Anchor::Center,
            node: LayoutNode::region(Direction::Vertical, stack),
            action: None,
        }],
    })
}

/// Centered body text in a bounded central column, no imagery.
fn render_full_text(text: &str) -> LayoutNode {
    LayoutNode::region(
        Direction::Horizontal,
        vec![
            Weighted::new(1, LayoutNode::spacer()),
            Weighted::new(3, LayoutNode::text(text, TextRole::Body)),
            Weighted::new(1, LayoutNode::spacer()),
        ],
    )
}

/// Large image region beside a narrower caption column (4:1 split).
fn render_image_caption(image: &str, caption: Option<&str>) -> LayoutNode {
    let caption_node = match caption {
        Some(caption) => LayoutNode::text(caption, TextRole::Caption),
        None => LayoutNode::spacer(),
    };
    LayoutNode::region(
        Direction::Horizontal,
        vec![
            Weighted::new(4, LayoutNode::image(image)),
            Weighted::new(1, caption_node),
        ],
    )
}

/// Image on one side, quote plus attribution on the other, equal halves.
fn render_image_quote(image: &str, quote: Option<&str>, author: Option<&str>) -> LayoutNode {
    let mut column = Vec::new();
    if let Some(quote) = quote {
        column.push(Weighted::new(3, LayoutNode::text(quote, TextRole::Quote)));
    }
    if let Some(author) = author {
        column.push(Weighted::new(
            1,
            LayoutNode::text(author, TextRole::Attribution),
        ));
    }
    let text_side = if column.is_empty() {
        LayoutNode::spacer()
    } else {
        LayoutNode::region(Direction::Vertical, column)
    };

    LayoutNode::region(
        Direction::Horizontal,
        vec![
            Weighted::new(1, LayoutNode::image(image)),
            Weighted::new(1, text_side),
        ],
    )
}

/// Wrap a slide layout with the two fixed navigation triggers. Their
/// presence and position never depend on the variant underneath.
fn with_nav_triggers(base: LayoutNode) -> LayoutNode {
    LayoutNode::Overlay(crate::layout::OverlayNode {
        base: Box::new(base),
        scrim: false,
        layers: vec![
            Layer {
                anchor: Anchor::LeftEdge,
                node: LayoutNode::text(PREV_CHEVRON, TextRole::NavChevron),
                action: Some(NavSignal::Retreat),
            },
            Layer {
                anchor: Anchor::RightEdge,
                node: LayoutNode::text(NEXT_CHEVRON, TextRole::NavChevron),
                action: Some(NavSignal::Advance),
            },
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{ImageNode, OverlayNode, Region, TextNode};

    fn title_slide(background: Option<&str>) -> Slide {
        Slide::Title {
            title: "The Digital Self".to_string(),
            subtitle: Some("Who We Are in The Age of the Algorithm".to_string()),
            author: Some("By Trung Le".to_string()),
            background_image: background.map(str::to_string),
        }
    }

    /// Unwrap the outer nav overlay, asserting the triggers are in place.
    fn strip_nav(tree: LayoutNode) -> LayoutNode {
        match tree {
            LayoutNode::Overlay(OverlayNode {
                base,
                scrim: false,
                layers,
            }) => {
                assert_eq!(layers.len(), 2);
                assert_eq!(layers[0].anchor, Anchor::LeftEdge);
                assert_eq!(layers[0].action, Some(NavSignal::Retreat));
                assert_eq!(layers[1].anchor, Anchor::RightEdge);
                assert_eq!(layers[1].action, Some(NavSignal::Advance));
                *base
            }
            other => panic!("expected nav overlay at the root, got {other:?}"),
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let slide = title_slide(None);
        assert_eq!(render(&slide), render(&slide));

        let slide = Slide::ImageQuote {
            image: "/images/Tiktok.jpg".to_string(),
            quote: Some("We see them as we are".to_string()),
            author: Some("Anais Nin".to_string()),
        };
        assert_eq!(render(&slide), render(&slide));
    }

    #[test]
    fn every_variant_carries_nav_triggers() {
        let slides = vec![
            title_slide(Some("/images/Slide1.png")),
            Slide::FullText {
                text: "body".to_string(),
            },
            Slide::ImageCaption {
                image: "/images/a.png".to_string(),
                caption: Some("caption".to_string()),
            },
            Slide::ImageQuote {
                image: "/images/b.png".to_string(),
                quote: None,
                author: None,
            },
        ];
        for slide in slides {
            // strip_nav panics if either trigger is missing or mis-anchored.
            strip_nav(render(&slide));
        }
    }

    #[test]
    fn title_layers_stack_over_scrimmed_background() {
        let tree = strip_nav(render(&title_slide(Some("/images/Slide1.png"))));
        match tree {
            LayoutNode::Overlay(OverlayNode {
                base,
                scrim,
                layers,
            }) => {
                assert!(scrim, "title background must be darkened");
                assert_eq!(
                    *base,
                    LayoutNode::Image(ImageNode {
                        source: "/images/Slide1.png".to_string()
                    })
                );
                assert_eq!(layers.len(), 1);
                assert_eq!(layers[0].anchor, Anchor::Center);
                match &layers[0].node {
                    LayoutNode::Region(Region {
                        direction: Direction::Vertical,
                        children,
                    }) => {
                        let roles: Vec<TextRole> = children
                            .iter()
                            .map(|w| match &w.node {
                                LayoutNode::Text(TextNode { role, .. }) => *role,
                                other => panic!("expected text in stack, got {other:?}"),
                            })
                            .collect();
                        assert_eq!(
                            roles,
                            vec![TextRole::Heading, TextRole::Subheading, TextRole::Attribution]
                        );
                    }
                    other => panic!("expected vertical stack, got {other:?}"),
                }
            }
            other => panic!("expected scrim overlay, got {other:?}"),
        }
    }

    #[test]
    fn missing_background_falls_back_to_placeholder() {
        let tree = strip_nav(render(&title_slide(None)));
        match tree {
            LayoutNode::Overlay(OverlayNode { base, .. }) => match *base {
                LayoutNode::Image(ImageNode { source }) => {
                    assert_eq!(source, title_background_placeholder());
                }
                other => panic!("expected image base, got {other:?}"),
            },
            other => panic!("expected overlay, got {other:?}"),
        }
    }

    #[test]
    fn full_text_is_a_bounded_center_column_without_imagery() {
        let tree = strip_nav(render(&Slide::FullText {
            text: "prose".to_string(),
        }));
        match tree {
            LayoutNode::Region(Region {
                direction: Direction::Horizontal,
                children,
            }) => {
                assert_eq!(children.len(), 3);
                assert_eq!(
                    (children[0].weight, children[1].weight, children[2].weight),
                    (1, 3, 1)
                );
                assert_eq!(
                    children[1].node,
                    LayoutNode::text("prose", TextRole::Body)
                );
                // No image node anywhere in this layout.
                assert!(matches!(children[0].node, LayoutNode::Region(_)));
                assert!(matches!(children[2].node, LayoutNode::Region(_)));
            }
            other => panic!("expected horizontal region, got {other:?}"),
        }
    }

    #[test]
    fn image_caption_splits_four_to_one() {
        let tree = strip_nav(render(&Slide::ImageCaption {
            image: "/images/image2.webp".to_string(),
            caption: Some("whose story is it?".to_string()),
        }));
        match tree {
            LayoutNode::Region(Region { children, .. }) => {
                assert_eq!((children[0].weight, children[1].weight), (4, 1));
                assert!(matches!(children[0].node, LayoutNode::Image(_)));
                assert_eq!(
                    children[1].node,
                    LayoutNode::text("whose story is it?", TextRole::Caption)
                );
            }
            other => panic!("expected split region, got {other:?}"),
        }
    }

    #[test]
    fn image_quote_splits_in_equal_halves() {
        let tree = strip_nav(render(&Slide::ImageQuote {
            image: "/images/llm.webp".to_string(),
            quote: Some("inspired by AI".to_string()),
            author: Some("Trung Le".to_string()),
        }));
        match tree {
            LayoutNode::Region(Region { children, .. }) => {
                assert_eq!((children[0].weight, children[1].weight), (1, 1));
                assert!(matches!(children[0].node, LayoutNode::Image(_)));
                match &children[1].node {
                    LayoutNode::Region(Region {
                        direction: Direction::Vertical,
                        children,
                    }) => {
                        assert_eq!(
                            children[0].node,
                            LayoutNode::text("inspired by AI", TextRole::Quote)
                        );
                        assert_eq!(
                            children[1].node,
                            LayoutNode::text("Trung Le", TextRole::Attribution)
                        );
                    }
                    other => panic!("expected quote column, got {other:?}"),
                }
            }
            other => panic!("expected split region, got {other:?}"),
        }
    }
}
