// Presentation layer - draws layout trees with ratatui
//
// Consumes the renderer's `LayoutNode` trees and realizes them as
// terminal widgets. This is the hosting-environment side of the display
// boundary: visual styling, image stand-ins, and geometry rounding all
// live here and never leak back into the renderer.

use crate::layout::{Anchor, Direction, ImageNode, LayoutNode, OverlayNode, Region, TextNode, TextRole};
use crate::placeholder::PLACEHOLDER_LABEL;
use crate::theme::Theme;
use crate::tui::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Main render function - called on every frame.
pub fn draw(f: &mut Frame, app: &App) {
    let theme = app.theme.theme();

    let bg = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(bg, f.area());

    let tree = app.current_layout();
    draw_node(f, f.area(), &tree, &theme);
}

fn draw_node(f: &mut Frame, area: Rect, node: &LayoutNode, theme: &Theme) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    match node {
        LayoutNode::Region(region) => draw_region(f, area, region, theme),
        LayoutNode::Image(image) => draw_image(f, area, image, theme),
        LayoutNode::Text(text) => draw_text(f, area, text, theme),
        LayoutNode::Overlay(overlay) => draw_overlay(f, area, overlay, theme),
    }
}

/// Split the area among weighted children and recurse. Empty regions are
/// spacers: they consume their share and draw nothing.
fn draw_region(f: &mut Frame, area: Rect, region: &Region, theme: &Theme) {
    if region.children.is_empty() {
        return;
    }

    let direction = match region.direction {
        Direction::Horizontal => ratatui::layout::Direction::Horizontal,
        Direction::Vertical => ratatui::layout::Direction::Vertical,
    };
    let constraints: Vec<Constraint> = region
        .children
        .iter()
        .map(|child| Constraint::Fill(child.weight))
        .collect();
    let chunks = Layout::default()
        .direction(direction)
        .constraints(constraints)
        .split(area);

    for (child, chunk) in region.children.iter().zip(chunks.iter()) {
        draw_node(f, *chunk, &child.node, theme);
    }
}

/// Terminals can't decode the referenced images, so an image node becomes
/// a framed surface labeled with its source. Generated placeholders show
/// their literal label instead of the data URI.
fn draw_image(f: &mut Frame, area: Rect, image: &ImageNode, theme: &Theme) {
    let label = if image.source.starts_with("data:") {
        PLACEHOLDER_LABEL
    } else {
        image.source.as_str()
    };

    let frame = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.image_frame));
    let inner = frame.inner(area);
    f.render_widget(frame, area);

    // Center the label on the image surface.
    let label_area = middle_rows(inner, 1);
    let paragraph = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.image_label));
    f.render_widget(paragraph, label_area);
}

fn draw_text(f: &mut Frame, area: Rect, text: &TextNode, theme: &Theme) {
    let alignment = match text.role {
        TextRole::Heading
        | TextRole::Subheading
        | TextRole::Attribution
        | TextRole::NavChevron => Alignment::Center,
        TextRole::Body | TextRole::Caption | TextRole::Quote => Alignment::Left,
    };

    // Attribution lines outside the title stack carry a speaker marker,
    // like the original's play icon next to the quote author.
    let content = match text.role {
        TextRole::Attribution => format!("▸ {}", text.content),
        _ => text.content.clone(),
    };

    // Chevrons get a single-row slot from their anchor; padding would
    // swallow it.
    let inner = if text.role == TextRole::NavChevron {
        area
    } else {
        padded(area, 1)
    };
    let height = wrapped_height(&content, inner.width.max(1));
    let vertical = middle_rows(inner, height);

    let paragraph = Paragraph::new(content)
        .alignment(alignment)
        .wrap(Wrap { trim: true })
        .style(theme.text_style(text.role));
    f.render_widget(paragraph, vertical);
}

fn draw_overlay(f: &mut Frame, area: Rect, overlay: &OverlayNode, theme: &Theme) {
    draw_node(f, area, &overlay.base, theme);

    // Darken the base without erasing it: restyle the cells underneath.
    if overlay.scrim {
        f.buffer_mut()
            .set_style(area, Style::default().bg(theme.scrim));
    }

    for layer in &overlay.layers {
        let layer_area = anchor_rect(area, layer.anchor, &layer.node);
        draw_node(f, layer_area, &layer.node, theme);
    }
}

/// Area for an anchored overlay layer.
fn anchor_rect(area: Rect, anchor: Anchor, node: &LayoutNode) -> Rect {
    match anchor {
        Anchor::Center => {
            let width = (area.width.saturating_mul(2) / 3).max(1);
            let height = node_height(node, width).min(area.height);
            let x = area.x + (area.width - width) / 2;
            let y = area.y + (area.height.saturating_sub(height)) / 2;
            Rect::new(x, y, width, height)
        }
        Anchor::LeftEdge => Rect::new(
            area.x + 1,
            area.y + area.height / 2,
            3.min(area.width),
            1,
        ),
        Anchor::RightEdge => Rect::new(
            area.x + area.width.saturating_sub(4),
            area.y + area.height / 2,
            3.min(area.width),
            1,
        ),
    }
}

/// Rows a node needs when drawn at the given width. Stacked regions give
/// each child a breathing row between entries.
fn node_height(node: &LayoutNode, width: u16) -> u16 {
    match node {
        LayoutNode::Text(text) => wrapped_height(&text.content, width),
        LayoutNode::Region(region) => {
            let children: u16 = region
                .children
                .iter()
                .map(|c| node_height(&c.node, width))
                .sum();
            children + region.children.len().saturating_sub(1) as u16
        }
        _ => 3,
    }
}

/// Rows needed for text wrapped at the given width.
fn wrapped_height(content: &str, width: u16) -> u16 {
    if width == 0 {
        return 1;
    }
    let cells = UnicodeWidthStr::width(content) as u16;
    (cells / width + u16::from(cells % width != 0)).max(1)
}

/// The middle `height` rows of an area.
fn middle_rows(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    let y = area.y + (area.height - height) / 2;
    Rect::new(area.x, y, area.width, height)
}

/// Shrink an area by a uniform margin.
fn padded(area: Rect, margin: u16) -> Rect {
    Rect::new(
        area.x + margin.min(area.width / 2),
        area.y + margin.min(area.height / 2),
        area.width.saturating_sub(margin * 2),
        area.height.saturating_sub(margin * 2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_height_rounds_up() {
        assert_eq!(wrapped_height("abcd", 2), 2);
        assert_eq!(wrapped_height("abcde", 2), 3);
        assert_eq!(wrapped_height("abc", 10), 1);
        assert_eq!(wrapped_height("", 10), 1);
    }

    #[test]
    fn middle_rows_centers_within_area() {
        let area = Rect::new(0, 10, 20, 9);
        let mid = middle_rows(area, 3);
        assert_eq!(mid, Rect::new(0, 13, 20, 3));
        // Never taller than the area itself.
        let clamped = middle_rows(area, 50);
        assert_eq!(clamped.height, 9);
    }

    #[test]
    fn padded_never_underflows() {
        let tiny = Rect::new(0, 0, 1, 1);
        let shrunk = padded(tiny, 1);
        assert_eq!((shrunk.width, shrunk.height), (0, 0));
    }
}
