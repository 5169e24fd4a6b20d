// Theme - presentation-layer styling
//
// Colors for the slide surfaces and text roles. Styling is strictly a
// presentation concern: the renderer's layout trees never mention it.

use crate::layout::TextRole;
use ratatui::style::{Color, Modifier, Style};

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

impl ThemeKind {
    /// Get the next theme in the cycle
    pub fn next(self) -> Self {
        match self {
            ThemeKind::Dark => ThemeKind::Light,
            ThemeKind::Light => ThemeKind::Dark,
        }
    }

    /// Get the theme configuration
    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
        }
    }
}

/// Resolved colors for one theme.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub scrim: Color,
    pub image_frame: Color,
    pub image_label: Color,
    pub heading: Color,
    pub subheading: Color,
    pub attribution: Color,
    pub body: Color,
    pub caption: Color,
    pub quote: Color,
    pub nav_chevron: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: Color::Black,
            scrim: Color::Rgb(20, 20, 20),
            image_frame: Color::DarkGray,
            image_label: Color::Gray,
            heading: Color::White,
            subheading: Color::Gray,
            attribution: Color::DarkGray,
            body: Color::White,
            caption: Color::Gray,
            quote: Color::White,
            nav_chevron: Color::White,
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::White,
            scrim: Color::Rgb(230, 230, 230),
            image_frame: Color::Gray,
            image_label: Color::DarkGray,
            heading: Color::Black,
            subheading: Color::DarkGray,
            attribution: Color::Gray,
            body: Color::Black,
            caption: Color::DarkGray,
            quote: Color::Black,
            nav_chevron: Color::Black,
        }
    }

    /// Style for a text role.
    pub fn text_style(&self, role: TextRole) -> Style {
        match role {
            TextRole::Heading => Style::default()
                .fg(self.heading)
                .add_modifier(Modifier::BOLD),
            TextRole::Subheading => Style::default().fg(self.subheading),
            TextRole::Attribution => Style::default()
                .fg(self.attribution)
                .add_modifier(Modifier::ITALIC),
            TextRole::Body => Style::default().fg(self.body),
            TextRole::Caption => Style::default().fg(self.caption),
            TextRole::Quote => Style::default()
                .fg(self.quote)
                .add_modifier(Modifier::ITALIC),
            TextRole::NavChevron => Style::default()
                .fg(self.nav_chevron)
                .add_modifier(Modifier::BOLD),
        }
    }
}
