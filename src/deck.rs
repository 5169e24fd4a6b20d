// Deck controller - position cursor over the slide catalog
//
// Owns the single piece of mutable state in the whole application: which
// slide is currently shown. Navigation is a fixed-size ring, so `advance`
// and `retreat` are total functions - there is no reachable invalid
// position once the deck is constructed.

use crate::catalog::{Catalog, Slide};
use thiserror::Error;

/// The two logical navigation signals the deck understands. Raw input
/// (keyboard, mouse, anything else) is translated into these by an
/// `InputMap`; everything not mapping to one of them is ignored upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSignal {
    /// Step backward one slide, wrapping from the first to the last.
    Retreat,
    /// Step forward one slide, wrapping from the last to the first.
    Advance,
}

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("deck requires at least one slide")]
    EmptyCatalog,
}

/// The fixed slide sequence plus the current-position cursor.
#[derive(Debug)]
pub struct Deck {
    catalog: Catalog,
    position: usize,
}

impl Deck {
    /// Build a deck over a validated catalog, starting at slide 0.
    /// An empty catalog is the one construction failure: navigation is
    /// undefined without at least one slide.
    pub fn new(catalog: Catalog) -> Result<Self, DeckError> {
        if catalog.is_empty() {
            return Err(DeckError::EmptyCatalog);
        }
        Ok(Self {
            catalog,
            position: 0,
        })
    }

    /// Step forward, wrapping from the last slide back to the first.
    pub fn advance(&mut self) {
        self.position = (self.position + 1) % self.catalog.len();
    }

    /// Step backward, wrapping from the first slide to the last.
    pub fn retreat(&mut self) {
        let n = self.catalog.len();
        self.position = (self.position + n - 1) % n;
    }

    /// Apply one logical navigation signal.
    pub fn apply(&mut self, signal: NavSignal) {
        match signal {
            NavSignal::Retreat => self.retreat(),
            NavSignal::Advance => self.advance(),
        }
    }

    /// The slide at the current position. Pure read.
    pub fn current_slide(&self) -> &Slide {
        // Position is maintained in [0, len) by construction.
        &self.catalog.slides()[self.position]
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_slide(label: &str) -> Slide {
        Slide::FullText {
            text: label.to_string(),
        }
    }

    fn deck_of(n: usize) -> Deck {
        let slides = (0..n).map(|i| text_slide(&format!("slide {i}"))).collect();
        Deck::new(Catalog::from_slides(slides)).unwrap()
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let err = Deck::new(Catalog::from_slides(Vec::new())).unwrap_err();
        assert!(matches!(err, DeckError::EmptyCatalog));
    }

    #[test]
    fn starts_at_position_zero() {
        let deck = deck_of(4);
        assert_eq!(deck.position(), 0);
    }

    #[test]
    fn advance_wraps_at_the_end() {
        let mut deck = deck_of(3);
        deck.advance();
        deck.advance();
        assert_eq!(deck.position(), 2);
        deck.advance();
        assert_eq!(deck.position(), 0);
    }

    #[test]
    fn retreat_wraps_at_the_start() {
        let mut deck = deck_of(3);
        deck.retreat();
        assert_eq!(deck.position(), 2);
    }

    #[test]
    fn n_advances_return_to_start_for_any_origin() {
        for n in 1..=6 {
            for start in 0..n {
                let mut deck = deck_of(n);
                for _ in 0..start {
                    deck.advance();
                }
                assert_eq!(deck.position(), start);
                for _ in 0..n {
                    deck.advance();
                }
                assert_eq!(deck.position(), start, "cycle broken for n={n} start={start}");
            }
        }
    }

    #[test]
    fn retreat_undoes_advance_and_vice_versa() {
        for n in 1..=5 {
            for start in 0..n {
                let mut deck = deck_of(n);
                for _ in 0..start {
                    deck.advance();
                }
                deck.advance();
                deck.retreat();
                assert_eq!(deck.position(), start);
                deck.retreat();
                deck.advance();
                assert_eq!(deck.position(), start);
            }
        }
    }

    #[test]
    fn current_slide_tracks_k_advances() {
        let n = 4;
        let mut deck = deck_of(n);
        for k in 1..=10 {
            deck.advance();
            match deck.current_slide() {
                Slide::FullText { text } => {
                    assert_eq!(text, &format!("slide {}", k % n));
                }
                other => panic!("unexpected slide {other:?}"),
            }
        }
    }

    #[test]
    fn three_slide_walkthrough() {
        // Catalog of [title, fullText, imageCaption]; three advances visit
        // 1, 2, then wrap to 0, landing back on the title slide.
        let slides = vec![
            Slide::Title {
                title: "Opening".to_string(),
                subtitle: None,
                author: None,
                background_image: None,
            },
            text_slide("body"),
            Slide::ImageCaption {
                image: "/images/a.png".to_string(),
                caption: None,
            },
        ];
        let mut deck = Deck::new(Catalog::from_slides(slides)).unwrap();

        let mut visited = Vec::new();
        for _ in 0..3 {
            deck.advance();
            visited.push(deck.position());
        }
        assert_eq!(visited, vec![1, 2, 0]);
        assert!(matches!(deck.current_slide(), Slide::Title { .. }));
    }

    #[test]
    fn single_slide_deck_never_moves() {
        let mut deck = deck_of(1);
        for _ in 0..7 {
            deck.advance();
            assert_eq!(deck.position(), 0);
            deck.retreat();
            assert_eq!(deck.position(), 0);
        }
    }

    #[test]
    fn signals_map_to_operations() {
        let mut deck = deck_of(3);
        deck.apply(NavSignal::Advance);
        assert_eq!(deck.position(), 1);
        deck.apply(NavSignal::Retreat);
        assert_eq!(deck.position(), 0);
        deck.apply(NavSignal::Retreat);
        assert_eq!(deck.position(), 2);
    }
}
