// TUI application state
//
// Owns the deck and the small amount of shell state around it (quit flag,
// theme, input machinery). Raw events come in through `handle_event`; the
// deck only ever sees the two logical navigation signals.

use super::input::{ArrowKeyMap, EdgeClickMap, InputHandler, InputMap};
use crate::catalog::Slide;
use crate::deck::Deck;
use crate::layout::LayoutNode;
use crate::render;
use crate::theme::ThemeKind;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use tracing::debug;

/// Main application state for the TUI
pub struct App {
    /// The deck being presented. Its position cursor is the only state
    /// mutated during navigation.
    pub deck: Deck,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Current color theme
    pub theme: ThemeKind,

    /// Input handler for flexible key behavior (repeat, debounce)
    input_handler: InputHandler,

    /// Keyboard signal mapping (swappable)
    key_map: Box<dyn InputMap + Send>,

    /// Mouse edge-click signal mapping; tracks terminal width for
    /// hit-testing the right-edge trigger
    click_map: EdgeClickMap,
}

impl App {
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            should_quit: false,
            theme: ThemeKind::default(),
            input_handler: InputHandler::default(),
            key_map: Box::new(ArrowKeyMap),
            click_map: EdgeClickMap::new(80),
        }
    }

    /// Swap the keyboard mapping. Navigation semantics are untouched -
    /// only the raw-event translation changes.
    #[allow(dead_code)]
    pub fn set_key_map(&mut self, map: Box<dyn InputMap + Send>) {
        self.key_map = map;
    }

    /// Keep the mouse map's notion of the terminal width current.
    pub fn set_viewport_width(&mut self, width: u16) {
        self.click_map.width = width;
    }

    /// The slide currently on screen.
    pub fn current_slide(&self) -> &Slide {
        self.deck.current_slide()
    }

    /// Layout description for the current slide, re-evaluated on demand.
    pub fn current_layout(&self) -> LayoutNode {
        render::render(self.deck.current_slide())
    }

    /// Cycle to the next theme
    pub fn next_theme(&mut self) {
        self.theme = self.theme.next();
    }

    /// Route one raw input event. Quit and theme keys are shell-level;
    /// everything else goes through the input maps, and events mapping to
    /// nothing are ignored.
    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) => {
                if key.kind == KeyEventKind::Release {
                    self.input_handler.handle_key_release(key.code);
                    return;
                }

                // Shell keys first: quit and theme cycling.
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        if self.input_handler.handle_key_press(key.code) {
                            self.should_quit = true;
                        }
                        return;
                    }
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        self.should_quit = true;
                        return;
                    }
                    KeyCode::Char('t') => {
                        if self.input_handler.handle_key_press(key.code) {
                            self.next_theme();
                        }
                        return;
                    }
                    _ => {}
                }

                if let Some(signal) = self.key_map.interpret(event) {
                    if self.input_handler.handle_key_press(key.code) {
                        self.deck.apply(signal);
                        debug!(?signal, position = self.deck.position(), "navigated");
                    }
                }
            }
            Event::Mouse(_) => {
                if let Some(signal) = self.click_map.interpret(event) {
                    self.deck.apply(signal);
                    debug!(?signal, position = self.deck.position(), "navigated via click");
                }
            }
            Event::Resize(width, _) => {
                self.set_viewport_width(*width);
            }
            _ => {}
        }
    }
}
