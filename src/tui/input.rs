// Input handling - raw events to logical navigation signals
//
// Two layers live here:
// - `InputMap`: the single localized platform dependency. It translates a
//   raw crossterm event into one of the two logical deck signals, and is
//   swappable (keyboard map, mouse edge-click map) without touching
//   advance/retreat semantics.
// - `InputHandler`: per-key press/repeat state with debouncing, for
//   terminals that never deliver release events.

use crate::deck::NavSignal;
use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Translate a raw input event into a logical navigation signal.
/// Everything that doesn't map to a signal is ignored without error.
pub trait InputMap {
    fn interpret(&self, event: &Event) -> Option<NavSignal>;
}

/// Default keyboard mapping: arrow keys step through the deck, with the
/// usual vim aliases. All other keys are no-ops for the deck.
#[derive(Debug, Default)]
pub struct ArrowKeyMap;

impl InputMap for ArrowKeyMap {
    fn interpret(&self, event: &Event) -> Option<NavSignal> {
        let Event::Key(key) = event else {
            return None;
        };
        if key.kind == KeyEventKind::Release {
            return None;
        }
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => Some(NavSignal::Retreat),
            KeyCode::Right | KeyCode::Char('l') => Some(NavSignal::Advance),
            _ => None,
        }
    }
}

/// Width of the clickable edge columns, matching the drawn chevrons.
const EDGE_WIDTH: u16 = 4;

/// Mouse mapping: clicks on the left/right screen edge activate the
/// previous/next triggers. Holds the current terminal width so edge
/// hit-testing stays correct across resizes.
#[derive(Debug)]
pub struct EdgeClickMap {
    pub width: u16,
}

impl EdgeClickMap {
    pub fn new(width: u16) -> Self {
        Self { width }
    }
}

impl InputMap for EdgeClickMap {
    fn interpret(&self, event: &Event) -> Option<NavSignal> {
        let Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            ..
        }) = event
        else {
            return None;
        };
        if *column < EDGE_WIDTH {
            Some(NavSignal::Retreat)
        } else if self.width >= EDGE_WIDTH && *column >= self.width - EDGE_WIDTH {
            Some(NavSignal::Advance)
        } else {
            None
        }
    }
}

/// Defines how a key should behave when pressed/held
#[derive(Debug, Clone, Copy)]
pub enum KeyBehavior {
    /// Trigger only on state change (press, then nothing until release)
    StateChange,

    /// Trigger on press, then repeat after initial delay
    Repeatable {
        initial_delay: Duration,
        repeat_interval: Duration,
    },
}

impl KeyBehavior {
    /// Standard navigation key behavior (like arrow keys)
    pub fn navigation() -> Self {
        Self::Repeatable {
            initial_delay: Duration::from_millis(500),
            repeat_interval: Duration::from_millis(50),
        }
    }
}

/// Tracks the state of a single key
#[derive(Debug)]
struct KeyState {
    is_pressed: bool,
    press_started: Option<Instant>,
    last_triggered: Option<Instant>,
}

impl KeyState {
    fn new() -> Self {
        Self {
            is_pressed: false,
            press_started: None,
            last_triggered: None,
        }
    }

    fn release(&mut self) {
        self.is_pressed = false;
        self.press_started = None;
        self.last_triggered = None;
    }
}

/// Debounce window for state-change keys on terminals without release
/// events.
const STATE_CHANGE_DEBOUNCE: Duration = Duration::from_millis(150);

/// Input handler that manages key behaviors
pub struct InputHandler {
    key_states: HashMap<KeyCode, KeyState>,
    key_behaviors: HashMap<KeyCode, KeyBehavior>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            key_states: HashMap::new(),
            key_behaviors: HashMap::new(),
        }
    }

    /// Configure a key's behavior
    pub fn configure_key(&mut self, key: KeyCode, behavior: KeyBehavior) {
        self.key_behaviors.insert(key, behavior);
    }

    /// Configure multiple keys with the same behavior
    pub fn configure_keys(&mut self, keys: &[KeyCode], behavior: KeyBehavior) {
        for key in keys {
            self.configure_key(*key, behavior);
        }
    }

    /// Handle a key press event.
    /// Returns true if the action should be triggered.
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        let now = Instant::now();
        let behavior = self
            .key_behaviors
            .get(&key)
            .copied()
            .unwrap_or(KeyBehavior::StateChange);

        let state = self.key_states.entry(key).or_insert_with(KeyState::new);

        if state.is_pressed {
            match behavior {
                KeyBehavior::StateChange => {
                    // Only trigger again once the debounce window passed
                    if let Some(last) = state.last_triggered {
                        if now.duration_since(last) >= STATE_CHANGE_DEBOUNCE {
                            state.last_triggered = Some(now);
                            return true;
                        }
                    }
                    false
                }
                KeyBehavior::Repeatable {
                    initial_delay,
                    repeat_interval,
                } => {
                    if let (Some(press_start), Some(last_trigger)) =
                        (state.press_started, state.last_triggered)
                    {
                        let time_since_press = now.duration_since(press_start);
                        let time_since_last = now.duration_since(last_trigger);

                        // After initial delay, repeat at interval
                        if time_since_press >= initial_delay && time_since_last >= repeat_interval {
                            state.last_triggered = Some(now);
                            return true;
                        }
                    }
                    false
                }
            }
        } else {
            // New key press - always trigger
            state.is_pressed = true;
            state.press_started = Some(now);
            state.last_triggered = Some(now);
            true
        }
    }

    /// Handle a key release event
    pub fn handle_key_release(&mut self, key: KeyCode) {
        if let Some(state) = self.key_states.get_mut(&key) {
            state.release();
        }
    }

    /// Configuration used by the deck: navigation keys repeat while held,
    /// quit keys trigger once per press.
    pub fn with_default_config() -> Self {
        let mut handler = Self::new();

        handler.configure_keys(
            &[
                KeyCode::Left,
                KeyCode::Right,
                KeyCode::Char('h'),
                KeyCode::Char('l'),
            ],
            KeyBehavior::navigation(),
        );

        handler.configure_keys(
            &[KeyCode::Esc, KeyCode::Char('q'), KeyCode::Char('t')],
            KeyBehavior::StateChange,
        );

        handler
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::with_default_config()
    }
}
