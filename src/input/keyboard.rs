//! Keyboard state tracking: crossterm key events in, `InputFrame` out.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::{InputFrame, KeySignal};

/// Keys the engine cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Key {
    Escape,
    Enter,
    Up,
    Down,
    Left,
    Right,
    Space,
}

const KEY_COUNT: usize = 7;

fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('k') => Some(Key::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('j') => Some(Key::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('h') => Some(Key::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('l') => Some(Key::Right),
        KeyCode::Char(' ') => Some(Key::Space),
        _ => None,
    }
}

/// Check if a key event should quit the program entirely.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Pressed-key bookkeeping between frames.
///
/// Terminals without release reporting deliver auto-repeat as extra
/// Press events; those are folded into the held level rather than new
/// edges, so the engine's own throttle stays in charge of repeats.
#[derive(Debug, Default)]
pub struct Keyboard {
    pressed: [bool; KEY_COUNT],
    edges: [bool; KEY_COUNT],
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one crossterm key event.
    pub fn key_event(&mut self, event: KeyEvent) {
        let Some(key) = map_key(event.code) else {
            return;
        };
        let idx = key as usize;
        match event.kind {
            KeyEventKind::Press => {
                if !self.pressed[idx] {
                    self.edges[idx] = true;
                }
                self.pressed[idx] = true;
            }
            KeyEventKind::Repeat => {
                self.pressed[idx] = true;
            }
            KeyEventKind::Release => {
                self.pressed[idx] = false;
            }
        }
    }

    /// Emit the signals for one simulated frame and clear the edges.
    pub fn frame(&mut self) -> InputFrame {
        let signal = |key: Key| KeySignal {
            pressed: self.edges[key as usize],
            held: self.pressed[key as usize],
        };

        let frame = InputFrame {
            escape: self.edges[Key::Escape as usize],
            enter: self.edges[Key::Enter as usize],
            up: self.edges[Key::Up as usize],
            space: self.edges[Key::Space as usize],
            left: signal(Key::Left),
            right: signal(Key::Right),
            down: signal(Key::Down),
        };

        self.edges = [false; KEY_COUNT];
        frame
    }
}
