use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use std::collections::HashSet;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Space,
    E,
    Z,
    F3,
    Escape,
}

impl Key {
    /// Maps an SDL2 keycode to a game key, ignoring keys the game doesn't use
    pub fn from_keycode(keycode: Keycode) -> Option<Key> {
        match keycode {
            Keycode::Up => Some(Key::Up),
            Keycode::Down => Some(Key::Down),
            Keycode::Left => Some(Key::Left),
            Keycode::Right => Some(Key::Right),
            Keycode::Return | Keycode::KpEnter => Some(Key::Enter),
            Keycode::Space => Some(Key::Space),
            Keycode::E => Some(Key::E),
            Keycode::Z => Some(Key::Z),
            Keycode::F3 => Some(Key::F3),
            Keycode::Escape => Some(Key::Escape),
            _ => None,
        }
    }
}

/// Keyboard state for one frame
///
/// Two query modes are kept apart: `is_held` answers "is the key down right
/// now" and drives movement, `just_pressed` answers "did the key go down
/// this frame" and drives menus, interaction and toggles.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    held: HashSet<Key>,
    pressed: HashSet<Key>,
    quit_requested: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget last frame's edge events; held keys stay held
    pub fn begin_frame(&mut self) {
        self.pressed.clear();
    }

    pub fn key_down(&mut self, key: Key) {
        if self.held.insert(key) {
            self.pressed.insert(key);
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn just_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    /// True once the window has been asked to close
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}

/// Translates SDL2 events into [`InputState`] updates
pub struct InputSystem {
    state: InputState,
}

impl InputSystem {
    pub fn new() -> Self {
        InputSystem {
            state: InputState::new(),
        }
    }

    /// Drains pending SDL2 events and returns the state for this frame
    pub fn poll_events(&mut self, event_pump: &mut EventPump) -> &InputState {
        self.state.begin_frame();
        for event in event_pump.poll_iter() {
            self.handle_event(&event);
        }
        &self.state
    }

    fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Quit { .. } => self.state.request_quit(),
            Event::KeyDown {
                keycode: Some(keycode),
                repeat: false,
                ..
            } => {
                if let Some(key) = Key::from_keycode(*keycode) {
                    self.state.key_down(key);
                }
            }
            Event::KeyUp {
                keycode: Some(keycode),
                ..
            } => {
                if let Some(key) = Key::from_keycode(*keycode) {
                    self.state.key_up(key);
                }
            }
            _ => {}
        }
    }
}
