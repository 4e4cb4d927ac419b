//! Keyboard input for the flight controls.
//!
//! Physical keys are tracked as they are pressed and released; once per tick the
//! game takes a [`Controls`] snapshot, which is what the simulation reads. Input
//! is level-triggered: only "held right now" is observable, never edges.

use std::collections::{HashMap, HashSet};

/// Logical flight controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Throttle,
    Brake,
    RollLeft,
    RollRight,
    PitchUp,
    PitchDown,
}

impl Control {
    pub const ALL: [Control; 6] = [
        Control::Throttle,
        Control::Brake,
        Control::RollLeft,
        Control::RollRight,
        Control::PitchUp,
        Control::PitchDown,
    ];

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Which controls are held during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    held: u8,
}

impl Controls {
    /// Nothing held.
    pub const NONE: Self = Self { held: 0 };

    /// Snapshot with exactly the given controls held.
    pub fn held(controls: &[Control]) -> Self {
        controls.iter().fold(Self::NONE, |acc, &c| acc.with(c))
    }

    /// Copy of this snapshot with `control` also held.
    pub fn with(mut self, control: Control) -> Self {
        self.held |= control.bit();
        self
    }

    pub fn is_held(&self, control: Control) -> bool {
        self.held & control.bit() != 0
    }

    pub fn any(&self) -> bool {
        self.held != 0
    }
}

/// Physical key to control mapping. Several keys may drive the same control.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    map: HashMap<KeyCode, Control>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings.bind(KeyCode::KeyW, Control::Throttle);
        bindings.bind(KeyCode::KeyS, Control::Brake);
        bindings.bind(KeyCode::KeyA, Control::RollLeft);
        bindings.bind(KeyCode::KeyD, Control::RollRight);
        bindings.bind(KeyCode::Space, Control::PitchUp);
        bindings.bind(KeyCode::ShiftLeft, Control::PitchDown);
        bindings.bind(KeyCode::ShiftRight, Control::PitchDown);
        bindings
    }
}

impl KeyBindings {
    /// Bindings with no keys mapped.
    pub fn empty() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Map `key` to `control`, replacing any previous mapping for that key.
    pub fn bind(&mut self, key: KeyCode, control: Control) {
        if let Some(previous) = self.map.insert(key, control) {
            if previous != control {
                log::debug!("Rebound {:?} from {:?} to {:?}", key, previous, control);
            }
        }
    }

    pub fn control_for(&self, key: KeyCode) -> Option<Control> {
        self.map.get(&key).copied()
    }
}

/// Keys currently held, fed by press/release notifications.
#[derive(Debug, Default)]
pub struct InputState {
    bindings: KeyBindings,
    /// Bound keys currently held down.
    keys_held: HashSet<KeyCode>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            keys_held: HashSet::new(),
        }
    }

    /// Process a keyboard event. Keys without a binding are ignored.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) {
        if self.bindings.control_for(key).is_none() {
            return;
        }
        match state {
            ElementState::Pressed => {
                self.keys_held.insert(key);
            }
            ElementState::Released => {
                self.keys_held.remove(&key);
            }
        }
    }

    /// Release everything, e.g. when the window loses focus and releases would be missed.
    pub fn clear(&mut self) {
        self.keys_held.clear();
    }

    /// Check if a key is currently held.
    pub fn is_key_held(&self, key: KeyCode) -> bool {
        self.keys_held.contains(&key)
    }

    /// A control is held while any key bound to it is held.
    pub fn is_held(&self, control: Control) -> bool {
        self.snapshot().is_held(control)
    }

    /// Read the current control state for one tick.
    pub fn snapshot(&self) -> Controls {
        self.keys_held
            .iter()
            .filter_map(|&key| self.bindings.control_for(key))
            .fold(Controls::NONE, Controls::with)
    }
}

// Re-export for convenience
pub use winit::event::ElementState;
pub use winit::keyboard::KeyCode;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_cover_every_control() {
        let bindings = KeyBindings::default();
        for control in Control::ALL {
            let bound = [
                KeyCode::KeyW,
                KeyCode::KeyS,
                KeyCode::KeyA,
                KeyCode::KeyD,
                KeyCode::Space,
                KeyCode::ShiftLeft,
            ]
            .iter()
            .any(|&k| bindings.control_for(k) == Some(control));
            assert!(bound, "{:?} has no default key", control);
        }
    }

    #[test]
    fn snapshot_reflects_held_keys_only() {
        let mut input = InputState::new();
        input.process_keyboard(KeyCode::KeyW, ElementState::Pressed);
        input.process_keyboard(KeyCode::KeyA, ElementState::Pressed);
        input.process_keyboard(KeyCode::KeyA, ElementState::Released);

        let controls = input.snapshot();
        assert!(controls.is_held(Control::Throttle));
        assert!(!controls.is_held(Control::RollLeft));
        assert_eq!(controls, Controls::held(&[Control::Throttle]));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut input = InputState::new();
        input.process_keyboard(KeyCode::KeyQ, ElementState::Pressed);
        assert!(!input.is_key_held(KeyCode::KeyQ));
        assert!(!input.snapshot().any());
    }

    #[test]
    fn either_shift_holds_pitch_down() {
        let mut input = InputState::new();
        input.process_keyboard(KeyCode::ShiftLeft, ElementState::Pressed);
        input.process_keyboard(KeyCode::ShiftRight, ElementState::Pressed);
        input.process_keyboard(KeyCode::ShiftLeft, ElementState::Released);
        assert!(input.is_held(Control::PitchDown));
        input.process_keyboard(KeyCode::ShiftRight, ElementState::Released);
        assert!(!input.is_held(Control::PitchDown));
    }

    #[test]
    fn repeated_press_is_still_one_held_key() {
        let mut input = InputState::new();
        input.process_keyboard(KeyCode::Space, ElementState::Pressed);
        input.process_keyboard(KeyCode::Space, ElementState::Pressed);
        input.process_keyboard(KeyCode::Space, ElementState::Released);
        assert!(!input.is_held(Control::PitchUp));
    }

    #[test]
    fn snapshot_is_detached_from_later_events() {
        let mut input = InputState::new();
        input.process_keyboard(KeyCode::KeyS, ElementState::Pressed);
        let snap = input.snapshot();
        input.process_keyboard(KeyCode::KeyS, ElementState::Released);
        assert!(snap.is_held(Control::Brake));
        assert!(!input.snapshot().is_held(Control::Brake));
    }

    #[test]
    fn custom_bindings_replace_defaults() {
        let mut bindings = KeyBindings::empty();
        bindings.bind(KeyCode::ArrowUp, Control::Throttle);
        let mut input = InputState::with_bindings(bindings);
        input.process_keyboard(KeyCode::KeyW, ElementState::Pressed);
        input.process_keyboard(KeyCode::ArrowUp, ElementState::Pressed);
        assert_eq!(input.snapshot(), Controls::held(&[Control::Throttle]));
        input.clear();
        assert!(!input.snapshot().any());
    }
}
