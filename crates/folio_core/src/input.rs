//! Input event types for keyboard and pointer

use crate::geometry::Vec2;

/// Keyboard event
#[derive(Clone, Debug)]
pub struct KeyboardEvent {
    /// The key that was pressed or released
    pub key: Key,
    /// Whether the key was pressed or released
    pub state: KeyState,
}

impl KeyboardEvent {
    /// Create a key-pressed event
    pub fn pressed(key: Key) -> Self {
        Self {
            key,
            state: KeyState::Pressed,
        }
    }
}

/// Key press/release state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyState {
    /// Key was pressed
    Pressed,
    /// Key was released
    Released,
}

/// Keys the interaction layer responds to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    // Special keys
    Space,
    Enter,
    Escape,
    Backspace,
    Tab,

    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Navigation
    Home,
    End,
    PageUp,
    PageDown,

    /// Any key the layer does not handle
    Other,
}

/// Pointer buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary button
    Primary,
    /// Secondary button
    Secondary,
    /// Middle button
    Middle,
}

/// A sample from the pointer-intent sampler
///
/// The sampler itself is an external collaborator; the parallax engine only
/// consumes its velocity output. Velocity is in window units per millisecond
/// and is recreated each frame, never stored.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerSample {
    /// Pointer position in window coordinates
    pub position: Vec2,
    /// Smoothed pointer velocity
    pub velocity: Vec2,
}

impl PointerSample {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self { position, velocity }
    }
}
