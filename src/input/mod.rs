//! Pointer, wheel, and keyboard input handling for the canvas.
//!
//! This module implements the interaction controller: it translates raw
//! host events into store mutations according to the gesture state machine.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`InputState`) to track
//! the current gesture. Exactly one gesture is active at a time; the enum
//! makes impossible combinations unrepresentable.
//!
//! ## Modules
//!
//! - `state` - Gesture state machine enum and helper methods
//! - `pointer_down` - Pointer down handling (connect/drag/marquee/pan entry)
//! - `pointer_move` - Pointer move handling (per-state updates, hover)
//! - `pointer_up` - Pointer up handling (finalize marquee and connect)
//! - `wheel` - Wheel handling (zoom-to-pointer, pan)
//! - `keyboard` - Keyboard shortcuts (delete, escape, zoom keys)

mod keyboard;
mod pointer_down;
mod pointer_move;
mod pointer_up;
mod state;
mod wheel;

pub use keyboard::Key;
pub use state::InputState;
pub use wheel::WheelDelta;

/// Modifier keys accompanying a pointer or wheel event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Connect modifier: pointer-down on a node starts an edge drag
    pub alt: bool,
    /// Marquee modifier: pointer-down on empty canvas starts a marquee
    pub shift: bool,
    /// Zoom modifier: wheel zooms instead of panning
    pub control: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        alt: false,
        shift: false,
        control: false,
    };

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Self::NONE
        }
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::NONE
        }
    }

    pub fn control() -> Self {
        Self {
            control: true,
            ..Self::NONE
        }
    }
}
