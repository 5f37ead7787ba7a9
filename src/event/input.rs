//! Pointer events for panel affordances, decoupled from crossterm.
//!
//! Controls only care about which button was pressed and which modifiers
//! were held (alt-click resets a property group). Crossterm events are
//! converted via `From` impls so the rest of the crate never depends on
//! crossterm directly.

use std::ops::{BitAnd, BitOr};

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

/// Modifier key bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(pub u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const SHIFT: Modifiers = Modifiers(1);
    pub const CTRL: Modifiers = Modifiers(2);
    pub const ALT: Modifiers = Modifiers(4);

    /// Check whether `self` contains all the bits in `other`.
    pub fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check whether no modifier bits are set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;
    fn bitor(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 | rhs.0)
    }
}

impl BitAnd for Modifiers {
    type Output = Modifiers;
    fn bitand(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 & rhs.0)
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(m: crossterm::event::KeyModifiers) -> Self {
        let mut out = Modifiers::NONE;
        if m.contains(crossterm::event::KeyModifiers::SHIFT) {
            out = out | Modifiers::SHIFT;
        }
        if m.contains(crossterm::event::KeyModifiers::CONTROL) {
            out = out | Modifiers::CTRL;
        }
        if m.contains(crossterm::event::KeyModifiers::ALT) {
            out = out | Modifiers::ALT;
        }
        out
    }
}

// ---------------------------------------------------------------------------
// PointerEvent
// ---------------------------------------------------------------------------

/// Pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// A click on a panel affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerEvent {
    pub button: PointerButton,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// A primary-button click with the given modifiers.
    pub fn click(modifiers: Modifiers) -> Self {
        Self {
            button: PointerButton::Primary,
            modifiers,
        }
    }

    /// Primary click with alt held.
    pub fn is_alt_click(&self) -> bool {
        self.button == PointerButton::Primary && self.modifiers.contains(Modifiers::ALT)
    }

    /// Convert a crossterm mouse event. Only button presses are clicks;
    /// moves, drags, releases and scrolls yield `None`.
    pub fn from_crossterm(event: crossterm::event::MouseEvent) -> Option<Self> {
        let crossterm::event::MouseEventKind::Down(button) = event.kind else {
            return None;
        };
        let button = match button {
            crossterm::event::MouseButton::Left => PointerButton::Primary,
            crossterm::event::MouseButton::Right => PointerButton::Secondary,
            crossterm::event::MouseButton::Middle => PointerButton::Middle,
        };
        Some(Self {
            button,
            modifiers: event.modifiers.into(),
        })
    }
}

// ===========================================================================
// Tests
// ===========================================================================
