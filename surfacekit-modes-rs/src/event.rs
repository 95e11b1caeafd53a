//! Logical input events delivered by the transport.
//!
//! The transport decodes its wire protocol into [`InputEvent`]s; everything
//! after that point is independent of how the bytes reached the host.
//! [`ButtonTracker`] adds the one piece of timing the surface needs:
//! synthesizing [`ButtonEvent::Long`] for buttons held past a threshold.

use alloc::vec::Vec;

/// Phase of a button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    Pressed,
    Released,
    /// Button still held after the long-press duration.
    Long,
}

/// Group of physical controls a button belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SurfaceRegion {
    /// Buttons above the display, one per column.
    FirstRow,
    /// Buttons below the display, one per column.
    SecondRow,
    Shift,
    /// Dedicated mode trigger buttons.
    ModeSelect,
    /// Cursor buttons; see [`NavButton`].
    Navigation,
}

/// Index of the buttons in [`SurfaceRegion::Navigation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NavButton {
    PreviousItem,
    NextItem,
    PreviousPage,
    NextPage,
}

impl NavButton {
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(NavButton::PreviousItem),
            1 => Some(NavButton::NextItem),
            2 => Some(NavButton::PreviousPage),
            3 => Some(NavButton::NextPage),
            _ => None,
        }
    }
}

/// One discrete message from the hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    Button {
        region: SurfaceRegion,
        index: usize,
        kind: ButtonEvent,
    },
    /// Knob tick. Absolute position or relative tick depending on the mode.
    Knob { index: usize, value: i32 },
    KnobTouch { index: usize, touched: bool },
}

// ── Long-press synthesis ─────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
struct HeldButton {
    region: SurfaceRegion,
    index: usize,
    pressed_at_ms: u64,
    long_sent: bool,
}

/// Tracks held buttons and synthesizes exactly one `Long` per hold.
///
/// A `Long` delivered by the transport counts as that hold's long press and
/// suppresses the synthetic one. `Released` is always passed through.
#[derive(Debug, Clone)]
pub struct ButtonTracker {
    long_press_ms: u64,
    held: Vec<HeldButton>,
}

impl ButtonTracker {
    pub fn new(long_press_ms: u64) -> Self {
        Self {
            long_press_ms,
            held: Vec::new(),
        }
    }

    pub fn long_press_ms(&self) -> u64 {
        self.long_press_ms
    }

    fn position(&self, region: SurfaceRegion, index: usize) -> Option<usize> {
        self.held
            .iter()
            .position(|b| b.region == region && b.index == index)
    }

    /// Record a transport button event.
    ///
    /// Returns the event to dispatch, or `None` if it duplicates a `Long`
    /// already delivered for this hold.
    pub fn on_button(
        &mut self,
        region: SurfaceRegion,
        index: usize,
        kind: ButtonEvent,
        now_ms: u64,
    ) -> Option<ButtonEvent> {
        match kind {
            ButtonEvent::Pressed => {
                let held = HeldButton {
                    region,
                    index,
                    pressed_at_ms: now_ms,
                    long_sent: false,
                };
                match self.position(region, index) {
                    Some(pos) => self.held[pos] = held,
                    None => self.held.push(held),
                }
                Some(ButtonEvent::Pressed)
            }
            ButtonEvent::Released => {
                if let Some(pos) = self.position(region, index) {
                    self.held.swap_remove(pos);
                }
                Some(ButtonEvent::Released)
            }
            ButtonEvent::Long => match self.position(region, index) {
                Some(pos) if self.held[pos].long_sent => None,
                Some(pos) => {
                    self.held[pos].long_sent = true;
                    Some(ButtonEvent::Long)
                }
                None => Some(ButtonEvent::Long),
            },
        }
    }

    /// Buttons whose hold crossed the long-press duration since the last
    /// poll, in press order.
    pub fn poll(&mut self, now_ms: u64) -> Vec<(SurfaceRegion, usize)> {
        let threshold = self.long_press_ms;
        let mut due: Vec<&mut HeldButton> = self
            .held
            .iter_mut()
            .filter(|b| !b.long_sent && now_ms.saturating_sub(b.pressed_at_ms) >= threshold)
            .collect();
        due.sort_by_key(|b| b.pressed_at_ms);
        due.into_iter()
            .map(|b| {
                b.long_sent = true;
                (b.region, b.index)
            })
            .collect()
    }

    /// Returns `true` while the button is down.
    pub fn is_held(&self, region: SurfaceRegion, index: usize) -> bool {
        self.position(region, index).is_some()
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
