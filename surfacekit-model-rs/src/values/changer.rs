use super::parameter::Value;

/// Raw knob values above this encode negative relative deltas.
pub const RELATIVE_MIDPOINT: i32 = 64;

/// Decode a relative knob tick into a signed delta.
///
/// The hardware sends `1..=64` for clockwise steps and `65..=127` for
/// counter-clockwise steps as two's complement of 128.
///
/// ```
/// use surfacekit::values::decode_relative;
///
/// assert_eq!(decode_relative(1), 1);
/// assert_eq!(decode_relative(65), -63);
/// assert_eq!(decode_relative(127), -1);
/// ```
pub fn decode_relative(raw: i32) -> i32 {
    if raw > RELATIVE_MIDPOINT {
        raw - 128
    } else {
        raw
    }
}

/// Turns knob input into writes on a [`Value`].
///
/// In slow mode (engaged while shift is held) relative deltas are reduced to
/// a single step in the turned direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ValueChanger {
    slow: bool,
}

impl ValueChanger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_slow(&mut self, slow: bool) {
        self.slow = slow;
    }

    pub fn is_slow(&self) -> bool {
        self.slow
    }

    /// Signed delta for a raw relative knob tick.
    pub fn calc_delta(&self, raw: i32) -> i32 {
        let delta = decode_relative(raw);
        if self.slow {
            delta.signum()
        } else {
            delta
        }
    }

    /// Apply a raw knob value to `value`.
    ///
    /// Absolute knobs write the value clamped to the target's own range with
    /// exactly one [`Value::set_value()`] call; relative knobs issue one
    /// [`Value::change_value()`] with the decoded delta. A zero delta is
    /// dropped.
    pub fn apply(&self, value: &mut dyn Value, raw: i32, absolute: bool) {
        if absolute {
            value.set_value(raw.clamp(0, value.max_value()));
            return;
        }
        let delta = self.calc_delta(raw);
        if delta != 0 {
            value.change_value(delta);
        }
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
