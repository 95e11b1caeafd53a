//! The narrow value interface the core reads and writes host state through.
//!
//! All values are pre-normalised by the host to `[0, max_value]`; the core
//! never assumes units. Knob input is turned into writes by a
//! [`ValueChanger`]:
//!
//! ```text
//! absolute knob:  raw ──clamp(0, max)──▶ set_value()
//! relative knob:  raw ──decode(±)──────▶ change_value(delta)
//! ```
//!
//! # Change notification
//!
//! Hosts register observers with [`Value::subscribe()`]. The in-memory
//! [`Parameter`] calls every observer once per *effective* change; writes
//! that clamp to the current value are silent. [`ChangeSignal`] is a ready
//! observer that just raises a flag to be consumed on the next event tick.

mod changer;
mod parameter;

pub use changer::{decode_relative, ValueChanger, RELATIVE_MIDPOINT};
pub use parameter::{ChangeSignal, Modulation, Parameter, Value, ValueObserver};

/// Default upper bound of normalised values (14-bit resolution).
pub const DEFAULT_MAX_VALUE: i32 = 16383;
