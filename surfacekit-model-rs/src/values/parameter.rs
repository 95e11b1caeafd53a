use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::Cell;

use super::DEFAULT_MAX_VALUE;

/// Callback invoked with the new value after a change.
pub type ValueObserver = Box<dyn FnMut(i32)>;

/// A host value mapped onto a physical control.
///
/// Implementations clamp writes to `[0, max_value()]` themselves; callers may
/// pass out-of-range values and deltas.
pub trait Value {
    /// Label shown next to the value (send target, parameter name).
    fn name(&self) -> &str {
        ""
    }

    /// Host-formatted value text (e.g. `"-6.0 dB"`).
    fn display_text(&self) -> &str {
        ""
    }

    fn value(&self) -> i32;

    fn max_value(&self) -> i32;

    fn set_value(&mut self, value: i32);

    /// Apply a signed delta, clamped at the value's bounds.
    fn change_value(&mut self, delta: i32);

    /// Modulated value, `None` when the value is not modulated.
    fn modulated_value(&self) -> Option<i32> {
        None
    }

    /// Forward a knob touch to the host (automation touch mode).
    fn touch(&mut self, _touched: bool) {}

    /// Last touch state forwarded with [`Value::touch`].
    fn is_touched(&self) -> bool {
        false
    }

    fn subscribe(&mut self, observer: ValueObserver);
}

/// Decoding of modulation reports that use an in-band sentinel.
pub struct Modulation;

impl Modulation {
    /// Convert a sentinel-style report to `Option`.
    ///
    /// Some hosts report "not modulated" as `raw == max`. That collides with
    /// a value modulated exactly to its maximum; this helper keeps the
    /// sentinel reading and is the only place the convention is applied.
    pub fn from_sentinel(raw: i32, max: i32) -> Option<i32> {
        if raw == max || raw < 0 {
            None
        } else {
            Some(raw.min(max))
        }
    }
}

/// In-memory value with a clamped range and observers.
///
/// Hosts without their own value objects can store these directly in their
/// items; the tests use them as the stand-in host model.
pub struct Parameter {
    pub name: String,
    /// Host-formatted display text, updated by the host alongside the value.
    pub text: String,
    /// Current value, always within `[0, max_value]`.
    value: i32,
    max_value: i32,
    modulated: Option<i32>,
    touched: bool,
    observers: Vec<ValueObserver>,
}

impl core::fmt::Debug for Parameter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Parameter")
            .field("name", &self.name)
            .field("value", &self.value)
            .field("max_value", &self.max_value)
            .field("modulated", &self.modulated)
            .field("touched", &self.touched)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for Parameter {
    fn default() -> Self {
        Self::new("", DEFAULT_MAX_VALUE)
    }
}

impl Parameter {
    /// Create a parameter at 0. A negative `max_value` is treated as 0.
    pub fn new(name: &str, max_value: i32) -> Self {
        Self {
            name: String::from(name),
            text: String::new(),
            value: 0,
            max_value: max_value.max(0),
            modulated: None,
            touched: false,
            observers: Vec::new(),
        }
    }

    /// Builder-style initial value, clamped, without notifying observers.
    pub fn with_value(mut self, value: i32) -> Self {
        self.value = value.clamp(0, self.max_value);
        self
    }

    /// Set or clear the modulated value (host side).
    pub fn set_modulated(&mut self, modulated: Option<i32>) {
        self.modulated = modulated.map(|m| m.clamp(0, self.max_value));
    }

    fn store(&mut self, value: i32) {
        let clamped = value.clamp(0, self.max_value);
        if clamped == self.value {
            return;
        }
        self.value = clamped;
        for observer in self.observers.iter_mut() {
            observer(clamped);
        }
    }
}

impl Value for Parameter {
    fn name(&self) -> &str {
        &self.name
    }

    fn display_text(&self) -> &str {
        &self.text
    }

    fn value(&self) -> i32 {
        self.value
    }

    fn max_value(&self) -> i32 {
        self.max_value
    }

    fn set_value(&mut self, value: i32) {
        self.store(value);
    }

    fn change_value(&mut self, delta: i32) {
        self.store(self.value.saturating_add(delta));
    }

    fn modulated_value(&self) -> Option<i32> {
        self.modulated
    }

    fn touch(&mut self, touched: bool) {
        self.touched = touched;
    }

    fn is_touched(&self) -> bool {
        self.touched
    }

    fn subscribe(&mut self, observer: ValueObserver) {
        self.observers.push(observer);
    }
}

/// Shared "something changed" flag usable as a [`ValueObserver`].
///
/// Many values can feed one signal; the consumer drains it once per event
/// tick, which batches any number of changes into a single refresh.
#[derive(Debug, Clone, Default)]
pub struct ChangeSignal(Rc<Cell<bool>>);

impl ChangeSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observer that raises this signal.
    pub fn observer(&self) -> ValueObserver {
        let flag = Rc::clone(&self.0);
        Box::new(move |_| flag.set(true))
    }

    pub fn raise(&self) {
        self.0.set(true);
    }

    /// Read and clear the flag.
    pub fn take(&self) -> bool {
        self.0.replace(false)
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
