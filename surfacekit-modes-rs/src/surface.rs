//! The control surface: event dispatch, shift handling and display refresh.
//!
//! [`ControlSurface`] is the single entry point the transport talks to. It
//! owns the [`ModeManager`], the surface flags, the long-press tracker and
//! the [`GridModel`] the display is drawn from. The host model is passed in
//! on every call and only borrowed for its duration.
//!
//! ```text
//! InputEvent ──handle_event──▶ ModeManager ──▶ Mode ──▶ Value writes
//!      tick ──────────────────▶ long presses + refresh_display
//!                                   │
//!                                   ▼
//!                       GridModel ──notify──▶ Compositor
//! ```

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use surfacekit::model::SurfaceModel;
use surfacekit::values::{ChangeSignal, Value};
use surfacekit_display::{GridChangeListener, GridModel};

use crate::error::ModeError;
use crate::event::{ButtonEvent, ButtonTracker, InputEvent, NavButton, SurfaceRegion};
use crate::manager::ModeManager;
use crate::mode::{ButtonColor, ButtonRow, SurfaceContext, SurfaceState};
use crate::modes::{SendMode, DEVICE, PAN, TRACK_SELECT, VOLUME};

// ── Configuration ────────────────────────────────────────────────────────

/// Binds one mode-select button to a mode name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeTrigger {
    pub button: usize,
    pub mode: String,
}

impl ModeTrigger {
    pub fn new(button: usize, mode: &str) -> Self {
        Self {
            button,
            mode: String::from(mode),
        }
    }
}

/// Tunables of a [`ControlSurface`].
///
/// [`SurfaceConfig::default()`] describes eight knobs, a 400 ms long press,
/// volume as the start mode and track selection as the shift overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceConfig {
    /// Number of knobs and of buttons per row. Default: 8.
    pub knob_count: usize,
    /// Hold time after which a `Long` event is synthesized. Default: 400.
    pub long_press_ms: u64,
    /// Mode entered by [`ControlSurface::start`].
    pub default_mode: String,
    /// Overlay pushed while shift is held; `None` disables it.
    pub shift_mode: Option<String>,
    /// Mode-select button bindings.
    pub mode_triggers: Vec<ModeTrigger>,
    /// Grid columns written by the modes. Default: 8.
    pub columns: usize,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            knob_count: 8,
            long_press_ms: 400,
            default_mode: String::from(VOLUME),
            shift_mode: Some(String::from(TRACK_SELECT)),
            mode_triggers: vec![
                ModeTrigger::new(0, VOLUME),
                ModeTrigger::new(1, PAN),
                ModeTrigger::new(2, &SendMode::name_for(0)),
                ModeTrigger::new(3, DEVICE),
            ],
            columns: 8,
        }
    }
}

/// Per-button light colors of both rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonLights {
    pub first_row: Vec<ButtonColor>,
    pub second_row: Vec<ButtonColor>,
}

// ── ControlSurface ───────────────────────────────────────────────────────

/// Dispatches hardware events to the modes and keeps the grid current.
pub struct ControlSurface {
    config: SurfaceConfig,
    modes: ModeManager,
    state: SurfaceState,
    buttons: ButtonTracker,
    grid: GridModel,
    changes: ChangeSignal,
}

impl ControlSurface {
    /// Create a surface around already registered `modes`.
    pub fn new(config: SurfaceConfig, mut modes: ModeManager) -> Result<Self, ModeError> {
        modes.set_default(&config.default_mode)?;
        Ok(Self {
            buttons: ButtonTracker::new(config.long_press_ms),
            grid: GridModel::new(config.columns),
            state: SurfaceState::default(),
            changes: ChangeSignal::new(),
            modes,
            config,
        })
    }

    /// Enter the default mode and draw the first frame.
    pub fn start(&mut self, model: &mut SurfaceModel) -> Result<(), ModeError> {
        let mut ctx = SurfaceContext::new(model, &self.state);
        self.modes.start(&mut ctx)?;
        self.refresh_display(model);
        Ok(())
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    pub fn modes(&self) -> &ModeManager {
        &self.modes
    }

    pub fn state(&self) -> &SurfaceState {
        &self.state
    }

    pub fn grid(&self) -> &GridModel {
        &self.grid
    }

    pub fn add_display_listener(&mut self, listener: Box<dyn GridChangeListener>) {
        self.grid.add_listener(listener);
    }

    /// Subscribe to `value` so host-side changes refresh the display.
    pub fn watch(&self, value: &mut dyn Value) {
        value.subscribe(self.changes.observer());
    }

    // ── Events ───────────────────────────────────────────────────────

    /// Handle one event from the transport at time `now_ms`.
    pub fn handle_event(&mut self, model: &mut SurfaceModel, event: InputEvent, now_ms: u64) {
        match event {
            InputEvent::Button {
                region,
                index,
                kind,
            } => {
                if let Some(kind) = self.buttons.on_button(region, index, kind, now_ms) {
                    self.dispatch_button(model, region, index, kind);
                }
            }
            InputEvent::Knob { index, value } => {
                if index >= self.config.knob_count {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("knob {} out of range", index);
                    return;
                }
                let mut ctx = SurfaceContext::new(model, &self.state);
                self.modes.on_knob_value(&mut ctx, index, value);
            }
            InputEvent::KnobTouch { index, touched } => {
                if index >= self.config.knob_count {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("knob {} out of range", index);
                    return;
                }
                let mut ctx = SurfaceContext::new(model, &self.state);
                self.modes.on_knob_touch(&mut ctx, index, touched);
            }
        }
        self.refresh_display(model);
    }

    /// Periodic tick: synthesize long presses, then refresh the display.
    pub fn tick(&mut self, model: &mut SurfaceModel, now_ms: u64) {
        for (region, index) in self.buttons.poll(now_ms) {
            self.dispatch_button(model, region, index, ButtonEvent::Long);
        }
        // The periodic refresh covers any pending value change.
        self.changes.take();
        self.refresh_display(model);
    }

    fn dispatch_button(
        &mut self,
        model: &mut SurfaceModel,
        region: SurfaceRegion,
        index: usize,
        kind: ButtonEvent,
    ) {
        match region {
            SurfaceRegion::Shift => self.on_shift(model, kind),
            SurfaceRegion::ModeSelect => {
                if kind != ButtonEvent::Pressed {
                    return;
                }
                let Some(trigger) = self.config.mode_triggers.iter().find(|t| t.button == index)
                else {
                    #[cfg(feature = "defmt")]
                    defmt::debug!("mode button {} unbound", index);
                    return;
                };
                let mut ctx = SurfaceContext::new(model, &self.state);
                if let Err(_e) = self.modes.switch_to(&trigger.mode, &mut ctx) {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("mode button {}: {}", index, _e);
                }
            }
            SurfaceRegion::Navigation => {
                if kind != ButtonEvent::Pressed {
                    return;
                }
                let Some(nav) = NavButton::from_index(index) else {
                    return;
                };
                let mut ctx = SurfaceContext::new(model, &self.state);
                if let Some(mode) = self.modes.current_mut() {
                    match nav {
                        NavButton::PreviousItem => mode.select_previous_item(&mut ctx),
                        NavButton::NextItem => mode.select_next_item(&mut ctx),
                        NavButton::PreviousPage => mode.select_previous_item_page(&mut ctx),
                        NavButton::NextPage => mode.select_next_item_page(&mut ctx),
                    }
                }
            }
            SurfaceRegion::FirstRow | SurfaceRegion::SecondRow => {
                if index >= self.config.knob_count {
                    return;
                }
                let row = if region == SurfaceRegion::FirstRow {
                    ButtonRow::First
                } else {
                    ButtonRow::Second
                };
                let mut ctx = SurfaceContext::new(model, &self.state);
                self.modes.on_button(&mut ctx, row, index, kind);
            }
        }
    }

    fn on_shift(&mut self, model: &mut SurfaceModel, kind: ButtonEvent) {
        let pressed = match kind {
            ButtonEvent::Pressed => true,
            ButtonEvent::Released => false,
            ButtonEvent::Long => return,
        };
        self.state.shift_pressed = pressed;
        self.state.value_changer.set_slow(pressed);

        let Some(overlay) = self.config.shift_mode.as_deref() else {
            return;
        };
        let mut ctx = SurfaceContext::new(model, &self.state);
        if pressed {
            if let Err(_e) = self.modes.push_temporary(overlay, &mut ctx) {
                #[cfg(feature = "defmt")]
                defmt::warn!("shift overlay: {}", _e);
            }
        } else {
            self.modes.pop_temporary(&mut ctx);
        }
    }

    // ── Output ───────────────────────────────────────────────────────

    /// Let the current mode rebuild `grid`.
    pub fn update_grid(&self, model: &mut SurfaceModel, grid: &mut GridModel) {
        let ctx = SurfaceContext::new(model, &self.state);
        self.modes.update_display(&ctx, grid);
    }

    /// Rebuild the surface's own grid and notify display listeners if it
    /// changed. Returns `true` if a frame was sent to the listeners.
    pub fn refresh_display(&mut self, model: &mut SurfaceModel) -> bool {
        let ctx = SurfaceContext::new(model, &self.state);
        self.modes.update_display(&ctx, &mut self.grid);
        self.grid.notify_listeners()
    }

    /// Rebuild the display if a watched value changed.
    ///
    /// Any number of value changes since the last call yield one rebuild.
    /// Returns `true` if a frame was sent to the listeners.
    pub fn process_value_changes(&mut self, model: &mut SurfaceModel) -> bool {
        if !self.changes.take() {
            return false;
        }
        self.refresh_display(model)
    }

    pub fn button_lights(&self, model: &mut SurfaceModel) -> ButtonLights {
        let mut lights = ButtonLights {
            first_row: vec![ButtonColor::Off; self.config.knob_count],
            second_row: vec![ButtonColor::Off; self.config.knob_count],
        };
        let ctx = SurfaceContext::new(model, &self.state);
        self.modes
            .update_lights(&ctx, &mut lights.first_row, &mut lights.second_row);
        lights
    }
}

impl core::fmt::Debug for ControlSurface {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ControlSurface")
            .field("modes", &self.modes)
            .field("state", &self.state)
            .finish()
    }
}

// ── Display task glue ────────────────────────────────────────────────────

/// Surface and host model behind one lock, for
/// [`display_update_task`](surfacekit_display::display_update_task).
#[cfg(feature = "task")]
pub struct Session {
    pub surface: ControlSurface,
    pub model: SurfaceModel,
}

#[cfg(feature = "task")]
impl surfacekit_display::GridSource for Session {
    fn refresh_grid(&mut self, grid: &mut GridModel) {
        self.surface.update_grid(&mut self.model, grid);
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
