//! Active mode, overlay stack and event routing.
//!
//! ```text
//!            push_temporary(Y)             pop_temporary()
//!   X active ─────────────────▶ Y on top ─────────────────▶ X active
//!   X.on_deactivate            Y.on_deactivate
//!   Y.on_activate              X.on_activate
//! ```
//!
//! Events go to the mode on top of the overlay stack, or to the active
//! mode when the stack is empty. Push and pop are the only operations that
//! touch the stack, and every transition calls exactly one `on_deactivate`
//! on the mode being left and one `on_activate` on the mode being entered.

use alloc::boxed::Box;
use alloc::vec::Vec;

use surfacekit_display::GridModel;

use crate::error::ModeError;
use crate::event::ButtonEvent;
use crate::mode::{ButtonColor, ButtonRow, Mode, SurfaceContext};

/// Owns the registered modes and decides which one receives events.
#[derive(Default)]
pub struct ModeManager {
    modes: Vec<Box<dyn Mode>>,
    default_mode: Option<usize>,
    /// Base mode; `None` until [`ModeManager::start`] or a switch.
    active: Option<usize>,
    /// Temporary overlays, last is on top. Never the same mode twice in a row.
    stack: Vec<usize>,
}

impl ModeManager {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Registry ─────────────────────────────────────────────────────

    /// Register a mode under its [`Mode::name`].
    pub fn register(&mut self, mode: Box<dyn Mode>) -> Result<(), ModeError> {
        if self.index_of(mode.name()).is_some() {
            return Err(ModeError::DuplicateMode);
        }
        self.modes.push(mode);
        Ok(())
    }

    /// Mode to enter on [`ModeManager::start`].
    pub fn set_default(&mut self, name: &str) -> Result<(), ModeError> {
        self.default_mode = Some(self.index_of(name).ok_or(ModeError::UnknownMode)?);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    pub fn mode(&self, name: &str) -> Option<&dyn Mode> {
        let idx = self.index_of(name)?;
        let mode: &dyn Mode = &*self.modes[idx];
        Some(mode)
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.modes.iter().position(|m| m.name() == name)
    }

    // ── State ────────────────────────────────────────────────────────

    /// Name of the base mode, ignoring overlays.
    pub fn active_name(&self) -> Option<&str> {
        self.active.map(|idx| self.modes[idx].name())
    }

    /// Name of the mode currently receiving events.
    pub fn current_name(&self) -> Option<&str> {
        self.current_index().map(|idx| self.modes[idx].name())
    }

    /// Number of overlays on the stack.
    pub fn overlay_depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_overlay_active(&self) -> bool {
        !self.stack.is_empty()
    }

    fn current_index(&self) -> Option<usize> {
        self.stack.last().copied().or(self.active)
    }

    /// The mode currently receiving events.
    pub fn current(&self) -> Option<&dyn Mode> {
        let idx = self.current_index()?;
        let mode: &dyn Mode = &*self.modes[idx];
        Some(mode)
    }

    pub fn current_mut(&mut self) -> Option<&mut dyn Mode> {
        let idx = self.current_index()?;
        let mode: &mut dyn Mode = &mut *self.modes[idx];
        Some(mode)
    }

    // ── Transitions ──────────────────────────────────────────────────

    /// Activate the default mode.
    ///
    /// Returns [`ModeError::NoModes`] if no default was set. Calling it
    /// again once a mode is active does nothing.
    pub fn start(&mut self, ctx: &mut SurfaceContext<'_>) -> Result<(), ModeError> {
        let idx = self.default_mode.ok_or(ModeError::NoModes)?;
        if self.active.is_some() {
            return Ok(());
        }
        self.active = Some(idx);
        if self.stack.is_empty() {
            self.modes[idx].on_activate(ctx);
        }
        Ok(())
    }

    /// Make `name` the base mode.
    ///
    /// While an overlay is shown the base is replaced silently and entered
    /// when the last overlay pops. Switching to the active mode is a no-op.
    pub fn switch_to(&mut self, name: &str, ctx: &mut SurfaceContext<'_>) -> Result<(), ModeError> {
        let Some(idx) = self.index_of(name) else {
            #[cfg(feature = "defmt")]
            defmt::warn!("switch_to: unknown mode {}", name);
            return Err(ModeError::UnknownMode);
        };
        if self.active == Some(idx) {
            return Ok(());
        }
        if self.stack.is_empty() {
            if let Some(old) = self.active {
                self.modes[old].on_deactivate(ctx);
            }
            self.modes[idx].on_activate(ctx);
        }
        self.active = Some(idx);

        #[cfg(feature = "defmt")]
        defmt::info!("mode: {}", name);
        Ok(())
    }

    /// Show the temporary mode `name` on top of the current mode.
    ///
    /// Pushing the mode that is already receiving events is a no-op.
    pub fn push_temporary(&mut self, name: &str, ctx: &mut SurfaceContext<'_>) -> Result<(), ModeError> {
        let idx = self.index_of(name).ok_or(ModeError::UnknownMode)?;
        if !self.modes[idx].is_temporary() {
            return Err(ModeError::NotTemporary);
        }
        let current = self.current_index();
        if current == Some(idx) {
            return Ok(());
        }
        if let Some(old) = current {
            self.modes[old].on_deactivate(ctx);
        }
        self.stack.push(idx);
        self.modes[idx].on_activate(ctx);
        Ok(())
    }

    /// Remove the top overlay and re-enter the mode below it.
    ///
    /// Returns `false` (and does nothing) if no overlay is shown.
    pub fn pop_temporary(&mut self, ctx: &mut SurfaceContext<'_>) -> bool {
        let Some(top) = self.stack.pop() else {
            return false;
        };
        self.modes[top].on_deactivate(ctx);
        if let Some(next) = self.current_index() {
            self.modes[next].on_activate(ctx);
        }
        true
    }

    // ── Routing ──────────────────────────────────────────────────────

    pub fn on_knob_value(&mut self, ctx: &mut SurfaceContext<'_>, index: usize, value: i32) {
        if let Some(mode) = self.current_mut() {
            mode.on_knob_value(ctx, index, value);
        }
    }

    pub fn on_knob_touch(&mut self, ctx: &mut SurfaceContext<'_>, index: usize, touched: bool) {
        if let Some(mode) = self.current_mut() {
            mode.on_knob_touch(ctx, index, touched);
        }
    }

    pub fn on_button(
        &mut self,
        ctx: &mut SurfaceContext<'_>,
        row: ButtonRow,
        index: usize,
        event: ButtonEvent,
    ) {
        if let Some(mode) = self.current_mut() {
            mode.on_button(ctx, row, index, event);
        }
    }

    pub fn update_display(&self, ctx: &SurfaceContext<'_>, grid: &mut GridModel) {
        if let Some(mode) = self.current() {
            mode.update_display(ctx, grid);
        }
    }

    /// Fill both light rows from the current mode. Unlit by default.
    pub fn update_lights(
        &self,
        ctx: &SurfaceContext<'_>,
        first_row: &mut [ButtonColor],
        second_row: &mut [ButtonColor],
    ) {
        first_row.fill(ButtonColor::Off);
        second_row.fill(ButtonColor::Off);
        if let Some(mode) = self.current() {
            mode.update_first_row(ctx, first_row);
            mode.update_second_row(ctx, second_row);
        }
    }
}

impl core::fmt::Debug for ModeManager {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ModeManager")
            .field("modes", &self.modes.iter().map(|m| m.name()).collect::<Vec<_>>())
            .field("active", &self.active_name())
            .field("current", &self.current_name())
            .field("overlays", &self.stack.len())
            .finish()
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
