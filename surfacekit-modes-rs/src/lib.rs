//! Mode/bank state machine for control surfaces.
//!
//! A surface has a row of knobs, two rows of buttons above and below a
//! display, a shift button, mode-select buttons and a navigation block. What
//! the knobs and buttons do depends on the current [`Mode`]: the volume mode
//! writes track volumes, a send mode writes one send of every visible track,
//! the device mode writes parameters of the selected device, and so on.
//!
//! - [`ModeManager`] keeps the registered modes, the persistent base mode and
//!   a stack of temporary overlays, and routes input to whichever is on top.
//! - [`ControlSurface`] decodes transport events, handles shift, synthesizes
//!   long presses and rebuilds the display grid after every change.
//! - [`modes`] holds the built-in modes.
//!
//! # Quick Start
//!
//! ```
//! use surfacekit::model::SurfaceModel;
//! use surfacekit_modes::modes::standard_modes;
//! use surfacekit_modes::{ButtonEvent, ControlSurface, InputEvent, SurfaceConfig, SurfaceRegion};
//!
//! let mut model = SurfaceModel::new(8);
//! let mut surface = ControlSurface::new(SurfaceConfig::default(), standard_modes(4).unwrap()).unwrap();
//! surface.start(&mut model).unwrap();
//! assert_eq!(surface.modes().current_name(), Some("Volume"));
//!
//! // Holding shift shows the track selection overlay.
//! let shift = InputEvent::Button {
//!     region: SurfaceRegion::Shift,
//!     index: 0,
//!     kind: ButtonEvent::Pressed,
//! };
//! surface.handle_event(&mut model, shift, 0);
//! assert_eq!(surface.modes().current_name(), Some("Track Select"));
//! ```
//!
//! # Crate Features
//!
//! - **`defmt`**: structured logging via [`defmt`].
//! - **`task`**: `Session`, a lockable surface plus model that feeds the
//!   display refresh task of `surfacekit-display`.

#![no_std]

extern crate alloc;

pub mod error;
pub mod event;
pub mod manager;
pub mod mode;
pub mod modes;
pub mod surface;

#[cfg(test)]
mod testing;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use error::ModeError;
pub use event::{ButtonEvent, ButtonTracker, InputEvent, NavButton, SurfaceRegion};
pub use manager::ModeManager;
pub use mode::{ButtonColor, ButtonRow, Mode, SurfaceContext, SurfaceState};
#[cfg(feature = "task")]
pub use surface::Session;
pub use surface::{ButtonLights, ControlSurface, ModeTrigger, SurfaceConfig};
