//! Concrete modes, one per functional area of the surface.
//!
//! | Mode | Bank | Knobs write | Display |
//! |------|------|-------------|---------|
//! | [`TrackValueMode`] | tracks | volume or pan | channel strips |
//! | [`SendMode`] | tracks | send *n* | send clusters |
//! | [`DeviceParamsMode`] | device parameters | parameter | parameter faders |
//! | [`TrackSelectMode`] | tracks | track selection | track list (overlay) |

use alloc::boxed::Box;

use crate::error::ModeError;
use crate::manager::ModeManager;

mod device;
mod navigation;
mod sends;
mod track;

pub use device::DeviceParamsMode;
pub use navigation::TrackSelectMode;
pub use sends::SendMode;
pub use track::TrackValueMode;

/// Registered name of the volume mode.
pub const VOLUME: &str = "Volume";
/// Registered name of the pan mode.
pub const PAN: &str = "Pan";
/// Registered name of the device parameter mode.
pub const DEVICE: &str = "Device";
/// Registered name of the track selection overlay.
pub const TRACK_SELECT: &str = "Track Select";

/// A [`ModeManager`] with every built-in mode registered: volume, pan,
/// `sends` send modes, device parameters and the track selection overlay.
pub fn standard_modes(sends: usize) -> Result<ModeManager, ModeError> {
    let mut manager = ModeManager::new();
    manager.register(Box::new(TrackValueMode::volume()))?;
    manager.register(Box::new(TrackValueMode::pan()))?;
    for send in 0..sends {
        manager.register(Box::new(SendMode::new(send)))?;
    }
    manager.register(Box::new(DeviceParamsMode::new()))?;
    manager.register(Box::new(TrackSelectMode::new()))?;
    Ok(manager)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_modes_are_registered() {
        let manager = standard_modes(2).unwrap();
        for name in [VOLUME, PAN, "Send 1", "Send 2", DEVICE, TRACK_SELECT] {
            assert!(manager.contains(name), "{} missing", name);
        }
        assert!(!manager.contains("Send 3"));
        assert!(manager.mode(TRACK_SELECT).unwrap().is_temporary());
        assert!(!manager.mode(VOLUME).unwrap().is_temporary());
    }
}
