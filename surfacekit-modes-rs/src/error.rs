//! Error types for mode management.

/// Errors returned by [`ModeManager`](crate::ModeManager) operations.
///
/// A failed call never changes which mode is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeError {
    /// No mode with the requested name is registered.
    UnknownMode,
    /// A mode with the same name is already registered.
    DuplicateMode,
    /// Only temporary modes can be pushed as an overlay.
    NotTemporary,
    /// No default mode is configured to start from.
    NoModes,
}

impl core::fmt::Display for ModeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ModeError::UnknownMode => write!(f, "unknown mode"),
            ModeError::DuplicateMode => write!(f, "mode already registered"),
            ModeError::NotTemporary => write!(f, "mode is not temporary"),
            ModeError::NoModes => write!(f, "no default mode configured"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ModeError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            ModeError::UnknownMode => defmt::write!(f, "Unknown mode"),
            ModeError::DuplicateMode => defmt::write!(f, "Duplicate mode"),
            ModeError::NotTemporary => defmt::write!(f, "Not temporary"),
            ModeError::NoModes => defmt::write!(f, "No modes"),
        }
    }
}
