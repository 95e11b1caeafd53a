//! Error types for the display compositor.

/// Errors that can occur while compositing or delivering frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayError {
    /// Width, height or column count is zero, or there are more columns
    /// than pixels.
    InvalidGeometry,
    /// A frame was composited before [`Compositor::open()`](crate::Compositor::open)
    /// was called.
    NotOpened,
    /// The display output failed to accept the frame.
    Output,
}

impl core::fmt::Display for DisplayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DisplayError::InvalidGeometry => write!(f, "invalid display geometry"),
            DisplayError::NotOpened => write!(f, "display output not opened"),
            DisplayError::Output => write!(f, "display output rejected the frame"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DisplayError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            DisplayError::InvalidGeometry => defmt::write!(f, "Invalid geometry"),
            DisplayError::NotOpened => defmt::write!(f, "Not opened"),
            DisplayError::Output => defmt::write!(f, "Output error"),
        }
    }
}
