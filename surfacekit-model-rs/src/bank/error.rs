/// Errors that can occur when addressing a [`Bank`](super::Bank) slot.
///
/// Navigation never fails; only explicit slot selection reports errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BankError {
    /// Slot index is out of bounds (must be < page size).
    InvalidSlot,
    /// Slot is inside the page but the window is short and holds no item.
    EmptySlot,
}

impl core::fmt::Display for BankError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BankError::InvalidSlot => write!(f, "bank slot index out of range"),
            BankError::EmptySlot => write!(f, "bank slot holds no item"),
        }
    }
}
