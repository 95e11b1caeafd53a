//! Paginated windows over host collections.
//!
//! A [`Bank`] exposes a fixed number of visible slots over a collection that
//! is usually much larger than the physical control set:
//!
//! ```text
//! total = 10, page_size = 4
//!
//! items:   [0] [1] [2] [3] [4] [5] [6] [7] [8] [9]
//! page 0:  |---------------|
//! page 1:                  |---------------|
//! page 2:                                  |-------| (short window)
//! ```
//!
//! Page navigation snaps `window_start` to page multiples, single-item
//! navigation may leave it at any offset. Neither ever moves the window
//! outside `[0, total)`, and neither ever fails: calls at the boundary are
//! silent no-ops.

mod error;
mod item;
mod window;

pub use error::BankError;
pub use item::{Item, ItemColor, ItemHandle, ValueKind};
pub use window::Bank;

/// Default number of visible slots (matches the eight knobs of the surface).
pub const DEFAULT_PAGE_SIZE: usize = 8;
