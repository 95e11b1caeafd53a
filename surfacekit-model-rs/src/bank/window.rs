use alloc::vec::Vec;

use super::error::BankError;
use super::DEFAULT_PAGE_SIZE;

/// Ordered, paginated window over a host collection.
///
/// The bank holds the item handles the host supplied via
/// [`set_items()`](Self::set_items), the start of the visible window and the
/// selected item. Only the navigation methods move the window.
///
/// # Examples
///
/// ```
/// use surfacekit::bank::Bank;
///
/// let mut bank = Bank::with_items(4, (0..10).collect());
/// bank.select_next_page();
/// assert_eq!(bank.window_start(), 4);
/// bank.select_next_page();
/// assert_eq!(bank.window_start(), 8);
///
/// // Last page reached: further calls are no-ops.
/// bank.select_next_page();
/// assert_eq!(bank.window_start(), 8);
/// assert!(!bank.can_scroll_forwards());
/// ```
#[derive(Debug, Clone)]
pub struct Bank<T> {
    items: Vec<T>,
    page_size: usize,
    window_start: usize,
    selected: Option<usize>,
}

impl<T> Default for Bank<T> {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl<T> Bank<T> {
    /// Create an empty bank. A `page_size` of 0 is treated as 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            page_size: page_size.max(1),
            window_start: 0,
            selected: None,
        }
    }

    /// Create a bank over `items` with the window at the first page.
    pub fn with_items(page_size: usize, items: Vec<T>) -> Self {
        let mut bank = Self::new(page_size);
        bank.items = items;
        bank
    }

    /// Replace the underlying collection.
    ///
    /// The window and the selection are clamped to the new size so the
    /// window invariant survives the host removing items.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.window_start = self.window_start.min(self.last_window_start());
        self.selected = self.selected.filter(|&sel| sel < self.items.len());
    }

    // ── Geometry ─────────────────────────────────────────────────────

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Size of the whole logical collection.
    pub fn total(&self) -> usize {
        self.items.len()
    }

    /// Index of the first visible item.
    pub fn window_start(&self) -> usize {
        self.window_start
    }

    /// Start of the last page that still holds at least one item.
    fn last_page_start(&self) -> usize {
        match self.total() {
            0 => 0,
            total => (total - 1) / self.page_size * self.page_size,
        }
    }

    /// Largest window start reachable by single-item scrolling.
    fn last_window_start(&self) -> usize {
        self.last_page_start()
            .max(self.total().saturating_sub(self.page_size))
    }

    // ── Slot access ──────────────────────────────────────────────────

    /// Item in the visible `slot`, or `None` if the window is short.
    pub fn item(&self, slot: usize) -> Option<&T> {
        if slot >= self.page_size {
            return None;
        }
        self.items.get(self.window_start + slot)
    }

    /// Mutable access to the item in the visible `slot`.
    pub fn item_mut(&mut self, slot: usize) -> Option<&mut T> {
        if slot >= self.page_size {
            return None;
        }
        self.items.get_mut(self.window_start + slot)
    }

    /// Iterate the visible slots, yielding `None` for empty ones.
    pub fn visible(&self) -> impl Iterator<Item = Option<&T>> + '_ {
        (0..self.page_size).map(move |slot| self.item(slot))
    }

    // ── Selection ────────────────────────────────────────────────────

    /// Absolute index of the selected item.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&T> {
        self.selected.and_then(|idx| self.items.get(idx))
    }

    /// Returns `true` if the item in the visible `slot` is selected.
    pub fn is_slot_selected(&self, slot: usize) -> bool {
        slot < self.page_size && self.selected == Some(self.window_start + slot)
    }

    /// Select the item in the visible `slot`.
    ///
    /// Returns [`BankError::InvalidSlot`] if `slot >= page_size`, or
    /// [`BankError::EmptySlot`] if the window is too short to hold it.
    pub fn select_item(&mut self, slot: usize) -> Result<(), BankError> {
        if slot >= self.page_size {
            return Err(BankError::InvalidSlot);
        }
        let idx = self.window_start + slot;
        if idx >= self.total() {
            return Err(BankError::EmptySlot);
        }
        self.selected = Some(idx);
        Ok(())
    }

    /// Move the selection one item forwards, scrolling the window by single
    /// items to keep it visible. No-op on the last item.
    pub fn select_next_item(&mut self) {
        let next = match self.selected {
            Some(sel) => sel + 1,
            None => self.window_start,
        };
        if next >= self.total() {
            return;
        }
        self.selected = Some(next);
        self.reveal(next);
    }

    /// Move the selection one item backwards. No-op on the first item.
    pub fn select_previous_item(&mut self) {
        let prev = match self.selected {
            Some(0) => return,
            Some(sel) => sel - 1,
            None if self.total() == 0 => return,
            None => self.window_start,
        };
        self.selected = Some(prev);
        self.reveal(prev);
    }

    /// Scroll the window the minimum amount that makes `idx` visible.
    fn reveal(&mut self, idx: usize) {
        if idx < self.window_start {
            self.window_start = idx;
        } else if idx >= self.window_start + self.page_size {
            self.window_start = idx + 1 - self.page_size;
        }
    }

    // ── Page navigation ──────────────────────────────────────────────

    /// Move the window to the next page boundary. No-op on the last page.
    pub fn select_next_page(&mut self) {
        if !self.can_scroll_page_forwards() {
            return;
        }
        let next = (self.window_start / self.page_size + 1) * self.page_size;
        self.window_start = next.min(self.last_page_start());
    }

    /// Move the window to the previous page boundary. No-op on the first page.
    pub fn select_previous_page(&mut self) {
        if !self.can_scroll_page_backwards() {
            return;
        }
        let aligned = self.window_start / self.page_size * self.page_size;
        self.window_start = if aligned < self.window_start {
            aligned
        } else {
            aligned - self.page_size
        };
    }

    pub fn can_scroll_page_forwards(&self) -> bool {
        self.window_start < self.last_page_start()
    }

    pub fn can_scroll_page_backwards(&self) -> bool {
        self.window_start > 0
    }

    // ── Single-item scrolling ────────────────────────────────────────

    /// Move the window one item forwards while items remain past its end.
    pub fn scroll_forwards(&mut self) {
        if self.can_scroll_forwards() {
            self.window_start += 1;
        }
    }

    /// Move the window one item backwards.
    pub fn scroll_backwards(&mut self) {
        if self.can_scroll_backwards() {
            self.window_start -= 1;
        }
    }

    /// `true` iff items exist beyond the end of the visible window.
    pub fn can_scroll_forwards(&self) -> bool {
        self.window_start + self.page_size < self.total()
    }

    pub fn can_scroll_backwards(&self) -> bool {
        self.window_start > 0
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
