//! The grid of elements modes write and the compositor reads.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::error::DisplayError;
use crate::grid::GridElement;

/// Receives the element row whenever the grid has changed.
pub trait GridChangeListener {
    /// An error leaves the grid dirty so the frame is offered again on the
    /// next [`GridModel::notify_listeners`].
    fn grid_has_changed(&mut self, elements: &[GridElement]) -> Result<(), DisplayError>;
}

/// Fixed-width row of [`GridElement`]s, one per display column.
///
/// Writes that do not change an element leave the model clean, so a mode
/// can rebuild the whole grid every tick and only real changes trigger a
/// redraw. A new model starts dirty so the first frame is always drawn.
pub struct GridModel {
    elements: Vec<GridElement>,
    dirty: bool,
    listeners: Vec<Box<dyn GridChangeListener>>,
}

impl GridModel {
    /// Create a grid of `columns` empty elements.
    pub fn new(columns: usize) -> Self {
        let mut elements = Vec::with_capacity(columns);
        elements.resize(columns, GridElement::Empty);
        Self {
            elements,
            dirty: true,
            listeners: Vec::new(),
        }
    }

    pub fn columns(&self) -> usize {
        self.elements.len()
    }

    pub fn elements(&self) -> &[GridElement] {
        &self.elements
    }

    pub fn element(&self, column: usize) -> Option<&GridElement> {
        self.elements.get(column)
    }

    /// Replace the element in `column`. Out-of-range columns are ignored.
    ///
    /// Returns `true` if the element actually changed.
    pub fn set_element(&mut self, column: usize, element: GridElement) -> bool {
        let Some(slot) = self.elements.get_mut(column) else {
            #[cfg(feature = "defmt")]
            defmt::warn!("grid column {} out of range", column);
            return false;
        };
        if *slot == element {
            return false;
        }
        *slot = element;
        self.dirty = true;
        true
    }

    /// Replace columns from 0 upwards; surplus elements are dropped.
    pub fn set_elements<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = GridElement>,
    {
        for (column, element) in elements.into_iter().enumerate().take(self.columns()) {
            self.set_element(column, element);
        }
    }

    /// Reset every column to [`GridElement::Empty`].
    pub fn clear(&mut self) {
        for column in 0..self.columns() {
            self.set_element(column, GridElement::Empty);
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Force a redraw on the next check, e.g. after a failed flush.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Clear the dirty flag, returning whether it was set.
    pub fn take_dirty(&mut self) -> bool {
        core::mem::replace(&mut self.dirty, false)
    }

    pub fn add_listener(&mut self, listener: Box<dyn GridChangeListener>) {
        self.listeners.push(listener);
    }

    /// Notify every listener once if the grid changed since the last call.
    ///
    /// Returns `true` if listeners were notified. If any listener fails the
    /// grid stays dirty, so the next call retries even without new changes.
    pub fn notify_listeners(&mut self) -> bool {
        if !self.take_dirty() {
            return false;
        }
        let mut failed = false;
        for listener in self.listeners.iter_mut() {
            if listener.grid_has_changed(&self.elements).is_err() {
                failed = true;
            }
        }
        if failed {
            self.dirty = true;
        }
        true
    }
}

impl core::fmt::Debug for GridModel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GridModel")
            .field("elements", &self.elements)
            .field("dirty", &self.dirty)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
