use alloc::boxed::Box;

use crate::values::Value;

/// RGB color reported by the host for a track or device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ItemColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl ItemColor {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// Addresses one of the values an [`Item`] exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ValueKind {
    /// Channel volume.
    Volume,
    /// Channel panorama.
    Pan,
    /// Send level to the n-th effect channel (0-based).
    Send(usize),
    /// The item itself is a parameter (device parameter banks).
    Parameter,
}

/// Opaque handle to a host application object (track, device, parameter).
///
/// The host owns the underlying object; implementations are typically thin
/// wrappers that forward to it. The core only borrows an item for the
/// duration of one event or one display rebuild.
pub trait Item {
    /// Display name. Empty when the slot is unused on the host side.
    fn name(&self) -> &str;

    /// `false` for placeholder entries the host keeps in its own bank.
    fn exists(&self) -> bool {
        true
    }

    fn color(&self) -> Option<ItemColor> {
        None
    }

    /// Read access to one of the item's values, if it has that kind.
    fn value(&self, _kind: ValueKind) -> Option<&dyn Value> {
        None
    }

    /// Write access to one of the item's values, if it has that kind.
    fn value_mut(&mut self, _kind: ValueKind) -> Option<&mut dyn Value> {
        None
    }
}

/// Boxed item as stored in the banks of a [`SurfaceModel`](crate::model::SurfaceModel).
pub type ItemHandle = Box<dyn Item>;

impl<T: Item + ?Sized> Item for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn exists(&self) -> bool {
        (**self).exists()
    }

    fn color(&self) -> Option<ItemColor> {
        (**self).color()
    }

    fn value(&self, kind: ValueKind) -> Option<&dyn Value> {
        (**self).value(kind)
    }

    fn value_mut(&mut self, kind: ValueKind) -> Option<&mut dyn Value> {
        (**self).value_mut(kind)
    }
}
