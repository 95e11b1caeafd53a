//! The slice of host application state the modes navigate.

use alloc::string::String;

use crate::bank::{Bank, ItemHandle, DEFAULT_PAGE_SIZE};

/// Which bank of the [`SurfaceModel`] a mode pages through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BankKind {
    /// Tracks/channels; shared by the volume, pan, send and track modes so
    /// they all page in step.
    Tracks,
    /// Parameters of the selected device.
    DeviceParameters,
}

/// Host application state exposed to the modes.
///
/// The host fills the banks with [`ItemHandle`]s and keeps them in sync with
/// [`Bank::set_items()`]. Window positions and selection are changed only by
/// mode navigation.
pub struct SurfaceModel {
    pub tracks: Bank<ItemHandle>,
    pub device_parameters: Bank<ItemHandle>,
    /// Name of the device whose parameters are banked. Empty when none.
    pub device_name: String,
}

impl Default for SurfaceModel {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl SurfaceModel {
    /// Create an empty model whose banks show `page_size` slots.
    pub fn new(page_size: usize) -> Self {
        Self {
            tracks: Bank::new(page_size),
            device_parameters: Bank::new(page_size),
            device_name: String::new(),
        }
    }

    pub fn bank(&self, kind: BankKind) -> &Bank<ItemHandle> {
        match kind {
            BankKind::Tracks => &self.tracks,
            BankKind::DeviceParameters => &self.device_parameters,
        }
    }

    pub fn bank_mut(&mut self, kind: BankKind) -> &mut Bank<ItemHandle> {
        match kind {
            BankKind::Tracks => &mut self.tracks,
            BankKind::DeviceParameters => &mut self.device_parameters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::boxed::Box;
    use alloc::vec;

    use crate::bank::Item;

    struct Named(&'static str);

    impl Item for Named {
        fn name(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn bank_lookup_by_kind() {
        let mut model = SurfaceModel::new(4);
        model
            .bank_mut(BankKind::Tracks)
            .set_items(vec![
                Box::new(Named("Drums")) as ItemHandle,
                Box::new(Named("Bass")) as ItemHandle,
            ]);

        assert_eq!(model.bank(BankKind::Tracks).total(), 2);
        assert_eq!(model.bank(BankKind::DeviceParameters).total(), 0);
        assert_eq!(model.tracks.item(1).map(|t| t.name()), Some("Bass"));
    }
}
