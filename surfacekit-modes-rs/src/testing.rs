//! In-memory host model used by the unit tests.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use surfacekit::bank::{Bank, Item, ItemColor, ItemHandle, ValueKind};
use surfacekit::values::{Parameter, Value};

pub const SEND_COUNT: usize = 8;

pub struct Track {
    pub name: String,
    pub color: Option<ItemColor>,
    pub volume: Parameter,
    pub pan: Parameter,
    pub sends: Vec<Parameter>,
}

impl Track {
    pub fn new(name: &str) -> Self {
        let mut volume = Parameter::new("Volume", 127).with_value(100);
        volume.text = String::from("0.0 dB");
        let mut pan = Parameter::new("Pan", 127).with_value(64);
        pan.text = String::from("C");
        let sends = (0..SEND_COUNT)
            .map(|n| Parameter::new(&format!("FX {}", n + 1), 127))
            .collect();
        Self {
            name: String::from(name),
            color: Some(ItemColor::new(200, 40, 40)),
            volume,
            pan,
            sends,
        }
    }
}

impl Item for Track {
    fn name(&self) -> &str {
        &self.name
    }

    fn color(&self) -> Option<ItemColor> {
        self.color
    }

    fn value(&self, kind: ValueKind) -> Option<&dyn Value> {
        match kind {
            ValueKind::Volume => Some(&self.volume),
            ValueKind::Pan => Some(&self.pan),
            ValueKind::Send(n) => self.sends.get(n).map(|s| s as &dyn Value),
            ValueKind::Parameter => None,
        }
    }

    fn value_mut(&mut self, kind: ValueKind) -> Option<&mut dyn Value> {
        match kind {
            ValueKind::Volume => Some(&mut self.volume),
            ValueKind::Pan => Some(&mut self.pan),
            ValueKind::Send(n) => self.sends.get_mut(n).map(|s| s as &mut dyn Value),
            ValueKind::Parameter => None,
        }
    }
}

/// A device parameter: the item is its own value.
pub struct DeviceParam(pub Parameter);

impl Item for DeviceParam {
    fn name(&self) -> &str {
        &self.0.name
    }

    fn value(&self, kind: ValueKind) -> Option<&dyn Value> {
        match kind {
            ValueKind::Parameter => Some(&self.0),
            _ => None,
        }
    }

    fn value_mut(&mut self, kind: ValueKind) -> Option<&mut dyn Value> {
        match kind {
            ValueKind::Parameter => Some(&mut self.0),
            _ => None,
        }
    }
}

/// `total` tracks named "Track 1".. in a bank of `page_size`.
pub fn track_bank(page_size: usize, total: usize) -> Bank<ItemHandle> {
    let tracks = (0..total)
        .map(|n| Box::new(Track::new(&format!("Track {}", n + 1))) as ItemHandle)
        .collect();
    Bank::with_items(page_size, tracks)
}

/// `total` parameters named "Param 1".. with range `[0, 127]`.
pub fn parameter_bank(page_size: usize, total: usize) -> Bank<ItemHandle> {
    let params = (0..total)
        .map(|n| Box::new(DeviceParam(Parameter::new(&format!("Param {}", n + 1), 127))) as ItemHandle)
        .collect();
    Bank::with_items(page_size, params)
}

/// Current value of `kind` on the item in visible `slot`.
pub fn track_value(bank: &Bank<ItemHandle>, slot: usize, kind: ValueKind) -> Option<i32> {
    bank.item(slot)?.value(kind).map(|v| v.value())
}
