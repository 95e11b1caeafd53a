use alloc::format;
use alloc::string::String;

use surfacekit::bank::{Item, ValueKind};
use surfacekit::model::BankKind;
use surfacekit_display::grid::{label, SendSlot, SendsElement, SENDS_PER_ELEMENT};
use surfacekit_display::{GridElement, GridModel};

use crate::event::ButtonEvent;
use crate::mode::{
    apply_knob, bank_lights, channel_header, fader_value, touch_value, ButtonColor, ButtonRow,
    Mode, SurfaceContext, TouchState,
};

/// Knobs control one send of the visible tracks.
///
/// Each column shows the block of four sends that contains the controlled
/// send. Blocks past the first are drawn in extension mode, continuing the
/// column to their left.
#[derive(Debug, Clone)]
pub struct SendMode {
    name: String,
    send: usize,
    touch: TouchState,
}

impl SendMode {
    /// Mode for the 0-based `send`, registered as `"Send {send + 1}"`.
    pub fn new(send: usize) -> Self {
        Self {
            name: Self::name_for(send),
            send,
            touch: TouchState::default(),
        }
    }

    /// Registered name of the mode for the 0-based `send`.
    pub fn name_for(send: usize) -> String {
        format!("Send {}", send + 1)
    }

    pub fn send(&self) -> usize {
        self.send
    }

    fn first_send(&self) -> usize {
        self.send / SENDS_PER_ELEMENT * SENDS_PER_ELEMENT
    }
}

impl Mode for SendMode {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_temporary(&self) -> bool {
        false
    }

    fn is_absolute(&self) -> bool {
        false
    }

    fn on_activate(&mut self, _ctx: &mut SurfaceContext<'_>) {
        self.touch.reset();
    }

    fn on_deactivate(&mut self, ctx: &mut SurfaceContext<'_>) {
        self.touch.release_all(ctx, BankKind::Tracks, ValueKind::Send(self.send));
    }

    fn on_knob_value(&mut self, ctx: &mut SurfaceContext<'_>, index: usize, value: i32) {
        apply_knob(ctx, BankKind::Tracks, index, ValueKind::Send(self.send), value, false);
    }

    fn knob_value(&self, ctx: &SurfaceContext<'_>, index: usize) -> Option<i32> {
        ctx.model
            .tracks
            .item(index)?
            .value(ValueKind::Send(self.send))
            .map(|v| v.value())
    }

    fn on_knob_touch(&mut self, ctx: &mut SurfaceContext<'_>, index: usize, touched: bool) {
        self.touch.set(index, touched);
        touch_value(ctx, BankKind::Tracks, index, ValueKind::Send(self.send), touched);
    }

    fn on_button(
        &mut self,
        ctx: &mut SurfaceContext<'_>,
        row: ButtonRow,
        index: usize,
        event: ButtonEvent,
    ) {
        if row == ButtonRow::First && event == ButtonEvent::Pressed {
            self.select_item(ctx, index);
        }
    }

    fn update_display(&self, ctx: &SurfaceContext<'_>, grid: &mut GridModel) {
        let tracks = &ctx.model.tracks;
        let first = self.first_send();
        for column in 0..grid.columns() {
            let mut element = SendsElement {
                header: channel_header(tracks, column),
                is_ex_mode: first >= SENDS_PER_ELEMENT,
                ..SendsElement::default()
            };
            if column == 0 {
                element.header.menu_name = label(&self.name);
                element.header.is_menu_selected = true;
            }
            if let Some(track) = tracks.item(column).filter(|t| t.exists()) {
                let touched = self.touch.is_touched(column);
                for send in first..first + SENDS_PER_ELEMENT {
                    let value = track.value(ValueKind::Send(send));
                    let slot = SendSlot {
                        name: label(value.map(|v| v.name()).unwrap_or("")),
                        fader: fader_value(value, touched && send == self.send),
                    };
                    // Capacity equals the loop length.
                    let _ = element.sends.push(slot);
                }
            }
            grid.set_element(column, GridElement::Sends(element));
        }
    }

    fn update_first_row(&self, ctx: &SurfaceContext<'_>, lights: &mut [ButtonColor]) {
        bank_lights(&ctx.model.tracks, lights);
    }

    fn bank_kind(&self) -> Option<BankKind> {
        Some(BankKind::Tracks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use surfacekit::model::SurfaceModel;

    use crate::mode::SurfaceState;
    use crate::testing::{track_bank, track_value};

    fn model() -> SurfaceModel {
        let mut model = SurfaceModel::new(8);
        model.tracks = track_bank(8, 2);
        model
    }

    #[test]
    fn names_are_one_based() {
        assert_eq!(SendMode::new(0).name(), "Send 1");
        assert_eq!(SendMode::name_for(5), "Send 6");
    }

    #[test]
    fn knob_changes_only_its_send() {
        let mut model = model();
        let state = SurfaceState::default();
        let mut ctx = SurfaceContext::new(&mut model, &state);
        let mut mode = SendMode::new(2);

        mode.on_knob_value(&mut ctx, 0, 5);
        assert_eq!(track_value(&ctx.model.tracks, 0, ValueKind::Send(2)), Some(5));
        assert_eq!(track_value(&ctx.model.tracks, 0, ValueKind::Send(1)), Some(0));
        assert_eq!(mode.knob_value(&ctx, 0), Some(5));
    }

    #[test]
    fn display_shows_block_of_four_sends() {
        let mut model = model();
        let state = SurfaceState::default();
        let mut ctx = SurfaceContext::new(&mut model, &state);
        let mut mode = SendMode::new(1);
        mode.on_knob_touch(&mut ctx, 0, true);

        let mut grid = GridModel::new(8);
        mode.update_display(&ctx, &mut grid);

        let GridElement::Sends(first) = &grid.elements()[0] else {
            panic!("expected sends element");
        };
        assert!(!first.is_ex_mode);
        assert_eq!(first.sends.len(), 4);
        assert_eq!(first.sends[0].name.as_str(), "FX 1");
        assert_eq!(first.sends[3].name.as_str(), "FX 4");
        assert!(first.sends[1].fader.edited);
        assert!(!first.sends[0].fader.edited);

        let GridElement::Sends(empty) = &grid.elements()[5] else {
            panic!("expected sends element");
        };
        assert!(empty.sends.is_empty());
        assert_eq!(empty.visible_rows(), 0);
    }

    #[test]
    fn upper_sends_use_extension_mode() {
        let mut model = model();
        let state = SurfaceState::default();
        let ctx = SurfaceContext::new(&mut model, &state);
        let mode = SendMode::new(6);

        let mut grid = GridModel::new(8);
        mode.update_display(&ctx, &mut grid);

        let GridElement::Sends(first) = &grid.elements()[0] else {
            panic!("expected sends element");
        };
        assert!(first.is_ex_mode);
        assert_eq!(first.sends[0].name.as_str(), "FX 5");
    }
}
