use surfacekit::bank::{Item, ValueKind};
use surfacekit::model::BankKind;
use surfacekit_display::grid::{label, ChannelElement};
use surfacekit_display::{GridElement, GridModel};

use crate::event::ButtonEvent;
use crate::mode::{
    apply_knob, bank_lights, channel_header, fader_value, touch_value, ButtonColor, ButtonRow,
    Mode, SurfaceContext, TouchState,
};

use super::{PAN, VOLUME};

/// Knobs control the volume or the pan of the visible tracks.
#[derive(Debug, Clone)]
pub struct TrackValueMode {
    name: &'static str,
    kind: ValueKind,
    absolute: bool,
    touch: TouchState,
}

impl TrackValueMode {
    pub fn volume() -> Self {
        Self::new(VOLUME, ValueKind::Volume)
    }

    pub fn pan() -> Self {
        Self::new(PAN, ValueKind::Pan)
    }

    fn new(name: &'static str, kind: ValueKind) -> Self {
        Self {
            name,
            kind,
            absolute: false,
            touch: TouchState::default(),
        }
    }

    /// Treat knob values as absolute positions (faders, pots).
    pub fn with_absolute(mut self, absolute: bool) -> Self {
        self.absolute = absolute;
        self
    }

    pub fn value_kind(&self) -> ValueKind {
        self.kind
    }
}

impl Mode for TrackValueMode {
    fn name(&self) -> &str {
        self.name
    }

    fn is_temporary(&self) -> bool {
        false
    }

    fn is_absolute(&self) -> bool {
        self.absolute
    }

    fn on_activate(&mut self, _ctx: &mut SurfaceContext<'_>) {
        self.touch.reset();
    }

    fn on_deactivate(&mut self, ctx: &mut SurfaceContext<'_>) {
        self.touch.release_all(ctx, BankKind::Tracks, self.kind);
    }

    fn on_knob_value(&mut self, ctx: &mut SurfaceContext<'_>, index: usize, value: i32) {
        apply_knob(ctx, BankKind::Tracks, index, self.kind, value, self.absolute);
    }

    fn knob_value(&self, ctx: &SurfaceContext<'_>, index: usize) -> Option<i32> {
        ctx.model.tracks.item(index)?.value(self.kind).map(|v| v.value())
    }

    fn on_knob_touch(&mut self, ctx: &mut SurfaceContext<'_>, index: usize, touched: bool) {
        self.touch.set(index, touched);
        touch_value(ctx, BankKind::Tracks, index, self.kind, touched);
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
        for column in 0..grid.columns() {
            let mut header = channel_header(tracks, column);
            if column == 0 {
                header.menu_name = label(self.name);
                header.is_menu_selected = true;
            }
            let element = match tracks.item(column).filter(|t| t.exists()) {
                Some(track) => {
                    let touched = self.touch.is_touched(column);
                    ChannelElement {
                        header,
                        volume: fader_value(
                            track.value(ValueKind::Volume),
                            touched && self.kind == ValueKind::Volume,
                        ),
                        pan: fader_value(
                            track.value(ValueKind::Pan),
                            touched && self.kind == ValueKind::Pan,
                        ),
                    }
                }
                None => ChannelElement {
                    header,
                    ..ChannelElement::default()
                },
            };
            grid.set_element(column, GridElement::Channel(element));
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
    use surfacekit_display::grid::ChannelHeader;

    use crate::mode::SurfaceState;
    use crate::testing::{track_bank, track_value};

    fn model() -> SurfaceModel {
        let mut model = SurfaceModel::new(8);
        model.tracks = track_bank(8, 3);
        model
    }

    #[test]
    fn relative_knob_changes_volume() {
        let mut model = model();
        let state = SurfaceState::default();
        let mut ctx = SurfaceContext::new(&mut model, &state);
        let mut mode = TrackValueMode::volume();

        mode.on_knob_value(&mut ctx, 1, 65);
        assert_eq!(track_value(&ctx.model.tracks, 1, ValueKind::Volume), Some(100 - 63));
        assert_eq!(track_value(&ctx.model.tracks, 0, ValueKind::Volume), Some(100));
    }

    #[test]
    fn absolute_knob_sets_pan() {
        let mut model = model();
        let state = SurfaceState::default();
        let mut ctx = SurfaceContext::new(&mut model, &state);
        let mut mode = TrackValueMode::pan().with_absolute(true);

        mode.on_knob_value(&mut ctx, 2, 10);
        assert_eq!(mode.knob_value(&ctx, 2), Some(10));
        assert_eq!(track_value(&ctx.model.tracks, 2, ValueKind::Volume), Some(100));
    }

    #[test]
    fn knob_on_empty_slot_is_ignored() {
        let mut model = model();
        let state = SurfaceState::default();
        let mut ctx = SurfaceContext::new(&mut model, &state);
        let mut mode = TrackValueMode::volume();

        mode.on_knob_value(&mut ctx, 6, 1);
        assert_eq!(mode.knob_value(&ctx, 6), None);
    }

    #[test]
    fn slow_mode_moves_one_step() {
        let mut model = model();
        let mut state = SurfaceState::default();
        state.value_changer.set_slow(true);
        let mut ctx = SurfaceContext::new(&mut model, &state);
        let mut mode = TrackValueMode::volume();

        mode.on_knob_value(&mut ctx, 0, 20);
        assert_eq!(mode.knob_value(&ctx, 0), Some(101));
    }

    #[test]
    fn display_shows_tracks_and_blank_columns() {
        let mut model = model();
        model.tracks.select_item(1).unwrap();
        let state = SurfaceState::default();
        let mut ctx = SurfaceContext::new(&mut model, &state);
        let mut mode = TrackValueMode::volume();
        mode.on_knob_touch(&mut ctx, 0, true);

        let mut grid = GridModel::new(8);
        mode.update_display(&ctx, &mut grid);

        let GridElement::Channel(first) = &grid.elements()[0] else {
            panic!("expected channel element");
        };
        assert_eq!(first.header.name.as_str(), "Track 1");
        assert_eq!(first.header.menu_name.as_str(), "Volume");
        assert!(first.volume.edited);
        assert_eq!(first.volume.text.as_str(), "0.0 dB");
        assert!(!first.pan.edited);

        let GridElement::Channel(second) = &grid.elements()[1] else {
            panic!("expected channel element");
        };
        assert!(second.header.is_selected);
        assert!(!second.volume.edited);

        let GridElement::Channel(last) = &grid.elements()[7] else {
            panic!("expected channel element");
        };
        assert_eq!(last.header, ChannelHeader::default());
    }

    #[test]
    fn activation_clears_touch() {
        let mut model = model();
        let state = SurfaceState::default();
        let mut ctx = SurfaceContext::new(&mut model, &state);
        let mut mode = TrackValueMode::volume();

        mode.on_knob_touch(&mut ctx, 0, true);
        mode.on_activate(&mut ctx);

        let mut grid = GridModel::new(8);
        mode.update_display(&ctx, &mut grid);
        let GridElement::Channel(first) = &grid.elements()[0] else {
            panic!("expected channel element");
        };
        assert!(!first.volume.edited);
    }

    #[test]
    fn first_row_selects_track() {
        let mut model = model();
        let state = SurfaceState::default();
        let mut ctx = SurfaceContext::new(&mut model, &state);
        let mut mode = TrackValueMode::volume();

        mode.on_button(&mut ctx, ButtonRow::First, 2, ButtonEvent::Pressed);
        assert_eq!(ctx.model.tracks.selected_index(), Some(2));
        mode.on_button(&mut ctx, ButtonRow::Second, 0, ButtonEvent::Pressed);
        assert_eq!(ctx.model.tracks.selected_index(), Some(2));
    }
}
