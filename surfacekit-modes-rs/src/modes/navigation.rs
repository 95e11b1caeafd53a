use surfacekit::bank::Item;
use surfacekit::model::BankKind;
use surfacekit::values::decode_relative;
use surfacekit_display::grid::{label, OptionsElement};
use surfacekit_display::{GridElement, GridModel};

use crate::event::ButtonEvent;
use crate::mode::{bank_lights, ButtonColor, ButtonRow, Mode, SurfaceContext};

use super::TRACK_SELECT;

/// Temporary overlay for moving through the track list.
///
/// Any knob turned clockwise selects the next track, counter-clockwise the
/// previous one. Usually pushed while shift is held, in which case the
/// provided navigation moves whole pages.
#[derive(Debug, Clone, Default)]
pub struct TrackSelectMode;

impl TrackSelectMode {
    pub fn new() -> Self {
        Self
    }

    /// Second-row button (and display column) that pages forwards: the last
    /// visible track slot.
    fn next_page_slot(ctx: &SurfaceContext<'_>) -> usize {
        ctx.model.tracks.page_size().saturating_sub(1)
    }
}

impl Mode for TrackSelectMode {
    fn name(&self) -> &str {
        TRACK_SELECT
    }

    fn is_absolute(&self) -> bool {
        false
    }

    fn on_knob_value(&mut self, ctx: &mut SurfaceContext<'_>, _index: usize, value: i32) {
        match decode_relative(value).signum() {
            1 => self.select_next_item(ctx),
            -1 => self.select_previous_item(ctx),
            _ => {}
        }
    }

    fn on_button(
        &mut self,
        ctx: &mut SurfaceContext<'_>,
        row: ButtonRow,
        index: usize,
        event: ButtonEvent,
    ) {
        if event != ButtonEvent::Pressed {
            return;
        }
        match row {
            ButtonRow::First => self.select_item(ctx, index),
            ButtonRow::Second => {
                if index == 0 {
                    self.select_previous_item_page(ctx);
                } else if index == Self::next_page_slot(ctx) {
                    self.select_next_item_page(ctx);
                }
            }
        }
    }

    fn update_display(&self, ctx: &SurfaceContext<'_>, grid: &mut GridModel) {
        let tracks = &ctx.model.tracks;
        let last = Self::next_page_slot(ctx);
        for column in 0..grid.columns() {
            let mut element = match tracks.item(column).filter(|t| t.exists()) {
                Some(track) => OptionsElement {
                    header: label(track.name()),
                    is_header_selected: tracks.is_slot_selected(column),
                    ..OptionsElement::default()
                },
                None => OptionsElement::default(),
            };
            if column == 0 && self.has_previous_item_page(ctx) {
                element.footer = label("< Page");
            } else if column == last && self.has_next_item_page(ctx) {
                element.footer = label("Page >");
            }
            grid.set_element(column, GridElement::Options(element));
        }
    }

    fn update_first_row(&self, ctx: &SurfaceContext<'_>, lights: &mut [ButtonColor]) {
        bank_lights(&ctx.model.tracks, lights);
    }

    fn update_second_row(&self, ctx: &SurfaceContext<'_>, lights: &mut [ButtonColor]) {
        let last = Self::next_page_slot(ctx);
        for (index, light) in lights.iter_mut().enumerate() {
            let lit = (index == 0 && self.has_previous_item_page(ctx))
                || (index == last && self.has_next_item_page(ctx));
            *light = if lit { ButtonColor::On } else { ButtonColor::Off };
        }
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
    use crate::testing::track_bank;

    fn model() -> SurfaceModel {
        let mut model = SurfaceModel::new(4);
        model.tracks = track_bank(4, 10);
        model
    }

    #[test]
    fn is_a_temporary_mode() {
        assert!(TrackSelectMode::new().is_temporary());
    }

    #[test]
    fn knob_moves_selection() {
        let mut model = model();
        let state = SurfaceState::default();
        let mut ctx = SurfaceContext::new(&mut model, &state);
        let mut mode = TrackSelectMode::new();

        mode.on_knob_value(&mut ctx, 3, 1);
        mode.on_knob_value(&mut ctx, 3, 1);
        assert_eq!(ctx.model.tracks.selected_index(), Some(1));
        mode.on_knob_value(&mut ctx, 0, 127);
        assert_eq!(ctx.model.tracks.selected_index(), Some(0));
    }

    #[test]
    fn knob_pages_while_shift_is_held() {
        let mut model = model();
        let state = SurfaceState {
            shift_pressed: true,
            ..SurfaceState::default()
        };
        let mut ctx = SurfaceContext::new(&mut model, &state);
        let mut mode = TrackSelectMode::new();

        mode.on_knob_value(&mut ctx, 0, 3);
        assert_eq!(ctx.model.tracks.window_start(), 4);
    }

    #[test]
    fn second_row_pages() {
        let mut model = model();
        let state = SurfaceState::default();
        let mut ctx = SurfaceContext::new(&mut model, &state);
        let mut mode = TrackSelectMode::new();

        mode.on_button(&mut ctx, ButtonRow::Second, 3, ButtonEvent::Pressed);
        assert_eq!(ctx.model.tracks.window_start(), 4);
        mode.on_button(&mut ctx, ButtonRow::Second, 3, ButtonEvent::Released);
        assert_eq!(ctx.model.tracks.window_start(), 4);
        mode.on_button(&mut ctx, ButtonRow::Second, 0, ButtonEvent::Pressed);
        assert_eq!(ctx.model.tracks.window_start(), 0);
    }

    #[test]
    fn display_lists_tracks_with_page_hints() {
        let mut model = model();
        let state = SurfaceState::default();
        let mut ctx = SurfaceContext::new(&mut model, &state);
        let mut mode = TrackSelectMode::new();
        mode.select_next_item_page(&mut ctx);
        mode.select_item(&mut ctx, 1);

        let mut grid = GridModel::new(4);
        mode.update_display(&ctx, &mut grid);

        let GridElement::Options(first) = &grid.elements()[0] else {
            panic!("expected options element");
        };
        assert_eq!(first.header.as_str(), "Track 5");
        assert_eq!(first.footer.as_str(), "< Page");

        let GridElement::Options(second) = &grid.elements()[1] else {
            panic!("expected options element");
        };
        assert!(second.is_header_selected);

        let GridElement::Options(last) = &grid.elements()[3] else {
            panic!("expected options element");
        };
        assert_eq!(last.footer.as_str(), "Page >");

        let mut lights = [ButtonColor::Off; 4];
        mode.update_second_row(&ctx, &mut lights);
        assert_eq!(lights, [ButtonColor::On, ButtonColor::Off, ButtonColor::Off, ButtonColor::On]);
    }

    #[test]
    fn page_forward_light_matches_its_button() {
        // Eight buttons over a four-track page.
        let mut model = model();
        let state = SurfaceState::default();
        let mut ctx = SurfaceContext::new(&mut model, &state);
        let mut mode = TrackSelectMode::new();

        let mut lights = [ButtonColor::Off; 8];
        mode.update_second_row(&ctx, &mut lights);
        let lit = lights.iter().rposition(|&c| c == ButtonColor::On);
        assert_eq!(lit, Some(3));

        mode.on_button(&mut ctx, ButtonRow::Second, 7, ButtonEvent::Pressed);
        assert_eq!(ctx.model.tracks.window_start(), 0);
        mode.on_button(&mut ctx, ButtonRow::Second, 3, ButtonEvent::Pressed);
        assert_eq!(ctx.model.tracks.window_start(), 4);
    }
}
