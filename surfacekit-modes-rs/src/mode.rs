//! The [`Mode`] capability trait and the context modes run in.
//!
//! A mode decides what the knobs, the two button rows and the display mean
//! at a given moment. Every hook has a no-op default, so a variant only
//! implements what it uses. The navigation layer ([`Mode::select_next_item`]
//! and friends) is provided once for all variants; it resolves the mode's
//! bank through [`Mode::bank_kind`] and applies the shift rule: while shift
//! is held, item navigation moves by pages instead.

use alloc::string::String;
use alloc::vec::Vec;

use embedded_graphics::pixelcolor::Rgb888;

use surfacekit::bank::{Bank, Item, ItemColor, ItemHandle};
use surfacekit::model::{BankKind, SurfaceModel};
use surfacekit::values::{Value, ValueChanger};
use surfacekit_display::grid::{label, ChannelHeader, FaderValue};
use surfacekit_display::GridModel;

use crate::event::ButtonEvent;

/// Surface-wide flags every mode can read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SurfaceState {
    /// Shift modifier is held.
    pub shift_pressed: bool,
    pub value_changer: ValueChanger,
}

/// What a mode hook gets to work with.
///
/// The model is borrowed for the duration of one event; modes never keep
/// references to it.
pub struct SurfaceContext<'a> {
    pub model: &'a mut SurfaceModel,
    pub state: &'a SurfaceState,
}

impl<'a> SurfaceContext<'a> {
    pub fn new(model: &'a mut SurfaceModel, state: &'a SurfaceState) -> Self {
        Self { model, state }
    }

    pub fn is_shift_pressed(&self) -> bool {
        self.state.shift_pressed
    }
}

/// Which of the two per-column button rows an event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonRow {
    First,
    Second,
}

/// Light state of a row button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonColor {
    #[default]
    Off,
    On,
    /// Highlighted, e.g. the selected item.
    Hi,
}

/// A named interpretation of the physical controls.
pub trait Mode {
    /// Stable name used by [`ModeManager`](crate::ModeManager) lookups.
    fn name(&self) -> &str;

    /// `true` if the mode may be pushed as an overlay.
    fn is_temporary(&self) -> bool {
        true
    }

    /// `true` if knob values are positions rather than relative ticks.
    fn is_absolute(&self) -> bool {
        true
    }

    fn on_activate(&mut self, _ctx: &mut SurfaceContext<'_>) {}

    fn on_deactivate(&mut self, _ctx: &mut SurfaceContext<'_>) {}

    fn on_knob_value(&mut self, _ctx: &mut SurfaceContext<'_>, _index: usize, _value: i32) {}

    /// Current value behind knob `index`, for surfaces with motorized or
    /// LED-ring feedback.
    fn knob_value(&self, _ctx: &SurfaceContext<'_>, _index: usize) -> Option<i32> {
        None
    }

    fn on_knob_touch(&mut self, _ctx: &mut SurfaceContext<'_>, _index: usize, _touched: bool) {}

    fn on_button(
        &mut self,
        _ctx: &mut SurfaceContext<'_>,
        _row: ButtonRow,
        _index: usize,
        _event: ButtonEvent,
    ) {
    }

    /// Write this frame's grid elements.
    fn update_display(&self, _ctx: &SurfaceContext<'_>, _grid: &mut GridModel) {}

    fn update_first_row(&self, _ctx: &SurfaceContext<'_>, _lights: &mut [ButtonColor]) {}

    fn update_second_row(&self, _ctx: &SurfaceContext<'_>, _lights: &mut [ButtonColor]) {}

    /// The bank this mode pages through, if any.
    fn bank_kind(&self) -> Option<BankKind> {
        None
    }

    fn selected_item_name(&self, ctx: &SurfaceContext<'_>) -> Option<String> {
        let kind = self.bank_kind()?;
        ctx.model
            .bank(kind)
            .selected_item()
            .map(|item| String::from(item.name()))
    }

    // ── Navigation ───────────────────────────────────────────────────

    /// Select the item in visible `slot` of the mode's bank.
    fn select_item(&mut self, ctx: &mut SurfaceContext<'_>, slot: usize) {
        let Some(kind) = self.bank_kind() else {
            return;
        };
        if let Err(_e) = ctx.model.bank_mut(kind).select_item(slot) {
            #[cfg(feature = "defmt")]
            defmt::warn!("select_item({}) ignored: {}", slot, _e);
        }
    }

    fn select_previous_item(&mut self, ctx: &mut SurfaceContext<'_>) {
        if ctx.is_shift_pressed() {
            self.select_previous_item_page(ctx);
            return;
        }
        if let Some(kind) = self.bank_kind() {
            ctx.model.bank_mut(kind).select_previous_item();
        }
    }

    fn select_next_item(&mut self, ctx: &mut SurfaceContext<'_>) {
        if ctx.is_shift_pressed() {
            self.select_next_item_page(ctx);
            return;
        }
        if let Some(kind) = self.bank_kind() {
            ctx.model.bank_mut(kind).select_next_item();
        }
    }

    fn select_previous_item_page(&mut self, ctx: &mut SurfaceContext<'_>) {
        if let Some(kind) = self.bank_kind() {
            ctx.model.bank_mut(kind).select_previous_page();
        }
    }

    fn select_next_item_page(&mut self, ctx: &mut SurfaceContext<'_>) {
        if let Some(kind) = self.bank_kind() {
            ctx.model.bank_mut(kind).select_next_page();
        }
    }

    fn has_previous_item(&self, ctx: &SurfaceContext<'_>) -> bool {
        self.bank_kind()
            .is_some_and(|kind| ctx.model.bank(kind).can_scroll_backwards())
    }

    fn has_next_item(&self, ctx: &SurfaceContext<'_>) -> bool {
        self.bank_kind()
            .is_some_and(|kind| ctx.model.bank(kind).can_scroll_forwards())
    }

    fn has_previous_item_page(&self, ctx: &SurfaceContext<'_>) -> bool {
        self.bank_kind()
            .is_some_and(|kind| ctx.model.bank(kind).can_scroll_page_backwards())
    }

    fn has_next_item_page(&self, ctx: &SurfaceContext<'_>) -> bool {
        self.bank_kind()
            .is_some_and(|kind| ctx.model.bank(kind).can_scroll_page_forwards())
    }
}

// ── Helpers shared by the concrete modes ─────────────────────────────────

/// Per-knob touch flags. Reset whenever the owning mode is activated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TouchState {
    touched: Vec<bool>,
}

impl TouchState {
    pub fn set(&mut self, index: usize, touched: bool) {
        if index >= self.touched.len() {
            self.touched.resize(index + 1, false);
        }
        self.touched[index] = touched;
    }

    pub fn is_touched(&self, index: usize) -> bool {
        self.touched.get(index).copied().unwrap_or(false)
    }

    pub fn reset(&mut self) {
        self.touched.clear();
    }

    /// Send `touch(false)` to the value behind every touched knob, then
    /// reset. Called when the owning mode is left so no host value stays
    /// touched after its release goes to another mode.
    pub fn release_all(
        &mut self,
        ctx: &mut SurfaceContext<'_>,
        bank: BankKind,
        kind: surfacekit::bank::ValueKind,
    ) {
        for (index, touched) in self.touched.iter().enumerate() {
            if *touched {
                touch_value(ctx, bank, index, kind, false);
            }
        }
        self.reset();
    }
}

/// Convert a host color to the display palette.
pub fn to_rgb(color: ItemColor) -> Rgb888 {
    Rgb888::new(color.red, color.green, color.blue)
}

/// Track row for the item in `slot`, blank if the slot is empty.
pub fn channel_header(bank: &Bank<ItemHandle>, slot: usize) -> ChannelHeader {
    match bank.item(slot).filter(|item| item.exists()) {
        Some(item) => ChannelHeader {
            name: label(item.name()),
            color: item.color().map(to_rgb),
            is_selected: bank.is_slot_selected(slot),
            ..ChannelHeader::default()
        },
        None => ChannelHeader::default(),
    }
}

/// Snapshot a value for drawing. Value text is shown only while touched.
pub fn fader_value(value: Option<&dyn Value>, touched: bool) -> FaderValue {
    match value {
        Some(v) => FaderValue {
            text: if touched { label(v.display_text()) } else { label("") },
            value: v.value(),
            max_value: v.max_value(),
            modulated: v.modulated_value(),
            edited: touched,
        },
        None => FaderValue::default(),
    }
}

/// Light the visible slots of `bank`: selected `Hi`, present `On`.
pub fn bank_lights(bank: &Bank<ItemHandle>, lights: &mut [ButtonColor]) {
    for (slot, light) in lights.iter_mut().enumerate() {
        *light = match bank.item(slot) {
            Some(item) if item.exists() && bank.is_slot_selected(slot) => ButtonColor::Hi,
            Some(item) if item.exists() => ButtonColor::On,
            _ => ButtonColor::Off,
        };
    }
}

/// Route a knob value to `kind` on the item in `slot`.
///
/// Returns `false` if there is no item or it has no such value.
pub fn apply_knob(
    ctx: &mut SurfaceContext<'_>,
    bank: BankKind,
    slot: usize,
    kind: surfacekit::bank::ValueKind,
    raw: i32,
    absolute: bool,
) -> bool {
    let changer = ctx.state.value_changer;
    let Some(value) = ctx
        .model
        .bank_mut(bank)
        .item_mut(slot)
        .and_then(|item| item.value_mut(kind))
    else {
        #[cfg(feature = "defmt")]
        defmt::debug!("knob {} has no target", slot);
        return false;
    };
    changer.apply(value, raw, absolute);
    true
}

/// Forward a knob touch to the value behind `slot`.
pub fn touch_value(
    ctx: &mut SurfaceContext<'_>,
    bank: BankKind,
    slot: usize,
    kind: surfacekit::bank::ValueKind,
    touched: bool,
) {
    if let Some(value) = ctx
        .model
        .bank_mut(bank)
        .item_mut(slot)
        .and_then(|item| item.value_mut(kind))
    {
        value.touch(touched);
    }
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use surfacekit::bank::ValueKind;

    use crate::testing::{track_bank, Track};

    fn volume_touched(ctx: &SurfaceContext<'_>, slot: usize) -> bool {
        ctx.model
            .tracks
            .item(slot)
            .and_then(|t| t.value(ValueKind::Volume))
            .is_some_and(|v| v.is_touched())
    }

    /// Mode with a bank and nothing else; exercises the provided layer.
    struct Plain(Option<BankKind>);

    impl Mode for Plain {
        fn name(&self) -> &str {
            "Plain"
        }

        fn bank_kind(&self) -> Option<BankKind> {
            self.0
        }
    }

    fn model(total: usize) -> SurfaceModel {
        let mut model = SurfaceModel::new(4);
        model.tracks = track_bank(4, total);
        model
    }

    #[test]
    fn navigation_moves_selection() {
        let mut model = model(10);
        let state = SurfaceState::default();
        let mut ctx = SurfaceContext::new(&mut model, &state);
        let mut mode = Plain(Some(BankKind::Tracks));

        mode.select_next_item(&mut ctx);
        mode.select_next_item(&mut ctx);
        assert_eq!(ctx.model.tracks.selected_index(), Some(1));
        assert_eq!(mode.selected_item_name(&ctx).as_deref(), Some("Track 2"));
        mode.select_previous_item(&mut ctx);
        assert_eq!(ctx.model.tracks.selected_index(), Some(0));
    }

    #[test]
    fn shift_redirects_item_navigation_to_pages() {
        let mut model = model(10);
        let state = SurfaceState {
            shift_pressed: true,
            ..SurfaceState::default()
        };
        let mut ctx = SurfaceContext::new(&mut model, &state);
        let mut mode = Plain(Some(BankKind::Tracks));

        mode.select_next_item(&mut ctx);
        assert_eq!(ctx.model.tracks.window_start(), 4);
        assert_eq!(ctx.model.tracks.selected_index(), None);
        mode.select_next_item(&mut ctx);
        assert_eq!(ctx.model.tracks.window_start(), 8);
        mode.select_previous_item(&mut ctx);
        assert_eq!(ctx.model.tracks.window_start(), 4);
    }

    #[test]
    fn has_predicates_follow_bank() {
        let mut model = model(10);
        let state = SurfaceState::default();
        let mut ctx = SurfaceContext::new(&mut model, &state);
        let mut mode = Plain(Some(BankKind::Tracks));

        assert!(mode.has_next_item(&ctx));
        assert!(mode.has_next_item_page(&ctx));
        assert!(!mode.has_previous_item(&ctx));
        assert!(!mode.has_previous_item_page(&ctx));

        mode.select_next_item_page(&mut ctx);
        assert!(mode.has_previous_item_page(&ctx));
    }

    #[test]
    fn mode_without_bank_is_inert() {
        let mut model = model(10);
        let state = SurfaceState::default();
        let mut ctx = SurfaceContext::new(&mut model, &state);
        let mut mode = Plain(None);

        mode.select_item(&mut ctx, 2);
        mode.select_next_item(&mut ctx);
        mode.select_next_item_page(&mut ctx);
        assert_eq!(ctx.model.tracks.selected_index(), None);
        assert_eq!(ctx.model.tracks.window_start(), 0);
        assert!(!mode.has_next_item(&ctx));
        assert!(!mode.has_next_item_page(&ctx));
        assert!(!mode.has_previous_item(&ctx));
        assert!(!mode.has_previous_item_page(&ctx));
        assert_eq!(mode.selected_item_name(&ctx), None);
    }

    #[test]
    fn select_item_on_empty_slot_is_ignored() {
        let mut model = model(2);
        let state = SurfaceState::default();
        let mut ctx = SurfaceContext::new(&mut model, &state);
        let mut mode = Plain(Some(BankKind::Tracks));

        mode.select_item(&mut ctx, 3);
        assert_eq!(ctx.model.tracks.selected_index(), None);
        mode.select_item(&mut ctx, 1);
        assert_eq!(ctx.model.tracks.selected_index(), Some(1));
    }

    #[test]
    fn touch_state_grows_and_resets() {
        let mut t = TouchState::default();
        assert!(!t.is_touched(5));
        t.set(5, true);
        assert!(t.is_touched(5));
        assert!(!t.is_touched(4));
        t.reset();
        assert!(!t.is_touched(5));
    }

    #[test]
    fn release_all_untouches_host_values() {
        let mut model = model(4);
        let state = SurfaceState::default();
        let mut ctx = SurfaceContext::new(&mut model, &state);
        let mut touch = TouchState::default();

        touch.set(0, true);
        touch.set(2, true);
        touch_value(&mut ctx, BankKind::Tracks, 0, ValueKind::Volume, true);
        touch_value(&mut ctx, BankKind::Tracks, 2, ValueKind::Volume, true);
        assert!(volume_touched(&ctx, 0));

        touch.release_all(&mut ctx, BankKind::Tracks, ValueKind::Volume);
        assert!(!touch.is_touched(0));
        assert!(!volume_touched(&ctx, 0));
        assert!(!volume_touched(&ctx, 2));
    }

    #[test]
    fn fader_value_hides_text_until_touched() {
        let track = Track::new("Bass");
        let volume = track.value(ValueKind::Volume);
        assert!(fader_value(volume, false).text.is_empty());
        assert_eq!(fader_value(volume, true).text.as_str(), "0.0 dB");
        assert!(fader_value(volume, true).edited);
        assert_eq!(fader_value(None, true), FaderValue::default());
    }

    #[test]
    fn lights_mark_selection() {
        let mut bank = track_bank(4, 3);
        bank.select_item(1).unwrap();
        let mut lights = [ButtonColor::Off; 4];
        bank_lights(&bank, &mut lights);
        assert_eq!(
            lights,
            [ButtonColor::On, ButtonColor::Hi, ButtonColor::On, ButtonColor::Off]
        );
    }

    #[test]
    fn header_for_missing_slot_is_blank() {
        let bank = track_bank(4, 1);
        assert_eq!(channel_header(&bank, 0).name.as_str(), "Track 1");
        assert_eq!(channel_header(&bank, 2), ChannelHeader::default());
    }
}
