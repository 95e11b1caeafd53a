//! Grid elements: immutable per-frame snapshots that draw one display column.
//!
//! [`GridElement`] is a closed set of variants. Each variant captures the
//! values it shows when the mode rebuilds the grid and never changes
//! afterwards; a new value means a new element. Drawing is a pure function
//! of the snapshot, the column geometry and the [`RenderConfiguration`].
//!
//! Text is stored in fixed-capacity [`Label`]s; longer strings are
//! truncated at a character boundary.

use embedded_graphics::{pixelcolor::Rgb888, prelude::*, primitives::Rectangle};
use heapless::{String, Vec};

use crate::layout::{draw_text_in_bounds, fill_rect, stroke_rect, Align, Layout, RenderConfiguration};

/// Maximum number of bytes kept from a name or value text.
pub const LABEL_CAPACITY: usize = 24;

/// Sends shown by one [`SendsElement`].
pub const SENDS_PER_ELEMENT: usize = 4;

/// Fixed-capacity text for grid elements.
pub type Label = String<LABEL_CAPACITY>;

/// Copy `text` into a [`Label`], truncating to [`LABEL_CAPACITY`] bytes.
pub fn label(text: &str) -> Label {
    let mut out = Label::new();
    for ch in text.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}

// ── Snapshots ────────────────────────────────────────────────────────────

/// Menu label and track row shared by the channel-like elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelHeader {
    /// Text of the menu box at the top of the column. Empty = no menu.
    pub menu_name: Label,
    pub is_menu_selected: bool,
    /// Track/device name in the bottom row. Empty = column switched off.
    pub name: Label,
    pub color: Option<Rgb888>,
    pub is_selected: bool,
}

/// Snapshot of one value drawn as a fader.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaderValue {
    /// Host-formatted value text. Non-empty while the knob is touched.
    pub text: Label,
    pub value: i32,
    pub max_value: i32,
    /// Modulated value, `None` when not modulated.
    pub modulated: Option<i32>,
    /// Knob is being edited (touched or recently turned).
    pub edited: bool,
}

impl FaderValue {
    /// Pixel width of `value` on a slider `slider_width` pixels wide.
    fn scaled(&self, value: i32, slider_width: i32) -> i32 {
        if self.max_value <= 0 {
            return 0;
        }
        (value.clamp(0, self.max_value) as i64 * slider_width as i64 / self.max_value as i64) as i32
    }

    /// Width of the unmodulated value.
    pub fn value_width(&self, slider_width: i32) -> i32 {
        self.scaled(self.value, slider_width)
    }

    /// Width of the drawn fader bar: the modulated value when present.
    pub fn fader_width(&self, slider_width: i32) -> i32 {
        match self.modulated {
            Some(m) => self.scaled(m, slider_width),
            None => self.value_width(slider_width),
        }
    }

    /// Width of the edit marker: 3 px while touched (text shown), else 1 px.
    pub fn marker_width(&self) -> i32 {
        if self.text.is_empty() {
            1
        } else {
            3
        }
    }

    /// Left edge of the edit marker, kept inside the slider.
    pub fn marker_left(&self, fader_left: i32, slider_width: i32) -> i32 {
        let w = self.marker_width();
        (fader_left + slider_width - w - 1).min(fader_left + self.value_width(slider_width) + 1)
    }
}

/// One send slot of a [`SendsElement`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendSlot {
    /// Send target name. An empty name ends the list.
    pub name: Label,
    pub fader: FaderValue,
}

/// Column with a top and bottom menu label and a centred title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionsElement {
    pub header: Label,
    pub is_header_selected: bool,
    pub title: Label,
    pub footer: Label,
    pub is_footer_selected: bool,
}

/// Channel strip: pan bar and vertical volume fader.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelElement {
    pub header: ChannelHeader,
    pub volume: FaderValue,
    pub pan: FaderValue,
}

/// Up to four sends of a channel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendsElement {
    pub header: ChannelHeader,
    pub sends: Vec<SendSlot, SENDS_PER_ELEMENT>,
    /// Element visually continues the element to its left (sends 5–8).
    pub is_ex_mode: bool,
}

/// One named parameter with a horizontal fader.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterElement {
    pub header: ChannelHeader,
    pub parameter_name: Label,
    pub fader: FaderValue,
}

/// A renderable unit occupying one display column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GridElement {
    /// Blank column.
    #[default]
    Empty,
    Options(OptionsElement),
    Channel(ChannelElement),
    Sends(SendsElement),
    Parameter(ParameterElement),
}

impl GridElement {
    /// Draw the element into the column starting at `left`.
    pub fn draw<D>(
        &self,
        target: &mut D,
        left: i32,
        width: u32,
        height: u32,
        config: &RenderConfiguration,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let col = Column::new(left, width, height);
        match self {
            GridElement::Empty => Ok(()),
            GridElement::Options(e) => e.draw(target, &col, config),
            GridElement::Channel(e) => e.draw(target, &col, config),
            GridElement::Sends(e) => e.draw(target, &col, config),
            GridElement::Parameter(e) => e.draw(target, &col, config),
        }
    }
}

// ── Geometry ─────────────────────────────────────────────────────────────

/// Column geometry handed to the variant draw functions.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub left: i32,
    pub width: i32,
    pub height: i32,
    pub layout: Layout,
}

impl Column {
    pub fn new(left: i32, width: u32, height: u32) -> Self {
        Self {
            left,
            width: width as i32,
            height: height as i32,
            layout: Layout::for_height(height),
        }
    }

    pub fn fader_left(&self) -> i32 {
        self.left + self.layout.inset
    }

    pub fn slider_width(&self) -> i32 {
        self.width - 2 * self.layout.inset - 1
    }

    pub fn track_row_top(&self) -> i32 {
        self.layout.track_row_top(self.height)
    }
}

fn draw_menu<D>(
    target: &mut D,
    col: &Column,
    top: i32,
    text: &str,
    selected: bool,
    config: &RenderConfiguration,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    if text.is_empty() {
        return Ok(());
    }
    let l = &col.layout;
    let (fill, ink) = if selected {
        (config.text, config.border)
    } else {
        (config.background_darker, config.text)
    };
    fill_rect(target, col.left, top, col.width, l.menu_height, fill)?;
    draw_text_in_bounds(target, text, col.left, top, col.width, l.menu_height, Align::Center, ink)
}

impl ChannelHeader {
    /// Draw the menu box and the track row. Returns `false` when the column
    /// is switched off (empty name), in which case only the menu is drawn.
    fn draw<D>(&self, target: &mut D, col: &Column, config: &RenderConfiguration) -> Result<bool, D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        draw_menu(target, col, 0, &self.menu_name, self.is_menu_selected, config)?;
        if self.name.is_empty() {
            return Ok(false);
        }

        let l = &col.layout;
        let footer_top = col.track_row_top() + l.separator_size;
        let strip = self.color.unwrap_or(config.background_darker);
        fill_rect(target, col.left, footer_top, col.width, l.half_unit, strip)?;

        let name_top = footer_top + l.half_unit;
        let row_fill = if self.is_selected {
            config.background_lighter
        } else {
            config.background
        };
        fill_rect(target, col.left, name_top, col.width, col.height - name_top, row_fill)?;
        draw_text_in_bounds(
            target,
            &self.name,
            col.left,
            name_top,
            col.width,
            col.height - name_top,
            Align::Center,
            config.text,
        )?;
        Ok(true)
    }
}

/// Draw a horizontal fader with optional edit marker.
fn draw_fader<D>(
    target: &mut D,
    fader: &FaderValue,
    fader_left: i32,
    top: i32,
    slider_width: i32,
    slider_height: i32,
    config: &RenderConfiguration,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    fill_rect(target, fader_left, top, slider_width, slider_height, config.border)?;
    let fader_top = top + 1;
    fill_rect(
        target,
        fader_left + 1,
        fader_top,
        fader.fader_width(slider_width) - 1,
        slider_height - 2,
        config.fader,
    )?;
    if fader.edited {
        fill_rect(
            target,
            fader.marker_left(fader_left, slider_width),
            fader_top,
            fader.marker_width(),
            slider_height - 2,
            config.edit,
        )?;
    }
    Ok(())
}

// ── Options ──────────────────────────────────────────────────────────────

impl OptionsElement {
    fn draw<D>(&self, target: &mut D, col: &Column, config: &RenderConfiguration) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let l = &col.layout;
        draw_menu(target, col, 0, &self.header, self.is_header_selected, config)?;
        draw_text_in_bounds(
            target,
            &self.title,
            col.left,
            l.menu_height,
            col.width,
            col.height - 2 * l.menu_height,
            Align::Center,
            config.text,
        )?;
        draw_menu(
            target,
            col,
            col.height - l.menu_height,
            &self.footer,
            self.is_footer_selected,
            config,
        )
    }
}

// ── Channel ──────────────────────────────────────────────────────────────

impl ChannelElement {
    /// Bounds of the pan bar: one unit high below the menu.
    pub fn pan_bounds(col: &Column) -> Rectangle {
        let l = &col.layout;
        Rectangle::new(
            Point::new(col.fader_left(), l.menu_height + 2 * l.separator_size),
            Size::new(col.slider_width().max(0) as u32, l.unit as u32),
        )
    }

    /// Bounds of the vertical volume fader.
    pub fn volume_bounds(col: &Column) -> Rectangle {
        let l = &col.layout;
        let top = l.menu_height + 2 * l.unit + 4 * l.separator_size;
        let bottom = col.track_row_top() - l.separator_size;
        Rectangle::new(
            Point::new(col.fader_left(), top),
            Size::new((l.double_unit).max(0) as u32, (bottom - top).max(0) as u32),
        )
    }

    fn draw<D>(&self, target: &mut D, col: &Column, config: &RenderConfiguration) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        if !self.header.draw(target, col, config)? {
            return Ok(());
        }
        let l = &col.layout;

        // Pan: filled from the centre towards the value.
        let pan = Self::pan_bounds(col);
        let (px, py) = (pan.top_left.x, pan.top_left.y);
        let (pw, ph) = (pan.size.width as i32, pan.size.height as i32);
        fill_rect(target, px, py, pw, ph, config.border)?;
        let centre = px + pw / 2;
        let pos = px + self.pan.fader_width(pw);
        fill_rect(target, centre.min(pos), py + 1, (pos - centre).abs().max(1), ph - 2, config.fader)?;
        if self.pan.edited {
            let marker = self.pan.marker_left(px, pw);
            fill_rect(target, marker, py + 1, self.pan.marker_width(), ph - 2, config.edit)?;
        }

        // Volume text between pan bar and fader.
        let text_top = py + ph + l.separator_size;
        draw_text_in_bounds(
            target,
            &self.volume.text,
            col.fader_left(),
            text_top,
            col.slider_width(),
            l.unit,
            Align::Left,
            config.text,
        )?;

        // Volume: vertical fader filled from the bottom.
        let vol = Self::volume_bounds(col);
        let (vx, vy) = (vol.top_left.x, vol.top_left.y);
        let (vw, vh) = (vol.size.width as i32, vol.size.height as i32);
        fill_rect(target, vx, vy, vw, vh, config.border)?;
        let level = self.volume.fader_width(vh - 2);
        fill_rect(target, vx + 1, vy + vh - 1 - level, vw - 2, level, config.fader)?;
        if self.volume.edited {
            let mark = self.volume.value_width(vh - 2).min(vh - 3);
            fill_rect(target, vx + 1, vy + vh - 2 - mark, vw - 2, 1, config.edit)?;
        }
        Ok(())
    }
}

// ── Sends ────────────────────────────────────────────────────────────────

impl SendsElement {
    /// Number of send rows that are drawn.
    ///
    /// Rendering stops at the first empty send name, unless the element is
    /// in extension mode where every slot is drawn.
    pub fn visible_rows(&self) -> usize {
        if self.is_ex_mode {
            self.sends.len()
        } else {
            self.sends.iter().take_while(|s| !s.name.is_empty()).count()
        }
    }

    /// Height of one text or fader row; four sends use eight rows.
    pub fn send_row_height(col: &Column) -> i32 {
        let top = col.layout.menu_height + 1;
        (col.track_row_top() - top) / 8
    }

    /// Border rectangle of the fader for send `row`.
    pub fn fader_bounds(&self, row: usize, col: &Column) -> Rectangle {
        let l = &col.layout;
        let row_height = Self::send_row_height(col);
        let start = l.menu_height + if self.is_ex_mode { 0 } else { l.separator_size };
        let top = start + (2 * row as i32 + 1) * row_height + l.separator_size;
        Rectangle::new(
            Point::new(col.fader_left(), top),
            Size::new(
                col.slider_width().max(0) as u32,
                (row_height - 2 * l.separator_size).max(0) as u32,
            ),
        )
    }

    fn draw<D>(&self, target: &mut D, col: &Column, config: &RenderConfiguration) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let has_name = self.header.draw(target, col, config)?;
        if !has_name && !self.is_ex_mode {
            return Ok(());
        }

        let l = &col.layout;
        let slider_width = col.slider_width();
        let area_top = l.menu_height + 1;
        let area_height = col.track_row_top() - area_top;
        let row_height = Self::send_row_height(col);
        let slider_height = row_height - 2 * l.separator_size;

        // Background of the slider area; extension mode bleeds into the
        // separator of the column on the left.
        let fill = if self.header.is_selected || self.is_ex_mode {
            config.background_lighter
        } else {
            config.background
        };
        if self.is_ex_mode {
            fill_rect(
                target,
                col.left - l.separator_size,
                area_top,
                col.width + l.separator_size,
                area_height - 2,
                fill,
            )?;
        } else {
            fill_rect(target, col.left, area_top, col.width, area_height, fill)?;
        }

        let fader_left = col.fader_left();
        let rows = self.visible_rows();
        for (row, send) in self.sends.iter().take(rows).enumerate() {
            let bounds = self.fader_bounds(row, col);
            let name_top = bounds.top_left.y - row_height;
            draw_text_in_bounds(
                target,
                &send.name,
                fader_left,
                name_top,
                slider_width,
                row_height,
                Align::Left,
                config.text,
            )?;
            draw_fader(
                target,
                &send.fader,
                fader_left,
                bounds.top_left.y,
                slider_width,
                slider_height,
                config,
            )?;
        }

        // Value text boxes on top of the faders.
        let box_width = slider_width / 2;
        let box_left = fader_left + slider_width - box_width;
        for (row, send) in self.sends.iter().take(rows).enumerate() {
            if send.fader.text.is_empty() {
                continue;
            }
            let row_top = l.menu_height + (2 * row as i32 + 1) * row_height;
            let text_top = row_top
                + slider_height
                + 1
                + if self.is_ex_mode { 0 } else { l.separator_size };
            fill_rect(target, box_left, text_top, box_width, l.unit, config.background_darker)?;
            stroke_rect(target, box_left, text_top, box_width - 1, l.unit, config.border)?;
            draw_text_in_bounds(
                target,
                &send.fader.text,
                box_left,
                text_top,
                box_width,
                l.unit,
                Align::Center,
                config.text,
            )?;
        }
        Ok(())
    }
}

// ── Parameter ────────────────────────────────────────────────────────────

impl ParameterElement {
    /// Border rectangle of the parameter fader.
    pub fn fader_bounds(col: &Column) -> Rectangle {
        let l = &col.layout;
        let top = l.menu_height + l.unit + 3 * l.separator_size;
        Rectangle::new(
            Point::new(col.fader_left(), top),
            Size::new(col.slider_width().max(0) as u32, l.unit as u32),
        )
    }

    fn draw<D>(&self, target: &mut D, col: &Column, config: &RenderConfiguration) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let has_name = self.header.draw(target, col, config)?;
        if self.parameter_name.is_empty() {
            return Ok(());
        }
        let l = &col.layout;
        let area_top = l.menu_height + 1;
        let fill = if has_name && self.header.is_selected {
            config.background_lighter
        } else {
            config.background
        };
        fill_rect(target, col.left, area_top, col.width, col.track_row_top() - area_top, fill)?;

        draw_text_in_bounds(
            target,
            &self.parameter_name,
            col.fader_left(),
            area_top + l.separator_size,
            col.slider_width(),
            l.unit,
            Align::Left,
            config.text,
        )?;

        let bounds = Self::fader_bounds(col);
        draw_fader(
            target,
            &self.fader,
            bounds.top_left.x,
            bounds.top_left.y,
            bounds.size.width as i32,
            bounds.size.height as i32,
            config,
        )?;

        draw_text_in_bounds(
            target,
            &self.fader.text,
            col.fader_left(),
            bounds.top_left.y + bounds.size.height as i32 + l.separator_size,
            col.slider_width(),
            l.unit,
            Align::Center,
            config.text,
        )
    }
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::Bitmap;

    const WIDTH: u32 = 120;
    const HEIGHT: u32 = 160;

    fn fader(value: i32, max_value: i32) -> FaderValue {
        FaderValue {
            value,
            max_value,
            ..FaderValue::default()
        }
    }

    fn header(name: &str) -> ChannelHeader {
        ChannelHeader {
            name: label(name),
            ..ChannelHeader::default()
        }
    }

    fn sends(names: [&str; 4], is_ex_mode: bool) -> SendsElement {
        let mut element = SendsElement {
            header: header("Track"),
            is_ex_mode,
            ..SendsElement::default()
        };
        for name in names {
            element
                .sends
                .push(SendSlot {
                    name: label(name),
                    fader: fader(8000, 16383),
                })
                .unwrap();
        }
        element
    }

    fn render(element: &GridElement) -> Bitmap {
        let config = RenderConfiguration::default();
        let mut bitmap = Bitmap::new(WIDTH, HEIGHT).unwrap();
        bitmap.fill(config.background);
        element
            .draw(&mut bitmap, 0, WIDTH, HEIGHT, &config)
            .unwrap_or_else(|e| match e {});
        bitmap
    }

    // ── Labels ───────────────────────────────────────────────────────

    #[test]
    fn label_truncates_long_text() {
        let l = label("ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        assert_eq!(l.as_str(), "ABCDEFGHIJKLMNOPQRSTUVWX");
    }

    #[test]
    fn label_truncates_at_char_boundary() {
        // 12 two-byte characters fill the label exactly; the 13th is dropped.
        let l = label("ééééééééééééé");
        assert_eq!(l.chars().count(), 12);
    }

    // ── Fader math ───────────────────────────────────────────────────

    #[test]
    fn fader_width_is_proportional() {
        assert_eq!(fader(0, 100).fader_width(50), 0);
        assert_eq!(fader(50, 100).fader_width(50), 25);
        assert_eq!(fader(100, 100).fader_width(50), 50);
    }

    #[test]
    fn fader_width_uses_modulated_value() {
        let f = FaderValue {
            modulated: Some(100),
            ..fader(20, 100)
        };
        assert_eq!(f.value_width(50), 10);
        assert_eq!(f.fader_width(50), 50);
    }

    #[test]
    fn modulated_at_max_is_still_modulated() {
        let f = FaderValue {
            modulated: Some(16383),
            ..fader(0, 16383)
        };
        assert_eq!(f.fader_width(100), 100);
    }

    #[test]
    fn zero_max_value_draws_nothing() {
        assert_eq!(fader(10, 0).fader_width(50), 0);
    }

    #[test]
    fn edit_marker_stays_inside_slider() {
        let full = fader(100, 100);
        assert_eq!(full.marker_left(10, 50), 10 + 50 - 1 - 1);

        let touched = FaderValue {
            text: label("0 dB"),
            ..fader(100, 100)
        };
        assert_eq!(touched.marker_width(), 3);
        assert_eq!(touched.marker_left(10, 50), 10 + 50 - 3 - 1);

        let low = fader(10, 100);
        assert_eq!(low.marker_left(10, 50), 10 + 5 + 1);
    }

    // ── Sends element ────────────────────────────────────────────────

    #[test]
    fn sends_stop_at_first_empty_name() {
        let element = sends(["A", "", "", ""], false);
        assert_eq!(element.visible_rows(), 1);

        let element = sends(["A", "B", "", "D"], false);
        assert_eq!(element.visible_rows(), 2);
    }

    #[test]
    fn sends_in_ex_mode_render_every_row() {
        let element = sends(["A", "", "", ""], true);
        assert_eq!(element.visible_rows(), 4);
    }

    #[test]
    fn sends_single_row_is_drawn_and_rest_left_blank() {
        let config = RenderConfiguration::default();
        let element = sends(["A", "", "", ""], false);
        let col = Column::new(0, WIDTH, HEIGHT);
        let bitmap = render(&GridElement::Sends(element.clone()));

        // The fader border's left edge is border-coloured only where a row was drawn.
        let first = element.fader_bounds(0, &col);
        assert_eq!(bitmap.pixel(first.top_left.x, first.top_left.y), Some(config.border));

        for row in 1..4 {
            let bounds = element.fader_bounds(row, &col);
            assert_eq!(
                bitmap.pixel(bounds.top_left.x, bounds.top_left.y),
                Some(config.background),
                "row {} should not be drawn",
                row
            );
        }
    }

    #[test]
    fn sends_in_ex_mode_draws_all_fader_rows() {
        let config = RenderConfiguration::default();
        let element = sends(["A", "", "", ""], true);
        let col = Column::new(0, WIDTH, HEIGHT);
        let bitmap = render(&GridElement::Sends(element.clone()));

        for row in 0..4 {
            let bounds = element.fader_bounds(row, &col);
            assert_eq!(bitmap.pixel(bounds.top_left.x, bounds.top_left.y), Some(config.border));
        }
    }

    #[test]
    fn sends_without_channel_name_are_off() {
        let config = RenderConfiguration::default();
        let mut element = sends(["A", "B", "C", "D"], false);
        element.header.name = Label::new();
        let bitmap = render(&GridElement::Sends(element));
        assert!(bitmap
            .as_bytes()
            .chunks_exact(3)
            .all(|px| px == [config.background.r(), config.background.g(), config.background.b()]));
    }

    #[test]
    fn sends_fader_rows_fit_above_track_row() {
        let element = sends(["A", "B", "C", "D"], false);
        let col = Column::new(0, WIDTH, HEIGHT);
        let last = element.fader_bounds(3, &col);
        assert!(last.top_left.y + last.size.height as i32 <= col.track_row_top());
    }

    // ── Other variants ───────────────────────────────────────────────

    #[test]
    fn empty_element_draws_nothing() {
        let config = RenderConfiguration::default();
        let bitmap = render(&GridElement::Empty);
        assert_eq!(bitmap.pixel(10, 10), Some(config.background));
    }

    #[test]
    fn selected_menu_is_inverted() {
        let config = RenderConfiguration::default();
        let element = GridElement::Options(OptionsElement {
            header: label("Vol"),
            is_header_selected: true,
            ..OptionsElement::default()
        });
        let bitmap = render(&element);
        // Top-left corner of the menu box is outside the centred text.
        assert_eq!(bitmap.pixel(0, 0), Some(config.text));
    }

    #[test]
    fn parameter_fader_fills_to_value() {
        let config = RenderConfiguration::default();
        let element = ParameterElement {
            header: header("Synth"),
            parameter_name: label("Cutoff"),
            fader: fader(100, 100),
        };
        let col = Column::new(0, WIDTH, HEIGHT);
        let bounds = ParameterElement::fader_bounds(&col);
        let bitmap = render(&GridElement::Parameter(element));

        let right = bounds.top_left.x + bounds.size.width as i32 - 2;
        assert_eq!(bitmap.pixel(right, bounds.top_left.y + 2), Some(config.fader));
    }

    #[test]
    fn channel_track_color_strip() {
        let element = ChannelElement {
            header: ChannelHeader {
                color: Some(Rgb888::new(200, 10, 10)),
                ..header("Drums")
            },
            volume: fader(50, 100),
            pan: fader(50, 100),
        };
        let col = Column::new(0, WIDTH, HEIGHT);
        let bitmap = render(&GridElement::Channel(element));
        let strip_y = col.track_row_top() + 1;
        assert_eq!(bitmap.pixel(0, strip_y), Some(Rgb888::new(200, 10, 10)));
    }

    #[test]
    fn channel_volume_fader_fits_column() {
        let col = Column::new(0, WIDTH, HEIGHT);
        let vol = ChannelElement::volume_bounds(&col);
        assert!(vol.size.height > 0);
        assert!(vol.top_left.y + vol.size.height as i32 <= col.track_row_top());
    }

    #[test]
    fn drawing_is_deterministic() {
        let element = GridElement::Sends(sends(["A", "B", "C", ""], false));
        assert_eq!(render(&element), render(&element));
    }
}
