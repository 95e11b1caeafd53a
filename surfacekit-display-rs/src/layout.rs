//! Display configuration, shared layout constants and drawing helpers.
//!
//! All geometry that depends on the physical screen lives in
//! [`DisplayConfig`]; the per-element layout constants are derived from the
//! display height by [`Layout::for_height()`] so every grid element variant
//! reads them from one table.

use alloc::string::String;

use embedded_graphics::{
    mono_font::{
        ascii::{FONT_10X20, FONT_4X6, FONT_5X8, FONT_6X10, FONT_7X13, FONT_9X15},
        MonoFont, MonoTextStyle,
    },
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};

// ── RenderConfiguration ──────────────────────────────────────────────────

/// Read-only palette the grid elements draw with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfiguration {
    pub background: Rgb888,
    pub background_darker: Rgb888,
    pub background_lighter: Rgb888,
    pub border: Rgb888,
    pub text: Rgb888,
    pub fader: Rgb888,
    /// Marker drawn on faders whose knob is touched.
    pub edit: Rgb888,
}

impl Default for RenderConfiguration {
    fn default() -> Self {
        Self {
            background: Rgb888::new(83, 83, 83),
            background_darker: Rgb888::new(39, 39, 39),
            background_lighter: Rgb888::new(118, 118, 118),
            border: Rgb888::new(0, 0, 0),
            text: Rgb888::new(255, 255, 255),
            fader: Rgb888::new(69, 44, 19),
            edit: Rgb888::new(240, 127, 17),
        }
    }
}

// ── DisplayConfig ────────────────────────────────────────────────────────

/// Configuration for the virtual display and its refresh loop.
///
/// [`DisplayConfig::default()`] describes a 960×160 colour screen split into
/// eight columns, refreshed at 20 Hz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Refresh rate of the periodic display tick in Hz. Default: 20.
    pub update_frequency_hz: u32,
    /// Total display width in pixels. Default: 960.
    pub display_width: u32,
    /// Total display height in pixels. Default: 160.
    pub display_height: u32,
    /// Number of grid columns (one [`GridElement`](crate::GridElement) each). Default: 8.
    pub columns: usize,
    /// Title of the host's preview window for the virtual display.
    pub window_title: String,
    pub render: RenderConfiguration,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            update_frequency_hz: 20,
            display_width: 960,
            display_height: 160,
            columns: 8,
            window_title: String::from("Control Surface Display"),
            render: RenderConfiguration::default(),
        }
    }
}

impl DisplayConfig {
    /// Convert the configured frequency to a timer period in milliseconds.
    ///
    /// Formula: `1000 / update_frequency_hz`; a frequency of 0 counts as 1 Hz.
    pub fn update_period_ms(&self) -> u64 {
        1000 / self.update_frequency_hz.max(1) as u64
    }

    /// Width of one grid column in pixels.
    pub fn column_width(&self) -> u32 {
        match self.columns {
            0 => 0,
            n => self.display_width / n as u32,
        }
    }
}

// ── Layout ───────────────────────────────────────────────────────────────

/// Layout constants shared by all grid element variants.
///
/// ```text
/// ┌──────────────┐  0
/// │  MENU        │  menu_height
/// ├──────────────┤
/// │              │
/// │  controls    │
/// │              │
/// ├──────────────┤  track_row_top()
/// │▓▓ color ▓▓▓▓▓│  half_unit
/// │  track name  │  track_row_height + unit - half_unit
/// └──────────────┘  height
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub unit: i32,
    pub half_unit: i32,
    pub double_unit: i32,
    pub separator_size: i32,
    pub menu_height: i32,
    pub track_row_height: i32,
    /// Horizontal padding between a column edge and its sliders.
    pub inset: i32,
}

impl Layout {
    /// Derive the layout table for a display of the given height.
    pub fn for_height(height: u32) -> Self {
        let unit = (height as i32 / 12).max(4);
        Self {
            unit,
            half_unit: unit / 2,
            double_unit: unit * 2,
            separator_size: 1,
            menu_height: unit + unit / 2,
            track_row_height: unit + unit / 2,
            inset: unit / 2,
        }
    }

    /// Top of the track row area at the bottom of a column.
    pub fn track_row_top(&self, height: i32) -> i32 {
        height - self.track_row_height - self.unit - self.separator_size
    }
}

// ── Drawing helpers ──────────────────────────────────────────────────────

/// Horizontal text alignment within a bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Largest built-in font whose glyphs fit `height` pixels.
pub fn font_for_height(height: i32) -> &'static MonoFont<'static> {
    match height {
        h if h >= 20 => &FONT_10X20,
        h if h >= 15 => &FONT_9X15,
        h if h >= 13 => &FONT_7X13,
        h if h >= 10 => &FONT_6X10,
        h if h >= 8 => &FONT_5X8,
        _ => &FONT_4X6,
    }
}

/// Fill an axis-aligned rectangle. Non-positive sizes draw nothing.
pub fn fill_rect<D>(target: &mut D, x: i32, y: i32, w: i32, h: i32, color: Rgb888) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    if w <= 0 || h <= 0 {
        return Ok(());
    }
    Rectangle::new(Point::new(x, y), Size::new(w as u32, h as u32))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(target)
}

/// Draw a 1 px outline inside the rectangle bounds.
pub fn stroke_rect<D>(target: &mut D, x: i32, y: i32, w: i32, h: i32, color: Rgb888) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    if w <= 0 || h <= 0 {
        return Ok(());
    }
    let style = PrimitiveStyleBuilder::new()
        .stroke_color(color)
        .stroke_width(1)
        .stroke_alignment(StrokeAlignment::Inside)
        .build();
    Rectangle::new(Point::new(x, y), Size::new(w as u32, h as u32))
        .into_styled(style)
        .draw(target)
}

/// Draw `text` vertically centred in a box, clipped to the box.
///
/// The font is picked from the box height with [`font_for_height()`].
#[allow(clippy::too_many_arguments)]
pub fn draw_text_in_bounds<D>(
    target: &mut D,
    text: &str,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    align: Align,
    color: Rgb888,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    if text.is_empty() || w <= 0 || h <= 0 {
        return Ok(());
    }

    let area = Rectangle::new(Point::new(x, y), Size::new(w as u32, h as u32));
    let char_style = MonoTextStyle::new(font_for_height(h), color);
    let (alignment, anchor_x) = match align {
        Align::Left => (Alignment::Left, x + 1),
        Align::Center => (Alignment::Center, x + w / 2),
        Align::Right => (Alignment::Right, x + w - 1),
    };
    let text_style = TextStyleBuilder::new()
        .alignment(alignment)
        .baseline(Baseline::Middle)
        .build();

    let mut clipped = target.clipped(&area);
    Text::with_text_style(text, Point::new(anchor_x, y + h / 2), char_style, text_style)
        .draw(&mut clipped)?;
    Ok(())
}

// ── Tests ────────────────────────────────────────────────────────────────
