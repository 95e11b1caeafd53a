//! Rendering the grid into a bitmap and handing frames to the output.

use crate::bitmap::Bitmap;
use crate::error::DisplayError;
use crate::grid::GridElement;
use crate::layout::DisplayConfig;
use crate::model::GridChangeListener;

/// Draws a row of grid elements into a frame buffer.
#[derive(Debug, Clone)]
pub struct Renderer {
    config: DisplayConfig,
    bitmap: Bitmap,
}

impl Renderer {
    /// Create a renderer with a frame buffer sized from `config`.
    ///
    /// Fails with [`DisplayError::InvalidGeometry`] if the display has no
    /// pixels, no columns, or more columns than pixels.
    pub fn new(config: DisplayConfig) -> Result<Self, DisplayError> {
        if config.columns == 0 || config.column_width() == 0 {
            return Err(DisplayError::InvalidGeometry);
        }
        let bitmap = Bitmap::new(config.display_width, config.display_height)?;
        Ok(Self { config, bitmap })
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// The most recently rendered frame.
    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    /// Render `elements` left to right, one per column.
    ///
    /// Elements beyond the configured column count are not drawn; missing
    /// columns stay blank.
    pub fn render(&mut self, elements: &[GridElement]) -> &Bitmap {
        let render = &self.config.render;
        self.bitmap.fill(render.background);

        let column_width = self.config.column_width();
        let height = self.config.display_height;
        for (column, element) in elements.iter().enumerate().take(self.config.columns) {
            let left = (column as u32 * column_width) as i32;
            element
                .draw(&mut self.bitmap, left, column_width, height, render)
                .unwrap_or_else(|e| match e {});
        }
        &self.bitmap
    }
}

// ── Output ───────────────────────────────────────────────────────────────

/// Sink for finished frames: a preview window, a USB display, a socket.
pub trait DisplayOutput {
    fn set_window_title(&mut self, title: &str);

    /// Make the output visible. Called once by [`Compositor::open()`].
    fn show_display(&mut self);

    fn send_frame(&mut self, frame: &Bitmap) -> Result<(), DisplayError>;
}

/// Renders the grid and delivers each frame to a [`DisplayOutput`].
pub struct Compositor<O: DisplayOutput> {
    renderer: Renderer,
    output: O,
    opened: bool,
    frames: u32,
}

impl<O: DisplayOutput> Compositor<O> {
    pub fn new(config: DisplayConfig, output: O) -> Result<Self, DisplayError> {
        Ok(Self {
            renderer: Renderer::new(config)?,
            output,
            opened: false,
            frames: 0,
        })
    }

    /// Set the window title and show the output.
    pub fn open(&mut self) {
        if self.opened {
            return;
        }
        self.output
            .set_window_title(&self.renderer.config().window_title);
        self.output.show_display();
        self.opened = true;

        #[cfg(feature = "defmt")]
        defmt::info!("display opened");
    }

    pub fn is_open(&self) -> bool {
        self.opened
    }

    /// Render `elements` and send the frame.
    pub fn composite(&mut self, elements: &[GridElement]) -> Result<(), DisplayError> {
        if !self.opened {
            return Err(DisplayError::NotOpened);
        }
        let frame = self.renderer.render(elements);
        self.output.send_frame(frame)?;
        self.frames = self.frames.wrapping_add(1);
        Ok(())
    }

    /// Number of frames delivered so far.
    pub fn frames_sent(&self) -> u32 {
        self.frames
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}

impl<O: DisplayOutput> GridChangeListener for Compositor<O> {
    fn grid_has_changed(&mut self, elements: &[GridElement]) -> Result<(), DisplayError> {
        let result = self.composite(elements);
        if let Err(_e) = &result {
            #[cfg(feature = "defmt")]
            defmt::warn!("frame not delivered, will retry: {}", _e);
        }
        result
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
