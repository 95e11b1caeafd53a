//! Periodic display refresh loop.
//!
//! [`display_update_task`] ticks at [`DisplayConfig::update_frequency_hz`],
//! asks a [`GridSource`] to rebuild the grid, and renders and flushes a
//! frame only when the grid actually changed.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::Mutex;

use crate::bitmap::Bitmap;
use crate::layout::DisplayConfig;
use crate::model::GridModel;
use crate::renderer::Renderer;

/// State shared with the input side that knows how to fill the grid.
pub trait GridSource {
    /// Write the current frame's elements into `grid`.
    fn refresh_grid(&mut self, grid: &mut GridModel);
}

/// Asynchronous frame transport (USB bulk endpoint, socket, SPI panel).
#[allow(async_fn_in_trait)]
pub trait FrameSink {
    type Error;

    async fn flush_frame(&mut self, frame: &Bitmap) -> Result<(), Self::Error>;
}

/// Periodic display update loop.
///
/// This is a regular `async fn`, not an Embassy `#[task]`; wrap it in a
/// concrete task since Embassy tasks cannot be generic:
///
/// ```ignore
/// #[embassy_executor::task]
/// async fn display_task(
///     session: &'static Mutex<CriticalSectionRawMutex, Session>,
///     sink: UsbFrameSink,
/// ) {
///     display_update_task(session, sink, DisplayConfig::default()).await;
/// }
/// ```
///
/// # Control flow
///
/// 1. Loop at `config.update_frequency_hz`:
///    - Lock `source` and let it refresh the grid. Release the mutex.
///    - Skip the tick if the grid is clean.
///    - Render into the frame buffer (no mutex held).
///    - Flush the frame to the sink.
///
/// # Errors
///
/// * Invalid geometry: logs the error and **returns** (task exits).
/// * Flush failure: logs the error and marks the grid dirty so the frame is
///   retried on the next tick.
#[allow(clippy::needless_pass_by_value)] // config is small and consumed
pub async fn display_update_task<M, S, K>(source: &Mutex<M, S>, mut sink: K, config: DisplayConfig)
where
    M: RawMutex,
    S: GridSource,
    K: FrameSink,
{
    let period = embassy_time::Duration::from_millis(config.update_period_ms());
    let mut grid = GridModel::new(config.columns);
    let mut renderer = match Renderer::new(config) {
        Ok(r) => r,
        Err(_e) => {
            #[cfg(feature = "defmt")]
            defmt::error!("display renderer init failed: {}", _e);
            return;
        }
    };

    #[cfg(feature = "defmt")]
    defmt::info!("display task started");

    loop {
        embassy_time::Timer::after(period).await;

        {
            let mut source = source.lock().await;
            source.refresh_grid(&mut grid);
        } // mutex released before rendering

        if !grid.take_dirty() {
            continue;
        }

        let frame = renderer.render(grid.elements());
        if sink.flush_frame(frame).await.is_err() {
            #[cfg(feature = "defmt")]
            defmt::error!("display flush failed");
            grid.mark_dirty();
        }
    }
}
