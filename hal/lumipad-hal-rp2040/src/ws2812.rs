//! WS2812 strips on the PIO
//!
//! `show` only marks the frame for sending. The polling task calls
//! [`PioStrip::flush`] after each dispatch and awaits the DMA transfer, so
//! a frame is always on the wire before the next command touches the
//! buffer; [`LedStrip::wait`] therefore has nothing left to wait for.

use embassy_rp::pio::Instance;
use embassy_rp::pio_programs::ws2812::PioWs2812;
use lumipad_core::traits::{LedStrip, Rgb};
use smart_leds::RGB8;

/// One WS2812 chain of `N` pixels on state machine `S`
pub struct PioStrip<'d, P: Instance, const S: usize, const N: usize> {
    driver: PioWs2812<'d, P, S, N>,
    frame: [RGB8; N],
    pending: bool,
}

impl<'d, P: Instance, const S: usize, const N: usize> PioStrip<'d, P, S, N> {
    /// Wrap a driver; the buffer starts black and nothing is sent
    pub fn new(driver: PioWs2812<'d, P, S, N>) -> Self {
        Self {
            driver,
            frame: [RGB8::default(); N],
            pending: false,
        }
    }

    /// Check if a shown frame has not been sent yet
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Send the frame if `show` was called since the last flush
    pub async fn flush(&mut self) {
        if core::mem::take(&mut self.pending) {
            self.driver.write(&self.frame).await;
        }
    }
}

impl<P: Instance, const S: usize, const N: usize> LedStrip for PioStrip<'_, P, S, N> {
    fn len(&self) -> usize {
        N
    }

    fn wait(&mut self) {}

    fn set(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.frame.get_mut(index) {
            *pixel = RGB8::new(color.r, color.g, color.b);
        }
    }

    fn show(&mut self) {
        self.pending = true;
    }
}
