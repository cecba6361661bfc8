//! Addressable LED strip trait

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// All channels off
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Create a color from channel values
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale host-supplied channel values by the brightness divisor
    ///
    /// Each channel is `value / divisor` (truncating) stored into 8 bits.
    /// There is no clamping: a quotient outside `0..=255` wraps, so `-2`
    /// with divisor 2 becomes 255.
    ///
    /// `divisor` must be positive; [`PanelConfig::validate`] guarantees it
    /// for the dispatcher.
    ///
    /// [`PanelConfig::validate`]: crate::config::PanelConfig::validate
    pub fn scaled(r: i32, g: i32, b: i32, divisor: i32) -> Self {
        let channel = |value: i32| value.wrapping_div(divisor) as u8;
        Self::new(channel(r), channel(g), channel(b))
    }
}

/// A chain of addressable LEDs with a frame buffer
///
/// Pixel writes only touch the buffer; [`show`](LedStrip::show) transmits
/// it. Transmission may finish after `show` returns, so callers must
/// [`wait`](LedStrip::wait) before touching the buffer again.
pub trait LedStrip {
    /// Number of pixels on the strip
    fn len(&self) -> usize;

    /// Check if the strip has no pixels
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Wait until the previous frame has been transmitted
    fn wait(&mut self);

    /// Set one pixel in the frame buffer
    ///
    /// Indices at or beyond [`len`](LedStrip::len) are ignored.
    fn set(&mut self, index: usize, color: Rgb);

    /// Set every pixel in the frame buffer
    fn fill(&mut self, color: Rgb) {
        for index in 0..self.len() {
            self.set(index, color);
        }
    }

    /// Start transmitting the frame buffer
    fn show(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_halves_channels() {
        assert_eq!(Rgb::scaled(10, 20, 30, 2), Rgb::new(5, 10, 15));
    }

    #[test]
    fn test_scaled_truncates() {
        assert_eq!(Rgb::scaled(1, 3, 255, 2), Rgb::new(0, 1, 127));
    }

    #[test]
    fn test_scaled_wraps_without_clamping() {
        // 600 / 2 = 300 -> 44
        assert_eq!(Rgb::scaled(600, 0, 0, 2).r, 44);
        // -2 / 2 = -1 -> 255
        assert_eq!(Rgb::scaled(-2, 0, 0, 2).r, 255);
        // -1 / 2 truncates toward zero
        assert_eq!(Rgb::scaled(-1, 0, 0, 2).r, 0);
    }

    #[test]
    fn test_scaled_divisor_one_is_identity() {
        assert_eq!(Rgb::scaled(1, 2, 3, 1), Rgb::new(1, 2, 3));
    }
}
