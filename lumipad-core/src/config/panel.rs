//! Panel geometry and color scaling

use super::ConfigError;

/// What the host can address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelConfig {
    /// Matrix columns (`x` range)
    pub matrix_width: usize,
    /// Matrix rows (`y` range)
    pub matrix_height: usize,
    /// Status strip pixels
    pub status_len: usize,
    /// Every color channel is divided by this before storage
    pub brightness_divisor: i32,
}

impl PanelConfig {
    /// 10×10 matrix, 5 status pixels, half brightness
    pub const DEFAULT: Self = Self {
        matrix_width: 10,
        matrix_height: 10,
        status_len: 5,
        brightness_divisor: 2,
    };

    /// Pixels on the matrix
    pub const fn matrix_len(&self) -> usize {
        self.matrix_width * self.matrix_height
    }

    /// Row-major pixel index for a matrix coordinate
    ///
    /// Returns `None` unless `0 <= x < width` and `0 <= y < height`.
    pub fn matrix_index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok().filter(|&x| x < self.matrix_width)?;
        let y = usize::try_from(y).ok().filter(|&y| y < self.matrix_height)?;
        Some(x + y * self.matrix_width)
    }

    /// Status strip pixel index, `None` unless `0 <= index < status_len`
    pub fn status_index(&self, index: i32) -> Option<usize> {
        usize::try_from(index).ok().filter(|&i| i < self.status_len)
    }

    /// Check the divisor
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.brightness_divisor <= 0 {
            return Err(ConfigError::InvalidDivisor);
        }
        Ok(())
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
