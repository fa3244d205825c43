//! Drawn-curve sampling
//!
//! Reads a hand-drawn curve back out of a luminance image: the darkest pixel
//! in each column is taken to be the line, and its row is mapped to a signed
//! amplitude in `[-1, 1]` around the vertical center.

use crate::{Error, Result};

/// Luminance of the empty background. Only darker pixels count as ink.
pub const BACKGROUND_LUMINANCE: f32 = 255.0;

/// Row-major `height × width` grid of luminance values in `0..=255`.
#[derive(Debug, Clone, PartialEq)]
pub struct LuminanceField {
    width: usize,
    height: usize,
    luma: Vec<f32>,
}

impl LuminanceField {
    /// Wrap a row-major luminance buffer.
    ///
    /// Fails if `luma.len() != width * height`, or if the field has columns
    /// but no rows (there is no center to measure from).
    pub fn new(width: usize, height: usize, luma: Vec<f32>) -> Result<Self> {
        let expected = width.checked_mul(height);
        if expected != Some(luma.len()) {
            return Err(Error::FieldSize {
                width,
                height,
                len: luma.len(),
            });
        }
        if height == 0 && width > 0 {
            return Err(Error::EmptyHeight { width });
        }
        Ok(Self {
            width,
            height,
            luma,
        })
    }

    /// Build from 8-bit grayscale pixels.
    pub fn from_gray8(width: usize, height: usize, pixels: &[u8]) -> Result<Self> {
        Self::new(width, height, pixels.iter().map(|&p| f32::from(p)).collect())
    }

    /// Build from RGBA pixels (4 bytes each); luminance is the mean of R, G
    /// and B. Alpha is ignored.
    pub fn from_rgba(width: usize, height: usize, rgba: &[u8]) -> Result<Self> {
        if rgba.len() % 4 != 0 {
            return Err(Error::PartialPixel { bytes: rgba.len() });
        }
        let luma = rgba
            .chunks_exact(4)
            .map(|px| (f32::from(px[0]) + f32::from(px[1]) + f32::from(px[2])) / 3.0)
            .collect();
        Self::new(width, height, luma)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Luminance at `(row, column)`, if in bounds.
    pub fn luminance(&self, row: usize, column: usize) -> Option<f32> {
        if row < self.height && column < self.width {
            Some(self.luma[row * self.width + column])
        } else {
            None
        }
    }

    /// One amplitude per column, left to right.
    ///
    /// `amplitude = (center - row) / center` with `center = height / 2`.
    /// Columns with nothing darker than the background read as 0.
    pub fn sample_columns(&self) -> Vec<f64> {
        let center = self.height as f64 / 2.0;
        (0..self.width)
            .map(|column| match self.darkest_row(column) {
                Some(row) => (center - row as f64) / center,
                None => 0.0,
            })
            .collect()
    }

    /// Topmost row holding the column's minimum luminance, if any pixel is
    /// darker than the background.
    fn darkest_row(&self, column: usize) -> Option<usize> {
        let mut min_luma = BACKGROUND_LUMINANCE;
        let mut found = None;
        for row in 0..self.height {
            let luma = self.luma[row * self.width + column];
            if luma < min_luma {
                min_luma = luma;
                found = Some(row);
            }
        }
        found
    }
}
