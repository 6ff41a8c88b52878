use image::{imageops, imageops::FilterType, RgbaImage};

/// Offscreen buffer the source raster is downsampled into, sized to the
/// sample grid.
#[derive(Clone, Debug)]
pub struct SampleGrid {
    columns: u32,
    rows: u32,
    buffer: RgbaImage,
}

impl Default for SampleGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleGrid {
    pub fn new() -> Self {
        Self { columns: 0, rows: 0, buffer: RgbaImage::new(0, 0) }
    }

    pub fn resize(&mut self, columns: u32, rows: u32) {
        if (columns, rows) != (self.columns, self.rows) {
            self.buffer = RgbaImage::new(columns, rows);
        }
        self.columns = columns;
        self.rows = rows;
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.columns, self.rows)
    }

    /// Scale the raster into the sample buffer and return it. A raster that
    /// already matches the grid is copied verbatim, keeping pixels exact.
    pub fn downsample(&mut self, raster: &RgbaImage) -> &RgbaImage {
        self.buffer = if raster.dimensions() == (self.columns, self.rows) {
            raster.clone()
        } else {
            imageops::resize(raster, self.columns, self.rows, FilterType::Triangle)
        };
        &self.buffer
    }
}
