use image::{imageops, imageops::FilterType, DynamicImage, RgbaImage};

/// Boundary to the host rasterizer: draws an opaque scene/camera pair into a
/// backing raster at a requested size and exposes the raw RGBA pixels.
pub trait RenderSurface {
    type Scene;
    type Camera;

    /// Whether raw pixels can be read back from the raster. Surfaces that
    /// cannot make the effect unconstructible.
    fn readback_supported(&self) -> bool {
        true
    }

    /// Resize the backing raster to the given pixel dimensions.
    fn resize(&mut self, width: u32, height: u32);

    /// Draw one frame and return the backing raster at the current size.
    fn draw(&mut self, scene: &Self::Scene, camera: &Self::Camera) -> &RgbaImage;
}

/// Surface backed by a decoded image, redrawn at whatever size the effect
/// requests. Scene and camera carry no meaning here.
pub struct ImageSurface {
    source: DynamicImage,
    raster: RgbaImage,
    width: u32,
    height: u32,
}

impl ImageSurface {
    pub fn new(source: DynamicImage) -> Self {
        Self { source, raster: RgbaImage::new(0, 0), width: 0, height: 0 }
    }

    pub fn from_raster(raster: RgbaImage) -> Self {
        Self::new(DynamicImage::ImageRgba8(raster))
    }

    pub fn source_dimensions(&self) -> (u32, u32) {
        (self.source.width(), self.source.height())
    }
}

impl RenderSurface for ImageSurface {
    type Scene = ();
    type Camera = ();

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn draw(&mut self, _scene: &(), _camera: &()) -> &RgbaImage {
        if self.raster.dimensions() != (self.width, self.height) {
            self.raster = if self.width == 0 || self.height == 0 {
                RgbaImage::new(self.width, self.height)
            } else if self.source.width() == self.width && self.source.height() == self.height {
                self.source.to_rgba8()
            } else {
                imageops::resize(
                    &self.source.to_rgba8(),
                    self.width,
                    self.height,
                    FilterType::CatmullRom,
                )
            };
        }
        &self.raster
    }
}
