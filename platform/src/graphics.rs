use core::{mem::size_of, slice};
use rgb::alt::ABGR;
use tracing::debug;

use crate::{error::AllocationError, event::Size};

/// 32-bit pixel laid out in memory as (unused, blue, green, red), the
/// uncompressed top-down 32bpp DIB layout.
pub type Pixel = ABGR<u8>;

pub const BYTES_PER_PIXEL: usize = 4;

pub const FILL_COLOR: Pixel = ABGR { a: 0, b: 0, g: 255, r: 255 };

const CLEAR: Pixel = ABGR { a: 0, b: 0, g: 0, r: 0 };

/// Off-screen pixel buffer sized to the window's client area.
///
/// `pixels.len()` is always `width * height`, so a blit of the whole buffer
/// never reads past `width * height * BYTES_PER_PIXEL` bytes.
#[derive(Debug, Default)]
pub struct Framebuffer {
    pixels: Vec<Pixel>,
    width: u32,
    height: u32,
}

impl Framebuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }
    pub fn size(&self) -> Size { Size::new(self.width, self.height) }
    pub fn pixels(&self) -> &[Pixel] { &self.pixels }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn len_bytes(&self) -> usize {
        self.pixels.len() * BYTES_PER_PIXEL
    }

    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: ABGR<u8> is #[repr(C)] with four u8 fields, so a slice of
        // pixels is a valid, fully initialized byte slice of 4x the length.
        unsafe { slice::from_raw_parts(self.pixels.as_ptr() as *const u8, self.len_bytes()) }
    }

    /// Reallocates the buffer for the new client area and repaints it.
    ///
    /// On failure nothing changes: the previous pixels and dimensions stay.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), AllocationError> {
        let error = AllocationError { width, height };
        let pixel_count = (width as usize)
            .checked_mul(height as usize)
            .filter(|count| count.checked_mul(BYTES_PER_PIXEL).is_some())
            .ok_or(error)?;

        let mut pixels = Vec::new();
        pixels.try_reserve_exact(pixel_count).map_err(|_| error)?;
        pixels.resize(pixel_count, CLEAR);

        // old buffer is released here
        self.pixels = pixels;
        self.width = width;
        self.height = height;
        debug!(width, height, bytes = self.len_bytes(), "framebuffer resized");

        self.fill(FILL_COLOR);
        Ok(())
    }

    /// Writes `color` to every pixel, rows top to bottom, pixels left to right.
    pub fn fill(&mut self, color: Pixel) {
        if self.is_empty() {
            return;
        }
        for row in self.pixels.chunks_exact_mut(self.width as usize) {
            for pixel in row {
                *pixel = color;
            }
        }
    }
}

const _: () = assert!(size_of::<Pixel>() == BYTES_PER_PIXEL);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_allocates_four_bytes_per_pixel() {
        let mut fb = Framebuffer::new();
        fb.resize(800, 600).unwrap();
        assert_eq!(fb.len_bytes(), 1_920_000);
        assert_eq!(fb.as_bytes().len(), 1_920_000);
        assert_eq!(fb.size(), Size::new(800, 600));

        for &(w, h) in &[(1, 1), (3, 7), (640, 1), (1, 480)] {
            fb.resize(w, h).unwrap();
            assert_eq!(fb.len_bytes(), w as usize * h as usize * 4);
        }
    }

    #[test]
    fn zero_area_resize_yields_empty_buffer() {
        let mut fb = Framebuffer::new();
        fb.resize(16, 16).unwrap();

        fb.resize(0, 0).unwrap();
        assert!(fb.is_empty());
        assert_eq!(fb.len_bytes(), 0);
        assert_eq!(fb.as_bytes(), &[] as &[u8]);

        fb.resize(0, 600).unwrap();
        assert!(fb.is_empty());
        assert_eq!((fb.width(), fb.height()), (0, 600));

        fb.resize(800, 0).unwrap();
        assert!(fb.is_empty());
    }

    #[test]
    fn resize_fills_with_yellow_in_pad_blue_green_red_order() {
        let mut fb = Framebuffer::new();
        fb.resize(13, 5).unwrap();

        assert!(fb.pixels().iter().all(|&p| p == FILL_COLOR));
        for pixel in fb.as_bytes().chunks_exact(BYTES_PER_PIXEL) {
            assert_eq!(pixel, &[0, 0, 255, 255]);
        }
    }

    #[test]
    fn repeated_resize_is_pixel_identical() {
        let mut fb = Framebuffer::new();
        fb.resize(31, 17).unwrap();
        let first = fb.as_bytes().to_vec();

        fb.resize(31, 17).unwrap();
        assert_eq!(fb.as_bytes(), &first[..]);
    }

    #[test]
    fn fill_overwrites_every_pixel() {
        let mut fb = Framebuffer::new();
        fb.resize(4, 3).unwrap();
        fb.fill(CLEAR);
        assert!(fb.pixels().iter().all(|&p| p == CLEAR));

        let mut empty = Framebuffer::new();
        empty.fill(CLEAR);
        assert!(empty.is_empty());
    }

    #[test]
    fn failed_resize_keeps_previous_buffer() {
        let mut fb = Framebuffer::new();
        fb.resize(10, 10).unwrap();
        let before = fb.as_bytes().to_vec();

        let error = fb.resize(u32::MAX, u32::MAX).unwrap_err();
        assert_eq!(error, AllocationError { width: u32::MAX, height: u32::MAX });
        assert_eq!(fb.size(), Size::new(10, 10));
        assert_eq!(fb.as_bytes(), &before[..]);
    }
}
