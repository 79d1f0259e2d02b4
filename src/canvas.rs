use egui::{Color32, ColorImage, Pos2, Rect};
use image::{DynamicImage, ImageFormat, ImageReader, Rgba, RgbaImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{PaintError, PaintResult};
use crate::geometry;
use crate::pen::Pen;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// The backing bitmap everything is painted into.
///
/// Coordinates are canvas pixels with the origin in the top-left corner.
/// Pixel `(x, y)` covers the unit square starting at `(x, y)`; drawing
/// outside the bitmap is clipped.
#[derive(Clone)]
pub struct Canvas {
    pixels: RgbaImage,
    /// Bumped on every mutation so the renderer knows when to re-upload
    version: u64,
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("version", &self.version)
            .finish()
    }
}

impl Canvas {
    /// Create a white canvas
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(width, height, BACKGROUND),
            version: 0,
        }
    }

    /// Wrap an existing bitmap. Transparent pixels are flattened onto white.
    pub fn from_image(image: RgbaImage) -> Self {
        let mut pixels = image;
        for pixel in pixels.pixels_mut() {
            *pixel = flatten(*pixel);
        }
        Self { pixels, version: 0 }
    }

    /// Decode any supported image file into a canvas of the file's size.
    /// The format is sniffed from the content; the extension is only a fallback.
    pub fn load(path: &Path) -> PaintResult<Self> {
        let decoded = ImageReader::open(path)?.with_guessed_format()?.decode()?;
        if decoded.width() == 0 || decoded.height() == 0 {
            return Err(PaintError::EmptyImage);
        }
        Ok(Self::from_image(decoded.to_rgba8()))
    }

    /// Encode the canvas as a BMP file, regardless of the path's extension
    pub fn save_bmp(&self, path: &Path) -> PaintResult<()> {
        let rgb = DynamicImage::ImageRgba8(self.pixels.clone()).to_rgb8();
        let mut writer = BufWriter::new(File::create(path)?);
        rgb.write_to(&mut writer, ImageFormat::Bmp)?;
        writer.flush()?;
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        self.pixels
            .get_pixel_checked(x, y)
            .map(|p| Color32::from_rgba_unmultiplied(p[0], p[1], p[2], p[3]))
    }

    /// Replace the content with a fresh white bitmap of the given size
    pub fn reset(&mut self, width: u32, height: u32) {
        self.pixels = RgbaImage::from_pixel(width, height, BACKGROUND);
        self.touch();
    }

    /// Take over another canvas' pixels, keeping this canvas' version history
    pub fn replace(&mut self, other: Canvas) {
        self.pixels = other.pixels;
        self.touch();
    }

    /// Change the canvas size. The old content is kept unscaled at the
    /// top-left corner; new area is white, area outside the new size is cropped.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == self.width() && height == self.height() {
            return;
        }
        let mut resized = RgbaImage::from_pixel(width, height, BACKGROUND);
        image::imageops::replace(&mut resized, &self.pixels, 0, 0);
        self.pixels = resized;
        self.touch();
    }

    /// Draw a line with round caps
    pub fn draw_line(&mut self, from: Pos2, to: Pos2, pen: &Pen) {
        self.stroke_segment(snap(from), snap(to), pen);
        self.touch();
    }

    /// Draw the outline of `rect`
    pub fn draw_rect(&mut self, rect: Rect, pen: &Pen) {
        let corners = [
            rect.left_top(),
            rect.right_top(),
            rect.right_bottom(),
            rect.left_bottom(),
            rect.left_top(),
        ];
        self.stroke_polyline(&corners, pen);
        self.touch();
    }

    /// Draw the outline of the ellipse inscribed in `rect`
    pub fn draw_ellipse(&mut self, rect: Rect, pen: &Pen) {
        self.stroke_polyline(&geometry::ellipse_outline(rect), pen);
        self.touch();
    }

    /// Convert to an egui image for uploading as a texture
    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::from_rgba_unmultiplied(
            [self.width() as usize, self.height() as usize],
            self.pixels.as_raw(),
        )
    }

    fn stroke_polyline(&mut self, points: &[Pos2], pen: &Pen) {
        for segment in points.windows(2) {
            self.stroke_segment(snap(segment[0]), snap(segment[1]), pen);
        }
    }

    /// Paint every pixel whose center lies within half the pen width of the segment
    fn stroke_segment(&mut self, from: Pos2, to: Pos2, pen: &Pen) {
        if self.width() == 0 || self.height() == 0 {
            return;
        }
        let radius = pen.width() / 2.0;
        let color = pen.color();
        let rgba = Rgba([color.r(), color.g(), color.b(), 255]);

        let min_x = (from.x.min(to.x) - radius).floor().max(0.0);
        let min_y = (from.y.min(to.y) - radius).floor().max(0.0);
        let max_x = (from.x.max(to.x) + radius).ceil().min(self.width() as f32 - 1.0);
        let max_y = (from.y.max(to.y) + radius).ceil().min(self.height() as f32 - 1.0);
        if min_x > max_x || min_y > max_y {
            return;
        }

        for y in min_y as u32..=max_y as u32 {
            for x in min_x as u32..=max_x as u32 {
                let center = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
                if geometry::distance_to_line_segment(center, from, to) <= radius {
                    self.pixels.put_pixel(x, y, rgba);
                }
            }
        }
    }

    fn touch(&mut self) {
        self.version += 1;
    }
}

/// Move a position to the center of the pixel containing it
fn snap(pos: Pos2) -> Pos2 {
    Pos2::new(pos.x.floor() + 0.5, pos.y.floor() + 0.5)
}

fn flatten(pixel: Rgba<u8>) -> Rgba<u8> {
    let alpha = pixel[3] as u32;
    let blend = |c: u8| ((c as u32 * alpha + 255 * (255 - alpha) + 127) / 255) as u8;
    Rgba([blend(pixel[0]), blend(pixel[1]), blend(pixel[2]), 255])
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn pen(width: f32) -> Pen {
        Pen::new(Color32::RED, width)
    }

    #[test]
    fn test_new_canvas_is_white() {
        let canvas = Canvas::new(4, 3);
        assert_eq!((canvas.width(), canvas.height()), (4, 3));
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(canvas.pixel(x, y), Some(Color32::WHITE));
            }
        }
        assert_eq!(canvas.pixel(4, 0), None);
    }

    #[test]
    fn test_thin_horizontal_line() {
        let mut canvas = Canvas::new(20, 20);
        canvas.draw_line(pos2(2.0, 5.0), pos2(12.0, 5.0), &pen(1.0));
        for x in 2..=12 {
            assert_eq!(canvas.pixel(x, 5), Some(Color32::RED), "x = {x}");
        }
        assert_eq!(canvas.pixel(1, 5), Some(Color32::WHITE));
        assert_eq!(canvas.pixel(13, 5), Some(Color32::WHITE));
        assert_eq!(canvas.pixel(7, 4), Some(Color32::WHITE));
        assert_eq!(canvas.pixel(7, 6), Some(Color32::WHITE));
    }

    #[test]
    fn test_wide_line_has_round_caps() {
        let mut canvas = Canvas::new(30, 30);
        canvas.draw_line(pos2(10.0, 10.0), pos2(10.0, 10.0), &pen(6.0));
        assert_eq!(canvas.pixel(10, 10), Some(Color32::RED));
        assert_eq!(canvas.pixel(13, 10), Some(Color32::RED));
        assert_eq!(canvas.pixel(10, 7), Some(Color32::RED));
        // corner of the bounding square lies outside the disk
        assert_eq!(canvas.pixel(13, 13), Some(Color32::WHITE));
    }

    #[test]
    fn test_drawing_is_clipped() {
        let mut canvas = Canvas::new(10, 10);
        canvas.draw_line(pos2(-20.0, 5.0), pos2(40.0, 5.0), &pen(3.0));
        canvas.draw_line(pos2(-20.0, -20.0), pos2(-5.0, -5.0), &pen(3.0));
        assert_eq!(canvas.pixel(0, 5), Some(Color32::RED));
        assert_eq!(canvas.pixel(9, 5), Some(Color32::RED));
        assert_eq!(canvas.pixel(0, 0), Some(Color32::WHITE));
    }

    #[test]
    fn test_version_bumps_on_mutation() {
        let mut canvas = Canvas::new(10, 10);
        let v0 = canvas.version();
        canvas.draw_line(pos2(1.0, 1.0), pos2(2.0, 2.0), &pen(1.0));
        assert!(canvas.version() > v0);
        let v1 = canvas.version();
        canvas.resize(10, 10);
        assert_eq!(canvas.version(), v1);
        canvas.reset(10, 10);
        assert!(canvas.version() > v1);
        assert_eq!(canvas.pixel(1, 1), Some(Color32::WHITE));
    }

    #[test]
    fn test_flatten_transparent_pixels() {
        let mut image = RgbaImage::from_pixel(2, 1, Rgba([0, 0, 0, 0]));
        image.put_pixel(1, 0, Rgba([10, 20, 30, 255]));
        let canvas = Canvas::from_image(image);
        assert_eq!(canvas.pixel(0, 0), Some(Color32::WHITE));
        assert_eq!(canvas.pixel(1, 0), Some(Color32::from_rgb(10, 20, 30)));
    }

    #[test]
    fn test_color_image_matches_size() {
        let canvas = Canvas::new(7, 5);
        let image = canvas.to_color_image();
        assert_eq!(image.size, [7, 5]);
        assert_eq!(image.pixels[0], Color32::WHITE);
    }
}
