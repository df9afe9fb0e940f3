//! Sprite images and rotation.
//!
//! Convention used throughout the crate: screen y points down, a facing
//! angle of 0 degrees points along +x, and the facing angle increases
//! clockwise on screen. Base images are drawn facing +x.
//!
//! The rotation primitive, [`rotate_counterclockwise`], follows the usual
//! math convention instead. [`render_facing`] is the only place that
//! translates between the two.

use crate::entity::normalize_degrees;
use crate::error::Error;
use image::{imageops, Rgba, RgbaImage};
use nalgebra::{vector, Rotation2};
use std::path::Path;
use std::sync::Arc;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

// Absorbs trig rounding when sizing a rotated canvas, so e.g. a 90.0000000001
// degree rotation does not grow by a pixel.
const SIZE_EPSILON: f64 = 1e-6;

/// Shared, immutable RGBA image.
#[derive(Clone, Debug)]
pub struct Sprite {
    image: Arc<RgbaImage>,
}

impl Sprite {
    pub fn new(image: RgbaImage) -> Result<Self, Error> {
        if image.width() == 0 || image.height() == 0 {
            return Err(Error::new(format!(
                "Sprite image must not be empty, got {}x{}",
                image.width(),
                image.height()
            )));
        }
        Ok(Self {
            image: Arc::new(image),
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        log::debug!("Loading sprite {:?}", path);
        let image = image::open(path)?.into_rgba8();
        Self::new(image)
    }

    /// A solid isosceles triangle pointing along +x.
    pub fn arrow(width: u32, height: u32, color: Rgba<u8>) -> Result<Self, Error> {
        let (w, h) = (width as f64, height as f64);
        let image = RgbaImage::from_fn(width, height, |x, y| {
            let px = x as f64 + 0.5;
            let py = y as f64 + 0.5;
            let half_span = (h / 2.0) * (1.0 - px / w);
            if (py - h / 2.0).abs() <= half_span {
                color
            } else {
                TRANSPARENT
            }
        });
        Self::new(image)
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn ptr_eq(&self, other: &Sprite) -> bool {
        Arc::ptr_eq(&self.image, &other.image)
    }
}

/// Renders `base` facing `angle` degrees, clockwise on screen.
pub fn render_facing(base: &RgbaImage, angle: f64) -> RgbaImage {
    rotate_counterclockwise(base, -angle)
}

/// Rotates `image` counter-clockwise on screen by `degrees`.
///
/// The canvas grows to hold the whole rotated image and uncovered pixels are
/// transparent. Multiples of 90 degrees are exact; other angles use
/// nearest-neighbor sampling.
pub fn rotate_counterclockwise(image: &RgbaImage, degrees: f64) -> RgbaImage {
    let degrees = normalize_degrees(degrees);
    if degrees == 0.0 {
        return image.clone();
    } else if degrees == 90.0 {
        return imageops::rotate270(image);
    } else if degrees == 180.0 {
        return imageops::rotate180(image);
    } else if degrees == 270.0 {
        return imageops::rotate90(image);
    }

    let (sin, cos) = degrees.to_radians().sin_cos();
    let (w, h) = (image.width() as f64, image.height() as f64);
    let out_w = (w * cos.abs() + h * sin.abs() - SIZE_EPSILON).ceil().max(1.0) as u32;
    let out_h = (w * sin.abs() + h * cos.abs() - SIZE_EPSILON).ceil().max(1.0) as u32;

    // With y down, a counter-clockwise screen rotation is clockwise in the
    // math frame, so the inverse mapping (output -> source) is a plain
    // counter-clockwise math rotation.
    let inverse = Rotation2::new(degrees.to_radians());
    let out_center = vector![out_w as f64 / 2.0, out_h as f64 / 2.0];
    let src_center = vector![w / 2.0, h / 2.0];

    let mut out = RgbaImage::from_pixel(out_w, out_h, TRANSPARENT);
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        let offset = vector![x as f64 + 0.5, y as f64 + 0.5] - out_center;
        let src = inverse * offset + src_center;
        if src.x >= 0.0 && src.y >= 0.0 && src.x < w && src.y < h {
            *pixel = *image.get_pixel(src.x as u32, src.y as u32);
        }
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;
    use test_log::test;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    // Mean position of opaque pixels relative to the image center.
    fn opaque_centroid(image: &RgbaImage) -> (f64, f64) {
        let (mut sx, mut sy, mut n) = (0.0, 0.0, 0.0);
        for (x, y, pixel) in image.enumerate_pixels() {
            if pixel[3] > 0 {
                sx += x as f64 + 0.5;
                sy += y as f64 + 0.5;
                n += 1.0;
            }
        }
        assert!(n > 0.0);
        (
            sx / n - image.width() as f64 / 2.0,
            sy / n - image.height() as f64 / 2.0,
        )
    }

    #[test]
    fn test_empty_rejected() {
        assert!(Sprite::new(RgbaImage::new(0, 0)).is_err());
        assert!(Sprite::new(RgbaImage::new(4, 0)).is_err());
        assert!(Sprite::arrow(0, 10, WHITE).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("spacewar-no-such-sprite.png");
        let err = Sprite::load(&path).unwrap_err();
        assert!(err.msg.starts_with("Image error"), "{}", err.msg);
    }

    #[test]
    fn test_arrow_points_right() {
        let sprite = Sprite::arrow(20, 10, WHITE).unwrap();
        assert_eq!((sprite.width(), sprite.height()), (20, 10));
        // The wide base is on the left.
        let (cx, cy) = opaque_centroid(sprite.image());
        assert!(cx < 0.0);
        assert!(cy.abs() < 1e-9);
        assert_eq!(sprite.image().get_pixel(0, 5)[3], 255);
        assert_eq!(sprite.image().get_pixel(19, 0)[3], 0);
    }

    #[test]
    fn test_quarter_turns_are_exact() {
        let sprite = Sprite::arrow(20, 10, WHITE).unwrap();
        let base = sprite.image();
        assert_eq!(&rotate_counterclockwise(base, 0.0), base);
        assert_eq!(rotate_counterclockwise(base, 90.0), imageops::rotate270(base));
        assert_eq!(rotate_counterclockwise(base, 180.0), imageops::rotate180(base));
        assert_eq!(rotate_counterclockwise(base, -90.0), imageops::rotate90(base));
        assert_eq!(rotate_counterclockwise(base, 450.0), imageops::rotate270(base));
    }

    #[test]
    fn test_render_facing_is_clockwise() {
        let sprite = Sprite::arrow(20, 10, WHITE).unwrap();

        // Facing 90 degrees points down the screen, so the base ends up on top.
        let down = render_facing(sprite.image(), 90.0);
        assert_eq!(down.dimensions(), (10, 20));
        let (cx, cy) = opaque_centroid(&down);
        assert!(cy < 0.0);
        assert!(cx.abs() < 1e-9);

        // Facing 270 degrees points up the screen.
        let up = render_facing(sprite.image(), 270.0);
        let (_, cy) = opaque_centroid(&up);
        assert!(cy > 0.0);
    }

    #[test]
    fn test_diagonal_canvas_grows() {
        let sprite = Sprite::arrow(20, 10, WHITE).unwrap();
        let rotated = render_facing(sprite.image(), 45.0);
        assert_eq!(rotated.dimensions(), (22, 22));
        // Pointing down-right, so the base sits up-left of center.
        let (cx, cy) = opaque_centroid(&rotated);
        assert!(cx < 0.0);
        assert!(cy < 0.0);
    }

    #[test]
    fn test_periodic() {
        let sprite = Sprite::arrow(16, 9, WHITE).unwrap();
        for angle in [0.0, 10.0, 22.5, 45.0, 135.0, 300.0] {
            let once = render_facing(sprite.image(), angle);
            assert_eq!(once, render_facing(sprite.image(), angle + 360.0));
            assert_eq!(once, render_facing(sprite.image(), angle - 360.0));
        }
    }
}
