use crate::config::ScreenConfig;
use crate::error::Error;
use crate::rect::Rect;
use crate::sprite::{self, Sprite};
use image::RgbaImage;
use nalgebra::{vector, Vector2};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize, Debug)]
pub enum EntityKind {
    Ship,
    PhotonTorpedo,
    Phaser,
}

impl EntityKind {
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Ship => "ship",
            EntityKind::PhotonTorpedo => "photon_torpedo",
            EntityKind::Phaser => "phaser",
        }
    }
}

/// Reduces `degrees` into [0, 360), negative inputs included.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let r = degrees.rem_euclid(360.0);
    // rem_euclid can round tiny negative inputs up to exactly 360, and
    // returns -0.0 for -0.0.
    if r >= 360.0 || r == 0.0 {
        0.0
    } else {
        r
    }
}

/// Toroidal correction for one axis.
///
/// Both bounds are inclusive: a coordinate sitting exactly on 0 is sent to
/// the far edge, and one exactly on `size` is sent to 0.
pub fn wrap_coordinate(value: f64, size: f64) -> f64 {
    if value >= size {
        0.0
    } else if value <= 0.0 {
        size
    } else {
        value
    }
}

/// A moving, rotating object on a wrap-around screen.
///
/// `update` runs once per tick and, in order: wraps the position, adds the
/// velocity, normalizes the angle, re-renders the image and re-centers the
/// bounding box. Wrapping happens before integration, so an entity that
/// crosses an edge is drawn past it for one frame before it reappears on
/// the other side.
#[derive(Clone, Debug)]
pub struct SpaceEntity {
    kind: EntityKind,
    base_image: Sprite,
    image: Arc<RgbaImage>,
    position: Vector2<f64>,
    velocity: Vector2<f64>,
    angle: f64,
    bounding_box: Rect,
    screen: ScreenConfig,
}

impl SpaceEntity {
    pub fn new(
        kind: EntityKind,
        base_image: Sprite,
        position: Vector2<f64>,
        angle: f64,
        velocity: Vector2<f64>,
        screen: ScreenConfig,
    ) -> Result<Self, Error> {
        screen.validate()?;
        check_vector("position", position)?;
        check_vector("velocity", velocity)?;
        check_finite("angle", angle)?;

        // The first frame shows the unrotated image whatever the angle; the
        // rotation is applied from the first update on.
        let image = Arc::new(base_image.image().clone());
        let bounding_box = Rect::centered_at(
            position,
            base_image.width() as f64,
            base_image.height() as f64,
        );
        log::debug!(
            "Created {} at {:?} angle={} velocity={:?}",
            kind.name(),
            position,
            angle,
            velocity
        );
        Ok(Self {
            kind,
            base_image,
            image,
            position,
            velocity,
            angle,
            bounding_box,
            screen,
        })
    }

    /// An entity at rest facing +x.
    pub fn at_rest(
        kind: EntityKind,
        base_image: Sprite,
        position: Vector2<f64>,
        screen: ScreenConfig,
    ) -> Result<Self, Error> {
        Self::new(kind, base_image, position, 0.0, vector![0.0, 0.0], screen)
    }

    pub fn update(&mut self) {
        self.position = vector![
            wrap_coordinate(self.position.x, self.screen.width),
            wrap_coordinate(self.position.y, self.screen.height)
        ];
        self.position += self.velocity;
        self.angle = normalize_degrees(self.angle);

        let image = sprite::render_facing(self.base_image.image(), self.angle);
        self.bounding_box =
            Rect::centered_at(self.position, image.width() as f64, image.height() as f64);
        self.image = Arc::new(image);

        log::trace!(
            "Updated {} position={:?} angle={}",
            self.kind.name(),
            self.position,
            self.angle
        );
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn screen(&self) -> &ScreenConfig {
        &self.screen
    }

    pub fn base_image(&self) -> &Sprite {
        &self.base_image
    }

    /// The image to draw this frame.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn bounding_box(&self) -> Rect {
        self.bounding_box
    }

    pub fn position(&self) -> Vector2<f64> {
        self.position
    }

    pub fn set_position(&mut self, position: Vector2<f64>) -> Result<(), Error> {
        check_vector("position", position)?;
        self.position = position;
        self.bounding_box = Rect::centered_at(
            position,
            self.bounding_box.width,
            self.bounding_box.height,
        );
        Ok(())
    }

    pub fn velocity(&self) -> Vector2<f64> {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vector2<f64>) -> Result<(), Error> {
        check_vector("velocity", velocity)?;
        self.velocity = velocity;
        Ok(())
    }

    /// Facing in degrees, clockwise on screen from +x.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Takes effect on screen at the next update.
    pub fn set_angle(&mut self, angle: f64) -> Result<(), Error> {
        check_finite("angle", angle)?;
        self.angle = angle;
        Ok(())
    }
}

fn check_finite(name: &str, value: f64) -> Result<(), Error> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::new(format!("{name} must be finite, got {value}")))
    }
}

fn check_vector(name: &str, v: Vector2<f64>) -> Result<(), Error> {
    if v.iter().all(|c| c.is_finite()) {
        Ok(())
    } else {
        Err(Error::new(format!(
            "{name} must be finite, got ({}, {})",
            v.x, v.y
        )))
    }
}
