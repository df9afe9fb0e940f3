use crate::config::ScreenConfig;
use crate::entity::{normalize_degrees, EntityKind, SpaceEntity};
use crate::error::Error;
use crate::object::SpaceObject;
use crate::sprite::Sprite;
use nalgebra::{vector, Vector2};

/// Degrees turned by one rotate action.
pub const ROTATION_STEP: f64 = 22.5;

/// Velocity added by one thrust action.
pub const THRUST_IMPULSE: f64 = 1.0;

/// A player-controlled ship.
///
/// The actions below are what an input layer or an agent calls; they only
/// change velocity and facing, and the change shows up on screen at the
/// next update.
#[derive(Clone, Debug)]
pub struct Ship {
    pub player_id: i32,
    entity: SpaceEntity,
}

impl Ship {
    pub fn new(
        player_id: i32,
        sprite: Sprite,
        position: Vector2<f64>,
        angle: f64,
        screen: ScreenConfig,
    ) -> Result<Self, Error> {
        let entity = SpaceEntity::new(
            EntityKind::Ship,
            sprite,
            position,
            angle,
            vector![0.0, 0.0],
            screen,
        )?;
        Ok(Self { player_id, entity })
    }

    pub fn rotate_counterclockwise(&mut self) {
        self.turn(-ROTATION_STEP);
    }

    pub fn rotate_clockwise(&mut self) {
        self.turn(ROTATION_STEP);
    }

    /// Accelerates along the current facing.
    pub fn thrust(&mut self) {
        let (sin, cos) = self.entity.angle().to_radians().sin_cos();
        let velocity = self.entity.velocity() + THRUST_IMPULSE * vector![cos, sin];
        if let Err(e) = self.entity.set_velocity(velocity) {
            log::warn!("Ship {} thrust ignored: {}", self.player_id, e);
        }
    }

    fn turn(&mut self, delta: f64) {
        let angle = normalize_degrees(self.entity.angle() + delta);
        if let Err(e) = self.entity.set_angle(angle) {
            log::warn!("Ship {} turn ignored: {}", self.player_id, e);
        }
    }
}

impl SpaceObject for Ship {
    fn entity(&self) -> &SpaceEntity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut SpaceEntity {
        &mut self.entity
    }

    fn as_ship_mut(&mut self) -> Option<&mut Ship> {
        Some(self)
    }
}
