use crate::entity::{EntityKind, SpaceEntity};
use crate::ship::Ship;
use nalgebra::Vector2;

/// Common interface of everything that flies around the screen.
///
/// Concrete kinds embed a [`SpaceEntity`] and expose it here; the provided
/// methods forward to it. Kinds that need extra per-tick behavior override
/// `update` and call `entity_mut().update()` themselves.
pub trait SpaceObject {
    fn entity(&self) -> &SpaceEntity;

    fn entity_mut(&mut self) -> &mut SpaceEntity;

    fn update(&mut self) {
        self.entity_mut().update();
    }

    fn kind(&self) -> EntityKind {
        self.entity().kind()
    }

    fn position(&self) -> Vector2<f64> {
        self.entity().position()
    }

    fn velocity(&self) -> Vector2<f64> {
        self.entity().velocity()
    }

    fn angle(&self) -> f64 {
        self.entity().angle()
    }

    fn as_ship_mut(&mut self) -> Option<&mut Ship> {
        None
    }
}

impl SpaceObject for SpaceEntity {
    fn entity(&self) -> &SpaceEntity {
        self
    }

    fn entity_mut(&mut self) -> &mut SpaceEntity {
        self
    }
}
