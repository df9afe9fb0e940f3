use crate::config::ScreenConfig;
use crate::entity::EntityKind;
use crate::rect::Rect;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Per-frame view of the simulation for renderers and training harnesses.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Snapshot {
    pub tick: u32,
    pub time: f64,
    pub screen: ScreenConfig,
    pub entities: Vec<EntitySnapshot>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct EntitySnapshot {
    pub id: u64,
    pub kind: EntityKind,
    pub position: Vector2<f64>,
    pub velocity: Vector2<f64>,
    pub angle: f64,
    pub bounding_box: Rect,
    pub image_width: u32,
    pub image_height: u32,
}
