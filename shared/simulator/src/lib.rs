pub mod config;
pub mod entity;
pub mod error;
pub mod object;
pub mod rect;
pub mod ship;
pub mod simulation;
pub mod snapshot;
pub mod sprite;

pub use config::ScreenConfig;
pub use entity::{EntityKind, SpaceEntity};
pub use error::Error;
pub use object::SpaceObject;
pub use ship::Ship;
pub use simulation::{EntityHandle, Simulation};
pub use sprite::Sprite;
