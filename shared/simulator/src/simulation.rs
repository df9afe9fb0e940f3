use crate::config::ScreenConfig;
use crate::error::Error;
use crate::object::SpaceObject;
use crate::ship::Ship;
use crate::snapshot::{EntitySnapshot, Snapshot};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Hash, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Serialize, Deserialize, Debug)]
pub struct EntityHandle(pub u64);

/// The set of live entities and the tick loop that drives them.
pub struct Simulation {
    screen: ScreenConfig,
    entities: BTreeMap<EntityHandle, Box<dyn SpaceObject>>,
    next_id: u64,
    tick: u32,
}

impl Simulation {
    pub fn new(screen: ScreenConfig) -> Result<Simulation, Error> {
        screen.validate()?;
        log::info!("screen {}x{} at {} fps", screen.width, screen.height, screen.max_fps);
        Ok(Simulation {
            screen,
            entities: BTreeMap::new(),
            next_id: 0,
            tick: 0,
        })
    }

    pub fn screen(&self) -> &ScreenConfig {
        &self.screen
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    pub fn time(&self) -> f64 {
        self.tick as f64 * self.screen.tick_length()
    }

    pub fn add(&mut self, object: Box<dyn SpaceObject>) -> Result<EntityHandle, Error> {
        if object.entity().screen() != &self.screen {
            return Err(Error::new(format!(
                "{} was built for screen {:?}, simulation uses {:?}",
                object.kind().name(),
                object.entity().screen(),
                self.screen
            )));
        }
        let handle = EntityHandle(self.next_id);
        self.next_id += 1;
        log::debug!("Added {} as {:?}", object.kind().name(), handle);
        self.entities.insert(handle, object);
        Ok(handle)
    }

    pub fn remove(&mut self, handle: EntityHandle) -> Option<Box<dyn SpaceObject>> {
        let removed = self.entities.remove(&handle);
        if removed.is_some() {
            log::debug!("Removed {:?}", handle);
        }
        removed
    }

    pub fn contains(&self, handle: EntityHandle) -> bool {
        self.entities.contains_key(&handle)
    }

    pub fn get(&self, handle: EntityHandle) -> Option<&dyn SpaceObject> {
        self.entities.get(&handle).map(|e| e.as_ref())
    }

    pub fn get_mut(&mut self, handle: EntityHandle) -> Option<&mut (dyn SpaceObject + 'static)> {
        self.entities.get_mut(&handle).map(|e| e.as_mut())
    }

    pub fn ship_mut(&mut self, handle: EntityHandle) -> Option<&mut Ship> {
        self.get_mut(handle).and_then(|e| e.as_ship_mut())
    }

    pub fn handles(&self) -> impl Iterator<Item = EntityHandle> + '_ {
        self.entities.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Advances every live entity by one tick, oldest first.
    pub fn step(&mut self) {
        for object in self.entities.values_mut() {
            object.update();
        }
        self.tick += 1;
        log::trace!("tick {} entities={}", self.tick, self.entities.len());
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.tick,
            time: self.time(),
            screen: self.screen,
            entities: self
                .entities
                .iter()
                .map(|(handle, object)| {
                    let entity = object.entity();
                    EntitySnapshot {
                        id: handle.0,
                        kind: entity.kind(),
                        position: entity.position(),
                        velocity: entity.velocity(),
                        angle: entity.angle(),
                        bounding_box: entity.bounding_box(),
                        image_width: entity.image().width(),
                        image_height: entity.image().height(),
                    }
                })
                .collect(),
        }
    }
}
