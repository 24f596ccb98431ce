use crate::models::CoordinateKey;
use std::collections::HashMap;
use tracing::debug;

/// Population-by-location index, built once per run and read-only afterwards.
///
/// Keys are canonical rounded coordinates, so two raw grid cells that round to
/// the same key collide; the last inserted value wins. That loss is an
/// accepted consequence of the fuzzy tolerance and is surfaced through the
/// collision counter rather than hidden.
#[derive(Debug, Default)]
pub struct PopulationIndex {
    map: HashMap<CoordinateKey, f64>,
    collisions: u64,
}

impl PopulationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a cell, last write wins on key collision.
    pub fn insert(&mut self, key: CoordinateKey, population: f64) {
        if let Some(previous) = self.map.insert(key, population) {
            self.collisions += 1;
            debug!(
                latitude = key.latitude(),
                longitude = key.longitude(),
                previous, population, "population key collision, keeping later value"
            );
        }
    }

    pub fn lookup(&self, key: &CoordinateKey) -> Option<f64> {
        self.map.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Number of inserts that overwrote an earlier cell.
    pub fn collisions(&self) -> u64 {
        self.collisions
    }
}
