use super::{Coordinate, Zone, ZoneId, ZoneResolver};
use crate::model::EstimationError;
use std::collections::HashMap;

/// immutable collection of zone boundaries, loaded once and queried by linear scan.
#[derive(Clone, Debug, Default)]
pub struct ZoneIndex {
    zones: Vec<Zone>,
    by_id: HashMap<ZoneId, usize>,
    by_movement_id: HashMap<u32, usize>,
}

impl ZoneIndex {
    /// builds the index, keeping the given load order. zone ids must be unique.
    pub fn try_new(zones: Vec<Zone>) -> Result<ZoneIndex, EstimationError> {
        let mut by_id = HashMap::with_capacity(zones.len());
        let mut by_movement_id = HashMap::new();
        for (idx, zone) in zones.iter().enumerate() {
            if by_id.insert(zone.id, idx).is_some() {
                return Err(EstimationError::DuplicateZoneId(zone.id));
            }
            if let Some(movement_id) = zone.movement_id {
                if let Some(prev) = by_movement_id.insert(movement_id, idx) {
                    log::warn!(
                        "movement id {} is shared by zones {} and {}, using {}",
                        movement_id,
                        zones[prev].id,
                        zone.id,
                        zone.id
                    );
                }
            }
        }
        Ok(ZoneIndex {
            zones,
            by_id,
            by_movement_id,
        })
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn get(&self, zone_id: &ZoneId) -> Option<&Zone> {
        self.by_id.get(zone_id).map(|idx| &self.zones[*idx])
    }

    /// the zone the travel time provider refers to with this movement id.
    pub fn get_by_movement_id(&self, movement_id: u32) -> Option<&Zone> {
        self.by_movement_id
            .get(&movement_id)
            .map(|idx| &self.zones[*idx])
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

impl ZoneResolver for ZoneIndex {
    fn find(&self, coordinate: &Coordinate) -> Option<&Zone> {
        self.zones.iter().find(|zone| zone.contains(coordinate))
    }
}
