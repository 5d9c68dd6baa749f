use std::collections::{BTreeMap, BTreeSet};

use super::alien::Alien;
use super::city::{City, Direction};
use crate::error::InvasionError;
use crate::id::IdGenerator;

/// Aggregate owning every city and alien in one simulation run, plus the
/// derived membership sets the round loop reads. BTree maps and sets so
/// iteration order is deterministic.
///
/// Invariants held at every method boundary:
/// - a city id is in `living_cities` or `destroyed_cities`, never both
/// - `occupied_cities` only contains living cities
/// - a living city is in `occupied_cities` exactly when its occupant set is
///   non-empty
/// - an alien id is in `living_aliens` or `dead_aliens`, never both
#[derive(Debug, Default)]
pub struct Board {
    pub cities: BTreeMap<u64, City>,
    pub aliens: BTreeMap<u64, Alien>,
    pub living_cities: BTreeSet<u64>,
    pub destroyed_cities: BTreeSet<u64>,
    pub occupied_cities: BTreeSet<u64>,
    pub living_aliens: BTreeSet<u64>,
    pub dead_aliens: BTreeSet<u64>,
    pub id_gen: IdGenerator,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new city in the living set, assigning it a unique ID.
    /// Returns the assigned ID.
    ///
    /// Link reciprocity is not validated here; the map is trusted to be
    /// geographically consistent.
    pub fn add_city(&mut self, name: String, links: [Option<u64>; 4]) -> u64 {
        let id = self.id_gen.next_id();
        self.cities.insert(id, City::new(id, name, links));
        self.living_cities.insert(id);
        id
    }

    /// Look up a city by ID.
    ///
    /// # Panics
    /// Panics if `id` was never created.
    pub fn city(&self, id: u64) -> &City {
        self.cities
            .get(&id)
            .unwrap_or_else(|| panic!("city: city {id} not found"))
    }

    /// Look up a city by ID, mutably.
    ///
    /// # Panics
    /// Panics if `id` was never created.
    pub fn city_mut(&mut self, id: u64) -> &mut City {
        self.cities
            .get_mut(&id)
            .unwrap_or_else(|| panic!("city_mut: city {id} not found"))
    }

    /// Look up an alien by ID.
    ///
    /// # Panics
    /// Panics if `id` was never created.
    pub fn alien(&self, id: u64) -> &Alien {
        self.aliens
            .get(&id)
            .unwrap_or_else(|| panic!("alien: alien {id} not found"))
    }

    /// Look up an alien by ID, mutably.
    ///
    /// # Panics
    /// Panics if `id` was never created.
    pub fn alien_mut(&mut self, id: u64) -> &mut Alien {
        self.aliens
            .get_mut(&id)
            .unwrap_or_else(|| panic!("alien_mut: alien {id} not found"))
    }

    /// Remove a city from the live graph.
    ///
    /// Clears all four link slots and, for each linked neighbor, the
    /// neighbor's reciprocal slot, so after this returns no living city
    /// still references the destroyed one. No-op on an already-destroyed
    /// city (its links were cleared when it died).
    ///
    /// # Panics
    /// Panics if `id` was never created.
    pub fn destroy_city(&mut self, id: u64) {
        if !self.living_cities.contains(&id) {
            assert!(
                self.destroyed_cities.contains(&id),
                "destroy_city: city {id} not found"
            );
            return;
        }

        for dir in Direction::ALL {
            let Some(neighbor) = self.city(id).link(dir) else {
                continue;
            };
            self.city_mut(neighbor).set_link(dir.opposite(), None);
            self.city_mut(id).set_link(dir, None);
        }

        self.living_cities.remove(&id);
        self.occupied_cities.remove(&id);
        self.destroyed_cities.insert(id);
    }

    /// Insert an alien into a city's occupant set, marking the city occupied.
    ///
    /// # Panics
    /// Panics if `city_id` was never created.
    pub fn add_occupant(&mut self, city_id: u64, alien_id: u64) {
        self.city_mut(city_id).occupants.insert(alien_id);
        self.occupied_cities.insert(city_id);
    }

    /// Remove an alien from a city's occupant set, clearing the city's
    /// occupied status when it empties.
    ///
    /// Returns an `InvariantViolation` if the alien was not occupying the
    /// city — occupancy bookkeeping has already gone wrong at that point
    /// and the run should stop.
    ///
    /// # Panics
    /// Panics if `city_id` was never created.
    pub fn remove_occupant(&mut self, city_id: u64, alien_id: u64) -> Result<(), InvasionError> {
        let city = self.city_mut(city_id);
        if !city.occupants.remove(&alien_id) {
            return Err(InvasionError::InvariantViolation(format!(
                "alien {alien_id} is not occupying city {city_id}"
            )));
        }
        if city.occupants.is_empty() {
            self.occupied_cities.remove(&city_id);
        }
        Ok(())
    }

    /// Create an alien already placed in its starting city, assigning it a
    /// unique ID. Returns the assigned ID.
    ///
    /// # Panics
    /// Panics if `city_id` was never created.
    pub fn spawn_alien(&mut self, name: String, city_id: u64) -> u64 {
        let id = self.id_gen.next_id();
        self.aliens.insert(
            id,
            Alien {
                id,
                name,
                current_city: city_id,
                moves: 0,
                alive: true,
            },
        );
        self.living_aliens.insert(id);
        self.add_occupant(city_id, id);
        id
    }

    /// Mark an alien dead and move it from the living to the dead set.
    /// Dead aliens take no further moves.
    ///
    /// # Panics
    /// Panics if `id` was never created.
    pub fn kill_alien(&mut self, id: u64) {
        self.alien_mut(id).alive = false;
        self.living_aliens.remove(&id);
        self.dead_aliens.insert(id);
    }
}
