use rand::RngCore;
use rand::seq::IteratorRandom;

use crate::error::InvasionError;
use crate::model::Board;

/// Place `aliens` invaders in distinct random living cities.
///
/// Aliens are named by spawn index (`"0"`, `"1"`, ...). Returns their ids
/// in spawn order. Fails with a configuration error — before creating
/// anything — if more aliens are requested than there are living cities.
pub fn setup_game(
    board: &mut Board,
    aliens: usize,
    rng: &mut dyn RngCore,
) -> Result<Vec<u64>, InvasionError> {
    if aliens > board.living_cities.len() {
        return Err(InvasionError::Configuration(format!(
            "more aliens ({aliens}) than living cities ({})",
            board.living_cities.len()
        )));
    }

    let starts = board
        .living_cities
        .iter()
        .copied()
        .choose_multiple(rng, aliens);

    Ok(starts
        .into_iter()
        .enumerate()
        .map(|(i, city)| board.spawn_alien(i.to_string(), city))
        .collect())
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn too_many_aliens_fails_before_creating_any() {
        let mut board = Board::new();
        board.add_city("a".to_string(), [None; 4]);
        let mut rng = SmallRng::seed_from_u64(7);

        let err = setup_game(&mut board, 2, &mut rng).unwrap_err();
        assert!(matches!(err, InvasionError::Configuration(_)));
        assert!(board.aliens.is_empty());
        assert!(board.living_aliens.is_empty());
        assert!(board.occupied_cities.is_empty());
    }

    #[test]
    fn each_alien_gets_its_own_starting_city() {
        let mut board = Board::new();
        for name in ["a", "b", "c", "d", "e"] {
            board.add_city(name.to_string(), [None; 4]);
        }
        let mut rng = SmallRng::seed_from_u64(7);

        let spawned = setup_game(&mut board, 3, &mut rng).unwrap();

        assert_eq!(spawned.len(), 3);
        assert_eq!(board.living_aliens.len(), 3);
        assert_eq!(board.occupied_cities.len(), 3);
        for city_id in &board.occupied_cities {
            assert_eq!(board.city(*city_id).occupants.len(), 1);
        }
    }
}
