use tracing::info;

use crate::model::{Board, Destruction, EventLog};

/// Resolve every fight on the board for one round.
///
/// Works from a snapshot of the occupied set, so destroying cities mid-pass
/// cannot change which cities are considered this round. Any city holding
/// two or more aliens kills all of them and is removed from the graph;
/// three-way (or worse) pileups are a normal outcome when several aliens
/// arrive in the same round, and everyone involved dies together.
pub fn resolve_fights(board: &mut Board, round: u64, log: &mut EventLog) {
    let occupied: Vec<u64> = board.occupied_cities.iter().copied().collect();

    for city_id in occupied {
        let combatants: Vec<u64> = board.city(city_id).occupants.iter().copied().collect();
        if combatants.len() < 2 {
            continue;
        }

        for &alien_id in &combatants {
            board.kill_alien(alien_id);
        }

        let event = Destruction {
            round,
            city: board.city(city_id).name.clone(),
            aliens: combatants
                .iter()
                .map(|id| board.alien(*id).name.clone())
                .collect(),
        };
        info!("{}", event.describe());
        log.record(event);

        board.destroy_city(city_id);
    }
}
