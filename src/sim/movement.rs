use rand::RngCore;
use rand::seq::IndexedRandom;

use crate::error::InvasionError;
use crate::model::Board;

/// Advance one alien by a single move attempt.
///
/// Dead aliens are skipped entirely. A living alien whose city has no
/// remaining links stays where it is. Either way the move counter goes up
/// by exactly one per call, so trapped aliens still spend the move budget.
///
/// The direction is drawn uniformly from the directions that currently
/// lead somewhere — not from all four — so the distribution shifts as
/// links get pruned.
pub fn move_alien(
    board: &mut Board,
    alien_id: u64,
    rng: &mut dyn RngCore,
) -> Result<(), InvasionError> {
    if !board.alien(alien_id).alive {
        return Ok(());
    }

    let from = board.alien(alien_id).current_city;
    let options = board.city(from).linked_directions();
    if let Some(&dir) = options.choose(rng) {
        let to = board
            .city(from)
            .link(dir)
            .unwrap_or_else(|| panic!("move_alien: direction {dir} lost its link"));
        board.remove_occupant(from, alien_id)?;
        board.alien_mut(alien_id).current_city = to;
        board.add_occupant(to, alien_id);
    }

    board.alien_mut(alien_id).moves += 1;
    Ok(())
}
