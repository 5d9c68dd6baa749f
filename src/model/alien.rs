/// A mobile invader. Occupies exactly one city at a time while alive; the
/// city reference stays valid for its whole life because fights kill the
/// occupants before the city is pulled from the graph.
#[derive(Debug, Clone)]
pub struct Alien {
    pub id: u64,
    pub name: String,
    /// Current location. After death this still points at the (destroyed)
    /// city the alien fell in.
    pub current_city: u64,
    /// Move attempts so far — counted whether or not the alien actually
    /// relocated, so trapped aliens still burn through the move budget.
    pub moves: u64,
    pub alive: bool,
}
