use invasion_sim::model::Board;

/// 5-city cross: centre linked out to all four compass cities, each edge
/// city linked back to centre only. 8 directional links in total.
pub const CROSS_MAP: &str = "\
North south=centre
South north=centre
East west=centre
West east=centre
centre north=North south=South east=East west=West
";

/// 3 cities in a west-east line. An alien starting at either end has
/// exactly one move available.
pub const LINE_MAP: &str = "\
Left east=Middle
Middle west=Left east=Right
Right west=Middle
";

pub fn city_id_by_name(board: &Board, name: &str) -> u64 {
    board
        .cities
        .values()
        .find(|city| city.name == name)
        .unwrap_or_else(|| panic!("no city named {name}"))
        .id
}
