mod common;

use common::{CROSS_MAP, LINE_MAP, city_id_by_name};
use invasion_sim::mapfile::parse_board;
use invasion_sim::model::EventLog;
use invasion_sim::sim::{move_alien, resolve_fights, run_with_rng, setup_game};
use invasion_sim::{InvasionError, SimConfig, run};
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[test]
fn forced_collision_destroys_the_middle_city() {
    let mut board = parse_board(LINE_MAP);
    let left = city_id_by_name(&board, "Left");
    let middle = city_id_by_name(&board, "Middle");
    let right = city_id_by_name(&board, "Right");

    let first = board.spawn_alien("0".to_string(), left);
    let second = board.spawn_alien("1".to_string(), right);
    let mut rng = SmallRng::seed_from_u64(9);

    // Each end city has exactly one link, so both moves are forced.
    move_alien(&mut board, first, &mut rng).unwrap();
    move_alien(&mut board, second, &mut rng).unwrap();
    assert_eq!(board.alien(first).current_city, middle);
    assert_eq!(board.alien(second).current_city, middle);

    let mut log = EventLog::new();
    resolve_fights(&mut board, 1, &mut log);

    assert!(board.destroyed_cities.contains(&middle));
    assert!(board.living_cities.contains(&left));
    assert!(board.living_cities.contains(&right));
    assert!(board.city(left).linked_directions().is_empty());
    assert!(board.city(right).linked_directions().is_empty());
    assert!(board.living_aliens.is_empty());
    assert!(board.dead_aliens.contains(&first));
    assert!(board.dead_aliens.contains(&second));

    assert_eq!(log.destructions.len(), 1);
    assert_eq!(
        log.destructions[0].describe(),
        "City Middle destroyed by alien 0 and alien 1"
    );
}

#[test]
fn full_run_on_the_line_map_ends_with_everyone_dead() {
    let mut board = parse_board(LINE_MAP);
    let left = city_id_by_name(&board, "Left");
    let right = city_id_by_name(&board, "Right");
    board.spawn_alien("0".to_string(), left);
    board.spawn_alien("1".to_string(), right);

    let log = run(&mut board, &SimConfig::default()).unwrap();

    assert_eq!(log.destructions.len(), 1);
    assert_eq!(log.destructions[0].city, "Middle");
    assert_eq!(log.destructions[0].round, 1);
    assert!(board.living_aliens.is_empty());
    assert_eq!(board.living_cities.len(), 2);
}

#[test]
fn too_many_aliens_is_a_configuration_error() {
    let mut board = parse_board(CROSS_MAP);
    let mut rng = SmallRng::seed_from_u64(1);

    let err = setup_game(&mut board, 6, &mut rng).unwrap_err();

    assert!(matches!(err, InvasionError::Configuration(_)));
    assert!(board.aliens.is_empty());
    assert!(board.living_aliens.is_empty());
    assert!(board.occupied_cities.is_empty());
}

#[test]
fn moves_land_only_on_linked_cities() {
    let mut board = parse_board(CROSS_MAP);
    let centre = city_id_by_name(&board, "centre");
    let alien = board.spawn_alien("0".to_string(), centre);
    let mut rng = SmallRng::seed_from_u64(3);

    move_alien(&mut board, alien, &mut rng).unwrap();

    let landed = board.alien(alien).current_city;
    let edge_ids: Vec<u64> = ["North", "South", "East", "West"]
        .iter()
        .map(|name| city_id_by_name(&board, name))
        .collect();
    assert!(edge_ids.contains(&landed));
    assert_eq!(board.alien(alien).moves, 1);
    assert!(!board.city(centre).occupants.contains(&alien));
    assert!(board.city(landed).occupants.contains(&alien));
}

#[test]
fn three_way_pileup_is_reported_as_a_list() {
    let mut board = parse_board(
        "\
Hub north=A south=B east=C
A south=Hub
B north=Hub
C west=Hub
",
    );
    let hub = city_id_by_name(&board, "Hub");
    for name in ["A", "B", "C"] {
        let id = city_id_by_name(&board, name);
        board.spawn_alien(board.aliens.len().to_string(), id);
    }
    let mut rng = SmallRng::seed_from_u64(5);

    // Every spoke has a single link, straight into the hub.
    let movers: Vec<u64> = board.living_aliens.iter().copied().collect();
    for alien_id in movers {
        move_alien(&mut board, alien_id, &mut rng).unwrap();
    }
    let mut log = EventLog::new();
    resolve_fights(&mut board, 1, &mut log);

    assert!(board.destroyed_cities.contains(&hub));
    assert_eq!(board.dead_aliens.len(), 3);
    assert_eq!(
        log.destructions[0].describe(),
        "City Hub destroyed by aliens: 0, 1, 2"
    );
}

#[test]
fn zero_aliens_leave_the_map_untouched() {
    let mut board = parse_board(CROSS_MAP);

    let log = run(&mut board, &SimConfig::default()).unwrap();

    assert!(log.destructions.is_empty());
    assert_eq!(board.living_cities.len(), 5);
    assert!(board.occupied_cities.is_empty());
}

#[test]
fn same_seed_replays_the_same_invasion() {
    let run_once = |seed: u64| {
        let mut board = parse_board(CROSS_MAP);
        let mut rng = SmallRng::seed_from_u64(seed);
        setup_game(&mut board, 3, &mut rng).unwrap();
        let log = run_with_rng(&mut board, 50, &mut rng).unwrap();
        let survivors: Vec<String> = board
            .living_cities
            .iter()
            .map(|id| board.city(*id).name.clone())
            .collect();
        (log, survivors)
    };

    assert_eq!(run_once(1234), run_once(1234));
}

#[test]
fn lone_survivor_keeps_wandering_until_the_budget_runs_out() {
    let mut board = parse_board(LINE_MAP);
    let left = city_id_by_name(&board, "Left");
    let alien = board.spawn_alien("0".to_string(), left);

    let log = run(&mut board, &SimConfig::new(25, 7)).unwrap();

    assert!(log.destructions.is_empty());
    assert!(board.alien(alien).alive);
    assert_eq!(board.alien(alien).moves, 25);
    assert_eq!(board.living_cities.len(), 3);
}
