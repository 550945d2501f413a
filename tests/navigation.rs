//! Navigation behavior through the public engine API: moving through
//! exits, rejected moves, and the back-through-history command.

use jewelhunt::config::GameConfig;
use jewelhunt::game::{Command, GameEngine, Signal};

fn seeded_engine() -> GameEngine {
    GameEngine::new(&GameConfig {
        rng_seed: Some(11),
        ..GameConfig::default()
    })
}

fn run(engine: &mut GameEngine, line: &str) -> jewelhunt::game::Turn {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let command = Command::from_tokens(&tokens).expect("non-empty command line");
    engine.process_command(&command)
}

#[test]
fn go_north_reaches_the_jungle() {
    let mut engine = seeded_engine();
    assert_eq!(engine.current_room().name, "Entrance of the Enchanted Jungle");

    let turn = run(&mut engine, "go north");
    assert_eq!(engine.current_room().name, "Jungle");
    assert_eq!(turn.signal, Signal::Continue);
    assert!(turn.text.contains("in a dense, winding jungle"));
    assert!(turn.text.contains("Exits:"));
}

#[test]
fn location_reports_list_items_and_exits() {
    let mut engine = seeded_engine();
    let turn = run(&mut engine, "go north");
    assert!(turn.text.contains("Emerald"));
    assert!(turn.text.contains("Mango"));
    for exit in ["north", "east", "south", "west"] {
        assert!(turn.text.contains(exit), "jungle should list exit {}", exit);
    }
}

#[test]
fn rejected_moves_leave_the_room_unchanged() {
    let mut engine = seeded_engine();
    let turn = run(&mut engine, "go west");
    assert!(turn.text.contains("Go where?"));
    assert_eq!(engine.current_room().id, "entrance");

    let turn = run(&mut engine, "go");
    assert!(turn.text.contains("Go where?"));
    assert_eq!(engine.current_room().id, "entrance");
}

#[test]
fn back_pops_the_room_history_in_order() {
    let mut engine = seeded_engine();
    run(&mut engine, "go north");
    run(&mut engine, "go east");
    assert_eq!(engine.current_room().name, "Bottom of the Tower");

    let turn = run(&mut engine, "back");
    assert!(turn.text.contains("You have returned to: Jungle"));
    assert_eq!(engine.current_room().name, "Jungle");

    run(&mut engine, "back");
    assert_eq!(engine.current_room().id, "entrance");

    let turn = run(&mut engine, "back");
    assert!(turn.text.contains("You are back at the starting location."));
    assert_eq!(engine.current_room().id, "entrance");
}

#[test]
fn back_does_not_record_a_forward_history() {
    let mut engine = seeded_engine();
    run(&mut engine, "go north");
    run(&mut engine, "back");

    // history is empty again; a second back stays put
    let turn = run(&mut engine, "back");
    assert!(turn.text.contains("starting location"));
    assert_eq!(engine.current_room().id, "entrance");
}

#[test]
fn unknown_commands_are_diagnosed_and_ignored() {
    let mut engine = seeded_engine();
    let turn = run(&mut engine, "fly somewhere");
    assert!(turn.text.contains("I don't know what that means"));
    assert_eq!(turn.signal, Signal::Continue);
    assert_eq!(engine.current_room().id, "entrance");
}
