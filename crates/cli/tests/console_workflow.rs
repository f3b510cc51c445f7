//! End-to-end console sessions driven by scripted input.

use std::io::Cursor;

use catering_cli::workflow::{self, SessionOptions, SessionSummary};
use catering_cli::ConsoleCollector;
use catering_infra::{InMemoryStateStore, JsonFileStateStore, StateStore};
use catering_registry::{CateringRegistry, ReassignPolicy};

struct Session {
    registry: CateringRegistry,
    summary: SessionSummary,
    prompts: String,
    messages: String,
}

fn run_script(registry: CateringRegistry, script: &str, options: SessionOptions) -> Session {
    let mut registry = registry;
    let mut collector = ConsoleCollector::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    let mut out = Vec::new();

    let summary = workflow::run_session(&mut registry, &mut collector, &mut out, options).unwrap();

    Session {
        registry,
        summary,
        prompts: String::from_utf8(collector.into_inner().1).unwrap(),
        messages: String::from_utf8(out).unwrap(),
    }
}

/// Menus: Vegetarian (1 serving, Salad), Vegan (2 servings, Tofu).
/// Guests: Alice, Bob. Both ask for Vegetarian.
const FIRST_NIGHT: &str = "2\nVegetarian\n1\n1\nSalad\nVegan\n2\n1\nTofu\n\
                           2\nAlice\nBob\n\
                           Vegetarian\nVegetarian\n";

#[test]
fn second_guest_cannot_take_a_sold_out_menu() {
    let session = run_script(CateringRegistry::new(), FIRST_NIGHT, SessionOptions::default());

    assert_eq!(
        session.summary,
        SessionSummary {
            menus_added: 2,
            guests_added: 2,
            assigned: 1,
            reassigned: 0,
            kept: 0,
            failed: 1,
        }
    );
    assert_eq!(session.registry.menu("Vegetarian").unwrap().remaining(), 0);
    assert!(!session.registry.guest("Bob").unwrap().is_assigned());

    assert!(session.prompts.contains("Assigning a menu for guest: Alice"));
    assert!(session.prompts.contains("Assigning a menu for guest: Bob"));
    assert!(session.messages.contains("Menu assigned to Alice."));
    assert!(session
        .messages
        .contains("could not assign menu 'Vegetarian' to guest 'Bob': no servings left"));
    assert!(session.messages.contains(
        "== Assignments ==\nGuest: Alice\n  Menu: Vegetarian\n    - Salad\nGuest: Bob\n  No menu assigned.\n"
    ));
    assert!(session
        .messages
        .ends_with("== Remaining availability ==\nVegetarian: 0\nVegan: 2\n"));
}

#[test]
fn reassignment_round_moves_guests_between_menus() {
    let script = format!("{FIRST_NIGHT}Alice\nVegan\nBob\nVegan\n\n");
    let session = run_script(
        CateringRegistry::new(),
        &script,
        SessionOptions {
            reassign_prompt: true,
        },
    );

    // Alice moves and frees Vegetarian; Bob was never assigned so he cannot move.
    assert_eq!(session.summary.reassigned, 1);
    assert_eq!(session.summary.failed, 2);
    assert_eq!(session.registry.menu("Vegetarian").unwrap().remaining(), 1);
    assert_eq!(session.registry.menu("Vegan").unwrap().remaining(), 1);
    assert_eq!(
        session
            .registry
            .guest("Alice")
            .unwrap()
            .assigned_menu()
            .map(|m| m.as_str()),
        Some("Vegan")
    );
    assert!(session.messages.contains("Menu updated for Alice."));
    assert!(session.messages.contains("guest has no menu assigned"));
}

#[test]
fn state_carries_over_between_runs() {
    let store = InMemoryStateStore::new();

    let first = run_script(
        workflow::load_registry(&store, ReassignPolicy::Atomic),
        FIRST_NIGHT,
        SessionOptions::default(),
    );
    let mut out = Vec::new();
    assert!(workflow::save_registry(&store, &first.registry, &mut out).unwrap());

    // Second run adds nothing new; every known guest is asked again.
    let second = run_script(
        workflow::load_registry(&store, ReassignPolicy::Atomic),
        "0\n0\nVegan\nVegan\n",
        SessionOptions::default(),
    );

    assert_eq!(second.summary.assigned, 2);
    assert_eq!(second.registry.menu("Vegetarian").unwrap().remaining(), 1);
    assert_eq!(second.registry.menu("Vegan").unwrap().remaining(), 0);
    assert_eq!(second.registry.assigned_count("Vegan"), 2);
}

#[test]
fn re_picking_a_sold_out_menu_already_held_keeps_it() {
    let store = InMemoryStateStore::new();
    let first = run_script(CateringRegistry::new(), FIRST_NIGHT, SessionOptions::default());
    let mut out = Vec::new();
    assert!(workflow::save_registry(&store, &first.registry, &mut out).unwrap());

    // Alice holds the last Vegetarian serving and asks for it again.
    let second = run_script(
        workflow::load_registry(&store, ReassignPolicy::Atomic),
        "0\n0\nVegetarian\nVegan\n",
        SessionOptions::default(),
    );

    assert_eq!(second.summary.kept, 1);
    assert_eq!(second.summary.assigned, 1);
    assert_eq!(second.summary.failed, 0);
    assert!(second.messages.contains("Alice keeps menu 'Vegetarian'."));
    assert_eq!(second.registry.menu("Vegetarian").unwrap().remaining(), 0);
    assert_eq!(second.registry.assigned_count("Vegetarian"), 1);
    assert_eq!(second.registry.menu("Vegan").unwrap().remaining(), 1);
}

#[test]
fn missing_state_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStateStore::new(dir.path().join("does-not-exist.json"));

    let registry = workflow::load_registry(&store, ReassignPolicy::ReleaseFirst);

    assert!(registry.is_empty());
    assert_eq!(registry.menu_count(), 0);
    assert_eq!(registry.guest_count(), 0);
    assert_eq!(registry.policy(), ReassignPolicy::ReleaseFirst);
}

#[test]
fn corrupt_state_starts_empty() {
    let store = InMemoryStateStore::with_raw("{\"menus\": 42}");

    let registry = workflow::load_registry(&store, ReassignPolicy::Atomic);

    assert!(registry.is_empty());
}

#[test]
fn file_round_trip_reproduces_the_registry() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStateStore::new(dir.path().join("cateringData.json"));

    let session = run_script(CateringRegistry::new(), FIRST_NIGHT, SessionOptions::default());
    let mut out = Vec::new();
    assert!(workflow::save_registry(&store, &session.registry, &mut out).unwrap());
    assert_eq!(String::from_utf8(out).unwrap(), "Data saved.\n");

    let reloaded = workflow::load_registry(&store, ReassignPolicy::Atomic);
    assert_eq!(reloaded, session.registry);
    assert!(store.load().unwrap().is_some());
}

#[test]
fn failed_save_is_reported_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    // The target is an existing directory, so the final rename cannot succeed.
    let store = JsonFileStateStore::new(dir.path());

    let mut out = Vec::new();
    let saved = workflow::save_registry(&store, &CateringRegistry::new(), &mut out).unwrap();

    assert!(!saved);
    assert!(String::from_utf8(out).unwrap().starts_with("Could not save data:"));
}

#[test]
fn truncated_script_aborts_the_session() {
    let mut registry = CateringRegistry::new();
    let mut collector = ConsoleCollector::new(Cursor::new(b"1\nVegan\n".to_vec()), Vec::new());
    let mut out = Vec::new();

    let err = workflow::run_session(
        &mut registry,
        &mut collector,
        &mut out,
        SessionOptions::default(),
    )
    .unwrap_err();

    assert!(format!("{err:#}").contains("input ended while waiting for"));
    assert!(registry.is_empty());
}
