//! End-to-end exploration: keys in, scene transitions out.

use bluemon_content::loaders::MapLoader;
use bluemon_core::{
    BaseStats, EncounterGenerator, EncounterRng, Party, Pet, Position, Species, StatIncrements,
    TablesOracle,
};
use bluemon_runtime::{ExplorationSession, InputKey, SceneSink};

fn starter(name: &str) -> Pet {
    Pet::new(
        name,
        Species::Dog,
        BaseStats::new(20.0, 5.0, 2.0),
        StatIncrements::default(),
    )
}

/// Records every sink call in order.
#[derive(Default)]
struct RecordingSink {
    combats: Vec<usize>,
    dialogues: Vec<(String, String)>,
    menus: Vec<String>,
    inventory_toggles: usize,
}

impl SceneSink for RecordingSink {
    fn switch_to_combat(&mut self, roster: Vec<Pet>) {
        self.combats.push(roster.len());
    }

    fn run_dialogue(&mut self, name: &str, dialogue: &str) {
        self.dialogues.push((name.to_string(), dialogue.to_string()));
    }

    fn switch_to_menu(&mut self, title: &str) {
        self.menus.push(title.to_string());
    }

    fn toggle_inventory(&mut self) {
        self.inventory_toggles += 1;
    }
}

struct FixedTables;

impl TablesOracle for FixedTables {
    fn starter_stats(&self) -> BaseStats {
        BaseStats::new(20.0, 5.0, 2.0)
    }

    fn starter_increments(&self) -> StatIncrements {
        StatIncrements::default()
    }

    fn names(&self, _species: Species) -> &[String] {
        &[]
    }
}

/// Replays scripted draws; unit draws default to 1.0 (never trigger)
/// once the script runs out.
struct ScriptRng {
    units: Vec<f32>,
    ranges: Vec<i32>,
}

impl EncounterRng for ScriptRng {
    fn roll_unit(&mut self) -> f32 {
        if self.units.is_empty() {
            1.0
        } else {
            self.units.remove(0)
        }
    }

    fn roll_range(&mut self, min: i32, max: i32) -> i32 {
        if self.ranges.is_empty() {
            min
        } else {
            self.ranges.remove(0).clamp(min, max)
        }
    }
}

fn session_on(text: &str, party: Party, chance: f32, rng: ScriptRng) -> ExplorationSession {
    let map = MapLoader::parse(text, party).unwrap();
    ExplorationSession::new(
        map,
        EncounterGenerator::new(chance),
        Box::new(FixedTables),
        Box::new(rng),
    )
}

const CORRIDOR: &str = r######"(
    rows: ["#####", "# *n#", "#####"],
    spawn: (x: 1, y: 1),
    npcs: [(name: "Sage", position: (x: 3, y: 1), dialogue: "Mind the grass.")],
)"######;

#[test]
fn walls_swallow_movement_without_scene_changes() {
    let mut session = session_on(
        CORRIDOR,
        Party::of([starter("Bella")]),
        0.0,
        ScriptRng { units: vec![], ranges: vec![] },
    );
    let mut sink = RecordingSink::default();

    session.key_pressed(InputKey::Up, &mut sink).unwrap();
    session.key_pressed(InputKey::Left, &mut sink).unwrap();

    assert_eq!(session.map().player().position(), Position::new(1, 1));
    assert!(sink.combats.is_empty());
    assert!(sink.dialogues.is_empty());
}

#[test]
fn bumping_an_npc_runs_its_dialogue_in_place() {
    let mut session = session_on(
        CORRIDOR,
        Party::of([starter("Bella")]),
        0.0,
        ScriptRng { units: vec![], ranges: vec![] },
    );
    let mut sink = RecordingSink::default();

    // One step east onto grass, then east again into the NPC.
    session.key_pressed(InputKey::Right, &mut sink).unwrap();
    session.key_pressed(InputKey::Right, &mut sink).unwrap();

    assert_eq!(session.map().player().position(), Position::new(2, 1));
    assert_eq!(
        sink.dialogues,
        vec![("Sage".to_string(), "Mind the grass.".to_string())]
    );
}

#[test]
fn grass_step_can_fire_an_encounter_sized_to_the_party() {
    let party = Party::of([starter("Bella"), starter("Max")]);
    let mut session = session_on(
        CORRIDOR,
        party,
        0.05,
        ScriptRng {
            units: vec![0.04], // at or below the trigger chance
            ranges: vec![0, 0, 0, 0],
        },
    );
    let mut sink = RecordingSink::default();

    session.key_pressed(InputKey::Right, &mut sink).unwrap();

    assert_eq!(sink.combats, vec![2]);
}

#[test]
fn grass_step_above_the_trigger_roll_stays_quiet() {
    let mut session = session_on(
        CORRIDOR,
        Party::of([starter("Bella")]),
        0.05,
        ScriptRng { units: vec![0.9], ranges: vec![] },
    );
    let mut sink = RecordingSink::default();

    session.key_pressed(InputKey::Right, &mut sink).unwrap();

    assert!(sink.combats.is_empty());
    assert_eq!(session.map().player().position(), Position::new(2, 1));
}

#[test]
fn menu_and_inventory_keys_reach_the_sink() {
    let mut session = session_on(
        CORRIDOR,
        Party::new(),
        0.0,
        ScriptRng { units: vec![], ranges: vec![] },
    );
    let mut sink = RecordingSink::default();

    session.key_pressed(InputKey::Menu, &mut sink).unwrap();
    session.key_pressed(InputKey::Inventory, &mut sink).unwrap();
    session.key_pressed(InputKey::Inventory, &mut sink).unwrap();

    assert_eq!(sink.menus, vec!["Main Menu".to_string()]);
    assert_eq!(sink.inventory_toggles, 2);
}

#[test]
fn bootstrap_builds_a_playable_session() {
    let session = ExplorationSession::bootstrap(Party::of([starter("Bella")])).unwrap();
    assert!(session.map().width() > 0);
    assert_eq!(session.map().player().party().occupied(), 1);
}
