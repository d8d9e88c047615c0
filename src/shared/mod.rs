//! Farm vocabulary: tools, the capped inventory, animals, players, and the
//! run-wide transcript and animal counter.
//!
//! Domain plugins only schedule systems; the behaviour they narrate lives on
//! these types so it can be tested without an `App`.

use bevy::prelude::*;
use serde::Deserialize;

// ═══════════════════════════════════════════════════════════════════════
// FARM PHASE — top-level state machine
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, States, Default)]
pub enum FarmPhase {
    #[default]
    Loading,
    Running,
    Done,
}

/// Ordered steps of the farm run. Configured as a chain in `FarmPlugin`,
/// every domain plugin places its systems into one of these.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DriverStep {
    SpawnPlayer,
    StockFarm,
    StockInventory,
    CopyPlayer,
    Welcome,
    Harvest,
    Inspect,
    Combine,
    Finish,
}

// ═══════════════════════════════════════════════════════════════════════
// TRANSCRIPT — everything the farm says, in order
// ═══════════════════════════════════════════════════════════════════════

#[derive(Resource, Debug, Clone, Default)]
pub struct Transcript {
    pub lines: Vec<String>,
    /// Index of the first line the console has not written yet.
    pub printed: usize,
}

impl Transcript {
    pub fn say(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Lines appended since the last call, advancing the print cursor.
    pub fn take_unprinted(&mut self) -> &[String] {
        let start = self.printed.min(self.lines.len());
        self.printed = self.lines.len();
        &self.lines[start..]
    }
}

// ═══════════════════════════════════════════════════════════════════════
// TOOLS & INVENTORY
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tool {
    pub name: String,
}

impl Tool {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Inventory {
    /// Insertion order, duplicates allowed. Never longer than INVENTORY_CAPACITY.
    pub items: Vec<Tool>,
}

impl Inventory {
    /// Add a single tool. Returns false (and says so) when the inventory is full.
    pub fn add_one(&mut self, tool: Tool, transcript: &mut Transcript) -> bool {
        if self.items.len() < INVENTORY_CAPACITY {
            transcript.say(format!("{} added to inventory.", tool.name));
            self.items.push(tool);
            true
        } else {
            transcript.say("Inventory full! Cannot add more tools.");
            false
        }
    }

    /// Add two tools together, or neither.
    pub fn add_two(&mut self, first: Tool, second: Tool, transcript: &mut Transcript) -> bool {
        if self.items.len() + 2 <= INVENTORY_CAPACITY {
            transcript.say(format!("Both {} and {} added to inventory.", first.name, second.name));
            self.items.push(first);
            self.items.push(second);
            true
        } else {
            transcript.say("Not enough space to add both tools.");
            false
        }
    }

    pub fn display(&self, transcript: &mut Transcript) {
        transcript.say("Inventory contains:");
        for tool in &self.items {
            transcript.say(tool.name.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Loose tools the driver made before handing copies to the inventory.
#[derive(Resource, Debug, Clone, Default)]
pub struct Workbench {
    pub tools: Vec<Tool>,
    pub combined: Option<Tool>,
}

// ═══════════════════════════════════════════════════════════════════════
// ANIMALS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum AnimalKind {
    Cow,
    Chicken,
    Sheep,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    pub name: String,
    pub age: u32,
}

impl Animal {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

/// Anything a player can keep on the farm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FarmEntity {
    Cow(Animal),
    Chicken(Animal),
    Sheep(Animal),
}

impl FarmEntity {
    pub fn new(kind: AnimalKind, name: impl Into<String>, age: u32) -> Self {
        let animal = Animal::new(name, age);
        match kind {
            AnimalKind::Cow => FarmEntity::Cow(animal),
            AnimalKind::Chicken => FarmEntity::Chicken(animal),
            AnimalKind::Sheep => FarmEntity::Sheep(animal),
        }
    }

    pub fn kind(&self) -> AnimalKind {
        match self {
            FarmEntity::Cow(_) => AnimalKind::Cow,
            FarmEntity::Chicken(_) => AnimalKind::Chicken,
            FarmEntity::Sheep(_) => AnimalKind::Sheep,
        }
    }

    /// Every current variant is an animal; the counter keys off this.
    pub fn as_animal(&self) -> Option<&Animal> {
        match self {
            FarmEntity::Cow(a) | FarmEntity::Chicken(a) | FarmEntity::Sheep(a) => Some(a),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FarmEntity::Cow(a) | FarmEntity::Chicken(a) | FarmEntity::Sheep(a) => &a.name,
        }
    }

    /// Generic line first, then exactly one species line.
    pub fn produce(&self, transcript: &mut Transcript) {
        let name = self.name();
        transcript.say(format!("{} is producing goods.", name));
        let species_line = match self {
            FarmEntity::Cow(_) => format!("{} produced milk, beef, and leather.", name),
            FarmEntity::Chicken(_) => format!("{} laid eggs.", name),
            FarmEntity::Sheep(_) => format!("{} produced mutton and wool.", name),
        };
        transcript.say(species_line);
    }

    pub fn display_info(&self, transcript: &mut Transcript) {
        if let Some(animal) = self.as_animal() {
            transcript.say(format!("{}, Age: {}", animal.name, animal.age));
        }
    }
}

/// Animals added by any player over the whole run. Only ever grows.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnimalCount(pub u32);

// ═══════════════════════════════════════════════════════════════════════
// PLAYER
// ═══════════════════════════════════════════════════════════════════════

#[derive(Component, Debug, Clone)]
pub struct Player {
    pub name: String,
    pub inventory: Inventory,
    pub entities: Vec<FarmEntity>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inventory: Inventory::default(),
            entities: Vec::new(),
        }
    }

    /// Same name, fresh empty inventory and farm. Tools and animals stay
    /// with the source player.
    pub fn copy_from(existing: &Player, transcript: &mut Transcript) -> Self {
        transcript.say(format!("Created new player by copying {}", existing.name));
        Self::new(existing.name.clone())
    }

    pub fn add_entity(
        &mut self,
        entity: FarmEntity,
        animal_count: &mut AnimalCount,
        transcript: &mut Transcript,
    ) {
        transcript.say(format!("{} has been added to the farm.", entity.name()));
        if entity.as_animal().is_some() {
            animal_count.0 += 1;
            transcript.say(format!("Total animals on the farm: {}", animal_count.0));
        }
        self.entities.push(entity);
    }

    pub fn harvest(&self, transcript: &mut Transcript) {
        transcript.say(format!("{} is harvesting...", self.name));
        for entity in &self.entities {
            entity.produce(transcript);
        }
    }
}

/// The player the scenario is about.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct PrimaryPlayer;

/// A player made with `Player::copy_from`.
#[derive(Component, Debug, Clone, Copy)]
pub struct CopiedPlayer {
    pub source: Entity,
}

// ═══════════════════════════════════════════════════════════════════════
// CONSTANTS
// ═══════════════════════════════════════════════════════════════════════

pub const INVENTORY_CAPACITY: usize = 10;

/// Upper bound on frames `main` will tick while waiting for FarmPhase::Done.
pub const MAX_FRAMES: u32 = 16;

#[cfg(test)]
mod tests {
    use super::*;

    fn full_inventory(transcript: &mut Transcript) -> Inventory {
        let mut inventory = Inventory::default();
        for i in 0..INVENTORY_CAPACITY {
            assert!(inventory.add_one(Tool::new(format!("Tool {}", i)), transcript));
        }
        inventory
    }

    #[test]
    fn test_add_one_rejects_eleventh_tool() {
        let mut transcript = Transcript::default();
        let mut inventory = full_inventory(&mut transcript);

        let accepted = inventory.add_one(Tool::new("Hoe"), &mut transcript);

        assert!(!accepted);
        assert_eq!(inventory.len(), INVENTORY_CAPACITY);
        assert_eq!(
            transcript.lines.last().map(String::as_str),
            Some("Inventory full! Cannot add more tools.")
        );
    }

    #[test]
    fn test_add_two_needs_room_for_both() {
        let mut transcript = Transcript::default();
        let mut inventory = Inventory::default();
        for i in 0..9 {
            inventory.add_one(Tool::new(format!("Tool {}", i)), &mut transcript);
        }

        let accepted = inventory.add_two(Tool::new("Hoe"), Tool::new("Axe"), &mut transcript);

        assert!(!accepted, "9 + 2 exceeds capacity, neither tool goes in");
        assert_eq!(inventory.len(), 9);
        assert_eq!(
            transcript.lines.last().map(String::as_str),
            Some("Not enough space to add both tools.")
        );
    }

    #[test]
    fn test_add_two_fills_to_capacity_in_order() {
        let mut transcript = Transcript::default();
        let mut inventory = Inventory::default();
        for i in 0..8 {
            inventory.add_one(Tool::new(format!("Tool {}", i)), &mut transcript);
        }

        assert!(inventory.add_two(Tool::new("Hoe"), Tool::new("Axe"), &mut transcript));
        assert_eq!(inventory.len(), INVENTORY_CAPACITY);
        assert_eq!(inventory.items[8].name, "Hoe");
        assert_eq!(inventory.items[9].name, "Axe");
        assert_eq!(
            transcript.lines.last().map(String::as_str),
            Some("Both Hoe and Axe added to inventory.")
        );
    }

    #[test]
    fn test_inventory_never_exceeds_capacity() {
        let mut transcript = Transcript::default();
        let mut inventory = Inventory::default();
        for i in 0..30 {
            if i % 3 == 0 {
                inventory.add_two(Tool::new("A"), Tool::new("B"), &mut transcript);
            } else {
                inventory.add_one(Tool::new("C"), &mut transcript);
            }
            assert!(inventory.len() <= INVENTORY_CAPACITY);
        }
        assert_eq!(inventory.len(), INVENTORY_CAPACITY);
    }

    #[test]
    fn test_display_lists_tools_in_insertion_order() {
        let mut transcript = Transcript::default();
        let mut inventory = Inventory::default();
        inventory.add_one(Tool::new("Shovel"), &mut transcript);
        inventory.add_one(Tool::new("Shovel"), &mut transcript);
        transcript.lines.clear();

        inventory.display(&mut transcript);

        assert_eq!(transcript.lines, vec!["Inventory contains:", "Shovel", "Shovel"]);
    }

    #[test]
    fn test_produce_emits_generic_line_then_species_line() {
        let cases = [
            (AnimalKind::Cow, "Bess produced milk, beef, and leather."),
            (AnimalKind::Chicken, "Bess laid eggs."),
            (AnimalKind::Sheep, "Bess produced mutton and wool."),
        ];
        for (kind, species_line) in cases {
            let mut transcript = Transcript::default();
            FarmEntity::new(kind, "Bess", 1).produce(&mut transcript);
            assert_eq!(
                transcript.lines,
                vec!["Bess is producing goods.".to_string(), species_line.to_string()],
                "{:?} produce output",
                kind
            );
        }
    }

    #[test]
    fn test_display_info_shows_name_and_age() {
        let mut transcript = Transcript::default();
        FarmEntity::new(AnimalKind::Sheep, "Wooly", 4).display_info(&mut transcript);
        assert_eq!(transcript.lines, vec!["Wooly, Age: 4"]);
    }

    #[test]
    fn test_animal_count_is_shared_across_players() {
        let mut transcript = Transcript::default();
        let mut count = AnimalCount::default();
        let mut john = Player::new("John");
        let mut jane = Player::new("Jane");

        john.add_entity(FarmEntity::new(AnimalKind::Cow, "Daisy", 3), &mut count, &mut transcript);
        jane.add_entity(
            FarmEntity::new(AnimalKind::Chicken, "Cluck", 2),
            &mut count,
            &mut transcript,
        );
        john.add_entity(
            FarmEntity::new(AnimalKind::Sheep, "Wooly", 4),
            &mut count,
            &mut transcript,
        );

        assert_eq!(count, AnimalCount(3));
        assert_eq!(john.entities.len(), 2);
        assert_eq!(jane.entities.len(), 1);
        assert_eq!(
            transcript.lines,
            vec![
                "Daisy has been added to the farm.",
                "Total animals on the farm: 1",
                "Cluck has been added to the farm.",
                "Total animals on the farm: 2",
                "Wooly has been added to the farm.",
                "Total animals on the farm: 3",
            ]
        );
    }

    #[test]
    fn test_copy_starts_with_empty_inventory_and_farm() {
        let mut transcript = Transcript::default();
        let mut count = AnimalCount::default();
        let mut source = Player::new("Farmer John");
        source.add_entity(
            FarmEntity::new(AnimalKind::Cow, "Daisy", 3),
            &mut count,
            &mut transcript,
        );
        source.inventory.add_one(Tool::new("Shovel"), &mut transcript);
        transcript.lines.clear();

        let first = Player::copy_from(&source, &mut transcript);
        let second = Player::copy_from(&source, &mut transcript);

        for copy in [&first, &second] {
            assert_eq!(copy.name, "Farmer John");
            assert!(copy.inventory.is_empty());
            assert!(copy.entities.is_empty());
        }
        assert_eq!(source.inventory.len(), 1);
        assert_eq!(source.entities.len(), 1);
        assert_eq!(count, AnimalCount(1), "copying never touches the counter");
        assert_eq!(
            transcript.lines,
            vec![
                "Created new player by copying Farmer John",
                "Created new player by copying Farmer John",
            ]
        );
    }

    #[test]
    fn test_harvest_visits_entities_in_insertion_order() {
        let mut transcript = Transcript::default();
        let mut count = AnimalCount::default();
        let mut player = Player::new("Ann");
        player.add_entity(
            FarmEntity::new(AnimalKind::Chicken, "Cluck", 2),
            &mut count,
            &mut transcript,
        );
        player.add_entity(
            FarmEntity::new(AnimalKind::Cow, "Daisy", 3),
            &mut count,
            &mut transcript,
        );
        transcript.lines.clear();

        player.harvest(&mut transcript);

        assert_eq!(
            transcript.lines,
            vec![
                "Ann is harvesting...",
                "Cluck is producing goods.",
                "Cluck laid eggs.",
                "Daisy is producing goods.",
                "Daisy produced milk, beef, and leather.",
            ]
        );
    }

    #[test]
    fn test_take_unprinted_advances_cursor() {
        let mut transcript = Transcript::default();
        transcript.say("one");
        transcript.say("two");
        assert_eq!(transcript.take_unprinted(), ["one", "two"]);
        assert!(transcript.take_unprinted().is_empty());
        transcript.say("three");
        assert_eq!(transcript.take_unprinted(), ["three"]);
        assert_eq!(transcript.lines.len(), 3);
    }
}
