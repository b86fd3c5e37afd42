/// Stable numeric player handle, unique for the whole match.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct PlayerId(pub u64);

/// Handle of a physical in-world entity (e.g. a dropped weapon). Only unique
/// while the entity exists, the source may reuse it afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct EntityId(pub u32);

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlayerIdentity {
    pub id: PlayerId,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Team {
    Terrorist,
    CounterTerrorist,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GrenadeKind {
    Flashbang,
    Smoke,
    HighExplosive,
    Molotov,
    Incendiary,
    Unknown,
}

/// One entry of the "current roster" accessor. Equipment values are whatever
/// the source reports at the moment the roster is queried.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RosterEntry {
    pub identity: PlayerIdentity,
    pub round_start_equipment: u16,
    pub freeze_end_equipment: u16,
    pub current_equipment: u16,
}

/// The currently-connected players, queried at event-handling time.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Roster {
    pub players: Vec<RosterEntry>,
}

impl Roster {
    pub fn new(players: Vec<RosterEntry>) -> Self {
        Self { players }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, id: PlayerId) -> Option<&RosterEntry> {
        self.players.iter().find(|p| p.identity.id == id)
    }
}

/// A single pre-decoded telemetry event. Actor identities are optional
/// wherever the source can fail the player lookup; the trackers then skip
/// the event instead of emitting a partial record.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum RawEvent {
    RoundStart {
        time_limit: Option<i32>,
        frag_limit: Option<i32>,
        objective: Option<String>,
        timestamp: f32,
    },
    RoundFreezeEnd {
        timestamp: f32,
    },
    RoundEnd {
        winner: Team,
        reason: i32,
        message: Option<String>,
        timestamp: f32,
    },
    WeaponFire {
        player: Option<PlayerIdentity>,
        team: Team,
        weapon: String,
        position: Option<Position>,
        place: String,
        timestamp: f32,
    },
    Damage {
        attacker: Option<PlayerIdentity>,
        victim: Option<PlayerIdentity>,
        attacker_team: Team,
        victim_team: Team,
        weapon: String,
        damage: i32,
        armor_damage: i32,
        attacker_position: Option<Position>,
        victim_position: Option<Position>,
        place: String,
        timestamp: f32,
    },
    Death {
        attacker: Option<PlayerIdentity>,
        victim: Option<PlayerIdentity>,
        attacker_team: Team,
        victim_team: Team,
        weapon: String,
        headshot: bool,
        penetrated: bool,
        attacker_blind: bool,
        through_smoke: bool,
        attacker_position: Option<Position>,
        victim_position: Option<Position>,
        place: String,
        timestamp: f32,
    },
    Blind {
        attacker: Option<PlayerIdentity>,
        victim: Option<PlayerIdentity>,
        attacker_team: Team,
        victim_team: Team,
        duration: f32,
        timestamp: f32,
    },
    GrenadeDetonate {
        kind: GrenadeKind,
        thrower: Option<PlayerIdentity>,
        thrower_team: Team,
        position: Position,
        place: String,
        timestamp: f32,
    },
    /// Plain item-pickup game event (initial equip, buy, floor grab). The
    /// drop/pickup correlation runs off `OwnershipChanged` instead.
    ItemPickup {
        player: Option<PlayerIdentity>,
        item: String,
        position: Option<Position>,
        place: String,
        timestamp: f32,
    },
    /// Owner transition of a weapon entity. `old_owner`/`new_owner` are the
    /// players holding the entity before/after, `None` for the world.
    OwnershipChanged {
        entity: EntityId,
        old_owner: Option<PlayerIdentity>,
        new_owner: Option<PlayerIdentity>,
        weapon: String,
        position: Position,
        place: String,
        timestamp: f32,
    },
    BuyzoneExit {
        player: Option<PlayerIdentity>,
        team: Team,
        position: Position,
        health: i32,
        armor: i32,
        weapon: Option<String>,
        timestamp: f32,
    },
    PlaceChanged {
        player: Option<PlayerIdentity>,
        team: Team,
        old_place: String,
        new_place: String,
        position: Position,
        health: i32,
        armor: i32,
        weapon: Option<String>,
        timestamp: f32,
    },
    BombzoneEnter {
        player: Option<PlayerIdentity>,
        position: Option<Position>,
        place: String,
        timestamp: f32,
    },
    BombzoneExit {
        player: Option<PlayerIdentity>,
        position: Option<Position>,
        place: String,
        timestamp: f32,
    },
}
