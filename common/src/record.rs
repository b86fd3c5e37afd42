use crate::event::{GrenadeKind, PlayerIdentity, Position, Team};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum WinReason {
    StillInProgress,
    BombExploded,
    VipEscaped,
    VipKilled,
    TSaved,
    CtStoppedEscape,
    TerroristsStopped,
    BombDefused,
    TKilled,
    CTKilled,
    Draw,
    HostageRescued,
    TimeRanOut,
    HostagesNotRescued,
    TerroristsNotEscaped,
    VipNotEscaped,
    GameStart,
    TSurrender,
    CTSurrender,
    TPlanted,
    CTReachedHostage,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BoundaryPhase {
    Start,
    End,
}

/// One derived analytics record. Emitted into the append-only sink in the
/// chronological order of the raw events that produced it.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum CorrelatedRecord {
    ItemDropped {
        player: PlayerIdentity,
        item: String,
        position: Position,
        place: String,
        timestamp: f32,
    },
    ItemPickedUp {
        player: PlayerIdentity,
        item: String,
        position: Position,
        place: String,
        dropped_by: PlayerIdentity,
        dropped_position: Position,
        dropped_place: String,
        timestamp: f32,
    },
    ItemPickup {
        player: PlayerIdentity,
        item: String,
        position: Option<Position>,
        place: String,
        timestamp: f32,
    },
    Grenade {
        kind: GrenadeKind,
        thrower: Option<PlayerIdentity>,
        thrower_team: Team,
        position: Position,
        place: String,
        /// Cross-team blind count, only attributed for flashbangs.
        blinded_enemies: Option<u32>,
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
    Kill {
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
    Damage {
        attacker: PlayerIdentity,
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
    WeaponFire {
        player: PlayerIdentity,
        team: Team,
        weapon: String,
        position: Option<Position>,
        place: String,
        timestamp: f32,
    },
    PlayerEconomy {
        player: PlayerIdentity,
        round_start_value: u16,
        freeze_end_value: u16,
        round_end_value: u16,
        timestamp: f32,
    },
    Movement {
        player: PlayerIdentity,
        team: Team,
        old_place: String,
        new_place: String,
        position: Position,
        health: i32,
        armor: i32,
        weapon: Option<String>,
        timestamp: f32,
    },
    BuyzoneExit {
        player: PlayerIdentity,
        team: Team,
        position: Position,
        health: i32,
        armor: i32,
        weapon: Option<String>,
        timestamp: f32,
    },
    Bombzone {
        player: PlayerIdentity,
        entered: bool,
        position: Option<Position>,
        place: String,
        timestamp: f32,
    },
    RoundBoundary {
        phase: BoundaryPhase,
        time_limit: Option<i32>,
        frag_limit: Option<i32>,
        objective: Option<String>,
        winner: Option<Team>,
        reason: Option<WinReason>,
        message: Option<String>,
        timestamp: f32,
    },
    Accuracy {
        player: PlayerIdentity,
        shots_fired: u32,
        shots_hit: u32,
        accuracy: f64,
        timestamp: f32,
    },
}
