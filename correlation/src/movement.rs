use std::collections::HashSet;

use common::{BoundaryPhase, CorrelatedRecord, PlayerId, PlayerIdentity, Position, Team, WinReason};

use crate::sink::RecordSink;

// https://github.com/markus-wa/demoinfocs-golang/blob/205b0bb25e9f3e96e1d306d154199b4a6292940e/pkg/demoinfocs/events/events.go#L53
pub static ROUND_WIN_REASON: phf::Map<i32, WinReason> = phf::phf_map! {
    0_i32 => WinReason::StillInProgress,
    1_i32 => WinReason::BombExploded,
    2_i32 => WinReason::VipEscaped,
    3_i32 => WinReason::VipKilled,
    4_i32 => WinReason::TSaved,
    5_i32 => WinReason::CtStoppedEscape,
    6_i32 => WinReason::TerroristsStopped,
    7_i32 => WinReason::BombDefused,
    8_i32 => WinReason::TKilled,
    9_i32 => WinReason::CTKilled,
    10_i32 => WinReason::Draw,
    11_i32 => WinReason::HostageRescued,
    12_i32 => WinReason::TimeRanOut,
    13_i32 => WinReason::HostagesNotRescued,
    14_i32 => WinReason::TerroristsNotEscaped,
    15_i32 => WinReason::VipNotEscaped,
    16_i32 => WinReason::GameStart,
    17_i32 => WinReason::TSurrender,
    18_i32 => WinReason::CTSurrender,
    19_i32 => WinReason::TPlanted,
    20_i32 => WinReason::CTReachedHostage,
};

/// Turns place transitions, buyzone exits and bombsite-zone signals into
/// discrete records, plus one round-boundary marker per round start/end.
///
/// Buyzone exits are deduplicated per player per round and only recorded
/// while a round is live.
#[derive(Debug, Default)]
pub struct MovementTracker {
    round_live: bool,
    exited_buyzone: HashSet<PlayerId>,
}

impl MovementTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(clippy::too_many_arguments)]
    pub fn on_place_changed(
        &mut self,
        player: Option<&PlayerIdentity>,
        team: Team,
        old_place: &str,
        new_place: &str,
        position: Position,
        health: i32,
        armor: i32,
        weapon: Option<&str>,
        timestamp: f32,
        sink: &mut RecordSink,
    ) {
        let player = match player {
            Some(p) if !new_place.is_empty() => p,
            _ => return,
        };

        tracing::trace!(player = %player.name, old_place, new_place, "Place changed");

        sink.push(CorrelatedRecord::Movement {
            player: player.clone(),
            team,
            old_place: old_place.to_owned(),
            new_place: new_place.to_owned(),
            position,
            health,
            armor,
            weapon: weapon.map(|w| w.to_owned()),
            timestamp,
        });
    }

    #[allow(clippy::too_many_arguments)]
    pub fn on_buyzone_exit(
        &mut self,
        player: Option<&PlayerIdentity>,
        team: Team,
        position: Position,
        health: i32,
        armor: i32,
        weapon: Option<&str>,
        timestamp: f32,
        sink: &mut RecordSink,
    ) {
        let player = match player {
            Some(p) => p,
            None => return,
        };

        if !self.round_live || !self.exited_buyzone.insert(player.id) {
            return;
        }

        sink.push(CorrelatedRecord::BuyzoneExit {
            player: player.clone(),
            team,
            position,
            health,
            armor,
            weapon: weapon.map(|w| w.to_owned()),
            timestamp,
        });
    }

    pub fn on_bombzone(
        &mut self,
        player: Option<&PlayerIdentity>,
        entered: bool,
        position: Option<Position>,
        place: &str,
        timestamp: f32,
        sink: &mut RecordSink,
    ) {
        let player = match player {
            Some(p) => p,
            None => return,
        };

        sink.push(CorrelatedRecord::Bombzone {
            player: player.clone(),
            entered,
            position,
            place: place.to_owned(),
            timestamp,
        });
    }

    pub fn on_round_start(
        &mut self,
        time_limit: Option<i32>,
        frag_limit: Option<i32>,
        objective: Option<&str>,
        timestamp: f32,
        sink: &mut RecordSink,
    ) {
        self.round_live = true;
        self.exited_buyzone.clear();

        sink.push(CorrelatedRecord::RoundBoundary {
            phase: BoundaryPhase::Start,
            time_limit,
            frag_limit,
            objective: objective.map(|o| o.to_owned()),
            winner: None,
            reason: None,
            message: None,
            timestamp,
        });
    }

    pub fn on_round_end(
        &mut self,
        winner: Team,
        reason: i32,
        message: Option<&str>,
        timestamp: f32,
        sink: &mut RecordSink,
    ) {
        self.round_live = false;

        let reason = ROUND_WIN_REASON
            .get(&reason)
            .cloned()
            .unwrap_or(WinReason::Unknown);

        sink.push(CorrelatedRecord::RoundBoundary {
            phase: BoundaryPhase::End,
            time_limit: None,
            frag_limit: None,
            objective: None,
            winner: Some(winner),
            reason: Some(reason),
            message: message.map(|m| m.to_owned()),
            timestamp,
        });
    }
}
