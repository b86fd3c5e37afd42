use std::collections::HashMap;

use common::{CorrelatedRecord, GrenadeKind, PlayerId, PlayerIdentity, Position, Team};

use crate::sink::RecordSink;

#[derive(Debug, Clone)]
struct PendingBlind {
    victim_team: Team,
}

/// Attributes blind events to the flashbang that caused them.
///
/// Blind events accumulate per attacker and are drained in one go when that
/// attacker's flashbang detonates, so entries from a previous flashbang can
/// never leak into the next count.
#[derive(Debug, Default)]
pub struct GrenadeTracker {
    pending_blinds: HashMap<PlayerId, Vec<PendingBlind>>,
}

impl GrenadeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(clippy::too_many_arguments)]
    pub fn on_player_blind(
        &mut self,
        attacker: Option<&PlayerIdentity>,
        victim: Option<&PlayerIdentity>,
        attacker_team: Team,
        victim_team: Team,
        duration: f32,
        timestamp: f32,
        sink: &mut RecordSink,
    ) {
        if let Some(attacker) = attacker {
            self.pending_blinds
                .entry(attacker.id)
                .or_default()
                .push(PendingBlind { victim_team });
        }

        sink.push(CorrelatedRecord::Blind {
            attacker: attacker.cloned(),
            victim: victim.cloned(),
            attacker_team,
            victim_team,
            duration,
            timestamp,
        });
    }

    #[allow(clippy::too_many_arguments)]
    pub fn on_grenade_detonate(
        &mut self,
        kind: GrenadeKind,
        thrower: Option<&PlayerIdentity>,
        thrower_team: Team,
        position: Position,
        place: &str,
        timestamp: f32,
        sink: &mut RecordSink,
    ) {
        let blinded_enemies = match kind {
            GrenadeKind::Flashbang => {
                let pending = thrower
                    .and_then(|t| self.pending_blinds.remove(&t.id))
                    .unwrap_or_default();

                let count = pending
                    .iter()
                    .filter(|blind| blind.victim_team != thrower_team)
                    .count() as u32;

                tracing::debug!(
                    thrower = thrower.map(|t| t.name.as_str()),
                    count,
                    "Flashbang detonated"
                );

                Some(count)
            }
            _ => None,
        };

        sink.push(CorrelatedRecord::Grenade {
            kind,
            thrower: thrower.cloned(),
            thrower_team,
            position,
            place: place.to_owned(),
            blinded_enemies,
            timestamp,
        });
    }
}
