use std::collections::HashMap;

use common::{CorrelatedRecord, PlayerId, PlayerIdentity, Roster};

use crate::sink::RecordSink;

#[derive(Debug, Clone)]
struct EconomySnapshot {
    identity: PlayerIdentity,
    round_start_value: u16,
    freeze_end_value: u16,
    round_end_value: u16,
}

/// Snapshots each player's equipment value at round start, freeze end and
/// round end, emitting one consolidated record per player per round.
#[derive(Debug, Default)]
pub struct EconomyTracker {
    snapshots: HashMap<PlayerId, EconomySnapshot>,
}

impl EconomyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_round_start(&mut self, roster: &Roster) {
        self.snapshots.clear();

        for entry in roster.players.iter() {
            // Zero ids are invalid slots, not connected players.
            if entry.identity.id == PlayerId(0) {
                continue;
            }

            self.snapshots.insert(
                entry.identity.id,
                EconomySnapshot {
                    identity: entry.identity.clone(),
                    round_start_value: entry.round_start_equipment,
                    freeze_end_value: 0,
                    round_end_value: 0,
                },
            );
        }

        tracing::debug!(players = self.snapshots.len(), "Economy snapshots seeded");
    }

    pub fn on_round_freeze_end(&mut self, roster: &Roster) {
        // Players joining after round start have no snapshot and are skipped.
        for entry in roster.players.iter() {
            if let Some(snapshot) = self.snapshots.get_mut(&entry.identity.id) {
                snapshot.freeze_end_value = entry.freeze_end_equipment;
            }
        }
    }

    pub fn on_round_end(&mut self, roster: &Roster, timestamp: f32, sink: &mut RecordSink) {
        let mut snapshots: Vec<_> = self.snapshots.drain().map(|(_, s)| s).collect();
        snapshots.sort_unstable_by_key(|s| s.identity.id);

        for mut snapshot in snapshots {
            snapshot.round_end_value = roster
                .get(snapshot.identity.id)
                .map(|entry| entry.current_equipment)
                .unwrap_or(0);

            sink.push(CorrelatedRecord::PlayerEconomy {
                player: snapshot.identity,
                round_start_value: snapshot.round_start_value,
                freeze_end_value: snapshot.freeze_end_value,
                round_end_value: snapshot.round_end_value,
                timestamp,
            });
        }
    }
}
