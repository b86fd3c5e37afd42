use std::collections::HashMap;

use common::{CorrelatedRecord, PlayerId, PlayerIdentity, Position, Team};

use crate::sink::RecordSink;

#[derive(Debug, Clone)]
struct ShotCounter {
    identity: PlayerIdentity,
    shots_fired: u32,
    shots_hit: u32,
}

/// Accumulates shots fired and shots hit per player for the current round.
///
/// Hits count once per damage event, so multi-pellet weapons increment the
/// counter once per pellet that connects. Events without a resolvable actor
/// are dropped entirely, matching the source behavior.
#[derive(Debug, Default)]
pub struct AccuracyTracker {
    counters: HashMap<PlayerId, ShotCounter>,
}

impl AccuracyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    fn counter(&mut self, identity: &PlayerIdentity) -> &mut ShotCounter {
        self.counters
            .entry(identity.id)
            .or_insert_with(|| ShotCounter {
                identity: identity.clone(),
                shots_fired: 0,
                shots_hit: 0,
            })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn on_weapon_fire(
        &mut self,
        player: Option<&PlayerIdentity>,
        team: Team,
        weapon: &str,
        position: Option<Position>,
        place: &str,
        timestamp: f32,
        sink: &mut RecordSink,
    ) {
        let player = match player {
            Some(p) => p,
            None => return,
        };

        self.counter(player).shots_fired += 1;

        sink.push(CorrelatedRecord::WeaponFire {
            player: player.clone(),
            team,
            weapon: weapon.to_owned(),
            position,
            place: place.to_owned(),
            timestamp,
        });
    }

    #[allow(clippy::too_many_arguments)]
    pub fn on_player_hurt(
        &mut self,
        attacker: Option<&PlayerIdentity>,
        victim: Option<&PlayerIdentity>,
        attacker_team: Team,
        victim_team: Team,
        weapon: &str,
        damage: i32,
        armor_damage: i32,
        attacker_position: Option<Position>,
        victim_position: Option<Position>,
        place: &str,
        timestamp: f32,
        sink: &mut RecordSink,
    ) {
        let attacker = match attacker {
            Some(a) => a,
            None => return,
        };

        self.counter(attacker).shots_hit += 1;

        sink.push(CorrelatedRecord::Damage {
            attacker: attacker.clone(),
            victim: victim.cloned(),
            attacker_team,
            victim_team,
            weapon: weapon.to_owned(),
            damage,
            armor_damage,
            attacker_position,
            victim_position,
            place: place.to_owned(),
            timestamp,
        });
    }

    pub fn on_round_end(&mut self, timestamp: f32, sink: &mut RecordSink) {
        let mut counters: Vec<_> = self.counters.drain().map(|(_, c)| c).collect();
        counters.sort_unstable_by_key(|c| c.identity.id);

        for counter in counters {
            let accuracy = if counter.shots_fired > 0 {
                counter.shots_hit as f64 / counter.shots_fired as f64 * 100.0
            } else {
                0.0
            };

            tracing::debug!(player = %counter.identity.name, accuracy, "Round accuracy");

            sink.push(CorrelatedRecord::Accuracy {
                player: counter.identity,
                shots_fired: counter.shots_fired,
                shots_hit: counter.shots_hit,
                accuracy,
                timestamp,
            });
        }
    }
}
