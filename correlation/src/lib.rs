//! Correlates a chronological stream of match-telemetry events into derived
//! analytics records: drop/pickup pairs, flashbang blind attribution,
//! per-round economy snapshots, movement/zone transitions and per-round
//! weapon accuracy.
//!
//! The whole engine is a synchronous fold: one [`Correlator`] per match,
//! fed one [`RawEvent`] at a time together with the source's current roster.

use common::{RawEvent, Roster};

pub mod accuracy;
pub mod economy;
pub mod grenades;
pub mod items;
pub mod movement;
pub mod players;
pub mod sink;

pub use movement::ROUND_WIN_REASON;
pub use sink::RecordSink;

/// Owns the per-match tracker state and the append-only record sink.
///
/// Trackers are independent and share no state; each event is dispatched to
/// the trackers that care about it, in a fixed order, so the emitted records
/// preserve the chronological order of the raw stream.
#[derive(Debug, Default)]
pub struct Correlator {
    items: items::ItemTracker,
    grenades: grenades::GrenadeTracker,
    economy: economy::EconomyTracker,
    movement: movement::MovementTracker,
    accuracy: accuracy::AccuracyTracker,
    players: players::PlayerTracker,
    sink: RecordSink,
}

impl Correlator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one event. `roster` is the source's current roster, queried at
    /// event-handling time and never cached here.
    pub fn process(&mut self, event: &RawEvent, roster: &Roster) {
        match event {
            RawEvent::RoundStart {
                time_limit,
                frag_limit,
                objective,
                timestamp,
            } => {
                self.movement.on_round_start(
                    *time_limit,
                    *frag_limit,
                    objective.as_deref(),
                    *timestamp,
                    &mut self.sink,
                );
                self.economy.on_round_start(roster);
            }
            RawEvent::RoundFreezeEnd { .. } => {
                self.economy.on_round_freeze_end(roster);
            }
            RawEvent::RoundEnd {
                winner,
                reason,
                message,
                timestamp,
            } => {
                // Round-scoped state flushes before the end marker closes the
                // round in the sink.
                self.economy.on_round_end(roster, *timestamp, &mut self.sink);
                self.accuracy.on_round_end(*timestamp, &mut self.sink);
                self.movement.on_round_end(
                    *winner,
                    *reason,
                    message.as_deref(),
                    *timestamp,
                    &mut self.sink,
                );
            }
            RawEvent::WeaponFire {
                player,
                team,
                weapon,
                position,
                place,
                timestamp,
            } => {
                self.accuracy.on_weapon_fire(
                    player.as_ref(),
                    *team,
                    weapon,
                    *position,
                    place,
                    *timestamp,
                    &mut self.sink,
                );
            }
            RawEvent::Damage {
                attacker,
                victim,
                attacker_team,
                victim_team,
                weapon,
                damage,
                armor_damage,
                attacker_position,
                victim_position,
                place,
                timestamp,
            } => {
                self.accuracy.on_player_hurt(
                    attacker.as_ref(),
                    victim.as_ref(),
                    *attacker_team,
                    *victim_team,
                    weapon,
                    *damage,
                    *armor_damage,
                    *attacker_position,
                    *victim_position,
                    place,
                    *timestamp,
                    &mut self.sink,
                );
            }
            RawEvent::Death {
                attacker,
                victim,
                attacker_team,
                victim_team,
                weapon,
                headshot,
                penetrated,
                attacker_blind,
                through_smoke,
                attacker_position,
                victim_position,
                place,
                timestamp,
            } => {
                self.players.on_player_death(
                    attacker.as_ref(),
                    victim.as_ref(),
                    *attacker_team,
                    *victim_team,
                    weapon,
                    *headshot,
                    *penetrated,
                    *attacker_blind,
                    *through_smoke,
                    *attacker_position,
                    *victim_position,
                    place,
                    *timestamp,
                    &mut self.sink,
                );
            }
            RawEvent::Blind {
                attacker,
                victim,
                attacker_team,
                victim_team,
                duration,
                timestamp,
            } => {
                self.grenades.on_player_blind(
                    attacker.as_ref(),
                    victim.as_ref(),
                    *attacker_team,
                    *victim_team,
                    *duration,
                    *timestamp,
                    &mut self.sink,
                );
            }
            RawEvent::GrenadeDetonate {
                kind,
                thrower,
                thrower_team,
                position,
                place,
                timestamp,
            } => {
                self.grenades.on_grenade_detonate(
                    *kind,
                    thrower.as_ref(),
                    *thrower_team,
                    *position,
                    place,
                    *timestamp,
                    &mut self.sink,
                );
            }
            RawEvent::ItemPickup {
                player,
                item,
                position,
                place,
                timestamp,
            } => {
                self.items.on_item_pickup(
                    player.as_ref(),
                    item,
                    *position,
                    place,
                    *timestamp,
                    &mut self.sink,
                );
            }
            RawEvent::OwnershipChanged {
                entity,
                old_owner,
                new_owner,
                weapon,
                position,
                place,
                timestamp,
            } => {
                self.items.on_ownership_changed(
                    *entity,
                    old_owner.as_ref(),
                    new_owner.as_ref(),
                    weapon,
                    *position,
                    place,
                    *timestamp,
                    &mut self.sink,
                );
            }
            RawEvent::BuyzoneExit {
                player,
                team,
                position,
                health,
                armor,
                weapon,
                timestamp,
            } => {
                self.movement.on_buyzone_exit(
                    player.as_ref(),
                    *team,
                    *position,
                    *health,
                    *armor,
                    weapon.as_deref(),
                    *timestamp,
                    &mut self.sink,
                );
            }
            RawEvent::PlaceChanged {
                player,
                team,
                old_place,
                new_place,
                position,
                health,
                armor,
                weapon,
                timestamp,
            } => {
                self.movement.on_place_changed(
                    player.as_ref(),
                    *team,
                    old_place,
                    new_place,
                    *position,
                    *health,
                    *armor,
                    weapon.as_deref(),
                    *timestamp,
                    &mut self.sink,
                );
            }
            RawEvent::BombzoneEnter {
                player,
                position,
                place,
                timestamp,
            } => {
                self.movement.on_bombzone(
                    player.as_ref(),
                    true,
                    *position,
                    place,
                    *timestamp,
                    &mut self.sink,
                );
            }
            RawEvent::BombzoneExit {
                player,
                position,
                place,
                timestamp,
            } => {
                self.movement.on_bombzone(
                    player.as_ref(),
                    false,
                    *position,
                    place,
                    *timestamp,
                    &mut self.sink,
                );
            }
        }
    }

    /// Records emitted so far, in emission order. Usable mid-stream, so a
    /// run cut short by malformed trailing data still yields everything
    /// correlated up to that point.
    pub fn records(&self) -> &[common::CorrelatedRecord] {
        self.sink.records()
    }

    pub fn into_records(self) -> Vec<common::CorrelatedRecord> {
        self.sink.into_records()
    }
}
