use std::collections::HashMap;

use common::{CorrelatedRecord, EntityId, PlayerIdentity, Position};

use crate::sink::RecordSink;

#[derive(Debug, Clone)]
struct PendingDrop {
    dropper: PlayerIdentity,
    position: Position,
    place: String,
}

/// Correlates weapon-entity owner transitions into drop/pickup pairs.
///
/// A lost owner records a pending drop keyed by the entity handle; the next
/// gained owner for that handle consumes it. At most one pending drop exists
/// per entity at any time, so a handle reused by the source after a pickup
/// starts a clean lifecycle.
#[derive(Debug, Default)]
pub struct ItemTracker {
    pending_drops: HashMap<EntityId, PendingDrop>,
}

impl ItemTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(clippy::too_many_arguments)]
    pub fn on_ownership_changed(
        &mut self,
        entity: EntityId,
        old_owner: Option<&PlayerIdentity>,
        new_owner: Option<&PlayerIdentity>,
        weapon: &str,
        position: Position,
        place: &str,
        timestamp: f32,
        sink: &mut RecordSink,
    ) {
        match (old_owner, new_owner) {
            (Some(dropper), None) => {
                self.pending_drops.insert(
                    entity,
                    PendingDrop {
                        dropper: dropper.clone(),
                        position,
                        place: place.to_owned(),
                    },
                );

                tracing::debug!(?entity, dropper = %dropper.name, weapon, "Item dropped");

                sink.push(CorrelatedRecord::ItemDropped {
                    player: dropper.clone(),
                    item: weapon.to_owned(),
                    position,
                    place: place.to_owned(),
                    timestamp,
                });
            }
            (_, Some(new_owner)) => {
                // No pending drop means a normal equip, not a correlation.
                let drop = match self.pending_drops.remove(&entity) {
                    Some(d) => d,
                    None => return,
                };

                tracing::debug!(
                    ?entity,
                    player = %new_owner.name,
                    dropped_by = %drop.dropper.name,
                    weapon,
                    "Item picked up"
                );

                sink.push(CorrelatedRecord::ItemPickedUp {
                    player: new_owner.clone(),
                    item: weapon.to_owned(),
                    position,
                    place: place.to_owned(),
                    dropped_by: drop.dropper,
                    dropped_position: drop.position,
                    dropped_place: drop.place,
                    timestamp,
                });
            }
            (None, None) => {}
        }
    }

    pub fn on_item_pickup(
        &mut self,
        player: Option<&PlayerIdentity>,
        item: &str,
        position: Option<Position>,
        place: &str,
        timestamp: f32,
        sink: &mut RecordSink,
    ) {
        let player = match player {
            Some(p) => p,
            None => {
                tracing::debug!(item, "ItemPickup event without resolvable player");
                return;
            }
        };

        sink.push(CorrelatedRecord::ItemPickup {
            player: player.clone(),
            item: item.to_owned(),
            position,
            place: place.to_owned(),
            timestamp,
        });
    }
}
