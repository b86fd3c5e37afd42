use common::{CorrelatedRecord, EntityId, PlayerId, PlayerIdentity, Position, RawEvent, Roster};
use correlation::Correlator;
use pretty_assertions::assert_eq;

fn player(id: u64, name: &str) -> PlayerIdentity {
    PlayerIdentity {
        id: PlayerId(id),
        name: name.to_owned(),
    }
}

fn pos(x: f32, y: f32) -> Position {
    Position { x, y, z: 0.0 }
}

fn ownership_changed(
    entity: u32,
    old_owner: Option<PlayerIdentity>,
    new_owner: Option<PlayerIdentity>,
    position: Position,
    place: &str,
    timestamp: f32,
) -> RawEvent {
    RawEvent::OwnershipChanged {
        entity: EntityId(entity),
        old_owner,
        new_owner,
        weapon: "ak47".to_owned(),
        position,
        place: place.to_owned(),
        timestamp,
    }
}

#[test]
fn drop_then_pickup() {
    let mut correlator = Correlator::new();
    let roster = Roster::empty();

    correlator.process(
        &ownership_changed(42, Some(player(1, "dropper")), None, pos(10.0, 20.0), "TSpawn", 5.0),
        &roster,
    );
    correlator.process(
        &ownership_changed(42, None, Some(player(2, "grabber")), pos(11.0, 21.0), "Mid", 9.5),
        &roster,
    );

    let expected = vec![
        CorrelatedRecord::ItemDropped {
            player: player(1, "dropper"),
            item: "ak47".to_owned(),
            position: pos(10.0, 20.0),
            place: "TSpawn".to_owned(),
            timestamp: 5.0,
        },
        CorrelatedRecord::ItemPickedUp {
            player: player(2, "grabber"),
            item: "ak47".to_owned(),
            position: pos(11.0, 21.0),
            place: "Mid".to_owned(),
            dropped_by: player(1, "dropper"),
            dropped_position: pos(10.0, 20.0),
            dropped_place: "TSpawn".to_owned(),
            timestamp: 9.5,
        },
    ];

    assert_eq!(expected, correlator.into_records());
}

#[test]
fn pickup_without_pending_drop_is_a_plain_equip() {
    let mut correlator = Correlator::new();
    let roster = Roster::empty();

    correlator.process(
        &ownership_changed(7, None, Some(player(1, "buyer")), pos(0.0, 0.0), "CTSpawn", 1.0),
        &roster,
    );

    assert_eq!(0, correlator.records().len());
}

#[test]
fn reused_entity_references_the_last_drop() {
    let mut correlator = Correlator::new();
    let roster = Roster::empty();

    correlator.process(
        &ownership_changed(3, Some(player(1, "first")), None, pos(1.0, 1.0), "A", 1.0),
        &roster,
    );
    correlator.process(
        &ownership_changed(3, None, Some(player(2, "second")), pos(2.0, 2.0), "A", 2.0),
        &roster,
    );
    // Entity handle reused for a fresh lifecycle after the pickup.
    correlator.process(
        &ownership_changed(3, Some(player(3, "third")), None, pos(3.0, 3.0), "B", 3.0),
        &roster,
    );
    correlator.process(
        &ownership_changed(3, None, Some(player(1, "first")), pos(4.0, 4.0), "B", 4.0),
        &roster,
    );

    let pickups: Vec<_> = correlator
        .records()
        .iter()
        .filter(|r| matches!(r, CorrelatedRecord::ItemPickedUp { .. }))
        .cloned()
        .collect();

    assert_eq!(2, pickups.len());
    assert_eq!(
        CorrelatedRecord::ItemPickedUp {
            player: player(1, "first"),
            item: "ak47".to_owned(),
            position: pos(4.0, 4.0),
            place: "B".to_owned(),
            dropped_by: player(3, "third"),
            dropped_position: pos(3.0, 3.0),
            dropped_place: "B".to_owned(),
            timestamp: 4.0,
        },
        pickups[1]
    );
}

#[test]
fn double_pickup_only_correlates_once() {
    let mut correlator = Correlator::new();
    let roster = Roster::empty();

    correlator.process(
        &ownership_changed(9, Some(player(1, "a")), None, pos(0.0, 0.0), "A", 1.0),
        &roster,
    );
    correlator.process(
        &ownership_changed(9, None, Some(player(2, "b")), pos(0.0, 0.0), "A", 2.0),
        &roster,
    );
    // Same entity gained again without a new drop in between.
    correlator.process(
        &ownership_changed(9, None, Some(player(3, "c")), pos(0.0, 0.0), "A", 3.0),
        &roster,
    );

    let pickups = correlator
        .records()
        .iter()
        .filter(|r| matches!(r, CorrelatedRecord::ItemPickedUp { .. }))
        .count();

    assert_eq!(1, pickups);
}

#[test]
fn item_pickup_event_transcribes() {
    let mut correlator = Correlator::new();
    let roster = Roster::empty();

    correlator.process(
        &RawEvent::ItemPickup {
            player: Some(player(4, "shopper")),
            item: "m4a1".to_owned(),
            position: Some(pos(5.0, 5.0)),
            place: "CTSpawn".to_owned(),
            timestamp: 2.5,
        },
        &roster,
    );
    correlator.process(
        &RawEvent::ItemPickup {
            player: None,
            item: "deagle".to_owned(),
            position: None,
            place: String::new(),
            timestamp: 2.6,
        },
        &roster,
    );

    let expected = vec![CorrelatedRecord::ItemPickup {
        player: player(4, "shopper"),
        item: "m4a1".to_owned(),
        position: Some(pos(5.0, 5.0)),
        place: "CTSpawn".to_owned(),
        timestamp: 2.5,
    }];

    assert_eq!(expected, correlator.into_records());
}
