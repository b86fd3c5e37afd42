use common::{CorrelatedRecord, PlayerId, PlayerIdentity, RawEvent, Roster, Team};
use correlation::Correlator;
use pretty_assertions::assert_eq;

fn player(id: u64, name: &str) -> PlayerIdentity {
    PlayerIdentity {
        id: PlayerId(id),
        name: name.to_owned(),
    }
}

fn weapon_fire(player_ident: Option<PlayerIdentity>, timestamp: f32) -> RawEvent {
    RawEvent::WeaponFire {
        player: player_ident,
        team: Team::Terrorist,
        weapon: "ak47".to_owned(),
        position: None,
        place: "Mid".to_owned(),
        timestamp,
    }
}

fn damage(attacker: Option<PlayerIdentity>, timestamp: f32) -> RawEvent {
    RawEvent::Damage {
        attacker,
        victim: Some(player(50, "victim")),
        attacker_team: Team::Terrorist,
        victim_team: Team::CounterTerrorist,
        weapon: "ak47".to_owned(),
        damage: 27,
        armor_damage: 3,
        attacker_position: None,
        victim_position: None,
        place: "Mid".to_owned(),
        timestamp,
    }
}

fn round_end(timestamp: f32) -> RawEvent {
    RawEvent::RoundEnd {
        winner: Team::Terrorist,
        reason: 8,
        message: None,
        timestamp,
    }
}

fn accuracy_records(correlator: &Correlator) -> Vec<CorrelatedRecord> {
    correlator
        .records()
        .iter()
        .filter(|r| matches!(r, CorrelatedRecord::Accuracy { .. }))
        .cloned()
        .collect()
}

#[test]
fn ten_fires_four_hits_is_forty_percent() {
    let mut correlator = Correlator::new();
    let roster = Roster::empty();
    let shooter = player(1, "shooter");

    for i in 0..10 {
        correlator.process(&weapon_fire(Some(shooter.clone()), i as f32), &roster);
    }
    for i in 0..4 {
        correlator.process(&damage(Some(shooter.clone()), 10.0 + i as f32), &roster);
    }
    correlator.process(&round_end(90.0), &roster);

    let expected = vec![CorrelatedRecord::Accuracy {
        player: shooter,
        shots_fired: 10,
        shots_hit: 4,
        accuracy: 40.0,
        timestamp: 90.0,
    }];

    assert_eq!(expected, accuracy_records(&correlator));
}

#[test]
fn counters_clear_after_emission_and_lazily_recreate() {
    let mut correlator = Correlator::new();
    let roster = Roster::empty();
    let shooter = player(1, "shooter");

    correlator.process(&weapon_fire(Some(shooter.clone()), 1.0), &roster);
    correlator.process(&round_end(90.0), &roster);

    // Fresh counter after the reset, starting back at 0/0.
    correlator.process(&weapon_fire(Some(shooter.clone()), 100.0), &roster);
    correlator.process(&weapon_fire(Some(shooter.clone()), 101.0), &roster);
    correlator.process(&damage(Some(shooter.clone()), 102.0), &roster);
    correlator.process(&round_end(190.0), &roster);

    let expected = vec![
        CorrelatedRecord::Accuracy {
            player: shooter.clone(),
            shots_fired: 1,
            shots_hit: 0,
            accuracy: 0.0,
            timestamp: 90.0,
        },
        CorrelatedRecord::Accuracy {
            player: shooter,
            shots_fired: 2,
            shots_hit: 1,
            accuracy: 50.0,
            timestamp: 190.0,
        },
    ];

    assert_eq!(expected, accuracy_records(&correlator));
}

#[test]
fn hits_without_fires_divide_to_zero() {
    let mut correlator = Correlator::new();
    let roster = Roster::empty();

    correlator.process(&damage(Some(player(1, "lucky")), 1.0), &roster);
    correlator.process(&round_end(90.0), &roster);

    let expected = vec![CorrelatedRecord::Accuracy {
        player: player(1, "lucky"),
        shots_fired: 0,
        shots_hit: 1,
        accuracy: 0.0,
        timestamp: 90.0,
    }];

    assert_eq!(expected, accuracy_records(&correlator));
}

#[test]
fn unresolvable_actor_drops_the_event_entirely() {
    let mut correlator = Correlator::new();
    let roster = Roster::empty();

    correlator.process(&weapon_fire(None, 1.0), &roster);
    correlator.process(&damage(None, 2.0), &roster);
    correlator.process(&round_end(90.0), &roster);

    // No pass-through records, no counters, no accuracy records.
    let expected: Vec<CorrelatedRecord> = vec![];
    assert_eq!(
        expected,
        correlator
            .records()
            .iter()
            .filter(|r| !matches!(r, CorrelatedRecord::RoundBoundary { .. }))
            .cloned()
            .collect::<Vec<_>>()
    );
}

#[test]
fn per_player_records_sort_by_id() {
    let mut correlator = Correlator::new();
    let roster = Roster::empty();

    correlator.process(&weapon_fire(Some(player(7, "second")), 1.0), &roster);
    correlator.process(&weapon_fire(Some(player(2, "first")), 2.0), &roster);
    correlator.process(&round_end(90.0), &roster);

    let players: Vec<_> = accuracy_records(&correlator)
        .into_iter()
        .map(|r| match r {
            CorrelatedRecord::Accuracy { player, .. } => player.id,
            _ => unreachable!(),
        })
        .collect();

    assert_eq!(vec![PlayerId(2), PlayerId(7)], players);
}

#[test]
fn pass_through_records_are_emitted_per_event() {
    let mut correlator = Correlator::new();
    let roster = Roster::empty();
    let shooter = player(1, "shooter");

    correlator.process(&weapon_fire(Some(shooter.clone()), 1.0), &roster);
    correlator.process(&damage(Some(shooter), 1.1), &roster);

    assert!(matches!(
        correlator.records()[0],
        CorrelatedRecord::WeaponFire { .. }
    ));
    assert!(matches!(
        correlator.records()[1],
        CorrelatedRecord::Damage { damage: 27, .. }
    ));
}
