use common::{CorrelatedRecord, PlayerIdentity, Position, Team};

use crate::sink::RecordSink;

/// One-shot transcription of death events into kill records.
#[derive(Debug, Default)]
pub struct PlayerTracker;

impl PlayerTracker {
    pub fn new() -> Self {
        Self
    }

    #[allow(clippy::too_many_arguments)]
    pub fn on_player_death(
        &mut self,
        attacker: Option<&PlayerIdentity>,
        victim: Option<&PlayerIdentity>,
        attacker_team: Team,
        victim_team: Team,
        weapon: &str,
        headshot: bool,
        penetrated: bool,
        attacker_blind: bool,
        through_smoke: bool,
        attacker_position: Option<Position>,
        victim_position: Option<Position>,
        place: &str,
        timestamp: f32,
        sink: &mut RecordSink,
    ) {
        sink.push(CorrelatedRecord::Kill {
            attacker: attacker.cloned(),
            victim: victim.cloned(),
            attacker_team,
            victim_team,
            weapon: weapon.to_owned(),
            headshot,
            penetrated,
            attacker_blind,
            through_smoke,
            attacker_position,
            victim_position,
            place: place.to_owned(),
            timestamp,
        });
    }
}
