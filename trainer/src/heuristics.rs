//! Heuristic state evaluation

use duelist_engine::{SideCondition, Snapshot, Status, Volatile};
use thiserror::Error;

use crate::PlayerInfo;

/// Evaluation weights. Tuned by eye, not by search; the absolute values only
/// matter relative to each other and to [`WIN`] dominating everything.
pub(crate) mod weights {
    pub const WIN: f64 = 1000.0;
    pub const ALIVE: f64 = 20.0;
    pub const HP_RATIO: f64 = 10.0;
    pub const STAT_BOOST: f64 = 2.0;
    pub const HAS_ITEM: f64 = 5.0;
    pub const STEALTH_ROCK: f64 = -15.0;
    pub const SPIKES: [f64; 3] = [-15.0, -20.0, -30.0];
}

fn status_weight(status: Status) -> f64 {
    match status {
        Status::Burn => -10.0,
        Status::Freeze => -15.0,
        Status::Paralysis => -10.0,
        Status::Poison => -8.0,
        Status::BadPoison => -10.0,
        Status::Sleep => -10.0,
    }
}

/// Volatiles without an entry here contribute zero.
fn volatile_weight(volatile: &Volatile) -> f64 {
    match volatile {
        Volatile::Yawn => -7.0,
        Volatile::LeechSeed => -6.0,
        Volatile::Substitute => 5.0,
        _ => 0.0,
    }
}

/// A snapshot the evaluator could not score
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("combatant {species} reports zero max HP")]
    ZeroMaxHp { species: String },

    #[error("score accumulated to a non-finite value")]
    NonFinite,
}

/// Score a snapshot from one side's perspective
///
/// Recovers from any evaluation failure by scoring a neutral 0.0; the
/// result is always finite and this function never fails to the caller.
pub fn evaluate(snapshot: &Snapshot, me: &PlayerInfo, foe: &PlayerInfo) -> f64 {
    try_evaluate(snapshot, me, foe).unwrap_or_else(|err| {
        tracing::warn!(error = %err, side = %me.player, "state evaluation failed, scoring neutral");
        0.0
    })
}

/// Fallible form of [`evaluate`]
///
/// The win check compares the snapshot's winner against the display name in
/// `me`, not a side identifier; two participants sharing a name would both
/// see the win bonus.
pub fn try_evaluate(
    snapshot: &Snapshot,
    me: &PlayerInfo,
    _foe: &PlayerInfo,
) -> Result<f64, EvalError> {
    if snapshot.winner.as_deref() == Some(me.name.as_str()) {
        return Ok(weights::WIN);
    }

    let side = snapshot.side(me.player);
    let mut score = weights::ALIVE * side.alive_count() as f64;

    for (cond, state) in &side.conditions {
        score += match cond {
            SideCondition::StealthRock => weights::STEALTH_ROCK,
            SideCondition::Spikes => {
                // 1-indexed by layer count, clamped to the top of the table;
                // an entry without layers contributes nothing
                match state.layers as usize {
                    0 => 0.0,
                    n => weights::SPIKES[n.min(weights::SPIKES.len()) - 1],
                }
            }
            _ => 0.0,
        };
    }

    for combatant in &side.team {
        if combatant.max_hp == 0 {
            return Err(EvalError::ZeroMaxHp {
                species: combatant.species.clone(),
            });
        }

        let mut each = weights::HP_RATIO * combatant.hp_ratio();
        if let Some(status) = combatant.status {
            each += status_weight(status);
        }
        for volatile in &combatant.volatiles {
            each += volatile_weight(volatile);
        }
        each += weights::STAT_BOOST * combatant.boosts.total() as f64;
        if combatant.item_held {
            each += weights::HAS_ITEM;
        }

        // Floor each combatant's contribution at zero
        score += each.max(0.0);
    }

    if !score.is_finite() {
        return Err(EvalError::NonFinite);
    }
    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use duelist_engine::{Combatant, ConditionState, Player, SideView, Snapshot, Stat};

    fn info_pair() -> (PlayerInfo, PlayerInfo) {
        (
            PlayerInfo::new(Player::P1, "Red"),
            PlayerInfo::new(Player::P2, "Penny"),
        )
    }

    fn snapshot_with_team(team: Vec<Combatant>) -> Snapshot {
        let mut p1 = SideView::new(Player::P1, "Red");
        p1.team = team;
        Snapshot::new(p1, SideView::new(Player::P2, "Penny"))
    }

    #[test]
    fn test_win_dominates() {
        let (me, foe) = info_pair();
        let mut snap = snapshot_with_team(vec![Combatant::new("Apex", 300)]);
        snap.ended = true;
        snap.winner = Some("Red".to_string());
        assert_eq!(evaluate(&snap, &me, &foe), 1000.0);

        // Foe's name does not trigger the bonus
        snap.winner = Some("Penny".to_string());
        assert!(evaluate(&snap, &me, &foe) < 1000.0);
    }

    #[test]
    fn test_healthy_combatant_scores() {
        let (me, foe) = info_pair();
        let mut c = Combatant::new("Apex", 300);
        c.item_held = true;
        let snap = snapshot_with_team(vec![c]);
        // ALIVE 20 + HP_RATIO 10 * 1.0 + HAS_ITEM 5
        assert_eq!(evaluate(&snap, &me, &foe), 35.0);
    }

    #[test]
    fn test_monotone_in_hp_ratio() {
        let (me, foe) = info_pair();
        let mut previous = f64::NEG_INFINITY;
        for hp in [0, 75, 150, 225, 300] {
            let mut c = Combatant::new("Apex", 300);
            c.hp = hp;
            let score = evaluate(&snapshot_with_team(vec![c]), &me, &foe);
            assert!(score >= previous, "score decreased at hp {hp}");
            previous = score;
        }
    }

    #[test]
    fn test_zero_floor_per_combatant() {
        let (me, foe) = info_pair();
        let mut wreck = Combatant::new("Apex", 300);
        wreck.hp = 0;
        wreck.fainted = true;
        wreck.status = Some(Status::BadPoison);
        wreck.volatiles.insert(Volatile::Yawn);
        wreck.volatiles.insert(Volatile::LeechSeed);
        wreck.boosts.set(Stat::Atk, -6);
        wreck.boosts.set(Stat::Spe, -6);

        let healthy = Combatant::new("Bastion", 280);
        let both = evaluate(&snapshot_with_team(vec![wreck, healthy.clone()]), &me, &foe);
        let alone = evaluate(&snapshot_with_team(vec![healthy]), &me, &foe);
        // The wrecked combatant contributes exactly zero, never negative.
        // alive_count differs by zero (it is fainted), so totals match.
        assert_eq!(both, alone);
    }

    #[test]
    fn test_status_and_boost_weights() {
        let (me, foe) = info_pair();
        let mut c = Combatant::new("Apex", 300);
        c.status = Some(Status::Poison); // -8
        c.boosts.set(Stat::Atk, 2); // +4
        let snap = snapshot_with_team(vec![c]);
        // 20 + 10 - 8 + 4
        assert_eq!(evaluate(&snap, &me, &foe), 26.0);
    }

    #[test]
    fn test_spikes_layer_table() {
        let (me, foe) = info_pair();
        for (layers, expected) in [(0u8, 0.0), (1, -15.0), (2, -20.0), (3, -30.0), (4, -30.0)] {
            let mut snap = snapshot_with_team(vec![Combatant::new("Apex", 300)]);
            snap.sides[0]
                .conditions
                .insert(SideCondition::Spikes, ConditionState { layers });
            // 20 + 10 + spikes
            assert_eq!(evaluate(&snap, &me, &foe), 30.0 + expected, "layers {layers}");
        }
    }

    #[test]
    fn test_stealth_rock_weight() {
        let (me, foe) = info_pair();
        let mut snap = snapshot_with_team(vec![Combatant::new("Apex", 300)]);
        snap.sides[0]
            .conditions
            .insert(SideCondition::StealthRock, ConditionState::new());
        assert_eq!(evaluate(&snap, &me, &foe), 15.0);
    }

    #[test]
    fn test_unweighted_condition_contributes_zero() {
        let (me, foe) = info_pair();
        let mut snap = snapshot_with_team(vec![Combatant::new("Apex", 300)]);
        snap.sides[0]
            .conditions
            .insert(SideCondition::Reflect, ConditionState::new());
        assert_eq!(evaluate(&snap, &me, &foe), 30.0);
    }

    #[test]
    fn test_malformed_snapshot_recovers_to_zero() {
        let (me, foe) = info_pair();
        let snap = snapshot_with_team(vec![Combatant::new("Apex", 0)]);
        assert_eq!(
            try_evaluate(&snap, &me, &foe),
            Err(EvalError::ZeroMaxHp { species: "Apex".to_string() })
        );
        assert_eq!(evaluate(&snap, &me, &foe), 0.0);
    }
}
