//! One-ply lookahead decision policy

use duelist_engine::{Engine, EngineError, Player, Snapshot};
use duelist_turns::enumerate;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::heuristics::evaluate;
use crate::{ordered_pair, PlayerInfo};

/// Base of the weight sharpening; anything > 1 turns score advantages into
/// preference without ever zeroing a dominated option's probability.
const SHARPEN_BASE: f64 = 3.0;

/// Switches change board position without progress the heuristic can see,
/// so their score deltas are damped and the AI pays a flat cost to pick one.
const SWITCH_SCALE: f64 = 0.2;
const SWITCH_BIAS: f64 = -0.7;

/// Keeps `SHARPEN_BASE ^ advantage` finite when a terminal state puts the
/// win constant into the advantage.
const ADVANTAGE_CLAMP: f64 = 600.0;

fn scale(cmd: &str) -> f64 {
    if cmd.starts_with("switch") {
        SWITCH_SCALE
    } else {
        1.0
    }
}

fn bias(cmd: &str) -> f64 {
    if cmd.starts_with("switch") {
        SWITCH_BIAS
    } else {
        0.0
    }
}

/// Choose the scripted side's command for the current decision point
///
/// Explores the cross-product of both sides' legal commands one ply deep on
/// engine forks, scores each outcome with [`evaluate`], and samples a
/// command with probability proportional to `3 ^ advantage`. Repeated calls
/// on the same state may differ; the policy is stochastic by design.
///
/// Any failure while forking, applying, or scoring falls back to a uniform
/// choice among legal moves, then legal switches, then the empty command.
/// The returned command is always drawn from [`enumerate`]'s output.
pub fn decide(engine: &dyn Engine, ai: &PlayerInfo, human: &PlayerInfo) -> String {
    decide_with(engine, ai, human, &mut rand::thread_rng())
}

/// [`decide`] with a caller-supplied RNG, for deterministic tests
pub fn decide_with<R: Rng>(
    engine: &dyn Engine,
    ai: &PlayerInfo,
    human: &PlayerInfo,
    rng: &mut R,
) -> String {
    let snapshot = engine.snapshot();
    let ai_cmds = enumerate(&snapshot, ai.player);

    // Nothing to deliberate over
    if ai_cmds.len() == 1 && ai_cmds[0].is_empty() {
        return String::new();
    }
    // No legal command at all (every move disabled while trapped)
    if ai_cmds.is_empty() {
        return fallback(&snapshot, ai.player, rng);
    }

    let human_cmds = enumerate(&snapshot, human.player);
    match search(engine, &snapshot, &ai_cmds, &human_cmds, ai, human, rng) {
        Ok(cmd) => {
            tracing::debug!(side = %ai.player, %cmd, "lookahead picked command");
            cmd
        }
        Err(err) => {
            tracing::warn!(error = %err, side = %ai.player, "lookahead failed, falling back to uniform policy");
            fallback(&snapshot, ai.player, rng)
        }
    }
}

fn search<R: Rng>(
    engine: &dyn Engine,
    snapshot: &Snapshot,
    ai_cmds: &[String],
    human_cmds: &[String],
    ai: &PlayerInfo,
    human: &PlayerInfo,
    rng: &mut R,
) -> Result<String, EngineError> {
    let baseline_ai = evaluate(snapshot, ai, human);
    let baseline_human = evaluate(snapshot, human, ai);

    let mut weighted: Vec<(String, f64)> = Vec::with_capacity(ai_cmds.len());
    for ai_cmd in ai_cmds {
        let mut diff_sum = 0.0;
        for human_cmd in human_cmds {
            let mut sim = engine.fork();
            let (first, second) = ordered_pair(ai.player, ai_cmd, human_cmd);
            sim.apply_turn(first, second)?;

            let outcome = sim.snapshot();
            let post_ai = evaluate(&outcome, ai, human);
            let post_human = evaluate(&outcome, human, ai);

            let human_delta = (post_human - baseline_human) * scale(human_cmd);
            let ai_delta = (post_ai - baseline_ai) * scale(ai_cmd) + bias(ai_cmd);
            diff_sum += ai_delta - human_delta;
        }

        let advantage = diff_sum / human_cmds.len() as f64;
        let weight = SHARPEN_BASE.powf(advantage.clamp(-ADVANTAGE_CLAMP, ADVANTAGE_CLAMP));
        weighted.push((ai_cmd.clone(), weight));
    }

    Ok(weighted_pick(&weighted, rng))
}

/// Sample proportionally to weight, falling back to a uniform pick when the
/// weights are degenerate (non-positive or non-finite total)
fn weighted_pick<R: Rng>(items: &[(String, f64)], rng: &mut R) -> String {
    match items {
        [] => return String::new(),
        [(only, _)] => return only.clone(),
        _ => {}
    }

    let total: f64 = items.iter().map(|(_, w)| w).sum();
    if !total.is_finite() || total <= 0.0 {
        return items[rng.gen_range(0..items.len())].0.clone();
    }

    let mut roll = rng.gen_range(0.0..total);
    for (item, weight) in items {
        if roll < *weight {
            return item.clone();
        }
        roll -= weight;
    }
    items[items.len() - 1].0.clone()
}

/// Uniform fallback policy: a legal move, else a legal bench switch, else
/// the empty command
fn fallback<R: Rng>(snapshot: &Snapshot, player: Player, rng: &mut R) -> String {
    let side = snapshot.side(player);

    if let Some(active) = &side.active {
        let moves: Vec<&str> = active
            .moves
            .iter()
            .filter(|m| !m.disabled)
            .map(|m| m.id.as_str())
            .collect();
        if let Some(id) = moves.choose(rng) {
            return format!("move {id}");
        }
        if active.trapped {
            return String::new();
        }
    }

    let bench: Vec<&str> = side.bench().map(|c| c.species.as_str()).collect();
    match bench.choose(rng) {
        Some(species) => format!("switch {species}"),
        None => String::new(),
    }
}
