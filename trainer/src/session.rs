//! Decision-point resolution loop

use duelist_engine::{Engine, EngineError};
use duelist_turns::{classify, validate, Phase, ValidationError};

use crate::picker::decide;
use crate::{ordered_pair, PlayerInfo};

/// What happened while resolving one human decision point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    /// Outcome of validating the human's command; surfaced, never fatal
    pub human_verdict: Result<(), ValidationError>,

    /// Whether the human/AI command pair reached the engine
    pub applied: bool,

    /// AI-only decision points resolved before handing back to the human
    pub ai_turns: u32,

    /// Whether the battle has ended
    pub ended: bool,
}

/// Resolve one decision point: pair the human's command with the AI's
/// choice, apply them jointly, then keep resolving AI-only decision points
/// until the human is needed again
///
/// The human command is validated against its classified phase before
/// anything mutates; an invalid command leaves the engine untouched and the
/// rejection comes back in the report. The AI's own commands are validated
/// too, and `ai_retry_budget` bounds how many invalid AI commands are
/// tolerated in the trailing loop before giving up (rather than spinning on
/// a buggy policy).
pub fn resolve_decision_point(
    engine: &mut dyn Engine,
    human_input: &str,
    human: &PlayerInfo,
    ai: &PlayerInfo,
    ai_retry_budget: u32,
) -> Result<TurnReport, EngineError> {
    let snapshot = engine.snapshot();
    if snapshot.ended {
        return Ok(TurnReport {
            human_verdict: Ok(()),
            applied: false,
            ai_turns: 0,
            ended: true,
        });
    }

    let phases = classify(&snapshot);
    let human_verdict = validate(human_input, phases.get(human.player), human.player, &snapshot);

    let mut applied = false;
    if human_verdict.is_ok() {
        let ai_cmd = decide(engine, ai, human);
        match validate(&ai_cmd, phases.get(ai.player), ai.player, &snapshot) {
            Ok(()) => {
                let (first, second) = ordered_pair(ai.player, &ai_cmd, human_input);
                engine.apply_turn(first, second)?;
                applied = true;
            }
            Err(err) => {
                // Should not happen: decide picks from the enumerated set
                tracing::warn!(error = %err, cmd = %ai_cmd, "AI produced an invalid command");
            }
        }
    }

    let ai_turns = run_ai_only_turns(engine, human, ai, ai_retry_budget)?;

    Ok(TurnReport {
        human_verdict,
        applied,
        ai_turns,
        ended: engine.snapshot().ended,
    })
}

/// Keep the battle moving while only the AI owes a command (the human side
/// classifies as wait)
fn run_ai_only_turns(
    engine: &mut dyn Engine,
    human: &PlayerInfo,
    ai: &PlayerInfo,
    mut retry_budget: u32,
) -> Result<u32, EngineError> {
    let mut ai_turns = 0;
    loop {
        let snapshot = engine.snapshot();
        if snapshot.ended {
            break;
        }
        let phases = classify(&snapshot);
        if phases.get(human.player) != Phase::Wait || phases.get(ai.player) == Phase::Wait {
            break;
        }

        let ai_cmd = decide(engine, ai, human);
        match validate(&ai_cmd, phases.get(ai.player), ai.player, &snapshot) {
            Ok(()) => {
                let (first, second) = ordered_pair(ai.player, &ai_cmd, "");
                engine.apply_turn(first, second)?;
                ai_turns += 1;
            }
            Err(err) => {
                tracing::warn!(error = %err, cmd = %ai_cmd, "AI produced an invalid command");
                if retry_budget == 0 {
                    break;
                }
                retry_budget -= 1;
            }
        }
    }
    Ok(ai_turns)
}
