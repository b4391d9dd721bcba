//! Legal-action enumeration

use duelist_engine::{Player, Snapshot};

use crate::phase::{classify, Phase};

/// Enumerate the syntactically legal command strings for one side
///
/// The output order follows the engine's reported order: moves first (skipping
/// disabled slots), then bench switches unless the active combatant is
/// trapped. Every string here is engine-acceptable by construction; the
/// decision search samples from exactly this set.
///
/// Team preview currently yields the fixed placeholder order; actual reveal
/// ordering is chosen engine-side.
pub fn enumerate(snapshot: &Snapshot, player: Player) -> Vec<String> {
    let side = snapshot.side(player);

    match classify(snapshot).get(player) {
        Phase::Wait => vec![String::new()],
        Phase::Team => vec!["team 123456".to_string()],
        Phase::Move => {
            let mut out = Vec::new();
            let mut can_switch = true;
            if let Some(active) = &side.active {
                out.extend(
                    active
                        .moves
                        .iter()
                        .filter(|m| !m.disabled)
                        .map(|m| format!("move {}", m.id)),
                );
                can_switch = !active.trapped;
            }
            if can_switch {
                out.extend(side.bench().map(|c| format!("switch {}", c.species)));
            }
            out
        }
        Phase::Switch => side.bench().map(|c| format!("switch {}", c.species)).collect(),
    }
}
