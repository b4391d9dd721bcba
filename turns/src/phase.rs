//! Phase classification

use duelist_engine::{Player, RequestState, Snapshot};

/// The kind of command a side owes the engine at the current decision point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Team-preview reveal order
    Team,
    /// Pick a move, or switch voluntarily
    Move,
    /// Forced switch (faint, pivoting move)
    Switch,
    /// No action available; the legal command is the empty string
    Wait,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Team => "team",
            Phase::Move => "move",
            Phase::Switch => "switch",
            Phase::Wait => "wait",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-side phases for one decision point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phases {
    pub p1: Phase,
    pub p2: Phase,
}

impl Phases {
    fn both(phase: Phase) -> Self {
        Self {
            p1: phase,
            p2: phase,
        }
    }

    /// Phase for one side
    pub fn get(&self, player: Player) -> Phase {
        match player {
            Player::P1 => self.p1,
            Player::P2 => self.p2,
        }
    }
}

/// Derive each side's expected command kind from the snapshot
///
/// An ended battle and any request state this layer does not recognize both
/// degrade to waiting on both sides; classification is never fatal.
pub fn classify(snapshot: &Snapshot) -> Phases {
    if snapshot.ended {
        return Phases::both(Phase::Wait);
    }

    match &snapshot.request {
        RequestState::TeamPreview => Phases::both(Phase::Team),
        RequestState::Move => Phases::both(Phase::Move),
        RequestState::Switch => {
            let for_side = |player: Player| {
                if snapshot.side(player).waiting {
                    Phase::Wait
                } else {
                    Phase::Switch
                }
            };
            Phases {
                p1: for_side(Player::P1),
                p2: for_side(Player::P2),
            }
        }
        RequestState::Other(tag) => {
            tracing::warn!(state = %tag, "unrecognized request state, treating both sides as waiting");
            Phases::both(Phase::Wait)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duelist_engine::SideView;

    fn snapshot(request: RequestState) -> Snapshot {
        let mut snap = Snapshot::new(
            SideView::new(Player::P1, "Red"),
            SideView::new(Player::P2, "Penny"),
        );
        snap.request = request;
        snap
    }

    #[test]
    fn test_ended_is_wait_wait() {
        let mut snap = snapshot(RequestState::Move);
        snap.ended = true;
        assert_eq!(classify(&snap), Phases { p1: Phase::Wait, p2: Phase::Wait });
    }

    #[test]
    fn test_team_preview() {
        let snap = snapshot(RequestState::TeamPreview);
        let phases = classify(&snap);
        assert_eq!(phases.get(Player::P1), Phase::Team);
        assert_eq!(phases.get(Player::P2), Phase::Team);
    }

    #[test]
    fn test_move_is_unconditional() {
        let mut snap = snapshot(RequestState::Move);
        snap.sides[0].waiting = true; // ignored outside switch requests
        assert_eq!(classify(&snap), Phases { p1: Phase::Move, p2: Phase::Move });
    }

    #[test]
    fn test_switch_respects_wait_flag() {
        let mut snap = snapshot(RequestState::Switch);
        snap.sides[1].waiting = true;
        let phases = classify(&snap);
        assert_eq!(phases.p1, Phase::Switch);
        assert_eq!(phases.p2, Phase::Wait);
    }

    #[test]
    fn test_unrecognized_degrades_to_wait() {
        let snap = snapshot(RequestState::Other("megaevo".to_string()));
        assert_eq!(classify(&snap), Phases { p1: Phase::Wait, p2: Phase::Wait });
    }

    #[test]
    fn test_pure() {
        let snap = snapshot(RequestState::Switch);
        assert_eq!(classify(&snap), classify(&snap));
    }
}
