//! Scripted in-memory engine for exercising the decision layer in tests

use std::cell::Cell;
use std::rc::Rc;

use duelist_engine::{
    ActiveOptions, Combatant, Engine, EngineError, MoveOption, Player, RequestState, SideView,
    Snapshot,
};

/// A mid-battle snapshot: both sides in a move request with an active
/// combatant, two usable moves, and one bench switch each.
pub fn move_duel() -> Snapshot {
    let mut p1 = SideView::new(Player::P1, "Red");
    let mut p1_lead = Combatant::new("Apex", 300);
    p1_lead.active = true;
    p1.team = vec![p1_lead, Combatant::new("Bastion", 280)];
    p1.active = Some(ActiveOptions {
        moves: vec![MoveOption::new("strike", 16), MoveOption::new("guard", 24)],
        trapped: false,
    });

    let mut p2 = SideView::new(Player::P2, "Penny");
    let mut p2_lead = Combatant::new("Cinder", 290);
    p2_lead.active = true;
    p2.team = vec![p2_lead, Combatant::new("Durance", 310)];
    p2.active = Some(ActiveOptions {
        moves: vec![MoveOption::new("finisher", 8), MoveOption::new("jab", 32)],
        trapped: false,
    });

    let mut snap = Snapshot::new(p1, p2);
    snap.request = RequestState::Move;
    snap.turn = 1;
    snap
}

#[derive(Clone)]
enum Behavior {
    /// apply_turn succeeds without changing state
    Inert,
    /// every apply_turn fails
    Failing,
    /// moves deal flat damage to the opposing active combatant
    DamageTrade,
    /// like DamageTrade, but one command ends the battle for `winner`
    Finisher { cmd: String, winner: String },
    /// arbitrary transition function
    Script(fn(&mut Snapshot, &str, &str)),
}

/// Engine double driven by a canned behavior; forks share the apply counter
/// so tests can observe how much work the search did.
#[derive(Clone)]
pub struct MockEngine {
    snapshot: Snapshot,
    behavior: Behavior,
    applies: Rc<Cell<usize>>,
}

impl MockEngine {
    fn new(snapshot: Snapshot, behavior: Behavior) -> Self {
        Self {
            snapshot,
            behavior,
            applies: Rc::new(Cell::new(0)),
        }
    }

    pub fn inert(snapshot: Snapshot) -> Self {
        Self::new(snapshot, Behavior::Inert)
    }

    pub fn failing(snapshot: Snapshot) -> Self {
        Self::new(snapshot, Behavior::Failing)
    }

    pub fn damage_trade(snapshot: Snapshot) -> Self {
        Self::new(snapshot, Behavior::DamageTrade)
    }

    pub fn with_finisher(snapshot: Snapshot, cmd: &str, winner: &str) -> Self {
        Self::new(
            snapshot,
            Behavior::Finisher {
                cmd: cmd.to_string(),
                winner: winner.to_string(),
            },
        )
    }

    pub fn scripted(snapshot: Snapshot, script: fn(&mut Snapshot, &str, &str)) -> Self {
        Self::new(snapshot, Behavior::Script(script))
    }

    /// Total apply_turn calls across this engine and every fork of it
    pub fn applies(&self) -> usize {
        self.applies.get()
    }
}

fn trade(snap: &mut Snapshot, actor: Player, cmd: &str) {
    if cmd.starts_with("move ") {
        let foe = &mut snap.sides[actor.opponent().index()];
        if let Some(active) = foe.team.iter_mut().find(|c| c.active) {
            active.hp = active.hp.saturating_sub(60);
            if active.hp == 0 {
                active.fainted = true;
            }
        }
    } else if let Some(species) = cmd.strip_prefix("switch ") {
        let side = &mut snap.sides[actor.index()];
        for c in &mut side.team {
            c.active = c.species.eq_ignore_ascii_case(species);
        }
    }
}

impl Engine for MockEngine {
    fn snapshot(&self) -> Snapshot {
        self.snapshot.clone()
    }

    fn apply_turn(&mut self, first: &str, second: &str) -> Result<(), EngineError> {
        self.applies.set(self.applies.get() + 1);
        if self.snapshot.ended {
            return Err(EngineError::Ended);
        }

        match self.behavior.clone() {
            Behavior::Inert => {}
            Behavior::Failing => {
                return Err(EngineError::Internal("scripted failure".to_string()));
            }
            Behavior::DamageTrade => {
                trade(&mut self.snapshot, Player::P1, first);
                trade(&mut self.snapshot, Player::P2, second);
                self.snapshot.turn += 1;
            }
            Behavior::Finisher { cmd, winner } => {
                if first == cmd || second == cmd {
                    let loser = 1 - self
                        .snapshot
                        .sides
                        .iter()
                        .position(|s| s.name == winner)
                        .unwrap_or(0);
                    for c in &mut self.snapshot.sides[loser].team {
                        c.hp = 0;
                        c.fainted = true;
                    }
                    self.snapshot.ended = true;
                    self.snapshot.winner = Some(winner);
                } else {
                    trade(&mut self.snapshot, Player::P1, first);
                    trade(&mut self.snapshot, Player::P2, second);
                }
                self.snapshot.turn += 1;
            }
            Behavior::Script(script) => script(&mut self.snapshot, first, second),
        }
        Ok(())
    }

    fn fork(&self) -> Box<dyn Engine> {
        Box::new(self.clone())
    }
}
