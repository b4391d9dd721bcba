//! Scripted Battle Demo
//!
//! Drives a short battle between a trivial scripted "human" and the
//! lookahead policy, using a self-contained toy engine. The toy engine is
//! not a real battle simulator - moves deal flat damage from a small table -
//! but it honors the engine contract, which is all the decision layer needs.

use anyhow::Result;
use duelist_engine::{
    ActiveOptions, Combatant, Engine, EngineError, MoveOption, Player, RequestState, SideView,
    Snapshot,
};
use duelist_trainer::{resolve_decision_point, PlayerInfo};
use duelist_turns::{classify, enumerate, Phase};

/// Flat damage per move id
fn move_damage(id: &str) -> u32 {
    match id {
        "strike" => 45,
        "jab" => 35,
        "lunge" => 55,
        "guard" => 10,
        _ => 20,
    }
}

fn moves_for(species: &str) -> Vec<MoveOption> {
    let ids: &[&str] = match species {
        "Apex" => &["strike", "guard"],
        "Bastion" => &["jab", "lunge"],
        "Cinder" => &["lunge", "jab"],
        "Durance" => &["strike", "jab"],
        _ => &["strike"],
    };
    ids.iter().map(|id| MoveOption::new(*id, 16)).collect()
}

#[derive(Clone)]
struct ToyEngine {
    snapshot: Snapshot,
}

impl ToyEngine {
    fn new() -> Self {
        let mut p1 = SideView::new(Player::P1, "Red");
        p1.team = vec![Combatant::new("Apex", 120), Combatant::new("Bastion", 100)];

        let mut p2 = SideView::new(Player::P2, "Penny");
        p2.team = vec![Combatant::new("Cinder", 110), Combatant::new("Durance", 90)];

        Self {
            snapshot: Snapshot::new(p1, p2),
        }
    }

    fn send_out_leads(&mut self) {
        for side in &mut self.snapshot.sides {
            if let Some(lead) = side.team.first_mut() {
                lead.active = true;
            }
        }
        self.enter_move_phase();
    }

    fn enter_move_phase(&mut self) {
        self.snapshot.request = RequestState::Move;
        self.snapshot.turn += 1;
        for side in &mut self.snapshot.sides {
            side.waiting = false;
            let options = side.active_combatant().map(|c| ActiveOptions {
                moves: moves_for(&c.species),
                trapped: false,
            });
            side.active = options;
        }
    }

    fn perform(&mut self, actor: Player, cmd: &str) {
        if let Some(id) = cmd.strip_prefix("move ") {
            let foe = &mut self.snapshot.sides[actor.opponent().index()];
            if let Some(target) = foe.team.iter_mut().find(|c| c.active) {
                target.hp = target.hp.saturating_sub(move_damage(id));
                if target.hp == 0 {
                    target.fainted = true;
                    target.active = false;
                }
            }
        } else if let Some(species) = cmd.strip_prefix("switch ") {
            let side = &mut self.snapshot.sides[actor.index()];
            for c in &mut side.team {
                c.active = c.species.eq_ignore_ascii_case(species) && !c.fainted;
            }
        }
    }

    /// After both commands resolve: finish the battle, demand replacements,
    /// or move on to the next turn.
    fn settle(&mut self) {
        for player in [Player::P1, Player::P2] {
            if self.snapshot.side(player).alive_count() == 0 {
                self.snapshot.ended = true;
                let winner = self.snapshot.side(player.opponent()).name.clone();
                self.snapshot.winner = Some(winner);
                return;
            }
        }

        let needs_switch: Vec<Player> = [Player::P1, Player::P2]
            .into_iter()
            .filter(|p| self.snapshot.side(*p).active_combatant().is_none())
            .collect();
        if needs_switch.is_empty() {
            self.enter_move_phase();
        } else {
            self.snapshot.request = RequestState::Switch;
            for player in [Player::P1, Player::P2] {
                let waiting = !needs_switch.contains(&player);
                let side = &mut self.snapshot.sides[player.index()];
                side.waiting = waiting;
                side.active = None;
            }
        }
    }
}

impl Engine for ToyEngine {
    fn snapshot(&self) -> Snapshot {
        self.snapshot.clone()
    }

    fn apply_turn(&mut self, first: &str, second: &str) -> Result<(), EngineError> {
        if self.snapshot.ended {
            return Err(EngineError::Ended);
        }
        if self.snapshot.request == RequestState::TeamPreview {
            self.send_out_leads();
            return Ok(());
        }
        self.perform(Player::P1, first);
        self.perform(Player::P2, second);
        self.settle();
        Ok(())
    }

    fn fork(&self) -> Box<dyn Engine> {
        Box::new(self.clone())
    }
}

/// The "human": always the first legal command
fn scripted_input(engine: &ToyEngine, player: Player) -> String {
    let snapshot = engine.snapshot();
    match classify(&snapshot).get(player) {
        Phase::Wait => String::new(),
        _ => enumerate(&snapshot, player)
            .into_iter()
            .next()
            .unwrap_or_default(),
    }
}

fn main() -> Result<()> {
    let human = PlayerInfo::new(Player::P1, "Red");
    let ai = PlayerInfo::new(Player::P2, "Penny");
    let mut engine = ToyEngine::new();

    println!("Scripted Battle: {} vs {}", human.name, ai.name);

    for _ in 0..40 {
        let input = scripted_input(&engine, human.player);
        let report = resolve_decision_point(&mut engine, &input, &human, &ai, 5)?;
        if let Err(reason) = &report.human_verdict {
            println!("input {input:?} rejected: {reason}");
            continue;
        }

        let snapshot = engine.snapshot();
        println!("=== Turn {} ===", snapshot.turn);
        for side in &snapshot.sides {
            let roster: Vec<String> = side
                .team
                .iter()
                .map(|c| format!("{} {}/{}", c.species, c.hp, c.max_hp))
                .collect();
            println!("  {}: {}", side.name, roster.join(", "));
        }

        if report.ended {
            match engine.snapshot().winner {
                Some(winner) => println!("{winner} won the battle!"),
                None => println!("The battle ended in a tie!"),
            }
            return Ok(());
        }
    }

    println!("Battle did not finish within the scripted horizon");
    Ok(())
}
