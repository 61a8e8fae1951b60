//! Ordered state rules evaluated once per tick.
//!
//! Rules are not mutually exclusive. Every rule runs in table order and may
//! overwrite the state chosen by the rules before it, so a rule's priority is
//! its position in [`RULES`]: later wins. Locomotion rules also emit their own
//! displacement, and displacements from several rules in the same tick add up
//! (walking plus running moves by `move_speed + run_speed`).

use glam::Vec2;

use crate::engine::input::{Action, InputProvider, InputSnapshot};

use super::effects::Effect;
use super::environment::EnvironmentFlags;
use super::state::CharacterState;
use super::stats::MovementStats;

/// Everything a rule may read
#[derive(Debug, Clone, Copy)]
pub struct TickContext<'a> {
    pub input: &'a InputSnapshot,
    pub env: EnvironmentFlags,
    pub stats: &'a MovementStats,
    pub dt: f32,
}

impl TickContext<'_> {
    fn horizontal(&self) -> f32 {
        self.input.horizontal()
    }

    fn vertical(&self) -> f32 {
        self.input.vertical()
    }

    fn held(&self, action: Action) -> bool {
        self.input.is_held(action)
    }
}

/// Running result of a tick: the state so far and the effects emitted so far
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub state: CharacterState,
    pub effects: Vec<Effect>,
}

impl Evaluation {
    fn new(state: CharacterState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    fn set(&mut self, state: CharacterState) {
        self.state = state;
    }

    fn displace(&mut self, dx: f32, dy: f32) {
        self.effects.push(Effect::Displace(Vec2::new(dx, dy)));
    }

    fn impulse(&mut self, dx: f32, dy: f32) {
        self.effects.push(Effect::Impulse(Vec2::new(dx, dy)));
    }
}

/// A named step in the evaluation order
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub apply: fn(&TickContext<'_>, &mut Evaluation),
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Rule").field(&self.name).finish()
    }
}

/// Evaluation order. Later entries override earlier ones.
pub const RULES: [Rule; 10] = [
    Rule {
        name: "walk",
        apply: walk,
    },
    Rule {
        name: "vertical",
        apply: vertical,
    },
    Rule {
        name: "run",
        apply: run,
    },
    Rule {
        name: "quadruped",
        apply: quadruped,
    },
    Rule {
        name: "slide",
        apply: slide,
    },
    Rule {
        name: "roll",
        apply: roll,
    },
    Rule {
        name: "attack",
        apply: attack,
    },
    Rule {
        name: "sneak",
        apply: sneak,
    },
    Rule {
        name: "climb",
        apply: climb,
    },
    Rule {
        name: "idle",
        apply: idle_fallback,
    },
];

/// Run every rule in order starting from `state`
pub fn evaluate(state: CharacterState, ctx: &TickContext<'_>) -> Evaluation {
    let mut eval = Evaluation::new(state);

    for rule in &RULES {
        let before = eval.state;
        (rule.apply)(ctx, &mut eval);
        if eval.state != before {
            log::trace!("rule {}: {:?} -> {:?}", rule.name, before, eval.state);
        }
    }

    eval
}

/// Moves even in the air; only labels the state when grounded.
fn walk(ctx: &TickContext<'_>, eval: &mut Evaluation) {
    let h = ctx.horizontal();
    if h == 0.0 {
        return;
    }

    if ctx.env.grounded {
        eval.set(CharacterState::Walking);
    }
    eval.displace(h * ctx.stats.move_speed * ctx.dt, 0.0);
}

/// Jump from the ground, or move along a wall.
///
/// Vertical input never moves an airborne character that is not on a wall;
/// climb displacement needs an active wall contact.
fn vertical(ctx: &TickContext<'_>, eval: &mut Evaluation) {
    let v = ctx.vertical();

    if v > 0.0 && ctx.env.grounded && !ctx.env.climbing {
        eval.set(CharacterState::Jumping);
        eval.impulse(0.0, ctx.stats.jump_force);
    } else if v != 0.0 && ctx.env.climbing {
        eval.displace(0.0, v * ctx.stats.climb_force * ctx.dt);
    }
}

fn run(ctx: &TickContext<'_>, eval: &mut Evaluation) {
    let h = ctx.horizontal();
    if !ctx.env.grounded || h == 0.0 || !ctx.held(Action::Run) {
        return;
    }

    eval.set(CharacterState::Running);
    eval.displace(h * ctx.stats.run_speed * ctx.dt, 0.0);
}

/// Fires with no horizontal input too (state changes, zero displacement).
fn quadruped(ctx: &TickContext<'_>, eval: &mut Evaluation) {
    if !ctx.env.grounded || !ctx.held(Action::Quadruped) {
        return;
    }

    eval.set(CharacterState::QuadrupedRunning);
    eval.displace(ctx.horizontal() * ctx.stats.quadruped_speed * ctx.dt, 0.0);
}

fn slide(ctx: &TickContext<'_>, eval: &mut Evaluation) {
    let h = ctx.horizontal();
    if !ctx.env.grounded || h == 0.0 || !ctx.held(Action::Slide) {
        return;
    }

    eval.set(CharacterState::Sliding);
    eval.displace(h * ctx.stats.slide_speed * ctx.dt, 0.0);
}

fn roll(ctx: &TickContext<'_>, eval: &mut Evaluation) {
    let h = ctx.horizontal();
    if !ctx.env.grounded || h == 0.0 || !ctx.held(Action::Roll) {
        return;
    }

    eval.set(CharacterState::Rolling);
    eval.displace(h * ctx.stats.roll_speed * ctx.dt, 0.0);
}

// Three independent checks behind one guard: side is always written first and
// then overwritten by up/down.
fn attack(ctx: &TickContext<'_>, eval: &mut Evaluation) {
    let attacking = ctx.held(Action::Attack);
    let v = ctx.vertical();

    if attacking {
        eval.set(CharacterState::AttackSide);
    }
    if attacking && v > 0.0 {
        eval.set(CharacterState::AttackUp);
    }
    if attacking && v < 0.0 {
        eval.set(CharacterState::AttackDown);
    }
}

fn sneak(ctx: &TickContext<'_>, eval: &mut Evaluation) {
    let sneaking = ctx.held(Action::Sneak);
    let h = ctx.horizontal();

    if sneaking {
        eval.set(CharacterState::Crouch);
    }
    if sneaking && h > 0.0 {
        eval.set(CharacterState::Sneak);
    }
    if sneaking && h < 0.0 {
        eval.set(CharacterState::Sneak);
    }
}

/// Moving down a wall without run held leaves the state untouched.
fn climb(ctx: &TickContext<'_>, eval: &mut Evaluation) {
    if !ctx.env.climbing {
        return;
    }

    let v = ctx.vertical();
    if v == 0.0 {
        eval.set(CharacterState::ClimbIdle);
    }
    if v > 0.0 {
        eval.set(CharacterState::Climbing);
    }
    if ctx.held(Action::Run) && v < 0.0 {
        eval.set(CharacterState::ClimbSlide);
    }
}

/// A jump keeps its label until landing.
fn idle_fallback(ctx: &TickContext<'_>, eval: &mut Evaluation) {
    if !ctx.input.any_key_held() && eval.state != CharacterState::Jumping {
        eval.set(CharacterState::Idle);
    }
}
