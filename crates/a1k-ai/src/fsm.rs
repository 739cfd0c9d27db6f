//! Enemy brain finite state machine.
//!
//! Pure functions that compute state transitions and movement for an
//! enemy based on its current state and where the player stands.
//! No ECS dependency; operates on plain data.

use a1k_core::constants::{BRAIN_HOME_RADIUS, BRAIN_LEASH_FACTOR};
use a1k_core::enums::AiState;
use a1k_core::types::Position;

use crate::profiles::BrainProfile;

/// Input to the brain FSM for a single enemy.
pub struct BrainContext {
    pub state: AiState,
    pub position: Position,
    pub player: Position,
    pub patrol_home: Position,
    pub detection_range: f64,
    pub attack_range: f64,
    /// Ticks until the next strike.
    pub attack_cooldown: i32,
    pub hp: f64,
}

/// Output from the brain FSM.
#[derive(Debug, Clone, PartialEq)]
pub struct BrainUpdate {
    pub new_state: AiState,
    pub new_position: Position,
    pub new_cooldown: i32,
    /// The enemy lands a melee strike on the player this tick.
    pub strike: bool,
    pub state_changed: bool,
}

/// Evaluate the FSM for one enemy. Dead enemies do nothing.
pub fn evaluate(ctx: &BrainContext, profile: &BrainProfile) -> BrainUpdate {
    if ctx.hp <= 0.0 {
        return no_change(ctx);
    }

    let dist = ctx.position.distance_to(&ctx.player);

    match ctx.state {
        AiState::Idle => evaluate_idle(ctx, dist),
        AiState::Chase => evaluate_chase(ctx, dist, profile),
        AiState::Attack => evaluate_attack(ctx, dist, profile),
        AiState::Patrol => evaluate_patrol(ctx, profile),
    }
}

fn no_change(ctx: &BrainContext) -> BrainUpdate {
    BrainUpdate {
        new_state: ctx.state,
        new_position: ctx.position,
        new_cooldown: ctx.attack_cooldown,
        strike: false,
        state_changed: false,
    }
}

fn transition(ctx: &BrainContext, to: AiState) -> BrainUpdate {
    BrainUpdate {
        new_state: to,
        state_changed: to != ctx.state,
        ..no_change(ctx)
    }
}

fn evaluate_idle(ctx: &BrainContext, dist: f64) -> BrainUpdate {
    if dist < ctx.detection_range {
        return transition(ctx, AiState::Chase);
    }
    no_change(ctx)
}

fn evaluate_chase(ctx: &BrainContext, dist: f64, profile: &BrainProfile) -> BrainUpdate {
    if dist > ctx.detection_range * BRAIN_LEASH_FACTOR {
        return transition(ctx, AiState::Patrol);
    }
    if dist < ctx.attack_range {
        return transition(ctx, AiState::Attack);
    }
    BrainUpdate {
        new_position: seek(ctx.position, ctx.player, profile.chase_speed),
        ..no_change(ctx)
    }
}

fn evaluate_attack(ctx: &BrainContext, dist: f64, profile: &BrainProfile) -> BrainUpdate {
    // Strike cadence runs even on the tick the player steps out of reach.
    let (strike, new_cooldown) = if ctx.attack_cooldown <= 0 {
        (true, profile.attack_cooldown_ticks as i32)
    } else {
        (false, ctx.attack_cooldown - 1)
    };

    let new_state = if dist > ctx.attack_range {
        AiState::Chase
    } else {
        AiState::Attack
    };

    BrainUpdate {
        new_state,
        new_position: ctx.position,
        new_cooldown,
        strike,
        state_changed: new_state != ctx.state,
    }
}

fn evaluate_patrol(ctx: &BrainContext, profile: &BrainProfile) -> BrainUpdate {
    if ctx.position.distance_to(&ctx.patrol_home) < BRAIN_HOME_RADIUS {
        return transition(ctx, AiState::Idle);
    }
    BrainUpdate {
        new_position: seek(ctx.position, ctx.patrol_home, profile.patrol_speed),
        ..no_change(ctx)
    }
}

/// Step `speed` pixels from `from` along the heading to `to`.
pub fn seek(from: Position, to: Position, speed: f64) -> Position {
    let delta = to.as_dvec2() - from.as_dvec2();
    let angle = delta.y.atan2(delta.x);
    let step = glam::DVec2::from_angle(angle) * speed;
    (from.as_dvec2() + step).into()
}
