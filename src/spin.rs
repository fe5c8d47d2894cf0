use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::wheel::{WheelItem, WheelItemKind};

/// Everything the rendering layer needs to animate one committed spin:
/// the pre-selected winner, where it sits, and the rotation to apply.
#[derive(Debug, Serialize, Clone)]
pub struct SpinOutcome {
    pub item: WheelItem,
    pub target_index: usize,
    pub rotation_delta: f64,
    pub new_rotation: f64,
    pub duration_ms: u32,
}

/// Velocity-derived spin parameters, independent of the chosen segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinPhysics {
    pub direction: f64,
    pub revolutions: f64,
    pub duration_ms: u32,
}

impl SpinPhysics {
    /// Derives spin direction, revolution count and duration from the
    /// signed gesture velocity. A zero velocity spins forward.
    pub fn from_velocity(velocity: f64) -> Self {
        let direction = if velocity < 0.0 { -1.0 } else { 1.0 };
        let bonus = (velocity.abs() * VELOCITY_REVOLUTION_SCALE).min(MAX_BONUS_REVOLUTIONS);
        let revolutions = (BASE_REVOLUTIONS + bonus).round();
        let duration_ms = BASE_SPIN_DURATION_MS + revolutions as u32 * MS_PER_REVOLUTION;
        Self {
            direction,
            revolutions,
            duration_ms,
        }
    }
}

/// Picks the winning item uniformly from the available pool. During the
/// first few spins of a session the pool is restricted to live segments,
/// so the game cannot land on a used slot before it has properly started.
pub fn pick_candidate<'a>(
    available: &'a [WheelItem],
    spin_count: u32,
    rng: &mut impl Rng,
) -> Option<&'a WheelItem> {
    let has_live = available.iter().any(|item| item.kind != WheelItemKind::End);
    if spin_count < EARLY_GAME_SPINS && has_live {
        let pool: Vec<&WheelItem> = available
            .iter()
            .filter(|item| item.kind != WheelItemKind::End)
            .collect();
        pool.choose(rng).copied()
    } else {
        available.choose(rng)
    }
}

/// Uniform landing offset so the pointer does not always stop dead center.
/// Bounded strictly inside half a segment, so the jitter can never push the
/// landing into a neighboring segment.
pub fn landing_jitter(segment_angle: f64, rng: &mut impl Rng) -> f64 {
    let half = segment_angle * LANDING_JITTER_FRACTION / 2.0;
    rng.gen_range(-half..half)
}

/// Rotation to add so the wheel settles on `target_index`: zero out the
/// current angle, add the requested full revolutions, then back off by the
/// target segment's start angle (plus jitter).
pub fn rotation_delta(
    rotation: f64,
    segment_count: usize,
    target_index: usize,
    physics: &SpinPhysics,
    jitter: f64,
) -> f64 {
    let segment_angle = 360.0 / segment_count as f64;
    let base = rotation.rem_euclid(360.0);
    -base + physics.revolutions * 360.0 * physics.direction
        - target_index as f64 * segment_angle
        + jitter
}

/// Number of spins during which the selection pool excludes used slots
pub const EARLY_GAME_SPINS: u32 = 5;
/// Full turns every spin makes regardless of velocity
pub const BASE_REVOLUTIONS: f64 = 5.0;
/// Extra revolutions per unit of gesture velocity
pub const VELOCITY_REVOLUTION_SCALE: f64 = 20.0;
/// Cap on the velocity bonus, so a hard flick stays watchable
pub const MAX_BONUS_REVOLUTIONS: f64 = 30.0;
/// Minimum animation duration in milliseconds
pub const BASE_SPIN_DURATION_MS: u32 = 4000;
/// Additional duration per revolution in milliseconds
pub const MS_PER_REVOLUTION: u32 = 200;
/// Fraction of a segment's width the landing point may wander across
pub const LANDING_JITTER_FRACTION: f64 = 0.8;
