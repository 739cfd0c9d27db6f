//! Skill effects in flight.
//!
//! A resolved cast becomes a bolt, a beam or a burst. The manager moves
//! them on the sim clock and reports which enemies each one touched;
//! applying the damage and status is left to the caller.

use glam::DVec2;
use tracing::debug;

use a1k_core::constants::*;
use a1k_core::enums::StatusKind;
use a1k_core::state::{ProjectileShape, ProjectileView};
use a1k_core::types::Position;

use crate::catalog::Delivery;
use crate::pipeline::ResolvedSkill;

/// An enemy a projectile may touch this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitTarget {
    pub id: u32,
    pub position: Position,
}

/// One contact between a projectile and an enemy.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectileHit {
    pub projectile: u32,
    pub skill_id: &'static str,
    pub target: u32,
    pub damage: f64,
    pub status: Option<StatusKind>,
}

#[derive(Debug, Clone)]
enum Motion {
    Bolt {
        head: DVec2,
        velocity: DVec2,
        pierce_left: u32,
    },
    Beam {
        origin: DVec2,
        end: DVec2,
        half_width: f64,
        next_pulse_ms: u64,
    },
    Burst {
        centre: DVec2,
        radius: f64,
        fired: bool,
    },
}

#[derive(Debug, Clone)]
struct Projectile {
    id: u32,
    skill_id: &'static str,
    damage: f64,
    status: Option<StatusKind>,
    expires_at_ms: u64,
    motion: Motion,
    /// Enemies already struck; beams ignore it.
    struck: Vec<u32>,
}

impl Projectile {
    fn spent(&self, now_ms: u64) -> bool {
        match self.motion {
            Motion::Bolt { pierce_left, .. } if pierce_left == 0 => true,
            Motion::Beam { next_pulse_ms, .. } => next_pulse_ms >= self.expires_at_ms,
            _ => now_ms >= self.expires_at_ms,
        }
    }
}

#[derive(Debug, Default)]
pub struct ProjectileManager {
    projectiles: Vec<Projectile>,
    next_id: u32,
}

impl ProjectileManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `cast` in flight from `from`, aimed at `toward`. Summons have
    /// nothing to launch and return `None`.
    pub fn launch(
        &mut self,
        cast: &ResolvedSkill,
        from: Position,
        toward: Option<Position>,
        now_ms: u64,
    ) -> Option<u32> {
        let origin = from.as_dvec2();
        let direction = toward
            .map(|t| (t.as_dvec2() - origin).normalize_or_zero())
            .filter(|d| *d != DVec2::ZERO)
            .unwrap_or(DVec2::X);

        let (motion, lifetime_ms) = match cast.delivery {
            Delivery::Summon => return None,
            Delivery::Bolt { pierce } => (
                Motion::Bolt {
                    head: origin,
                    velocity: direction * BOLT_SPEED,
                    pierce_left: pierce.max(1),
                },
                (cast.range / BOLT_SPEED * 1000.0).ceil() as u64,
            ),
            Delivery::Beam { width } => (
                Motion::Beam {
                    origin,
                    end: origin + direction * cast.range,
                    half_width: width / 2.0,
                    next_pulse_ms: now_ms,
                },
                BEAM_DURATION_MS,
            ),
            Delivery::Burst { radius } => (
                Motion::Burst {
                    centre: origin,
                    radius,
                    fired: false,
                },
                BURST_DURATION_MS,
            ),
        };

        let id = self.next_id;
        self.next_id += 1;
        self.projectiles.push(Projectile {
            id,
            skill_id: cast.skill_id,
            damage: cast.damage,
            status: cast.status,
            expires_at_ms: now_ms + lifetime_ms,
            motion,
            struck: Vec::new(),
        });
        debug!(id, skill_id = cast.skill_id, delivery = ?cast.delivery, "projectile launched");
        Some(id)
    }

    /// Advance every projectile to `now_ms` and return the contacts made.
    pub fn update(&mut self, now_ms: u64, targets: &[HitTarget]) -> Vec<ProjectileHit> {
        let mut hits = Vec::new();
        for projectile in &mut self.projectiles {
            advance(projectile, now_ms, targets, &mut hits);
        }
        self.projectiles.retain(|p| !p.spent(now_ms));
        hits
    }

    pub fn len(&self) -> usize {
        self.projectiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty()
    }

    pub fn clear(&mut self) {
        self.projectiles.clear();
    }

    pub fn views(&self) -> Vec<ProjectileView> {
        self.projectiles
            .iter()
            .map(|p| {
                let (shape, position, end, radius) = match p.motion {
                    Motion::Bolt { head, .. } => (ProjectileShape::Bolt, head, None, BOLT_RADIUS),
                    Motion::Beam {
                        origin,
                        end,
                        half_width,
                        ..
                    } => (ProjectileShape::Beam, origin, Some(end.into()), half_width),
                    Motion::Burst { centre, radius, .. } => {
                        (ProjectileShape::Burst, centre, None, radius)
                    }
                };
                ProjectileView {
                    id: p.id,
                    skill_id: p.skill_id.to_string(),
                    shape,
                    position: position.into(),
                    end,
                    radius,
                }
            })
            .collect()
    }
}

fn advance(p: &mut Projectile, now_ms: u64, targets: &[HitTarget], hits: &mut Vec<ProjectileHit>) {
    match &mut p.motion {
        Motion::Bolt {
            head,
            velocity,
            pierce_left,
        } => {
            *head += *velocity * DT;
            let reach = BOLT_RADIUS + ENEMY_HIT_RADIUS;
            let mut touching: Vec<(u32, f64)> = targets
                .iter()
                .filter(|t| !p.struck.contains(&t.id))
                .map(|t| (t.id, head.distance(t.position.as_dvec2())))
                .filter(|&(_, d)| d <= reach)
                .collect();
            touching.sort_by(|a, b| a.1.total_cmp(&b.1));
            let take = touching.len().min(*pierce_left as usize);
            *pierce_left -= take as u32;
            for (id, _) in touching.into_iter().take(take) {
                p.struck.push(id);
                hits.push(ProjectileHit {
                    projectile: p.id,
                    skill_id: p.skill_id,
                    target: id,
                    damage: p.damage,
                    status: p.status,
                });
            }
        }
        Motion::Beam {
            origin,
            end,
            half_width,
            next_pulse_ms,
        } => {
            let pulses = (BEAM_DURATION_MS / BEAM_PULSE_MS).max(1);
            let per_pulse = p.damage / pulses as f64;
            let reach = *half_width + ENEMY_HIT_RADIUS;
            while *next_pulse_ms <= now_ms && *next_pulse_ms < p.expires_at_ms {
                for t in targets {
                    if point_to_segment_distance(t.position.as_dvec2(), *origin, *end) < reach {
                        hits.push(ProjectileHit {
                            projectile: p.id,
                            skill_id: p.skill_id,
                            target: t.id,
                            damage: per_pulse,
                            status: p.status,
                        });
                    }
                }
                *next_pulse_ms += BEAM_PULSE_MS;
            }
        }
        Motion::Burst {
            centre,
            radius,
            fired,
        } => {
            if !*fired {
                *fired = true;
                for t in targets {
                    if centre.distance(t.position.as_dvec2()) <= *radius {
                        p.struck.push(t.id);
                        hits.push(ProjectileHit {
                            projectile: p.id,
                            skill_id: p.skill_id,
                            target: t.id,
                            damage: p.damage,
                            status: p.status,
                        });
                    }
                }
            }
        }
    }
}

/// Distance from `point` to the segment `a`-`b`.
pub fn point_to_segment_distance(point: DVec2, a: DVec2, b: DVec2) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return point.distance(a);
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}
