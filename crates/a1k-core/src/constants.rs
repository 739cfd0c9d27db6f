//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz). One tick is one animation frame.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Arena ---

/// Arena width in pixels.
pub const ARENA_WIDTH: f64 = 800.0;

/// Arena height in pixels.
pub const ARENA_HEIGHT: f64 = 600.0;

/// Player spawn point.
pub const PLAYER_SPAWN: (f64, f64) = (400.0, 300.0);

// --- Default stats ---

/// Attack used when an attacker has no explicit stats.
pub const DEFAULT_ATK: f64 = 10.0;

/// Defense used when a defender has no explicit stats.
pub const DEFAULT_DEF: f64 = 0.0;

/// Critical chance used when an attacker has no explicit stats.
pub const DEFAULT_CRIT_CHANCE: f64 = 0.05;

// --- Damage resolution ---

/// Fraction of defense subtracted from every hit.
pub const DEFENSE_MITIGATION: f64 = 0.5;

/// Damage multiplier for critical hits.
pub const CRIT_MULTIPLIER: f64 = 1.5;

/// Minimum damage any connecting hit deals.
pub const MIN_DAMAGE: f64 = 1.0;

// --- Hit feedback ---

/// Hit-stop duration applied on a critical hit (ms).
pub const CRIT_HIT_STOP_MS: u64 = 100;

/// Screen shake intensity applied on a critical hit.
pub const CRIT_SCREEN_SHAKE: f64 = 5.0;

/// Per-update screen shake decay factor.
pub const SCREEN_SHAKE_DECAY: f64 = 0.9;

/// Shake below this value snaps to zero.
pub const SCREEN_SHAKE_FLOOR: f64 = 0.5;

/// Vertical offset of a spawned damage number above the defender.
pub const DAMAGE_NUMBER_OFFSET_Y: f64 = 20.0;

/// Initial upward velocity of a damage number (pixels per update).
pub const DAMAGE_NUMBER_RISE: f64 = -3.0;

/// Gravity applied to damage numbers per update.
pub const DAMAGE_NUMBER_GRAVITY: f64 = 0.1;

// --- Enemy brain ---

/// Default range at which an idle enemy notices the player (pixels).
pub const BRAIN_DETECTION_RANGE: f64 = 200.0;

/// Default melee reach (pixels).
pub const BRAIN_ATTACK_RANGE: f64 = 40.0;

/// A chasing enemy gives up beyond `detection_range` times this factor.
pub const BRAIN_LEASH_FACTOR: f64 = 1.5;

/// Chase speed (pixels per tick).
pub const BRAIN_CHASE_SPEED: f64 = 1.5;

/// Patrol return speed (pixels per tick).
pub const BRAIN_PATROL_SPEED: f64 = 0.5;

/// Patrol ends when this close to home (pixels).
pub const BRAIN_HOME_RADIUS: f64 = 5.0;

/// Ticks between enemy strikes while attacking.
pub const BRAIN_ATTACK_COOLDOWN_TICKS: u32 = 60;

// --- Combo chain ---

/// Time budget between consecutive skills to keep a combo alive (ms).
pub const COMBO_WINDOW_MS: u64 = 3000;

/// A combo completes automatically at this many skills.
pub const COMBO_MAX_LENGTH: usize = 5;

/// Multiplier gained per additional skill in a combo.
pub const COMBO_STEP_BONUS: f64 = 0.15;

// --- Hit streak / rage ---

/// A hit streak breaks after this long without landing a hit (ms).
pub const HIT_STREAK_BREAK_MS: u64 = 2000;

/// Streak lengths that emit a milestone event.
pub const HIT_STREAK_MILESTONES: [u32; 3] = [10, 50, 100];

/// Rage gained per hit dealt.
pub const RAGE_PER_HIT: f64 = 2.0;

/// Rage meter capacity.
pub const RAGE_MAX: f64 = 100.0;

/// Rage mode duration (ms).
pub const RAGE_DURATION_MS: u64 = 10_000;

/// Damage multiplier while rage mode is active.
pub const RAGE_DAMAGE_MULTIPLIER: f64 = 2.0;

/// Fraction of max HP restored by a revive.
pub const REVIVE_HP_FRACTION: f64 = 0.5;

// --- Skill canceling ---

/// Default delay after cast before a skill may be canceled (ms).
pub const CANCEL_WINDOW_DEFAULT_MS: u64 = 500;

/// Length of the cancel window once open (ms).
pub const CANCEL_WINDOW_LENGTH_MS: u64 = 200;

/// Active skills older than this are dropped (ms).
pub const CANCEL_RETENTION_MS: u64 = 5000;

// --- Ultimate transformations ---

/// Default transformation duration (ms).
pub const TRANSFORM_DURATION_MS: u64 = 10_000;

pub const TRANSFORM_DAMAGE_BONUS: f64 = 1.5;
pub const TRANSFORM_SPEED_BONUS: f64 = 1.2;
pub const TRANSFORM_COOLDOWN_BONUS: f64 = 0.8;

// --- Mastery ---

/// Experience granted per skill use.
pub const MASTERY_EXP_PER_USE: f64 = 10.0;

/// Experience needed to leave level 1.
pub const MASTERY_BASE_EXP: f64 = 100.0;

/// Growth factor of the experience curve per level.
pub const MASTERY_EXP_GROWTH: f64 = 1.5;

pub const MASTERY_DAMAGE_PER_LEVEL: f64 = 0.05;
pub const MASTERY_COOLDOWN_PER_LEVEL: f64 = 0.02;
pub const MASTERY_RANGE_PER_LEVEL: f64 = 0.03;

/// Cooldown multiplier never drops below this.
pub const MASTERY_COOLDOWN_FLOOR: f64 = 0.5;

// --- Skills ---

/// Range assumed by range mods for skills that declare none.
pub const DEFAULT_SKILL_RANGE: f64 = 200.0;

/// Charge multiplier at zero charge.
pub const CHARGE_BASE: f64 = 0.5;

/// Charge multiplier gained at full charge.
pub const CHARGE_SCALE: f64 = 1.5;

/// Reach of the player's basic attack (pixels).
pub const PLAYER_ATTACK_RANGE: f64 = 60.0;

// --- Projectiles ---

/// Bolt travel speed (pixels per second).
pub const BOLT_SPEED: f64 = 480.0;

/// Radius of a bolt's head.
pub const BOLT_RADIUS: f64 = 16.0;

/// Body radius of an enemy when testing projectile contact.
pub const ENEMY_HIT_RADIUS: f64 = 20.0;

/// How long a beam stays out (ms).
pub const BEAM_DURATION_MS: u64 = 1000;

/// Interval between beam damage pulses (ms).
pub const BEAM_PULSE_MS: u64 = 100;

/// How long a burst ring stays visible (ms).
pub const BURST_DURATION_MS: u64 = 500;

// --- Status effects ---

pub const BURN_DURATION_MS: u64 = 3000;
pub const FREEZE_DURATION_MS: u64 = 2000;
pub const STUN_DURATION_MS: u64 = 1000;

// --- Profile ---

/// Skill tree points granted for clearing an arena.
pub const SKILL_POINTS_PER_CLEAR: u32 = 1;
