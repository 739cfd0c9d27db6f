use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use a1k_core::components::Health;
use a1k_core::enums::{CharacterId, Difficulty, ModKind, StatusKind};
use a1k_core::state::ProjectileShape;
use a1k_core::events::CombatEvent;
use a1k_core::types::{Position, Stats};
use a1k_progression::mods::SkillMod;
use a1k_progression::MemoryStorage;

use crate::balance::{self, BalanceError};
use crate::cancel::CancelSystem;
use crate::catalog::{self, Delivery, SkillSlot};
use crate::combo::ComboSystem;
use crate::damage::{base_damage, CombatEngine, Defender};
use crate::fighter::Fighter;
use crate::pipeline::{ResolvedSkill, SkillError, SkillPipeline};
use crate::projectile::{HitTarget, ProjectileHit, ProjectileManager};
use crate::synergy::SynergySystem;
use crate::transform::{TransformBonuses, TransformationSystem};

const EPS: f64 = 1e-9;

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(7)
}

fn hit(
    engine: &mut CombatEngine,
    attacker: &Stats,
    health: &mut Health,
    now_ms: u64,
) -> crate::HitResult {
    let defender_stats = Stats::new(10.0, 20.0, 0.0);
    engine.apply_damage(
        attacker,
        Defender {
            id: 3,
            position: Position::new(100.0, 100.0),
            stats: &defender_stats,
            health,
        },
        1.0,
        &mut rng(),
        now_ms,
    )
}

// --- Damage ---

#[test]
fn test_damage_formula() {
    let attacker = Stats::new(100.0, 0.0, 0.0);
    assert_eq!(base_damage(&attacker, &Stats::new(0.0, 20.0, 0.0), 1.0), 90.0);
    assert_eq!(base_damage(&attacker, &Stats::new(0.0, 20.0, 0.0), 2.0), 190.0);
    // Mitigation never drops a hit below one point.
    let weak = Stats::new(1.0, 0.0, 0.0);
    assert_eq!(base_damage(&weak, &Stats::new(0.0, 100.0, 0.0), 1.0), 1.0);
}

#[test]
fn test_normal_hit() {
    let mut engine = CombatEngine::new();
    let mut health = Health::full(500.0);
    let result = hit(&mut engine, &Stats::new(100.0, 0.0, 0.0), &mut health, 0);

    assert_eq!(result.damage, 90);
    assert!(!result.crit);
    assert!(!result.killed);
    assert_eq!(health.hp, 410.0);
    assert!(!engine.is_hit_stopped(0));
    assert_eq!(engine.screen_shake(), 0.0);

    let view = engine.feedback_view(0);
    assert_eq!(view.damage_numbers.len(), 1);
    let number = &view.damage_numbers[0];
    assert_eq!(number.text, "90");
    assert_eq!(number.position, Position::new(100.0, 80.0));
    assert_eq!(number.color, "#ffffff");
    assert_eq!(number.scale, 1.0);

    assert_eq!(
        engine.drain_events(),
        vec![CombatEvent::Damage {
            target: 3,
            amount: 90,
            crit: false
        }]
    );
}

#[test]
fn test_crit_hit_feedback() {
    let mut engine = CombatEngine::new();
    let mut health = Health::full(500.0);
    let result = hit(&mut engine, &Stats::new(100.0, 0.0, 1.0), &mut health, 1_000);

    assert_eq!(result.damage, 135);
    assert!(result.crit);
    assert!(engine.is_hit_stopped(1_050));
    assert!(!engine.is_hit_stopped(1_100));
    assert_eq!(engine.screen_shake(), 5.0);

    let view = engine.feedback_view(1_000);
    assert!(view.hit_stopped);
    assert_eq!(view.damage_numbers[0].color, "#ff0000");
    assert_eq!(view.damage_numbers[0].scale, 1.5);
}

#[test]
fn test_hit_stop_freezes_update() {
    let mut engine = CombatEngine::new();
    let mut health = Health::full(500.0);
    hit(&mut engine, &Stats::new(100.0, 0.0, 1.0), &mut health, 0);

    engine.update(0.5, 50);
    assert_eq!(engine.screen_shake(), 5.0);
    assert_eq!(engine.feedback_view(50).damage_numbers[0].life, 1.0);

    engine.update(0.5, 100);
    assert!((engine.screen_shake() - 4.5).abs() < EPS);
    let number = &engine.feedback_view(100).damage_numbers[0];
    assert_eq!(number.life, 0.5);
    // Rose by 3 then fell back by nothing yet.
    assert!((number.position.y - 77.0).abs() < EPS);
}

#[test]
fn test_feedback_decay() {
    let mut engine = CombatEngine::new();
    let mut health = Health::full(500.0);
    hit(&mut engine, &Stats::new(100.0, 0.0, 1.0), &mut health, 0);

    for _ in 0..3 {
        engine.update(0.25, 1_000);
    }
    assert_eq!(engine.damage_number_count(), 1);
    engine.update(0.25, 1_000);
    assert_eq!(engine.damage_number_count(), 0);

    // 5 * 0.9^n first drops under 0.5 at n = 22.
    for _ in 4..21 {
        engine.update(0.0, 1_000);
    }
    assert!(engine.screen_shake() > 0.5);
    engine.update(0.0, 1_000);
    assert_eq!(engine.screen_shake(), 0.0);
}

#[test]
fn test_death_emitted_once() {
    let mut engine = CombatEngine::new();
    let mut health = Health::full(50.0);
    let attacker = Stats::new(100.0, 0.0, 0.0);

    let first = hit(&mut engine, &attacker, &mut health, 0);
    assert!(first.killed);
    assert_eq!(health.hp, 0.0);

    let second = hit(&mut engine, &attacker, &mut health, 10);
    assert!(!second.killed);
    assert_eq!(health.hp, 0.0);

    let deaths = engine
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, CombatEvent::Death { .. }))
        .count();
    assert_eq!(deaths, 1);
}

#[test]
fn test_strike_only_produces_feedback() {
    let mut engine = CombatEngine::new();
    let (amount, crit) = engine.strike(
        &Stats::new(40.0, 0.0, 1.0),
        &Stats::new(10.0, 20.0, 0.0),
        Position::new(400.0, 300.0),
        1.0,
        &mut rng(),
        0,
    );
    assert!(crit);
    assert_eq!(amount, 45);
    assert_eq!(engine.damage_number_count(), 1);
    assert!(engine.is_hit_stopped(50));
    assert!(engine.drain_events().is_empty());
}

#[test]
fn test_shake_offset_bounded() {
    let mut engine = CombatEngine::new();
    let mut r = rng();
    assert_eq!(engine.shake_offset(&mut r), Position::default());

    let mut health = Health::full(500.0);
    hit(&mut engine, &Stats::new(100.0, 0.0, 1.0), &mut health, 0);
    for _ in 0..20 {
        let offset = engine.shake_offset(&mut r);
        assert!(offset.x.abs() <= 2.5 && offset.y.abs() <= 2.5);
    }
}

// --- Combo ---

#[test]
fn test_combo_multiplier_growth() {
    let mut combo = ComboSystem::new();
    let expected = [1.0, 1.15, 1.3, 1.45, 1.6];
    for (i, want) in expected.iter().enumerate() {
        let got = combo.add_skill("A1_S1", i as u64 * 1_000);
        assert!((got - want).abs() < EPS, "step {i}: {got} != {want}");
    }

    // Fifth link completed the chain.
    assert_eq!(combo.current(4_000), None);
    let events = combo.drain_events();
    assert_eq!(events.len(), 1);
    match &events[0] {
        CombatEvent::ComboComplete { length, multiplier } => {
            assert_eq!(*length, 5);
            assert!((multiplier - 1.6).abs() < EPS);
        }
        other => panic!("unexpected event {other:?}"),
    }
    assert_eq!(combo.add_skill("A1_S1", 4_500), 1.0);
}

#[test]
fn test_combo_window_edges() {
    let mut combo = ComboSystem::new();
    combo.add_skill("A1_S1", 0);
    // Exactly at the window still chains.
    assert!((combo.add_skill("A1_S3", 3_000) - 1.15).abs() < EPS);

    // One past the window starts over.
    assert_eq!(combo.add_skill("A1_S4", 6_001), 1.0);
    assert_eq!(combo.history().len(), 1);
    assert_eq!(combo.history()[0].skills, ["A1_S1", "A1_S3"]);
    assert_eq!(combo.history()[0].end_ms, 6_001);
}

#[test]
fn test_combo_lazy_expiry() {
    let mut combo = ComboSystem::new();
    combo.add_skill("A1_S1", 0);
    combo.add_skill("A1_S3", 1_000);

    let info = combo.current(2_500).unwrap();
    assert_eq!(info.length, 2);
    assert_eq!(info.time_remaining_ms, 1_500);
    assert!((combo.peek_multiplier(2_500) - 1.15).abs() < EPS);

    assert_eq!(combo.peek_multiplier(4_001), 1.0);
    assert_eq!(combo.multiplier(4_001), 1.0);
    assert_eq!(combo.current(4_001), None);
    assert_eq!(combo.drain_events().len(), 1);
}

// --- Synergy ---

#[test]
fn test_synergy_pairs() {
    let mut synergy = SynergySystem::new();
    assert!(synergy.check("A1_S1").is_none());
    let found = synergy.check("A1_S3").unwrap();
    assert_eq!(found.name, "Crimson Power");
    assert_eq!(synergy.apply(150.0, &found, "A1_S3"), 187.0);

    // The same skill twice never pairs with itself.
    assert!(synergy.check("A1_S3").is_none());
    // Order within the pair does not matter.
    assert_eq!(synergy.check("A1_S1").unwrap().name, "Crimson Power");
    assert_eq!(synergy.check("A1_S4").unwrap().name, "Shadow Crimson");

    assert_eq!(
        synergy.drain_events(),
        vec![CombatEvent::SynergyActivated {
            name: "Crimson Power".into(),
            skill_id: "A1_S3".into()
        }]
    );
}

#[test]
fn test_synergies_for_skill() {
    let synergy = SynergySystem::new();
    let names: Vec<_> = synergy.synergies_for("A1_S1").iter().map(|s| s.name).collect();
    assert_eq!(names, ["Crimson Power", "Shadow Crimson"]);
    assert!(synergy.synergies_for("A1_X1").is_empty());
}

// --- Cancel ---

#[test]
fn test_cancel_window() {
    let mut cancel = CancelSystem::new();
    cancel.register("A1_S1", 0);
    assert!(!cancel.can_cancel("A1_S1", 499));
    assert!(cancel.can_cancel("A1_S1", 500));
    assert!(cancel.can_cancel("A1_S1", 699));
    assert!(!cancel.can_cancel("A1_S1", 700));
    assert!(!cancel.can_cancel("A1_S3", 500));

    assert!(!cancel.cancel("A1_S1", 100));
    assert!(cancel.cancel("A1_S1", 600));
    assert!(!cancel.cancel("A1_S1", 600));
    assert_eq!(
        cancel.drain_events(),
        vec![CombatEvent::SkillCanceled {
            skill_id: "A1_S1".into()
        }]
    );
}

#[test]
fn test_cancel_window_override_and_retention() {
    let mut cancel = CancelSystem::new();
    cancel.set_window("MISSY_S3", 100);
    cancel.register("MISSY_S3", 0);
    assert!(cancel.can_cancel("MISSY_S3", 100));
    assert!(!cancel.can_cancel("MISSY_S3", 300));

    cancel.clear_completed(4_999);
    assert_eq!(cancel.active_count(), 1);
    cancel.clear_completed(5_000);
    assert_eq!(cancel.active_count(), 0);
}

// --- Transformation ---

#[test]
fn test_transformation_expires_lazily() {
    let mut transforms = TransformationSystem::new();
    transforms.activate(CharacterId::A1, "A1_X1", None, 1_000);

    assert!(transforms.is_transformed(CharacterId::A1, 10_999));
    assert!(!transforms.is_transformed(CharacterId::Unique, 2_000));
    assert_eq!(
        transforms.bonuses(CharacterId::A1, 5_000),
        TransformBonuses::ULTIMATE
    );

    assert!(transforms.is_active(CharacterId::A1, 10_999));
    assert!(!transforms.is_active(CharacterId::A1, 11_000));
    assert!(!transforms.is_transformed(CharacterId::A1, 11_000));
    assert_eq!(
        transforms.bonuses(CharacterId::A1, 11_000),
        TransformBonuses::NEUTRAL
    );

    assert_eq!(
        transforms.drain_events(),
        vec![CombatEvent::TransformationActivated {
            character: CharacterId::A1,
            skill_id: "A1_X1".into(),
            duration_ms: 10_000
        }]
    );
}

// --- Fighter ---

#[test]
fn test_roster_and_switch() {
    let mut fighter = Fighter::new(CharacterId::Missy);
    assert_eq!(fighter.max_hp(), 850.0);
    assert_eq!(fighter.profile().attack_power, 1.3);

    fighter.take_damage(100.0);
    fighter.switch_character(CharacterId::Unique);
    assert_eq!(fighter.hp(), 900.0);
    assert_eq!(fighter.max_hp(), 900.0);
    assert!(fighter
        .drain_events()
        .contains(&CombatEvent::CharacterSwitched {
            character: CharacterId::Unique
        }));
}

#[test]
fn test_rage_builds_and_expires() {
    let mut fighter = Fighter::new(CharacterId::A1);
    for i in 0..10 {
        fighter.register_hit(i * 100);
    }
    assert_eq!(fighter.rage(), 20.0);
    assert!(!fighter.activate_rage(1_000));

    for i in 10..60 {
        fighter.register_hit(i * 100);
    }
    assert_eq!(fighter.rage(), 100.0);
    assert!(fighter.activate_rage(6_000));
    assert!(fighter.rage_active());
    assert_eq!(fighter.rage_multiplier(), 2.0);

    fighter.update(15_999);
    assert!(fighter.rage_active());
    fighter.update(16_000);
    assert!(!fighter.rage_active());
    assert_eq!(fighter.rage(), 0.0);
    assert_eq!(fighter.rage_multiplier(), 1.0);

    let events = fighter.drain_events();
    assert!(events.contains(&CombatEvent::ComboMilestone { hits: 10 }));
    assert!(events.contains(&CombatEvent::ComboMilestone { hits: 50 }));
    assert!(events.contains(&CombatEvent::RageActivated { duration_ms: 10_000 }));
    assert!(events.contains(&CombatEvent::RageEnded));
}

#[test]
fn test_hit_streak_breaks_after_idle() {
    let mut fighter = Fighter::new(CharacterId::A1);
    fighter.register_hit(0);
    fighter.register_hit(500);
    fighter.update(2_500);
    assert_eq!(fighter.streak(), 2);
    fighter.update(2_501);
    assert_eq!(fighter.streak(), 0);
    assert_eq!(fighter.best_streak(), 2);
    assert!(fighter
        .drain_events()
        .contains(&CombatEvent::StreakBroken { hits: 2 }));
}

#[test]
fn test_death_and_revive() {
    let mut fighter = Fighter::new(CharacterId::A1);
    fighter.grant_revives(1);
    fighter.take_damage(1_200.0);
    assert_eq!(fighter.hp(), 500.0);
    assert_eq!(fighter.revives(), 0);

    fighter.take_damage(600.0);
    assert_eq!(fighter.hp(), 0.0);
    assert!(!fighter.is_alive());

    let events = fighter.drain_events();
    assert_eq!(events[0], CombatEvent::PlayerRevived { hp: 500.0 });
    assert_eq!(
        events[2],
        CombatEvent::PlayerDied {
            character: CharacterId::A1
        }
    );
    assert_eq!(
        events[3],
        CombatEvent::PlayerDamaged {
            amount: 600.0,
            hp: 0.0,
            max_hp: 1000.0
        }
    );
}

#[test]
fn test_hits_on_a_downed_fighter_are_ignored() {
    let mut fighter = Fighter::new(CharacterId::Unique);
    fighter.grant_revives(1);
    fighter.take_damage(100.0);
    fighter.take_damage(900.0);
    // Revived once, then downed for good.
    fighter.take_damage(450.0);
    assert!(!fighter.is_alive());
    fighter.drain_events();

    fighter.take_damage(10.0);
    fighter.take_damage(10.0);
    assert_eq!(fighter.hp(), 0.0);
    assert!(fighter.drain_events().is_empty());
}

#[test]
fn test_heal_caps_at_max() {
    let mut fighter = Fighter::new(CharacterId::Unique);
    fighter.take_damage(50.0);
    fighter.heal(500.0);
    assert_eq!(fighter.hp(), 900.0);
}

// --- Catalog ---

#[test]
fn test_catalog_layout() {
    for character in CharacterId::ALL {
        let skills: Vec<_> = catalog::skills_for(character).collect();
        assert_eq!(skills.len(), 6);
        assert_eq!(skills[5].slot, SkillSlot::Ultimate);
        assert!(skills[5].chargeable && skills[5].transforms());
        assert!(skills[..5].iter().all(|s| !s.chargeable));
    }
    assert_eq!(catalog::skill_by_id("MISSY_X1").unwrap().damage, 2800.0);
    assert!(catalog::skill_by_id("A1_Z9").is_none());
}

#[test]
fn test_catalog_deliveries() {
    for def in catalog::SKILLS.iter() {
        let summon = def.delivery == Delivery::Summon;
        assert_eq!(summon, def.damage == 0.0, "{}", def.id);
    }
    let cryo = catalog::skill_by_id("UNIQUE_S4").unwrap();
    assert_eq!(cryo.delivery, Delivery::Beam { width: 12.0 });
    assert_eq!(cryo.status, Some(StatusKind::Freeze));
    assert_eq!(
        catalog::skill_by_id("A1_S1").unwrap().delivery,
        Delivery::Bolt { pierce: 1 }
    );
}

// --- Pipeline ---

fn pipeline() -> SkillPipeline<MemoryStorage> {
    SkillPipeline::load(MemoryStorage::new())
}

#[test]
fn test_pipeline_base_cast_and_cooldown() {
    let mut pipeline = pipeline();
    let fighter = Fighter::new(CharacterId::A1);

    let cast = pipeline.activate("A1_S1", &fighter, 0.0, 0).unwrap();
    assert_eq!(cast.damage, 150.0);
    assert_eq!(cast.cooldown, 2.5);
    assert_eq!(cast.range, 200.0);
    assert_eq!(cast.synergy, None);
    assert!(!cast.transformed);

    assert_eq!(
        pipeline.activate("A1_S1", &fighter, 0.0, 1_000),
        Err(SkillError::OnCooldown {
            skill_id: "A1_S1".into(),
            remaining_ms: 1_500
        })
    );
    assert_eq!(pipeline.cooldown_remaining_ms("A1_S1", 2_500), 0);
    assert!(pipeline.cancel.can_cancel("A1_S1", 500));
    assert_eq!(pipeline.mastery.info("A1_S1").total_uses, 1);

    assert_eq!(
        pipeline.activate("NOPE", &fighter, 0.0, 0),
        Err(SkillError::UnknownSkill("NOPE".into()))
    );
}

#[test]
fn test_pipeline_synergy_then_combo() {
    let mut pipeline = pipeline();
    let fighter = Fighter::new(CharacterId::A1);

    pipeline.activate("A1_S1", &fighter, 0.0, 0).unwrap();
    let cast = pipeline.activate("A1_S3", &fighter, 0.0, 1_000).unwrap();
    // 250 * 1.25 = 312, * 1.15 = 358
    assert_eq!(cast.synergy, Some("Crimson Power"));
    assert!((cast.combo_multiplier - 1.15).abs() < EPS);
    assert_eq!(cast.damage, 358.0);

    let events = pipeline.drain_events();
    assert!(events
        .iter()
        .any(|e| matches!(e, CombatEvent::SynergyActivated { name, .. } if name == "Crimson Power")));
}

#[test]
fn test_pipeline_ultimate_charge_and_transform() {
    let mut pipeline = pipeline();
    let fighter = Fighter::new(CharacterId::A1);

    let ultimate = pipeline.activate("A1_X1", &fighter, 1.0, 0).unwrap();
    assert_eq!(ultimate.damage, 760.0);
    assert!(ultimate.transformed);

    // Transformed: 250 * 1.5 = 375, combo * 1.15 = 431, cooldown 4 * 0.8.
    let cast = pipeline.activate("A1_S3", &fighter, 0.0, 1_000).unwrap();
    assert_eq!(cast.damage, 431.0);
    assert!((cast.cooldown - 3.2).abs() < EPS);
}

#[test]
fn test_pipeline_uncharged_ultimate() {
    let mut pipeline = pipeline();
    let fighter = Fighter::new(CharacterId::Unique);
    let cast = pipeline.activate("UNIQUE_X1", &fighter, 0.0, 0).unwrap();
    assert_eq!(cast.damage, 300.0);

    let mut pipeline = self::pipeline();
    let cast = pipeline.activate("UNIQUE_X1", &fighter, 0.5, 0).unwrap();
    // 0.5 + 0.5 * 1.5 = 1.25
    assert_eq!(cast.damage, 375.0);
}

#[test]
fn test_pipeline_rage_and_mods() {
    let mut pipeline = pipeline();
    pipeline
        .mods
        .apply_mod("MISSY_S1", SkillMod::new(ModKind::Damage, 0.1));

    let mut fighter = Fighter::new(CharacterId::Missy);
    for i in 0..50 {
        fighter.register_hit(i);
    }
    assert!(fighter.activate_rage(100));

    // 130 * 1.1 = 143, rage * 2 = 286
    let cast = pipeline.activate("MISSY_S1", &fighter, 0.0, 200).unwrap();
    assert_eq!(cast.damage, 286.0);
}

#[test]
fn test_pipeline_mastery_levels_skill() {
    let mut pipeline = pipeline();
    let fighter = Fighter::new(CharacterId::A1);
    for i in 0..10 {
        pipeline.activate("A1_S1", &fighter, 0.0, i * 10_000).unwrap();
    }
    assert_eq!(pipeline.mastery.info("A1_S1").level, 2);
    assert!(pipeline.drain_events().contains(&CombatEvent::SkillLevelUp {
        skill_id: "A1_S1".into(),
        level: 2
    }));

    // Level 2: 150 * 1.05 = 157, cooldown 2.5 * 0.98.
    let cast = pipeline.activate("A1_S1", &fighter, 0.0, 200_000).unwrap();
    assert_eq!(cast.damage, 157.0);
    assert!((cast.cooldown - 2.45).abs() < EPS);
}

// --- Balance ---

#[test]
fn test_difficulty_multipliers() {
    let normal = balance::multipliers(Difficulty::Normal);
    assert_eq!((normal.damage, normal.cooldown), (1.0, 1.0));
    let easy = balance::multipliers(Difficulty::Easy);
    assert_eq!((easy.damage, easy.cooldown), (1.5, 0.8));
    let hard = balance::multipliers(Difficulty::Hard);
    assert_eq!((hard.damage, hard.cooldown), (0.7, 1.3));
}

#[test]
fn test_parse_difficulty() {
    assert_eq!(balance::parse_difficulty("easy"), Ok(Difficulty::Easy));
    assert_eq!(balance::parse_difficulty("HARD"), Ok(Difficulty::Hard));
    assert_eq!(
        balance::parse_difficulty("nightmare"),
        Err(BalanceError::UnknownPreset("nightmare".into()))
    );
}

#[test]
fn test_pipeline_applies_difficulty() {
    let fighter = Fighter::new(CharacterId::A1);

    let mut hard = pipeline();
    hard.difficulty = Difficulty::Hard;
    let cast = hard.activate("A1_S1", &fighter, 0.0, 0).unwrap();
    assert_eq!(cast.damage, 105.0);
    assert!((cast.cooldown - 3.25).abs() < EPS);
    assert_eq!(hard.cooldown_remaining_ms("A1_S1", 0), 3_250);

    let mut easy = pipeline();
    easy.difficulty = Difficulty::Easy;
    let cast = easy.activate("A1_S1", &fighter, 0.0, 0).unwrap();
    assert_eq!(cast.damage, 225.0);
    assert!((cast.cooldown - 2.0).abs() < EPS);
}

#[test]
fn test_skill_effectiveness() {
    // 150 / 2.5 = 60 dps, default range 200 triples it.
    let slash = balance::skill_effectiveness(catalog::skill_by_id("A1_S1").unwrap());
    assert!((slash.dps - 60.0).abs() < EPS);
    assert_eq!(slash.range, 200.0);
    assert_eq!(slash.aoe, 0.0);
    assert!((slash.total_score - 180.0).abs() < EPS);

    let cyclone = balance::skill_effectiveness(catalog::skill_by_id("A1_S5").unwrap());
    assert!((cyclone.aoe - std::f64::consts::PI * 120.0 * 120.0).abs() < EPS);
    assert!(cyclone.total_score > slash.total_score);

    // A summon with no cooldown still rates without dividing by zero.
    let idle = balance::effectiveness(&Default::default(), None);
    assert_eq!(idle.total_score, 0.0);
}

// --- Projectiles ---

fn cast(delivery: Delivery, damage: f64, range: f64, status: Option<StatusKind>) -> ResolvedSkill {
    ResolvedSkill {
        skill_id: "A1_S1",
        damage,
        cooldown: 1.0,
        range,
        combo_multiplier: 1.0,
        synergy: None,
        transformed: false,
        delivery,
        status,
    }
}

fn targets(points: &[(u32, f64, f64)]) -> Vec<HitTarget> {
    points
        .iter()
        .map(|&(id, x, y)| HitTarget {
            id,
            position: Position::new(x, y),
        })
        .collect()
}

/// Run the manager over `ticks` frames of the 60 Hz clock.
fn fly(manager: &mut ProjectileManager, targets: &[HitTarget], ticks: u64) -> Vec<ProjectileHit> {
    (0..ticks)
        .flat_map(|tick| manager.update(tick * 1000 / 60, targets))
        .collect()
}

#[test]
fn test_summon_launches_nothing() {
    let mut manager = ProjectileManager::new();
    let summon = cast(Delivery::Summon, 0.0, 200.0, None);
    assert_eq!(manager.launch(&summon, Position::new(0.0, 0.0), None, 0), None);
    assert!(manager.is_empty());
}

#[test]
fn test_bolt_stops_after_pierce_count() {
    let mut manager = ProjectileManager::new();
    let bolt = cast(Delivery::Bolt { pierce: 3 }, 50.0, 400.0, None);
    let origin = Position::new(0.0, 0.0);
    manager.launch(&bolt, origin, Some(Position::new(100.0, 0.0)), 0);

    let field = targets(&[
        (1, 100.0, 0.0),
        (2, 200.0, 0.0),
        (3, 300.0, 0.0),
        (4, 350.0, 0.0),
        (5, 100.0, 100.0),
    ]);
    let hits = fly(&mut manager, &field, 60);

    let struck: Vec<u32> = hits.iter().map(|h| h.target).collect();
    assert_eq!(struck, vec![1, 2, 3]);
    assert!(hits.iter().all(|h| h.damage == 50.0));
    assert!(manager.is_empty());
}

#[test]
fn test_bolt_expires_at_range() {
    let mut manager = ProjectileManager::new();
    let bolt = cast(Delivery::Bolt { pierce: 1 }, 50.0, 100.0, None);
    manager.launch(&bolt, Position::new(0.0, 0.0), Some(Position::new(1.0, 0.0)), 0);

    let hits = fly(&mut manager, &targets(&[(1, 300.0, 0.0)]), 60);
    assert!(hits.is_empty());
    assert!(manager.is_empty());
}

#[test]
fn test_beam_pulses_every_enemy_on_its_line() {
    let mut manager = ProjectileManager::new();
    let beam = cast(Delivery::Beam { width: 12.0 }, 100.0, 300.0, Some(StatusKind::Freeze));
    manager.launch(&beam, Position::new(0.0, 0.0), Some(Position::new(300.0, 0.0)), 0);

    let views = manager.views();
    assert_eq!(views[0].shape, ProjectileShape::Beam);
    assert_eq!(views[0].end, Some(Position::new(300.0, 0.0)));

    let field = targets(&[(1, 100.0, 10.0), (2, 250.0, -20.0), (3, 100.0, 40.0), (4, -50.0, 0.0)]);
    let hits = fly(&mut manager, &field, 61);

    for id in [1, 2] {
        let pulses: Vec<&ProjectileHit> = hits.iter().filter(|h| h.target == id).collect();
        assert_eq!(pulses.len(), 10);
        let total: f64 = pulses.iter().map(|h| h.damage).sum();
        assert!((total - 100.0).abs() < EPS);
        assert!(pulses.iter().all(|h| h.status == Some(StatusKind::Freeze)));
    }
    assert!(hits.iter().all(|h| h.target == 1 || h.target == 2));
    assert!(manager.is_empty());
}

#[test]
fn test_burst_hits_every_enemy_in_radius_once() {
    let mut manager = ProjectileManager::new();
    let burst = cast(Delivery::Burst { radius: 120.0 }, 300.0, 200.0, Some(StatusKind::Stun));
    manager.launch(&burst, Position::new(0.0, 0.0), None, 0);

    let field = targets(&[(1, 50.0, 0.0), (2, 0.0, -119.0), (3, 84.0, 84.0), (4, 121.0, 0.0)]);
    let first = manager.update(0, &field);
    let mut struck: Vec<u32> = first.iter().map(|h| h.target).collect();
    struck.sort();
    assert_eq!(struck, vec![1, 2, 3]);
    assert!(first.iter().all(|h| h.damage == 300.0 && h.status == Some(StatusKind::Stun)));

    assert!(manager.update(100, &field).is_empty());
    assert_eq!(manager.len(), 1);
    manager.update(500, &field);
    assert!(manager.is_empty());
}
