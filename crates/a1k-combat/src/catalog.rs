//! Slotted skills of each playable character.

use a1k_core::enums::{CharacterId, StatusKind};
use a1k_core::types::SkillStats;

use a1k_core::enums::CharacterId::{Missy, Unique, A1};
use self::SkillSlot::{Numbered, Ultimate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillSlot {
    /// Numbered slot 1 to 5.
    Numbered(u8),
    /// The ultimate slot.
    Ultimate,
}

/// How a cast reaches its targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Delivery {
    /// Spawns an ally; deals no hit.
    Summon,
    /// Travels from the caster, hitting up to `pierce` enemies once each.
    Bolt { pierce: u32 },
    /// Line from the caster, pulsing on every enemy within `width / 2`.
    Beam { width: f64 },
    /// Ring around the caster, hitting every enemy inside `radius` once.
    Burst { radius: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillDef {
    pub id: &'static str,
    pub name: &'static str,
    pub character: CharacterId,
    pub slot: SkillSlot,
    pub damage: f64,
    /// Seconds.
    pub cooldown: f64,
    /// Character level that unlocks the skill.
    pub unlock_level: u32,
    pub chargeable: bool,
    pub delivery: Delivery,
    /// Condition left on every enemy the skill hits.
    pub status: Option<StatusKind>,
    pub description: &'static str,
}

impl SkillDef {
    pub fn stats(&self) -> SkillStats {
        SkillStats {
            damage: self.damage,
            cooldown: self.cooldown,
            range: None,
        }
    }

    /// Chargeable ultimates transform their caster.
    pub fn transforms(&self) -> bool {
        self.slot == SkillSlot::Ultimate && self.chargeable
    }

    const fn delivered(self, delivery: Delivery) -> Self {
        SkillDef { delivery, ..self }
    }

    const fn inflicts(self, status: StatusKind) -> Self {
        SkillDef {
            status: Some(status),
            ..self
        }
    }
}

#[allow(clippy::too_many_arguments)]
const fn skill(
    id: &'static str,
    name: &'static str,
    character: CharacterId,
    slot: SkillSlot,
    damage: f64,
    cooldown: f64,
    unlock_level: u32,
    description: &'static str,
) -> SkillDef {
    SkillDef {
        id,
        name,
        character,
        slot,
        damage,
        cooldown,
        unlock_level,
        chargeable: matches!(slot, SkillSlot::Ultimate),
        delivery: Delivery::Bolt { pierce: 1 },
        status: None,
        description,
    }
}

pub const SKILLS: [SkillDef; 18] = [
    skill("A1_S1", "Crimson Slash", A1, Numbered(1), 150.0, 2.5, 1, "3-hit crimson X-wave slash"),
    skill("A1_S2", "Shadow Clone", A1, Numbered(2), 0.0, 15.0, 20, "Summon combat clone ally")
        .delivered(Delivery::Summon),
    skill("A1_S3", "Power Wave", A1, Numbered(3), 250.0, 4.0, 1, "4-hit power wave combo")
        .delivered(Delivery::Bolt { pierce: 3 }),
    skill("A1_S4", "Phantom Strike", A1, Numbered(4), 320.0, 20.0, 30, "Teleport and execute combo")
        .inflicts(StatusKind::Stun),
    skill("A1_S5", "Crimson Cyclone", A1, Numbered(5), 300.0, 24.0, 40, "3-blink aerial spin attack")
        .delivered(Delivery::Burst { radius: 120.0 }),
    skill("A1_X1", "Rift Cutter", A1, Ultimate, 380.0, 28.0, 50, "Twin dimension rifts")
        .delivered(Delivery::Burst { radius: 150.0 }),
    skill("UNIQUE_S1", "Plasma Blast", Unique, Numbered(1), 120.0, 2.0, 1, "3-hit plasma bolt barrage")
        .inflicts(StatusKind::Burn),
    skill("UNIQUE_S2", "Combat Drone", Unique, Numbered(2), 0.0, 15.0, 20, "Summon combat drone ally")
        .delivered(Delivery::Summon),
    skill("UNIQUE_S3", "Power Beam", Unique, Numbered(3), 400.0, 8.0, 1, "Channeled energy beam")
        .delivered(Delivery::Beam { width: 12.0 }),
    skill("UNIQUE_S4", "Cryo Rail", Unique, Numbered(4), 180.0, 20.0, 30, "Ice rail beam and cryo rounds")
        .delivered(Delivery::Beam { width: 12.0 })
        .inflicts(StatusKind::Freeze),
    skill("UNIQUE_S5", "Ion Drill", Unique, Numbered(5), 220.0, 24.0, 40, "Steerable ion drill beam")
        .delivered(Delivery::Bolt { pierce: 4 }),
    skill("UNIQUE_X1", "Hyper Beam", Unique, Ultimate, 300.0, 28.0, 50, "Massive channeled beam")
        .delivered(Delivery::Beam { width: 24.0 }),
    skill("MISSY_S1", "Crescent Slash", Missy, Numbered(1), 130.0, 2.5, 1, "3-hit crescent wave attack"),
    skill("MISSY_S2", "Spirit Pet", Missy, Numbered(2), 0.0, 15.0, 20, "Summon loyal pet companion")
        .delivered(Delivery::Summon),
    skill("MISSY_S3", "Rapid Fire", Missy, Numbered(3), 200.0, 4.0, 1, "4-hit rapid pistol shots")
        .delivered(Delivery::Bolt { pierce: 4 }),
    skill("MISSY_S4", "Starlight Rail", Missy, Numbered(4), 180.0, 6.0, 30, "Rail beam and boomerang comets")
        .delivered(Delivery::Beam { width: 12.0 }),
    skill("MISSY_S5", "Storm Vortex", Missy, Numbered(5), 720.0, 8.0, 40, "Spinning cyclone and shotgun volley")
        .delivered(Delivery::Burst { radius: 140.0 })
        .inflicts(StatusKind::Stun),
    skill("MISSY_X1", "Fortune Cannon", Missy, Ultimate, 2800.0, 20.0, 50, "Golden coin mega-beam")
        .delivered(Delivery::Beam { width: 24.0 }),
];

pub fn skill_by_id(id: &str) -> Option<&'static SkillDef> {
    SKILLS.iter().find(|s| s.id == id)
}

/// Skills of `character` in slot order, ultimate last.
pub fn skills_for(character: CharacterId) -> impl Iterator<Item = &'static SkillDef> {
    SKILLS.iter().filter(move |s| s.character == character)
}
