//! Skill tree: prerequisite-gated node unlocks paid from a point budget.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use a1k_core::events::CombatEvent;

use crate::keys;
use crate::persist;
use crate::storage::{Storage, StorageError};

/// A purchasable node.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillNode {
    pub id: String,
    pub name: String,
    pub description: String,
    pub cost: u32,
    /// Node ids that must be unlocked first.
    pub prerequisites: Vec<String>,
    /// Layout position in the tree view.
    pub x: f64,
    pub y: f64,
    /// Skill this node is attached to, if any.
    pub skill_id: Option<String>,
    /// Named stat bonuses granted while unlocked.
    pub bonuses: HashMap<String, f64>,
}

impl SkillNode {
    /// Node costing one point with no prerequisites.
    pub fn new(id: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            cost: 1,
            prerequisites: Vec::new(),
            x: 0.0,
            y: 0.0,
            skill_id: None,
            bonuses: HashMap::new(),
        }
    }

    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    pub fn requires(mut self, node_id: impl Into<String>) -> Self {
        self.prerequisites.push(node_id.into());
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn for_skill(mut self, skill_id: impl Into<String>) -> Self {
        self.skill_id = Some(skill_id.into());
        self
    }

    pub fn with_bonus(mut self, stat: impl Into<String>, value: f64) -> Self {
        self.bonuses.insert(stat.into(), value);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnlockError {
    #[error("no skill tree node `{0}`")]
    UnknownNode(String),
    #[error("node `{0}` is already unlocked")]
    AlreadyUnlocked(String),
    #[error("node `{node}` requires `{prerequisite}`")]
    MissingPrerequisite { node: String, prerequisite: String },
    #[error("node costs {needed} points, {available} available")]
    InsufficientPoints { needed: u32, available: u32 },
}

/// Persisted shape.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct TreeSave {
    unlocked_nodes: Vec<String>,
    skill_points: u32,
}

pub struct SkillTree<S: Storage> {
    nodes: Vec<SkillNode>,
    /// Unlock order is preserved.
    unlocked: Vec<String>,
    points: u32,
    storage: S,
    events: Vec<CombatEvent>,
}

impl<S: Storage> SkillTree<S> {
    /// Restore unlocks and points from `storage`. Nodes are added afterwards.
    pub fn load(storage: S) -> Self {
        let save: TreeSave = persist::load_or_default(&storage, keys::SKILL_TREE);
        Self {
            nodes: Vec::new(),
            unlocked: save.unlocked_nodes,
            points: save.skill_points,
            storage,
            events: Vec::new(),
        }
    }

    pub fn add_node(&mut self, node: SkillNode) {
        self.nodes.push(node);
    }

    pub fn node(&self, node_id: &str) -> Option<&SkillNode> {
        self.nodes.iter().find(|n| n.id == node_id)
    }

    pub fn nodes(&self) -> &[SkillNode] {
        &self.nodes
    }

    /// Spend points on `node_id`.
    pub fn unlock(&mut self, node_id: &str) -> Result<(), UnlockError> {
        let node = self
            .node(node_id)
            .ok_or_else(|| UnlockError::UnknownNode(node_id.to_string()))?;
        let cost = node.cost;
        let missing = node
            .prerequisites
            .iter()
            .find(|p| !self.is_unlocked(p))
            .cloned();

        if self.is_unlocked(node_id) {
            return Err(UnlockError::AlreadyUnlocked(node_id.to_string()));
        }
        if let Some(prerequisite) = missing {
            return Err(UnlockError::MissingPrerequisite {
                node: node_id.to_string(),
                prerequisite,
            });
        }
        if self.points < cost {
            debug!(node_id, cost, points = self.points, "unlock rejected");
            return Err(UnlockError::InsufficientPoints {
                needed: cost,
                available: self.points,
            });
        }

        self.points -= cost;
        self.unlocked.push(node_id.to_string());
        info!(node_id, points_left = self.points, "skill node unlocked");
        self.events.push(CombatEvent::NodeUnlocked {
            node_id: node_id.to_string(),
        });
        self.save();
        Ok(())
    }

    pub fn is_unlocked(&self, node_id: &str) -> bool {
        self.unlocked.iter().any(|id| id == node_id)
    }

    pub fn add_points(&mut self, amount: u32) {
        self.points = self.points.saturating_add(amount);
        self.save();
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn unlocked(&self) -> &[String] {
        &self.unlocked
    }

    /// Sum of every unlocked node's bonuses, keyed by stat.
    pub fn total_bonuses(&self) -> HashMap<String, f64> {
        let mut totals = HashMap::new();
        for node in self.nodes.iter().filter(|n| self.is_unlocked(&n.id)) {
            for (stat, value) in &node.bonuses {
                *totals.entry(stat.clone()).or_insert(0.0) += value;
            }
        }
        totals
    }

    pub fn flush(&self) -> Result<(), StorageError> {
        persist::write_json(&self.storage, keys::SKILL_TREE, &self.snapshot())
    }

    pub fn drain_events(&mut self) -> Vec<CombatEvent> {
        std::mem::take(&mut self.events)
    }

    fn snapshot(&self) -> TreeSave {
        TreeSave {
            unlocked_nodes: self.unlocked.clone(),
            skill_points: self.points,
        }
    }

    fn save(&self) {
        persist::save_or_warn(&self.storage, keys::SKILL_TREE, &self.snapshot());
    }
}
