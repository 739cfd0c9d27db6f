//! Running score tracked by the engine.

#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub enemies_defeated: u32,
    pub enemies_total: u32,
    pub damage_dealt: u64,
    pub damage_taken: u64,
}
