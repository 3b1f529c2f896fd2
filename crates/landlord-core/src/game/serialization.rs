use crate::game::engine::{EngineConfig, GameEngine};
use serde::{Deserialize, Serialize};

/// Restorable description of a session: the shuffle seed plus how many
/// rounds have been started. Restoring re-deals the captured round from
/// the seed; mid-round progress is intentionally not captured.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameSnapshot {
    pub seed: u64,
    pub round_number: u32,
}

impl GameSnapshot {
    pub fn capture(engine: &GameEngine) -> Self {
        GameSnapshot {
            seed: engine.seed(),
            round_number: engine.round_number(),
        }
    }

    pub fn restore(self, config: EngineConfig) -> GameEngine {
        GameEngine::with_seed_round(config, self.seed, self.round_number)
    }

    pub fn to_json(engine: &GameEngine) -> serde_json::Result<String> {
        let snapshot = Self::capture(engine);
        serde_json::to_string_pretty(&snapshot)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
