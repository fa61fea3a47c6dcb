use serde::{Deserialize, Serialize};

/// Action types of the gathering skills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    Milking,
    Foraging,
    Woodcutting,
}

impl ActionType {
    /// Game hrid, e.g. `/action_types/milking`
    pub fn hrid(&self) -> &'static str {
        match self {
            ActionType::Milking => "/action_types/milking",
            ActionType::Foraging => "/action_types/foraging",
            ActionType::Woodcutting => "/action_types/woodcutting",
        }
    }
}
