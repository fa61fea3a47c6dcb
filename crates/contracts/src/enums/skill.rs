use serde::{Deserialize, Serialize};

/// Game skills a panel can be parameterized with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Skill {
    Milking,
    Foraging,
    Woodcutting,
    Cheesesmithing,
    Crafting,
    Tailoring,
    Cooking,
    Brewing,
    Enhancing,
    Combat,
}

impl Skill {
    /// Game hrid, e.g. `/skills/milking`
    pub fn hrid(&self) -> &'static str {
        match self {
            Skill::Milking => "/skills/milking",
            Skill::Foraging => "/skills/foraging",
            Skill::Woodcutting => "/skills/woodcutting",
            Skill::Cheesesmithing => "/skills/cheesesmithing",
            Skill::Crafting => "/skills/crafting",
            Skill::Tailoring => "/skills/tailoring",
            Skill::Cooking => "/skills/cooking",
            Skill::Brewing => "/skills/brewing",
            Skill::Enhancing => "/skills/enhancing",
            Skill::Combat => "/skills/combat",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Skill::Milking => "Milking",
            Skill::Foraging => "Foraging",
            Skill::Woodcutting => "Woodcutting",
            Skill::Cheesesmithing => "Cheesesmithing",
            Skill::Crafting => "Crafting",
            Skill::Tailoring => "Tailoring",
            Skill::Cooking => "Cooking",
            Skill::Brewing => "Brewing",
            Skill::Enhancing => "Enhancing",
            Skill::Combat => "Combat",
        }
    }
}
