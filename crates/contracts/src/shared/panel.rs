use crate::enums::{ActionType, Skill, TabId};

/// What a tab renders.
///
/// Gathering and production skills share one panel kind each and differ
/// only in their parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelSpec {
    Character,
    Production,
    ItemLookup,
    Gathering { skill: Skill, action_type: ActionType },
    ActionCategory { skill: Skill },
    Enhancing,
    Combat,
    Market,
}

impl PanelSpec {
    pub fn for_tab(tab: TabId) -> Self {
        match tab {
            TabId::Character => PanelSpec::Character,
            TabId::Production => PanelSpec::Production,
            TabId::ItemLookup => PanelSpec::ItemLookup,
            TabId::Milking => PanelSpec::Gathering {
                skill: Skill::Milking,
                action_type: ActionType::Milking,
            },
            TabId::Foraging => PanelSpec::Gathering {
                skill: Skill::Foraging,
                action_type: ActionType::Foraging,
            },
            TabId::Woodcutting => PanelSpec::Gathering {
                skill: Skill::Woodcutting,
                action_type: ActionType::Woodcutting,
            },
            TabId::Cheesesmithing => PanelSpec::ActionCategory {
                skill: Skill::Cheesesmithing,
            },
            TabId::Crafting => PanelSpec::ActionCategory {
                skill: Skill::Crafting,
            },
            TabId::Tailoring => PanelSpec::ActionCategory {
                skill: Skill::Tailoring,
            },
            TabId::Cooking => PanelSpec::ActionCategory {
                skill: Skill::Cooking,
            },
            TabId::Brewing => PanelSpec::ActionCategory {
                skill: Skill::Brewing,
            },
            TabId::Enhancing => PanelSpec::Enhancing,
            TabId::Combat => PanelSpec::Combat,
            TabId::Market => PanelSpec::Market,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gathering_tabs_share_panel_kind() {
        let gathering: Vec<_> = TabId::ALL
            .into_iter()
            .filter(|t| matches!(PanelSpec::for_tab(*t), PanelSpec::Gathering { .. }))
            .collect();
        assert_eq!(
            gathering,
            vec![TabId::Milking, TabId::Foraging, TabId::Woodcutting]
        );
        assert_eq!(
            PanelSpec::for_tab(TabId::Foraging),
            PanelSpec::Gathering {
                skill: Skill::Foraging,
                action_type: ActionType::Foraging
            }
        );
    }

    #[test]
    fn test_production_skills_keyed_by_skill_only() {
        assert_eq!(
            PanelSpec::for_tab(TabId::Brewing),
            PanelSpec::ActionCategory {
                skill: Skill::Brewing
            }
        );
        let count = TabId::ALL
            .into_iter()
            .filter(|t| matches!(PanelSpec::for_tab(*t), PanelSpec::ActionCategory { .. }))
            .count();
        assert_eq!(count, 5);
    }
}
