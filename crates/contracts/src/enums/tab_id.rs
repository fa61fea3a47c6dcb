use serde::{Deserialize, Serialize};

/// Identifiers of the panels in the main tab strip.
///
/// The wire form (`as_str`) is what gets persisted in the session record,
/// so existing variants must keep their keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TabId {
    Character,
    #[default]
    Production,
    ItemLookup,
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
    Market,
}

impl TabId {
    /// All tabs in display order.
    pub const ALL: [TabId; 14] = [
        TabId::Character,
        TabId::Production,
        TabId::ItemLookup,
        TabId::Milking,
        TabId::Foraging,
        TabId::Woodcutting,
        TabId::Cheesesmithing,
        TabId::Crafting,
        TabId::Tailoring,
        TabId::Cooking,
        TabId::Brewing,
        TabId::Enhancing,
        TabId::Combat,
        TabId::Market,
    ];

    /// Stable key used in storage and DOM attributes
    pub fn as_str(&self) -> &'static str {
        match self {
            TabId::Character => "character",
            TabId::Production => "production",
            TabId::ItemLookup => "itemLookup",
            TabId::Milking => "milking",
            TabId::Foraging => "foraging",
            TabId::Woodcutting => "woodcutting",
            TabId::Cheesesmithing => "cheesesmithing",
            TabId::Crafting => "crafting",
            TabId::Tailoring => "tailoring",
            TabId::Cooking => "cooking",
            TabId::Brewing => "brewing",
            TabId::Enhancing => "enhancing",
            TabId::Combat => "combat",
            TabId::Market => "market",
        }
    }

    /// Title shown in the tab strip
    pub fn label(&self) -> &'static str {
        match self {
            TabId::Character => "Character",
            TabId::Production => "Production",
            TabId::ItemLookup => "Item Lookup",
            TabId::Milking => "Milking",
            TabId::Foraging => "Foraging",
            TabId::Woodcutting => "Woodcutting",
            TabId::Cheesesmithing => "Cheesesmithing",
            TabId::Crafting => "Crafting",
            TabId::Tailoring => "Tailoring",
            TabId::Cooking => "Cooking",
            TabId::Brewing => "Brewing",
            TabId::Enhancing => "Enhancing",
            TabId::Combat => "Combat",
            TabId::Market => "Market",
        }
    }

    /// Parse a stored key. Unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        TabId::ALL.into_iter().find(|tab| tab.as_str() == key)
    }

    /// Tabs that are hidden unless switched on in the config.
    pub fn is_optional(&self) -> bool {
        matches!(self, TabId::Character)
    }
}

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key_known() {
        assert_eq!(TabId::from_key("combat"), Some(TabId::Combat));
        assert_eq!(TabId::from_key("itemLookup"), Some(TabId::ItemLookup));
        assert_eq!(TabId::from_key("character"), Some(TabId::Character));
    }

    #[test]
    fn test_from_key_unknown() {
        assert_eq!(TabId::from_key("fishing"), None);
        assert_eq!(TabId::from_key("ItemLookup"), None);
        assert_eq!(TabId::from_key(""), None);
    }

    #[test]
    fn test_every_key_parses_back() {
        for tab in TabId::ALL {
            assert_eq!(TabId::from_key(tab.as_str()), Some(tab));
        }
    }

    #[test]
    fn test_serde_uses_wire_key() {
        let json = serde_json::to_string(&TabId::ItemLookup).unwrap();
        assert_eq!(json, "\"itemLookup\"");
    }

    #[test]
    fn test_default_and_optional() {
        assert_eq!(TabId::default(), TabId::Production);
        let optional: Vec<_> = TabId::ALL.iter().filter(|t| t.is_optional()).collect();
        assert_eq!(optional, vec![&TabId::Character]);
    }
}
