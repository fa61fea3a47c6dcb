//! Queries over the opaque game data sections used by the panels.

use contracts::shared::game_data::GameData;
use serde_json::Value;

pub const ITEM_DETAIL_MAP: &str = "itemDetailMap";
pub const ACTION_DETAIL_MAP: &str = "actionDetailMap";
pub const COMBAT_MONSTER_DETAIL_MAP: &str = "combatMonsterDetailMap";

/// Number of entries in a top-level map section (0 if absent)
pub fn section_len(data: &GameData, section: &str) -> usize {
    data.section(section)
        .and_then(Value::as_object)
        .map(|m| m.len())
        .unwrap_or(0)
}

fn actions_of_type<'a>(data: &'a GameData, type_hrid: &'a str) -> impl Iterator<Item = &'a Value> {
    data.section(ACTION_DETAIL_MAP)
        .and_then(Value::as_object)
        .into_iter()
        .flat_map(|m| m.values())
        .filter(move |action| action["type"].as_str() == Some(type_hrid))
}

/// Sorted names of the actions with the given action type hrid
pub fn action_names(data: &GameData, type_hrid: &str) -> Vec<String> {
    let mut names: Vec<String> = actions_of_type(data, type_hrid)
        .filter_map(|a| a["name"].as_str().map(str::to_string))
        .collect();
    names.sort();
    names
}

/// Distinct, sorted action category hrids for an action type
pub fn action_categories(data: &GameData, type_hrid: &str) -> Vec<String> {
    let mut categories: Vec<String> = actions_of_type(data, type_hrid)
        .filter_map(|a| a["category"].as_str().map(str::to_string))
        .collect();
    categories.sort();
    categories.dedup();
    categories
}

/// Sorted names of the actions in one category
pub fn actions_in_category(data: &GameData, type_hrid: &str, category: &str) -> Vec<String> {
    let mut names: Vec<String> = actions_of_type(data, type_hrid)
        .filter(|a| a["category"].as_str() == Some(category))
        .filter_map(|a| a["name"].as_str().map(str::to_string))
        .collect();
    names.sort();
    names
}

/// Item names containing `query` (case-insensitive), sorted, at most `limit`
pub fn find_items(data: &GameData, query: &str, limit: usize) -> Vec<String> {
    let needle = query.trim().to_lowercase();
    let mut names: Vec<String> = data
        .section(ITEM_DETAIL_MAP)
        .and_then(Value::as_object)
        .into_iter()
        .flat_map(|m| m.values())
        .filter_map(|item| item["name"].as_str())
        .filter(|name| name.to_lowercase().contains(&needle))
        .map(str::to_string)
        .collect();
    names.sort();
    names.truncate(limit);
    names
}

/// Last path segment of an hrid, e.g. `/action_categories/cooking/cakes` -> `cakes`
pub fn hrid_tail(hrid: &str) -> &str {
    hrid.rsplit('/').next().unwrap_or(hrid)
}
