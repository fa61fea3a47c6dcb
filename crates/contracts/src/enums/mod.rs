pub mod action_type;
pub mod skill;
pub mod tab_id;

pub use action_type::ActionType;
pub use skill::Skill;
pub use tab_id::TabId;
