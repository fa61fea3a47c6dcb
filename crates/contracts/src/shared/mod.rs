pub mod game_data;
pub mod panel;
pub mod session;
