pub mod game_state;
pub mod team;

pub use game_state::GameState;
pub use team::{default_away_team, default_home_team, Team, PLACEHOLDER_PLAYER};
