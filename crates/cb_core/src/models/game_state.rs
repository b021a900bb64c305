use serde::{Deserialize, Serialize};

/// Immutable scoreboard snapshot delivered to the observer.
///
/// A fresh value is produced on every tick and on game end; snapshots are
/// never mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameState {
    pub home_score: u32,
    pub away_score: u32,
    /// Name of the team credited on the most recent tick.
    /// Empty before the first tick.
    pub scoring_team_name: String,
    /// Free-text description of the last action.
    pub last_action: String,
}

impl GameState {
    pub fn new(
        home_score: u32,
        away_score: u32,
        scoring_team_name: impl Into<String>,
        last_action: impl Into<String>,
    ) -> Self {
        Self {
            home_score,
            away_score,
            scoring_team_name: scoring_team_name.into(),
            last_action: last_action.into(),
        }
    }

    pub fn total_points(&self) -> u32 {
        self.home_score + self.away_score
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(0, 0, "", "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_pregame_zero_state() {
        let state = GameState::default();
        assert_eq!(state.home_score, 0);
        assert_eq!(state.away_score, 0);
        assert!(state.scoring_team_name.is_empty());
        assert!(state.last_action.is_empty());
    }

    #[test]
    fn test_snapshot_serializes_with_field_names() {
        let state = GameState::new(12, 9, "Team Tokyo", "Shibuya drains a 3");
        let json = serde_json::to_value(&state).expect("serialize snapshot");
        assert_eq!(json["home_score"], 12);
        assert_eq!(json["away_score"], 9);
        assert_eq!(json["scoring_team_name"], "Team Tokyo");
        assert_eq!(json["last_action"], "Shibuya drains a 3");
    }
}
