use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Fallback name used when a roster has no players to credit.
pub const PLACEHOLDER_PLAYER: &str = "Player";

/// A team entry in the simulation: display name plus an ordered roster.
///
/// Teams are fixed at construction and never mutated by the simulator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Team {
    pub name: String,
    pub players: Vec<String>,
}

impl Team {
    pub fn new(name: impl Into<String>, players: Vec<String>) -> Self {
        Self { name: name.into(), players }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::InvalidConfig("team name must not be empty".to_string()));
        }
        Ok(())
    }

    /// Pick a uniformly random player to credit with an action.
    ///
    /// An empty roster is legal; it yields [`PLACEHOLDER_PLAYER`].
    pub fn random_player<R: Rng>(&self, rng: &mut R) -> &str {
        if self.players.is_empty() {
            return PLACEHOLDER_PLAYER;
        }
        let idx = rng.gen_range(0..self.players.len());
        &self.players[idx]
    }
}

/// Default home roster.
pub fn default_home_team() -> Team {
    Team::new(
        "Team Tokyo",
        vec![
            "Shinjuku".to_string(),
            "Shibuya".to_string(),
            "Ebisu".to_string(),
            "Meguro".to_string(),
            "Gotanda".to_string(),
        ],
    )
}

/// Default away roster.
pub fn default_away_team() -> Team {
    Team::new(
        "Team Osaka",
        vec![
            "Osaka".to_string(),
            "Tsuruhashi".to_string(),
            "Momodani".to_string(),
            "Fukushima".to_string(),
            "Temma".to_string(),
            "Tennoji".to_string(),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_validate_rejects_blank_name() {
        let team = Team::new("   ", vec!["A".to_string()]);
        assert!(team.validate().is_err());

        let team = Team::new("Team Tokyo", Vec::new());
        assert!(team.validate().is_ok(), "empty roster is legal");
    }

    #[test]
    fn test_random_player_comes_from_roster() {
        let team = default_home_team();
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..50 {
            let picked = team.random_player(&mut rng).to_string();
            assert!(team.players.contains(&picked), "unexpected player: {}", picked);
        }
    }

    #[test]
    fn test_empty_roster_uses_placeholder() {
        let team = Team::new("Ghosts", Vec::new());
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(team.random_player(&mut rng), PLACEHOLDER_PLAYER);
    }

    #[test]
    fn test_team_serde_roundtrip() {
        let team = default_away_team();
        let json = serde_json::to_string(&team).expect("serialize team");
        let restored: Team = serde_json::from_str(&json).expect("deserialize team");
        assert_eq!(restored, team);
    }
}
