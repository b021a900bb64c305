//! Commentary line synthesis.
//!
//! One line per tick, built from the credited player and the points drawn
//! for the possession, plus the fixed game-over line.

/// Suffix for a possession worth `points`.
///
/// The simulator only draws 0..=3; the final arm covers out-of-range values
/// so a widened draw range cannot produce a nonsense line.
fn action_suffix(points: u32) -> &'static str {
    match points {
        0 => "missed a shot",
        1 => "made 1 of 2 free throws",
        2 => "lays it in for 2",
        3 => "drains a 3",
        _ => "had a 4 point play!",
    }
}

/// Full per-tick commentary line: `"<player> <suffix>"`.
pub fn last_action(player: &str, points: u32) -> String {
    format!("{} {}", player, action_suffix(points))
}

/// Final line delivered by `end()`: `"The game has ended. <Winner> win!"`.
pub fn game_over(winning_team: &str) -> String {
    format!("The game has ended. {} win!", capitalize_words(winning_team))
}

/// Uppercase the first letter of every whitespace-separated word.
///
/// Word joins are normalized to single spaces; team names are single-spaced
/// display strings, not free text.
pub fn capitalize_words(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_table() {
        assert_eq!(last_action("Shinjuku", 0), "Shinjuku missed a shot");
        assert_eq!(last_action("Shibuya", 1), "Shibuya made 1 of 2 free throws");
        assert_eq!(last_action("Ebisu", 2), "Ebisu lays it in for 2");
        assert_eq!(last_action("Meguro", 3), "Meguro drains a 3");
    }

    #[test]
    fn test_out_of_range_fallback() {
        assert_eq!(last_action("Gotanda", 4), "Gotanda had a 4 point play!");
        assert_eq!(last_action("Gotanda", 99), "Gotanda had a 4 point play!");
    }

    #[test]
    fn test_game_over_capitalizes_winner() {
        assert_eq!(game_over("team tokyo"), "The game has ended. Team Tokyo win!");
        assert_eq!(game_over("Team Osaka"), "The game has ended. Team Osaka win!");
    }

    #[test]
    fn test_capitalize_words_handles_edge_shapes() {
        assert_eq!(capitalize_words(""), "");
        assert_eq!(capitalize_words("osaka"), "Osaka");
        assert_eq!(capitalize_words("  double  spaced  "), "Double Spaced");
    }
}
