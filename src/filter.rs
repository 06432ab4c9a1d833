//! Eligibility filter for plottable players.

use crate::core::schema::Player;

/// A player is plottable iff they debuted professionally and carry a
/// strictly positive career WAR.
pub fn is_eligible(player: &Player) -> bool {
    player.debut.is_some() && matches!(player.war, Some(war) if war > 0.0)
}

/// Select the plottable subsequence of `players`, preserving input order.
///
/// Pure and idempotent: filtering an already-filtered sequence returns the
/// same sequence.
pub fn eligible(players: &[Player]) -> Vec<&Player> {
    players.iter().filter(|p| is_eligible(p)).collect()
}
