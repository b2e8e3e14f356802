//! Random board command
//!
//! Deals a random board from a word list so the solver can be tried without typing
//! one in.

use crate::solver::SolverError;
use rand::Rng;
use rand::seq::SliceRandom;

/// A dealt board: the team's words and everything else
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub words_to_hit: Vec<String>,
    pub words_to_avoid: Vec<String>,
}

/// Deal `hit_count` words to hit and `avoid_count` words to avoid
///
/// The word list is shuffled once; the avoid words come off the top, the hit words
/// right after. The same seed always deals the same board.
///
/// # Errors
///
/// Returns [`SolverError::BoardTooSmall`] if the list has fewer than
/// `hit_count + avoid_count` words, or [`SolverError::NoWordsToHit`] if `hit_count`
/// is zero.
pub fn deal_board<R: Rng + ?Sized>(
    words: &[String],
    hit_count: usize,
    avoid_count: usize,
    rng: &mut R,
) -> Result<Board, SolverError> {
    if hit_count == 0 {
        return Err(SolverError::NoWordsToHit);
    }

    let needed = hit_count.checked_add(avoid_count).unwrap_or(usize::MAX);
    if words.len() < needed {
        return Err(SolverError::BoardTooSmall {
            needed,
            available: words.len(),
        });
    }

    let mut deck = words.to_vec();
    deck.shuffle(rng);
    deck.truncate(needed);

    let words_to_hit = deck.split_off(avoid_count);
    Ok(Board {
        words_to_hit,
        words_to_avoid: deck,
    })
}
