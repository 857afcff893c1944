//! Difficulty-graded guess restrictions
//!
//! Medium and above look at the accumulated letter knowledge. Hard and Expert
//! replay only the immediately preceding guess, not the full history.

use super::{Difficulty, LetterKnowledge, Rejection};
use crate::core::{Attempt, Verdict, Word};

/// Check `guess` against the restrictions of `difficulty`
///
/// Checks run in a fixed order and the first failure is reported:
/// 1. Absent letters reused (Medium, Hard, Expert)
/// 2. Previous greens kept in place (Hard, Expert)
/// 3. Previous yellows moved away from their position (Expert)
/// 4. Previous yellows present somewhere (Hard, Expert)
///
/// # Errors
/// Returns the first `Rejection` the guess triggers.
pub fn check(
    difficulty: Difficulty,
    guess: &Word,
    knowledge: &LetterKnowledge,
    previous: Option<&Attempt>,
) -> Result<(), Rejection> {
    if difficulty.forbids_absent_letters()
        && let Some(&letter) = guess.letters().iter().find(|&&l| knowledge.is_absent(l))
    {
        return Err(Rejection::AbsentLetterReused(char::from(letter)));
    }

    if !difficulty.replays_previous_guess() {
        return Ok(());
    }
    let Some(previous) = previous else {
        return Ok(());
    };

    for (position, letter, verdict) in previous.letters() {
        if verdict == Verdict::Correct && guess.letter_at(position) != letter {
            return Err(Rejection::PositionMismatch {
                position,
                letter: char::from(letter),
            });
        }
    }

    for (position, letter, verdict) in previous.letters() {
        if verdict != Verdict::Present {
            continue;
        }
        if difficulty.requires_relocation() && guess.letter_at(position) == letter {
            return Err(Rejection::LetterMustRelocate {
                position,
                letter: char::from(letter),
            });
        }
        if !guess.contains(letter) {
            return Err(Rejection::RequiredLetterMissing(char::from(letter)));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn setup(guess: &str, solution: &str) -> (LetterKnowledge, Attempt) {
        let attempt = Attempt::scored(word(guess), &word(solution));
        let mut knowledge = LetterKnowledge::new();
        knowledge.record(&attempt);
        (knowledge, attempt)
    }

    #[test]
    fn easy_accepts_anything() {
        let (knowledge, previous) = setup("crane", "crank");
        assert_eq!(
            check(Difficulty::Easy, &word("eerie"), &knowledge, Some(&previous)),
            Ok(())
        );
    }

    #[test]
    fn medium_rejects_absent_letters_only() {
        let (knowledge, previous) = setup("crane", "crank");
        assert_eq!(
            check(Difficulty::Medium, &word("eerie"), &knowledge, Some(&previous)),
            Err(Rejection::AbsentLetterReused('e'))
        );
        // Ignores positions in Medium
        assert_eq!(
            check(Difficulty::Medium, &word("sloth"), &knowledge, Some(&previous)),
            Ok(())
        );
    }

    #[test]
    fn hard_requires_greens_in_place() {
        // CRANE vs CRANK: greens at 0-3, E absent
        let (knowledge, previous) = setup("crane", "crank");
        assert_eq!(
            check(Difficulty::Hard, &word("crash"), &knowledge, Some(&previous)),
            Err(Rejection::PositionMismatch {
                position: 3,
                letter: 'n'
            })
        );
        assert_eq!(
            check(Difficulty::Hard, &word("blank"), &knowledge, Some(&previous)),
            Err(Rejection::PositionMismatch {
                position: 0,
                letter: 'c'
            })
        );
        assert_eq!(
            check(Difficulty::Hard, &word("crank"), &knowledge, Some(&previous)),
            Ok(())
        );
    }

    #[test]
    fn hard_requires_yellows_somewhere() {
        // TRACE vs CATER: T, R, A, C, E all yellow
        let (knowledge, previous) = setup("trace", "cater");
        assert_eq!(
            check(Difficulty::Hard, &word("cater"), &knowledge, Some(&previous)),
            Ok(())
        );
        assert_eq!(
            check(Difficulty::Hard, &word("crate"), &knowledge, Some(&previous)),
            Ok(())
        );
        assert_eq!(
            check(Difficulty::Hard, &word("carat"), &knowledge, Some(&previous)),
            Err(Rejection::RequiredLetterMissing('e'))
        );
    }

    #[test]
    fn expert_requires_yellows_to_move() {
        let (knowledge, previous) = setup("trace", "cater");
        // CRATE keeps R at position 1 where it was yellow
        assert_eq!(
            check(Difficulty::Expert, &word("crate"), &knowledge, Some(&previous)),
            Err(Rejection::LetterMustRelocate {
                position: 1,
                letter: 'r'
            })
        );
        assert_eq!(
            check(Difficulty::Expert, &word("cater"), &knowledge, Some(&previous)),
            Ok(())
        );
    }

    #[test]
    fn only_the_previous_guess_is_replayed() {
        let solution = word("crank");
        let first = Attempt::scored(word("crane"), &solution);
        let second = Attempt::scored(word("sloth"), &solution);
        let mut knowledge = LetterKnowledge::new();
        knowledge.record(&first);
        knowledge.record(&second);

        // Greens from CRANE are not enforced once SLOTH was accepted
        assert_eq!(
            check(Difficulty::Hard, &word("drink"), &knowledge, Some(&second)),
            Ok(())
        );
    }

    #[test]
    fn first_guess_has_no_previous() {
        let knowledge = LetterKnowledge::new();
        assert_eq!(
            check(Difficulty::Expert, &word("crane"), &knowledge, None),
            Ok(())
        );
    }
}
