//! Duplicate-free random color sequences.
//!
//! Each position is drawn uniformly from the palette; a draw that repeats a
//! color already placed is thrown away and redrawn. The result is uniform
//! over all colors not yet used at that position.

use smallvec::SmallVec;

use super::color::Color;
use super::error::{MastermindError, Result};
use super::rng::IndexSource;

/// An ordered run of colors. Inline for the usual four-slot code.
pub type Sequence<T = Color> = SmallVec<[T; 4]>;

/// Generate `length` pairwise-distinct entries drawn from `palette`.
///
/// Fails with `InvalidConfiguration` when `palette` repeats an entry or
/// `length` exceeds the palette size, since no duplicate-free sequence
/// exists.
///
/// ```
/// use mastermind_core::core::{generate_sequence, GameRng, Palette};
///
/// let palette = Palette::default();
/// let mut rng = GameRng::new(42);
///
/// let code = generate_sequence(palette.colors(), 4, &mut rng).unwrap();
/// assert_eq!(code.len(), 4);
///
/// assert!(generate_sequence(palette.colors(), 8, &mut rng).is_err());
/// ```
pub fn generate_sequence<T, R>(palette: &[T], length: usize, rng: &mut R) -> Result<Sequence<T>>
where
    T: Copy + PartialEq,
    R: IndexSource + ?Sized,
{
    if let Some(i) = (1..palette.len()).find(|&i| palette[..i].contains(&palette[i])) {
        return Err(MastermindError::configuration(format!(
            "palette entry {i} repeats an earlier entry"
        )));
    }
    if length > palette.len() {
        return Err(MastermindError::configuration(format!(
            "code length {length} exceeds palette size {}",
            palette.len()
        )));
    }

    let mut sequence: Sequence<T> = SmallVec::with_capacity(length);
    let mut rejected = 0usize;

    while sequence.len() < length {
        let candidate = palette[rng.next_index(palette.len())];
        if sequence.contains(&candidate) {
            rejected += 1;
            continue;
        }
        sequence.push(candidate);
    }

    tracing::debug!(length, rejected, "generated color sequence");
    Ok(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, Palette};
    use std::collections::VecDeque;

    /// Replays a fixed list of indices.
    struct Scripted(VecDeque<usize>);

    impl IndexSource for Scripted {
        fn next_index(&mut self, upper: usize) -> usize {
            let index = self.0.pop_front().expect("script exhausted");
            assert!(index < upper);
            index
        }
    }

    #[test]
    fn test_scripted_draws_skip_repeats() {
        let palette = Palette::default();
        // Red, Red (rejected), Blue, Red (rejected), White, Blue (rejected), Green
        let mut source = Scripted(VecDeque::from(vec![1, 1, 3, 1, 0, 3, 2]));

        let code = generate_sequence(palette.colors(), 4, &mut source).unwrap();

        assert_eq!(
            code.as_slice(),
            &[Color::Red, Color::Blue, Color::White, Color::Green]
        );
        assert!(source.0.is_empty());
    }

    #[test]
    fn test_first_draw_is_never_rejected() {
        let palette = Palette::default();
        let mut source = Scripted(VecDeque::from(vec![6]));

        let code = generate_sequence(palette.colors(), 1, &mut source).unwrap();
        assert_eq!(code.as_slice(), &[Color::Cyan]);
    }

    #[test]
    fn test_full_palette_is_a_permutation() {
        let palette = Palette::default();
        let mut rng = GameRng::new(3);

        let code = generate_sequence(palette.colors(), palette.len(), &mut rng).unwrap();

        assert_eq!(code.len(), palette.len());
        for color in palette.colors() {
            assert!(code.contains(color));
        }
    }

    #[test]
    fn test_zero_length() {
        let mut source = Scripted(VecDeque::new());
        let code = generate_sequence(&[1u8, 2, 3][..], 0, &mut source).unwrap();
        assert!(code.is_empty());
    }

    #[test]
    fn test_length_exceeds_palette() {
        let mut rng = GameRng::new(42);
        let err = generate_sequence(&[Color::Red, Color::Blue][..], 3, &mut rng).unwrap_err();
        assert!(matches!(err, MastermindError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_repeated_palette_entries() {
        let mut rng = GameRng::new(42);
        let err = generate_sequence(&[Color::Red, Color::Red][..], 2, &mut rng).unwrap_err();
        assert!(matches!(err, MastermindError::InvalidConfiguration { .. }));

        // Rejected even when the length alone would fit
        let err = generate_sequence(&[Color::Red, Color::Blue, Color::Red][..], 1, &mut rng).unwrap_err();
        assert!(matches!(err, MastermindError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_opaque_identifiers() {
        let mut rng = GameRng::new(9);
        let code = generate_sequence(&["a", "b", "c", "d", "e"][..], 5, &mut rng).unwrap();
        let mut sorted = code.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, vec!["a", "b", "c", "d", "e"]);
    }
}
