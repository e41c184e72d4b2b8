//! Statistical checks on code generation.
//!
//! Each position should be uniform over the palette, and once a color is
//! placed the following positions should be uniform over what remains.
//! Thresholds are chi-square critical values at p = 0.0001.

use std::collections::HashSet;

use mastermind_core::core::{generate_sequence, Color, GameRng, MastermindConfig, Palette};
use mastermind_core::games::mastermind::Round;

const TRIALS: usize = 70_000;

/// Chi-square critical values at p = 0.0001, indexed by degrees of freedom.
const CRITICAL: [f64; 7] = [0.0, 15.137, 18.421, 21.108, 23.513, 25.745, 27.856];

fn chi_square(observed: &[usize]) -> f64 {
    let total: usize = observed.iter().sum();
    let expected = total as f64 / observed.len() as f64;
    observed
        .iter()
        .map(|&o| {
            let diff = o as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

fn draw_codes(seed: u64) -> (Palette, Vec<Vec<Color>>) {
    let palette = Palette::default();
    let mut rng = GameRng::new(seed);
    let codes = (0..TRIALS)
        .map(|_| generate_sequence(palette.colors(), 4, &mut rng).unwrap().to_vec())
        .collect();
    (palette, codes)
}

/// Test that every position is uniform across the whole palette.
#[test]
fn test_each_position_uniform() {
    let (palette, codes) = draw_codes(42);

    for position in 0..4 {
        let mut counts = vec![0usize; palette.len()];
        for code in &codes {
            let index = palette.index_of(code[position]).unwrap();
            counts[index] += 1;
        }

        let stat = chi_square(&counts);
        let df = palette.len() - 1;
        assert!(
            stat < CRITICAL[df],
            "position {position}: chi-square {stat:.2} >= {} ({counts:?})",
            CRITICAL[df]
        );
    }
}

/// Count the color after `prefix` in every code that starts with it, and
/// assert those counts are uniform over the colors `prefix` leaves.
fn assert_uniform_after(palette: &Palette, codes: &[Vec<Color>], prefix: &[Color], min_samples: usize) {
    let remaining: Vec<Color> = palette
        .colors()
        .iter()
        .copied()
        .filter(|c| !prefix.contains(c))
        .collect();
    let mut counts = vec![0usize; remaining.len()];

    for code in codes.iter().filter(|code| code.starts_with(prefix)) {
        let next = code[prefix.len()];
        assert!(!prefix.contains(&next), "{next} repeated after {prefix:?}");
        let index = remaining.iter().position(|&c| c == next).unwrap();
        counts[index] += 1;
    }

    assert!(counts.iter().sum::<usize>() > min_samples, "too few codes start with {prefix:?}");
    let stat = chi_square(&counts);
    let df = remaining.len() - 1;
    assert!(
        stat < CRITICAL[df],
        "after {prefix:?}: chi-square {stat:.2} >= {} ({counts:?})",
        CRITICAL[df]
    );
}

/// Test that the second position is uniform over the colors the first left.
#[test]
fn test_second_position_uniform_given_first() {
    let (palette, codes) = draw_codes(7);
    assert_uniform_after(&palette, &codes, &[Color::White], 5_000);
}

/// Test that the third position is uniform over the colors the first two left.
#[test]
fn test_third_position_uniform_given_prefix() {
    let (palette, codes) = draw_codes(11);
    assert_uniform_after(&palette, &codes, &[Color::White, Color::Red], 1_000);
}

/// Test that the last position is uniform over the colors the first three left.
#[test]
fn test_last_position_uniform_given_prefix() {
    let (palette, codes) = draw_codes(13);
    assert_uniform_after(&palette, &codes, &[Color::White, Color::Red, Color::Green], 200);
}

/// Test that restarting a round doesn't keep repeating the same target.
#[test]
fn test_restart_codes_vary() {
    let mut round = Round::new(MastermindConfig::default().with_seed(99)).unwrap();

    let mut targets = HashSet::new();
    for _ in 0..200 {
        targets.insert(round.target().to_vec());
        round.restart().unwrap();
    }
    // 840 possible codes; 200 restarts should cover far more than a handful
    assert!(targets.len() > 100);
}
