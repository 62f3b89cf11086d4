//! Weighted prize draw.
//!
//! All selection math is integer-only: with total weight `S`, a uniform roll
//! in `[1, S]` walks the prize list in catalog order and picks the first
//! prize whose cumulative weight reaches the roll. Each prize wins with
//! probability exactly `weight / S`. The random source is injected so tests
//! can drive the draw with a seeded generator.

use rand::Rng;

use super::catalog::Prize;

/// Extra full rotations before the wheel settles, presentation only.
const FULL_TURNS: f64 = 4.0;

/// Sum of active prize weights; zero and negative weights contribute nothing.
pub fn total_weight(prizes: &[Prize]) -> i64 {
    prizes.iter().map(|p| i64::from(p.weight.max(0))).sum()
}

/// Resolve a roll in `[1, total_weight]` to a prize index by cumulative walk.
///
/// Pure function: the fairness and boundary behavior of the draw are fully
/// determined here. Returns None for rolls outside the range.
pub fn pick_by_roll(prizes: &[Prize], roll: i64) -> Option<usize> {
    if roll < 1 {
        return None;
    }
    let mut cumulative = 0i64;
    for (idx, prize) in prizes.iter().enumerate() {
        cumulative += i64::from(prize.weight.max(0));
        if cumulative >= roll {
            return Some(idx);
        }
    }
    None
}

/// Draw a prize index with probability proportional to its weight.
///
/// Returns None when the list is empty or carries no positive weight.
pub fn weighted_pick<R: Rng + ?Sized>(prizes: &[Prize], rng: &mut R) -> Option<usize> {
    let total = total_weight(prizes);
    if total <= 0 {
        return None;
    }
    let roll = rng.gen_range(1..=total);
    pick_by_roll(prizes, roll)
}

/// Target rotation angle for the winning slice, in degrees.
///
/// The wheel face divides into `slice_count` equal slices; the angle lands the
/// pointer inside slice `winner_index`, offset by random jitter for visual
/// variety. Presentation data only — no bearing on fairness.
pub fn target_angle<R: Rng + ?Sized>(
    winner_index: usize,
    slice_count: usize,
    rng: &mut R,
) -> f64 {
    if slice_count == 0 {
        return 0.0;
    }
    let slice = 360.0 / slice_count as f64;
    let jitter = rng.gen_range(-0.35..0.35) * slice;
    FULL_TURNS * 360.0 + (360.0 - (winner_index as f64 + 0.5) * slice) + jitter
}
