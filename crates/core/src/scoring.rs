//! Scoring module - points, levels and fall speed
//!
//! - Line clears score `lines * 100 * level` using the level in effect when
//!   the piece locked (before the new lines are counted).
//! - Level is `lines / 10 + 1`.
//! - Fall interval starts at 1000ms and drops 50ms per level, floored at 100ms.

use crate::types::{
    BASE_FALL_INTERVAL_MS, FALL_INTERVAL_STEP_MS, HARD_DROP_POINTS, LINES_PER_LEVEL,
    LINE_CLEAR_POINTS, MIN_FALL_INTERVAL_MS, SOFT_DROP_POINTS, START_LEVEL,
};

/// Points for clearing `lines` rows at `level`
pub fn line_clear_score(lines: u32, level: u32) -> u32 {
    lines
        .saturating_mul(LINE_CLEAR_POINTS)
        .saturating_mul(level)
}

/// Calculate drop score
/// soft_drop: +1 per cell
/// hard_drop: +2 per cell
pub fn drop_score(cells: u32, is_hard_drop: bool) -> u32 {
    if is_hard_drop {
        cells.saturating_mul(HARD_DROP_POINTS)
    } else {
        cells.saturating_mul(SOFT_DROP_POINTS)
    }
}

/// Level for a running total of cleared lines
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + START_LEVEL
}

/// Milliseconds per gravity step at `level`
pub fn fall_interval_ms(level: u32) -> u32 {
    let speedup = level
        .saturating_sub(START_LEVEL)
        .saturating_mul(FALL_INTERVAL_STEP_MS);
    BASE_FALL_INTERVAL_MS
        .saturating_sub(speedup)
        .max(MIN_FALL_INTERVAL_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_scores() {
        assert_eq!(line_clear_score(0, 1), 0);
        assert_eq!(line_clear_score(1, 1), 100);
        assert_eq!(line_clear_score(4, 1), 400);
        assert_eq!(line_clear_score(2, 3), 600);
    }

    #[test]
    fn test_drop_scores() {
        assert_eq!(drop_score(10, false), 10);
        assert_eq!(drop_score(10, true), 20);
        assert_eq!(drop_score(0, true), 0);
    }

    #[test]
    fn test_level_calculation() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(29), 3);
        assert_eq!(level_for_lines(100), 11);
    }

    #[test]
    fn test_fall_intervals() {
        assert_eq!(fall_interval_ms(1), 1000);
        assert_eq!(fall_interval_ms(2), 950);
        assert_eq!(fall_interval_ms(10), 550);
        assert_eq!(fall_interval_ms(18), 150);
        assert_eq!(fall_interval_ms(19), 100);
        assert_eq!(fall_interval_ms(20), 100);
        assert_eq!(fall_interval_ms(u32::MAX), 100);
    }

    #[test]
    fn test_fall_interval_never_increases_with_level() {
        let mut prev = fall_interval_ms(1);
        for level in 2..40 {
            let next = fall_interval_ms(level);
            assert!(next <= prev);
            prev = next;
        }
    }
}
