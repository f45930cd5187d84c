//! Scoring module - line-clear points, drop points, level and gravity speed
//!
//! The four-line bonus is added on top of the per-line points rather than
//! replacing them, so four rows at level `L` are worth `800 * L`.

use crate::types::{
    BASE_FALL_MS, FALL_STEP_MS, FOUR_LINE_BONUS, HARD_DROP_POINTS_PER_ROW, LINES_PER_LEVEL,
    LINE_SCORE_BASE, MIN_FALL_MS, SOFT_DROP_POINTS,
};

/// Points for clearing `lines` rows in one lock at `level` (1-based)
pub fn line_clear_score(lines: u32, level: u32) -> u32 {
    if lines == 0 {
        return 0;
    }
    let mut points = lines * LINE_SCORE_BASE * level;
    if lines == 4 {
        points += FOUR_LINE_BONUS * level;
    }
    points
}

/// Points for moving a piece down `rows` rows by soft or hard drop
pub fn drop_score(rows: u32, hard: bool) -> u32 {
    if hard {
        rows * HARD_DROP_POINTS_PER_ROW
    } else {
        rows * SOFT_DROP_POINTS
    }
}

/// Level reached after `total_lines` cleared lines (starts at 1)
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval in milliseconds at `level`
pub fn fall_speed_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(FALL_STEP_MS);
    BASE_FALL_MS.saturating_sub(speedup).max(MIN_FALL_MS)
}
