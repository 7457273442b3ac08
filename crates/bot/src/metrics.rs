//! Board metrics used by the bot heuristics.

use crate::core::Grid;

/// Weight of `max_height / rows` in the danger estimate
pub const HEIGHT_RISK_WEIGHT: f64 = 0.58;
/// Weight of the capped hole count in the danger estimate
pub const HOLE_RISK_WEIGHT: f64 = 0.30;
/// Weight of the capped bumpiness in the danger estimate
pub const ROUGH_RISK_WEIGHT: f64 = 0.12;

/// Hole count at which hole risk saturates
const HOLE_RISK_CAP: f64 = 22.0;
/// Bumpiness at which roughness risk saturates
const ROUGH_RISK_CAP: f64 = 38.0;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GridMetrics {
    /// Stack height per column (0 for an empty column)
    pub heights: Vec<usize>,
    /// Empty cells below the topmost filled cell of their column
    pub holes: usize,
    pub max_height: usize,
    pub aggregate_height: usize,
    /// Sum of absolute height differences of adjacent columns
    pub bumpiness: usize,
    /// Rows missing one or two cells
    pub near_full_rows: usize,
}

pub fn analyze(grid: &Grid) -> GridMetrics {
    let (cols, rows) = (grid.cols(), grid.rows());
    let mut heights = vec![0usize; cols];
    let mut holes = 0usize;

    for (x, height) in heights.iter_mut().enumerate() {
        let x = x as i32;
        let Some(top) = (0..rows).find(|&y| grid.is_occupied(x, y as i32)) else {
            continue;
        };
        *height = rows - top;
        holes += (top + 1..rows)
            .filter(|&y| !grid.is_occupied(x, y as i32))
            .count();
    }

    let max_height = heights.iter().copied().max().unwrap_or(0);
    let aggregate_height = heights.iter().sum();
    let bumpiness = heights
        .windows(2)
        .map(|w| w[0].abs_diff(w[1]))
        .sum();

    let near_full_rows = (0..rows)
        .map(|y| grid.filled_in_row(y))
        .filter(|&filled| filled + 2 >= cols && filled < cols)
        .count();

    GridMetrics {
        heights,
        holes,
        max_height,
        aggregate_height,
        bumpiness,
        near_full_rows,
    }
}

/// Danger in roughly [0, 1]: mostly stack height, then holes, then roughness
pub fn estimate_danger(metrics: &GridMetrics, rows: usize) -> f64 {
    let height_risk = metrics.max_height as f64 / rows as f64;
    let hole_risk = (metrics.holes as f64 / HOLE_RISK_CAP).min(1.0);
    let rough_risk = (metrics.bumpiness as f64 / ROUGH_RISK_CAP).min(1.0);
    height_risk * HEIGHT_RISK_WEIGHT + hole_risk * HOLE_RISK_WEIGHT + rough_risk * ROUGH_RISK_WEIGHT
}
