//! Grid layout arithmetic.

use crate::consts::wallboard_consts::{CHROME_RESERVE_PX, MAX_COLUMNS};

/// Column/row split for a number of cells and the height each row gets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub columns: usize,
    pub rows: usize,
    /// May be zero or negative for tiny viewports; callers accept that.
    pub cell_height: f64,
}

impl GridLayout {
    /// Layout for a pixel viewport, reserving the standard page chrome.
    pub fn compute(cell_count: usize, viewport_height: f64) -> Self {
        Self::compute_with_reserve(cell_count, viewport_height, CHROME_RESERVE_PX)
    }

    /// Layout with an explicit amount of vertical space kept for chrome.
    pub fn compute_with_reserve(cell_count: usize, viewport_height: f64, reserve: f64) -> Self {
        if cell_count == 0 {
            return Self {
                columns: 0,
                rows: 0,
                cell_height: 0.0,
            };
        }
        let columns = cell_count.min(MAX_COLUMNS);
        let rows = cell_count.div_ceil(columns);
        let cell_height = (viewport_height - reserve) / rows as f64;
        Self {
            columns,
            rows,
            cell_height,
        }
    }
}
