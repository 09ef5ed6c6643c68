//! Shelf-packing treemap layout.
//!
//! Not a recursive treemap: states are sorted by electoral votes and laid
//! out left to right in rows, wrapping when the next cell would cross the
//! right inset. Cell area is proportional to electoral votes.

use bevy::prelude::*;

use crate::config::{
    AREA_PER_VOTE, CELL_ASPECT, COLUMN_GAP, CONTAINER_WIDTH, LABEL_LARGE_MIN_WIDTH,
    LABEL_MEDIUM_MIN_WIDTH, LAYOUT_MARGIN, ROW_GAP,
};
use crate::dataset::StateResult;

/// A state placed on the treemap surface, in logical units.
#[derive(Debug, Clone, PartialEq)]
pub struct TreemapCell {
    pub result: StateResult,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl TreemapCell {
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn label_sizes(&self) -> LabelSizes {
        LabelSizes::for_width(self.width)
    }
}

/// Font sizes for the three text lines of a cell: name, votes, margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelSizes {
    pub name: f32,
    pub votes: f32,
    pub margin: f32,
}

impl LabelSizes {
    pub fn for_width(width: f64) -> Self {
        if width > LABEL_LARGE_MIN_WIDTH {
            Self { name: 12.0, votes: 10.0, margin: 8.0 }
        } else if width > LABEL_MEDIUM_MIN_WIDTH {
            Self { name: 10.0, votes: 8.0, margin: 6.0 }
        } else {
            Self { name: 8.0, votes: 6.0, margin: 4.0 }
        }
    }
}

/// Cell size for a given vote count: `area = votes * 8`,
/// `width = sqrt(area * 1.5)`, `height = area / width`.
pub fn cell_size(electoral_votes: u32) -> (f64, f64) {
    let area = electoral_votes as f64 * AREA_PER_VOTE;
    let width = (area * CELL_ASPECT).sqrt();
    (width, area / width)
}

/// Lay out `records` into rows no wider than `container_width`.
///
/// Output is sorted by descending electoral votes; ties keep input order.
/// The input slice is left untouched. A cell wider than the container is
/// still placed, overflowing the right edge.
pub fn layout(records: &[StateResult], container_width: f64) -> Vec<TreemapCell> {
    let mut sorted: Vec<&StateResult> = records.iter().collect();
    sorted.sort_by(|a, b| b.electoral_votes.cmp(&a.electoral_votes));

    let mut cells = Vec::with_capacity(sorted.len());
    let mut current_x = LAYOUT_MARGIN;
    let mut current_y = LAYOUT_MARGIN;
    let mut row_height: f64 = 0.0;

    for result in sorted {
        let (width, height) = cell_size(result.electoral_votes);

        if current_x + width > container_width - LAYOUT_MARGIN {
            current_x = LAYOUT_MARGIN;
            current_y += row_height + ROW_GAP;
            row_height = 0.0;
        }

        if current_x + width > container_width {
            warn!(
                "Treemap cell for {} ({:.1} wide) overflows the {:.0}-unit container",
                result.state, width, container_width
            );
        }

        cells.push(TreemapCell {
            result: result.clone(),
            x: current_x,
            y: current_y,
            width,
            height,
        });

        current_x += width + COLUMN_GAP;
        row_height = row_height.max(height);
    }

    cells
}

/// Cached treemap layout for the current dataset.
///
/// Rebuilt whenever the view switches to the treemap; see
/// [`crate::view_state::refresh_treemap_layout`].
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct TreemapLayout {
    pub container_width: f64,
    pub cells: Vec<TreemapCell>,
}

impl Default for TreemapLayout {
    fn default() -> Self {
        Self {
            container_width: CONTAINER_WIDTH,
            cells: Vec::new(),
        }
    }
}

impl TreemapLayout {
    pub fn compute(records: &[StateResult], container_width: f64) -> Self {
        Self {
            container_width,
            cells: layout(records, container_width),
        }
    }

    /// Lowest cell edge, or 0.0 for an empty layout.
    pub fn extent(&self) -> f64 {
        self.cells.iter().map(TreemapCell::bottom).fold(0.0, f64::max)
    }
}
