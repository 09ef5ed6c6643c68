//! View controller state: which chart is shown and whether the
//! explanatory overlay is open.
//!
//! Both are plain resources written by UI click handlers and keybinds, and
//! read on the next frame. Changing the view to [`ViewMode::Treemap`]
//! rebuilds [`TreemapLayout`] from the immutable dataset.

use bevy::prelude::*;

use crate::config::CONTAINER_WIDTH;
use crate::dataset::ElectionData;
use crate::treemap::TreemapLayout;

/// Which visualization is drawn in the main panel.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    #[default]
    Treemap,
    Bar,
}

impl ViewMode {
    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Treemap => "Proportional Treemap",
            ViewMode::Bar => "Bar Chart",
        }
    }

    /// Heading shown above the main visualization.
    pub fn heading(self) -> &'static str {
        match self {
            ViewMode::Treemap => "Treemap Proportional to Electoral Votes",
            ViewMode::Bar => "Distribution by Electoral Votes",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Treemap => ViewMode::Bar,
            ViewMode::Bar => ViewMode::Treemap,
        }
    }

    pub const ALL: [ViewMode; 2] = [ViewMode::Treemap, ViewMode::Bar];
}

/// Resource controlling whether the "flaws of the original map" overlay is visible.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlayVisible(pub bool);

impl OverlayVisible {
    pub fn toggle(&mut self) {
        self.0 = !self.0;
    }
}

/// Rebuild the treemap layout when the view (re)enters treemap mode.
pub fn refresh_treemap_layout(
    mode: Res<ViewMode>,
    data: Res<ElectionData>,
    mut layout: ResMut<TreemapLayout>,
) {
    debug!("View mode: {:?}", *mode);
    if *mode != ViewMode::Treemap {
        return;
    }
    *layout = TreemapLayout::compute(data.records(), CONTAINER_WIDTH);
}
