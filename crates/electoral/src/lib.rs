use bevy::prelude::*;

pub mod bar_chart;
pub mod color;
pub mod config;
pub mod dataset;
pub mod dataset_error;
pub mod totals;
pub mod treemap;
pub mod view_state;

#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

use dataset::ElectionData;
use totals::ElectoralTotals;
use treemap::TreemapLayout;
use view_state::{OverlayVisible, ViewMode};

/// Compute the electoral totals once the dataset is in place.
fn compute_totals(data: Res<ElectionData>, mut totals: ResMut<ElectoralTotals>) {
    *totals = ElectoralTotals::from_records(data.records());
    info!(
        "Loaded {} states: {} electoral votes (R {} / D {})",
        data.len(),
        totals.overall,
        totals.republican,
        totals.democrat
    );
}

pub struct ElectoralPlugin;

impl Plugin for ElectoralPlugin {
    fn build(&self, app: &mut App) {
        // init_resource keeps a dataset inserted before the plugin.
        app.init_resource::<ElectionData>()
            .init_resource::<ElectoralTotals>()
            .init_resource::<TreemapLayout>()
            .init_resource::<ViewMode>()
            .init_resource::<OverlayVisible>()
            .add_systems(Startup, compute_totals)
            .add_systems(
                Update,
                view_state::refresh_treemap_layout.run_if(resource_changed::<ViewMode>),
            );
    }
}
