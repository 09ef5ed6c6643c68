//! # TestChart — headless harness for the view controller
//!
//! Wraps `bevy::app::App` + `ElectoralPlugin` so tests can flip the view
//! toggles and inspect the resulting resources without a window or egui.

use bevy::prelude::*;

use crate::dataset::ElectionData;
use crate::totals::ElectoralTotals;
use crate::treemap::TreemapLayout;
use crate::view_state::{OverlayVisible, ViewMode};
use crate::ElectoralPlugin;

pub struct TestChart {
    app: App,
}

impl Default for TestChart {
    fn default() -> Self {
        Self::new()
    }
}

impl TestChart {
    /// Chart over the built-in 2016 dataset.
    pub fn new() -> Self {
        Self::with_data(ElectionData::builtin())
    }

    /// Chart over a custom dataset, inserted before the plugin so it wins
    /// over the built-in default.
    pub fn with_data(data: ElectionData) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(data);
        app.add_plugins(ElectoralPlugin);
        // Run one update so Startup systems execute and the first layout is built.
        app.update();
        Self { app }
    }

    pub fn tick(&mut self) -> &mut Self {
        self.app.update();
        self
    }

    /// Switch the view the way a button click does, then run a frame.
    pub fn click_view(&mut self, mode: ViewMode) -> &mut Self {
        self.app
            .world_mut()
            .resource_mut::<ViewMode>()
            .set_if_neq(mode);
        self.tick()
    }

    /// Flip the overlay the way the overlay button does, then run a frame.
    pub fn click_overlay(&mut self) -> &mut Self {
        self.app.world_mut().resource_mut::<OverlayVisible>().toggle();
        self.tick()
    }

    pub fn view_mode(&self) -> ViewMode {
        *self.app.world().resource::<ViewMode>()
    }

    pub fn overlay_visible(&self) -> bool {
        self.app.world().resource::<OverlayVisible>().0
    }

    pub fn layout(&self) -> &TreemapLayout {
        self.app.world().resource::<TreemapLayout>()
    }

    pub fn totals(&self) -> ElectoralTotals {
        *self.app.world().resource::<ElectoralTotals>()
    }

    pub fn data(&self) -> &ElectionData {
        self.app.world().resource::<ElectionData>()
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }
}
