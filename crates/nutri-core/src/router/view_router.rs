use crate::{MountedView, View};

use log::debug;

/// Holds the single mounted orchestrator.
pub struct ViewRouter {
    mounted: MountedView,
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self {
            mounted: MountedView::fresh(View::default()),
        }
    }
}

impl ViewRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> View {
        self.mounted.view()
    }

    /// Mounts `view` fresh. Reselecting the current view keeps its state.
    ///
    /// Returns true if a new orchestrator was mounted.
    pub fn select(&mut self, view: View) -> bool {
        if self.current() == view {
            return false;
        }

        debug!("Navigating {} -> {}", self.current(), view);
        self.mounted = MountedView::fresh(view);
        true
    }

    /// Replaces the current orchestrator with a fresh one of the same view.
    pub fn remount(&mut self) {
        self.mounted = MountedView::fresh(self.current());
    }

    pub fn mounted(&self) -> &MountedView {
        &self.mounted
    }

    pub fn mounted_mut(&mut self) -> &mut MountedView {
        &mut self.mounted
    }
}
