//! Screenshot request waiting for the next rendered frame.

use std::path::PathBuf;

use bevy_ecs::prelude::Resource;

/// Destination of a screenshot requested this frame.
///
/// The render system captures the framebuffer after drawing and clears the
/// request.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingScreenshot(pub Option<PathBuf>);

impl PendingScreenshot {
    pub fn request(&mut self, path: PathBuf) {
        self.0 = Some(path);
    }

    pub fn take(&mut self) -> Option<PathBuf> {
        self.0.take()
    }
}
