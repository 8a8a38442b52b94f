//! Screenshot event and observer.
//!
//! The observer only asks for a name and records the destination in
//! [`PendingScreenshot`]; the framebuffer is captured by the render system at
//! the end of the next frame it draws.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{error, info};

use crate::levelfile::resolve_name;
use crate::resources::editorconfig::EditorConfig;
use crate::resources::prompt::Prompt;
use crate::resources::screenshot::PendingScreenshot;

/// Extension used for screenshots.
pub const SCREENSHOT_EXTENSION: &str = "png";

/// Request to capture the window into `<screenshots>/<name>.png`.
#[derive(Event, Debug, Clone, Copy)]
pub struct ScreenshotEvent {}

pub fn screenshot_observer(
    _trigger: On<ScreenshotEvent>,
    mut prompt: ResMut<Prompt>,
    config: Res<EditorConfig>,
    mut pending: ResMut<PendingScreenshot>,
) {
    let Some(name) = prompt.ask("Enter a name for your screenshot: ") else {
        info!("No screenshot name given, cancelled");
        return;
    };
    match resolve_name(&config.screenshots_dir, &name, SCREENSHOT_EXTENSION) {
        Some(path) => pending.request(path),
        None => error!("invalid screenshot name {:?}", name),
    }
}
