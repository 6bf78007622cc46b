// Support configuring Bevy lints within code.
#![cfg_attr(bevy_lint, feature(register_tool), register_tool(bevy))]
// Disable console on Windows for non-dev builds.
#![cfg_attr(not(feature = "dev"), windows_subsystem = "windows")]

#[cfg(feature = "dev_native")]
mod debug_tools;

mod animation;
mod camera;
mod hud;
mod input;
mod level;
mod player;
mod world;

use bevy::prelude::*;

use crate::level::LevelSetup;

fn main() -> AppExit {
    // A level without a usable checkpoint chain cannot produce a respawn
    // anchor, so refuse to start rather than limp along.
    let level = match LevelSetup::load_default() {
        Ok(level) => level,
        Err(err) => {
            eprintln!("refusing to start: {err}");
            return AppExit::error();
        }
    };

    App::new()
        .insert_resource(level)
        .add_plugins(AppPlugin)
        .run()
}

pub struct AppPlugin;
impl Plugin for AppPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Window {
                title: "Thicket Run".to_string(),
                fit_canvas_to_parent: true,
                ..default()
            }
            .into(),
            ..default()
        }));

        app.add_plugins((
            input::plugin,
            world::plugin,
            player::plugin,
            animation::plugin,
            camera::plugin,
            hud::plugin,
        ));

        #[cfg(feature = "dev_native")]
        app.add_plugins(debug_tools::plugin);
    }
}
