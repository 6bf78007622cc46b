use bevy::prelude::*;

use crate::player::{Actor, Player};

#[derive(Component)]
struct CheckpointReadout;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_hud);
    app.add_systems(Update, update_readout);
}

fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        CheckpointReadout,
        Text::new("checkpoint 1/1"),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::srgb(0.9, 0.9, 0.9)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(8.0),
            ..default()
        },
    ));
}

/// Presentation reads checkpoint progress through the read-only view;
/// nothing here can mutate the tracker.
fn update_readout(
    actors: Query<&Actor, With<Player>>,
    mut readout: Query<&mut Text, With<CheckpointReadout>>,
) {
    let Ok(actor) = actors.single() else {
        return;
    };
    let Ok(mut text) = readout.single_mut() else {
        return;
    };

    let track = actor.0.checkpoints();
    let value = format!(
        "checkpoint {}/{}",
        track.current_index() + 1,
        track.anchors().len()
    );
    if text.0 != value {
        text.0 = value;
    }
}
