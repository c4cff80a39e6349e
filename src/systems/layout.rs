//! Deferred first generation.
//!
//! Bubble generation needs the viewport size, which the host only knows after
//! layout. While the game is in
//! [`GameStates::AwaitingLayout`](crate::resources::gamestate::GameStates::AwaitingLayout),
//! [`layout_system`] waits for a usable [`ScreenSize`], spawns the first wave
//! if the live list is empty, and requests the `Active` state.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::bubble::Bubble;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::redraw::RedrawRequest;
use crate::resources::rng::BubbleRng;
use crate::resources::screensize::ScreenSize;
use crate::resources::wave::WaveState;
use crate::systems::bubbles::spawn_wave;

pub fn layout_system(
    mut commands: Commands,
    bubbles: Query<(), With<Bubble>>,
    config: Res<GameConfig>,
    screen: Res<ScreenSize>,
    mut rng: ResMut<BubbleRng>,
    mut wave: ResMut<WaveState>,
    mut redraw: ResMut<RedrawRequest>,
    mut next_state: ResMut<NextGameState>,
) {
    if bubbles.is_empty() {
        if !screen.can_host_wave(config.spawn_margin_px()) {
            debug!("Waiting for layout ({}x{})", screen.w, screen.h);
            return;
        }
        spawn_wave(&mut commands, &mut rng, &mut wave, &config, &screen);
        redraw.request();
    }
    next_state.set(GameStates::Active);
}
