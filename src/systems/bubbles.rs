//! Bubble wave systems.
//!
//! - [`bubble_tick_system`] is the fixed-step game tick: it raises every live
//!   bubble, drops the ones that left through the top edge and, when the wave
//!   is exhausted, persists the score and spawns the next wave. If the
//!   viewport has shrunk below what a wave needs, the game falls back to
//!   `AwaitingLayout` until the host lays it out again.
//! - [`regenerate_bubbles_system`] replaces the whole live list with a fresh wave.
//! - [`spawn_wave`] is the shared generation helper.
//!
//! # Generation rules
//!
//! A wave is `wave_size` bubbles of `bubble_radius`, with
//! `x` in `[spawn_margin, w - spawn_margin]` and `y` in `[h, h + spawn_depth]`,
//! both drawn as whole numbers. Bubbles start below the bottom edge, staggered.

use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::components::bubble::Bubble;
use crate::components::mapposition::MapPosition;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::redraw::RedrawRequest;
use crate::resources::rng::BubbleRng;
use crate::resources::score::Score;
use crate::resources::scorestore::ScorePersistence;
use crate::resources::screensize::ScreenSize;
use crate::resources::wave::WaveState;

/// Spawn a new wave below the bottom edge of `screen`.
///
/// Returns `false` without spawning anything when the viewport is too narrow
/// for the spawn margins (typically: not laid out yet).
pub fn spawn_wave(
    commands: &mut Commands,
    rng: &mut BubbleRng,
    wave: &mut WaveState,
    config: &GameConfig,
    screen: &ScreenSize,
) -> bool {
    let margin = config.spawn_margin_px();
    if !screen.can_host_wave(margin) {
        warn!(
            "Cannot spawn a wave in a {}x{} viewport (margin {})",
            screen.w, screen.h, margin
        );
        return false;
    }

    let depth = config.spawn_depth_px();
    for _ in 0..config.wave_size {
        let x = rng.0.i32(margin..=screen.w - margin) as f32;
        let y = screen.h.saturating_add(rng.0.i32(0..=depth)) as f32;
        commands.spawn((
            Bubble::new(config.bubble_radius, wave.next_order()),
            MapPosition::new(x, y),
        ));
    }
    wave.waves += 1;
    info!("Wave {} spawned ({} bubbles)", wave.waves, config.wave_size);
    true
}

/// One game tick.
///
/// 1. Move every bubble up by `rise_per_tick`.
/// 2. Despawn bubbles whose top edge is above the viewport (`y + r < 0`).
/// 3. If none are left, persist the score, then spawn a new wave. An active
///    game whose viewport cannot host the wave requests `AwaitingLayout`,
///    which cancels the ticker.
/// 4. Request a redraw.
pub fn bubble_tick_system(
    mut commands: Commands,
    mut bubbles: Query<(Entity, &Bubble, &mut MapPosition)>,
    config: Res<GameConfig>,
    screen: Res<ScreenSize>,
    score: Res<Score>,
    mut persistence: ResMut<ScorePersistence>,
    mut rng: ResMut<BubbleRng>,
    mut wave: ResMut<WaveState>,
    mut redraw: ResMut<RedrawRequest>,
    state: Res<GameState>,
    mut next_state: ResMut<NextGameState>,
) {
    let mut remaining = 0usize;
    for (entity, bubble, mut position) in bubbles.iter_mut() {
        position.pos.y -= config.rise_per_tick;
        if bubble.has_escaped(position.pos) {
            debug!("Bubble {} escaped", bubble.order);
            commands.entity(entity).despawn();
        } else {
            remaining += 1;
        }
    }

    if remaining == 0 {
        persistence.save(score.value);
        let spawned = spawn_wave(&mut commands, &mut rng, &mut wave, &config, &screen);
        if !spawned && state.get() == &GameStates::Active {
            info!("Viewport too small for a new wave, waiting for layout");
            next_state.set(GameStates::AwaitingLayout);
        }
    }

    redraw.request();
}

/// Replace the live list with a fresh wave.
///
/// Leaves the current bubbles alone when the viewport cannot host a wave.
pub fn regenerate_bubbles_system(
    mut commands: Commands,
    bubbles: Query<Entity, With<Bubble>>,
    config: Res<GameConfig>,
    screen: Res<ScreenSize>,
    mut rng: ResMut<BubbleRng>,
    mut wave: ResMut<WaveState>,
    mut redraw: ResMut<RedrawRequest>,
) {
    if !screen.can_host_wave(config.spawn_margin_px()) {
        warn!("Bubble generation skipped: viewport not laid out");
        return;
    }
    for entity in bubbles.iter() {
        commands.entity(entity).despawn();
    }
    spawn_wave(&mut commands, &mut rng, &mut wave, &config, &screen);
    redraw.request();
}
