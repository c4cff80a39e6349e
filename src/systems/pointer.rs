//! Pointer hit-testing.
//!
//! [`pointer_pop_system`] consumes the queued pointer-down events of
//! [`InputState`] in arrival order. For each one it pops at most one bubble:
//! among the bubbles containing the point, the one earliest in the live list
//! (lowest spawn order), not the nearest. Every event is consumed whether or
//! not it hit anything.

use bevy_ecs::prelude::*;

use crate::components::bubble::Bubble;
use crate::components::mapposition::MapPosition;
use crate::events::pop::BubblePoppedEvent;
use crate::resources::input::InputState;
use crate::resources::redraw::RedrawRequest;
use crate::resources::score::Score;

pub fn pointer_pop_system(
    mut commands: Commands,
    mut input: ResMut<InputState>,
    bubbles: Query<(Entity, &Bubble, &MapPosition)>,
    mut score: ResMut<Score>,
    mut redraw: ResMut<RedrawRequest>,
) {
    if input.pointer_presses.is_empty() {
        return;
    }

    // Despawns are deferred, so remember what this run already popped
    let mut popped: Vec<Entity> = Vec::new();
    for press in input.pointer_presses.drain(..) {
        let hit = bubbles
            .iter()
            .filter(|(entity, bubble, position)| {
                !popped.contains(entity) && bubble.contains(position.pos, press)
            })
            .min_by_key(|(_, bubble, _)| bubble.order);

        if let Some((entity, _, position)) = hit {
            commands.entity(entity).despawn();
            popped.push(entity);
            score.value += 1;
            commands.trigger(BubblePoppedEvent {
                position: position.pos,
                score: score.value,
            });
        }
        redraw.request();
    }
}
