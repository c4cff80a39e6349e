//! Bubble pop event and observer.
//!
//! [`pointer_pop_system`](crate::systems::pointer::pointer_pop_system) emits a
//! [`BubblePoppedEvent`] for every bubble removed by a pointer-down. The
//! observer forwards it to the host through the
//! [`PopListener`](crate::resources::poplistener::PopListener) resource.
use crate::resources::poplistener::PopListener;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;
use raylib::prelude::Vector2;

/// Event emitted once per popped bubble.
#[derive(Event, Debug, Clone, Copy)]
pub struct BubblePoppedEvent {
    /// Center of the popped bubble.
    pub position: Vector2,
    /// Score right after the pop.
    pub score: u32,
}

/// Observer that invokes the registered pop callback, if any.
pub fn pop_listener_observer(trigger: On<BubblePoppedEvent>, mut listener: ResMut<PopListener>) {
    let event = trigger.event();
    debug!(
        "Bubble popped at ({:.1}, {:.1}), score {}",
        event.position.x, event.position.y, event.score
    );
    listener.notify();
}
