//! The bubble-pop game component.
//!
//! [`BubbleGame`] owns an ECS [`World`] and the schedules that drive it. It
//! is the surface a host talks to:
//!
//! - construction seeds the score from the injected [`ScoreStore`] and
//!   attaches the component; generation waits for the layout pass
//! - [`set_viewport`](BubbleGame::set_viewport) is the layout notification
//! - [`advance`](BubbleGame::advance) is called once per host frame: it runs
//!   every tick the [`GameTicker`] releases, then the frame schedule
//! - [`handle_pointer_down`](BubbleGame::handle_pointer_down) pops at most one bubble
//! - [`attach`](BubbleGame::attach) / [`detach`](BubbleGame::detach) bind the
//!   ticker to the host lifecycle
//!
//! # Schedules
//!
//! - `tick`: [`bubble_tick_system`], once per released tick, followed by
//!   the lifecycle check so a tick can hand the game back to layout
//! - `frame`: ordered by [`FrameSet`]; hosts add their own input and
//!   render systems to the matching sets
//! - `pointer` and `generate`: single-operation schedules behind
//!   [`handle_pointer_down`](BubbleGame::handle_pointer_down) and
//!   [`generate_bubbles`](BubbleGame::generate_bubbles)
//!
//! Every schedule uses the single-threaded executor: all game state is
//! mutated on the caller's thread.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use bevy_ecs::schedule::ExecutorKind;
use log::info;
use raylib::prelude::Vector2;

use crate::components::bubble::Bubble;
use crate::components::mapposition::MapPosition;
use crate::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use crate::events::pop::pop_listener_observer;
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::input::InputState;
use crate::resources::poplistener::PopListener;
use crate::resources::redraw::RedrawRequest;
use crate::resources::rng::BubbleRng;
use crate::resources::score::Score;
use crate::resources::scorestore::{ScorePersistence, ScoreStore};
use crate::resources::screensize::ScreenSize;
use crate::resources::ticker::GameTicker;
use crate::resources::wave::WaveState;
use crate::resources::worldtime::WorldTime;
use crate::systems::bubbles::{bubble_tick_system, regenerate_bubbles_system};
use crate::systems::gamestate::{
    check_pending_state, state_is_awaiting_layout, state_is_not_awaiting_layout,
    state_is_not_quitting,
};
use crate::systems::layout::layout_system;
use crate::systems::pointer::pointer_pop_system;
use crate::systems::time::update_world_time;

/// Ordered phases of the frame schedule.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Host input and viewport polling.
    Input,
    /// Deferred generation once the viewport is known.
    Layout,
    /// Pointer hit-testing.
    Pointer,
    /// Apply pending lifecycle transitions.
    Lifecycle,
    /// Host rendering.
    Render,
}

/// A live bubble as seen from outside the world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BubbleView {
    pub position: Vector2,
    pub radius: f32,
    pub order: u64,
}

pub struct BubbleGame {
    world: World,
    tick: Schedule,
    frame: Schedule,
    pointer: Schedule,
    generate: Schedule,
}

fn single_threaded_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.set_executor_kind(ExecutorKind::SingleThreaded);
    schedule
}

impl BubbleGame {
    /// Construct with an entropy-seeded random source.
    pub fn new(config: GameConfig, store: Box<dyn ScoreStore>) -> Self {
        Self::build(config, store, BubbleRng::default())
    }

    /// Construct with a seeded random source, for reproducible waves.
    pub fn with_seed(config: GameConfig, store: Box<dyn ScoreStore>, seed: u64) -> Self {
        Self::build(config, store, BubbleRng::with_seed(seed))
    }

    fn build(config: GameConfig, store: Box<dyn ScoreStore>, rng: BubbleRng) -> Self {
        let persistence = ScorePersistence::new(store);
        let score = persistence.load();
        info!("Starting with score {}", score);

        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        world.insert_resource(ScreenSize::default());
        world.insert_resource(GameTicker::new(config.tick_interval()));
        world.insert_resource(config);
        world.insert_resource(Score::new(score));
        world.insert_resource(persistence);
        world.insert_resource(rng);
        world.insert_resource(WaveState::default());
        world.insert_resource(RedrawRequest::default());
        world.insert_resource(InputState::default());
        world.insert_resource(PopListener::default());
        world.insert_resource(GameState::new());
        world.insert_resource(NextGameState::new());

        world.spawn(Observer::new(observe_gamestate_change_event));
        world.spawn(Observer::new(pop_listener_observer));
        world.spawn(Observer::new(switch_debug_observer));
        // Ensure the observers are registered before any system triggers events.
        world.flush();

        let mut tick = single_threaded_schedule();
        tick.add_systems(
            (
                bubble_tick_system.run_if(state_is_not_awaiting_layout),
                check_pending_state,
            )
                .chain(),
        );

        let mut frame = single_threaded_schedule();
        frame.configure_sets(
            (
                FrameSet::Input,
                FrameSet::Layout,
                FrameSet::Pointer,
                FrameSet::Lifecycle,
                FrameSet::Render,
            )
                .chain(),
        );
        frame.add_systems(
            layout_system
                .in_set(FrameSet::Layout)
                .run_if(state_is_awaiting_layout),
        );
        frame.add_systems(
            pointer_pop_system
                .in_set(FrameSet::Pointer)
                .run_if(state_is_not_quitting),
        );
        frame.add_systems(check_pending_state.in_set(FrameSet::Lifecycle));

        let mut pointer = single_threaded_schedule();
        pointer.add_systems(pointer_pop_system.run_if(state_is_not_quitting));

        let mut generate = single_threaded_schedule();
        generate.add_systems(regenerate_bubbles_system);

        let mut game = BubbleGame {
            world,
            tick,
            frame,
            pointer,
            generate,
        };
        game.attach();
        game
    }

    /// Host layout notification.
    pub fn set_viewport(&mut self, width: i32, height: i32) {
        let mut screen = self.world.resource_mut::<ScreenSize>();
        screen.w = width;
        screen.h = height;
    }

    /// One host frame: run the ticks due after `dt` seconds, then the frame schedule.
    pub fn advance(&mut self, dt: f32) {
        update_world_time(&mut self.world, dt);
        let delta = self.world.resource::<WorldTime>().delta;
        let due = self.world.resource_mut::<GameTicker>().advance(delta);
        for _ in 0..due {
            // A tick may have cancelled the ticker
            if !self.world.resource::<GameTicker>().is_running() {
                break;
            }
            self.tick.run(&mut self.world);
        }
        self.frame.run(&mut self.world);
    }

    /// Run one game tick right now, regardless of the ticker.
    ///
    /// Does nothing while waiting for layout.
    pub fn tick(&mut self) {
        self.tick.run(&mut self.world);
    }

    /// Replace the live bubbles with a fresh wave.
    ///
    /// Does nothing (and logs) while the viewport is too small.
    pub fn generate_bubbles(&mut self) {
        self.generate.run(&mut self.world);
    }

    /// Hit-test a pointer-down at `(x, y)`, popping at most one bubble.
    ///
    /// Always returns `true`: the event is consumed whether or not it hit.
    pub fn handle_pointer_down(&mut self, x: f32, y: f32) -> bool {
        if self.is_quitting() {
            return true;
        }
        self.world
            .resource_mut::<InputState>()
            .push_pointer_down(x, y);
        self.pointer.run(&mut self.world);
        true
    }

    /// Register the pop callback, replacing any previous one.
    pub fn set_pop_listener(&mut self, callback: impl FnMut() + Send + Sync + 'static) {
        self.world.resource_mut::<PopListener>().set(callback);
    }

    pub fn clear_pop_listener(&mut self) {
        self.world.resource_mut::<PopListener>().clear();
    }

    /// Attach to the host: resume ticking, generating first if needed.
    pub fn attach(&mut self) {
        if self.state() == GameStates::Active {
            return;
        }
        self.request_state(GameStates::AwaitingLayout);
    }

    /// Detach from the host: cancel the ticker. Bubbles stay where they are.
    pub fn detach(&mut self) {
        self.request_state(GameStates::Detached);
    }

    /// Enter the terminal `Quitting` state.
    pub fn request_quit(&mut self) {
        self.request_state(GameStates::Quitting);
    }

    fn request_state(&mut self, state: GameStates) {
        self.world.resource_mut::<NextGameState>().set(state);
        self.world.trigger(GameStateChangedEvent {});
        self.world.flush();
    }

    pub fn state(&self) -> GameStates {
        self.world.resource::<GameState>().get().clone()
    }

    pub fn is_quitting(&self) -> bool {
        self.state() == GameStates::Quitting
    }

    pub fn score(&self) -> u32 {
        self.world.resource::<Score>().value
    }

    /// Number of waves generated so far.
    pub fn waves(&self) -> u64 {
        self.world.resource::<WaveState>().waves
    }

    pub fn redraw_pending(&self) -> bool {
        self.world.resource::<RedrawRequest>().is_pending()
    }

    /// Live bubbles in list order.
    pub fn bubbles(&mut self) -> Vec<BubbleView> {
        let mut query = self.world.query::<(&Bubble, &MapPosition)>();
        let mut bubbles: Vec<BubbleView> = query
            .iter(&self.world)
            .map(|(bubble, position)| BubbleView {
                position: position.pos,
                radius: bubble.radius,
                order: bubble.order,
            })
            .collect();
        bubbles.sort_by_key(|b| b.order);
        bubbles
    }

    pub fn bubble_count(&mut self) -> usize {
        self.world
            .query_filtered::<(), With<Bubble>>()
            .iter(&self.world)
            .count()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// The frame schedule, for hosts to add systems in a [`FrameSet`].
    pub fn frame_schedule_mut(&mut self) -> &mut Schedule {
        &mut self.frame
    }
}
