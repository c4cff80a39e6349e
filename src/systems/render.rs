use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::bubble::Bubble;
use crate::components::mapposition::MapPosition;
use crate::resources::debugmode::DebugMode;
use crate::resources::gamestate::GameState;
use crate::resources::redraw::RedrawRequest;
use crate::resources::score::Score;
use crate::resources::scorestore::ScorePersistence;
use crate::resources::screensize::ScreenSize;
use crate::resources::ticker::GameTicker;

const BUBBLE_COLOR: Color = Color::BLUE;
const SCORE_COLOR: Color = Color::BLACK;
const SCORE_FONT_SIZE: i32 = 50;
const SCORE_ANCHOR: (i32, i32) = (50, 100);

/// Draw the live bubbles and the score; read-only apart from clearing the
/// redraw flag.
///
/// Bubbles are drawn in list order, so later bubbles overlap earlier ones.
pub fn render_system(
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    bubbles: Query<(&Bubble, &MapPosition)>,
    score: Res<Score>,
    mut redraw: ResMut<RedrawRequest>,
    debug: Option<Res<DebugMode>>,
    screen: Res<ScreenSize>,
    state: Res<GameState>,
    ticker: Res<GameTicker>,
    persistence: Res<ScorePersistence>,
) {
    let mut to_draw: Vec<(&Bubble, &MapPosition)> = bubbles.iter().collect();
    to_draw.sort_by_key(|(bubble, _)| bubble.order);

    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::WHITE);

    for (bubble, position) in to_draw.iter() {
        d.draw_circle_v(position.pos, bubble.radius, BUBBLE_COLOR);
    }

    let text = format!("Score: {}", score.value);
    d.draw_text(
        &text,
        SCORE_ANCHOR.0,
        SCORE_ANCHOR.1,
        SCORE_FONT_SIZE,
        SCORE_COLOR,
    );

    if debug.is_some() {
        let fps = d.get_fps();
        let text = format!("DEBUG MODE (press F11 to toggle) | FPS: {}", fps);
        d.draw_text(&text, 10, 10, 10, Color::BLACK);

        let text = format!(
            "Bubbles: {} | Ticks: {} | State: {:?}",
            to_draw.len(),
            ticker.fired,
            state.get()
        );
        d.draw_text(&text, 10, 30, 10, Color::BLACK);

        let text = match persistence.last_saved() {
            Some(saved) => format!("Last persisted score: {}", saved),
            None => "Last persisted score: (none this session)".to_string(),
        };
        d.draw_text(&text, 10, screen.h - 30, 10, Color::BLACK);
    }

    redraw.take();
}
