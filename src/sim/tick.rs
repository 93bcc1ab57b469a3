//! One simulation tick
//!
//! Advances the game by exactly one display frame's worth of physics. The
//! step is frame-based, not time-based: velocities are in units per tick.

use super::state::{GameEvent, GamePhase, GameState};

/// Advance the game state by one tick
pub fn tick(state: &mut GameState) {
    // Frozen until restart
    if state.phase == GamePhase::GameOver {
        return;
    }

    let t = state.tuning;
    state.time_ticks += 1;

    // Horizontal move, wrapping around the board edges
    let player = &mut state.player;
    player.pos.x += state.velocity.x;
    if player.pos.x > t.board_width {
        player.pos.x = 0.0;
    } else if player.pos.x + player.size.x < 0.0 {
        player.pos.x = t.board_width;
    }

    state.velocity.y += t.gravity;
    player.pos.y += state.velocity.y;

    if player.pos.y > t.board_height {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver);
        log::info!("Game over: score {} after {} ticks", state.score, state.time_ticks);
    }

    // Scroll and bounce. The ascent check is repeated per platform, so a
    // bounce partway through also scrolls the platforms after it.
    let scroll_line = t.scroll_line();
    let player_bounds = state.player.bounds();
    for platform in state.platforms.iter_mut() {
        if state.velocity.y < 0.0 && state.player.pos.y < scroll_line {
            platform.pos.y -= t.jump_velocity;
        }
        if state.velocity.y >= 0.0 && player_bounds.overlaps(&platform.bounds()) {
            state.velocity.y = t.jump_velocity;
            state.events.push(GameEvent::Bounce);
        }
    }

    recycle_platforms(state);
    update_score(state);
}

/// Replace platforms that scrolled past the bottom edge with new ones on top
fn recycle_platforms(state: &mut GameState) {
    let bottom = state.tuning.board_height;
    while state
        .platforms
        .front()
        .is_some_and(|platform| platform.pos.y >= bottom)
    {
        state.platforms.pop_front();
        state.spawn_platform();
        state.events.push(GameEvent::PlatformRecycled);
        log::debug!("Platform recycled at tick {}", state.time_ticks);
    }
}

/// Random score step: the running total climbs while ascending and sinks
/// otherwise; the displayed score only follows it upward.
fn update_score(state: &mut GameState) {
    let points = state.roll_score_points();
    if state.velocity.y < 0.0 {
        state.max_score += points;
        if state.score < state.max_score {
            state.score = state.max_score;
        }
    } else {
        state.max_score -= points;
    }
}
