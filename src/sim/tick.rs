//! Per-frame simulation step
//!
//! Frame order: input -> player move/clamp -> bank -> difficulty -> spawn
//! timer -> obstacle move/rotate/cull -> collision -> particles.

use glam::Vec2;

use super::player::LifeState;
use super::state::{GameEvent, GameState};

/// How far above the ship the autopilot looks for threats (pixels)
const AUTOPILOT_LOOKAHEAD: f32 = 260.0;
/// Horizontal clearance the autopilot tries to keep (pixels)
const AUTOPILOT_CLEARANCE: f32 = 20.0;

/// Input snapshot for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Discrete restart trigger
    pub restart: bool,
}

/// Collapse a pair of opposing keys into -1, 0 or 1
#[inline]
fn key_axis(negative: bool, positive: bool) -> f32 {
    match (negative, positive) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    }
}

impl TickInput {
    /// Movement direction in screen space (y down); opposite keys cancel
    pub fn axis(&self) -> Vec2 {
        Vec2::new(
            key_axis(self.left, self.right),
            key_axis(self.up, self.down),
        )
    }

    /// Steering heuristic for the demo driver: sidestep the nearest obstacle
    /// falling toward the ship and otherwise drift back to a home row near
    /// the bottom of the screen.
    pub fn autopilot(state: &GameState) -> TickInput {
        let mut input = TickInput::default();
        if !state.player.is_alive() {
            return input;
        }

        let tuning = &state.tuning;
        let ship = state.player.rect;
        let ship_center = ship.center();

        // Closest obstacle above us whose column overlaps ours (with clearance)
        let threat = state
            .obstacles
            .obstacles
            .iter()
            .filter(|o| o.rect.y < ship.bottom())
            .filter(|o| ship.y - o.rect.bottom() < AUTOPILOT_LOOKAHEAD)
            .filter(|o| {
                o.rect.x < ship.right() + AUTOPILOT_CLEARANCE
                    && ship.x - AUTOPILOT_CLEARANCE < o.rect.right()
            })
            .max_by(|a, b| {
                a.rect
                    .y
                    .partial_cmp(&b.rect.y)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

        if let Some(threat) = threat {
            let threat_x = threat.rect.center().x;
            let room_left = ship.x;
            let room_right = tuning.screen_width - ship.right();
            // Dodge away from the threat unless pinned against a wall
            let go_right = if threat_x <= ship_center.x {
                room_right > tuning.player_width || room_left < tuning.player_width
            } else {
                room_left < tuning.player_width
            };
            input.right = go_right;
            input.left = !go_right;

            // Back off downward if something is about to land on us
            let overlapping_soon = threat.rect.bottom() > ship.y - tuning.player_height;
            input.down = overlapping_soon;
        } else {
            let home = Vec2::new(
                tuning.screen_width / 2.0,
                tuning.screen_height - tuning.player_height * 2.0,
            );
            let delta = home - ship_center;
            let deadzone = tuning.player_speed;
            input.left = delta.x < -deadzone;
            input.right = delta.x > deadzone;
            input.up = delta.y < -deadzone;
            input.down = delta.y > deadzone;
        }

        input
    }
}

/// Advance the session by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.restart {
        state.restart();
        return;
    }

    // Dead is frozen until restart
    if state.player.state == LifeState::Dead {
        return;
    }

    state.frame += 1;

    // Player
    match state.player.state {
        LifeState::Alive => {
            let axis = input.axis();
            state.player.steer(axis, dt, &state.tuning);
            state.player.update_bank(axis.x, dt, &state.tuning);
        }
        LifeState::Dying => {
            if state.player.update_dying(dt, &state.tuning) {
                log::info!(
                    "Player gone after {:.1}s on frame {}",
                    state.difficulty.score,
                    state.frame
                );
                state.events.push(GameEvent::PlayerGone);
            }
        }
        LifeState::Dead => {}
    }

    // The clock runs until the ship is gone; spawns stop at game over
    if state.player.state != LifeState::Dead {
        state.difficulty.update(dt, &state.tuning);
        let due = state.difficulty.update_spawn_timer(dt);
        for _ in 0..due {
            state.spawn_obstacle();
        }
    }

    // Obstacles keep falling while the ship goes down so the screen clears
    state.obstacles.advance(state.difficulty.obstacle_speed, dt);
    state.obstacles.rotate(dt);
    state.obstacles.cull(state.tuning.screen_height);

    if state.player.is_alive() {
        resolve_collision(state);
    }

    // Particles
    if state.player.is_alive() && state.settings.exhaust_enabled() {
        let nozzle = state.player.nozzle();
        let heading = state.player.exhaust_heading();
        state.particles.emit_exhaust(
            &mut state.rng,
            nozzle,
            heading,
            dt,
            &state.tuning.exhaust,
        );
    }
    state.particles.update(dt);
}

/// Resolve at most one obstacle hit for this frame
fn resolve_collision(state: &mut GameState) {
    let Some(hit) = state.obstacles.take_first_colliding(&state.player.rect) else {
        return;
    };
    state.lives = state.lives.saturating_sub(1);
    state.events.push(GameEvent::Hit);
    log::debug!(
        "Obstacle {} hit the player, {} lives left",
        hit.id,
        state.lives
    );

    let center = state.player.center();
    let jitter = state.tuning.spark_jitter;
    let burst = state.tuning.hit_sparks;
    state.particles.spawn_sparks(
        &mut state.rng,
        center,
        burst.count,
        burst.speed,
        burst.lifetime,
        jitter,
    );

    if state.lives == 0 && state.player.begin_dying(&state.tuning) {
        state.events.push(GameEvent::MusicStop);
        state.events.push(GameEvent::Explosion);
        log::info!("Out of lives at {:.1}s", state.difficulty.score);

        let burst = state.tuning.death_sparks;
        state.particles.spawn_sparks(
            &mut state.rng,
            center,
            burst.count,
            burst.speed,
            burst.lifetime,
            jitter,
        );
    }
}
