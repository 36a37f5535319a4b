//! The player's ship
//!
//! Life cycle: `Alive` (steered by input) -> `Dying` (spins and falls off the
//! bottom of the screen) -> `Dead` (hidden, terminal until restart).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::{Rect, clamp_to_bounds};
use crate::consts::REFERENCE_FPS;
use crate::tuning::Tuning;
use crate::{approach, wrap_degrees};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeState {
    Alive,
    Dying,
    Dead,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    /// Degrees. Bank tilt while alive (positive leans left), spin once dying
    pub angle: f32,
    pub state: LifeState,
    /// Degrees per second, zero unless dying
    pub spin_speed: f32,
    /// Pixels per second, zero unless dying
    pub fall_speed: f32,
}

impl Player {
    /// A fresh ship centered on screen
    pub fn new(tuning: &Tuning) -> Self {
        let center = Vec2::new(tuning.screen_width / 2.0, tuning.screen_height / 2.0);
        Self {
            rect: Rect::centered(center, tuning.player_width, tuning.player_height),
            angle: 0.0,
            state: LifeState::Alive,
            spin_speed: 0.0,
            fall_speed: 0.0,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.state == LifeState::Alive
    }

    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }

    /// Unit vector the nose points along (up the screen, tilted by `angle`)
    pub fn facing(&self) -> Vec2 {
        let rad = self.angle.to_radians();
        Vec2::new(-rad.sin(), -rad.cos())
    }

    /// Point behind the ship the exhaust leaves from
    pub fn nozzle(&self) -> Vec2 {
        self.center() - self.facing() * (self.rect.height / 2.0)
    }

    /// Screen heading in degrees (0 = +x) the exhaust plume travels along
    pub fn exhaust_heading(&self) -> f32 {
        let back = -self.facing();
        back.y.atan2(back.x).to_degrees()
    }

    /// Move by the input axis (components in {-1, 0, 1}) and clamp to screen
    pub fn steer(&mut self, axis: Vec2, dt: f32, tuning: &Tuning) {
        if !self.is_alive() {
            return;
        }
        let step = tuning.player_speed * dt * REFERENCE_FPS;
        self.rect.x += axis.x * step;
        self.rect.y += axis.y * step;
        self.rect = clamp_to_bounds(self.rect, tuning.screen_width, tuning.screen_height);
    }

    /// Ease the bank tilt toward the target for the current horizontal input
    ///
    /// Leans `+bank_angle` moving left, `-bank_angle` moving right, level
    /// otherwise, at no more than `bank_angle / bank_time` degrees per second.
    pub fn update_bank(&mut self, horizontal: f32, dt: f32, tuning: &Tuning) {
        if !self.is_alive() {
            return;
        }
        let target = if horizontal < 0.0 {
            tuning.bank_angle
        } else if horizontal > 0.0 {
            -tuning.bank_angle
        } else {
            0.0
        };
        self.angle = approach(self.angle, target, tuning.bank_rate() * dt);
    }

    /// Alive -> Dying. Returns false if the ship was not alive
    pub fn begin_dying(&mut self, tuning: &Tuning) -> bool {
        if !self.is_alive() {
            return false;
        }
        self.state = LifeState::Dying;
        self.spin_speed = tuning.death_spin_speed;
        self.fall_speed = tuning.death_fall_speed;
        true
    }

    /// Spin and fall; returns true on the frame the ship becomes Dead
    pub fn update_dying(&mut self, dt: f32, tuning: &Tuning) -> bool {
        if self.state != LifeState::Dying {
            return false;
        }
        self.rect.y += self.fall_speed * dt;
        self.angle = wrap_degrees(self.angle + self.spin_speed * dt);

        if self.rect.y > tuning.screen_height + tuning.offscreen_margin {
            self.state = LifeState::Dead;
            self.spin_speed = 0.0;
            self.fall_speed = 0.0;
            return true;
        }
        false
    }
}
