//! Scripted enemy aircraft that steers toward the player.

use std::rc::Rc;

use cgmath::{Deg, Rad, Vector3};

use super::{GameObject, Transform, UpdateContext};
use crate::gfx::rendering::Graphics;
use crate::gfx::scene::Mesh;
use crate::math::lerp;

pub const ENEMY_SPEED: f32 = 10.0;
pub const ENEMY_START: Vector3<f32> = Vector3::new(25.0, 15.0, 35.0);
/// Nose angle used to climb or dive toward the player
const CLIMB_ANGLE: f32 = 35.0;
const BANK_ANGLE: f32 = 15.0;
/// Rate at which pitch and heading converge on the player
const STEER_RATE: f32 = 1.5;

pub struct Enemy {
    transform: Transform,
    mesh: Option<Rc<Mesh>>,
    pub health: i32,
}

impl Enemy {
    pub fn new(mesh: Option<Rc<Mesh>>) -> Self {
        Self::at(mesh, ENEMY_START)
    }

    pub fn at(mesh: Option<Rc<Mesh>>, position: Vector3<f32>) -> Self {
        Self {
            transform: Transform::at(position),
            mesh,
            health: 100,
        }
    }

    fn steer(&mut self, target: Vector3<f32>, dt: f32) {
        let position = self.transform.position;
        let heading = Deg::from(Rad((target.x - position.x).atan2(target.z - position.z))).0;
        let climb = (position.y - target.y).clamp(-1.0, 1.0);

        let rotation = &mut self.transform.rotation;
        rotation.x = lerp(rotation.x, climb * CLIMB_ANGLE, STEER_RATE * dt);

        let previous = rotation.y;
        rotation.y = lerp(rotation.y, heading, STEER_RATE * dt);
        let turning = if rotation.y - previous > 0.0 { 1.0 } else { -1.0 };
        rotation.z = lerp(rotation.z, BANK_ANGLE * -turning, 4.0 * dt);
    }
}

impl GameObject for Enemy {
    fn name(&self) -> &str {
        "enemy"
    }

    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        let dt = ctx.delta_time;
        if let Some(target) = ctx.player_position {
            self.steer(target, dt);
        }
        self.transform.advance(ENEMY_SPEED * dt);
    }

    fn draw(&self, graphics: &mut Graphics) {
        if self.health <= 0 {
            return;
        }
        if let Some(mesh) = &self.mesh {
            let t = &self.transform;
            graphics.draw_mesh(mesh, t.position, t.rotation, Vector3::new(1.0, 1.0, 1.0), None);
        }
    }
}
