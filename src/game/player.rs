//! The player's aircraft and its chase camera.

use std::rc::Rc;

use cgmath::Vector3;
use winit::keyboard::KeyCode;

use super::{GameObject, Transform, UpdateContext};
use crate::gfx::rendering::Graphics;
use crate::gfx::scene::Mesh;
use crate::input::Input;
use crate::math::lerp;

/// Units per second along the nose
pub const PLAYER_SPEED: f32 = 35.0;
/// Degrees per second of pitch or yaw at full stick
pub const TURN_RATE: f32 = 55.0;
/// Bank angle held while yawing
pub const BANK_ANGLE: f32 = 35.0;
pub const PLAYER_START: Vector3<f32> = Vector3::new(0.0, 15.0, 0.0);
pub const PLAYER_HEALTH: i32 = 100;

/// Chase camera: distance behind the aircraft and height above it
const CAMERA_DISTANCE: f32 = 12.0;
const CAMERA_HEIGHT: f32 = 4.0;
/// Extra camera yaw and pitch leading into a turn
const CAMERA_YAW_LEAD: f32 = 30.0;
const CAMERA_PITCH_LEAD: f32 = 5.0;

/// Stick deflection read from the keyboard: `(pitch, yaw)`, each in -1..=1.
///
/// A wins over D and W wins over S when both are held.
pub fn read_stick(input: &dyn Input) -> (f32, f32) {
    let yaw = if input.is_key_down(KeyCode::KeyA) {
        -1.0
    } else if input.is_key_down(KeyCode::KeyD) {
        1.0
    } else {
        0.0
    };
    let pitch = if input.is_key_down(KeyCode::KeyW) {
        -1.0
    } else if input.is_key_down(KeyCode::KeyS) {
        1.0
    } else {
        0.0
    };
    (pitch, yaw)
}

pub struct Player {
    transform: Transform,
    mesh: Option<Rc<Mesh>>,
    pub health: i32,
    colliding: bool,
}

impl Player {
    pub fn new(mesh: Option<Rc<Mesh>>) -> Self {
        Self::at(mesh, PLAYER_START)
    }

    pub fn at(mesh: Option<Rc<Mesh>>, position: Vector3<f32>) -> Self {
        Self {
            transform: Transform::at(position),
            mesh,
            health: PLAYER_HEALTH,
            colliding: false,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Whether the last update ended below the ground.
    ///
    /// Ground contact is reported but does not cost health.
    pub fn is_colliding(&self) -> bool {
        self.colliding
    }

    fn radius(&self) -> f32 {
        self.mesh.as_ref().map_or(0.0, |m| m.radius())
    }

    fn fly(&mut self, pitch: f32, yaw: f32, dt: f32) {
        let rotation = &mut self.transform.rotation;
        rotation.x += -pitch * TURN_RATE * dt;
        rotation.y += yaw * TURN_RATE * dt;
        rotation.z = lerp(rotation.z, BANK_ANGLE * -yaw, 4.0 * dt);

        self.transform.advance(PLAYER_SPEED * dt);
    }

    fn follow_camera(&self, ctx: &mut UpdateContext<'_>, pitch: f32, yaw: f32) {
        let dt = ctx.delta_time;
        let forward = self.transform.forward();
        let position = self.transform.position
            + forward * -CAMERA_DISTANCE
            + Vector3::new(0.0, CAMERA_HEIGHT, 0.0);

        let current = ctx.camera.rotation();
        let target = self.transform.rotation;
        let rotation = Vector3::new(
            lerp(current.x, target.x + pitch * CAMERA_PITCH_LEAD, 3.0 * dt),
            lerp(current.y, target.y + yaw * CAMERA_YAW_LEAD, 3.0 * dt),
            current.z,
        );

        ctx.camera.set_position(position);
        ctx.camera.set_rotation(rotation);
    }
}

impl GameObject for Player {
    fn name(&self) -> &str {
        "player"
    }

    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        let (pitch, yaw) = read_stick(ctx.input);

        if self.is_alive() {
            self.fly(pitch, yaw, ctx.delta_time);
            self.colliding = ctx
                .terrain
                .is_some_and(|t| t.check_collision(self.transform.position, self.radius()));
        }

        self.follow_camera(ctx, pitch, yaw);
    }

    fn draw(&self, graphics: &mut Graphics) {
        if !self.is_alive() {
            return;
        }
        if let Some(mesh) = &self.mesh {
            let t = &self.transform;
            graphics.draw_mesh(mesh, t.position, t.rotation, Vector3::new(1.0, 1.0, 1.0), None);
        }
    }
}
