//! # Game Objects
//!
//! Objects live in a [`Scene`] as `Rc<RefCell<dyn GameObject>>`. Each tick
//! every object gets an [`UpdateContext`] holding the frame time, the input,
//! the camera and the terrain. Scene changes requested from inside an update
//! go through [`SceneCommands`] and are applied once the update pass is over.

pub mod enemy;
pub mod player;
pub mod scene;
pub mod session;
pub mod water;

use std::cell::RefCell;
use std::rc::Rc;

use cgmath::{Deg, InnerSpace, Rad, Vector3};

pub use enemy::Enemy;
pub use player::Player;
pub use scene::Scene;
pub use session::{Game, GameConfig};
pub use water::Water;

use crate::gfx::camera::Camera;
use crate::gfx::rendering::Graphics;
use crate::input::Input;
use crate::terrain::Terrain;

/// Shared handle to an object registered in a [`Scene`].
pub type ObjectRef = Rc<RefCell<dyn GameObject>>;

/// Position plus Euler rotation in degrees (x = pitch, y = yaw, z = roll).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vector3<f32>,
    pub rotation: Vector3<f32>,
}

impl Default for Transform {
    fn default() -> Self {
        Self::at(Vector3::new(0.0, 0.0, 0.0))
    }
}

impl Transform {
    pub fn at(position: Vector3<f32>) -> Self {
        Self {
            position,
            rotation: Vector3::new(0.0, 0.0, 0.0),
        }
    }

    /// Heading from yaw, climb from pitch. Not normalized once pitched.
    pub fn forward(&self) -> Vector3<f32> {
        let yaw = Rad::from(Deg(self.rotation.y)).0;
        let pitch = Rad::from(Deg(self.rotation.x)).0;
        Vector3::new(yaw.sin(), -pitch.sin(), yaw.cos())
    }

    pub fn right(&self) -> Vector3<f32> {
        self.forward().cross(Vector3::unit_y())
    }

    pub fn up(&self) -> Vector3<f32> {
        self.right().cross(self.forward())
    }

    /// Moves along `forward()` by `distance`.
    pub fn advance(&mut self, distance: f32) {
        self.position += self.forward() * distance;
    }

    pub fn distance_to(&self, point: Vector3<f32>) -> f32 {
        (point - self.position).magnitude()
    }
}

/// Deferred scene changes recorded during an update pass.
#[derive(Default)]
pub struct SceneCommands {
    pub(crate) removals: Vec<ObjectRef>,
    pub(crate) tasks: Vec<(f32, Box<dyn FnOnce(f32)>)>,
}

impl SceneCommands {
    /// Queues `object` for removal at the end of the update pass.
    pub fn remove(&mut self, object: &ObjectRef) {
        self.removals.push(Rc::clone(object));
    }

    /// Schedules `action` to run `delay` seconds after the current tick's
    /// time. It runs on a later tick, never the current one.
    pub fn schedule_task(&mut self, delay: f32, action: impl FnOnce(f32) + 'static) {
        self.tasks.push((delay, Box::new(action)));
    }

    pub fn is_empty(&self) -> bool {
        self.removals.is_empty() && self.tasks.is_empty()
    }
}

/// Everything an object may read or drive during its update.
pub struct UpdateContext<'a> {
    /// Seconds since the previous tick
    pub delta_time: f32,
    /// Scene time at the start of this tick
    pub elapsed: f32,
    pub input: &'a dyn Input,
    /// The view camera; whichever object flies it writes it here
    pub camera: &'a mut Camera,
    pub terrain: Option<&'a Terrain>,
    /// Player position as of the start of the tick
    pub player_position: Option<Vector3<f32>>,
    pub commands: SceneCommands,
}

impl<'a> UpdateContext<'a> {
    pub fn new(delta_time: f32, input: &'a dyn Input, camera: &'a mut Camera) -> Self {
        Self {
            delta_time,
            elapsed: 0.0,
            input,
            camera,
            terrain: None,
            player_position: None,
            commands: SceneCommands::default(),
        }
    }

    pub fn with_terrain(mut self, terrain: Option<&'a Terrain>) -> Self {
        self.terrain = terrain;
        self
    }

    pub fn with_player_position(mut self, position: Vector3<f32>) -> Self {
        self.player_position = Some(position);
        self
    }
}

/// An entity that lives in a [`Scene`].
pub trait GameObject {
    fn name(&self) -> &str;

    fn transform(&self) -> &Transform;

    fn update(&mut self, _ctx: &mut UpdateContext<'_>) {}

    fn draw(&self, _graphics: &mut Graphics) {}
}
