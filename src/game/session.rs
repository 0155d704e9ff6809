//! A running game: the scene, the objects in it and the terrain under them.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context;
use cgmath::Vector3;

use super::enemy::ENEMY_START;
use super::player::PLAYER_START;
use super::{Enemy, GameObject, ObjectRef, Player, Scene, UpdateContext, Water};
use crate::gfx::camera::Camera;
use crate::gfx::rendering::Graphics;
use crate::gfx::resources::assets::load_mesh;
use crate::gfx::resources::{AssetSource, Material};
use crate::gfx::scene::Mesh;
use crate::gfx::Skybox;
use crate::input::Input;
use crate::terrain::{Terrain, TerrainConfig};

/// Asset paths for one game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub terrain: TerrainConfig,
    /// Shared by the player and the enemy
    pub aircraft_mesh: String,
    pub aircraft_texture: String,
    pub water_texture: String,
    pub player_start: Vector3<f32>,
    pub enemy_start: Vector3<f32>,
    pub sky_mesh: String,
    /// Directory holding the six sky face textures
    pub sky_dir: String,
    /// Face textures are `<sky_dir><sky_name>_<face>.bmp`
    pub sky_name: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            terrain: TerrainConfig::default(),
            aircraft_mesh: "data/geometry/fw190.obj".to_string(),
            aircraft_texture: "data/textures/fw190.bmp".to_string(),
            water_texture: "data/textures/water.bmp".to_string(),
            player_start: PLAYER_START,
            enemy_start: ENEMY_START,
            sky_mesh: "data/geometry/skybox.obj".to_string(),
            sky_dir: "data/env/".to_string(),
            sky_name: "miramar".to_string(),
        }
    }
}

impl GameConfig {
    pub fn with_terrain(mut self, terrain: TerrainConfig) -> Self {
        self.terrain = terrain;
        self
    }
}

pub struct Game {
    scene: Scene,
    player: Rc<RefCell<Player>>,
    enemy: Rc<RefCell<Enemy>>,
    terrain: Option<Terrain>,
}

impl Game {
    /// Loads every asset and registers the enemy, the player and the water.
    ///
    /// Missing art degrades to objects that are not drawn. A terrain that
    /// can't be built is logged and the game runs without ground.
    pub fn start(
        graphics: &mut Graphics,
        assets: &dyn AssetSource,
        config: &GameConfig,
    ) -> anyhow::Result<Self> {
        log::info!("Starting game");

        let mut sky = Skybox::new(load_mesh(assets, &config.sky_mesh));
        sky.load(graphics, assets, &config.sky_dir, &config.sky_name);
        graphics.set_skybox(Some(sky));

        let aircraft_texture = graphics.load_texture(assets, &config.aircraft_texture);
        let aircraft: Option<Rc<Mesh>> = load_mesh(assets, &config.aircraft_mesh).map(|mesh| {
            let material = Material::diffuse(aircraft_texture, Some("aircraft"));
            Rc::new(mesh.with_material(Rc::new(material)))
        });

        let terrain = match Terrain::load(graphics, assets, &config.terrain) {
            Ok(terrain) => Some(terrain),
            Err(e) => {
                log::warn!("Running without terrain: {}", e);
                None
            }
        };

        let water_texture = graphics.load_texture(assets, &config.water_texture);
        let water = Water::new(water_texture).context("Failed to build water mesh")?;

        let player = Rc::new(RefCell::new(Player::at(aircraft.clone(), config.player_start)));
        let enemy = Rc::new(RefCell::new(Enemy::at(aircraft, config.enemy_start)));

        let mut scene = Scene::new();
        scene.add(enemy.clone());
        scene.add(player.clone());
        scene.add(Rc::new(RefCell::new(water)));

        Ok(Self {
            scene,
            player,
            enemy,
            terrain,
        })
    }

    /// Steps every object by `delta_time` seconds.
    pub fn update(&mut self, delta_time: f32, input: &dyn Input, camera: &mut Camera) {
        let player_position = self.player.borrow().transform().position;
        let mut ctx = UpdateContext::new(delta_time, input, camera)
            .with_terrain(self.terrain.as_ref())
            .with_player_position(player_position);
        self.scene.update(&mut ctx);
    }

    pub fn draw(&self, graphics: &mut Graphics) {
        self.scene.draw(graphics);
        if let Some(terrain) = &self.terrain {
            terrain.draw(graphics, Vector3::new(0.0, 0.0, 0.0));
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn player(&self) -> Rc<RefCell<Player>> {
        Rc::clone(&self.player)
    }

    pub fn enemy(&self) -> Rc<RefCell<Enemy>> {
        Rc::clone(&self.enemy)
    }

    pub fn player_ref(&self) -> ObjectRef {
        self.player.clone()
    }

    pub fn terrain(&self) -> Option<&Terrain> {
        self.terrain.as_ref()
    }
}
