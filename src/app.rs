use anyhow::ensure;
use cgmath::Vector3;
use winit::{
    dpi::PhysicalSize,
    event::{KeyEvent, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

use crate::{
    game::{Game, GameConfig},
    gfx::{
        camera::CameraSettings,
        rendering::{GraphicsDevice, Light},
        resources::AssetSource,
        Graphics,
    },
    input::KeyboardState,
    performance::StatsConfig,
};

/// Settings for a [`FlightApp`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppConfig {
    pub camera: CameraSettings,
    pub stats: StatsConfig,
    pub game: GameConfig,
}

/// Installs the `env_logger` backend. Safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

/// Ties the window events, the keyboard, the renderer and the game together.
///
/// The host owns the window and event loop: it forwards each
/// [`WindowEvent`] to [`FlightApp::handle_window_event`] and calls
/// [`FlightApp::frame`] once per redraw.
pub struct FlightApp {
    graphics: Graphics,
    game: Game,
    keyboard: KeyboardState,
}

impl FlightApp {
    pub fn new(
        device: Box<dyn GraphicsDevice>,
        assets: &dyn AssetSource,
        config: AppConfig,
    ) -> anyhow::Result<Self> {
        let camera = config.camera;
        ensure!(camera.near > 0.0, "near plane must be positive, got {}", camera.near);
        ensure!(
            camera.near < camera.far,
            "near plane {} must be closer than far plane {}",
            camera.near,
            camera.far
        );
        ensure!(
            camera.fov > 0.0 && camera.fov < 180.0,
            "field of view must be between 0 and 180 degrees, got {}",
            camera.fov
        );

        let mut graphics = Graphics::new(device, camera, config.stats);
        graphics.add_light(Light::directional([1.0; 4], Vector3::new(0.3, -0.8, 0.9)));

        let game = Game::start(&mut graphics, assets, &config.game)?;

        Ok(Self {
            graphics,
            game,
            keyboard: KeyboardState::new(),
        })
    }

    pub fn graphics(&self) -> &Graphics {
        &self.graphics
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    pub fn keyboard_mut(&mut self) -> &mut KeyboardState {
        &mut self.keyboard
    }

    /// Returns `false` once the app should exit.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CloseRequested => return false,
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key,
                        state,
                        ..
                    },
                ..
            } => {
                if *physical_key == PhysicalKey::Code(KeyCode::Escape) {
                    return false;
                }
                self.keyboard.handle_key(*physical_key, *state);
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                self.resize(*width, *height);
            }
            WindowEvent::Focused(false) => self.keyboard.clear(),
            _ => (),
        }
        true
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.graphics
                .camera_mut()
                .set_aspect(width as f32 / height as f32);
        }
    }

    /// One tick: update every object, then draw the frame.
    pub fn frame(&mut self, delta_time: f32) {
        self.game
            .update(delta_time, &self.keyboard, self.graphics.camera_mut());

        self.graphics.begin_scene();
        self.game.draw(&mut self.graphics);
        self.graphics.end_scene(delta_time);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::rendering::RecordingDevice;
    use crate::gfx::resources::MemoryAssets;

    fn app() -> FlightApp {
        FlightApp::new(
            Box::new(RecordingDevice::new()),
            &MemoryAssets::new(),
            AppConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_bad_camera() {
        let config = AppConfig {
            camera: CameraSettings::default().with_clip_planes(10.0, 1.0),
            ..AppConfig::default()
        };
        let result = FlightApp::new(Box::new(RecordingDevice::new()), &MemoryAssets::new(), config);
        assert!(result.is_err());
    }

    #[test]
    fn test_close_and_resize() {
        let mut app = app();
        assert!(app.handle_window_event(&WindowEvent::Resized(PhysicalSize::new(800, 400))));
        assert_eq!(app.graphics().camera().settings().aspect, 2.0);
        assert!(!app.handle_window_event(&WindowEvent::CloseRequested));
    }

    #[test]
    fn test_focus_loss_releases_keys() {
        let mut app = app();
        app.keyboard_mut().press(KeyCode::KeyA);
        app.handle_window_event(&WindowEvent::Focused(false));
        assert!(!crate::input::Input::is_key_down(&app.keyboard, KeyCode::KeyA));
    }

    #[test]
    fn test_frame_advances_scene() {
        let mut app = app();
        app.frame(0.25);
        app.frame(0.25);
        assert_eq!(app.game().scene().elapsed(), 0.5);
        assert_eq!(app.graphics().stats().reports(), 0);
    }
}
