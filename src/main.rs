//! Scratch Raster viewer
//!
//! Thin presentation shell around the software rasterizer:
//! - polls the keyboard and turns it into camera motion
//! - runs one render pass per frame into the software canvas
//! - uploads the finished canvas as a texture and draws a small HUD
//!
//! Usage: `scratch-raster [scene.ron]`

mod controls;

use controls::{drive, KeyState};
use macroquad::prelude::{
    clear_background, draw_text, draw_texture, get_frame_time, next_frame, Color as MqColor, Conf,
    FilterMode, Texture2D, WHITE, YELLOW,
};
use scratch_raster::rasterizer::{HEIGHT, WIDTH};
use scratch_raster::scene::{load_scene, load_scene_from_str, LoadedScene, RenderContext};
use scratch_raster::VERSION;

const DEFAULT_SCENE: &str = include_str!("../assets/scenes/cubes.ron");
const SCREENSHOT_PATH: &str = "frame.png";

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Scratch Raster v{}", VERSION),
        window_width: WIDTH as i32,
        window_height: HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Scene named on the command line, falling back to the embedded demo
fn initial_scene() -> Option<LoadedScene> {
    if let Some(path) = std::env::args().nth(1) {
        match load_scene(&path) {
            Ok(loaded) => return Some(loaded),
            Err(e) => log::error!("Failed to load {}: {}", path, e),
        }
    }
    match load_scene_from_str(DEFAULT_SCENE) {
        Ok(loaded) => Some(loaded),
        Err(e) => {
            log::error!("Built-in scene is invalid: {}", e);
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn prompt_scene() -> Option<LoadedScene> {
    let path = rfd::FileDialog::new()
        .add_filter("RON Scene", &["ron"])
        .set_directory("assets/scenes")
        .pick_file()?;

    match load_scene(&path) {
        Ok(loaded) => Some(loaded),
        Err(e) => {
            log::error!("Failed to load {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn prompt_scene() -> Option<LoadedScene> {
    log::warn!("Opening scene files is not available in the browser");
    None
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let Some(LoadedScene { mut scene, mut camera, settings }) = initial_scene() else {
        return;
    };
    let mut ctx = RenderContext::new(WIDTH, HEIGHT, settings);
    let mut previous_keys = KeyState::default();

    log::info!("=== Scratch Raster v{} ===", VERSION);

    loop {
        let keys = KeyState::poll();
        let pressed = keys.pressed_since(&previous_keys);
        previous_keys = keys;

        if pressed.quit {
            break;
        }
        if pressed.cycle_mode {
            ctx.settings.mode = ctx.settings.mode.next();
            log::info!("Render mode: {}", ctx.settings.mode.label());
        }
        if pressed.open_scene {
            if let Some(loaded) = prompt_scene() {
                scene = loaded.scene;
                camera = loaded.camera;
                ctx.settings = loaded.settings;
            }
        }

        drive(&mut camera, &keys, get_frame_time());

        let canvas = ctx.render(&scene, &camera);

        if pressed.screenshot {
            if let Err(e) = canvas.save_png(SCREENSHOT_PATH) {
                log::error!("Screenshot failed: {}", e);
            }
        }

        let texture = Texture2D::from_rgba8(
            canvas.width() as u16,
            canvas.height() as u16,
            &canvas.to_rgba8(),
        );
        texture.set_filter(FilterMode::Nearest);

        clear_background(MqColor::from_rgba(0, 0, 0, 255));
        draw_texture(&texture, 0.0, 0.0, WHITE);

        let stats = ctx.stats();
        draw_text(
            &format!(
                "Cam: ({:.1}, {:.1}, {:.1}) | Yaw {:.0} Pitch {:.0}",
                camera.position.x,
                camera.position.y,
                camera.position.z,
                camera.yaw_degrees(),
                camera.pitch_degrees(),
            ),
            8.0,
            20.0,
            20.0,
            YELLOW,
        );
        draw_text(
            &format!(
                "{} [M] | {} tris, {} culled, {} clipped",
                ctx.settings.mode.label(),
                stats.triangles_drawn,
                stats.triangles_culled,
                stats.triangles_clipped,
            ),
            8.0,
            40.0,
            20.0,
            YELLOW,
        );

        next_frame().await;
    }
}
