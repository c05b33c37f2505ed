//! Free-flying camera: WASD to move, the mouse to look around, the wheel to zoom.

use std::{process::ExitCode, time::Duration};

use glow::HasContext;
use glpractice::{
    abs::{App, Mesh, ShaderProgram, TextureOptions, load_or_log},
    camera::{Camera, Movement},
    clock::{FpsCounter, FrameClock},
    input::{KeyboardState, MouseState},
    shapes::{CUBE_POSITIONS, cube},
    transform,
};
use sdl2::keyboard::Keycode;

const MOVEMENT_KEYS: [(Keycode, Movement); 4] = [
    (Keycode::W, Movement::Forward),
    (Keycode::S, Movement::Backward),
    (Keycode::A, Movement::Left),
    (Keycode::D, Movement::Right),
];

fn main() -> ExitCode {
    let settings = glpractice::init();
    glpractice::exit_code(run(&settings))
}

fn run(settings: &glpractice::settings::Settings) -> Result<(), String> {
    let mut app = App::new("OpenGL Practice 06", settings)?;
    app.capture_mouse(true);

    unsafe {
        app.gl.enable(glow::DEPTH_TEST);
    }

    let program =
        ShaderProgram::from_files(&app.gl, "shaders/cube/vert.glsl", "shaders/cube/frag.glsl")?;
    if !program.is_linked() {
        log::warn!("Cube shader did not link, the cubes will not be drawn");
    }
    let (vertices, indices) = cube();
    let cube = Mesh::new(&app.gl, &vertices, &indices, glow::TRIANGLES)?;

    let texture1 = load_or_log(
        &app.gl,
        "assets/incoming.png",
        TextureOptions::default(),
        "texture 1",
    );
    let texture2 = load_or_log(
        &app.gl,
        "assets/comfort.png",
        TextureOptions::default(),
        "texture 2",
    );

    program.use_program();
    program.set_uniform("texture01", 0);
    program.set_uniform("texture02", 1);
    program.set_uniform("mixValue", 0.2f32);

    let mut camera = Camera::default();
    camera.speed = settings.camera_speed;
    camera.sensitivity = settings.mouse_sensitivity;

    let mut clock = FrameClock::new();
    let mut fps = FpsCounter::new(Duration::from_secs(5));
    let mut keyboard = KeyboardState::default();
    let mut mouse = MouseState::default();

    while app.pump_events(&mut keyboard, &mut mouse) {
        let delta_time = clock.tick();
        if let Some(rate) = fps.frame(delta_time) {
            log::debug!("{:.1} fps, camera at {}", rate, camera.position);
        }

        for (key, movement) in MOVEMENT_KEYS {
            if keyboard.is_down(key) {
                camera.process_keyboard(movement, delta_time);
            }
        }
        // Screen y grows downwards.
        camera.process_mouse(mouse.delta.x, -mouse.delta.y, true);
        camera.process_scroll(mouse.scroll_delta.y);

        unsafe {
            app.gl.clear_color(0.2, 0.3, 0.3, 1.0);
            app.gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }

        if let Some(texture) = &texture1 {
            texture.bind(0);
        }
        if let Some(texture) = &texture2 {
            texture.bind(1);
        }

        program.use_program();
        program.set_uniform("projection", camera.projection(app.aspect_ratio()));
        program.set_uniform("view", camera.view_matrix());

        let t = clock.frame_time();
        for (i, position) in CUBE_POSITIONS.iter().enumerate() {
            program.set_uniform("model", transform::cube_model(*position, i, t));
            cube.draw();
        }

        app.swap();
    }

    Ok(())
}
