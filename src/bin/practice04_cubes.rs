//! Ten textured cubes tumbling in front of a fixed camera.

use std::process::ExitCode;

use glow::HasContext;
use glpractice::{
    abs::{App, Mesh, ShaderProgram, TextureOptions, load_or_log},
    clock::FrameClock,
    input::{KeyboardState, MouseState},
    shapes::{CUBE_POSITIONS, cube},
    transform,
};

fn main() -> ExitCode {
    let settings = glpractice::init();
    glpractice::exit_code(run(&settings))
}

fn run(settings: &glpractice::settings::Settings) -> Result<(), String> {
    let mut app = App::new("OpenGL Practice 04", settings)?;

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
    program.set_uniform("view", transform::initial_view());

    let clock = FrameClock::new();
    let mut keyboard = KeyboardState::default();
    let mut mouse = MouseState::default();

    while app.pump_events(&mut keyboard, &mut mouse) {
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
        program.set_uniform(
            "projection",
            transform::perspective(45.0, app.aspect_ratio()),
        );

        let t = clock.elapsed();
        for (i, position) in CUBE_POSITIONS.iter().enumerate() {
            program.set_uniform("model", transform::cube_model(*position, i, t));
            cube.draw();
        }

        app.swap();
    }

    Ok(())
}
