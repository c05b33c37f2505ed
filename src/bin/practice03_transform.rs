//! The textured rectangle spun and scaled by a transformation matrix.

use std::process::ExitCode;

use glow::HasContext;
use glpractice::{
    abs::{App, Mesh, ShaderProgram, TextureOptions, load_or_log},
    clock::FrameClock,
    input::{KeyboardState, MouseState},
    shapes::{RECTANGLE_INDICES, textured_rectangle},
    transform,
};

fn main() -> ExitCode {
    let settings = glpractice::init();
    glpractice::exit_code(run(&settings))
}

fn run(settings: &glpractice::settings::Settings) -> Result<(), String> {
    let mut app = App::new("OpenGL Practice 03", settings)?;

    let program = ShaderProgram::from_files(
        &app.gl,
        "shaders/transform/vert.glsl",
        "shaders/transform/frag.glsl",
    )?;
    if !program.is_linked() {
        log::warn!("Transform shader did not link, the rectangle will not be drawn");
    }
    let rectangle = Mesh::new(
        &app.gl,
        &textured_rectangle(),
        &RECTANGLE_INDICES,
        glow::TRIANGLES,
    )?;

    let texture1 = load_or_log(
        &app.gl,
        "assets/incoming.png",
        TextureOptions::default()
            .wrap(glow::MIRRORED_REPEAT)
            .filters(glow::NEAREST, glow::LINEAR),
        "texture 1",
    );
    let texture2 = load_or_log(
        &app.gl,
        "assets/comfort.png",
        TextureOptions::default().filters(glow::LINEAR, glow::LINEAR),
        "texture 2",
    );

    program.use_program();
    // Set directly through the location, then through the helper.
    if let Some(location) = program.uniform_location("texture01") {
        unsafe { app.gl.uniform_1_i32(Some(&location), 0) };
    }
    program.set_uniform("texture02", 1);

    let clock = FrameClock::new();
    let mut keyboard = KeyboardState::default();
    let mut mouse = MouseState::default();

    while app.pump_events(&mut keyboard, &mut mouse) {
        unsafe {
            app.gl.clear_color(0.2, 0.3, 0.3, 1.0);
            app.gl.clear(glow::COLOR_BUFFER_BIT);
        }

        if let Some(texture) = &texture1 {
            texture.bind(0);
        }
        if let Some(texture) = &texture2 {
            texture.bind(1);
        }

        program.use_program();
        program.set_uniform("transform", transform::pulse(clock.elapsed()));
        rectangle.draw();

        app.swap();
    }

    Ok(())
}
