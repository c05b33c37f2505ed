//! Two textures blended on a colored rectangle, with the shader loaded from files.
//!
//! Up/Down change the blend between the textures, H mirrors them horizontally and
//! R, G and B switch the corner colors' channels on and off.

use std::process::ExitCode;

use glam::Vec3;
use glow::HasContext;
use glpractice::{
    abs::{App, Mesh, ShaderProgram, TextureOptions, load_or_log},
    clock::FrameClock,
    input::{KeyboardState, MouseState},
    shapes::{RECTANGLE_INDICES, textured_rectangle},
};
use sdl2::keyboard::Keycode;

fn main() -> ExitCode {
    let settings = glpractice::init();
    glpractice::exit_code(run(&settings))
}

fn run(settings: &glpractice::settings::Settings) -> Result<(), String> {
    let mut app = App::new("OpenGL Practice 02", settings)?;

    let program = ShaderProgram::from_files(
        &app.gl,
        "shaders/textured/vert.glsl",
        "shaders/textured/frag.glsl",
    )?;
    if !program.is_linked() {
        log::warn!("Textured shader did not link, the rectangle will not be drawn");
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
    program.set_uniform("texture01", 0);
    program.set_uniform("texture02", 1);

    let mut mix_value: f32 = 0.2;
    let mut flip = false;
    let mut tint = Vec3::ONE;
    let mut clock = FrameClock::new();
    let mut keyboard = KeyboardState::default();
    let mut mouse = MouseState::default();

    while app.pump_events(&mut keyboard, &mut mouse) {
        let delta_time = clock.tick();
        mix_value = (mix_value + keyboard.axis(Keycode::Up, Keycode::Down) * delta_time)
            .clamp(0.0, 1.0);
        if keyboard.pressed.contains(&Keycode::H) {
            flip = !flip;
        }
        for (key, channel) in [(Keycode::R, 0), (Keycode::G, 1), (Keycode::B, 2)] {
            if keyboard.pressed.contains(&key) {
                tint[channel] = 1.0 - tint[channel];
            }
        }

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
        program.set_uniform("mixValue", mix_value);
        program.set_uniform("flipHorizontal", flip);
        program.set_uniform("tint", tint);
        rectangle.draw();

        app.swap();
    }

    Ok(())
}
