//! An orange rectangle drawn from four indexed vertices.

use std::process::ExitCode;

use glow::HasContext;
use glpractice::{
    abs::{App, Mesh, ShaderProgram},
    input::{KeyboardState, MouseState},
    shapes::{RECTANGLE_INDICES, RECTANGLE_POSITIONS},
};

const VERTEX_SHADER: &str = r#"#version 330 core
layout (location = 0) in vec3 aPos;
void main()
{
    gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);
}
"#;

const FRAGMENT_SHADER: &str = r#"#version 330 core
out vec4 FragColor;
void main()
{
    FragColor = vec4(1.0f, 0.5f, 0.2f, 1.0f);
}
"#;

fn main() -> ExitCode {
    let settings = glpractice::init();
    glpractice::exit_code(run(&settings))
}

fn run(settings: &glpractice::settings::Settings) -> Result<(), String> {
    let mut app = App::new("OpenGL Practice 01", settings)?;

    let program = ShaderProgram::from_sources(&app.gl, VERTEX_SHADER, FRAGMENT_SHADER)?;
    let rectangle = Mesh::new(
        &app.gl,
        &RECTANGLE_POSITIONS,
        &RECTANGLE_INDICES,
        glow::TRIANGLES,
    )?;

    let mut keyboard = KeyboardState::default();
    let mut mouse = MouseState::default();

    while app.pump_events(&mut keyboard, &mut mouse) {
        unsafe {
            app.gl.clear_color(0.2, 0.3, 0.3, 1.0);
            app.gl.clear(glow::COLOR_BUFFER_BIT);
        }

        program.use_program();
        rectangle.draw();

        app.swap();
    }

    Ok(())
}
