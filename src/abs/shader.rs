//! OpenGL Shaders
//!
//! This module defines the [`Shader`] and [`ShaderProgram`] structs for managing OpenGL shaders.
//! This module also provides the [`Uniform`] trait for setting uniform variables in shader
//! programs, and [`ShaderProgram::from_files`] for building a program out of two source files
//! on disk.

use std::{path::Path, sync::Arc};

use glam::{Mat4, Vec3};
use glow::HasContext;

/// Represents an individual OpenGL shader.
pub struct Shader {
    gl: Arc<glow::Context>,
    id: glow::Shader,
}

impl Shader {
    /// Compiles a new shader from the given source code.
    ///
    /// On failure the compiler info log is returned as the error.
    pub fn new(gl: &Arc<glow::Context>, shader_type: u32, source: &str) -> Result<Self, String> {
        unsafe {
            let shader = gl.create_shader(shader_type).map_err(|e| e.to_string())?;
            gl.shader_source(shader, source);
            gl.compile_shader(shader);

            if !gl.get_shader_compile_status(shader) {
                let log = gl.get_shader_info_log(shader);
                gl.delete_shader(shader);
                return Err(log);
            }

            Ok(Self {
                gl: Arc::clone(gl),
                id: shader,
            })
        }
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_shader(self.id);
        }
    }
}

/// Human readable stage name used in diagnostics.
pub fn stage_name(shader_type: u32) -> &'static str {
    match shader_type {
        glow::VERTEX_SHADER => "VERTEX",
        glow::FRAGMENT_SHADER => "FRAGMENT",
        glow::GEOMETRY_SHADER => "GEOMETRY",
        _ => "UNKNOWN",
    }
}

pub fn compile_failure(shader_type: u32, info_log: &str) -> String {
    format!(
        "ERROR::SHADER::{}::COMPILATION_FAILED\n{}",
        stage_name(shader_type),
        info_log
    )
}

pub fn link_failure(info_log: &str) -> String {
    format!("ERROR::SHADER::PROGRAM::LINKING_FAILED\n{}", info_log)
}

/// Keeps the stages that compiled, in order, and turns the rest into diagnostics.
pub fn split_compiled<T>(results: Vec<(u32, Result<T, String>)>) -> (Vec<T>, Vec<String>) {
    let mut compiled = Vec::new();
    let mut failures = Vec::new();
    for (shader_type, result) in results {
        match result {
            Ok(stage) => compiled.push(stage),
            Err(info_log) => failures.push(compile_failure(shader_type, &info_log)),
        }
    }
    (compiled, failures)
}

/// Reads a shader source file.
///
/// A file that cannot be read is reported and yields an empty source, so the
/// caller carries on and the compiler reports the rest.
pub fn read_source<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            log::error!(
                "ERROR::SHADER::FILE_NOT_SUCCESSFULLY_READ {}: {}",
                path.display(),
                e
            );
            String::new()
        }
    }
}

/// Represents a uniform variable in a shader program.
pub trait Uniform {
    /// Sets the value of the uniform variable in the given shader program.
    fn set_uniform(&self, gl: &glow::Context, program: glow::Program, name: &str);
}

impl Uniform for bool {
    fn set_uniform(&self, gl: &glow::Context, program: glow::Program, name: &str) {
        unsafe {
            let location = gl.get_uniform_location(program, name);
            if let Some(loc) = location {
                gl.uniform_1_i32(Some(&loc), *self as i32);
            }
        }
    }
}

impl Uniform for f32 {
    fn set_uniform(&self, gl: &glow::Context, program: glow::Program, name: &str) {
        unsafe {
            let location = gl.get_uniform_location(program, name);
            if let Some(loc) = location {
                gl.uniform_1_f32(Some(&loc), *self);
            }
        }
    }
}

impl Uniform for i32 {
    fn set_uniform(&self, gl: &glow::Context, program: glow::Program, name: &str) {
        unsafe {
            let location = gl.get_uniform_location(program, name);
            if let Some(loc) = location {
                gl.uniform_1_i32(Some(&loc), *self);
            }
        }
    }
}

impl Uniform for Vec3 {
    fn set_uniform(&self, gl: &glow::Context, program: glow::Program, name: &str) {
        unsafe {
            let location = gl.get_uniform_location(program, name);
            if let Some(loc) = location {
                gl.uniform_3_f32(Some(&loc), self.x, self.y, self.z);
            }
        }
    }
}

impl Uniform for Mat4 {
    fn set_uniform(&self, gl: &glow::Context, program: glow::Program, name: &str) {
        unsafe {
            let location = gl.get_uniform_location(program, name);
            if let Some(loc) = location {
                gl.uniform_matrix_4_f32_slice(Some(&loc), false, self.as_ref());
            }
        }
    }
}

/// Represents an OpenGL shader program composed of multiple shaders.
pub struct ShaderProgram {
    gl: Arc<glow::Context>,
    id: glow::Program,
    linked: bool,
}

impl ShaderProgram {
    /// Builds a program from a vertex and a fragment shader file.
    ///
    /// Unreadable files, compile errors and link errors are logged and do not
    /// abort: the returned program may be unlinked, in which case drawing with
    /// it produces nothing. Only a failure to allocate the program object is
    /// returned as an error.
    pub fn from_files<P: AsRef<Path>, Q: AsRef<Path>>(
        gl: &Arc<glow::Context>,
        vertex_path: P,
        fragment_path: Q,
    ) -> Result<Self, String> {
        log::debug!(
            "Building shader program from {} and {}",
            vertex_path.as_ref().display(),
            fragment_path.as_ref().display()
        );
        Self::from_sources(
            gl,
            &read_source(vertex_path.as_ref()),
            &read_source(fragment_path.as_ref()),
        )
    }

    /// Same as [`ShaderProgram::from_files`], for sources already in memory.
    pub fn from_sources(
        gl: &Arc<glow::Context>,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<Self, String> {
        let sources = [
            (glow::VERTEX_SHADER, vertex_source),
            (glow::FRAGMENT_SHADER, fragment_source),
        ];

        let results = sources
            .iter()
            .map(|&(shader_type, source)| (shader_type, Shader::new(gl, shader_type, source)))
            .collect();
        let (shaders, failures) = split_compiled(results);
        for failure in failures {
            log::error!("{}", failure);
        }

        unsafe {
            let program = gl.create_program().map_err(|e| e.to_string())?;
            for shader in &shaders {
                gl.attach_shader(program, shader.id);
            }
            gl.link_program(program);

            let linked = gl.get_program_link_status(program);
            if !linked {
                log::error!("{}", link_failure(&gl.get_program_info_log(program)));
            }

            for shader in &shaders {
                gl.detach_shader(program, shader.id);
            }

            Ok(Self {
                gl: Arc::clone(gl),
                id: program,
                linked,
            })
        }
    }

    /// Returns `false` if linking failed and the program cannot draw.
    pub fn is_linked(&self) -> bool {
        self.linked
    }

    /// Binds the shader program for use.
    pub fn use_program(&self) {
        unsafe {
            self.gl.use_program(Some(self.id));
        }
    }

    /// Looks up a uniform by name. Unknown or optimized out names yield `None`.
    pub fn uniform_location(&self, name: &str) -> Option<glow::UniformLocation> {
        unsafe { self.gl.get_uniform_location(self.id, name) }
    }

    /// Sets a uniform variable in the shader program.
    pub fn set_uniform<T: Uniform>(&self, name: &str, value: T) {
        value.set_uniform(&self.gl, self.id, name);
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_source_returns_file_contents() {
        let path = std::env::temp_dir().join("glpractice_read_source_ok.glsl");
        std::fs::write(&path, "#version 330 core\nvoid main() {}\n").unwrap();

        let source = read_source(&path);
        assert!(source.starts_with("#version 330 core"));
        assert!(source.contains("void main()"));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn read_source_missing_file_is_empty() {
        let path = std::env::temp_dir().join("glpractice_definitely_missing.glsl");
        let _ = std::fs::remove_file(&path);
        assert_eq!(read_source(&path), "");
    }

    #[test]
    fn failed_stage_is_skipped_and_reported() {
        let (compiled, failures) = split_compiled(vec![
            (
                glow::VERTEX_SHADER,
                Err::<&str, _>("0:3(1): error: syntax error".to_string()),
            ),
            (glow::FRAGMENT_SHADER, Ok("fragment")),
        ]);
        assert_eq!(compiled, vec!["fragment"]);
        assert_eq!(
            failures,
            vec!["ERROR::SHADER::VERTEX::COMPILATION_FAILED\n0:3(1): error: syntax error"]
        );
    }

    #[test]
    fn empty_sources_fail_both_stages() {
        let (compiled, failures) = split_compiled(vec![
            (glow::VERTEX_SHADER, Err::<(), _>(String::new())),
            (glow::FRAGMENT_SHADER, Err(String::new())),
        ]);
        assert!(compiled.is_empty());
        assert_eq!(failures.len(), 2);
        assert!(failures[1].starts_with("ERROR::SHADER::FRAGMENT::COMPILATION_FAILED"));
    }

    #[test]
    fn link_failure_message() {
        assert_eq!(
            link_failure("error: vertex shader missing"),
            "ERROR::SHADER::PROGRAM::LINKING_FAILED\nerror: vertex shader missing"
        );
    }

    fn settable<T: Uniform>(_: T) {}

    #[test]
    fn uniform_types_used_by_the_programs() {
        settable(true);
        settable(1i32);
        settable(0.2f32);
        settable(Vec3::ONE);
        settable(Mat4::IDENTITY);
    }

    #[test]
    fn stage_names() {
        assert_eq!(stage_name(glow::VERTEX_SHADER), "VERTEX");
        assert_eq!(stage_name(glow::FRAGMENT_SHADER), "FRAGMENT");
        assert_eq!(stage_name(0), "UNKNOWN");
    }
}
