//! Mesh management module.
//!
//! This module defines the [`Mesh`] struct for managing mesh data on the GPU side.
//! Vertices should implement the [`Vertex`] trait. The vertex layouts used by the
//! practice programs live here too.

use std::sync::Arc;

use glow::HasContext;

/// Trait that defines the necessary methods for a vertex.
pub trait Vertex {
    /// Sets up the vertex attribute pointers for the vertex.
    fn vertex_attribs(gl: &glow::Context);
}

const F32: i32 = std::mem::size_of::<f32>() as i32;

/// Position only, attribute 0.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionVertex {
    pub position: [f32; 3],
}

impl Vertex for PositionVertex {
    fn vertex_attribs(gl: &glow::Context) {
        let stride = std::mem::size_of::<Self>() as i32;
        unsafe {
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);
            gl.enable_vertex_attrib_array(0);
        }
    }
}

/// Position (0), color (1) and texture coordinates (2).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorTexVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub tex_coords: [f32; 2],
}

impl Vertex for ColorTexVertex {
    fn vertex_attribs(gl: &glow::Context) {
        let stride = std::mem::size_of::<Self>() as i32;
        unsafe {
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(1, 3, glow::FLOAT, false, stride, 3 * F32);
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(2, 2, glow::FLOAT, false, stride, 6 * F32);
            gl.enable_vertex_attrib_array(2);
        }
    }
}

/// Position (0) and texture coordinates (1).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TexVertex {
    pub position: [f32; 3],
    pub tex_coords: [f32; 2],
}

impl Vertex for TexVertex {
    fn vertex_attribs(gl: &glow::Context) {
        let stride = std::mem::size_of::<Self>() as i32;
        unsafe {
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(1, 2, glow::FLOAT, false, stride, 3 * F32);
            gl.enable_vertex_attrib_array(1);
        }
    }
}

/// Represents a mesh stored on the GPU side.
pub struct Mesh {
    gl: Arc<glow::Context>,
    draw_mode: u32,
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    ebo: glow::Buffer,
    index_count: usize,
}

impl Mesh {
    /// Uploads the given vertex and index data once, for static geometry.
    pub fn new<V: Vertex>(
        gl: &Arc<glow::Context>,
        vertices: &[V],
        indices: &[u32],
        draw_mode: u32,
    ) -> Result<Self, String> {
        unsafe {
            let vao = gl.create_vertex_array()?;
            let vbo = gl.create_buffer()?;
            let ebo = gl.create_buffer()?;

            // The VAO records the element buffer binding and the attribute layout.
            gl.bind_vertex_array(Some(vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                std::slice::from_raw_parts(
                    vertices.as_ptr() as *const u8,
                    std::mem::size_of_val(vertices),
                ),
                glow::STATIC_DRAW,
            );

            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo));
            gl.buffer_data_u8_slice(
                glow::ELEMENT_ARRAY_BUFFER,
                std::slice::from_raw_parts(
                    indices.as_ptr() as *const u8,
                    std::mem::size_of_val(indices),
                ),
                glow::STATIC_DRAW,
            );

            V::vertex_attribs(gl);

            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None);

            log::debug!(
                "Uploaded mesh: {} vertices, {} indices",
                vertices.len(),
                indices.len()
            );

            Ok(Self {
                gl: Arc::clone(gl),
                draw_mode,
                vao,
                vbo,
                ebo,
                index_count: indices.len(),
            })
        }
    }

    /// Draws the mesh.
    pub fn draw(&self) {
        unsafe {
            self.gl.bind_vertex_array(Some(self.vao));
            self.gl
                .draw_elements(self.draw_mode, self.index_count as i32, glow::UNSIGNED_INT, 0);
            self.gl.bind_vertex_array(None);
        }
    }
}

impl Drop for Mesh {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_buffer(self.vbo);
            self.gl.delete_buffer(self.ebo);
            self.gl.delete_vertex_array(self.vao);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_strides_match_attribute_layouts() {
        assert_eq!(std::mem::size_of::<PositionVertex>(), 3 * 4);
        assert_eq!(std::mem::size_of::<ColorTexVertex>(), 8 * 4);
        assert_eq!(std::mem::size_of::<TexVertex>(), 5 * 4);
    }

    #[test]
    fn interleaved_offsets() {
        assert_eq!(std::mem::offset_of!(ColorTexVertex, color), 3 * F32 as usize);
        assert_eq!(std::mem::offset_of!(ColorTexVertex, tex_coords), 6 * F32 as usize);
        assert_eq!(std::mem::offset_of!(TexVertex, tex_coords), 3 * F32 as usize);
    }
}
