//! Static indexed mesh wrapper (VAO + VBO + EBO).
//!
//! One interleaved vertex format for all the demos: position, uv, normal
//! at attribute locations 0, 1, 2.

use glow::HasContext;
use nova_render::{Error, Result};
use std::mem;
use std::rc::Rc;

/// Interleaved vertex as the demo shaders consume it.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
    pub normal: [f32; 3],
}

impl Vertex {
    pub const fn new(position: [f32; 3], uv: [f32; 2], normal: [f32; 3]) -> Self {
        Self {
            position,
            uv,
            normal,
        }
    }
}

/// Static geometry uploaded once and drawn as indexed triangles.
pub struct Mesh {
    gl: Rc<glow::Context>,
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    ebo: glow::Buffer,
    index_count: i32,
}

impl Mesh {
    /// Upload vertices and triangle indices.
    pub fn new(gl: Rc<glow::Context>, vertices: &[Vertex], indices: &[u32]) -> Result<Self> {
        let stride = mem::size_of::<Vertex>() as i32;
        unsafe {
            let vao = gl.create_vertex_array().map_err(Error::BackendError)?;
            gl.bind_vertex_array(Some(vao));

            let vbo = gl.create_buffer().map_err(Error::BackendError)?;
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(vertices),
                glow::STATIC_DRAW,
            );

            // position / uv / normal at locations 0 / 1 / 2
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(1, 2, glow::FLOAT, false, stride, 3 * 4);
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(2, 3, glow::FLOAT, false, stride, 5 * 4);
            gl.enable_vertex_attrib_array(2);

            let ebo = gl.create_buffer().map_err(Error::BackendError)?;
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo));
            gl.buffer_data_u8_slice(
                glow::ELEMENT_ARRAY_BUFFER,
                bytemuck::cast_slice(indices),
                glow::STATIC_DRAW,
            );

            Ok(Self {
                gl,
                vao,
                vbo,
                ebo,
                index_count: indices.len() as i32,
            })
        }
    }

    /// Draw the whole mesh with the currently bound program.
    pub fn draw(&self) {
        unsafe {
            self.gl.bind_vertex_array(Some(self.vao));
            self.gl
                .draw_elements(glow::TRIANGLES, self.index_count, glow::UNSIGNED_INT, 0);
        }
    }

    /// Number of indices uploaded.
    pub fn index_count(&self) -> i32 {
        self.index_count
    }
}

impl Drop for Mesh {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_buffer(self.ebo);
            self.gl.delete_buffer(self.vbo);
            self.gl.delete_vertex_array(self.vao);
        }
    }
}

#[cfg(test)]
#[path = "mesh_tests.rs"]
mod tests;
