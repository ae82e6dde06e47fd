//! Vertex and index buffer management for the die meshes.

use bytemuck::{Pod, Zeroable};
use tumble_geom::MeshData;

/// Vertex format for the die: position, normal, and per-vertex color.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct VertexPositionNormalColor {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

impl VertexPositionNormalColor {
    /// Get the vertex buffer layout for this vertex type.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        use wgpu::{VertexAttribute, VertexFormat};

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<VertexPositionNormalColor>()
                as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: VertexFormat::Float32x3,
                },
                VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: VertexFormat::Float32x3,
                },
                VertexAttribute {
                    offset: (std::mem::size_of::<[f32; 3]>() * 2) as wgpu::BufferAddress,
                    shader_location: 2,
                    format: VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// A mesh uploaded to the GPU, ready for indexed drawing.
pub struct MeshBuffer {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}

impl MeshBuffer {
    /// Bind vertex and index buffers to a render pass.
    pub fn bind<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
    }

    /// Draw the entire mesh using indexed rendering.
    pub fn draw(&self, render_pass: &mut wgpu::RenderPass) {
        render_pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

/// GPU buffer allocator for creating vertex and index buffers.
pub struct BufferAllocator<'a> {
    device: &'a wgpu::Device,
}

impl<'a> BufferAllocator<'a> {
    /// Create a new buffer allocator with the given device.
    pub fn new(device: &'a wgpu::Device) -> Self {
        Self { device }
    }

    /// Create a complete mesh buffer from vertices and u32 indices.
    pub fn create_mesh(
        &self,
        label: &str,
        vertices: &[VertexPositionNormalColor],
        indices: &[u32],
    ) -> MeshBuffer {
        use wgpu::util::DeviceExt;

        let vertex_buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label}-vertices")),
                contents: bytemuck::cast_slice(vertices),
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            });

        let index_buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label}-indices")),
                contents: bytemuck::cast_slice(indices),
                usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
            });

        MeshBuffer {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
        }
    }
}

/// Appends a uniformly colored mesh to a vertex/index soup, offsetting
/// indices past the vertices already present.
pub fn append_colored_mesh(
    vertices: &mut Vec<VertexPositionNormalColor>,
    indices: &mut Vec<u32>,
    mesh: &MeshData,
    color: [f32; 4],
) {
    let base = vertices.len() as u32;
    for (position, normal) in mesh.positions.iter().zip(&mesh.normals) {
        vertices.push(VertexPositionNormalColor {
            position: position.to_array(),
            normal: normal.to_array(),
            color,
        });
    }
    indices.extend(mesh.indices.iter().map(|i| i + base));
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn triangle() -> MeshData {
        MeshData {
            positions: vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            normals: vec![Vec3::Z; 3],
            indices: vec![0, 1, 2],
        }
    }

    #[test]
    fn test_vertex_layout_stride_and_locations() {
        let layout = VertexPositionNormalColor::layout();
        // position (f32x3) + normal (f32x3) + color (f32x4) = 40 bytes
        assert_eq!(layout.array_stride, 40);
        assert_eq!(layout.attributes.len(), 3);
        assert_eq!(layout.attributes[0].shader_location, 0);
        assert_eq!(layout.attributes[1].shader_location, 1);
        assert_eq!(layout.attributes[1].offset, 12);
        assert_eq!(layout.attributes[2].shader_location, 2);
        assert_eq!(layout.attributes[2].offset, 24);
    }

    #[test]
    fn test_append_offsets_indices() {
        let mut vertices = Vec::new();
        let mut indices = Vec::new();
        append_colored_mesh(&mut vertices, &mut indices, &triangle(), [1.0; 4]);
        append_colored_mesh(&mut vertices, &mut indices, &triangle(), [0.5; 4]);

        assert_eq!(vertices.len(), 6);
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_append_applies_the_part_color() {
        let mut vertices = Vec::new();
        let mut indices = Vec::new();
        let color = [0.1, 0.2, 0.3, 0.9];
        append_colored_mesh(&mut vertices, &mut indices, &triangle(), color);
        for v in &vertices {
            assert_eq!(v.color, color);
        }
    }

}
