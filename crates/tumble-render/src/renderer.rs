//! Per-frame drawing of the assembled die.

use glam::{Mat4, Quat};
use tumble_die::DieModel;

use crate::buffer::{BufferAllocator, MeshBuffer, VertexPositionNormalColor, append_colored_mesh};
use crate::camera::Camera;
use crate::depth::DepthBuffer;
use crate::pipeline::{DIE_SHADER_SOURCE, DiePipeline, ModelUniform};

/// Background clear color, matching the page behind the widget.
pub const BACKGROUND: wgpu::Color = wgpu::Color {
    r: 0.07,
    g: 0.08,
    b: 0.1,
    a: 1.0,
};

/// Uploads the die once and draws it each frame with the current camera
/// and orientation.
///
/// Parts are split by opacity: the body and pips go into one opaque
/// buffer, the translucent outline shell into a blended one drawn after
/// it. The whole die shares a single model matrix, so a frame is two
/// draw calls.
pub struct DieRenderer {
    pipeline: DiePipeline,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    model_buffer: wgpu::Buffer,
    model_bind_group: wgpu::BindGroup,
    opaque_mesh: MeshBuffer,
    shell_mesh: Option<MeshBuffer>,
}

impl DieRenderer {
    /// Builds pipelines, uploads the die geometry, and allocates the
    /// per-frame uniform buffers.
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        model: &DieModel,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("die-shader"),
            source: wgpu::ShaderSource::Wgsl(DIE_SHADER_SOURCE.into()),
        });
        let pipeline = DiePipeline::new(
            device,
            &shader,
            surface_format,
            Some(DepthBuffer::FORMAT),
        );

        let mut opaque_vertices: Vec<VertexPositionNormalColor> = Vec::new();
        let mut opaque_indices: Vec<u32> = Vec::new();
        let mut shell_vertices: Vec<VertexPositionNormalColor> = Vec::new();
        let mut shell_indices: Vec<u32> = Vec::new();
        for part in &model.parts {
            if part.color[3] < 1.0 {
                append_colored_mesh(&mut shell_vertices, &mut shell_indices, &part.mesh, part.color);
            } else {
                append_colored_mesh(
                    &mut opaque_vertices,
                    &mut opaque_indices,
                    &part.mesh,
                    part.color,
                );
            }
        }

        let allocator = BufferAllocator::new(device);
        let opaque_mesh = allocator.create_mesh("die-opaque", &opaque_vertices, &opaque_indices);
        let shell_mesh = (!shell_indices.is_empty())
            .then(|| allocator.create_mesh("die-shell", &shell_vertices, &shell_indices));

        let camera_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("die-camera-uniform"),
            size: std::mem::size_of::<crate::pipeline::CameraUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("die-camera-bg"),
            layout: &pipeline.camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        let model_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("die-model-uniform"),
            size: std::mem::size_of::<ModelUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let model_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("die-model-bg"),
            layout: &pipeline.model_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: model_buffer.as_entire_binding(),
            }],
        });

        Self {
            pipeline,
            camera_buffer,
            camera_bind_group,
            model_buffer,
            model_bind_group,
            opaque_mesh,
            shell_mesh,
        }
    }

    /// Uploads the camera uniform for this frame.
    pub fn update_camera(&self, queue: &wgpu::Queue, camera: &Camera) {
        let uniform = camera.to_uniform();
        queue.write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(&uniform));
    }

    /// Uploads the die orientation for this frame.
    pub fn update_orientation(&self, queue: &wgpu::Queue, orientation: Quat) {
        let uniform = ModelUniform {
            model: Mat4::from_quat(orientation).to_cols_array_2d(),
        };
        queue.write_buffer(&self.model_buffer, 0, bytemuck::bytes_of(&uniform));
    }

    /// Records the die into an already-begun render pass.
    pub fn draw<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        render_pass.set_bind_group(0, &self.camera_bind_group, &[]);
        render_pass.set_bind_group(1, &self.model_bind_group, &[]);

        render_pass.set_pipeline(&self.pipeline.opaque);
        self.opaque_mesh.bind(render_pass);
        self.opaque_mesh.draw(render_pass);

        if let Some(shell) = &self.shell_mesh {
            render_pass.set_pipeline(&self.pipeline.blended);
            shell.bind(render_pass);
            shell.draw(render_pass);
        }
    }

    /// Encodes a full frame: one pass clearing color and depth, then the
    /// two die draws.
    pub fn render_frame(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        color_view: &wgpu::TextureView,
        depth: &DepthBuffer,
    ) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("die-pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(BACKGROUND),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &depth.view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(DepthBuffer::CLEAR_VALUE),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        self.draw(&mut render_pass);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tumble_die::DieStyle;

    fn create_test_device() -> Option<(wgpu::Device, wgpu::Queue)> {
        pollster::block_on(async {
            let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
                backends: wgpu::Backends::all(),
                ..Default::default()
            });

            let adapter = instance
                .request_adapter(&wgpu::RequestAdapterOptions {
                    power_preference: wgpu::PowerPreference::default(),
                    compatible_surface: None,
                    force_fallback_adapter: false,
                })
                .await
                .ok()?;

            adapter
                .request_device(&wgpu::DeviceDescriptor::default())
                .await
                .ok()
        })
    }

    #[test]
    fn test_renderer_uploads_default_die() {
        let Some((device, queue)) = create_test_device() else {
            return;
        };
        let model = DieModel::build(&DieStyle::default());
        let renderer = DieRenderer::new(&device, wgpu::TextureFormat::Bgra8UnormSrgb, &model);

        // Default style has a translucent shell, so both buffers exist.
        assert!(renderer.shell_mesh.is_some());
        assert!(renderer.opaque_mesh.index_count > 0);

        renderer.update_camera(&queue, &Camera::default());
        renderer.update_orientation(&queue, tumble_die::initial_orientation());
    }

    #[test]
    fn test_fully_opaque_style_skips_the_blend_pass() {
        let Some((device, _queue)) = create_test_device() else {
            return;
        };
        let style = DieStyle {
            shell_color: [0.678, 0.847, 0.902, 1.0],
            ..DieStyle::default()
        };
        let model = DieModel::build(&style);
        let renderer = DieRenderer::new(&device, wgpu::TextureFormat::Bgra8UnormSrgb, &model);
        assert!(renderer.shell_mesh.is_none());
    }

    #[test]
    fn test_opaque_split_accounts_for_every_part_index() {
        let model = DieModel::build(&DieStyle::default());
        let total: usize = model.parts.iter().map(|p| p.mesh.indices.len()).sum();

        let mut opaque = 0;
        let mut blended = 0;
        for part in &model.parts {
            if part.color[3] < 1.0 {
                blended += part.mesh.indices.len();
            } else {
                opaque += part.mesh.indices.len();
            }
        }
        assert_eq!(opaque + blended, total);
        assert!(blended > 0, "default shell should be translucent");
    }
}
