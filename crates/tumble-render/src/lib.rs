//! wgpu rendering for the die widget: device setup, camera, depth, mesh
//! buffers, and the die pipeline.

pub mod buffer;
pub mod camera;
pub mod context;
pub mod depth;
pub mod pipeline;
pub mod renderer;
pub mod surface;

pub use buffer::{BufferAllocator, MeshBuffer, VertexPositionNormalColor};
pub use camera::Camera;
pub use context::{RenderContext, RenderContextError, SurfaceError, init_render_context_blocking};
pub use depth::DepthBuffer;
pub use pipeline::{CameraUniform, DIE_SHADER_SOURCE, DiePipeline, ModelUniform};
pub use renderer::DieRenderer;
pub use surface::Viewport;
