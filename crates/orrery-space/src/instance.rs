//! Per-instance model matrix record for the instanced body draw.
//!
//! A 4x4 matrix does not fit in one vertex attribute, so the layout binds it
//! as four `Float32x4` columns at consecutive shader locations, advancing
//! once per instance.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use wgpu::{VertexAttribute, VertexBufferLayout, VertexFormat, VertexStepMode};

/// First shader location used by the model matrix columns.
pub const MODEL_COLUMN_BASE_LOCATION: u32 = 4;

/// GPU instance data for one body: its column-major model matrix.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ModelInstance {
    pub model: [[f32; 4]; 4],
}

static_assertions::assert_eq_size!(ModelInstance, [f32; 16]);

impl ModelInstance {
    pub fn new(model: Mat4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.model)
    }
}

impl From<Mat4> for ModelInstance {
    fn from(model: Mat4) -> Self {
        Self::new(model)
    }
}

impl Default for ModelInstance {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY)
    }
}

/// The four matrix columns, at locations 4..=7.
pub const MODEL_INSTANCE_ATTRIBUTES: [VertexAttribute; 4] = [
    VertexAttribute {
        format: VertexFormat::Float32x4,
        offset: 0,
        shader_location: MODEL_COLUMN_BASE_LOCATION,
    },
    VertexAttribute {
        format: VertexFormat::Float32x4,
        offset: 16,
        shader_location: MODEL_COLUMN_BASE_LOCATION + 1,
    },
    VertexAttribute {
        format: VertexFormat::Float32x4,
        offset: 32,
        shader_location: MODEL_COLUMN_BASE_LOCATION + 2,
    },
    VertexAttribute {
        format: VertexFormat::Float32x4,
        offset: 48,
        shader_location: MODEL_COLUMN_BASE_LOCATION + 3,
    },
];

/// Vertex buffer layout for the per-instance matrix buffer.
pub const MODEL_INSTANCE_LAYOUT: VertexBufferLayout<'static> = VertexBufferLayout {
    array_stride: std::mem::size_of::<ModelInstance>() as wgpu::BufferAddress,
    step_mode: VertexStepMode::Instance,
    attributes: &MODEL_INSTANCE_ATTRIBUTES,
};

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_instance_is_64_bytes() {
        assert_eq!(std::mem::size_of::<ModelInstance>(), 64);
        assert_eq!(MODEL_INSTANCE_LAYOUT.array_stride, 64);
    }

    #[test]
    fn test_layout_advances_per_instance() {
        assert_eq!(MODEL_INSTANCE_LAYOUT.step_mode, VertexStepMode::Instance);
    }

    #[test]
    fn test_columns_cover_the_whole_matrix() {
        for (i, attr) in MODEL_INSTANCE_ATTRIBUTES.iter().enumerate() {
            assert_eq!(attr.offset, i as u64 * 16);
            assert_eq!(attr.shader_location, MODEL_COLUMN_BASE_LOCATION + i as u32);
            assert_eq!(attr.format, VertexFormat::Float32x4);
        }
    }

    #[test]
    fn test_matrix_is_stored_column_major() {
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let instance = ModelInstance::from(m);
        assert_eq!(instance.model[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(instance.matrix(), m);

        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&instance));
        assert_eq!(&floats[12..16], &[1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn test_default_is_identity() {
        assert_eq!(ModelInstance::default().matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn test_layouts_are_valid_for_instanced_pipeline() {
        use orrery_mesh::SPHERE_VERTEX_LAYOUT;

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            force_fallback_adapter: true,
            ..Default::default()
        }));

        let Ok(adapter) = adapter else {
            return;
        };

        let Ok((device, _queue)) =
            pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor::default()))
        else {
            return;
        };

        let shader_source = r#"
            struct Camera {
                view_proj: mat4x4<f32>,
            };
            @group(0) @binding(0) var<uniform> camera: Camera;

            struct VertexInput {
                @location(0) position: vec3<f32>,
                @location(1) normal: vec3<f32>,
                @location(2) uv: vec2<f32>,
                @location(4) model_0: vec4<f32>,
                @location(5) model_1: vec4<f32>,
                @location(6) model_2: vec4<f32>,
                @location(7) model_3: vec4<f32>,
            };

            @vertex
            fn vs_main(in: VertexInput) -> @builtin(position) vec4<f32> {
                let model = mat4x4<f32>(in.model_0, in.model_1, in.model_2, in.model_3);
                return camera.view_proj * model * vec4<f32>(in.position, 1.0);
            }

            @fragment
            fn fs_main() -> @location(0) vec4<f32> {
                return vec4<f32>(1.0, 1.0, 1.0, 1.0);
            }
        "#;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("test_instanced_body_shader"),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        let _pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("test_instanced_body_pipeline"),
            layout: None,
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[SPHERE_VERTEX_LAYOUT, MODEL_INSTANCE_LAYOUT],
                compilation_options: Default::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: wgpu::TextureFormat::Bgra8UnormSrgb,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            multiview_mask: None,
            cache: None,
        });
    }
}
