//! Canonical `wgpu::VertexBufferLayout` for sphere batch rendering.
//!
//! Every pipeline that draws a [`crate::SphereBatch`] (lit, wireframe, picking)
//! references [`SPHERE_VERTEX_LAYOUT`] so the attribute offsets cannot drift
//! from [`SphereVertex`].
//!
//! ## Attribute Packing
//!
//! | Location | Offset | Format    | Field    |
//! |----------|--------|-----------|----------|
//! | 0        | 0      | Float32x3 | position |
//! | 1        | 12     | Float32x3 | normal   |
//! | 2        | 24     | Float32x2 | uv       |

use std::mem;

use wgpu::{VertexAttribute, VertexBufferLayout, VertexFormat, VertexStepMode};

use crate::vertex::SphereVertex;

/// Vertex attributes for the interleaved sphere format.
pub const SPHERE_VERTEX_ATTRIBUTES: [VertexAttribute; 3] = [
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: 0,
        shader_location: 0,
    },
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: 12,
        shader_location: 1,
    },
    VertexAttribute {
        format: VertexFormat::Float32x2,
        offset: 24,
        shader_location: 2,
    },
];

/// The per-vertex buffer layout for the shared sphere vertex buffer.
pub const SPHERE_VERTEX_LAYOUT: VertexBufferLayout<'static> = VertexBufferLayout {
    array_stride: mem::size_of::<SphereVertex>() as u64,
    step_mode: VertexStepMode::Vertex,
    attributes: &SPHERE_VERTEX_ATTRIBUTES,
};

/// Return the sphere vertex buffer layout as an owned value.
pub fn sphere_vertex_buffer_layout() -> VertexBufferLayout<'static> {
    SPHERE_VERTEX_LAYOUT
}

const _: () = assert!(
    mem::size_of::<SphereVertex>() == 32,
    "SphereVertex size changed, update SPHERE_VERTEX_LAYOUT"
);
const _: () =
    assert!(mem::offset_of!(SphereVertex, position) as u64 == SPHERE_VERTEX_ATTRIBUTES[0].offset);
const _: () =
    assert!(mem::offset_of!(SphereVertex, normal) as u64 == SPHERE_VERTEX_ATTRIBUTES[1].offset);
const _: () =
    assert!(mem::offset_of!(SphereVertex, uv) as u64 == SPHERE_VERTEX_ATTRIBUTES[2].offset);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_stride_matches_vertex_struct_size() {
        assert_eq!(
            SPHERE_VERTEX_LAYOUT.array_stride,
            mem::size_of::<SphereVertex>() as u64,
        );
        assert_eq!(SPHERE_VERTEX_LAYOUT.step_mode, VertexStepMode::Vertex);
    }

    #[test]
    fn test_attributes_fit_within_stride() {
        let stride = SPHERE_VERTEX_LAYOUT.array_stride;
        for (i, attr) in SPHERE_VERTEX_ATTRIBUTES.iter().enumerate() {
            let size = attr.format.size();
            assert!(
                attr.offset + size <= stride,
                "Attribute {i} at offset {} with size {size} exceeds stride {stride}",
                attr.offset,
            );
        }
        let last = SPHERE_VERTEX_ATTRIBUTES[2];
        assert_eq!(last.offset + last.format.size(), stride);
    }

    #[test]
    fn test_shader_locations_are_sequential() {
        for (i, attr) in SPHERE_VERTEX_ATTRIBUTES.iter().enumerate() {
            assert_eq!(attr.shader_location, i as u32);
        }
    }

    #[test]
    fn test_helper_returns_same_layout() {
        let layout = sphere_vertex_buffer_layout();
        assert_eq!(layout.array_stride, SPHERE_VERTEX_LAYOUT.array_stride);
        assert_eq!(layout.attributes, SPHERE_VERTEX_LAYOUT.attributes);
    }

    #[test]
    fn test_layout_is_valid_for_wgpu_pipeline() {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            force_fallback_adapter: true,
            ..Default::default()
        }));

        let Ok(adapter) = adapter else {
            // No adapter on headless machines.
            return;
        };

        let Ok((device, _queue)) =
            pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor::default()))
        else {
            return;
        };

        let shader_source = r#"
            @vertex
            fn vs_main(
                @location(0) position: vec3<f32>,
                @location(1) normal: vec3<f32>,
                @location(2) uv: vec2<f32>,
            ) -> @builtin(position) vec4<f32> {
                return vec4<f32>(position + normal * uv.x, 1.0);
            }

            @fragment
            fn fs_main() -> @location(0) vec4<f32> {
                return vec4<f32>(1.0, 1.0, 1.0, 1.0);
            }
        "#;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("test_sphere_shader"),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        let _pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("test_sphere_pipeline"),
            layout: None,
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[SPHERE_VERTEX_LAYOUT],
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
