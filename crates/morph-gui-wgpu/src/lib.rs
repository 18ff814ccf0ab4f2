//! # morph-gui-wgpu
//!
//! WGPU rendering backend for morph-gui.
//!
//! Rounded rects, shadows and arcs are drawn as instanced SDF quads. Text is
//! rasterized with cosmic-text (feature `text-cosmic`) and drawn as textured
//! quads, interleaved with the SDF batches so painter's order is kept.

mod input;
mod instance;

#[cfg(feature = "text-cosmic")]
mod text;

pub use input::*;

use instance::ShapeInstance;
use morph_gui::{FullOutput, Shape};

#[cfg(feature = "text-cosmic")]
use morph_gui::{PositionedShape, TextShape};
#[cfg(feature = "text-cosmic")]
use std::collections::{HashMap, HashSet};
#[cfg(feature = "text-cosmic")]
use text::{TextRasterizer, TextVertex};

const INITIAL_SDF_INSTANCE_CAPACITY: usize = 256;

#[cfg(feature = "text-cosmic")]
const INITIAL_TEXT_VERTEX_CAPACITY: usize = 256;

/// One draw in painter's order
#[derive(Clone, Debug, PartialEq)]
enum DrawCommand {
    Sdf {
        instance_start: u32,
        instance_count: u32,
    },
    #[cfg(feature = "text-cosmic")]
    Text { key: TextKey, first_vertex: u32 },
}

/// Record an SDF instance, extending the previous batch when it is adjacent
fn push_sdf_command(commands: &mut Vec<DrawCommand>, instance_index: u32) {
    if let Some(DrawCommand::Sdf {
        instance_start,
        instance_count,
    }) = commands.last_mut()
    {
        if *instance_start + *instance_count == instance_index {
            *instance_count += 1;
            return;
        }
    }
    commands.push(DrawCommand::Sdf {
        instance_start: instance_index,
        instance_count: 1,
    });
}

/// Cache key of a rasterized text
#[cfg(feature = "text-cosmic")]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct TextKey {
    text: String,
    /// Physical pixel size as f32 bits
    px_size: u32,
}

#[cfg(feature = "text-cosmic")]
struct TextTexture {
    bind_group: wgpu::BindGroup,
    size_px: [u32; 2],
}

/// WGPU renderer for morph-gui
pub struct Renderer {
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,

    sdf_pipeline: wgpu::RenderPipeline,
    sdf_quad_vertex_buffer: wgpu::Buffer,
    sdf_quad_index_buffer: wgpu::Buffer,
    sdf_instance_buffer: wgpu::Buffer,
    sdf_instance_capacity: usize,
    sdf_instances: Vec<ShapeInstance>,

    commands: Vec<DrawCommand>,

    /// Physical pixels per logical pixel, used for text rasterization
    scale_factor: f32,

    #[cfg(feature = "text-cosmic")]
    text_pipeline: wgpu::RenderPipeline,
    #[cfg(feature = "text-cosmic")]
    text_bind_group_layout: wgpu::BindGroupLayout,
    #[cfg(feature = "text-cosmic")]
    text_sampler: wgpu::Sampler,
    #[cfg(feature = "text-cosmic")]
    text_vertex_buffer: wgpu::Buffer,
    #[cfg(feature = "text-cosmic")]
    text_vertex_capacity: usize,
    #[cfg(feature = "text-cosmic")]
    text_vertices: Vec<TextVertex>,
    #[cfg(feature = "text-cosmic")]
    rasterizer: TextRasterizer,
    // `None` marks texts that rasterize to nothing, so they are not retried every frame
    #[cfg(feature = "text-cosmic")]
    text_textures: HashMap<TextKey, Option<TextTexture>>,
    #[cfg(feature = "text-cosmic")]
    text_used: HashSet<TextKey>,
}

impl Renderer {
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        // Create uniform buffer (screen size)
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Morph UI Uniform Buffer"),
            size: std::mem::size_of::<[f32; 2]>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let globals_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Morph UI Globals Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Morph UI Globals Bind Group"),
            layout: &globals_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let sdf_pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Morph UI SDF Pipeline Layout"),
            bind_group_layouts: &[&globals_bind_group_layout],
            immediate_size: 0,
        });

        let sdf_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Morph UI SDF Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/ui_sdf.wgsl").into()),
        });

        let sdf_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Morph UI SDF Pipeline"),
            layout: Some(&sdf_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &sdf_shader,
                entry_point: Some("vs_main"),
                buffers: &[
                    // Vertex buffer: unit quad
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &[wgpu::VertexAttribute {
                            offset: 0,
                            shader_location: 0,
                            format: wgpu::VertexFormat::Float32x2,
                        }],
                    },
                    ShapeInstance::desc(),
                ],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &sdf_shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        // Unit quad vertices: [-1, -1] to [1, 1]
        let quad_vertices: &[[f32; 2]] = &[[-1.0, -1.0], [1.0, -1.0], [1.0, 1.0], [-1.0, 1.0]];
        let quad_indices: &[u32] = &[0, 1, 2, 0, 2, 3];

        let sdf_quad_vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Morph UI SDF Quad Vertex Buffer"),
            size: (quad_vertices.len() * std::mem::size_of::<[f32; 2]>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: true,
        });
        sdf_quad_vertex_buffer
            .slice(..)
            .get_mapped_range_mut()
            .copy_from_slice(bytemuck::cast_slice(quad_vertices));
        sdf_quad_vertex_buffer.unmap();

        let sdf_quad_index_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Morph UI SDF Quad Index Buffer"),
            size: (quad_indices.len() * std::mem::size_of::<u32>()) as u64,
            usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: true,
        });
        sdf_quad_index_buffer
            .slice(..)
            .get_mapped_range_mut()
            .copy_from_slice(bytemuck::cast_slice(quad_indices));
        sdf_quad_index_buffer.unmap();

        let sdf_instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Morph UI SDF Instance Buffer"),
            size: (INITIAL_SDF_INSTANCE_CAPACITY * std::mem::size_of::<ShapeInstance>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        #[cfg(feature = "text-cosmic")]
        let (text_pipeline, text_bind_group_layout, text_sampler, text_vertex_buffer) = {
            let text_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("Morph UI Text Shader"),
                source: wgpu::ShaderSource::Wgsl(include_str!("shaders/text.wgsl").into()),
            });

            let text_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
                label: Some("Morph UI Text Sampler"),
                address_mode_u: wgpu::AddressMode::ClampToEdge,
                address_mode_v: wgpu::AddressMode::ClampToEdge,
                address_mode_w: wgpu::AddressMode::ClampToEdge,
                mag_filter: wgpu::FilterMode::Linear,
                min_filter: wgpu::FilterMode::Linear,
                mipmap_filter: wgpu::MipmapFilterMode::Nearest,
                ..Default::default()
            });

            let text_bind_group_layout =
                device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("Morph UI Text Bind Group Layout"),
                    entries: &[
                        wgpu::BindGroupLayoutEntry {
                            binding: 0,
                            visibility: wgpu::ShaderStages::FRAGMENT,
                            ty: wgpu::BindingType::Texture {
                                sample_type: wgpu::TextureSampleType::Float { filterable: true },
                                view_dimension: wgpu::TextureViewDimension::D2,
                                multisampled: false,
                            },
                            count: None,
                        },
                        wgpu::BindGroupLayoutEntry {
                            binding: 1,
                            visibility: wgpu::ShaderStages::FRAGMENT,
                            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                            count: None,
                        },
                    ],
                });

            // Pipeline layout (text): globals + text texture
            let text_pipeline_layout =
                device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("Morph UI Text Pipeline Layout"),
                    bind_group_layouts: &[&globals_bind_group_layout, &text_bind_group_layout],
                    immediate_size: 0,
                });

            let text_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Morph UI Text Pipeline"),
                layout: Some(&text_pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &text_shader,
                    entry_point: Some("vs_main"),
                    buffers: &[TextVertex::desc()],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &text_shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: surface_format,
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            });

            let text_vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("Morph UI Text Vertex Buffer"),
                size: (INITIAL_TEXT_VERTEX_CAPACITY * std::mem::size_of::<TextVertex>()) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });

            (
                text_pipeline,
                text_bind_group_layout,
                text_sampler,
                text_vertex_buffer,
            )
        };

        Self {
            uniform_buffer,
            uniform_bind_group,
            sdf_pipeline,
            sdf_quad_vertex_buffer,
            sdf_quad_index_buffer,
            sdf_instance_buffer,
            sdf_instance_capacity: INITIAL_SDF_INSTANCE_CAPACITY,
            sdf_instances: Vec::new(),
            commands: Vec::new(),
            scale_factor: 1.0,

            #[cfg(feature = "text-cosmic")]
            text_pipeline,
            #[cfg(feature = "text-cosmic")]
            text_bind_group_layout,
            #[cfg(feature = "text-cosmic")]
            text_sampler,
            #[cfg(feature = "text-cosmic")]
            text_vertex_buffer,
            #[cfg(feature = "text-cosmic")]
            text_vertex_capacity: INITIAL_TEXT_VERTEX_CAPACITY,
            #[cfg(feature = "text-cosmic")]
            text_vertices: Vec::new(),
            #[cfg(feature = "text-cosmic")]
            rasterizer: TextRasterizer::new(),
            #[cfg(feature = "text-cosmic")]
            text_textures: HashMap::new(),
            #[cfg(feature = "text-cosmic")]
            text_used: HashSet::new(),
        }
    }

    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    /// Rasterize text for this many physical pixels per logical pixel
    pub fn set_scale_factor(&mut self, scale_factor: f32) {
        if scale_factor > 0.0 && scale_factor != self.scale_factor {
            self.scale_factor = scale_factor;
            #[cfg(feature = "text-cosmic")]
            self.text_textures.clear();
        }
    }

    /// Draw `output` on top of `target`
    ///
    /// `screen_width` and `screen_height` are in the same logical pixels as
    /// the shapes.
    #[allow(clippy::too_many_arguments)]
    pub fn render(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
        screen_width: f32,
        screen_height: f32,
        output: &FullOutput,
    ) {
        self.sdf_instances.clear();
        self.commands.clear();
        #[cfg(feature = "text-cosmic")]
        {
            self.text_vertices.clear();
            self.text_used.clear();
        }

        for positioned in &output.shapes {
            match &positioned.shape {
                Shape::Rect(rect) => {
                    if let Some(shadow) = ShapeInstance::shadow(positioned, rect) {
                        self.push_instance(shadow);
                    }
                    if rect.fill.a > 0.0 {
                        self.push_instance(ShapeInstance::rect(positioned, rect));
                    }
                }
                Shape::Arc(arc) => {
                    self.push_instance(ShapeInstance::arc(positioned, arc));
                }
                #[cfg(feature = "text-cosmic")]
                Shape::Text(text) => {
                    self.push_text(device, queue, positioned, text);
                }
                #[cfg(not(feature = "text-cosmic"))]
                Shape::Text(_) => {}
            }
        }

        #[cfg(feature = "text-cosmic")]
        {
            // Drop textures of texts that are no longer shown
            let used = &self.text_used;
            self.text_textures.retain(|key, _| used.contains(key));
        }

        let uniforms = [screen_width, screen_height];
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&uniforms));

        if !self.sdf_instances.is_empty() {
            if self.sdf_instances.len() > self.sdf_instance_capacity {
                self.sdf_instance_capacity = (self.sdf_instances.len() * 2).next_power_of_two();
                self.sdf_instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
                    label: Some("Morph UI SDF Instance Buffer"),
                    size: (self.sdf_instance_capacity * std::mem::size_of::<ShapeInstance>())
                        as u64,
                    usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                    mapped_at_creation: false,
                });
            }
            queue.write_buffer(
                &self.sdf_instance_buffer,
                0,
                bytemuck::cast_slice(&self.sdf_instances),
            );
        }

        #[cfg(feature = "text-cosmic")]
        if !self.text_vertices.is_empty() {
            if self.text_vertices.len() > self.text_vertex_capacity {
                self.text_vertex_capacity = (self.text_vertices.len() * 2).next_power_of_two();
                self.text_vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
                    label: Some("Morph UI Text Vertex Buffer"),
                    size: (self.text_vertex_capacity * std::mem::size_of::<TextVertex>()) as u64,
                    usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                    mapped_at_creation: false,
                });
            }
            queue.write_buffer(
                &self.text_vertex_buffer,
                0,
                bytemuck::cast_slice(&self.text_vertices),
            );
        }

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Morph UI Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load, // Preserve existing content
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        // Track current pipeline state to avoid redundant switches
        #[derive(PartialEq)]
        enum PipelineState {
            None,
            Sdf,
            #[cfg(feature = "text-cosmic")]
            Text,
        }
        let mut current_pipeline = PipelineState::None;

        for command in &self.commands {
            match command {
                DrawCommand::Sdf {
                    instance_start,
                    instance_count,
                } => {
                    if current_pipeline != PipelineState::Sdf {
                        render_pass.set_pipeline(&self.sdf_pipeline);
                        render_pass.set_bind_group(0, &self.uniform_bind_group, &[]);
                        render_pass.set_vertex_buffer(0, self.sdf_quad_vertex_buffer.slice(..));
                        render_pass.set_vertex_buffer(1, self.sdf_instance_buffer.slice(..));
                        render_pass.set_index_buffer(
                            self.sdf_quad_index_buffer.slice(..),
                            wgpu::IndexFormat::Uint32,
                        );
                        current_pipeline = PipelineState::Sdf;
                    }
                    render_pass.draw_indexed(
                        0..6,
                        0,
                        *instance_start..(*instance_start + *instance_count),
                    );
                }
                #[cfg(feature = "text-cosmic")]
                DrawCommand::Text { key, first_vertex } => {
                    let Some(Some(texture)) = self.text_textures.get(key) else {
                        continue;
                    };
                    if current_pipeline != PipelineState::Text {
                        render_pass.set_pipeline(&self.text_pipeline);
                        render_pass.set_bind_group(0, &self.uniform_bind_group, &[]);
                        render_pass.set_vertex_buffer(0, self.text_vertex_buffer.slice(..));
                        current_pipeline = PipelineState::Text;
                    }
                    render_pass.set_bind_group(1, &texture.bind_group, &[]);
                    render_pass.draw(*first_vertex..(*first_vertex + 6), 0..1);
                }
            }
        }
    }

    fn push_instance(&mut self, instance: ShapeInstance) {
        let index = self.sdf_instances.len() as u32;
        self.sdf_instances.push(instance);
        push_sdf_command(&mut self.commands, index);
    }

    #[cfg(feature = "text-cosmic")]
    fn push_text(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        positioned: &PositionedShape,
        text: &TextShape,
    ) {
        let key = TextKey {
            text: text.text.clone(),
            px_size: (text.font_size * self.scale_factor).to_bits(),
        };
        self.text_used.insert(key.clone());

        let scale_factor = self.scale_factor;
        let entry = self.text_textures.entry(key.clone()).or_insert_with(|| {
            let image = self
                .rasterizer
                .rasterize(&text.text, text.font_size * scale_factor)?;
            log::trace!(
                "rasterized {:?} at {}x{}",
                text.text,
                image.width(),
                image.height()
            );
            Some(upload_text_texture(
                device,
                queue,
                &self.text_bind_group_layout,
                &self.text_sampler,
                &image,
            ))
        });
        let Some(texture) = entry else {
            return;
        };

        let size = [
            texture.size_px[0] as f32 / scale_factor,
            texture.size_px[1] as f32 / scale_factor,
        ];
        let center = text.rect.center();
        let min = [center.x - size[0] * 0.5, center.y - size[1] * 0.5];
        let max = [min[0] + size[0], min[1] + size[1]];

        let color = text
            .color
            .with_alpha(text.color.a * positioned.opacity)
            .to_rgba8();
        let corner = |x: f32, y: f32, u: f32, v: f32| {
            let p = positioned.transform.transform_point(morph_gui::Point::new(x, y));
            TextVertex {
                position: [p.x, p.y],
                uv: [u, v],
                color,
            }
        };
        let top_left = corner(min[0], min[1], 0.0, 0.0);
        let top_right = corner(max[0], min[1], 1.0, 0.0);
        let bottom_right = corner(max[0], max[1], 1.0, 1.0);
        let bottom_left = corner(min[0], max[1], 0.0, 1.0);

        let first_vertex = self.text_vertices.len() as u32;
        self.text_vertices.extend_from_slice(&[
            top_left,
            top_right,
            bottom_right,
            top_left,
            bottom_right,
            bottom_left,
        ]);
        self.commands.push(DrawCommand::Text { key, first_vertex });
    }
}

#[cfg(feature = "text-cosmic")]
fn upload_text_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    layout: &wgpu::BindGroupLayout,
    sampler: &wgpu::Sampler,
    image: &morph_gui::Image,
) -> TextTexture {
    let size = wgpu::Extent3d {
        width: image.width(),
        height: image.height(),
        depth_or_array_layers: 1,
    };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Morph UI Text Texture"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8Unorm,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });

    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        image.pixels(),
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(image.width() * 4),
            rows_per_image: Some(image.height()),
        },
        size,
    );

    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("Morph UI Text Bind Group"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    });

    TextTexture {
        bind_group,
        size_px: [image.width(), image.height()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacent_sdf_instances_batch() {
        let mut commands = Vec::new();
        push_sdf_command(&mut commands, 0);
        push_sdf_command(&mut commands, 1);
        push_sdf_command(&mut commands, 2);
        assert_eq!(
            commands,
            vec![DrawCommand::Sdf {
                instance_start: 0,
                instance_count: 3
            }]
        );
    }

    #[test]
    fn test_gap_starts_new_batch() {
        let mut commands = Vec::new();
        push_sdf_command(&mut commands, 0);
        push_sdf_command(&mut commands, 2);
        assert_eq!(commands.len(), 2);
    }

    #[cfg(feature = "text-cosmic")]
    #[test]
    fn test_text_breaks_sdf_batch() {
        let mut commands = Vec::new();
        push_sdf_command(&mut commands, 0);
        commands.push(DrawCommand::Text {
            key: TextKey {
                text: "GO".into(),
                px_size: 18.0_f32.to_bits(),
            },
            first_vertex: 0,
        });
        push_sdf_command(&mut commands, 1);
        assert_eq!(commands.len(), 3);
        assert_eq!(
            commands[2],
            DrawCommand::Sdf {
                instance_start: 1,
                instance_count: 1
            }
        );
    }
}
