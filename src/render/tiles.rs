use super::helpers;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct TileUniforms {
    pub(crate) resolution: [f32; 2],
    pub(crate) scale: [f32; 2],
    pub(crate) drift: [f32; 2],
    pub(crate) time: f32,
    pub(crate) _pad: f32,
}

/// Per-instance data: NDC centre + half extents, uv window, alpha.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct TileInstance {
    pub(crate) rect: [f32; 4],
    pub(crate) uv: [f32; 4],
    pub(crate) alpha: f32,
    pub(crate) _pad: [f32; 3],
}

const INSTANCE_ATTRIBUTES: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x4, 1 => Float32x4, 2 => Float32];

pub(crate) struct TileResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) texture_bgl: wgpu::BindGroupLayout,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) uniform_bind_group: wgpu::BindGroup,
    pub(crate) sampler: wgpu::Sampler,
    pub(crate) instance_buffer: wgpu::Buffer,
    pub(crate) instance_capacity: usize,
}

impl TileResources {
    /// Grow the instance buffer so it holds at least `count` instances.
    pub(crate) fn reserve(&mut self, device: &wgpu::Device, count: usize) {
        if count <= self.instance_capacity {
            return;
        }
        let capacity = count.next_power_of_two();
        self.instance_buffer = create_instance_buffer(device, capacity);
        self.instance_capacity = capacity;
    }
}

fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("tile_instances"),
        size: (capacity * std::mem::size_of::<TileInstance>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

pub(crate) fn create_tile_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
) -> TileResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("tiles_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::TILES_WGSL.into()),
    });
    let uniform_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("tiles_uniform_bgl"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });
    let texture_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("tiles_texture_bgl"),
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
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("tiles_pl"),
        bind_group_layouts: &[&uniform_bgl, &texture_bgl],
        push_constant_ranges: &[],
    });
    let instance_layout = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<TileInstance>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &INSTANCE_ATTRIBUTES,
    };
    let pipeline = helpers::make_quad_pipeline(
        device,
        &pl,
        &shader,
        instance_layout,
        color_format,
        Some(wgpu::BlendState::ALPHA_BLENDING),
    );
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("tiles_uniforms"),
        size: std::mem::size_of::<TileUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("tiles_uniform_bg"),
        layout: &uniform_bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("tiles_sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    });
    let instance_capacity = 16;

    TileResources {
        pipeline,
        texture_bgl,
        uniform_buffer,
        uniform_bind_group,
        sampler,
        instance_buffer: create_instance_buffer(device, instance_capacity),
        instance_capacity,
    }
}
