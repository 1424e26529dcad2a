use crate::constants::CLEAR_RGB;
use crate::core::{cover_crop, Viewport};
use glam::Vec2;
use web_sys as web;

mod helpers;
mod textures;
mod tiles;

pub use textures::TextureId;
use textures::TextureCache;
use tiles::{create_tile_resources, TileInstance, TileResources, TileUniforms};

/// One textured quad, in CSS pixels of the canvas.
#[derive(Clone, Copy, Debug)]
pub struct Sprite {
    pub texture: TextureId,
    pub center: Vec2,
    pub size: Vec2,
    pub alpha: f32,
}

/// Displacement applied to every sprite this frame, in CSS pixels.
#[derive(Clone, Copy, Debug, Default)]
pub struct Displacement {
    pub scale: Vec2,
    pub drift: Vec2,
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    tiles: TileResources,
    textures: TextureCache,
    instances: Vec<TileInstance>,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    time_accum: f32,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let tiles = create_tile_resources(&device, format);
        log::info!("[gpu] surface {}x{} {:?}", width, height, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            tiles,
            textures: TextureCache::default(),
            instances: Vec::new(),
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_RGB[0],
                g: CLEAR_RGB[1],
                b: CLEAR_RGB[2],
                a: 1.0,
            },
            time_accum: 0.0,
        })
    }

    /// Upload a decoded image; images already seen under the same URL are reused.
    pub fn load_image(&mut self, img: &web::HtmlImageElement) -> anyhow::Result<TextureId> {
        let id = self.textures.upload(
            &self.device,
            &self.queue,
            &self.tiles.texture_bgl,
            &self.tiles.sampler,
            img,
        )?;
        log::debug!("[gpu] {} textures cached", self.textures.len());
        Ok(id)
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Re-apply the current configuration after a lost or outdated surface.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Draw `sprites` over the clear colour. `viewport` is the canvas box in
    /// CSS pixels.
    pub fn render(
        &mut self,
        dt_sec: f32,
        viewport: &Viewport,
        sprites: &[Sprite],
        displacement: Displacement,
    ) -> Result<(), wgpu::SurfaceError> {
        self.time_accum += dt_sec.max(0.0);
        let css = viewport.size().max(Vec2::ONE);

        self.instances.clear();
        for s in sprites {
            let Some(tex) = self.textures.get(s.texture) else {
                continue;
            };
            let ndc = Vec2::new(s.center.x / css.x * 2.0 - 1.0, 1.0 - s.center.y / css.y * 2.0);
            let half = s.size / css;
            self.instances.push(TileInstance {
                rect: [ndc.x, ndc.y, half.x, half.y],
                uv: cover_crop(
                    (tex.width as f32, tex.height as f32),
                    (s.size.x, s.size.y),
                ),
                alpha: s.alpha.clamp(0.0, 1.0),
                _pad: [0.0; 3],
            });
        }
        self.tiles.reserve(&self.device, self.instances.len());

        let pr = self.width as f32 / css.x;
        let uniforms = TileUniforms {
            resolution: [self.width as f32, self.height as f32],
            scale: (displacement.scale * pr).to_array(),
            drift: (displacement.drift * pr).to_array(),
            time: self.time_accum,
            _pad: 0.0,
        };
        self.queue.write_buffer(
            &self.tiles.uniform_buffer,
            0,
            bytemuck::bytes_of(&uniforms),
        );
        if !self.instances.is_empty() {
            self.queue.write_buffer(
                &self.tiles.instance_buffer,
                0,
                bytemuck::cast_slice(&self.instances),
            );
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("tiles_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.tiles.pipeline);
            rpass.set_bind_group(0, &self.tiles.uniform_bind_group, &[]);
            rpass.set_vertex_buffer(0, self.tiles.instance_buffer.slice(..));
            let drawable = sprites
                .iter()
                .filter_map(|s| self.textures.get(s.texture));
            for (i, tex) in drawable.enumerate() {
                let i = i as u32;
                rpass.set_bind_group(1, &tex.bind_group, &[]);
                rpass.draw(0..6, i..i + 1);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
