use super::helpers;
use fnv::FnvHashMap;
use web_sys as web;

/// Handle to an uploaded image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureId(usize);

pub(crate) struct TileTexture {
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) width: u32,
    pub(crate) height: u32,
    _texture: wgpu::Texture,
}

/// Uploaded images, keyed by URL so an image shown twice is uploaded once.
#[derive(Default)]
pub(crate) struct TextureCache {
    by_url: FnvHashMap<String, TextureId>,
    textures: Vec<TileTexture>,
}

impl TextureCache {
    pub(crate) fn get(&self, id: TextureId) -> Option<&TileTexture> {
        self.textures.get(id.0)
    }

    pub(crate) fn len(&self) -> usize {
        self.textures.len()
    }

    /// Upload a decoded image, or return the id it already has.
    pub(crate) fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        img: &web::HtmlImageElement,
    ) -> anyhow::Result<TextureId> {
        let url = img.current_src();
        if let Some(&id) = self.by_url.get(&url) {
            return Ok(id);
        }
        let width = img.natural_width();
        let height = img.natural_height();
        if width == 0 || height == 0 {
            anyhow::bail!("image {} is not decoded", url);
        }
        let limit = device.limits().max_texture_dimension_2d;
        if width > limit || height > limit {
            anyhow::bail!("image {} is {}x{}, over the {} limit", url, width, height, limit);
        }
        let (texture, view) = helpers::create_image_texture(device, &url, width, height);
        queue.copy_external_image_to_texture(
            &wgpu::CopyExternalImageSourceInfo {
                source: wgpu::ExternalImageSource::HTMLImageElement(img.clone()),
                origin: wgpu::Origin2d::ZERO,
                flip_y: false,
            },
            wgpu::CopyExternalImageDestInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
                color_space: wgpu::PredefinedColorSpace::Srgb,
                premultiplied_alpha: false,
            },
            wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("tile_texture_bg"),
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
        let id = TextureId(self.textures.len());
        self.textures.push(TileTexture {
            bind_group,
            width,
            height,
            _texture: texture,
        });
        self.by_url.insert(url, id);
        Ok(id)
    }
}
