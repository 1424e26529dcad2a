//! Modulo-wrapped tile placement.
//!
//! Tiles never store their on-screen position. Each frame a tile's position is
//! derived from its slot, the scroll offset and the layout metrics, so a
//! handful of tiles can stand in for an endless strip.

use super::config::{Environment, SliderConfig};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileLayout {
    pub tile_count: usize,
    pub tile_size: f32,
    pub spacing: f32,
    /// Viewport extent along the carousel axis.
    pub viewport: f32,
}

/// Where one tile lands this frame, along the carousel axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TilePlacement {
    pub slot: usize,
    /// Centre of the tile in viewport coordinates.
    pub position: f32,
    pub visible: bool,
}

impl TileLayout {
    pub fn new(tile_count: usize, tile_size: f32, spacing: f32, viewport: f32) -> Self {
        Self {
            tile_count,
            tile_size,
            spacing,
            viewport,
        }
    }

    pub fn from_config(config: &SliderConfig, env: &Environment, tile_count: usize) -> Self {
        Self::new(
            tile_count,
            config.tile_size(&env.viewport),
            config.spacing,
            env.viewport.extent(config.axis),
        )
    }

    /// Distance between neighbouring tile centres.
    #[inline]
    pub fn pitch(&self) -> f32 {
        self.tile_size + self.spacing
    }

    /// Length of one full loop of the strip.
    #[inline]
    pub fn total_span(&self) -> f32 {
        self.tile_count as f32 * self.pitch()
    }

    #[inline]
    pub fn base_offset(&self, slot: usize) -> f32 {
        slot as f32 * self.pitch()
    }

    /// Offset of `slot` folded into `[0, span)`.
    pub fn wrapped(&self, slot: usize, current: f32) -> f32 {
        let span = self.total_span();
        if span <= 0.0 {
            return 0.0;
        }
        ((self.base_offset(slot) + current) % span + span) % span
    }

    /// Centre of `slot` on screen, with the strip centred in the viewport.
    pub fn screen_position(&self, slot: usize, current: f32) -> f32 {
        self.wrapped(slot, current) - self.total_span() / 2.0 + self.viewport / 2.0
    }

    /// Whether any part of a tile centred at `position` overlaps the viewport.
    pub fn is_visible(&self, position: f32) -> bool {
        let half = self.tile_size / 2.0;
        position + half >= 0.0 && position - half <= self.viewport
    }

    pub fn placements(&self, current: f32) -> impl Iterator<Item = TilePlacement> + '_ {
        (0..self.tile_count).map(move |slot| {
            let position = self.screen_position(slot, current);
            TilePlacement {
                slot,
                position,
                visible: self.is_visible(position),
            }
        })
    }

    /// Slot whose centre is nearest the viewport centre.
    pub fn focused_slot(&self, current: f32) -> Option<usize> {
        let center = self.viewport / 2.0;
        self.placements(current)
            .min_by(|a, b| {
                (a.position - center)
                    .abs()
                    .total_cmp(&(b.position - center).abs())
            })
            .map(|p| p.slot)
    }

    /// Offset that centres `slot`, picking the loop nearest `near` so the
    /// carousel travels the short way round.
    pub fn offset_for_slot(&self, slot: usize, near: f32) -> f32 {
        let span = self.total_span();
        let base = span / 2.0 - self.base_offset(slot);
        if span <= 0.0 {
            return base;
        }
        let loops = ((near - base) / span).round();
        base + loops * span
    }

    /// Slot under a point along the carousel axis, if any.
    pub fn hit_test(&self, current: f32, point: f32) -> Option<usize> {
        let half = self.tile_size / 2.0;
        self.placements(current)
            .find(|p| (point - p.position).abs() <= half)
            .map(|p| p.slot)
    }

    /// Fraction of one loop travelled, in `[0, 1)`.
    pub fn progress(&self, current: f32) -> f32 {
        let span = self.total_span();
        if span <= 0.0 {
            return 0.0;
        }
        (-current / span).rem_euclid(1.0)
    }
}

/// UV window `[u0, v0, du, dv]` that fills a `quad` box with an image of size
/// `image` without distortion, cropping the overflow evenly on both sides.
pub fn cover_crop(image: (f32, f32), quad: (f32, f32)) -> [f32; 4] {
    let (iw, ih) = image;
    let (qw, qh) = quad;
    if iw <= 0.0 || ih <= 0.0 || qw <= 0.0 || qh <= 0.0 {
        return [0.0, 0.0, 1.0, 1.0];
    }
    let image_aspect = iw / ih;
    let quad_aspect = qw / qh;
    if image_aspect > quad_aspect {
        let du = quad_aspect / image_aspect;
        [(1.0 - du) / 2.0, 0.0, du, 1.0]
    } else {
        let dv = image_aspect / quad_aspect;
        [0.0, (1.0 - dv) / 2.0, 1.0, dv]
    }
}
