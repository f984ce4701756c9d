use log::warn;

use super::config::DEFAULT_CAPACITY;
use super::sampler::{normalized_position, Sample};
use crate::traits::{ColorCurve, LineModel, ScalarCurve};

/// Ribbon vertex for GPU upload. The vertex shader offsets `position` by
/// `side * width / 2` perpendicular to `tangent` and the view direction.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RibbonVertex {
    pub position: [f32; 3],
    pub width: f32,
    pub tangent: [f32; 3],
    pub side: f32, // -1.0 or 1.0
    pub color: [f32; 4],
    pub uv: [f32; 2],
    pub _pad: [f32; 2],
}

/// CPU line model - two vertices per sample, two triangles per segment
#[derive(Debug, Clone)]
pub struct RibbonMesh {
    capacity: usize,
    vertices: Vec<RibbonVertex>,
    indices: Vec<u32>,
    rebuilds: u64,
}

impl RibbonMesh {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            vertices: Vec::with_capacity(capacity * 2),
            indices: Vec::with_capacity(capacity.saturating_sub(1) * 6),
            rebuilds: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn vertices(&self) -> &[RibbonVertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Vertex data ready for a buffer write
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn point_count(&self) -> usize {
        self.vertices.len() / 2
    }

    /// Number of times geometry was rebuilt since creation
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }
}

impl Default for RibbonMesh {
    fn default() -> Self {
        Self::new()
    }
}

impl LineModel for RibbonMesh {
    fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        self.vertices.reserve((capacity * 2).saturating_sub(self.vertices.len()));
    }

    fn rebuild(&mut self, samples: &[Sample], width: &dyn ScalarCurve, color: &dyn ColorCurve) {
        self.vertices.clear();
        self.indices.clear();
        self.rebuilds += 1;

        if samples.len() > self.capacity {
            warn!(
                "trail has {} points, ribbon capacity is {}; dropping the tail",
                samples.len(),
                self.capacity
            );
        }
        let points = &samples[..samples.len().min(self.capacity)];
        let count = points.len();

        for (i, sample) in points.iter().enumerate() {
            let t = normalized_position(i, count);
            let toward_head = points[i.saturating_sub(1)].position;
            let toward_tail = points[(i + 1).min(count - 1)].position;
            let tangent = (toward_head - toward_tail).normalize_or_zero().to_array();
            let w = width.evaluate(t);
            let c = color.evaluate(t).to_array();

            for (side, v) in [(-1.0, 0.0), (1.0, 1.0)] {
                self.vertices.push(RibbonVertex {
                    position: sample.position.to_array(),
                    width: w,
                    tangent,
                    side,
                    color: c,
                    uv: [t, v],
                    _pad: [0.0; 2],
                });
            }
        }

        for i in 0..count.saturating_sub(1) as u32 {
            let base = i * 2;
            self.indices
                .extend_from_slice(&[base, base + 1, base + 2, base + 1, base + 3, base + 2]);
        }
    }

    fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }
}
