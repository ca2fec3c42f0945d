//! Draw fan-out.
//!
//! The scene does not draw anything itself. Once per frame it evaluates every
//! live particle and hands the result to a [`DrawSink`] supplied by the host
//! renderer. Instances are plain-old-data so a GPU backend can upload them as
//! they are.

use crate::config::DisplayFlags;
use crate::particle::{Billboard, Bubble, Particle};
use bytemuck::{Pod, Zeroable};

/// One bubble, ready to be drawn as a scaled sphere.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct BubbleInstance {
    pub position: [f32; 3],
    pub radius: f32,
    /// RGB plus alpha, alpha is always 1.
    pub color: [f32; 4],
}

impl BubbleInstance {
    /// Evaluate `bubble` at `current_time`.
    pub fn evaluate(bubble: &Bubble, current_time: f32) -> Self {
        Self {
            position: bubble.evaluate_position(current_time).to_array(),
            radius: bubble.radius(current_time),
            color: bubble.color().extend(1.0).to_array(),
        }
    }
}

/// One smoke puff, ready to be drawn as a camera-facing textured quad.
///
/// Orienting the quad toward the camera is left to the renderer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct BillboardInstance {
    pub position: [f32; 3],
    /// Half-size of the quad.
    pub size: f32,
    pub alpha: f32,
    pub _padding: [f32; 3],
}

impl BillboardInstance {
    /// Evaluate `billboard` at `current_time`.
    pub fn evaluate(billboard: &Billboard, current_time: f32) -> Self {
        Self {
            position: billboard.evaluate_position(current_time).to_array(),
            size: billboard.size(current_time),
            alpha: billboard.alpha(current_time),
            _padding: [0.0; 3],
        }
    }
}

/// Receiver of per-frame draw calls, implemented by the host renderer.
pub trait DrawSink {
    /// Called once before any particle of the frame.
    ///
    /// Lets the renderer draw the static scene and pick blending state.
    fn begin_frame(&mut self, _display: &DisplayFlags) {}

    fn draw_bubble(&mut self, instance: &BubbleInstance);

    fn draw_billboard(&mut self, instance: &BillboardInstance);
}

/// A [`DrawSink`] collecting instances for one instanced draw call per kind.
#[derive(Debug, Clone, Default)]
pub struct InstanceBatch {
    bubbles: Vec<BubbleInstance>,
    billboards: Vec<BillboardInstance>,
    display: DisplayFlags,
}

impl InstanceBatch {
    /// Create an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bubble instances collected this frame.
    pub fn bubbles(&self) -> &[BubbleInstance] {
        &self.bubbles
    }

    /// Billboard instances collected this frame.
    pub fn billboards(&self) -> &[BillboardInstance] {
        &self.billboards
    }

    /// Display toggles passed to the last `begin_frame`.
    pub fn display(&self) -> &DisplayFlags {
        &self.display
    }

    /// Bubble instances as raw bytes for a vertex buffer upload.
    pub fn bubble_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.bubbles)
    }

    /// Billboard instances as raw bytes for a vertex buffer upload.
    pub fn billboard_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.billboards)
    }
}

impl DrawSink for InstanceBatch {
    fn begin_frame(&mut self, display: &DisplayFlags) {
        self.bubbles.clear();
        self.billboards.clear();
        self.display = display.clone();
    }

    fn draw_bubble(&mut self, instance: &BubbleInstance) {
        self.bubbles.push(*instance);
    }

    fn draw_billboard(&mut self, instance: &BillboardInstance) {
        self.billboards.push(*instance);
    }
}
