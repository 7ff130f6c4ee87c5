use std::collections::VecDeque;

pub type NodeId = usize;
pub type ParticleId = u64;

/// Visible area in device-independent pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
}

impl Viewport {
	pub fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	pub fn contains_with_margin(&self, x: f64, y: f64, margin: f64) -> bool {
		x >= -margin && x <= self.width + margin && y >= -margin && y <= self.height + margin
	}
}

/// A drifting graph vertex. `id` always equals the node's index in its batch.
#[derive(Clone, Debug)]
pub struct Node {
	pub id: NodeId,
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	pub color: &'static str,
	pub emitter: bool,
	pub connections: Vec<NodeId>,
}

#[derive(Clone, Debug)]
pub struct Particle {
	pub id: ParticleId,
	pub x: f64,
	pub y: f64,
	pub target: NodeId,
	pub speed: f64,
	pub color: &'static str,
	pub size: f64,
	pub trail: VecDeque<(f64, f64)>,
	pub hops: u32,
}
