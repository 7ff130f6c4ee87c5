use std::ops::RangeInclusive;

pub const NUM_NODES: usize = 28;
pub const NODE_RADIUS: RangeInclusive<f64> = 2.5..=6.0;
pub const NODE_SPEED: RangeInclusive<f64> = 0.05..=0.25;
pub const CONNECTIONS_PER_NODE: RangeInclusive<usize> = 1..=3;
pub const EMITTER_PROBABILITY: f64 = 0.25;

pub const PARTICLE_SPEED: RangeInclusive<f64> = 1.2..=2.4;
pub const PARTICLE_SIZE: f64 = 2.0;
pub const MAX_PARTICLES: usize = 120;
pub const SPAWN_INTERVAL_MS: f64 = 350.0;
pub const TRAIL_LENGTH: usize = 10;
pub const MAX_HOPS: u32 = 6;
pub const CULL_MARGIN: f64 = 50.0;

pub const PALETTE: &[&str] = &[
	"rgb(56, 189, 248)",
	"rgb(129, 140, 248)",
	"rgb(52, 211, 153)",
	"rgb(244, 114, 182)",
	"rgb(251, 191, 36)",
];

pub const BACKGROUND: &str = "#0b1120";
pub const EDGE_COLOR: &str = "rgba(148, 163, 184, 0.12)";
pub const EDGE_WIDTH: f64 = 1.0;
pub const EMITTER_COLOR: &str = "rgb(248, 250, 252)";
pub const NODE_ALPHA: f64 = 0.55;
pub const TRAIL_ALPHA: f64 = 0.6;

/// Tunables for one background instance. The component always runs with
/// [`NetworkConfig::default`]; the fields exist so tests can pin behaviour.
#[derive(Clone, Debug)]
pub struct NetworkConfig {
	pub num_nodes: usize,
	pub node_radius: RangeInclusive<f64>,
	pub node_speed: RangeInclusive<f64>,
	pub connections_per_node: RangeInclusive<usize>,
	pub emitter_probability: f64,
	pub palette: &'static [&'static str],
	pub particle_speed: RangeInclusive<f64>,
	pub particle_size: f64,
	pub max_particles: usize,
	pub spawn_interval_ms: f64,
	pub trail_length: usize,
	pub max_hops: u32,
	pub cull_margin: f64,
	pub background: &'static str,
	pub edge_color: &'static str,
	pub edge_width: f64,
	pub emitter_color: &'static str,
	pub node_alpha: f64,
	pub trail_alpha: f64,
}

impl Default for NetworkConfig {
	fn default() -> Self {
		Self {
			num_nodes: NUM_NODES,
			node_radius: NODE_RADIUS,
			node_speed: NODE_SPEED,
			connections_per_node: CONNECTIONS_PER_NODE,
			emitter_probability: EMITTER_PROBABILITY,
			palette: PALETTE,
			particle_speed: PARTICLE_SPEED,
			particle_size: PARTICLE_SIZE,
			max_particles: MAX_PARTICLES,
			spawn_interval_ms: SPAWN_INTERVAL_MS,
			trail_length: TRAIL_LENGTH,
			max_hops: MAX_HOPS,
			cull_margin: CULL_MARGIN,
			background: BACKGROUND,
			edge_color: EDGE_COLOR,
			edge_width: EDGE_WIDTH,
			emitter_color: EMITTER_COLOR,
			node_alpha: NODE_ALPHA,
			trail_alpha: TRAIL_ALPHA,
		}
	}
}
