use rand::Rng;

use super::config::NetworkConfig;
use super::integrate;
use super::particles::ParticleEngine;
use super::topology;
use super::types::{Node, Particle, Viewport};

/// Everything one background instance simulates, advanced a frame at a time.
#[derive(Debug)]
pub struct SimulationState {
	pub config: NetworkConfig,
	pub viewport: Viewport,
	pub nodes: Vec<Node>,
	pub engine: ParticleEngine,
}

impl SimulationState {
	pub fn new(config: NetworkConfig, viewport: Viewport, rng: &mut impl Rng) -> Self {
		let nodes = topology::generate(&config, viewport, rng);
		Self::with_nodes(config, viewport, nodes)
	}

	pub fn with_nodes(config: NetworkConfig, viewport: Viewport, nodes: Vec<Node>) -> Self {
		Self {
			config,
			viewport,
			nodes,
			engine: ParticleEngine::default(),
		}
	}

	/// Replace the topology for a new viewport. Particles and the spawn clock
	/// refer to the old node set, so both are dropped.
	pub fn regenerate(&mut self, viewport: Viewport, rng: &mut impl Rng) {
		self.viewport = viewport;
		self.nodes = topology::generate(&self.config, viewport, rng);
		self.engine.clear();
	}

	/// One animation frame: drift nodes, spawn, then move particles.
	/// `now` is a monotonic timestamp in milliseconds.
	pub fn tick(&mut self, now: f64, rng: &mut impl Rng) {
		integrate::advance_nodes(&mut self.nodes, self.viewport);
		self.engine.spawn(&self.nodes, &self.config, now, rng);
		self.engine.advance(&self.nodes, self.viewport, &self.config, rng);
	}

	pub fn particles(&self) -> &[Particle] {
		self.engine.particles()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn node(id: usize, x: f64, y: f64, vx: f64, vy: f64, emitter: bool) -> Node {
		Node {
			id,
			x,
			y,
			vx,
			vy,
			radius: 5.0,
			color: "rgb(56, 189, 248)",
			emitter,
			connections: vec![1 - id],
		}
	}

	fn fixed_speed() -> NetworkConfig {
		NetworkConfig {
			particle_speed: 2.0..=2.0,
			..NetworkConfig::default()
		}
	}

	#[test]
	fn fresh_spawn_advances_in_the_same_frame() {
		let mut rng = StdRng::seed_from_u64(24);
		let nodes = vec![
			node(0, 100.0, 100.0, 0.0, 0.0, true),
			node(1, 200.0, 100.0, 0.0, 0.0, false),
		];
		let viewport = Viewport::new(400.0, 300.0);
		let mut state = SimulationState::with_nodes(fixed_speed(), viewport, nodes);
		state.tick(0.0, &mut rng);

		let particles = state.particles();
		assert_eq!(particles.len(), 1);
		let p = &particles[0];
		assert_eq!(p.trail.len(), 1);
		assert_eq!(p.trail[0], (100.0, 100.0));
		assert_eq!((p.x, p.y), (102.0, 100.0));
	}

	#[test]
	fn spawn_uses_the_emitter_position_after_drift() {
		let mut rng = StdRng::seed_from_u64(25);
		let nodes = vec![
			node(0, 100.0, 100.0, 1.5, -0.5, true),
			node(1, 300.0, 99.5, 0.0, 0.0, false),
		];
		let viewport = Viewport::new(400.0, 300.0);
		let mut state = SimulationState::with_nodes(fixed_speed(), viewport, nodes);
		state.tick(0.0, &mut rng);

		assert_eq!((state.nodes[0].x, state.nodes[0].y), (101.5, 99.5));
		let p = &state.particles()[0];
		assert_eq!(p.trail.front(), Some(&(101.5, 99.5)));
		assert_eq!((p.x, p.y), (103.5, 99.5));
	}

	#[test]
	fn invariants_hold_across_many_frames() {
		let mut rng = StdRng::seed_from_u64(21);
		let config = NetworkConfig {
			emitter_probability: 0.6,
			max_particles: 40,
			..NetworkConfig::default()
		};
		let mut state = SimulationState::new(config, Viewport::new(800.0, 600.0), &mut rng);

		let mut seen_particles = false;
		for frame in 0..3_000 {
			state.tick(frame as f64 * 16.0, &mut rng);
			let particles = state.particles();
			seen_particles |= !particles.is_empty();
			assert!(particles.len() <= state.config.max_particles);
			for p in particles {
				assert!(p.hops < state.config.max_hops);
				assert!(p.trail.len() <= state.config.trail_length);
				assert!(p.target < state.nodes.len());
			}
		}
		assert!(seen_particles);
	}

	#[test]
	fn regenerate_discards_particles_and_spawn_clock() {
		let mut rng = StdRng::seed_from_u64(22);
		let config = NetworkConfig {
			emitter_probability: 1.0,
			..NetworkConfig::default()
		};
		let mut state = SimulationState::new(config, Viewport::new(800.0, 600.0), &mut rng);
		state.tick(0.0, &mut rng);
		assert!(!state.particles().is_empty());

		let resized = Viewport::new(400.0, 300.0);
		state.regenerate(resized, &mut rng);
		assert_eq!(state.viewport, resized);
		assert_eq!(state.nodes.len(), state.config.num_nodes);
		assert!(state.particles().is_empty());
		assert!(state.nodes.iter().all(|n| state.engine.last_spawn(n.id).is_none()));
		assert!(state.nodes.iter().all(|n| n.x <= resized.width && n.y <= resized.height));
	}

	#[test]
	fn lone_node_idles() {
		let mut rng = StdRng::seed_from_u64(23);
		let config = NetworkConfig {
			num_nodes: 1,
			emitter_probability: 1.0,
			..NetworkConfig::default()
		};
		let mut state = SimulationState::new(config, Viewport::new(200.0, 200.0), &mut rng);
		for frame in 0..100 {
			state.tick(frame as f64 * 16.0, &mut rng);
		}
		assert!(state.particles().is_empty());
	}
}
