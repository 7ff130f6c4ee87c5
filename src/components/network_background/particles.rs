use std::collections::{HashMap, VecDeque};

use rand::Rng;
use rand::seq::SliceRandom;

use super::config::NetworkConfig;
use super::types::{Node, NodeId, Particle, ParticleId, Viewport};

/// Fraction of the target radius that counts as "arrived".
const ARRIVAL_FACTOR: f64 = 0.4;

/// Live particles plus the per-emitter spawn clock.
#[derive(Debug, Default)]
pub struct ParticleEngine {
	particles: Vec<Particle>,
	spawn_clock: HashMap<NodeId, f64>,
	next_id: ParticleId,
}

impl ParticleEngine {
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	#[cfg(test)]
	pub fn last_spawn(&self, emitter: NodeId) -> Option<f64> {
		self.spawn_clock.get(&emitter).copied()
	}

	pub fn clear(&mut self) {
		self.particles.clear();
		self.spawn_clock.clear();
	}

	/// Emit at most one particle per due emitter, respecting the global cap.
	/// An emitter without connections is skipped and its clock left untouched.
	pub fn spawn(&mut self, nodes: &[Node], config: &NetworkConfig, now: f64, rng: &mut impl Rng) {
		for node in nodes.iter().filter(|n| n.emitter) {
			if self.particles.len() >= config.max_particles {
				break;
			}
			let due = self
				.spawn_clock
				.get(&node.id)
				.is_none_or(|&last| now - last > config.spawn_interval_ms);
			if !due {
				continue;
			}
			let Some(&target) = node.connections.choose(rng) else {
				continue;
			};

			let id = self.next_id;
			self.next_id += 1;
			self.particles.push(Particle {
				id,
				x: node.x,
				y: node.y,
				target,
				speed: rng.gen_range(config.particle_speed.clone()),
				color: node.color,
				size: config.particle_size,
				trail: VecDeque::with_capacity(config.trail_length + 1),
				hops: 0,
			});
			self.spawn_clock.insert(node.id, now);
		}
	}

	/// Step every particle toward its target, re-routing on arrival and
	/// dropping the ones that run out of hops, routes, or screen.
	pub fn advance(
		&mut self,
		nodes: &[Node],
		viewport: Viewport,
		config: &NetworkConfig,
		rng: &mut impl Rng,
	) {
		self.particles.retain_mut(|p| step(p, nodes, viewport, config, rng));
	}
}

fn step(
	p: &mut Particle,
	nodes: &[Node],
	viewport: Viewport,
	config: &NetworkConfig,
	rng: &mut impl Rng,
) -> bool {
	let Some(target) = nodes.get(p.target) else {
		return false;
	};

	p.trail.push_back((p.x, p.y));
	while p.trail.len() > config.trail_length {
		p.trail.pop_front();
	}

	let (dx, dy) = (target.x - p.x, target.y - p.y);
	let dist = dx.hypot(dy);
	let threshold = (target.radius * ARRIVAL_FACTOR).max(p.speed);

	if dist < threshold || dist == 0.0 {
		p.hops += 1;
		if p.hops >= config.max_hops {
			return false;
		}
		let Some(&next) = target.connections.choose(rng) else {
			return false;
		};
		p.x = target.x;
		p.y = target.y;
		p.target = next;
	} else {
		p.x += dx / dist * p.speed;
		p.y += dy / dist * p.speed;
	}

	viewport.contains_with_margin(p.x, p.y, config.cull_margin)
}
