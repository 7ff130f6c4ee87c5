use std::f64::consts::TAU;

use rand::Rng;
use rand::seq::SliceRandom;

use super::config::{NetworkConfig, PALETTE};
use super::types::{Node, NodeId, Viewport};

const INSET_MIN: f64 = 0.15;
const INSET_MAX: f64 = 0.85;
const REPAIR_ATTEMPTS: usize = 5;

/// Build a fresh node set for the given viewport: random placement inside the
/// inset rectangle, random drift, then a sparse directed connection graph.
pub fn generate(config: &NetworkConfig, viewport: Viewport, rng: &mut impl Rng) -> Vec<Node> {
	let mut nodes: Vec<Node> = (0..config.num_nodes)
		.map(|id| spawn_node(id, config, viewport, rng))
		.collect();
	connect(&mut nodes, config, rng);
	repair(&mut nodes, rng);
	nodes
}

fn spawn_node(id: NodeId, config: &NetworkConfig, viewport: Viewport, rng: &mut impl Rng) -> Node {
	let angle = rng.gen_range(0.0..TAU);
	let speed = rng.gen_range(config.node_speed.clone());
	Node {
		id,
		x: viewport.width * rng.gen_range(INSET_MIN..=INSET_MAX),
		y: viewport.height * rng.gen_range(INSET_MIN..=INSET_MAX),
		vx: angle.cos() * speed,
		vy: angle.sin() * speed,
		radius: rng.gen_range(config.node_radius.clone()),
		color: config.palette.choose(rng).copied().unwrap_or(PALETTE[0]),
		emitter: rng.gen_bool(config.emitter_probability.clamp(0.0, 1.0)),
		connections: Vec::new(),
	}
}

// A node stops being a candidate once it holds as many outgoing links as its
// own quota. This does not cap fan-in, so popular early nodes can become hubs.
fn connect(nodes: &mut [Node], config: &NetworkConfig, rng: &mut impl Rng) {
	let quotas: Vec<usize> = nodes
		.iter()
		.map(|_| rng.gen_range(config.connections_per_node.clone()))
		.collect();

	for i in 0..nodes.len() {
		let mut candidates: Vec<NodeId> = nodes
			.iter()
			.filter(|n| n.id != i && n.connections.len() < quotas[n.id])
			.map(|n| n.id)
			.collect();
		candidates.shuffle(rng);
		candidates.truncate(quotas[i]);

		for j in candidates {
			if nodes[i].connections.contains(&j) || nodes[j].connections.contains(&i) {
				continue;
			}
			nodes[i].connections.push(j);
		}
	}
}

fn repair(nodes: &mut [Node], rng: &mut impl Rng) {
	let count = nodes.len();
	if count < 2 {
		return;
	}
	for i in 0..count {
		if !nodes[i].connections.is_empty() {
			continue;
		}
		let target = (0..REPAIR_ATTEMPTS)
			.map(|_| rng.gen_range(0..count))
			.find(|&j| j != i)
			.unwrap_or((i + 1) % count);
		nodes[i].connections.push(target);
	}
}
