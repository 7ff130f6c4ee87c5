use super::types::{Node, Viewport};

/// Move every node by one frame of drift and reflect it off the viewport edges.
pub fn advance_nodes(nodes: &mut [Node], viewport: Viewport) {
	for node in nodes {
		node.x += node.vx;
		node.y += node.vy;
		bounce(&mut node.x, &mut node.vx, node.radius, viewport.width);
		bounce(&mut node.y, &mut node.vy, node.radius, viewport.height);
	}
}

fn bounce(pos: &mut f64, vel: &mut f64, radius: f64, extent: f64) {
	if *pos - radius < 0.0 {
		*pos = radius;
		*vel = -*vel;
	} else if *pos + radius > extent {
		*pos = extent - radius;
		*vel = -*vel;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::network_background::config::NetworkConfig;
	use crate::components::network_background::topology;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn node(x: f64, y: f64, vx: f64, vy: f64) -> Node {
		Node {
			id: 0,
			x,
			y,
			vx,
			vy,
			radius: 4.0,
			color: "rgb(255, 255, 255)",
			emitter: false,
			connections: Vec::new(),
		}
	}

	#[test]
	fn drifts_by_velocity() {
		let mut nodes = vec![node(50.0, 50.0, 1.5, -0.5)];
		advance_nodes(&mut nodes, Viewport::new(100.0, 100.0));
		assert_eq!((nodes[0].x, nodes[0].y), (51.5, 49.5));
		assert_eq!((nodes[0].vx, nodes[0].vy), (1.5, -0.5));
	}

	#[test]
	fn reflects_off_each_wall_independently() {
		let vp = Viewport::new(100.0, 100.0);
		let mut nodes = vec![node(5.0, 50.0, -3.0, 0.2), node(50.0, 97.0, 0.1, 2.0)];
		advance_nodes(&mut nodes, vp);

		assert_eq!(nodes[0].x, 4.0);
		assert_eq!(nodes[0].vx, 3.0);
		assert_eq!(nodes[0].vy, 0.2);

		assert_eq!(nodes[1].y, 96.0);
		assert_eq!(nodes[1].vy, -2.0);
		assert_eq!(nodes[1].vx, 0.1);
	}

	#[test]
	fn corner_hit_corrects_both_axes() {
		let mut nodes = vec![node(1.0, 1.0, -2.0, -2.0)];
		advance_nodes(&mut nodes, Viewport::new(100.0, 100.0));
		assert_eq!((nodes[0].x, nodes[0].y), (4.0, 4.0));
		assert_eq!((nodes[0].vx, nodes[0].vy), (2.0, 2.0));
	}

	const EPS: f64 = 1e-9;

	#[test]
	fn nodes_never_escape_the_walls() {
		let mut rng = StdRng::seed_from_u64(5);
		let vp = Viewport::new(320.0, 200.0);
		let config = NetworkConfig {
			node_speed: 2.0..=9.0,
			..NetworkConfig::default()
		};
		let mut nodes = topology::generate(&config, vp, &mut rng);
		for _ in 0..2_000 {
			advance_nodes(&mut nodes, vp);
			for n in &nodes {
				assert!(n.x - n.radius >= -EPS && n.x + n.radius <= vp.width + EPS);
				assert!(n.y - n.radius >= -EPS && n.y + n.radius <= vp.height + EPS);
			}
		}
	}
}
