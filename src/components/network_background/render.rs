use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::color;
use super::state::SimulationState;

/// The drawing primitives the background needs from a 2D raster target.
pub trait Surface {
	fn paint_background(&self, color: &str, width: f64, height: f64);
	fn draw_line(&self, from: (f64, f64), to: (f64, f64), color: &str, width: f64);
	fn draw_circle(&self, center: (f64, f64), radius: f64, color: &str, alpha: f64);
}

impl Surface for CanvasRenderingContext2d {
	fn paint_background(&self, color: &str, width: f64, height: f64) {
		self.set_fill_style_str(color);
		self.fill_rect(0.0, 0.0, width, height);
	}

	fn draw_line(&self, from: (f64, f64), to: (f64, f64), color: &str, width: f64) {
		self.set_stroke_style_str(color);
		self.set_line_width(width);
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.stroke();
	}

	fn draw_circle(&self, center: (f64, f64), radius: f64, color: &str, alpha: f64) {
		self.set_global_alpha(alpha);
		self.begin_path();
		let _ = self.arc(center.0, center.1, radius.max(0.0), 0.0, 2.0 * PI);
		self.set_fill_style_str(color);
		self.fill();
		self.set_global_alpha(1.0);
	}
}

pub fn render(state: &SimulationState, surface: &impl Surface) {
	let config = &state.config;
	surface.paint_background(config.background, state.viewport.width, state.viewport.height);
	draw_edges(state, surface);
	draw_nodes(state, surface);
	draw_particles(state, surface);
}

fn draw_edges(state: &SimulationState, surface: &impl Surface) {
	let config = &state.config;
	for node in &state.nodes {
		for to in node.connections.iter().filter_map(|&id| state.nodes.get(id)) {
			surface.draw_line((node.x, node.y), (to.x, to.y), config.edge_color, config.edge_width);
		}
	}
}

fn draw_nodes(state: &SimulationState, surface: &impl Surface) {
	let config = &state.config;
	for node in &state.nodes {
		let (fill, alpha) = if node.emitter {
			(config.emitter_color, 1.0)
		} else {
			(node.color, config.node_alpha)
		};
		surface.draw_circle((node.x, node.y), node.radius, fill, alpha);
	}
}

// Trail points are stored oldest first, so scale grows with the index.
fn draw_particles(state: &SimulationState, surface: &impl Surface) {
	let config = &state.config;
	for particle in state.particles() {
		let len = particle.trail.len() as f64;
		for (i, &point) in particle.trail.iter().enumerate() {
			let recency = (i + 1) as f64 / (len + 1.0);
			surface.draw_circle(
				point,
				particle.size * recency,
				&color::with_alpha(particle.color, config.trail_alpha * recency),
				1.0,
			);
		}
		surface.draw_circle((particle.x, particle.y), particle.size, particle.color, 1.0);
	}
}
