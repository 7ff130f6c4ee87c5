use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::config::NetworkConfig;
use super::render;
use super::scheduler::{AnimationFrameHost, FrameCallback, FrameLoop};
use super::state::SimulationState;
use super::types::Viewport;

const FALLBACK_SIZE: (f64, f64) = (800.0, 600.0);

struct Simulation {
	state: SimulationState,
	rng: StdRng,
}

/// Host resources held between mount and teardown.
struct Mounted {
	window: Window,
	frame_loop: Rc<RefCell<FrameLoop<AnimationFrameHost>>>,
	animate: FrameCallback,
	on_resize: Closure<dyn FnMut()>,
}

impl Mounted {
	fn is_running(&self) -> bool {
		self.frame_loop.borrow().is_running()
	}

	fn teardown(self) {
		self.frame_loop.borrow_mut().stop();
		let on_resize: &js_sys::Function = self.on_resize.as_ref().unchecked_ref();
		let _ = self.window.remove_event_listener_with_callback("resize", on_resize);
		// Breaks the closure -> loop -> host -> closure cycle.
		self.animate.borrow_mut().take();
		debug!("network background torn down");
	}
}

/// Fullscreen animated node network drawn behind the page content.
#[component]
pub fn NetworkBackground() -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let mounted = StoredValue::new_local(None::<Mounted>);

	Effect::new(move |_| {
		if mounted.with_value(|m| m.as_ref().is_some_and(Mounted::is_running)) {
			return;
		}
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		match mount(canvas.into()) {
			Some(m) => mounted.set_value(Some(m)),
			None => warn!("network background: no 2d canvas context, not animating"),
		}
	});

	on_cleanup(move || {
		if let Some(m) = mounted.try_update_value(Option::take).flatten() {
			m.teardown();
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="network-background"
			style="position: fixed; inset: 0; display: block; pointer-events: none; z-index: 0;"
		/>
	}
}

fn mount(canvas: HtmlCanvasElement) -> Option<Mounted> {
	let window = web_sys::window()?;
	let ctx: CanvasRenderingContext2d = canvas.get_context("2d").ok()??.dyn_into().ok()?;

	let viewport = fit_canvas(&window, &canvas, &ctx);
	let mut rng = StdRng::seed_from_u64(entropy_seed());
	let state = SimulationState::new(NetworkConfig::default(), viewport, &mut rng);
	info!(
		"network background mounted at {}x{} with {} nodes",
		viewport.width,
		viewport.height,
		state.nodes.len()
	);
	let sim = Rc::new(RefCell::new(Simulation { state, rng }));

	let animate: FrameCallback = Rc::new(RefCell::new(None));
	let frame_loop = Rc::new(RefCell::new(FrameLoop::new(AnimationFrameHost::new(
		window.clone(),
		animate.clone(),
	))));

	let (sim_frame, loop_frame, canvas_frame, ctx_frame) =
		(sim.clone(), frame_loop.clone(), canvas.clone(), ctx.clone());
	let performance = window.performance();
	*animate.borrow_mut() = Some(Closure::new(move || {
		if !loop_frame.borrow_mut().frame_started() {
			return;
		}
		// Skip the work, not the loop, while the canvas is detached.
		if canvas_frame.is_connected() {
			let now = performance
				.as_ref()
				.map_or_else(js_sys::Date::now, |p| p.now());
			let mut sim = sim_frame.borrow_mut();
			let Simulation { state, rng } = &mut *sim;
			state.tick(now, rng);
			render::render(state, &ctx_frame);
		}
		loop_frame.borrow_mut().schedule_next();
	}));

	let (sim_resize, window_resize) = (sim, window.clone());
	let on_resize = Closure::<dyn FnMut()>::new(move || {
		let viewport = fit_canvas(&window_resize, &canvas, &ctx);
		let mut sim = sim_resize.borrow_mut();
		let Simulation { state, rng } = &mut *sim;
		state.regenerate(viewport, rng);
		debug!("network background regenerated for {}x{}", viewport.width, viewport.height);
	});
	let _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());

	frame_loop.borrow_mut().start();
	Some(Mounted {
		window,
		frame_loop,
		animate,
		on_resize,
	})
}

/// Size the backing store for the device pixel ratio and return the viewport
/// in CSS pixels.
fn fit_canvas(
	window: &Window,
	canvas: &HtmlCanvasElement,
	ctx: &CanvasRenderingContext2d,
) -> Viewport {
	let (w, h) = (
		window
			.inner_width()
			.ok()
			.and_then(|v| v.as_f64())
			.unwrap_or(FALLBACK_SIZE.0),
		window
			.inner_height()
			.ok()
			.and_then(|v| v.as_f64())
			.unwrap_or(FALLBACK_SIZE.1),
	);
	let dpr = window.device_pixel_ratio().max(1.0);

	canvas.set_width((w * dpr) as u32);
	canvas.set_height((h * dpr) as u32);
	let style = web_sys::HtmlElement::style(&canvas);
	let _ = style.set_property("width", &format!("{w}px"));
	let _ = style.set_property("height", &format!("{h}px"));
	let _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);

	Viewport::new(w, h)
}

fn entropy_seed() -> u64 {
	let noise = (js_sys::Math::random() * u64::MAX as f64) as u64;
	noise ^ js_sys::Date::now() as u64
}
