use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Window;

/// Something that can book a single future frame callback and revoke it.
pub trait FrameHost {
	fn request_frame(&self) -> Option<i32>;
	fn cancel_frame(&self, handle: i32);
}

/// Keeps at most one frame pending and refuses to start twice.
#[derive(Debug)]
pub struct FrameLoop<H> {
	host: H,
	pending: Option<i32>,
	running: bool,
}

impl<H: FrameHost> FrameLoop<H> {
	pub fn new(host: H) -> Self {
		Self {
			host,
			pending: None,
			running: false,
		}
	}

	/// Returns `false` when the loop was already running.
	pub fn start(&mut self) -> bool {
		if self.running {
			return false;
		}
		self.running = true;
		self.schedule_next();
		true
	}

	/// Called at the top of every frame callback; the pending handle has just
	/// been consumed by the host. Returns whether the frame should do work.
	pub fn frame_started(&mut self) -> bool {
		self.pending = None;
		self.running
	}

	pub fn schedule_next(&mut self) {
		if self.running && self.pending.is_none() {
			self.pending = self.host.request_frame();
		}
	}

	pub fn stop(&mut self) {
		self.running = false;
		if let Some(handle) = self.pending.take() {
			self.host.cancel_frame(handle);
		}
	}

	pub fn is_running(&self) -> bool {
		self.running
	}

	#[cfg(test)]
	pub fn pending(&self) -> Option<i32> {
		self.pending
	}
}

pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` backed host. The callback cell is filled after the
/// host is built because the callback itself drives the loop.
pub struct AnimationFrameHost {
	window: Window,
	callback: FrameCallback,
}

impl AnimationFrameHost {
	pub fn new(window: Window, callback: FrameCallback) -> Self {
		Self { window, callback }
	}
}

impl FrameHost for AnimationFrameHost {
	fn request_frame(&self) -> Option<i32> {
		let callback = self.callback.borrow();
		let Some(ref cb) = *callback else {
			return None;
		};
		self.window
			.request_animation_frame(cb.as_ref().unchecked_ref())
			.ok()
	}

	fn cancel_frame(&self, handle: i32) {
		let _ = self.window.cancel_animation_frame(handle);
	}
}
