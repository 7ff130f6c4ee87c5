use leptos::prelude::*;

/// 404 fallback for unknown routes
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="page-overlay">
			<h1>"Page not found"</h1>
			<a href="/">"Back to the dashboard"</a>
		</div>
	}
}
