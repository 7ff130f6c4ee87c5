use leptos::prelude::*;

use crate::components::network_background::NetworkBackground;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-background">
				<NetworkBackground />
				<div class="page-overlay">
					<h1>"Data Dashboard"</h1>
					<p class="subtitle">"Particles hop between drifting nodes along a random network."</p>
				</div>
			</div>
		</ErrorBoundary>
	}
}
