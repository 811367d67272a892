use leptos::prelude::*;

use crate::components::digraph::{BUNDLED_CONFIG, DigraphCanvas, DigraphState, GraphConfig};

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let graph = GraphConfig::from_json(BUNDLED_CONFIG)
		.and_then(DigraphState::new)
		.map(|state| view! { <DigraphCanvas state=state /> });

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

			<div class="digraph-page">
				<h1>"Directed Graph"</h1>
				{graph}
			</div>
		</ErrorBoundary>
	}
}
