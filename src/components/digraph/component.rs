use leptos::prelude::*;
use log::error;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::render;
use super::state::DigraphState;

/// Draws a laid-out graph once onto a fixed-size canvas.
#[component]
pub fn DigraphCanvas(state: DigraphState) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		canvas.set_width(state.config.canvas.width as u32);
		canvas.set_height(state.config.canvas.height as u32);

		let ctx = match canvas.get_context("2d") {
			Ok(Some(ctx)) => ctx.dyn_into::<CanvasRenderingContext2d>(),
			Ok(None) => {
				error!("canvas has no 2d context");
				return;
			}
			Err(err) => {
				error!("failed to acquire 2d context: {:?}", err);
				return;
			}
		};
		let Ok(ctx) = ctx else {
			error!("2d context has an unexpected type");
			return;
		};
		render::render(&state, &ctx);
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="digraph-canvas"
			style="display: block;"
		/>
	}
}
