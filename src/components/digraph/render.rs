use log::warn;

use super::geometry::arrowhead;
use super::state::DigraphState;
use super::surface::Surface;
use super::types::{EdgeShape, Point};

pub fn render<S: Surface>(state: &DigraphState, surface: &S) {
	let config = &state.config;
	surface.clear(
		config.canvas.width,
		config.canvas.height,
		&config.style.background,
	);
	draw_nodes(state, surface);
	draw_edges(state, surface);
}

/// Baseline origin that centers a 1- or 2-digit label in a node circle.
fn label_origin(position: Point, id: usize) -> Point {
	let shift = if id < 10 { 4.5 } else { 8.5 };
	Point::new(position.x - shift, position.y + 5.0)
}

fn draw_nodes<S: Surface>(state: &DigraphState, surface: &S) {
	let (layout, style) = (&state.config.layout, &state.config.style);
	for node in &state.nodes {
		surface.stroke_circle(
			node.position,
			layout.node_radius,
			&style.stroke,
			style.line_width,
		);
		surface.draw_text(
			&node.id.to_string(),
			label_origin(node.position, node.id),
			&style.font,
			&style.fill,
		);
	}
}

fn draw_edges<S: Surface>(state: &DigraphState, surface: &S) {
	let config = &state.config;
	let style = &config.style;

	for edge in state.edges() {
		let segment = match state.edge_shape(edge) {
			Ok(EdgeShape::Tail(center)) => {
				surface.stroke_circle(
					center,
					config.layout.node_radius,
					&style.stroke,
					style.line_width,
				);
				continue;
			}
			Ok(EdgeShape::Line(segment)) => segment,
			Err(err) => {
				warn!(
					"skipping edge {} -> {}: {}",
					edge.source + 1,
					edge.target + 1,
					err
				);
				continue;
			}
		};

		surface.stroke_line(segment.start, segment.end, &style.stroke, style.line_width);
		if !config.arrow.focus {
			continue;
		}
		match arrowhead(&segment, config.arrow.size) {
			Ok(head) => surface.fill_triangle(head.left, head.right, head.tip, &style.fill),
			Err(err) => warn!(
				"no arrowhead for edge {} -> {}: {}",
				edge.source + 1,
				edge.target + 1,
				err
			),
		}
	}
}
