use log::info;

use super::config::GraphConfig;
use super::error::{ConfigError, GeometryError};
use super::geometry::{tail_position, trim_segment};
use super::layout::{layout_nodes, resolve_adjacency};
use super::types::{Edge, EdgeShape, Node};

/// Laid-out graph, built once from a configuration and never mutated.
#[derive(Clone, Debug)]
pub struct DigraphState {
	pub config: GraphConfig,
	pub nodes: Vec<Node>,
}

impl DigraphState {
	pub fn new(config: GraphConfig) -> Result<Self, ConfigError> {
		config.validate()?;
		let adjacency = resolve_adjacency(&config.matrix, config.node_count)?;
		let mut nodes = layout_nodes(
			config.layout.center,
			config.layout.radius,
			config.node_count,
		);
		for (node, outgoing) in nodes.iter_mut().zip(adjacency) {
			node.outgoing = outgoing;
		}

		let state = Self { config, nodes };
		info!(
			"laid out {} nodes with {} edges",
			state.nodes.len(),
			state.edges().count()
		);
		Ok(state)
	}

	/// Every directed edge, source-major, targets in column order.
	pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
		self.nodes.iter().enumerate().flat_map(|(source, node)| {
			node.outgoing
				.iter()
				.map(move |&target| Edge { source, target })
		})
	}

	pub fn edge_shape(&self, edge: Edge) -> Result<EdgeShape, GeometryError> {
		let layout = &self.config.layout;
		let source = &self.nodes[edge.source];
		if edge.is_self_loop() {
			return Ok(EdgeShape::Tail(tail_position(
				layout.center,
				layout.radius,
				layout.node_radius,
				source.angle,
			)));
		}
		let target = &self.nodes[edge.target];
		trim_segment(source.position, target.position, layout.node_radius).map(EdgeShape::Line)
	}
}
