//! Graph configuration.
//!
//! Loaded from JSON; every section falls back to the demo graph's values, so
//! a document only needs to name what it changes.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::layout::validate_matrix;
use super::types::Point;

/// The demo graph shipped with the app.
pub const BUNDLED_CONFIG: &str = include_str!("../../../digraph.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
	#[serde(default = "default_node_count")]
	pub node_count: usize,

	#[serde(default)]
	pub layout: LayoutConfig,

	#[serde(default)]
	pub arrow: ArrowConfig,

	#[serde(default)]
	pub canvas: CanvasConfig,

	#[serde(default)]
	pub style: StyleConfig,

	/// Row `i`, column `j` set to 1 means an edge from node `i` to node `j`.
	#[serde(default = "default_matrix")]
	pub matrix: Vec<Vec<u8>>,
}

impl Default for GraphConfig {
	fn default() -> Self {
		Self {
			node_count: default_node_count(),
			layout: LayoutConfig::default(),
			arrow: ArrowConfig::default(),
			canvas: CanvasConfig::default(),
			style: StyleConfig::default(),
			matrix: default_matrix(),
		}
	}
}

impl GraphConfig {
	/// Parse and validate a JSON document.
	pub fn from_json(source: &str) -> Result<Self, ConfigError> {
		let config: GraphConfig = serde_json::from_str(source)?;
		config.validate()?;
		Ok(config)
	}

	/// Report the first problem found, if any.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.node_count == 0 {
			return Err(ConfigError::EmptyGraph);
		}
		for (name, value) in [
			("layout.radius", self.layout.radius),
			("layout.node_radius", self.layout.node_radius),
			("arrow.size", self.arrow.size),
			("canvas.width", self.canvas.width),
			("canvas.height", self.canvas.height),
			("style.line_width", self.style.line_width),
		] {
			if !value.is_finite() || value <= 0.0 {
				return Err(ConfigError::InvalidDimension { name, value });
			}
		}
		validate_matrix(&self.matrix, self.node_count)
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
	#[serde(default = "default_center")]
	pub center: Point,

	#[serde(default = "default_layout_radius")]
	pub radius: f64,

	#[serde(default = "default_node_radius")]
	pub node_radius: f64,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			center: default_center(),
			radius: default_layout_radius(),
			node_radius: default_node_radius(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrowConfig {
	#[serde(default = "default_arrow_size")]
	pub size: f64,

	/// Draw arrowheads; plain lines otherwise.
	#[serde(default = "default_focus")]
	pub focus: bool,
}

impl Default for ArrowConfig {
	fn default() -> Self {
		Self {
			size: default_arrow_size(),
			focus: default_focus(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
	#[serde(default = "default_canvas_side")]
	pub width: f64,

	#[serde(default = "default_canvas_side")]
	pub height: f64,
}

impl Default for CanvasConfig {
	fn default() -> Self {
		Self {
			width: default_canvas_side(),
			height: default_canvas_side(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
	#[serde(default = "default_background")]
	pub background: String,

	#[serde(default = "default_ink")]
	pub stroke: String,

	#[serde(default = "default_ink")]
	pub fill: String,

	#[serde(default = "default_font")]
	pub font: String,

	#[serde(default = "default_line_width")]
	pub line_width: f64,
}

impl Default for StyleConfig {
	fn default() -> Self {
		Self {
			background: default_background(),
			stroke: default_ink(),
			fill: default_ink(),
			font: default_font(),
			line_width: default_line_width(),
		}
	}
}

fn default_node_count() -> usize {
	10
}

fn default_center() -> Point {
	Point::new(275.0, 275.0)
}

fn default_layout_radius() -> f64 {
	200.0
}

fn default_node_radius() -> f64 {
	10.0
}

fn default_arrow_size() -> f64 {
	12.0
}

fn default_focus() -> bool {
	true
}

fn default_canvas_side() -> f64 {
	550.0
}

fn default_background() -> String {
	"#ffffff".to_string()
}

fn default_ink() -> String {
	"#000000".to_string()
}

fn default_font() -> String {
	"13px serif".to_string()
}

fn default_line_width() -> f64 {
	1.0
}

fn default_matrix() -> Vec<Vec<u8>> {
	vec![
		vec![0, 0, 0, 0, 0, 0, 1, 0, 0, 0],
		vec![0, 0, 1, 0, 0, 0, 0, 0, 1, 0],
		vec![0, 0, 0, 0, 0, 0, 1, 1, 0, 0],
		vec![0, 0, 0, 0, 1, 1, 0, 1, 1, 0],
		vec![0, 1, 0, 0, 0, 0, 0, 0, 0, 1],
		vec![0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
		vec![0, 0, 0, 0, 0, 0, 1, 0, 0, 0],
		vec![0, 0, 0, 0, 0, 0, 1, 0, 0, 0],
		vec![0, 0, 0, 0, 0, 1, 0, 0, 1, 0],
		vec![0, 1, 0, 1, 1, 0, 0, 0, 1, 1],
	]
}
