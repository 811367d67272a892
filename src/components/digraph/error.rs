use thiserror::Error;

/// Problems with a graph configuration, detected when it is loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("failed to parse graph configuration: {0}")]
	Parse(#[from] serde_json::Error),

	#[error("graph must contain at least one node")]
	EmptyGraph,

	#[error("{name} must be a positive number, got {value}")]
	InvalidDimension { name: &'static str, value: f64 },

	#[error("adjacency matrix has {found} rows, expected {expected}")]
	RowCount { expected: usize, found: usize },

	#[error("adjacency matrix row {row} has {found} columns, expected {expected}")]
	ColumnCount {
		row: usize,
		expected: usize,
		found: usize,
	},

	#[error("adjacency matrix entry ({row}, {column}) is {value}, expected 0 or 1")]
	NonBinaryEntry { row: usize, column: usize, value: u8 },
}

/// Per-edge drawing failures. These degrade a single edge, never the whole graph.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum GeometryError {
	#[error("edge endpoints coincide")]
	ZeroLength,

	#[error("node centers are {distance:.2}px apart, need more than {min:.2}px")]
	NodesOverlap { distance: f64, min: f64 },

	#[error("segment of length {length:.2} is shorter than arrow size {arrow_size}")]
	SegmentTooShort { length: f64, arrow_size: f64 },

	#[error("arrowhead has no real wings (discriminant {discriminant})")]
	NegativeDiscriminant { discriminant: f64 },

	#[error("quadratic leading coefficient is zero")]
	DegenerateQuadratic,
}
