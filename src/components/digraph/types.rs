use serde::{Deserialize, Serialize};

/// A point in canvas space (y grows downward).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn distance(self, other: Point) -> f64 {
		let (dx, dy) = (other.x - self.x, other.y - self.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// A vertex placed on the layout circle.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	/// 1-based display label.
	pub id: usize,
	pub position: Point,
	/// Radians, clockwise from 12 o'clock.
	pub angle: f64,
	/// Target node indices in column order, may contain the node itself.
	pub outgoing: Vec<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
	pub source: usize,
	pub target: usize,
}

impl Edge {
	pub fn is_self_loop(&self) -> bool {
		self.source == self.target
	}
}

/// Edge line trimmed so both ends sit on the node outlines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
	pub start: Point,
	pub end: Point,
}

impl Segment {
	pub fn length(&self) -> f64 {
		self.start.distance(self.end)
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arrowhead {
	pub left: Point,
	pub right: Point,
	pub tip: Point,
}

/// What gets drawn for one directed edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EdgeShape {
	/// Detached circle marking a self-loop.
	Tail(Point),
	Line(Segment),
}
