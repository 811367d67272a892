//! Edge trimming and arrowhead construction.
//!
//! Both are closed-form: the trim splits the node radius into per-axis
//! offsets from the edge slope, and the arrowhead wings are the two roots of
//! a quadratic in the wing y-coordinate.

use log::debug;

use super::error::GeometryError;
use super::layout::ring_point;
use super::types::{Arrowhead, Point, Segment};

/// Arrow length divided by this gives the wing half-width.
pub const WING_RATIO: f64 = 2.7;

/// Below this horizontal extent (px) a segment is drawn as vertical.
const VERTICAL_EPSILON: f64 = 1e-2;

/// Per-axis distances to pull each endpoint inward by, so the line stops on
/// a circle of `radius` around the endpoint.
///
/// Purely horizontal or vertical edges use `radius` on both axes. Only the
/// axis that actually varies is moved, which is exact there, but it is a
/// fixed approximation rather than derived from the slope.
///
/// The slope ratio is floored to two decimals before use, so the direction
/// of the offset is slightly quantized while its length stays `radius`.
pub fn trim_offsets(start: Point, finish: Point, radius: f64) -> (f64, f64) {
	let x = (finish.x - start.x).abs();
	let y = (finish.y - start.y).abs();
	if x == 0.0 || y == 0.0 {
		return (radius, radius);
	}
	let proportion = ((x / y) * 100.0).floor() / 100.0;
	let sub_y = radius * (1.0 / (1.0 + proportion * proportion)).sqrt();
	(sub_y * proportion, sub_y)
}

// Moves both coordinates toward each other by `sub`; equal ones stay put.
fn shrink(start: f64, finish: f64, sub: f64) -> (f64, f64) {
	if start > finish {
		(start - sub, finish + sub)
	} else if start < finish {
		(start + sub, finish - sub)
	} else {
		(start, finish)
	}
}

/// Line between two node centers, shortened at both ends by the node radius.
pub fn trim_segment(start: Point, finish: Point, radius: f64) -> Result<Segment, GeometryError> {
	let distance = start.distance(finish);
	if distance == 0.0 {
		return Err(GeometryError::ZeroLength);
	}
	if distance <= 2.0 * radius {
		return Err(GeometryError::NodesOverlap {
			distance,
			min: 2.0 * radius,
		});
	}

	// The floored slope can make one offset exceed half its axis span even
	// when the centers are more than 2R apart; the ends would then cross.
	let (sub_x, sub_y) = trim_offsets(start, finish, radius);
	let (span_x, span_y) = ((finish.x - start.x).abs(), (finish.y - start.y).abs());
	if (span_x > 0.0 && 2.0 * sub_x >= span_x) || (span_y > 0.0 && 2.0 * sub_y >= span_y) {
		return Err(GeometryError::NodesOverlap {
			distance,
			min: 2.0 * radius,
		});
	}
	let (sx, fx) = shrink(start.x, finish.x, sub_x);
	let (sy, fy) = shrink(start.y, finish.y, sub_y);
	Ok(Segment {
		start: Point::new(sx, sy),
		end: Point::new(fx, fy),
	})
}

/// Center of the detached circle marking a self-loop on the node at `angle`.
pub fn tail_position(center: Point, layout_radius: f64, node_radius: f64, angle: f64) -> Point {
	ring_point(center, layout_radius + 2.0 * node_radius, angle)
}

/// Triangle at `segment.end` pointing along the segment, `size` long with
/// wings `size / WING_RATIO` either side of the axis.
pub fn arrowhead(segment: &Segment, size: f64) -> Result<Arrowhead, GeometryError> {
	let (start, finish) = (segment.start, segment.end);
	let length = segment.length();
	if length == 0.0 {
		return Err(GeometryError::ZeroLength);
	}
	if length < size {
		return Err(GeometryError::SegmentTooShort {
			length,
			arrow_size: size,
		});
	}

	let half_width = size / WING_RATIO;
	let x = finish.x - start.x;
	let y = finish.y - start.y;

	if x.abs() < VERTICAL_EPSILON {
		let (left, right) = if finish.y > start.y {
			let back = finish.y - size;
			(
				Point::new(finish.x - half_width, back),
				Point::new(finish.x + half_width, back),
			)
		} else {
			let back = finish.y + size;
			(
				Point::new(finish.x + half_width, back),
				Point::new(finish.x - half_width, back),
			)
		};
		return Ok(Arrowhead {
			left,
			right,
			tip: finish,
		});
	}

	// H splits the segment so that |H - finish| == size.
	let lambda = (length - size) / size;
	let xh = (start.x + lambda * finish.x) / (1.0 + lambda);
	let yh = (start.y + lambda * finish.y) / (1.0 + lambda);

	// Wings lie on the perpendicular through H: X*x + Y*y = X*xH + Y*yH,
	// at distance half_width from H.
	let slope2 = (y * y) / (x * x);
	let a = slope2 + 1.0;
	let b = -2.0 * yh * a;
	let c = yh * yh * a - half_width * half_width;
	let (left_y, right_y) = solve_quadratic(a, b, c)?;

	let wing_x = |wing_y: f64| (x * xh + y * yh - y * wing_y) / x;
	let head = Arrowhead {
		left: Point::new(wing_x(left_y), left_y),
		right: Point::new(wing_x(right_y), right_y),
		tip: finish,
	};
	debug!(
		"arrowhead {:?} -> {:?}: left {:?} right {:?}",
		start, finish, head.left, head.right
	);
	Ok(head)
}

/// Real roots of `a·t² + b·t + c = 0`, smaller-sign root first.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Result<(f64, f64), GeometryError> {
	if a == 0.0 {
		return Err(GeometryError::DegenerateQuadratic);
	}
	let discriminant = b * b - 4.0 * a * c;
	if discriminant < 0.0 {
		return Err(GeometryError::NegativeDiscriminant { discriminant });
	}
	let root = discriminant.sqrt();
	Ok(((-b - root) / (2.0 * a), (-b + root) / (2.0 * a)))
}

#[cfg(test)]
mod tests {
	use super::*;

	const EPS: f64 = 1e-9;
	const R: f64 = 10.0;
	const ARROW: f64 = 12.0;

	fn close(a: f64, b: f64, tol: f64) -> bool {
		(a - b).abs() < tol
	}

	#[test]
	fn quadratic_with_symmetric_roots() {
		let (lo, hi) = solve_quadratic(1.0, 0.0, -4.0).unwrap();
		assert_eq!((lo, hi), (-2.0, 2.0));
	}

	#[test]
	fn quadratic_without_real_roots_is_an_error() {
		let err = solve_quadratic(1.0, 0.0, 4.0).unwrap_err();
		assert_eq!(
			err,
			GeometryError::NegativeDiscriminant { discriminant: -16.0 }
		);
		assert_eq!(
			solve_quadratic(0.0, 1.0, 1.0),
			Err(GeometryError::DegenerateQuadratic)
		);
	}

	#[test]
	fn trimmed_endpoints_are_one_radius_from_the_centers() {
		let pairs = [
			(Point::new(275.0, 75.0), Point::new(157.4, 436.8)),
			(Point::new(392.6, 113.2), Point::new(465.2, 213.2)),
			(Point::new(400.0, 400.0), Point::new(100.0, 130.0)),
			(Point::new(0.0, 0.0), Point::new(-50.0, 300.0)),
		];
		for (start, finish) in pairs {
			let seg = trim_segment(start, finish, R).unwrap();
			assert!(close(seg.start.distance(start), R, EPS));
			assert!(close(seg.end.distance(finish), R, EPS));
			assert!(seg.length() < start.distance(finish));
		}
	}

	#[test]
	fn slope_ratio_is_floored_to_two_decimals() {
		// x/y = 1/3 -> 0.33
		let (sub_x, sub_y) = trim_offsets(Point::new(0.0, 0.0), Point::new(10.0, 30.0), R);
		assert!(close(sub_x / sub_y, 0.33, EPS));
		assert!(close((sub_x * sub_x + sub_y * sub_y).sqrt(), R, EPS));
	}

	#[test]
	fn axis_aligned_edges_use_the_fixed_offset() {
		let start = Point::new(100.0, 200.0);
		assert_eq!(trim_offsets(start, Point::new(300.0, 200.0), R), (R, R));
		assert_eq!(trim_offsets(start, Point::new(100.0, 50.0), R), (R, R));

		let horizontal = trim_segment(start, Point::new(300.0, 200.0), R).unwrap();
		assert_eq!(horizontal.start, Point::new(110.0, 200.0));
		assert_eq!(horizontal.end, Point::new(290.0, 200.0));

		let vertical = trim_segment(start, Point::new(100.0, 50.0), R).unwrap();
		assert_eq!(vertical.start, Point::new(100.0, 190.0));
		assert_eq!(vertical.end, Point::new(100.0, 60.0));
		assert!(close(vertical.start.distance(start), R, EPS));
	}

	#[test]
	fn trimming_rejects_coincident_or_overlapping_nodes() {
		let p = Point::new(5.0, 5.0);
		assert_eq!(trim_segment(p, p, R), Err(GeometryError::ZeroLength));
		assert!(matches!(
			trim_segment(p, Point::new(15.0, 15.0), R),
			Err(GeometryError::NodesOverlap { .. })
		));
	}

	#[test]
	fn trimmed_ends_never_cross_on_either_axis() {
		// 20.0008px apart, but 12/16.001 floors to 0.74 and sub_y covers more
		// than half the vertical span
		let start = Point::new(0.0, 0.0);
		let finish = Point::new(12.0, 16.001);
		assert!(start.distance(finish) > 2.0 * R);
		assert!(matches!(
			trim_segment(start, finish, R),
			Err(GeometryError::NodesOverlap { .. })
		));

		// same direction with room to spare keeps the axis order
		let seg = trim_segment(start, Point::new(24.0, 32.002), R).unwrap();
		assert!(seg.start.x < seg.end.x);
		assert!(seg.start.y < seg.end.y);
	}

	#[test]
	fn tail_circle_sits_two_radii_beyond_the_node() {
		let center = Point::new(275.0, 275.0);
		let angle = 6.0 * 36.0_f64.to_radians();
		let tail = tail_position(center, 200.0, R, angle);
		assert!(close(tail.distance(center), 220.0, EPS));

		let node = ring_point(center, 200.0, angle);
		assert!(close(tail.distance(node), 2.0 * R, EPS));
	}

	fn assert_wings(seg: Segment) {
		let head = arrowhead(&seg, ARROW).unwrap();
		let half_width = ARROW / WING_RATIO;
		let len = seg.length();
		let back = Point::new(
			seg.end.x - (seg.end.x - seg.start.x) * ARROW / len,
			seg.end.y - (seg.end.y - seg.start.y) * ARROW / len,
		);

		assert_eq!(head.tip, seg.end);
		assert!(close(head.left.distance(back), half_width, 1e-6));
		assert!(close(head.right.distance(back), half_width, 1e-6));
		assert!(close(head.left.distance(head.right), 2.0 * half_width, 1e-6));

		let slant = (ARROW * ARROW + half_width * half_width).sqrt();
		assert!(close(head.left.distance(head.tip), slant, 1e-6));
		assert!(close(head.right.distance(head.tip), slant, 1e-6));
	}

	#[test]
	fn wings_straddle_the_back_of_the_arrow() {
		assert_wings(Segment {
			start: Point::new(100.0, 100.0),
			end: Point::new(300.0, 250.0),
		});
		assert_wings(Segment {
			start: Point::new(400.0, 120.0),
			end: Point::new(150.0, 420.0),
		});
		assert_wings(Segment {
			start: Point::new(50.0, 300.0),
			end: Point::new(350.0, 300.0),
		});
	}

	#[test]
	fn vertical_segments_get_a_flat_backed_arrow() {
		let down = Segment {
			start: Point::new(200.0, 100.0),
			end: Point::new(200.0, 300.0),
		};
		let head = arrowhead(&down, ARROW).unwrap();
		let half_width = ARROW / WING_RATIO;
		assert_eq!(head.left, Point::new(200.0 - half_width, 288.0));
		assert_eq!(head.right, Point::new(200.0 + half_width, 288.0));

		let up = Segment {
			start: down.end,
			end: down.start,
		};
		let head = arrowhead(&up, ARROW).unwrap();
		assert_eq!(head.left, Point::new(200.0 + half_width, 112.0));
		assert_eq!(head.right, Point::new(200.0 - half_width, 112.0));

		// sin/cos noise must not push a nearly vertical line into the quadratic
		assert_wings(Segment {
			start: Point::new(275.0, 85.0),
			end: Point::new(275.0 + 2.4e-14, 465.0),
		});
	}

	#[test]
	fn short_segments_have_no_arrowhead() {
		let seg = Segment {
			start: Point::new(0.0, 0.0),
			end: Point::new(6.0, 8.0),
		};
		assert_eq!(
			arrowhead(&seg, ARROW),
			Err(GeometryError::SegmentTooShort {
				length: 10.0,
				arrow_size: ARROW
			})
		);
		let point = Segment {
			start: Point::new(1.0, 1.0),
			end: Point::new(1.0, 1.0),
		};
		assert_eq!(arrowhead(&point, ARROW), Err(GeometryError::ZeroLength));
	}
}
