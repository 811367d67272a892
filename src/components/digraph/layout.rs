use std::f64::consts::PI;

use super::error::ConfigError;
use super::types::{Node, Point};

/// Place `count` nodes evenly on a circle, starting at 12 o'clock and going
/// clockwise. Outgoing lists are left empty.
pub fn layout_nodes(center: Point, radius: f64, count: usize) -> Vec<Node> {
	let step = 360.0 / count as f64;
	(0..count)
		.map(|i| {
			let angle = i as f64 * step * PI / 180.0;
			Node {
				id: i + 1,
				position: ring_point(center, radius, angle),
				angle,
				outgoing: Vec::new(),
			}
		})
		.collect()
}

/// Point at `angle` (clockwise from the top) on a circle around `center`.
pub fn ring_point(center: Point, radius: f64, angle: f64) -> Point {
	Point::new(
		center.x + angle.sin() * radius,
		center.y - angle.cos() * radius,
	)
}

/// Check that `matrix` is `count`×`count` with only 0/1 entries.
pub fn validate_matrix(matrix: &[Vec<u8>], count: usize) -> Result<(), ConfigError> {
	if matrix.len() != count {
		return Err(ConfigError::RowCount {
			expected: count,
			found: matrix.len(),
		});
	}
	for (row, cells) in matrix.iter().enumerate() {
		if cells.len() != count {
			return Err(ConfigError::ColumnCount {
				row,
				expected: count,
				found: cells.len(),
			});
		}
		if let Some((column, &value)) = cells.iter().enumerate().find(|(_, v)| **v > 1) {
			return Err(ConfigError::NonBinaryEntry { row, column, value });
		}
	}
	Ok(())
}

/// Per-row lists of target columns, in ascending column order.
pub fn resolve_adjacency(matrix: &[Vec<u8>], count: usize) -> Result<Vec<Vec<usize>>, ConfigError> {
	validate_matrix(matrix, count)?;
	Ok(matrix
		.iter()
		.map(|cells| {
			cells
				.iter()
				.enumerate()
				.filter(|(_, v)| **v == 1)
				.map(|(j, _)| j)
				.collect()
		})
		.collect())
}

#[cfg(test)]
mod tests {
	use super::*;

	const EPS: f64 = 1e-9;

	#[test]
	fn nodes_sit_on_the_layout_circle() {
		let center = Point::new(275.0, 275.0);
		for count in [1, 2, 3, 7, 10, 64] {
			let nodes = layout_nodes(center, 200.0, count);
			assert_eq!(nodes.len(), count);
			for node in &nodes {
				assert!((node.position.distance(center) - 200.0).abs() < EPS);
			}
		}
	}

	#[test]
	fn first_node_is_at_twelve_o_clock_and_order_is_clockwise() {
		let nodes = layout_nodes(Point::new(275.0, 275.0), 200.0, 4);
		let ids: Vec<_> = nodes.iter().map(|n| n.id).collect();
		assert_eq!(ids, vec![1, 2, 3, 4]);

		assert!((nodes[0].position.x - 275.0).abs() < EPS);
		assert!((nodes[0].position.y - 75.0).abs() < EPS);
		// quarter turn clockwise lands on the right
		assert!((nodes[1].position.x - 475.0).abs() < EPS);
		assert!((nodes[1].position.y - 275.0).abs() < EPS);
		assert!((nodes[2].position.y - 475.0).abs() < EPS);
		assert!((nodes[3].position.x - 75.0).abs() < EPS);
		assert!((nodes[3].angle - 1.5 * PI).abs() < EPS);
	}

	#[test]
	fn adjacency_lists_ones_in_column_order() {
		let matrix = vec![vec![0, 1, 1], vec![0, 0, 0], vec![1, 0, 1]];
		let lists = resolve_adjacency(&matrix, 3).unwrap();
		assert_eq!(lists, vec![vec![1, 2], vec![], vec![0, 2]]);
	}

	#[test]
	fn adjacency_rejects_wrong_row_count() {
		let matrix = vec![vec![0, 1], vec![1, 0]];
		let err = resolve_adjacency(&matrix, 3).unwrap_err();
		assert!(matches!(err, ConfigError::RowCount { expected: 3, found: 2 }));
	}

	#[test]
	fn adjacency_rejects_ragged_rows() {
		let matrix = vec![vec![0, 1], vec![1]];
		let err = resolve_adjacency(&matrix, 2).unwrap_err();
		assert!(matches!(
			err,
			ConfigError::ColumnCount {
				row: 1,
				expected: 2,
				found: 1
			}
		));
	}

	#[test]
	fn adjacency_rejects_non_binary_entries() {
		let matrix = vec![vec![0, 2], vec![1, 0]];
		let err = resolve_adjacency(&matrix, 2).unwrap_err();
		assert!(matches!(
			err,
			ConfigError::NonBinaryEntry {
				row: 0,
				column: 1,
				value: 2
			}
		));
	}
}
