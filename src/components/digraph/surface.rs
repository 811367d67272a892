use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::types::Point;

/// The 2D drawing primitives the renderer needs.
///
/// Each call is a complete shape: implementations open and close their own
/// path so strokes and fills never leak into the next shape.
pub trait Surface {
	fn clear(&self, width: f64, height: f64, color: &str);
	fn stroke_circle(&self, center: Point, radius: f64, color: &str, line_width: f64);
	fn stroke_line(&self, from: Point, to: Point, color: &str, line_width: f64);
	fn fill_triangle(&self, a: Point, b: Point, c: Point, color: &str);
	fn draw_text(&self, text: &str, at: Point, font: &str, color: &str);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&self, width: f64, height: f64, color: &str) {
		self.set_fill_style_str(color);
		self.fill_rect(0.0, 0.0, width, height);
	}

	fn stroke_circle(&self, center: Point, radius: f64, color: &str, line_width: f64) {
		self.set_stroke_style_str(color);
		self.set_line_width(line_width);
		self.begin_path();
		let _ = self.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
		self.close_path();
		self.stroke();
	}

	fn stroke_line(&self, from: Point, to: Point, color: &str, line_width: f64) {
		self.set_stroke_style_str(color);
		self.set_line_width(line_width);
		self.begin_path();
		self.move_to(from.x, from.y);
		self.line_to(to.x, to.y);
		self.stroke();
	}

	fn fill_triangle(&self, a: Point, b: Point, c: Point, color: &str) {
		self.set_fill_style_str(color);
		self.begin_path();
		self.move_to(a.x, a.y);
		self.line_to(b.x, b.y);
		self.line_to(c.x, c.y);
		self.close_path();
		self.fill();
	}

	fn draw_text(&self, text: &str, at: Point, font: &str, color: &str) {
		self.set_fill_style_str(color);
		self.set_font(font);
		let _ = self.fill_text(text, at.x, at.y);
	}
}
