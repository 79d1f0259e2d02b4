use egui::{Pos2, Rect, Vec2};

/// Normalised bounding rectangle spanned by a drag from `anchor` to `current`.
///
/// Works for every drag direction: the result always has a non-negative size.
pub fn drag_rect(anchor: Pos2, current: Pos2) -> Rect {
    let min = Pos2::new(anchor.x.min(current.x), anchor.y.min(current.y));
    let size = Vec2::new((anchor.x - current.x).abs(), (anchor.y - current.y).abs());
    Rect::from_min_size(min, size)
}

/// True when the rectangle collapsed to a single point
pub fn is_degenerate(rect: Rect) -> bool {
    rect.width() == 0.0 && rect.height() == 0.0
}

/// Distance from a point to a line segment
pub fn distance_to_line_segment(point: Pos2, line_start: Pos2, line_end: Pos2) -> f32 {
    let line_vec = line_end - line_start;
    let point_vec = point - line_start;

    let line_len = line_vec.length();
    if line_len == 0.0 {
        return point_vec.length();
    }

    let t = ((point_vec.x * line_vec.x + point_vec.y * line_vec.y) / line_len).clamp(0.0, line_len);
    let projection = line_start + (line_vec * t / line_len);
    (point - projection).length()
}

/// Points along the outline of the ellipse inscribed in `rect`, closed
/// (the last point equals the first).
pub fn ellipse_outline(rect: Rect) -> Vec<Pos2> {
    let center = rect.center();
    let rx = rect.width() / 2.0;
    let ry = rect.height() / 2.0;

    // Ramanujan's approximation of the perimeter, one segment per ~2px.
    let h = ((rx - ry) / (rx + ry).max(f32::EPSILON)).powi(2);
    let perimeter = std::f32::consts::PI * (rx + ry) * (1.0 + 3.0 * h / (10.0 + (4.0 - 3.0 * h).sqrt()));
    let segments = ((perimeter / 2.0).ceil() as usize).max(16);

    (0..=segments)
        .map(|i| {
            let angle = std::f32::consts::TAU * i as f32 / segments as f32;
            Pos2::new(center.x + rx * angle.cos(), center.y + ry * angle.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_drag_rect_all_directions() {
        let expected = Rect::from_min_size(pos2(10.0, 20.0), egui::vec2(30.0, 40.0));
        assert_eq!(drag_rect(pos2(10.0, 20.0), pos2(40.0, 60.0)), expected);
        assert_eq!(drag_rect(pos2(40.0, 60.0), pos2(10.0, 20.0)), expected);
        assert_eq!(drag_rect(pos2(40.0, 20.0), pos2(10.0, 60.0)), expected);
        assert_eq!(drag_rect(pos2(10.0, 60.0), pos2(40.0, 20.0)), expected);
    }

    #[test]
    fn test_degenerate_only_for_a_point() {
        assert!(is_degenerate(drag_rect(pos2(5.0, 5.0), pos2(5.0, 5.0))));
        assert!(!is_degenerate(drag_rect(pos2(5.0, 5.0), pos2(5.0, 9.0))));
        assert!(!is_degenerate(drag_rect(pos2(5.0, 5.0), pos2(9.0, 5.0))));
    }

    #[test]
    fn test_distance_to_segment() {
        let a = pos2(0.0, 0.0);
        let b = pos2(10.0, 0.0);
        assert!((distance_to_line_segment(pos2(5.0, 3.0), a, b) - 3.0).abs() < 1e-5);
        assert!((distance_to_line_segment(pos2(13.0, 4.0), a, b) - 5.0).abs() < 1e-5);
        assert!((distance_to_line_segment(pos2(3.0, 4.0), a, a) - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_ellipse_outline_is_closed_and_on_curve() {
        let rect = Rect::from_min_size(pos2(0.0, 0.0), egui::vec2(40.0, 20.0));
        let points = ellipse_outline(rect);
        assert!(points.len() > 16);
        let first = points[0];
        let last = *points.last().unwrap();
        assert!((first - last).length() < 1e-3);
        for p in points {
            let nx = (p.x - 20.0) / 20.0;
            let ny = (p.y - 10.0) / 10.0;
            assert!((nx * nx + ny * ny - 1.0).abs() < 1e-3);
        }
    }
}
