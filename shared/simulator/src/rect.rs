use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in screen coordinates (y grows downward).
///
/// Stored by center so that a box built around a position reports that
/// position back unchanged; the edges are derived.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub center: Vector2<f64>,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn centered_at(center: Vector2<f64>, width: f64, height: f64) -> Self {
        Self {
            center,
            width,
            height,
        }
    }

    pub fn center(&self) -> Vector2<f64> {
        self.center
    }

    pub fn left(&self) -> f64 {
        self.center.x - self.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.center.x + self.width / 2.0
    }

    pub fn top(&self) -> f64 {
        self.center.y - self.height / 2.0
    }

    pub fn bottom(&self) -> f64 {
        self.center.y + self.height / 2.0
    }

    pub fn contains_point(&self, point: Vector2<f64>) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }
}

#[cfg(test)]
mod test {
    use super::Rect;
    use nalgebra::vector;
    use test_log::test;

    #[test]
    fn test_centered() {
        let rect = Rect::centered_at(vector![100.0, 50.0], 20.0, 10.0);
        assert_eq!(rect.left(), 90.0);
        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.top(), 45.0);
        assert_eq!(rect.bottom(), 55.0);
        assert_eq!(rect.center(), vector![100.0, 50.0]);
    }

    #[test]
    fn test_contains_point() {
        let rect = Rect::centered_at(vector![0.0, 0.0], 2.0, 2.0);
        assert!(rect.contains_point(vector![0.0, 0.0]));
        assert!(rect.contains_point(vector![-1.0, -1.0]));
        assert!(!rect.contains_point(vector![1.0, 0.0]));
        assert!(!rect.contains_point(vector![0.0, 5.0]));
    }

    #[test]
    fn test_odd_size_keeps_center() {
        for i in 1..1000 {
            let center = vector![i as f64 * 0.1 + 0.01, 300.0];
            let rect = Rect::centered_at(center, 21.0, 21.0);
            assert_eq!(rect.center(), center);
        }
    }
}
