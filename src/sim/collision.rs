//! Axis-aligned bounding box collision
//!
//! Both the player and the obstacles are plain rectangles in screen space
//! (y grows downward), so a strict overlap test is all we need.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    /// True if the rectangles share interior area.
    ///
    /// Each rectangle's near edge must be strictly less than the other's far
    /// edge on both axes, so rectangles that only touch do not intersect.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        let (a_min, a_max) = (self.pos, self.max());
        let (b_min, b_max) = (other.pos, other.max());
        a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
    }
}

/// Index of the first obstacle rect overlapping the player, if any
pub fn first_hit<I>(player: &Rect, obstacles: I) -> Option<usize>
where
    I: IntoIterator<Item = Rect>,
{
    obstacles.into_iter().position(|rect| player.intersects(&rect))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const H: f32 = 300.0;

    #[test]
    fn test_player_over_obstacle_at_same_x() {
        let player = Rect::from_xywh(80.0, H - 24.0 - 48.0, 48.0, 48.0);
        let obstacle = Rect::from_xywh(80.0, H - 60.0, 40.0, 40.0);
        assert!(player.intersects(&obstacle));
        assert!(obstacle.intersects(&player));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::from_xywh(0.0, 0.0, 10.0, 10.0);
        let right = Rect::from_xywh(10.0, 0.0, 10.0, 10.0);
        let below = Rect::from_xywh(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_separated_on_one_axis() {
        let a = Rect::from_xywh(0.0, 0.0, 10.0, 10.0);
        // Overlaps horizontally but is above
        let above = Rect::from_xywh(5.0, -20.0, 10.0, 10.0);
        assert!(!a.intersects(&above));
        // Overlaps vertically but is far right
        let far = Rect::from_xywh(50.0, 5.0, 10.0, 10.0);
        assert!(!a.intersects(&far));
    }

    #[test]
    fn test_contained_rect_intersects() {
        let outer = Rect::from_xywh(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::from_xywh(40.0, 40.0, 5.0, 5.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_first_hit_stops_at_first_overlap() {
        let player = Rect::from_xywh(80.0, 228.0, 48.0, 48.0);
        let rects = [
            Rect::from_xywh(400.0, 240.0, 40.0, 40.0),
            Rect::from_xywh(100.0, 240.0, 40.0, 40.0),
            Rect::from_xywh(90.0, 240.0, 40.0, 40.0),
        ];
        assert_eq!(first_hit(&player, rects), Some(1));
        assert_eq!(first_hit(&player, rects[..1].iter().copied()), None);
    }

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (-500.0f32..500.0, -500.0f32..500.0, 1.0f32..200.0, 1.0f32..200.0)
            .prop_map(|(x, y, w, h)| Rect::from_xywh(x, y, w, h))
    }

    proptest! {
        #[test]
        fn prop_intersection_is_symmetric(a in rect_strategy(), b in rect_strategy()) {
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        }

        #[test]
        fn prop_rect_with_area_intersects_itself(a in rect_strategy()) {
            prop_assert!(a.intersects(&a));
        }
    }
}
