use crate::Vec2;

/// Axis-aligned rectangle, used for detection bounding boxes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect<T> {
    pub origin: Vec2<T>,
    pub size: Vec2<T>,
}

impl<T: Default> Default for Rect<T> {
    fn default() -> Self {
        Self {
            origin: Vec2::zero(),
            size: Vec2::zero(),
        }
    }
}

impl<T> Rect<T> {
    pub fn new(origin: Vec2<T>, size: Vec2<T>) -> Self {
        Self { origin, size }
    }
}

impl<T: std::ops::Add<Output = T> + Copy> Rect<T> {
    pub fn min(&self) -> Vec2<T> {
        self.origin
    }

    pub fn max(&self) -> Vec2<T> {
        self.origin + self.size
    }
}

impl<T: std::ops::Sub<Output = T> + Copy> Rect<T> {
    pub fn from_min_max(min: Vec2<T>, max: Vec2<T>) -> Self {
        Self {
            origin: min,
            size: max - min,
        }
    }
}

impl<T: std::ops::Sub<Output = T> + PartialOrd + Copy> Rect<T> {
    /// Bounding rectangle of two arbitrary corners.
    pub fn from_corners(a: Vec2<T>, b: Vec2<T>) -> Self {
        let pick = |p: T, q: T, smaller: bool| if (p < q) == smaller { p } else { q };
        Self::from_min_max(
            Vec2::new(pick(a.x, b.x, true), pick(a.y, b.y, true)),
            Vec2::new(pick(a.x, b.x, false), pick(a.y, b.y, false)),
        )
    }
}

impl<T: std::ops::Add<Output = T> + PartialOrd + Copy> Rect<T> {
    pub fn contains_point(&self, point: Vec2<T>) -> bool {
        let max = self.max();
        point.x >= self.origin.x && point.y >= self.origin.y && point.x < max.x && point.y < max.y
    }

    pub fn intersects(&self, other: Rect<T>) -> bool {
        let self_max = self.max();
        let other_max = other.max();
        self.origin.x < other_max.x
            && other.origin.x < self_max.x
            && self.origin.y < other_max.y
            && other.origin.y < self_max.y
    }
}

impl<T: std::ops::Add<Output = T> + std::ops::Sub<Output = T> + PartialOrd + Copy> Rect<T> {
    pub fn intersection(&self, other: Rect<T>) -> Option<Rect<T>> {
        if !self.intersects(other) {
            return None;
        }
        let larger = |a: T, b: T| if a > b { a } else { b };
        let smaller = |a: T, b: T| if a < b { a } else { b };
        let (self_max, other_max) = (self.max(), other.max());
        Some(Rect::from_min_max(
            Vec2::new(
                larger(self.origin.x, other.origin.x),
                larger(self.origin.y, other.origin.y),
            ),
            Vec2::new(smaller(self_max.x, other_max.x), smaller(self_max.y, other_max.y)),
        ))
    }
}
