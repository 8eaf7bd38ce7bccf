use std::collections::VecDeque;

use nalgebra::Vector2;

use crate::{config::PathRetention, Float};

/// The trail of positions a particle has visited, oldest first.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    points: VecDeque<Vector2<Float>>,
    retention: PathRetention,
}

impl Path {
    #[must_use]
    pub fn new(start: Vector2<Float>, retention: PathRetention) -> Self {
        let mut points = VecDeque::new();
        points.push_back(start);
        Self { points, retention }
    }

    pub fn push(&mut self, point: Vector2<Float>) {
        self.points.push_back(point);
        if let PathRetention::Capped(cap) = self.retention {
            while self.points.len() > cap.get() {
                self.points.pop_front();
            }
        }
    }

    /// Drop everything and start over from `start`.
    pub fn restart(&mut self, start: Vector2<Float>) {
        self.points.clear();
        self.points.push_back(start);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn retention(&self) -> PathRetention {
        self.retention
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Vector2<Float>> + '_ {
        self.points.iter()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Vector2<Float>> {
        self.points.back()
    }
}
