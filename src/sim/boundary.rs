//! Boundary handling against the outer frame and the container rectangle

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{Axis, Body, Cutter, Kinematic};

/// Axis-aligned rectangle in viewport coordinates (y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// A rectangle without area has not been laid out yet
    pub fn is_measured(&self) -> bool {
        self.right > self.left && self.bottom > self.top
    }

    /// Whether the square of half-size `extent` around `center` overlaps the rectangle
    pub fn overlaps(&self, center: Vec2, extent: f32) -> bool {
        center.x + extent > self.left
            && center.x - extent < self.right
            && center.y + extent > self.top
            && center.y - extent < self.bottom
    }
}

/// Face of the container that was hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Left,
    Right,
    Top,
    Bottom,
}

impl Face {
    pub fn axis(self) -> Axis {
        match self {
            Face::Left | Face::Right => Axis::X,
            Face::Top | Face::Bottom => Axis::Y,
        }
    }
}

/// Reflect velocity on each axis where the next step would leave the frame.
///
/// Only outward-moving axes are reflected, so a body left outside by a
/// viewport shrink drifts back instead of jittering.
pub fn bounce_off_frame<K: Kinematic>(body: &mut K, extent: Vec2) {
    let next = body.next_pos();
    let e = body.half_extent();
    let vel = body.vel();

    if (next.x + e > extent.x && vel.x > 0.0) || (next.x - e < 0.0 && vel.x < 0.0) {
        body.reflect_axis(Axis::X);
    }
    if (next.y + e > extent.y && vel.y > 0.0) || (next.y - e < 0.0 && vel.y < 0.0) {
        body.reflect_axis(Axis::Y);
    }
}

/// Face of `rect` the body is about to hit, if its next step overlaps it.
///
/// Overlaps into each face are measured from the current position; the axis
/// with the shallower penetration is the axis of impact.
pub fn container_impact<K: Kinematic>(body: &K, rect: &Rect) -> Option<Face> {
    let e = body.half_extent();
    if !rect.overlaps(body.next_pos(), e) {
        return None;
    }

    let pos = body.pos();
    let left = pos.x + e - rect.left;
    let right = rect.right - (pos.x - e);
    let top = pos.y + e - rect.top;
    let bottom = rect.bottom - (pos.y - e);

    let (x_face, x_depth) = if left.abs() <= right.abs() {
        (Face::Left, left.abs())
    } else {
        (Face::Right, right.abs())
    };
    let (y_face, y_depth) = if top.abs() <= bottom.abs() {
        (Face::Top, top.abs())
    } else {
        (Face::Bottom, bottom.abs())
    };

    Some(if x_depth < y_depth { x_face } else { y_face })
}

/// Reflect off the container; returns the face hit
pub fn bounce_off_container<K: Kinematic>(body: &mut K, rect: &Rect) -> Option<Face> {
    let face = container_impact(body, rect)?;
    body.reflect_axis(face.axis());
    Some(face)
}

/// Push a circle out to the outside of `face`
pub fn clamp_to_face(body: &mut Body, rect: &Rect, face: Face) {
    let r = body.radius;
    match face {
        Face::Left => body.pos.x = rect.left - r,
        Face::Right => body.pos.x = rect.right + r,
        Face::Top => body.pos.y = rect.top - r,
        Face::Bottom => body.pos.y = rect.bottom + r,
    }
}

/// Frame and container handling for a circle body (before integration)
pub fn resolve_body(body: &mut Body, extent: Vec2, container: Option<&Rect>) {
    bounce_off_frame(body, extent);
    if let Some(rect) = container {
        if let Some(face) = bounce_off_container(body, rect) {
            clamp_to_face(body, rect, face);
        }
    }
}

/// Frame and container handling for the cutter; velocity only, never clamped
pub fn resolve_cutter(cutter: &mut Cutter, extent: Vec2, container: Option<&Rect>) {
    bounce_off_frame(cutter, extent);
    if let Some(rect) = container {
        bounce_off_container(cutter, rect);
    }
}
