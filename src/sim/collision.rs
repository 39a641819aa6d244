//! Pairwise elastic collisions between circle bodies
//!
//! The pair is rotated into the frame whose x axis runs along the line of
//! centers, which reduces the response to the 1-D elastic formula on that
//! axis. Tangential velocity passes through the rotation untouched.

use glam::Vec2;

use super::body::Body;

/// Rotate `v` into the frame whose x axis points along `frame`
#[inline]
fn into_frame(frame: Vec2, v: Vec2) -> Vec2 {
    Vec2::new(frame.x, -frame.y).rotate(v)
}

/// Rotate `v` from the collision frame back to world space
#[inline]
fn out_of_frame(frame: Vec2, v: Vec2) -> Vec2 {
    frame.rotate(v)
}

/// 1-D elastic response along the normal: returns (v1', v2')
#[inline]
pub fn elastic_response(m1: f32, v1: f32, m2: f32, v2: f32) -> (f32, f32) {
    let v1_after = ((m1 - m2) * v1 + 2.0 * m2 * v2) / (m1 + m2);
    let v2_after = (v1 - v2) + v1_after;
    (v1_after, v2_after)
}

/// Resolve an elastic collision between two overlapping bodies.
///
/// Returns false, leaving both bodies untouched, when they do not overlap.
/// The remaining overlap is split along the normal in proportion to each
/// body's post-collision normal speed; when both are zero the positions are
/// left alone for this tick.
pub fn resolve_pair(a: &mut Body, b: &mut Body) -> bool {
    let delta = b.pos - a.pos;
    let reach = a.radius + b.radius;
    if delta.length() >= reach {
        return false;
    }

    let frame = Vec2::from_angle(delta.y.atan2(delta.x));

    let mut pos_a = Vec2::ZERO;
    let mut pos_b = into_frame(frame, delta);
    let mut vel_a = into_frame(frame, a.vel);
    let mut vel_b = into_frame(frame, b.vel);

    (vel_a.x, vel_b.x) = elastic_response(a.mass(), vel_a.x, b.mass(), vel_b.x);

    // NOTE: a tiny nonzero speed sum gives a large push
    let speed_sum = vel_a.x.abs() + vel_b.x.abs();
    if speed_sum > 0.0 {
        let overlap = reach - (pos_a.x - pos_b.x).abs();
        pos_a.x += vel_a.x / speed_sum * overlap;
        pos_b.x += vel_b.x / speed_sum * overlap;

        let origin = a.pos;
        a.pos = origin + out_of_frame(frame, pos_a);
        b.pos = origin + out_of_frame(frame, pos_b);
    }

    a.vel = out_of_frame(frame, vel_a);
    b.vel = out_of_frame(frame, vel_b);
    true
}

/// Two distinct mutable elements of a slice
pub fn pair_mut<T>(items: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    assert_ne!(i, j, "pair_mut needs two distinct indices");
    if i < j {
        let (head, tail) = items.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = items.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}
