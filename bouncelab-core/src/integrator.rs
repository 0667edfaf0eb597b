use crate::engine::{Particle, World};

/// Step the simulation forward by dt using explicit Euler integration
///
/// Each particle is moved with its current velocity, pulled down by
/// gravity, clamped against the walls, then checked against every
/// later particle exactly once in index order.
pub fn step(world: &mut World, dt: f32) {
    let bounds = world.bounds;
    let gravity = world.gravity;
    let restitution = world.restitution;
    let count = world.particles.len();

    for i in 0..count {
        let p = &mut world.particles[i];

        p.pos += p.vel * dt;
        p.vel.y -= gravity * dt;

        // Walls clamp the center, not the circle edge. The two axes are
        // checked independently so a corner hit flips both components.
        if p.pos.y <= bounds.bottom {
            p.pos.y = bounds.bottom;
            p.vel.y = -p.vel.y;
        } else if p.pos.y >= bounds.top {
            p.pos.y = bounds.top;
            p.vel.y = -p.vel.y;
        }

        if p.pos.x <= bounds.left {
            p.pos.x = bounds.left;
            p.vel.x = -p.vel.x;
        } else if p.pos.x >= bounds.right {
            p.pos.x = bounds.right;
            p.vel.x = -p.vel.x;
        }

        // Pair checks see particle j as it currently is, which for j > i
        // means before its own integration this frame. Pairs are never
        // revisited after a resolution moves one of their members.
        for j in (i + 1)..count {
            let (head, tail) = world.particles.split_at_mut(j);
            let first = &mut head[i];
            let second = &mut tail[0];

            if check_collision(first, second) {
                if let Some((a, b)) = resolve_collision(first, second, restitution) {
                    *first = a;
                    *second = b;
                }
            }
        }
    }
}

/// True when two circles overlap (strict squared-distance test)
pub fn check_collision(a: &Particle, b: &Particle) -> bool {
    let delta = b.pos - a.pos;
    let radius_sum = a.radius + b.radius;
    delta.length_squared() < radius_sum * radius_sum
}

/// Separate two overlapping circles and reflect their velocities along
/// the contact normal.
///
/// Returns the updated pair, or `None` when the centers coincide exactly
/// and no contact normal exists.
pub fn resolve_collision(
    a: &Particle,
    b: &Particle,
    restitution: f32,
) -> Option<(Particle, Particle)> {
    let delta = b.pos - a.pos;
    let distance = delta.length();

    if distance == 0.0 {
        return None;
    }

    let normal = delta / distance;

    // Push both circles apart along the normal so they exactly touch
    let overlap = a.radius + b.radius - distance;
    let mut out_a = a.clone();
    let mut out_b = b.clone();
    out_a.pos -= normal * (overlap / 2.0);
    out_b.pos += normal * (overlap / 2.0);

    // Reflect the normal component of each velocity independently
    out_a.vel -= normal * (restitution * out_a.vel.dot(normal));
    out_b.vel -= normal * (restitution * out_b.vel.dot(normal));

    Some((out_a, out_b))
}
