use glam::Vec2;

/// A circular body in the physics simulation
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// The rectangular region particles are confined to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl Bounds {
    /// The normalized-device-coordinate square [-1, 1] x [-1, 1]
    pub const UNIT: Bounds = Bounds {
        left: -1.0,
        right: 1.0,
        bottom: -1.0,
        top: 1.0,
    };

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.right) / 2.0,
            (self.bottom + self.top) / 2.0,
        )
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::UNIT
    }
}

/// The physics world containing the particles and global parameters
#[derive(Debug, Clone)]
pub struct World {
    pub particles: Vec<Particle>,
    pub bounds: Bounds,
    pub gravity: f32,
    pub restitution: f32,
}

impl World {
    pub fn new(particles: Vec<Particle>, bounds: Bounds, gravity: f32, restitution: f32) -> Self {
        Self {
            particles,
            bounds,
            gravity,
            restitution,
        }
    }
}
