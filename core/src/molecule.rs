use na::Vector2;
use serde::{Deserialize, Serialize};
use crate::color::{color_for, Rgb};

/// Structure that keeps all data for one molecule
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Molecule {
    /// top-left corner of the molecule's bounding box in arena coordinates
    pub position: Vector2<f64>,
    /// displacement per frame
    pub velocity: Vector2<f64>,
    /// radius, shared by every molecule of a run
    pub radius: f64,
    /// fill color computed on the last frame
    pub color: Rgb,
}

/// Outcome of [Molecule::check_collision] for one pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Contact {
    /// Not overlapping, or exactly coincident.
    Apart,
    /// Overlap corrected, but the pair wasn't approaching along the normal so
    /// velocities are kept.
    Separating,
    /// Overlap corrected and the normal components of the velocities exchanged.
    Resolved,
}

impl Molecule {
    /// Create new molecule with blue fill.
    ///
    /// # Examples
    ///
    /// ```
    /// # use nalgebra::Vector2;
    /// # use gasviz_core::{Molecule, Rgb};
    /// let molecule = Molecule::new(Vector2::new(10.0, 20.0), Vector2::new(3.0, 4.0), 3.0);
    /// assert_eq!(molecule.speed(), 5.0);
    /// assert_eq!(molecule.diameter(), 6.0);
    /// assert_eq!(molecule.color, Rgb::BLUE);
    /// ```
    pub fn new(position: Vector2<f64>, velocity: Vector2<f64>, radius: f64) -> Self {
        Molecule {
            position,
            velocity,
            radius,
            color: Rgb::BLUE,
        }
    }

    #[inline]
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }

    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        self.position + Vector2::new(self.radius, self.radius)
    }

    /// Magnitude of the velocity, always computed from the current velocity.
    #[inline]
    pub fn speed(&self) -> f64 {
        self.velocity.x.hypot(self.velocity.y)
    }

    /// `vx² + vy²`, twice the kinetic energy of a unit-mass molecule.
    #[inline]
    pub fn energy_proxy(&self) -> f64 {
        self.velocity.norm_squared()
    }

    /// Flip every velocity component that would carry the bounding box past a wall
    /// on this frame. Each axis flips at most once per call.
    ///
    /// Returns number of flipped components.
    pub fn reflect_walls(&mut self, arena_width: f64, arena_height: f64) -> usize {
        let diameter = self.diameter();
        let mut flipped = 0;
        let next_x = self.position.x + self.velocity.x;
        if next_x < 0.0 || next_x + diameter > arena_width {
            self.velocity.x = -self.velocity.x;
            flipped += 1;
        }
        let next_y = self.position.y + self.velocity.y;
        if next_y < 0.0 || next_y + diameter > arena_height {
            self.velocity.y = -self.velocity.y;
            flipped += 1;
        }
        flipped
    }

    /// Reflect off the walls and advance by one frame of velocity.
    ///
    /// Position isn't clamped afterwards: a molecule faster than its distance to the
    /// opposite wall can end up outside the arena by less than its speed.
    pub fn move_within(&mut self, arena_width: f64, arena_height: f64) -> usize {
        let flipped = self.reflect_walls(arena_width, arena_height);
        self.position += self.velocity;
        flipped
    }

    /// Separate an overlapping pair and, if it is approaching, exchange the velocity
    /// components along the contact normal (equal masses).
    pub fn check_collision(&mut self, other: &mut Molecule) -> Contact {
        let delta = other.position - self.position;
        let distance = delta.x.hypot(delta.y);
        let contact_distance = self.radius + other.radius;
        if distance >= contact_distance || distance == 0.0 {
            return Contact::Apart;
        }
        let normal = delta / distance;
        let half_overlap = (contact_distance - distance) / 2.0;
        self.position -= normal * half_overlap;
        other.position += normal * half_overlap;

        // zero or positive: no approach along the normal, nothing to exchange
        let impact_speed = (other.velocity - self.velocity).dot(&normal);
        if impact_speed >= 0.0 {
            return Contact::Separating;
        }
        self.velocity += normal * impact_speed;
        other.velocity -= normal * impact_speed;
        Contact::Resolved
    }

    /// Set fill color for the current speed against this frame's fastest molecule.
    pub fn recolor(&mut self, reference_max_speed: f64) {
        self.color = color_for(self.speed(), reference_max_speed);
    }

    /// Whether the bounding box lies inside `[0, width] x [0, height]`.
    pub fn is_inside(&self, arena_width: f64, arena_height: f64) -> bool {
        let diameter = self.diameter();
        self.position.x >= 0.0
            && self.position.y >= 0.0
            && self.position.x + diameter <= arena_width
            && self.position.y + diameter <= arena_height
    }
}

impl Default for Molecule {
    /// Resting molecule in the corner with the default radius of 3.
    fn default() -> Self {
        Molecule::new(Vector2::zeros(), Vector2::zeros(), 3.0)
    }
}
