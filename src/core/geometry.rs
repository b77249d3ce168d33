//! Plain geometry for placing and turning cards.
//!
//! The renderer owns all drawing; these types only carry the numbers it
//! needs: where a card sits on the table and how far it has turned.

use serde::{Deserialize, Serialize};
use std::ops::Add;

/// 2D vector in world units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Zero vector
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Unit square footprint
    pub const ONE: Self = Self { x: 1.0, y: 1.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Both components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

/// Unit quaternion describing how a card is turned.
///
/// Cards only ever rotate about the vertical axis: identity shows the back,
/// a half turn shows the front.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Default for Orientation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Orientation {
    /// No rotation (back side towards the viewer).
    pub const IDENTITY: Self = Self { w: 1.0, x: 0.0, y: 0.0, z: 0.0 };

    /// Half turn about the vertical axis (front side towards the viewer).
    pub const HALF_TURN: Self = Self { w: 0.0, x: 0.0, y: 1.0, z: 0.0 };

    /// Orientation a face-down card rests at.
    #[inline]
    pub const fn face_down() -> Self {
        Self::IDENTITY
    }

    /// Orientation a face-up card rests at.
    #[inline]
    pub const fn face_up() -> Self {
        Self::HALF_TURN
    }

    /// Rotation of `degrees` about the vertical axis.
    pub fn from_yaw_degrees(degrees: f32) -> Self {
        let half = degrees.to_radians() * 0.5;
        Self { w: half.cos(), x: 0.0, y: half.sin(), z: 0.0 }
    }

    /// Rotation about the vertical axis, in degrees.
    pub fn yaw_degrees(self) -> f32 {
        2.0 * self.y.atan2(self.w).to_degrees()
    }

    fn dot(self, other: Self) -> f32 {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    fn scale(self, s: f32) -> Self {
        Self { w: self.w * s, x: self.x * s, y: self.y * s, z: self.z * s }
    }

    fn plus(self, other: Self) -> Self {
        Self {
            w: self.w + other.w,
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }

    fn normalized(self) -> Self {
        let len = self.dot(self).sqrt();
        if len > 0.0 {
            self.scale(1.0 / len)
        } else {
            Self::IDENTITY
        }
    }

    /// Spherical interpolation from `from` to `to`, with `t` clamped to `[0, 1]`.
    ///
    /// Takes the shorter arc and falls back to normalized lerp when the two
    /// rotations are nearly parallel.
    pub fn slerp(from: Self, to: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mut to = to;
        let mut dot = from.dot(to);

        if dot < 0.0 {
            to = to.scale(-1.0);
            dot = -dot;
        }

        if dot > 0.9995 {
            return from.scale(1.0 - t).plus(to.scale(t)).normalized();
        }

        let theta_0 = dot.acos();
        let theta = theta_0 * t;
        let sin_theta_0 = theta_0.sin();
        let sin_theta = theta.sin();

        let s0 = theta.cos() - dot * sin_theta / sin_theta_0;
        let s1 = sin_theta / sin_theta_0;
        from.scale(s0).plus(to.scale(s1))
    }
}
