// Copyright 2026 the Ember authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Defines the `LinearRgba` color type and associated operations.

use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

/// The exponent used by [`LinearRgba::gamma_encoded`] (display gamma 2.2).
pub const GAMMA: f32 = 2.2;

/// Represents a color in a **linear RGBA** color space using `f32` components.
///
/// This struct is the standard color representation within Ember. Using a
/// linear color space is crucial for correct lighting, shading, and blending.
/// The `f32` components allow for High Dynamic Range (HDR) colors, where
/// component values can exceed `1.0`.
///
/// `#[repr(C)]` ensures a consistent memory layout, which is important when
/// passing color data to graphics APIs.
#[derive(
    Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize, Deserialize,
)]
#[repr(C)]
pub struct LinearRgba {
    /// The red component in linear space.
    pub r: f32,
    /// The green component in linear space.
    pub g: f32,
    /// The blue component in linear space.
    pub b: f32,
    /// The alpha (opacity) component.
    pub a: f32,
}

impl LinearRgba {
    /// Opaque white (`[1.0, 1.0, 1.0, 1.0]`).
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// Opaque black (`[0.0, 0.0, 0.0, 1.0]`).
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    /// Fully transparent black (`[0.0, 0.0, 0.0, 0.0]`).
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a new `LinearRgba` with explicit RGBA values.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a new opaque `LinearRgba` (alpha = 1.0).
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a color from an RGB vector and an explicit alpha.
    #[inline]
    pub fn from_vec3(rgb: Vec3, alpha: f32) -> Self {
        Self::new(rgb.x, rgb.y, rgb.z, alpha)
    }

    /// Returns the RGB components as a [`Vec3`], dropping alpha.
    #[inline]
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.r, self.g, self.b)
    }

    /// Returns all four components as a [`Vec4`].
    #[inline]
    pub fn to_vec4(self) -> Vec4 {
        Vec4::new(self.r, self.g, self.b, self.a)
    }

    /// Applies Reinhard tone mapping (`c / (c + 1)`) to the RGB components.
    ///
    /// Maps an HDR radiance value into `[0, 1)`. Alpha is left untouched.
    #[inline]
    pub fn tone_map_reinhard(self) -> Self {
        Self {
            r: self.r / (self.r + 1.0),
            g: self.g / (self.g + 1.0),
            b: self.b / (self.b + 1.0),
            a: self.a,
        }
    }

    /// Gamma-encodes the RGB components for display (`c^(1/2.2)`).
    ///
    /// Alpha is left untouched. Expects tone-mapped (non-negative) input.
    #[inline]
    pub fn gamma_encoded(self) -> Self {
        let encode = |c: f32| c.max(0.0).powf(1.0 / GAMMA);
        Self {
            r: encode(self.r),
            g: encode(self.g),
            b: encode(self.b),
            a: self.a,
        }
    }
}

impl Default for LinearRgba {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Add for LinearRgba {
    type Output = Self;
    /// Adds two colors component-wise (including alpha).
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(
            self.r + rhs.r,
            self.g + rhs.g,
            self.b + rhs.b,
            self.a + rhs.a,
        )
    }
}

impl Mul<f32> for LinearRgba {
    type Output = Self;
    /// Scales the RGB and alpha components by a scalar.
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self::new(self.r * rhs, self.g * rhs, self.b * rhs, self.a * rhs)
    }
}

impl From<Vec4> for LinearRgba {
    #[inline]
    fn from(v: Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<LinearRgba> for [f32; 4] {
    #[inline]
    fn from(c: LinearRgba) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}
