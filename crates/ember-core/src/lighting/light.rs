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

//! Defines light types for the shading core.
//!
//! These are the CPU-side model types. The host populates them once per
//! frame; shading only ever reads them. Their GPU byte layouts live in
//! [`crate::gpu`].

use crate::math::{saturate, LinearRgba};
use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Maximum number of shadow cascades a directional light may carry.
pub const MAX_CASCADES: usize = 4;

/// One slice of a directional light's cascaded shadow frustum.
///
/// Cascades within a light are ordered by ascending `split_depth`; the
/// registry enforces this when lights are pushed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CascadeDescriptor {
    /// Transform from world space into this cascade's light clip space.
    pub light_space: Mat4,
    /// Far boundary of the cascade's view-depth range, normalized by the
    /// camera far plane.
    pub split_depth: f32,
}

impl Default for CascadeDescriptor {
    fn default() -> Self {
        Self {
            light_space: Mat4::IDENTITY,
            split_depth: 0.0,
        }
    }
}

/// A directional light source that illuminates from a uniform direction.
///
/// Directional lights simulate infinitely distant light sources like the sun.
/// They have no position, only a direction, and cast parallel rays with no
/// falloff. Shadowing uses up to [`MAX_CASCADES`] nested frustum slices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionalLight {
    /// The direction the light is pointing (normalized), from the light
    /// source towards the scene.
    pub direction: Vec3,
    /// The color of the light in linear RGB space.
    pub color: LinearRgba,
    /// The intensity multiplier for the light (>= 0).
    pub intensity: f32,
    /// Whether this light renders into the shadow atlas.
    pub cast_shadows: bool,
    /// Whether the light contributes at all this frame.
    pub enabled: bool,
    /// Stable identifier used to locate this light's atlas row.
    pub light_id: i32,
    /// Ordered cascade descriptors; only the first `num_cascades` are live.
    pub cascades: [CascadeDescriptor; MAX_CASCADES],
    /// Number of live cascades (<= [`MAX_CASCADES`]).
    pub num_cascades: usize,
}

impl DirectionalLight {
    /// Returns the live cascades, clamped to [`MAX_CASCADES`].
    #[inline]
    pub fn active_cascades(&self) -> &[CascadeDescriptor] {
        &self.cascades[..self.num_cascades.min(MAX_CASCADES)]
    }
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            direction: Vec3::new(0.0, -1.0, -0.5).normalize(),
            color: LinearRgba::WHITE,
            intensity: 1.0,
            cast_shadows: false,
            enabled: true,
            light_id: 0,
            cascades: [CascadeDescriptor::default(); MAX_CASCADES],
            num_cascades: 0,
        }
    }
}

/// A point light source that emits light in all directions from a single
/// point, attenuating to zero at `radius`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    /// World-space position of the light.
    pub position: Vec3,
    /// The color of the light in linear RGB space.
    pub color: LinearRgba,
    /// The intensity multiplier for the light (>= 0).
    pub intensity: f32,
    /// Falloff cutoff distance in world units (> 0). Beyond this distance
    /// the light has no effect.
    pub radius: f32,
    /// Exponent shaping the falloff curve inside the radius.
    pub falloff_exponent: f32,
    /// Whether this light renders into the cube shadow atlas.
    pub cast_shadows: bool,
    /// Whether the light contributes at all this frame.
    pub enabled: bool,
    /// Stable identifier used to locate this light's atlas layer.
    pub light_id: i32,
}

impl PointLight {
    /// Distance falloff for a surface point: `(1 - d/radius)^falloff`, zero
    /// at and beyond the radius, one at the light's position.
    pub fn attenuation(&self, frag_pos: Vec3) -> f32 {
        let distance = (self.position - frag_pos).length();
        if distance >= self.radius {
            return 0.0;
        }
        let normalized = distance / self.radius;
        (1.0 - normalized).powf(self.falloff_exponent)
    }
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            color: LinearRgba::WHITE,
            intensity: 1.0,
            radius: 10.0,
            falloff_exponent: 1.0,
            cast_shadows: false,
            enabled: true,
            light_id: 0,
        }
    }
}

/// A spot light source that emits light in a cone from a single point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpotLight {
    /// World-space position of the light.
    pub position: Vec3,
    /// The direction the cone is pointing (normalized).
    pub direction: Vec3,
    /// The color of the light in linear RGB space.
    pub color: LinearRgba,
    /// The intensity multiplier for the light (>= 0).
    pub intensity: f32,
    /// Angle in radians at which the light begins to fall off. Must be
    /// <= `outer_cutoff`.
    pub inner_cutoff: f32,
    /// Angle in radians at which the light is fully attenuated.
    pub outer_cutoff: f32,
    /// Falloff cutoff distance in world units (> 0).
    pub radius: f32,
    /// Whether this light renders into the shadow atlas.
    pub cast_shadows: bool,
    /// Transform from world space into the spot's light clip space.
    pub light_space: Mat4,
    /// Whether the light contributes at all this frame.
    pub enabled: bool,
    /// Stable identifier used to locate this light's atlas row.
    pub light_id: i32,
}

impl SpotLight {
    /// Angular falloff for a given light-to-fragment direction: one inside
    /// the inner cone, zero outside the outer cone, smooth in between.
    pub fn cone_falloff(&self, to_frag: Vec3) -> f32 {
        let cos_theta = self.direction.normalize().dot(to_frag.normalize());
        let cos_inner = self.inner_cutoff.cos();
        let cos_outer = self.outer_cutoff.cos();
        if cos_inner - cos_outer < f32::EPSILON {
            // Degenerate cone: hard edge at the cutoff.
            return if cos_theta >= cos_outer { 1.0 } else { 0.0 };
        }
        saturate((cos_theta - cos_outer) / (cos_inner - cos_outer))
    }

    /// Linear distance falloff: `1 - d/radius`, zero at and beyond the radius.
    pub fn attenuation(&self, frag_pos: Vec3) -> f32 {
        let distance = (self.position - frag_pos).length();
        if distance >= self.radius {
            return 0.0;
        }
        1.0 - distance / self.radius
    }
}

impl Default for SpotLight {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            direction: Vec3::new(0.0, -1.0, 0.0),
            color: LinearRgba::WHITE,
            intensity: 1.0,
            inner_cutoff: 20.0_f32.to_radians(),
            outer_cutoff: 35.0_f32.to_radians(),
            radius: 15.0,
            cast_shadows: false,
            light_space: Mat4::IDENTITY,
            enabled: true,
            light_id: 0,
        }
    }
}
