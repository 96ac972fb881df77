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

//! The surface-local PBR material consumed by the BRDF evaluator.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Floor applied to roughness to avoid singularities in the specular terms.
pub const MIN_ROUGHNESS: f32 = 0.04;

/// Surface parameters for the Cook-Torrance shading model.
///
/// Produced by an external material-resolution step (constant values or
/// texture fetches); by the time a `Material` reaches the BRDF evaluator all
/// fields are plain scalars in linear space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Base color in linear space.
    pub albedo: Vec3,
    /// Metalness in `[0, 1]`; interpolates the Fresnel base reflectivity
    /// between the dielectric constant and the albedo.
    pub metallic: f32,
    /// Perceptual roughness in `[MIN_ROUGHNESS, 1]`.
    pub roughness: f32,
    /// Ambient occlusion in `[0, 1]`.
    pub ao: f32,
    /// Opacity, passed through shading unmodified.
    pub alpha: f32,
}

impl Material {
    /// Creates a material, clamping every parameter into its valid range and
    /// flooring roughness at [`MIN_ROUGHNESS`].
    pub fn new(albedo: Vec3, metallic: f32, roughness: f32, ao: f32, alpha: f32) -> Self {
        Self {
            albedo,
            metallic: metallic.clamp(0.0, 1.0),
            roughness: roughness.clamp(MIN_ROUGHNESS, 1.0),
            ao: ao.clamp(0.0, 1.0),
            alpha,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            albedo: Vec3::ONE,
            metallic: 0.0,
            roughness: 0.5,
            ao: 1.0,
            alpha: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_parameters() {
        let material = Material::new(Vec3::ONE, 1.5, 0.0, -0.2, 1.0);
        assert_eq!(material.metallic, 1.0);
        assert_eq!(material.roughness, MIN_ROUGHNESS);
        assert_eq!(material.ao, 0.0);
    }

    #[test]
    fn test_default_is_dielectric() {
        let material = Material::default();
        assert_eq!(material.metallic, 0.0);
        assert_eq!(material.alpha, 1.0);
    }
}
