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

//! The fixed-capacity, read-only-per-frame light registry.
//!
//! The host populates one [`LightRegistry`] per frame through the validating
//! `push_*` methods (or [`LightRegistry::from_slices`] when staging from raw
//! host arrays), then hands it to shading by shared reference. The storage
//! arrays are private; every accessor is bounded by the active counts, so no
//! caller can observe a slot past the live range.

use super::error::{LightCategory, RegistryError};
use super::light::{DirectionalLight, PointLight, SpotLight, MAX_CASCADES};
use crate::math::LinearRgba;

/// Maximum number of directional lights per frame.
pub const MAX_DIRECTIONAL_LIGHTS: usize = 4;
/// Maximum number of point lights per frame.
pub const MAX_POINT_LIGHTS: usize = 8;
/// Maximum number of spot lights per frame.
pub const MAX_SPOT_LIGHTS: usize = 8;

/// Global shadow-evaluation parameters shared by all lights in a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowSettings {
    /// Depth offset subtracted during shadow comparison to counter
    /// self-shadowing artifacts.
    pub bias: f32,
    /// PCF kernel radius in texels; the sampled grid is
    /// `(2 * radius + 1)^2` at full quality.
    pub pcf_kernel_radius: i32,
    /// Multiplier applied to the averaged occlusion before compositing.
    pub intensity: f32,
}

impl Default for ShadowSettings {
    fn default() -> Self {
        Self {
            bias: 0.005,
            pcf_kernel_radius: 2,
            intensity: 1.0,
        }
    }
}

/// Fixed-capacity, per-frame snapshot of every light affecting shading.
///
/// Immutable once handed to evaluation: all shading entry points take the
/// registry by shared reference and the per-sample code paths never write
/// through it, which is what makes massively parallel evaluation safe
/// without locking.
#[derive(Debug, Clone, PartialEq)]
pub struct LightRegistry {
    directional: [DirectionalLight; MAX_DIRECTIONAL_LIGHTS],
    num_directional: usize,
    point: [PointLight; MAX_POINT_LIGHTS],
    num_point: usize,
    spot: [SpotLight; MAX_SPOT_LIGHTS],
    num_spot: usize,
    /// Ambient term color (linear).
    pub ambient_color: LinearRgba,
    /// Ambient term intensity.
    pub ambient_intensity: f32,
    /// Global shadow parameters for this frame.
    pub shadow: ShadowSettings,
}

impl Default for LightRegistry {
    fn default() -> Self {
        Self {
            directional: [DirectionalLight::default(); MAX_DIRECTIONAL_LIGHTS],
            num_directional: 0,
            point: [PointLight::default(); MAX_POINT_LIGHTS],
            num_point: 0,
            spot: [SpotLight::default(); MAX_SPOT_LIGHTS],
            num_spot: 0,
            ambient_color: LinearRgba::WHITE,
            ambient_intensity: 0.03,
            shadow: ShadowSettings::default(),
        }
    }
}

impl LightRegistry {
    /// Creates an empty registry with default ambient and shadow settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from host-staged slices, running every light
    /// through the same validation as the `push_*` builders.
    ///
    /// Invalid or excess lights are a host-side configuration error; each
    /// one is dropped with a warning so per-sample evaluation never sees an
    /// out-of-contract light and never reads past the fixed arrays.
    pub fn from_slices(
        directional: &[DirectionalLight],
        point: &[PointLight],
        spot: &[SpotLight],
    ) -> Self {
        let mut registry = Self::new();
        for light in directional {
            if let Err(err) = registry.push_directional(*light) {
                log::warn!(
                    "light registry: dropping directional light {}: {err}",
                    light.light_id
                );
            }
        }
        for light in point {
            if let Err(err) = registry.push_point(*light) {
                log::warn!(
                    "light registry: dropping point light {}: {err}",
                    light.light_id
                );
            }
        }
        for light in spot {
            if let Err(err) = registry.push_spot(*light) {
                log::warn!(
                    "light registry: dropping spot light {}: {err}",
                    light.light_id
                );
            }
        }
        registry
    }

    /// Adds a directional light, validating capacity and cascade ordering.
    pub fn push_directional(&mut self, light: DirectionalLight) -> Result<(), RegistryError> {
        if self.num_directional >= MAX_DIRECTIONAL_LIGHTS {
            return Err(RegistryError::CapacityExceeded {
                category: LightCategory::Directional,
                capacity: MAX_DIRECTIONAL_LIGHTS,
            });
        }
        if light.num_cascades > MAX_CASCADES {
            return Err(RegistryError::TooManyCascades {
                light_id: light.light_id,
                declared: light.num_cascades,
            });
        }
        for i in 1..light.num_cascades {
            if light.cascades[i].split_depth <= light.cascades[i - 1].split_depth {
                return Err(RegistryError::CascadeOrder {
                    light_id: light.light_id,
                    cascade_index: i,
                });
            }
        }
        self.directional[self.num_directional] = light;
        self.num_directional += 1;
        Ok(())
    }

    /// Adds a point light, validating capacity and radius.
    pub fn push_point(&mut self, light: PointLight) -> Result<(), RegistryError> {
        if self.num_point >= MAX_POINT_LIGHTS {
            return Err(RegistryError::CapacityExceeded {
                category: LightCategory::Point,
                capacity: MAX_POINT_LIGHTS,
            });
        }
        if light.radius <= 0.0 {
            return Err(RegistryError::NonPositiveRadius {
                category: LightCategory::Point,
                light_id: light.light_id,
            });
        }
        self.point[self.num_point] = light;
        self.num_point += 1;
        Ok(())
    }

    /// Adds a spot light, validating capacity, radius, and cone angles.
    pub fn push_spot(&mut self, light: SpotLight) -> Result<(), RegistryError> {
        if self.num_spot >= MAX_SPOT_LIGHTS {
            return Err(RegistryError::CapacityExceeded {
                category: LightCategory::Spot,
                capacity: MAX_SPOT_LIGHTS,
            });
        }
        if light.radius <= 0.0 {
            return Err(RegistryError::NonPositiveRadius {
                category: LightCategory::Spot,
                light_id: light.light_id,
            });
        }
        if light.inner_cutoff > light.outer_cutoff {
            return Err(RegistryError::InvalidCone {
                light_id: light.light_id,
            });
        }
        self.spot[self.num_spot] = light;
        self.num_spot += 1;
        Ok(())
    }

    /// The live directional lights, in array order.
    #[inline]
    pub fn directional_lights(&self) -> &[DirectionalLight] {
        &self.directional[..self.num_directional.min(MAX_DIRECTIONAL_LIGHTS)]
    }

    /// The live point lights, in array order.
    #[inline]
    pub fn point_lights(&self) -> &[PointLight] {
        &self.point[..self.num_point.min(MAX_POINT_LIGHTS)]
    }

    /// The live spot lights, in array order.
    #[inline]
    pub fn spot_lights(&self) -> &[SpotLight] {
        &self.spot[..self.num_spot.min(MAX_SPOT_LIGHTS)]
    }

    /// Number of live directional lights.
    #[inline]
    pub fn num_directional(&self) -> usize {
        self.num_directional
    }

    /// Number of live point lights.
    #[inline]
    pub fn num_point(&self) -> usize {
        self.num_point
    }

    /// Number of live spot lights.
    #[inline]
    pub fn num_spot(&self) -> usize {
        self.num_spot
    }

    /// Finds the array position of the directional light with `light_id`.
    ///
    /// A `None` result signals a stale reference; the shadow subsystem
    /// treats it as "no atlas row assigned" and degrades to unshadowed.
    pub fn directional_index_of(&self, light_id: i32) -> Option<usize> {
        self.directional_lights()
            .iter()
            .position(|l| l.light_id == light_id)
    }

    /// Finds the array position of the point light with `light_id`.
    pub fn point_index_of(&self, light_id: i32) -> Option<usize> {
        self.point_lights()
            .iter()
            .position(|l| l.light_id == light_id)
    }

    /// Finds the array position of the spot light with `light_id`.
    pub fn spot_index_of(&self, light_id: i32) -> Option<usize> {
        self.spot_lights()
            .iter()
            .position(|l| l.light_id == light_id)
    }
}
