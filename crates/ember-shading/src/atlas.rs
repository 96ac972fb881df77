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

//! Shadow-atlas access: layer indexing and the depth-lookup seams.
//!
//! Directional and spot lights share one 2D depth-texture array where each
//! light owns a row of [`MAX_CASCADES`] consecutive layers; point lights map
//! one-to-one onto the layers of a cube-map array. The atlas *contents* are
//! produced by depth-only render passes outside this core; here they are
//! abstracted behind the [`DepthAtlas2d`] and [`DepthAtlasCube`] traits.

use ember_core::MAX_CASCADES;
use glam::{Vec2, Vec3};

/// Texture slot of the 2D shadow atlas (directional/spot cascades).
pub const SHADOW_ATLAS_2D_SLOT: u32 = 10;
/// Texture slot of the cube shadow atlas (point lights).
pub const SHADOW_ATLAS_CUBE_SLOT: u32 = 11;

/// Read access to the 2D shadow depth-texture array.
///
/// Implementations sample nearest-texel depth; PCF averaging happens in the
/// shadow sampler, not here.
pub trait DepthAtlas2d {
    /// Stored depth in `[0, 1]` at `uv` (in `[0, 1]^2`) on `layer`.
    ///
    /// Out-of-range layers must return `1.0` (farthest depth, never
    /// occluding) rather than failing.
    fn depth(&self, layer: usize, uv: Vec2) -> f32;

    /// The size of one texel in UV units (`1 / resolution`).
    fn texel_size(&self) -> Vec2;
}

/// Read access to the cube-map shadow array.
pub trait DepthAtlasCube {
    /// Stored depth in `[0, 1]` along `direction` (need not be normalized)
    /// on `layer`. The value is normalized by the owning light's radius.
    ///
    /// Out-of-range layers must return `1.0`.
    fn depth(&self, layer: usize, direction: Vec3) -> f32;

    /// The size of one texel in face UV units.
    fn texel_size(&self) -> f32;
}

/// Atlas layer of a directional light's cascade.
///
/// `array_index` is the light's position within the active registry array;
/// `None` signals a stale `light_id` lookup and yields no layer, which the
/// shadow sampler treats as "fully lit".
#[inline]
pub fn directional_layer(array_index: Option<usize>, cascade_index: usize) -> Option<usize> {
    let index = array_index?;
    debug_assert!(cascade_index < MAX_CASCADES);
    Some(index * MAX_CASCADES + cascade_index)
}

/// Atlas layer of a spot light (a single implicit cascade, index 0).
#[inline]
pub fn spot_layer(array_index: Option<usize>) -> Option<usize> {
    directional_layer(array_index, 0)
}

/// Cube-array layer of a point light (direct mapping).
#[inline]
pub fn point_layer(array_index: Option<usize>) -> Option<usize> {
    array_index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directional_layer_formula() {
        assert_eq!(directional_layer(Some(0), 0), Some(0));
        assert_eq!(directional_layer(Some(0), 3), Some(3));
        assert_eq!(directional_layer(Some(2), 1), Some(2 * MAX_CASCADES + 1));
    }

    #[test]
    fn test_spot_uses_first_cascade_slot() {
        assert_eq!(spot_layer(Some(3)), Some(3 * MAX_CASCADES));
    }

    #[test]
    fn test_point_layer_is_direct() {
        assert_eq!(point_layer(Some(5)), Some(5));
    }

    #[test]
    fn test_stale_reference_yields_no_layer() {
        assert_eq!(directional_layer(None, 2), None);
        assert_eq!(spot_layer(None), None);
        assert_eq!(point_layer(None), None);
    }
}
