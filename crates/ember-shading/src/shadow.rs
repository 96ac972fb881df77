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

//! Percentage-closer shadow sampling with a distance-adaptive kernel.
//!
//! Both the 2D (directional/spot) and cube (point) paths share one policy:
//! the PCF kernel radius shrinks as the light's effective distance
//! approaches a cutoff, cutting sample cost and long-range softening
//! artifacts. Shadowing is strictly an optional darkening term: every
//! bounds or validity failure returns `0.0` (fully lit), never an error.

use crate::atlas::{self, DepthAtlas2d, DepthAtlasCube};
use crate::cascade;
use crate::config::ShadingFeatures;
use ember_core::math::saturate;
use ember_core::{Camera, DirectionalLight, LightRegistry, PointLight, ShadowSettings, SpotLight};
use glam::{Vec2, Vec3, Vec4};

/// Reference viewer distance at which the 2D adaptive kernel bottoms out.
pub const MAX_VIEWER_DISTANCE: f32 = 100.0;
/// Scale applied to cube-map sample offsets so the perturbed directions stay
/// on the same cube face neighborhood.
pub const CUBE_OFFSET_DAMPING: f32 = 0.02;
/// Fraction of a point light's radius where the shadow fade-out begins.
pub const FADE_START_FRACTION: f32 = 0.85;

/// Kernel radius shrunk toward 1 as `distance` approaches `max_distance`:
/// `clamp(round(radius * (1 - d / max)), 1, radius)`.
fn adaptive_kernel(kernel_radius: i32, distance: f32, max_distance: f32) -> i32 {
    let radius = kernel_radius.max(1);
    let scaled = (radius as f32 * (1.0 - distance / max_distance)).round() as i32;
    scaled.clamp(1, radius)
}

/// PCF occlusion for a 2D atlas layer.
///
/// `light_space_pos` is the sample position in the light's clip space; it is
/// perspective-divided and remapped from NDC to `[0, 1]^3` here.
/// Out-of-frustum coordinates (`z > 1`, or x/y outside the atlas) yield
/// zero shadow. The result is the occluded fraction of a
/// `(2k+1)^2` texel grid, scaled by the global shadow intensity and
/// clamped to `[0, 1]`.
pub fn sample_shadow_2d<A: DepthAtlas2d + ?Sized>(
    atlas: &A,
    layer: usize,
    light_space_pos: Vec4,
    settings: &ShadowSettings,
    viewer_distance: f32,
) -> f32 {
    if light_space_pos.w.abs() <= f32::EPSILON {
        return 0.0;
    }
    let ndc = light_space_pos.truncate() / light_space_pos.w;
    let coords = ndc * 0.5 + Vec3::splat(0.5);
    if coords.z > 1.0
        || coords.x < 0.0
        || coords.x > 1.0
        || coords.y < 0.0
        || coords.y > 1.0
    {
        return 0.0;
    }

    let current_depth = coords.z;
    let kernel = adaptive_kernel(
        settings.pcf_kernel_radius,
        viewer_distance,
        MAX_VIEWER_DISTANCE,
    );
    let texel = atlas.texel_size();
    let total = ((2 * kernel + 1) * (2 * kernel + 1)) as f32;

    let mut occluded = 0.0;
    for x in -kernel..=kernel {
        for y in -kernel..=kernel {
            let uv = Vec2::new(coords.x, coords.y) + Vec2::new(x as f32, y as f32) * texel;
            let stored = atlas.depth(layer, uv);
            if current_depth - settings.bias > stored {
                occluded += 1.0;
            }
        }
    }
    saturate(occluded / total * settings.intensity)
}

/// PCF occlusion for a point light's cube-array layer.
///
/// Sample directions are perturbed within a tangent/bitangent basis built
/// around the light-to-sample direction; stored depths are rescaled by the
/// light radius before comparing against the linear distance. Past 85% of
/// the radius the result fades linearly, reaching zero exactly at the
/// radius so the cutoff introduces no discontinuity.
pub fn sample_shadow_cube<A: DepthAtlasCube + ?Sized>(
    atlas: &A,
    layer: usize,
    light: &PointLight,
    frag_pos: Vec3,
    settings: &ShadowSettings,
) -> f32 {
    let light_to_frag = frag_pos - light.position;
    let distance = light_to_frag.length();
    if distance > light.radius || distance <= f32::EPSILON {
        return 0.0;
    }
    let direction = light_to_frag / distance;

    // Tangent seed from world X, falling back to world Y when the sample
    // direction is nearly parallel to X.
    let seed = if direction.x.abs() > 0.99 {
        Vec3::Y
    } else {
        Vec3::X
    };
    let tangent = direction.cross(seed).normalize();
    let bitangent = direction.cross(tangent).normalize();

    let kernel = adaptive_kernel(settings.pcf_kernel_radius, distance, light.radius);
    let texel = atlas.texel_size();
    let total = ((2 * kernel + 1) * (2 * kernel + 1)) as f32;

    let mut occluded = 0.0;
    for x in -kernel..=kernel {
        for y in -kernel..=kernel {
            let offset =
                (tangent * (x as f32 * texel) + bitangent * (y as f32 * texel)) * CUBE_OFFSET_DAMPING;
            let sample_dir = (direction + offset).normalize();
            let stored = atlas.depth(layer, sample_dir) * light.radius;
            if distance - settings.bias > stored {
                occluded += 1.0;
            }
        }
    }

    let mut shadow = occluded / total * settings.intensity;
    let fade_start = light.radius * FADE_START_FRACTION;
    if distance > fade_start {
        let fade_length = light.radius - fade_start;
        shadow *= 1.0 - (distance - fade_start) / fade_length;
    }
    saturate(shadow)
}

/// Shadow factor for a directional light at a surface point.
///
/// Resolves the light's atlas row by `light_id`, selects the covering
/// cascade (or cascade 0 when cascaded shadows are disabled), samples it,
/// and optionally blends toward the next cascade inside the boundary band.
/// Returns `0.0` when the light does not cast shadows, is disabled, has no
/// cascades, or its `light_id` is stale.
pub fn directional_shadow<A: DepthAtlas2d + ?Sized>(
    registry: &LightRegistry,
    light: &DirectionalLight,
    frag_pos: Vec3,
    camera: &Camera,
    atlas: &A,
    features: ShadingFeatures,
) -> f32 {
    if !light.cast_shadows || !light.enabled {
        return 0.0;
    }
    let cascades = light.active_cascades();
    if cascades.is_empty() {
        return 0.0;
    }

    let depth = cascade::view_depth(frag_pos, camera);
    let selected = if features.cascaded_shadows {
        match cascade::select_cascade(cascades, depth) {
            Some(index) => index,
            None => return 0.0,
        }
    } else {
        0
    };

    let array_index = registry.directional_index_of(light.light_id);
    let layer = match atlas::directional_layer(array_index, selected) {
        Some(layer) => layer,
        None => return 0.0,
    };

    let viewer_distance = (camera.position - frag_pos).length();
    let light_space_pos = cascades[selected].light_space * frag_pos.extend(1.0);
    let mut shadow = sample_shadow_2d(atlas, layer, light_space_pos, &registry.shadow, viewer_distance);

    if features.cascaded_shadows && features.cascade_blending {
        if let Some(weight) = cascade::blend_toward_next(cascades, selected, depth) {
            if let Some(next_layer) = atlas::directional_layer(array_index, selected + 1) {
                let next_pos = cascades[selected + 1].light_space * frag_pos.extend(1.0);
                let next =
                    sample_shadow_2d(atlas, next_layer, next_pos, &registry.shadow, viewer_distance);
                shadow += (next - shadow) * weight;
            }
        }
    }
    shadow
}

/// Shadow factor for a spot light at a surface point.
///
/// Spot lights occupy a single implicit cascade in the 2D atlas. Returns
/// `0.0` when the light does not cast shadows, is disabled, or its
/// `light_id` is stale.
pub fn spot_shadow<A: DepthAtlas2d + ?Sized>(
    registry: &LightRegistry,
    light: &SpotLight,
    frag_pos: Vec3,
    camera: &Camera,
    atlas: &A,
) -> f32 {
    if !light.cast_shadows || !light.enabled {
        return 0.0;
    }
    let layer = match atlas::spot_layer(registry.spot_index_of(light.light_id)) {
        Some(layer) => layer,
        None => return 0.0,
    };
    let viewer_distance = (camera.position - frag_pos).length();
    let light_space_pos = light.light_space * frag_pos.extend(1.0);
    sample_shadow_2d(atlas, layer, light_space_pos, &registry.shadow, viewer_distance)
}

/// Shadow factor for a point light at a surface point.
///
/// Returns `0.0` when the light does not cast shadows, is disabled, is out
/// of range, or its `light_id` is stale.
pub fn point_shadow<A: DepthAtlasCube + ?Sized>(
    registry: &LightRegistry,
    light: &PointLight,
    frag_pos: Vec3,
    atlas: &A,
) -> f32 {
    if !light.cast_shadows || !light.enabled {
        return 0.0;
    }
    let layer = match atlas::point_layer(registry.point_index_of(light.light_id)) {
        Some(layer) => layer,
        None => return 0.0,
    };
    sample_shadow_cube(atlas, layer, light, frag_pos, &registry.shadow)
}
