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

//! The shading composer: one surface sample in, one display color out.
//!
//! Accumulates the Cook-Torrance contribution of every live light, each
//! scaled by its shadow factor, adds the ambient term, then tone-maps
//! (Reinhard) and gamma-encodes. Shadowing only ever darkens: a shadow
//! factor of 0 leaves a light's contribution untouched and 1 removes it.

use crate::atlas::{DepthAtlas2d, DepthAtlasCube};
use crate::brdf;
use crate::config::ShadingFeatures;
use crate::shadow;
use ember_core::math::LinearRgba;
use ember_core::{Camera, LightRegistry, Material};
use glam::Vec3;

/// Everything shading needs for one frame, borrowed from the host.
///
/// The context is plain shared-reference data; clone it freely across
/// worker threads shading the same frame snapshot.
pub struct ShadingContext<'a, A2: DepthAtlas2d, AC: DepthAtlasCube> {
    /// The frame's light snapshot.
    pub lights: &'a LightRegistry,
    /// The active camera, used for the view direction and cascade depth.
    pub camera: &'a Camera,
    /// Depth atlas holding directional and spot shadow maps.
    pub shadow_atlas: &'a A2,
    /// Cube-map array holding point-light shadow maps.
    pub point_shadow_atlas: &'a AC,
    /// Feature toggles, fixed for the frame.
    pub features: ShadingFeatures,
}

// Manual impls: the derive would demand `A2: Copy` although only
// references to the atlases are held.
impl<A2: DepthAtlas2d, AC: DepthAtlasCube> Clone for ShadingContext<'_, A2, AC> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A2: DepthAtlas2d, AC: DepthAtlasCube> Copy for ShadingContext<'_, A2, AC> {}

/// Shades one surface sample, returning a display-ready color.
///
/// `normal` need not be normalized. The material's alpha passes through
/// to the output untouched; tone mapping and gamma encoding apply to RGB
/// only.
pub fn shade<A2: DepthAtlas2d, AC: DepthAtlasCube>(
    ctx: &ShadingContext<'_, A2, AC>,
    frag_pos: Vec3,
    normal: Vec3,
    material: &Material,
) -> LinearRgba {
    let normal = normal.normalize_or_zero();
    let view_dir = (ctx.camera.position - frag_pos).normalize_or_zero();

    let mut radiance = Vec3::ZERO;

    for light in ctx.lights.directional_lights() {
        let contribution = brdf::directional_contribution(light, normal, view_dir, material);
        if contribution == Vec3::ZERO {
            continue;
        }
        let shadow = shadow::directional_shadow(
            ctx.lights,
            light,
            frag_pos,
            ctx.camera,
            ctx.shadow_atlas,
            ctx.features,
        );
        radiance += contribution * (1.0 - shadow);
    }

    for light in ctx.lights.point_lights() {
        let contribution = brdf::point_contribution(light, frag_pos, normal, view_dir, material);
        if contribution == Vec3::ZERO {
            continue;
        }
        let shadow = if ctx.features.point_shadows {
            shadow::point_shadow(ctx.lights, light, frag_pos, ctx.point_shadow_atlas)
        } else {
            0.0
        };
        radiance += contribution * (1.0 - shadow);
    }

    for light in ctx.lights.spot_lights() {
        let contribution = brdf::spot_contribution(light, frag_pos, normal, view_dir, material);
        if contribution == Vec3::ZERO {
            continue;
        }
        let shadow = if ctx.features.spot_shadows {
            shadow::spot_shadow(ctx.lights, light, frag_pos, ctx.camera, ctx.shadow_atlas)
        } else {
            0.0
        };
        radiance += contribution * (1.0 - shadow);
    }

    let ambient = ctx.lights.ambient_color.to_vec3()
        * ctx.lights.ambient_intensity
        * material.albedo
        * material.ao;

    LinearRgba::from_vec3(radiance + ambient, material.alpha)
        .tone_map_reinhard()
        .gamma_encoded()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    struct ConstAtlas2d(f32);

    impl DepthAtlas2d for ConstAtlas2d {
        fn depth(&self, _layer: usize, _uv: Vec2) -> f32 {
            self.0
        }
        fn texel_size(&self) -> Vec2 {
            Vec2::splat(1.0 / 1024.0)
        }
    }

    struct ConstAtlasCube(f32);

    impl DepthAtlasCube for ConstAtlasCube {
        fn depth(&self, _layer: usize, _direction: Vec3) -> f32 {
            self.0
        }
        fn texel_size(&self) -> f32 {
            1.0 / 512.0
        }
    }

    fn camera() -> Camera {
        Camera::perspective(
            Vec3::new(0.0, 5.0, -10.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.0, 1.0, 0.0),
            45.0_f32.to_radians(),
            16.0 / 9.0,
            0.1,
            100.0,
        )
    }

    fn context<'a>(
        lights: &'a LightRegistry,
        camera: &'a Camera,
        atlas_2d: &'a ConstAtlas2d,
        atlas_cube: &'a ConstAtlasCube,
    ) -> ShadingContext<'a, ConstAtlas2d, ConstAtlasCube> {
        ShadingContext {
            lights,
            camera,
            shadow_atlas: atlas_2d,
            point_shadow_atlas: atlas_cube,
            features: ShadingFeatures::full(),
        }
    }

    #[test]
    fn test_empty_registry_shades_ambient_only() {
        let lights = LightRegistry::new();
        let camera = camera();
        let atlas_2d = ConstAtlas2d(1.0);
        let atlas_cube = ConstAtlasCube(1.0);
        let ctx = context(&lights, &camera, &atlas_2d, &atlas_cube);

        let material = Material::default();
        let color = shade(&ctx, Vec3::ZERO, Vec3::Y, &material);

        let expected = LinearRgba::from_vec3(
            lights.ambient_color.to_vec3() * lights.ambient_intensity * material.albedo,
            1.0,
        )
        .tone_map_reinhard()
        .gamma_encoded();
        assert!((color.r - expected.r).abs() < 1e-6);
        assert!((color.g - expected.g).abs() < 1e-6);
    }

    #[test]
    fn test_ambient_scales_with_occlusion() {
        let lights = LightRegistry::new();
        let camera = camera();
        let atlas_2d = ConstAtlas2d(1.0);
        let atlas_cube = ConstAtlasCube(1.0);
        let ctx = context(&lights, &camera, &atlas_2d, &atlas_cube);

        let open = shade(&ctx, Vec3::ZERO, Vec3::Y, &Material::default());
        let occluded_material = Material {
            ao: 0.25,
            ..Default::default()
        };
        let occluded = shade(&ctx, Vec3::ZERO, Vec3::Y, &occluded_material);
        assert!(occluded.r < open.r);
    }

    #[test]
    fn test_alpha_passes_through_unmodified() {
        let lights = LightRegistry::new();
        let camera = camera();
        let atlas_2d = ConstAtlas2d(1.0);
        let atlas_cube = ConstAtlasCube(1.0);
        let ctx = context(&lights, &camera, &atlas_2d, &atlas_cube);

        let material = Material {
            alpha: 0.35,
            ..Default::default()
        };
        let color = shade(&ctx, Vec3::ZERO, Vec3::Y, &material);
        assert_eq!(color.a, 0.35);
    }

    #[test]
    fn test_output_is_display_bounded() {
        let mut lights = LightRegistry::new();
        lights
            .push_directional(ember_core::DirectionalLight {
                direction: Vec3::new(0.0, -1.0, 0.0),
                intensity: 50.0,
                ..Default::default()
            })
            .unwrap();
        let camera = camera();
        let atlas_2d = ConstAtlas2d(1.0);
        let atlas_cube = ConstAtlasCube(1.0);
        let ctx = context(&lights, &camera, &atlas_2d, &atlas_cube);

        let color = shade(&ctx, Vec3::ZERO, Vec3::Y, &Material::default());
        for c in [color.r, color.g, color.b] {
            assert!((0.0..1.0).contains(&c), "tone mapping must bound output");
        }
    }

    #[test]
    fn test_degenerate_normal_degrades_to_ambient() {
        let mut lights = LightRegistry::new();
        lights
            .push_directional(ember_core::DirectionalLight {
                direction: Vec3::new(0.0, -1.0, 0.0),
                ..Default::default()
            })
            .unwrap();
        let camera = camera();
        let atlas_2d = ConstAtlas2d(1.0);
        let atlas_cube = ConstAtlasCube(1.0);
        let ctx = context(&lights, &camera, &atlas_2d, &atlas_cube);

        let color = shade(&ctx, Vec3::ZERO, Vec3::ZERO, &Material::default());
        assert!(color.r.is_finite());
    }
}
