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

//! Cook-Torrance microfacet reflectance.
//!
//! One specular lobe (GGX distribution, Smith geometry with Schlick-GGX
//! terms, Schlick Fresnel) plus a Lambertian diffuse lobe weighted so the
//! two stay energy-conserving: the Fresnel term is the specular ratio `kS`
//! and the diffuse ratio is `(1 - kS) * (1 - metallic)`. Per-light entry
//! points fold in the light's radiance and falloff and return a linear HDR
//! contribution; tone mapping happens later in the composer.

use ember_core::material::MIN_ROUGHNESS;
use ember_core::math::PI;
use ember_core::{DirectionalLight, Material, PointLight, SpotLight};
use glam::Vec3;

/// Base reflectivity of dielectric surfaces at normal incidence.
pub const DIELECTRIC_F0: f32 = 0.04;

/// GGX/Trowbridge-Reitz normal distribution.
pub fn distribution_ggx(normal: Vec3, halfway: Vec3, roughness: f32) -> f32 {
    let a = roughness * roughness;
    let a2 = a * a;
    let n_dot_h = normal.dot(halfway).max(0.0);
    let denom = n_dot_h * n_dot_h * (a2 - 1.0) + 1.0;
    a2 / (PI * denom * denom).max(1e-7)
}

/// Schlick-GGX geometry term for one direction, with the direct-lighting
/// remap `k = (roughness + 1)^2 / 8`.
pub fn geometry_schlick_ggx(n_dot_v: f32, roughness: f32) -> f32 {
    let r = roughness + 1.0;
    let k = (r * r) / 8.0;
    n_dot_v / (n_dot_v * (1.0 - k) + k).max(1e-7)
}

/// Smith geometry: shadowing and masking combined multiplicatively.
pub fn geometry_smith(normal: Vec3, view_dir: Vec3, light_dir: Vec3, roughness: f32) -> f32 {
    let n_dot_v = normal.dot(view_dir).max(0.0);
    let n_dot_l = normal.dot(light_dir).max(0.0);
    geometry_schlick_ggx(n_dot_v, roughness) * geometry_schlick_ggx(n_dot_l, roughness)
}

/// Schlick's Fresnel approximation.
pub fn fresnel_schlick(cos_theta: f32, f0: Vec3) -> Vec3 {
    f0 + (Vec3::ONE - f0) * (1.0 - cos_theta).clamp(0.0, 1.0).powf(5.0)
}

/// Normal-incidence reflectivity of a material: the dielectric constant
/// blended toward the albedo as the surface becomes metallic.
pub fn base_reflectivity(material: &Material) -> Vec3 {
    Vec3::splat(DIELECTRIC_F0).lerp(material.albedo, material.metallic)
}

/// The shared per-light core: reflectance toward `view_dir` of `radiance`
/// arriving along `light_dir` (surface toward light, normalized).
fn cook_torrance(
    normal: Vec3,
    view_dir: Vec3,
    light_dir: Vec3,
    radiance: Vec3,
    material: &Material,
) -> Vec3 {
    let n_dot_l = normal.dot(light_dir).max(0.0);
    if n_dot_l <= 0.0 {
        return Vec3::ZERO;
    }
    let roughness = material.roughness.max(MIN_ROUGHNESS);
    let halfway = (view_dir + light_dir).normalize();

    let ndf = distribution_ggx(normal, halfway, roughness);
    let geometry = geometry_smith(normal, view_dir, light_dir, roughness);
    let fresnel = fresnel_schlick(halfway.dot(view_dir).max(0.0), base_reflectivity(material));

    let n_dot_v = normal.dot(view_dir).max(0.0);
    let specular = ndf * geometry * fresnel / (4.0 * n_dot_v * n_dot_l).max(1e-4);

    // Fresnel is the specular ratio; metals have no diffuse lobe.
    let k_diffuse = (Vec3::ONE - fresnel) * (1.0 - material.metallic);

    (k_diffuse * material.albedo / PI + specular) * radiance * n_dot_l
}

/// Unshadowed contribution of a directional light.
pub fn directional_contribution(
    light: &DirectionalLight,
    normal: Vec3,
    view_dir: Vec3,
    material: &Material,
) -> Vec3 {
    if !light.enabled {
        return Vec3::ZERO;
    }
    let light_dir = -light.direction.normalize();
    let radiance = light.color.to_vec3() * light.intensity;
    cook_torrance(normal, view_dir, light_dir, radiance, material)
}

/// Unshadowed contribution of a point light, including distance falloff.
pub fn point_contribution(
    light: &PointLight,
    frag_pos: Vec3,
    normal: Vec3,
    view_dir: Vec3,
    material: &Material,
) -> Vec3 {
    if !light.enabled {
        return Vec3::ZERO;
    }
    let attenuation = light.attenuation(frag_pos);
    if attenuation <= 0.0 {
        return Vec3::ZERO;
    }
    let light_dir = (light.position - frag_pos).normalize();
    let radiance = light.color.to_vec3() * light.intensity * attenuation;
    cook_torrance(normal, view_dir, light_dir, radiance, material)
}

/// Unshadowed contribution of a spot light, including distance falloff and
/// the angular cone falloff.
pub fn spot_contribution(
    light: &SpotLight,
    frag_pos: Vec3,
    normal: Vec3,
    view_dir: Vec3,
    material: &Material,
) -> Vec3 {
    if !light.enabled {
        return Vec3::ZERO;
    }
    let attenuation = light.attenuation(frag_pos);
    if attenuation <= 0.0 {
        return Vec3::ZERO;
    }
    let cone = light.cone_falloff(frag_pos - light.position);
    if cone <= 0.0 {
        return Vec3::ZERO;
    }
    let light_dir = (light.position - frag_pos).normalize();
    let radiance = light.color.to_vec3() * light.intensity * attenuation * cone;
    cook_torrance(normal, view_dir, light_dir, radiance, material)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rough_dielectric() -> Material {
        Material::new(Vec3::new(0.8, 0.2, 0.2), 0.0, 0.5, 1.0, 1.0)
    }

    #[test]
    fn test_fresnel_at_normal_incidence_is_f0() {
        let f0 = Vec3::new(0.04, 0.04, 0.04);
        let f = fresnel_schlick(1.0, f0);
        assert_relative_eq!(f.x, 0.04, epsilon = 1e-6);
    }

    #[test]
    fn test_fresnel_at_grazing_angle_approaches_one() {
        let f = fresnel_schlick(0.0, Vec3::splat(0.04));
        assert_relative_eq!(f.x, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_fresnel_bounds_keep_lobe_ratios_conserving() {
        // The specular ratio kS is the Fresnel value and the diffuse ratio
        // is its complement, so energy conservation rests on F staying in
        // [F0, 1] over the whole incidence sweep.
        let f0 = base_reflectivity(&rough_dielectric());
        for step in 0..=20 {
            let cos_theta = step as f32 / 20.0;
            let k_s = fresnel_schlick(cos_theta, f0);
            for (s, f0_c) in [(k_s.x, f0.x), (k_s.y, f0.y), (k_s.z, f0.z)] {
                assert!(s >= f0_c - 1e-6 && s <= 1.0 + 1e-6);
                let k_d = 1.0 - s;
                assert!(k_d >= -1e-6 && k_d <= 1.0 - f0_c + 1e-6);
            }
        }
    }

    #[test]
    fn test_base_reflectivity_blends_with_metallic() {
        let albedo = Vec3::new(0.9, 0.6, 0.3);
        let metal = Material::new(albedo, 1.0, 0.3, 1.0, 1.0);
        assert_relative_eq!(base_reflectivity(&metal).x, 0.9, epsilon = 1e-6);
        let dielectric = Material::new(albedo, 0.0, 0.3, 1.0, 1.0);
        assert_relative_eq!(base_reflectivity(&dielectric).x, DIELECTRIC_F0, epsilon = 1e-6);
    }

    #[test]
    fn test_ggx_peaks_at_aligned_halfway() {
        let n = Vec3::Z;
        let aligned = distribution_ggx(n, n, 0.3);
        let tilted = distribution_ggx(n, Vec3::new(0.5, 0.0, 0.866).normalize(), 0.3);
        assert!(aligned > tilted);
    }

    #[test]
    fn test_geometry_term_in_unit_range() {
        let g = geometry_smith(Vec3::Z, Vec3::Z, Vec3::new(0.0, 0.6, 0.8), 0.5);
        assert!(g > 0.0 && g <= 1.0);
    }

    #[test]
    fn test_directional_contribution_non_negative() {
        let light = DirectionalLight {
            direction: Vec3::new(0.0, -1.0, 0.0),
            ..Default::default()
        };
        let c = directional_contribution(&light, Vec3::Y, Vec3::Y, &rough_dielectric());
        assert!(c.x >= 0.0 && c.y >= 0.0 && c.z >= 0.0);
        assert!(c.x > 0.0, "head-on light must contribute");
    }

    #[test]
    fn test_directional_light_facing_away_contributes_nothing() {
        let light = DirectionalLight {
            direction: Vec3::new(0.0, 1.0, 0.0),
            ..Default::default()
        };
        let c = directional_contribution(&light, Vec3::Y, Vec3::Y, &rough_dielectric());
        assert_eq!(c, Vec3::ZERO);
    }

    #[test]
    fn test_disabled_light_contributes_nothing() {
        let light = DirectionalLight {
            direction: Vec3::new(0.0, -1.0, 0.0),
            enabled: false,
            ..Default::default()
        };
        let c = directional_contribution(&light, Vec3::Y, Vec3::Y, &rough_dielectric());
        assert_eq!(c, Vec3::ZERO);
    }

    #[test]
    fn test_point_light_beyond_radius_contributes_nothing() {
        let light = PointLight {
            position: Vec3::ZERO,
            radius: 5.0,
            ..Default::default()
        };
        let c = point_contribution(
            &light,
            Vec3::new(6.0, 0.0, 0.0),
            Vec3::X,
            Vec3::X,
            &rough_dielectric(),
        );
        assert_eq!(c, Vec3::ZERO);
    }

    #[test]
    fn test_point_light_dims_with_distance() {
        let light = PointLight {
            position: Vec3::new(0.0, 5.0, 0.0),
            radius: 20.0,
            ..Default::default()
        };
        let material = rough_dielectric();
        let near = point_contribution(&light, Vec3::ZERO, Vec3::Y, Vec3::Y, &material);
        let far_light = PointLight {
            position: Vec3::new(0.0, 15.0, 0.0),
            ..light
        };
        let far = point_contribution(&far_light, Vec3::ZERO, Vec3::Y, Vec3::Y, &material);
        assert!(near.x > far.x);
    }

    #[test]
    fn test_spot_light_outside_cone_contributes_nothing() {
        let light = SpotLight {
            position: Vec3::new(0.0, 10.0, 0.0),
            direction: Vec3::new(0.0, -1.0, 0.0),
            radius: 50.0,
            ..Default::default()
        };
        // Fragment far off-axis, outside the outer cone.
        let c = spot_contribution(
            &light,
            Vec3::new(30.0, 0.0, 0.0),
            Vec3::Y,
            Vec3::Y,
            &rough_dielectric(),
        );
        assert_eq!(c, Vec3::ZERO);
    }

    #[test]
    fn test_spot_light_on_axis_contributes() {
        let light = SpotLight {
            position: Vec3::new(0.0, 10.0, 0.0),
            direction: Vec3::new(0.0, -1.0, 0.0),
            radius: 50.0,
            ..Default::default()
        };
        let c = spot_contribution(&light, Vec3::ZERO, Vec3::Y, Vec3::Y, &rough_dielectric());
        assert!(c.x > 0.0);
    }
}
