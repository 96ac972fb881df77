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

//! The `std140` layout of the per-frame lights uniform block.

use super::flag;
use crate::lighting::{
    CascadeDescriptor, DirectionalLight, LightRegistry, PointLight, SpotLight, MAX_CASCADES,
    MAX_DIRECTIONAL_LIGHTS, MAX_POINT_LIGHTS, MAX_SPOT_LIGHTS,
};

/// Binding slot of the lights uniform block.
pub const LIGHTS_UBO_BINDING: u32 = 1;

/// One cascade descriptor, `std140` element stride 80 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuCascade {
    /// World-to-light-clip transform (column major).
    pub light_space: [[f32; 4]; 4],
    /// Far boundary of the cascade's view-depth range.
    pub split_depth: f32,
    /// Padding to the 16-byte array element stride.
    pub _pad: [f32; 3],
}

impl From<&CascadeDescriptor> for GpuCascade {
    fn from(cascade: &CascadeDescriptor) -> Self {
        Self {
            light_space: cascade.light_space.to_cols_array_2d(),
            split_depth: cascade.split_depth,
            _pad: [0.0; 3],
        }
    }
}

/// A directional light as laid out in the uniform block (384 bytes).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuDirectionalLight {
    /// Direction (xyz), offset 0.
    pub direction: [f32; 3],
    /// Padding to the next vec3 slot.
    pub _pad0: f32,
    /// Color (rgb), offset 16.
    pub color: [f32; 3],
    /// Intensity, offset 28.
    pub intensity: f32,
    /// Cast-shadows flag (scalar bool), offset 32.
    pub cast_shadows: f32,
    /// Padding to the cascade array's 16-byte alignment.
    pub _pad1: [f32; 3],
    /// Cascade descriptors, offset 48.
    pub cascades: [GpuCascade; MAX_CASCADES],
    /// Enabled flag (scalar bool), offset 368.
    pub enabled: f32,
    /// Stable light identifier, offset 372.
    pub light_id: i32,
    /// Live cascade count, offset 376.
    pub num_cascades: i32,
    /// Padding to the struct's 16-byte size multiple.
    pub _pad2: f32,
}

impl From<&DirectionalLight> for GpuDirectionalLight {
    fn from(light: &DirectionalLight) -> Self {
        let mut cascades = [GpuCascade::from(&CascadeDescriptor::default()); MAX_CASCADES];
        for (slot, cascade) in cascades.iter_mut().zip(light.cascades.iter()) {
            *slot = GpuCascade::from(cascade);
        }
        Self {
            direction: light.direction.to_array(),
            _pad0: 0.0,
            color: [light.color.r, light.color.g, light.color.b],
            intensity: light.intensity,
            cast_shadows: flag(light.cast_shadows),
            _pad1: [0.0; 3],
            cascades,
            enabled: flag(light.enabled),
            light_id: light.light_id,
            num_cascades: light.num_cascades.min(MAX_CASCADES) as i32,
            _pad2: 0.0,
        }
    }
}

/// A point light as laid out in the uniform block (64 bytes).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuPointLight {
    /// Position (xyz), offset 0.
    pub position: [f32; 3],
    /// Padding to the next vec3 slot.
    pub _pad0: f32,
    /// Color (rgb), offset 16.
    pub color: [f32; 3],
    /// Intensity, offset 28.
    pub intensity: f32,
    /// Falloff cutoff radius, offset 32.
    pub radius: f32,
    /// Cast-shadows flag (scalar bool), offset 36.
    pub cast_shadows: f32,
    /// Falloff exponent, offset 40.
    pub falloff_exponent: f32,
    /// Enabled flag (scalar bool), offset 44.
    pub enabled: f32,
    /// Stable light identifier, offset 48.
    pub light_id: i32,
    /// Padding to the struct's 16-byte size multiple.
    pub _pad1: [f32; 3],
}

impl From<&PointLight> for GpuPointLight {
    fn from(light: &PointLight) -> Self {
        Self {
            position: light.position.to_array(),
            _pad0: 0.0,
            color: [light.color.r, light.color.g, light.color.b],
            intensity: light.intensity,
            radius: light.radius,
            cast_shadows: flag(light.cast_shadows),
            falloff_exponent: light.falloff_exponent,
            enabled: flag(light.enabled),
            light_id: light.light_id,
            _pad1: [0.0; 3],
        }
    }
}

/// A spot light as laid out in the uniform block (144 bytes).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuSpotLight {
    /// Position (xyz), offset 0.
    pub position: [f32; 3],
    /// Padding to the next vec3 slot.
    pub _pad0: f32,
    /// Direction (xyz), offset 16.
    pub direction: [f32; 3],
    /// Padding to the next vec3 slot.
    pub _pad1: f32,
    /// Color (rgb), offset 32.
    pub color: [f32; 3],
    /// Intensity, offset 44.
    pub intensity: f32,
    /// Inner cone cutoff angle in radians, offset 48.
    pub inner_cutoff: f32,
    /// Outer cone cutoff angle in radians, offset 52.
    pub outer_cutoff: f32,
    /// Falloff cutoff radius, offset 56.
    pub radius: f32,
    /// Cast-shadows flag (scalar bool), offset 60.
    pub cast_shadows: f32,
    /// World-to-light-clip transform, offset 64.
    pub light_space: [[f32; 4]; 4],
    /// Enabled flag (scalar bool), offset 128.
    pub enabled: f32,
    /// Stable light identifier, offset 132.
    pub light_id: i32,
    /// Padding to the struct's 16-byte size multiple.
    pub _pad2: [f32; 2],
}

impl From<&SpotLight> for GpuSpotLight {
    fn from(light: &SpotLight) -> Self {
        Self {
            position: light.position.to_array(),
            _pad0: 0.0,
            direction: light.direction.to_array(),
            _pad1: 0.0,
            color: [light.color.r, light.color.g, light.color.b],
            intensity: light.intensity,
            inner_cutoff: light.inner_cutoff,
            outer_cutoff: light.outer_cutoff,
            radius: light.radius,
            cast_shadows: flag(light.cast_shadows),
            light_space: light.light_space.to_cols_array_2d(),
            enabled: flag(light.enabled),
            light_id: light.light_id,
            _pad2: [0.0; 2],
        }
    }
}

/// The whole lights uniform block (3248 bytes), binding slot 1.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuLightRegistry {
    /// Directional light slots, offset 0.
    pub directional_lights: [GpuDirectionalLight; MAX_DIRECTIONAL_LIGHTS],
    /// Point light slots, offset 1536.
    pub point_lights: [GpuPointLight; MAX_POINT_LIGHTS],
    /// Spot light slots, offset 2048.
    pub spot_lights: [GpuSpotLight; MAX_SPOT_LIGHTS],
    /// Ambient color (rgb), offset 3200.
    pub ambient_color: [f32; 3],
    /// Ambient intensity, offset 3212.
    pub ambient_intensity: f32,
    /// Live directional count, offset 3216.
    pub num_directional_lights: i32,
    /// Live point count, offset 3220.
    pub num_point_lights: i32,
    /// Live spot count, offset 3224.
    pub num_spot_lights: i32,
    /// Global shadow depth bias, offset 3228.
    pub shadow_bias: f32,
    /// PCF kernel radius in texels, offset 3232.
    pub pcf_kernel_radius: i32,
    /// Shadow intensity multiplier, offset 3236.
    pub shadow_intensity: f32,
    /// Padding to the block's 16-byte size multiple.
    pub _pad: [f32; 2],
}

impl From<&LightRegistry> for GpuLightRegistry {
    fn from(registry: &LightRegistry) -> Self {
        let mut block = Self::zeroed();
        for (slot, light) in block
            .directional_lights
            .iter_mut()
            .zip(registry.directional_lights())
        {
            *slot = GpuDirectionalLight::from(light);
        }
        for (slot, light) in block.point_lights.iter_mut().zip(registry.point_lights()) {
            *slot = GpuPointLight::from(light);
        }
        for (slot, light) in block.spot_lights.iter_mut().zip(registry.spot_lights()) {
            *slot = GpuSpotLight::from(light);
        }
        block.ambient_color = [
            registry.ambient_color.r,
            registry.ambient_color.g,
            registry.ambient_color.b,
        ];
        block.ambient_intensity = registry.ambient_intensity;
        block.num_directional_lights = registry.num_directional() as i32;
        block.num_point_lights = registry.num_point() as i32;
        block.num_spot_lights = registry.num_spot() as i32;
        block.shadow_bias = registry.shadow.bias;
        block.pcf_kernel_radius = registry.shadow.pcf_kernel_radius;
        block.shadow_intensity = registry.shadow.intensity;
        block
    }
}

impl GpuLightRegistry {
    /// A zero-initialized block: no lights, no ambient, no shadows.
    pub fn zeroed() -> Self {
        bytemuck::Zeroable::zeroed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpu::flag_is_set;
    use std::mem::{offset_of, size_of};

    #[test]
    fn test_cascade_layout() {
        assert_eq!(size_of::<GpuCascade>(), 80);
        assert_eq!(offset_of!(GpuCascade, split_depth), 64);
    }

    #[test]
    fn test_directional_layout() {
        assert_eq!(size_of::<GpuDirectionalLight>(), 384);
        assert_eq!(offset_of!(GpuDirectionalLight, color), 16);
        assert_eq!(offset_of!(GpuDirectionalLight, intensity), 28);
        assert_eq!(offset_of!(GpuDirectionalLight, cast_shadows), 32);
        assert_eq!(offset_of!(GpuDirectionalLight, cascades), 48);
        assert_eq!(offset_of!(GpuDirectionalLight, enabled), 368);
        assert_eq!(offset_of!(GpuDirectionalLight, light_id), 372);
        assert_eq!(offset_of!(GpuDirectionalLight, num_cascades), 376);
    }

    #[test]
    fn test_point_layout() {
        assert_eq!(size_of::<GpuPointLight>(), 64);
        assert_eq!(offset_of!(GpuPointLight, color), 16);
        assert_eq!(offset_of!(GpuPointLight, radius), 32);
        assert_eq!(offset_of!(GpuPointLight, falloff_exponent), 40);
        assert_eq!(offset_of!(GpuPointLight, light_id), 48);
    }

    #[test]
    fn test_spot_layout() {
        assert_eq!(size_of::<GpuSpotLight>(), 144);
        assert_eq!(offset_of!(GpuSpotLight, direction), 16);
        assert_eq!(offset_of!(GpuSpotLight, color), 32);
        assert_eq!(offset_of!(GpuSpotLight, intensity), 44);
        assert_eq!(offset_of!(GpuSpotLight, light_space), 64);
        assert_eq!(offset_of!(GpuSpotLight, enabled), 128);
    }

    #[test]
    fn test_registry_block_layout() {
        assert_eq!(size_of::<GpuLightRegistry>(), 3248);
        assert_eq!(offset_of!(GpuLightRegistry, point_lights), 1536);
        assert_eq!(offset_of!(GpuLightRegistry, spot_lights), 2048);
        assert_eq!(offset_of!(GpuLightRegistry, ambient_color), 3200);
        assert_eq!(offset_of!(GpuLightRegistry, num_directional_lights), 3216);
        assert_eq!(offset_of!(GpuLightRegistry, shadow_intensity), 3236);
    }

    #[test]
    fn test_encode_from_registry() {
        let mut registry = LightRegistry::new();
        registry
            .push_point(PointLight {
                light_id: 5,
                radius: 12.0,
                cast_shadows: true,
                ..Default::default()
            })
            .unwrap();
        let block = GpuLightRegistry::from(&registry);
        assert_eq!(block.num_point_lights, 1);
        assert_eq!(block.num_directional_lights, 0);
        assert_eq!(block.point_lights[0].light_id, 5);
        assert!(flag_is_set(block.point_lights[0].cast_shadows));
        assert!(flag_is_set(block.point_lights[0].enabled));
        // Untouched slots stay zeroed (disabled).
        assert!(!flag_is_set(block.point_lights[1].enabled));
    }
}
