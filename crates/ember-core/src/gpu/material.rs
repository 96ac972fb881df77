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

//! The `std140` layout of the material uniform block.

use crate::material::Material;

/// Binding slot of the material uniform block.
pub const MATERIAL_UBO_BINDING: u32 = 2;

/// The PBR material parameters as laid out in the uniform block (32 bytes).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuMaterial {
    /// Albedo (rgb), offset 0.
    pub albedo: [f32; 3],
    /// Metalness, offset 12.
    pub metallic: f32,
    /// Roughness, offset 16.
    pub roughness: f32,
    /// Ambient occlusion, offset 20.
    pub ao: f32,
    /// Opacity, offset 24.
    pub alpha: f32,
    /// Padding to the struct's 16-byte size multiple.
    pub _pad: f32,
}

impl From<&Material> for GpuMaterial {
    fn from(material: &Material) -> Self {
        Self {
            albedo: material.albedo.to_array(),
            metallic: material.metallic,
            roughness: material.roughness,
            ao: material.ao,
            alpha: material.alpha,
            _pad: 0.0,
        }
    }
}

/// The whole material uniform block (64 bytes), binding slot 2.
///
/// The `use_*` toggles tell the shading program which parameters come from
/// texture maps rather than the constant block; texture resolution itself is
/// outside this core, so encoding from a [`Material`] leaves them unset.
/// Each toggle is a 4-byte bool as `std140` requires.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuMaterialBlock {
    /// The material parameters, offset 0.
    pub material: GpuMaterial,
    /// Whether albedo comes from a texture map, offset 32.
    pub use_albedo_map: u32,
    /// Whether the normal comes from a texture map, offset 36.
    pub use_normal_map: u32,
    /// Whether metalness comes from a texture map, offset 40.
    pub use_metallic_map: u32,
    /// Whether roughness comes from a texture map, offset 44.
    pub use_roughness_map: u32,
    /// Whether ambient occlusion comes from a texture map, offset 48.
    pub use_ao_map: u32,
    /// Whether the view direction is recomputed per pixel, offset 52.
    pub per_pixel_view_dir: u32,
    /// Padding to the block's 16-byte size multiple.
    pub _pad: [u32; 2],
}

impl From<&Material> for GpuMaterialBlock {
    fn from(material: &Material) -> Self {
        Self {
            material: GpuMaterial::from(material),
            use_albedo_map: 0,
            use_normal_map: 0,
            use_metallic_map: 0,
            use_roughness_map: 0,
            use_ao_map: 0,
            per_pixel_view_dir: 1,
            _pad: [0; 2],
        }
    }
}
