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

//! GPU-facing parameter blocks with explicit `std140` layouts.
//!
//! These structs are the wire format between the host renderer and the
//! shading programs: field order, padding, and total size must match the
//! `std140` uniform blocks bit-for-bit, which is why every struct spells out
//! its padding fields and carries layout tests.
//!
//! Boolean state crosses this boundary as threshold-compared scalars: a flag
//! is considered set when its value is `>= 0.5`. The CPU model types use
//! plain `bool`s; the conversion happens only here.

pub mod camera;
pub mod lights;
pub mod material;

pub use camera::{GpuCamera, GpuCameraPool, CAMERAS_UBO_BINDING};
pub use lights::{
    GpuCascade, GpuDirectionalLight, GpuLightRegistry, GpuPointLight, GpuSpotLight,
    LIGHTS_UBO_BINDING,
};
pub use material::{GpuMaterial, GpuMaterialBlock, MATERIAL_UBO_BINDING};

/// Encodes a `bool` as a threshold-compared scalar flag.
#[inline]
pub fn flag(value: bool) -> f32 {
    if value {
        1.0
    } else {
        0.0
    }
}

/// Decodes a threshold-compared scalar flag (set when `>= 0.5`).
#[inline]
pub fn flag_is_set(value: f32) -> bool {
    value >= 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_round_trip() {
        assert!(flag_is_set(flag(true)));
        assert!(!flag_is_set(flag(false)));
    }

    #[test]
    fn test_flag_threshold() {
        assert!(flag_is_set(0.5));
        assert!(flag_is_set(0.7));
        assert!(!flag_is_set(0.49));
        assert!(!flag_is_set(-1.0));
    }
}
