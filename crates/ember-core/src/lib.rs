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

//! # Ember Core
//!
//! Foundational types for the Ember shading core: math and color primitives,
//! the light/camera/material data model, the fixed-capacity per-frame light
//! registry, and the GPU-facing parameter-block layouts.
//!
//! Everything in this crate is a read-only snapshot from the point of view of
//! shading: the host populates these types once per frame and the evaluation
//! crate (`ember-shading`) only ever borrows them immutably.

#![warn(missing_docs)]

pub mod camera;
pub mod gpu;
pub mod lighting;
pub mod material;
pub mod math;

pub use camera::{Camera, CameraPool, MAX_CAMERAS};
pub use lighting::{
    CascadeDescriptor, DirectionalLight, LightRegistry, PointLight, RegistryError, ShadowSettings,
    SpotLight, MAX_CASCADES, MAX_DIRECTIONAL_LIGHTS, MAX_POINT_LIGHTS, MAX_SPOT_LIGHTS,
};
pub use material::Material;
pub use math::LinearRgba;
