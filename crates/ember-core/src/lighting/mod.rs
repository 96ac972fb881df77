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

//! The light data model and the fixed-capacity per-frame registry.

pub mod error;
pub mod light;
pub mod registry;

pub use error::{LightCategory, RegistryError};
pub use light::{
    CascadeDescriptor, DirectionalLight, PointLight, SpotLight, MAX_CASCADES,
};
pub use registry::{
    LightRegistry, ShadowSettings, MAX_DIRECTIONAL_LIGHTS, MAX_POINT_LIGHTS, MAX_SPOT_LIGHTS,
};
