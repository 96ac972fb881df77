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

//! # Ember Shading
//!
//! The per-sample lighting and shadow evaluation core: given a surface
//! point, its material, and a per-frame light registry, this crate
//! determines how much each light illuminates the point, whether it is
//! shadowed, and composites the result into an output color.
//!
//! Evaluation is pure and data-parallel: every entry point takes its inputs
//! by shared reference and touches no global state, so one frame snapshot
//! can be shaded from any number of threads. There is deliberately no error
//! channel at this layer; every fault path (out-of-frustum coordinates,
//! stale light references, out-of-range distances) degrades to a neutral
//! value instead.
//!
//! The crate is organized after the evaluation pipeline:
//! [`atlas`] resolves shadow-atlas layers, [`cascade`] picks a directional
//! light's shadow slice, [`shadow`] performs the adaptive PCF sampling,
//! [`brdf`] evaluates Cook-Torrance reflectance per light, and [`composer`]
//! ties it all together into a final color.

#![warn(missing_docs)]

pub mod atlas;
pub mod brdf;
pub mod cascade;
pub mod composer;
pub mod config;
pub mod shadow;

pub use atlas::{DepthAtlas2d, DepthAtlasCube};
pub use composer::{shade, ShadingContext};
pub use config::ShadingFeatures;
