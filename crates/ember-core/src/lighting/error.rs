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

//! Error types for light-registry population.
//!
//! These errors exist only at registry-population time. Per-sample
//! evaluation never produces errors: every fault path there degrades to a
//! neutral value (zero shadow, zero contribution).

use std::fmt;

/// The light category a registry operation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightCategory {
    /// Directional (sun-like) lights.
    Directional,
    /// Point (omni) lights.
    Point,
    /// Spot (cone) lights.
    Spot,
}

impl fmt::Display for LightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LightCategory::Directional => write!(f, "directional"),
            LightCategory::Point => write!(f, "point"),
            LightCategory::Spot => write!(f, "spot"),
        }
    }
}

/// An error produced while populating a [`crate::LightRegistry`].
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// The fixed-capacity array for a light category is already full.
    CapacityExceeded {
        /// The category whose array overflowed.
        category: LightCategory,
        /// The capacity of that array.
        capacity: usize,
    },
    /// A directional light's cascade split depths are not strictly ascending.
    CascadeOrder {
        /// The offending light's identifier.
        light_id: i32,
        /// The cascade index whose split is not greater than its predecessor.
        cascade_index: usize,
    },
    /// A directional light declares more cascades than the fixed maximum.
    TooManyCascades {
        /// The offending light's identifier.
        light_id: i32,
        /// The declared cascade count.
        declared: usize,
    },
    /// A point or spot light's radius is not strictly positive.
    NonPositiveRadius {
        /// The category of the offending light.
        category: LightCategory,
        /// The offending light's identifier.
        light_id: i32,
    },
    /// A spot light's inner cutoff angle exceeds its outer cutoff angle.
    InvalidCone {
        /// The offending light's identifier.
        light_id: i32,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::CapacityExceeded { category, capacity } => {
                write!(
                    f,
                    "cannot add another {category} light: registry holds at most {capacity}"
                )
            }
            RegistryError::CascadeOrder {
                light_id,
                cascade_index,
            } => {
                write!(
                    f,
                    "directional light {light_id}: cascade {cascade_index} split depth \
                     must be greater than the previous split"
                )
            }
            RegistryError::TooManyCascades { light_id, declared } => {
                write!(
                    f,
                    "directional light {light_id}: declares {declared} cascades, \
                     maximum is {}",
                    crate::MAX_CASCADES
                )
            }
            RegistryError::NonPositiveRadius { category, light_id } => {
                write!(f, "{category} light {light_id}: radius must be > 0")
            }
            RegistryError::InvalidCone { light_id } => {
                write!(
                    f,
                    "spot light {light_id}: inner cutoff must not exceed outer cutoff"
                )
            }
        }
    }
}

impl std::error::Error for RegistryError {}
