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

//! Capability flags selecting which shading features are evaluated.
//!
//! One parameterized implementation replaces the family of near-identical
//! shader variants (with and without cascades, cube shadows, spot lights)
//! that previously drifted apart; hosts pick a feature set once at
//! configuration time.

use serde::{Deserialize, Serialize};

/// Feature toggles for the shading composer, fixed for a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadingFeatures {
    /// Evaluate directional shadows with cascade selection. When disabled,
    /// directional shadows always sample cascade 0 (the legacy
    /// single-matrix behavior).
    pub cascaded_shadows: bool,
    /// Blend shadow factors across the 10% band below each cascade
    /// boundary. When disabled, a visible seam at cascade transitions is
    /// expected behavior.
    pub cascade_blending: bool,
    /// Evaluate point-light cube shadows.
    pub point_shadows: bool,
    /// Evaluate spot-light shadows.
    pub spot_shadows: bool,
}

impl Default for ShadingFeatures {
    fn default() -> Self {
        Self {
            cascaded_shadows: true,
            cascade_blending: true,
            point_shadows: true,
            spot_shadows: true,
        }
    }
}

impl ShadingFeatures {
    /// All features enabled.
    pub const fn full() -> Self {
        Self {
            cascaded_shadows: true,
            cascade_blending: true,
            point_shadows: true,
            spot_shadows: true,
        }
    }

    /// The legacy feature set: single-matrix directional shadows, no cube
    /// or spot shadows, no blending.
    pub const fn legacy() -> Self {
        Self {
            cascaded_shadows: false,
            cascade_blending: false,
            point_shadows: false,
            spot_shadows: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enables_everything() {
        assert_eq!(ShadingFeatures::default(), ShadingFeatures::full());
    }

    #[test]
    fn test_legacy_disables_new_shadow_paths() {
        let features = ShadingFeatures::legacy();
        assert!(!features.point_shadows);
        assert!(!features.spot_shadows);
        assert!(!features.cascade_blending);
    }
}
