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

//! Cascade selection for directional shadow maps.
//!
//! A directional light's shadow frustum is sliced into up to four nested
//! cascades ordered by ascending split depth. Selection computes a view-depth
//! measure for the sample and linearly scans the splits; the fixed cascade
//! count keeps this at most four comparisons, so nothing cleverer than a
//! linear scan is warranted.
//!
//! The view-depth measure projects the sample onto the camera's forward
//! axis (`dot(sample - camera_pos, camera_front) / far_plane`) rather than
//! taking straight-line distance; the two disagree for off-axis samples and
//! this implementation commits to the axis projection.

use ember_core::{Camera, CascadeDescriptor};
use glam::Vec3;

/// Fraction of a cascade's split depth that forms its blend band.
pub const BLEND_BAND_FRACTION: f32 = 0.1;

/// View depth of a sample, normalized by the camera's far plane.
#[inline]
pub fn view_depth(sample_pos: Vec3, camera: &Camera) -> f32 {
    (sample_pos - camera.position).dot(camera.front.normalize()) / camera.far
}

/// Selects the cascade covering `view_depth`: the first cascade whose split
/// depth exceeds it, or the last cascade when none does.
///
/// The comparison is strict, so a depth exactly on a split boundary falls
/// into the next cascade. Returns `None` only for an empty cascade list.
pub fn select_cascade(cascades: &[CascadeDescriptor], view_depth: f32) -> Option<usize> {
    if cascades.is_empty() {
        return None;
    }
    for (i, cascade) in cascades.iter().enumerate() {
        if view_depth < cascade.split_depth {
            return Some(i);
        }
    }
    Some(cascades.len() - 1)
}

/// Blend weight toward the next cascade when `view_depth` sits inside the
/// band just below the selected cascade's split boundary.
///
/// The band spans the top [`BLEND_BAND_FRACTION`] of the split depth; the
/// weight ramps linearly from 0 at the band's start to 1 at the boundary.
/// Returns `None` outside the band or for the last cascade.
pub fn blend_toward_next(
    cascades: &[CascadeDescriptor],
    selected: usize,
    view_depth: f32,
) -> Option<f32> {
    if selected + 1 >= cascades.len() {
        return None;
    }
    let boundary = cascades[selected].split_depth;
    let band = BLEND_BAND_FRACTION * boundary;
    if band <= 0.0 {
        return None;
    }
    let band_start = boundary - band;
    if view_depth <= band_start {
        return None;
    }
    Some(((view_depth - band_start) / band).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Mat4;

    fn cascades(splits: &[f32]) -> Vec<CascadeDescriptor> {
        splits
            .iter()
            .map(|s| CascadeDescriptor {
                light_space: Mat4::IDENTITY,
                split_depth: *s,
            })
            .collect()
    }

    fn camera_at_origin(far: f32) -> Camera {
        Camera::perspective(
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.0, 1.0, 0.0),
            45.0_f32.to_radians(),
            1.0,
            0.1,
            far,
        )
    }

    #[test]
    fn test_view_depth_projects_onto_forward_axis() {
        let camera = camera_at_origin(100.0);
        // Directly ahead at 50 units: depth 0.5.
        let ahead = view_depth(Vec3::new(0.0, 0.0, 50.0), &camera);
        assert!((ahead - 0.5).abs() < 1e-6);
        // Off-axis sample: only the forward component counts.
        let off_axis = view_depth(Vec3::new(40.0, 0.0, 50.0), &camera);
        assert!((off_axis - 0.5).abs() < 1e-6);
        // Behind the camera: negative depth.
        assert!(view_depth(Vec3::new(0.0, 0.0, -10.0), &camera) < 0.0);
    }

    #[test]
    fn test_select_scenario_from_split_table() {
        // Splits [10, 30, 60], depth 45 lands in the third cascade.
        let list = cascades(&[10.0, 30.0, 60.0]);
        assert_eq!(select_cascade(&list, 45.0), Some(2));
    }

    #[test]
    fn test_select_is_monotonic_in_depth() {
        let list = cascades(&[10.0, 30.0, 60.0, 90.0]);
        let mut previous = 0;
        for step in 0..200 {
            let depth = step as f32 * 0.5;
            let index = select_cascade(&list, depth).unwrap();
            assert!(index >= previous, "selection must be non-decreasing");
            previous = index;
        }
    }

    #[test]
    fn test_select_boundary_tie_break() {
        let list = cascades(&[10.0, 30.0, 60.0]);
        let eps = 1e-4;
        // Just below a split: the cascade the split bounds.
        assert_eq!(select_cascade(&list, 10.0 - eps), Some(0));
        assert_eq!(select_cascade(&list, 30.0 - eps), Some(1));
        // Exactly on a split: the strict comparison pushes to the next.
        assert_eq!(select_cascade(&list, 10.0), Some(1));
        assert_eq!(select_cascade(&list, 30.0), Some(2));
        // On or past the final split: clamp to the last cascade.
        assert_eq!(select_cascade(&list, 60.0), Some(2));
        assert_eq!(select_cascade(&list, 1000.0), Some(2));
    }

    #[test]
    fn test_select_empty_list() {
        assert_eq!(select_cascade(&[], 0.5), None);
    }

    #[test]
    fn test_blend_band_edges() {
        let list = cascades(&[10.0, 30.0]);
        // Band for cascade 0 spans [9, 10].
        assert_eq!(blend_toward_next(&list, 0, 8.9), None);
        let mid = blend_toward_next(&list, 0, 9.5).unwrap();
        assert!((mid - 0.5).abs() < 1e-4);
        let near_boundary = blend_toward_next(&list, 0, 9.99).unwrap();
        assert!(near_boundary > 0.9);
        // The last cascade has nothing to blend into.
        assert_eq!(blend_toward_next(&list, 1, 29.5), None);
    }
}
