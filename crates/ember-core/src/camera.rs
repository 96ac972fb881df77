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

//! Camera state consumed by shading.
//!
//! Shading reads cameras, it never drives them: the host owns view and
//! projection assembly and hands over a per-frame snapshot. The cascade
//! selector uses `position`, `front`, and `far`; the shadow sampler uses
//! `position` for its distance-adaptive kernel.

use glam::{Mat4, Vec3};

/// Maximum number of cameras in a frame's camera pool.
pub const MAX_CAMERAS: usize = 4;

/// A read-only camera snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// World-space position of the viewer.
    pub position: Vec3,
    /// Forward direction of the viewer (normalized).
    pub front: Vec3,
    /// Up direction of the viewer (normalized).
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect_ratio: f32,
    /// Distance to the near clipping plane.
    pub near: f32,
    /// Distance to the far clipping plane. Cascade split depths are
    /// normalized against this value.
    pub far: f32,
    /// World-to-view transform.
    pub view: Mat4,
    /// View-to-clip transform.
    pub projection: Mat4,
    /// View-to-world transform (inverse of `view`).
    pub inverse_view: Mat4,
    /// Whether this pool slot holds a live camera.
    pub enabled: bool,
}

impl Camera {
    /// Creates a perspective camera, deriving the view, projection, and
    /// inverse-view matrices from the given pose.
    pub fn perspective(
        position: Vec3,
        front: Vec3,
        up: Vec3,
        fov_y: f32,
        aspect_ratio: f32,
        near: f32,
        far: f32,
    ) -> Self {
        let front = front.normalize();
        let view = Mat4::look_to_rh(position, front, up);
        let projection = Mat4::perspective_rh(fov_y, aspect_ratio, near, far);
        Self {
            position,
            front,
            up,
            fov_y,
            aspect_ratio,
            near,
            far,
            view,
            projection,
            inverse_view: view.inverse(),
            enabled: true,
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::perspective(
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.0, 1.0, 0.0),
            45.0_f32.to_radians(),
            16.0 / 9.0,
            0.1,
            200.0,
        )
    }
}

/// A small fixed pool of cameras with one active slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPool {
    /// The camera slots; slots past the ones the host filled keep their
    /// defaults with `enabled = false`.
    pub cameras: [Camera; MAX_CAMERAS],
    /// Index of the camera driving this frame's evaluation.
    pub active_index: usize,
}

impl CameraPool {
    /// Creates a pool with `camera` in slot 0 as the active camera.
    pub fn with_active(camera: Camera) -> Self {
        let mut disabled = Camera::default();
        disabled.enabled = false;
        let mut cameras = [disabled; MAX_CAMERAS];
        cameras[0] = camera;
        Self {
            cameras,
            active_index: 0,
        }
    }

    /// The active camera. An out-of-range index is a host configuration
    /// error and falls back to slot 0.
    pub fn active(&self) -> &Camera {
        if self.active_index < MAX_CAMERAS {
            &self.cameras[self.active_index]
        } else {
            &self.cameras[0]
        }
    }
}

impl Default for CameraPool {
    fn default() -> Self {
        Self::with_active(Camera::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::approx_eq;

    #[test]
    fn test_perspective_derives_inverse_view() {
        let camera = Camera::perspective(
            Vec3::new(0.0, 2.0, -5.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.0, 1.0, 0.0),
            60.0_f32.to_radians(),
            16.0 / 9.0,
            0.1,
            100.0,
        );
        let round_trip = camera.view * camera.inverse_view;
        for (a, b) in round_trip
            .to_cols_array()
            .iter()
            .zip(Mat4::IDENTITY.to_cols_array().iter())
        {
            assert!(approx_eq(*a, *b));
        }
    }

    #[test]
    fn test_front_is_normalized() {
        let camera = Camera::perspective(
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::new(0.0, 1.0, 0.0),
            45.0_f32.to_radians(),
            1.0,
            0.1,
            50.0,
        );
        assert!(approx_eq(camera.front.length(), 1.0));
    }

    #[test]
    fn test_pool_active_fallback() {
        let mut pool = CameraPool::default();
        pool.active_index = MAX_CAMERAS + 2;
        // Out-of-range index falls back to slot 0 instead of panicking.
        assert_eq!(pool.active().position, pool.cameras[0].position);
    }
}
