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

//! The explicit layout of the camera-pool uniform block.

use super::flag;
use crate::camera::{Camera, CameraPool, MAX_CAMERAS};

/// Binding slot of the cameras uniform block.
pub const CAMERAS_UBO_BINDING: u32 = 0;

/// One camera slot as laid out in the uniform block (192 bytes).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuCamera {
    /// Viewer position (xyz), offset 0.
    pub position: [f32; 3],
    /// Padding to the next vec3 slot.
    pub _pad0: f32,
    /// Forward direction (xyz), offset 16.
    pub front: [f32; 3],
    /// Padding to the next vec3 slot.
    pub _pad1: f32,
    /// Up direction (xyz), offset 32.
    pub up: [f32; 3],
    /// Vertical field of view in radians, offset 44.
    pub fov: f32,
    /// Viewport aspect ratio, offset 48.
    pub aspect_ratio: f32,
    /// Near plane distance, offset 52.
    pub near_plane: f32,
    /// Far plane distance, offset 56.
    pub far_plane: f32,
    /// Enabled flag (scalar bool), offset 60.
    pub enabled: f32,
    /// World-to-view transform, offset 64.
    pub view: [[f32; 4]; 4],
    /// View-to-clip transform, offset 128.
    pub projection: [[f32; 4]; 4],
}

impl From<&Camera> for GpuCamera {
    fn from(camera: &Camera) -> Self {
        Self {
            position: camera.position.to_array(),
            _pad0: 0.0,
            front: camera.front.to_array(),
            _pad1: 0.0,
            up: camera.up.to_array(),
            fov: camera.fov_y,
            aspect_ratio: camera.aspect_ratio,
            near_plane: camera.near,
            far_plane: camera.far,
            enabled: flag(camera.enabled),
            view: camera.view.to_cols_array_2d(),
            projection: camera.projection.to_cols_array_2d(),
        }
    }
}

/// The whole camera-pool uniform block (784 bytes).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuCameraPool {
    /// The fixed camera slots, offset 0.
    pub cameras: [GpuCamera; MAX_CAMERAS],
    /// Index of the active camera, offset 768.
    pub active_camera_index: i32,
    /// Padding to the block's declared size.
    pub _pad: [f32; 3],
}

impl From<&CameraPool> for GpuCameraPool {
    fn from(pool: &CameraPool) -> Self {
        let mut cameras = [GpuCamera::from(&Camera::default()); MAX_CAMERAS];
        for (slot, camera) in cameras.iter_mut().zip(pool.cameras.iter()) {
            *slot = GpuCamera::from(camera);
        }
        Self {
            cameras,
            active_camera_index: pool.active_index.min(MAX_CAMERAS - 1) as i32,
            _pad: [0.0; 3],
        }
    }
}
