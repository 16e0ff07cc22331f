use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// A point on the marker path. Path space: x/y planar, z is height.
pub type Waypoint = Vec3;

/// One positioned box primitive of a generated illusion
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub position: Vec3,
    /// Euler angles in radians, applied in XYZ order
    pub rotation: Vec3,
    pub dimensions: Vec3,
    pub color: [f32; 3],
}

impl Placement {
    pub fn new(position: Vec3, rotation: Vec3, dimensions: Vec3, color: [f32; 3]) -> Self {
        Self {
            position,
            rotation,
            dimensions,
            color,
        }
    }

    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    /// Model matrix mapping a unit cube centered at the origin onto this placement
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.dimensions, self.orientation(), self.position)
    }

    pub fn to_instance(&self) -> PlacementInstance {
        PlacementInstance {
            model: self.model_matrix().to_cols_array_2d(),
            color: self.color,
            _pad: 0.0,
        }
    }
}

/// Per-instance data for GPU upload
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PlacementInstance {
    pub model: [[f32; 4]; 4], // Column-major
    pub color: [f32; 3],
    pub _pad: f32,
}

/// Packs a placement sequence into an instance buffer, preserving order
pub fn to_instances(placements: &[Placement]) -> Vec<PlacementInstance> {
    placements.iter().map(Placement::to_instance).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<PlacementInstance>(), 80);
    }

    #[test]
    fn test_model_matrix_translation() {
        let p = Placement::new(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::ZERO,
            Vec3::new(2.0, 1.0, 1.0),
            [1.0, 0.0, 0.0],
        );
        let m = p.model_matrix();
        assert_eq!(m.transform_point3(Vec3::ZERO), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(m.transform_point3(Vec3::new(0.5, 0.0, 0.0)), Vec3::new(2.0, 2.0, 3.0));
    }

    #[test]
    fn test_instance_bytes() {
        let p = Placement::new(Vec3::ZERO, Vec3::ZERO, Vec3::ONE, [0.2, 0.4, 0.6]);
        let instances = to_instances(&[p, p]);
        let bytes: &[u8] = bytemuck::cast_slice(&instances);
        assert_eq!(bytes.len(), 160);
        assert_eq!(instances[0].color, [0.2, 0.4, 0.6]);
        assert_eq!(instances[0].model[3], [0.0, 0.0, 0.0, 1.0]);
    }
}
