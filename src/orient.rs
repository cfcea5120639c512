use cgmath::{InnerSpace, One, Rad, Rotation3, Vector3};

use crate::types::{Position, Quaternion};

/// Reference long axis of the unscaled bone-segment shape.
pub const BONE_AXIS: Vector3<f32> = Vector3::new(0.0, 1.0, 0.0);

/////////////////////////////////////////////////////////////////////////////////////////////////

/// Transform of one bone-segment visual so that it connects two joints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoneTransform {
    /// Midpoint between the two joints.
    pub position: Position,
    /// Scale along the segment's long axis. The reference shape has unit
    /// length and is placed from its center, hence half the joint distance.
    pub half_length: f32,
    /// Shortest-arc rotation mapping [`BONE_AXIS`] onto the joint-to-joint direction.
    pub rotation: Quaternion,
}

/// Compute position, length-scale and rotation for the segment between
/// joint positions `start` and `end`.
pub fn orient_bone(start: Position, end: Position) -> BoneTransform {
    let offset = end - start;
    let distance = offset.magnitude();

    let rotation = if distance > 0.0 {
        rotation_between(BONE_AXIS, offset / distance)
    } else {
        // coincident joints leave no direction to align with
        Quaternion::one()
    };

    BoneTransform {
        position: start + offset / 2.0,
        half_length: distance / 2.0,
        rotation,
    }
}

/////////////////////////////////////////////////////////////////////////////////////////////////

/// Shortest-arc rotation mapping unit vector `from` onto unit vector `to`
/// (axis = normalized cross product, angle = acos of the dot product).
pub fn rotation_between(from: Vector3<f32>, to: Vector3<f32>) -> Quaternion {
    let dot = from.dot(to);
    if dot > 0.9999 {
        // parallel
        return Quaternion::one();
    }
    if dot < -0.9999 {
        // anti-parallel: half turn about any axis perpendicular to `from`
        return Quaternion::from_axis_angle(any_perpendicular(from), Rad(std::f32::consts::PI));
    }
    let axis = from.cross(to).normalize();
    Quaternion::from_axis_angle(axis, Rad(dot.acos()))
}

/// Unit vector perpendicular to `v`. Crosses with X, falling back to Z when
/// `v` is (nearly) collinear with X.
fn any_perpendicular(v: Vector3<f32>) -> Vector3<f32> {
    let candidate = v.cross(Vector3::unit_x());
    if candidate.magnitude2() > 1e-6 {
        candidate.normalize()
    } else {
        v.cross(Vector3::unit_z()).normalize()
    }
}

/////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cgmath::Rotation;

    #[test]
    fn bone_along_reference_axis_needs_no_rotation() {
        let t = orient_bone(Position::new(0.0, 0.0, 0.0), Position::new(0.0, 10.0, 0.0));
        assert_relative_eq!(t.position.x, 0.0);
        assert_relative_eq!(t.position.y, 5.0);
        assert_relative_eq!(t.position.z, 0.0);
        assert_relative_eq!(t.half_length, 5.0);
        let rotated = t.rotation.rotate_vector(BONE_AXIS);
        assert_relative_eq!(rotated.y, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn anti_parallel_bone_gets_a_valid_half_turn() {
        let t = orient_bone(Position::new(0.0, 0.0, 0.0), Position::new(0.0, -10.0, 0.0));
        let rotated = t.rotation.rotate_vector(BONE_AXIS);
        assert_relative_eq!(rotated.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(rotated.y, -1.0, epsilon = 1e-5);
        assert_relative_eq!(rotated.z, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn rotation_maps_axis_onto_bone_direction() {
        let start = Position::new(1.0, 2.0, 3.0);
        let end = Position::new(-2.0, 0.5, 7.0);
        let t = orient_bone(start, end);
        let dir = (end - start).normalize();
        let rotated = t.rotation.rotate_vector(BONE_AXIS);
        assert_relative_eq!(rotated.x, dir.x, epsilon = 1e-5);
        assert_relative_eq!(rotated.y, dir.y, epsilon = 1e-5);
        assert_relative_eq!(rotated.z, dir.z, epsilon = 1e-5);
    }

    #[test]
    fn midpoint_and_half_length() {
        let t = orient_bone(Position::new(2.0, 0.0, 0.0), Position::new(6.0, 0.0, 0.0));
        assert_relative_eq!(t.position.x, 4.0);
        assert_relative_eq!(t.half_length, 2.0);
    }

    #[test]
    fn zero_length_bone_is_identity() {
        let p = Position::new(1.0, 1.0, 1.0);
        let t = orient_bone(p, p);
        assert_relative_eq!(t.half_length, 0.0);
        assert_eq!(t.rotation, Quaternion::one());
    }

    #[test]
    fn perpendicular_helper_is_perpendicular() {
        for v in [Vector3::unit_x(), Vector3::unit_y(), Vector3::new(0.3, -0.9, 0.1).normalize()] {
            let p = any_perpendicular(v);
            assert_relative_eq!(v.dot(p), 0.0, epsilon = 1e-5);
            assert_relative_eq!(p.magnitude(), 1.0, epsilon = 1e-5);
        }
    }
}
