use crate::types::{Landmark, Position};

/////////////////////////////////////////////////////////////////////////////////////////////////

/// Maps raw landmark coordinates (input-image pixel space) into scene
/// coordinates: mirrored horizontally, centered at the origin, y-up, scaled.
///
/// The input feed resolution is fixed at setup; the scale constants are
/// configuration, not derived from the image.
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    /// Input frame width in pixels.
    pub width: f32,
    /// Input frame height in pixels.
    pub height: f32,
    /// Horizontal/vertical scale from normalized [-1, 1] to scene units.
    pub scale: f32,
    /// Depth exaggeration applied to the model's relative z.
    pub depth_scale: f32,
}

impl Default for Projector {
    fn default() -> Self {
        Projector {
            width: 640.0,
            height: 480.0,
            scale: 300.0,
            depth_scale: 5.0,
        }
    }
}

impl Projector {
    pub fn new(width: f32, height: f32) -> Self {
        Projector {
            width,
            height,
            ..Projector::default()
        }
    }

    /// Mirrored-and-normalized horizontal coordinate, in [-1, 1] for x in [0, width].
    pub fn normalized_x(&self, x: f32) -> f32 {
        let mirrored_x = self.width - x;
        (mirrored_x - self.width / 2.0) / (self.width / 2.0)
    }

    /// Normalized vertical coordinate; image-down maps to scene-up.
    pub fn normalized_y(&self, y: f32) -> f32 {
        -(y - self.height / 2.0) / (self.height / 2.0)
    }

    /// Project one landmark into scene space.
    pub fn project(&self, lm: &Landmark) -> Position {
        Position::new(
            self.normalized_x(lm.x) * self.scale,
            self.normalized_y(lm.y) * self.scale,
            -lm.z * self.depth_scale,
        )
    }
}

/////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn normalized_x_stays_in_unit_range() {
        let p = Projector::default();
        for x in 0..=640 {
            let nx = p.normalized_x(x as f32);
            assert!((-1.0..=1.0).contains(&nx), "nx({x}) = {nx}");
        }
    }

    #[test]
    fn mirror_symmetry_around_center() {
        let p = Projector::new(640.0, 480.0);
        for x in [0.0, 17.5, 100.0, 320.0, 639.0] {
            assert_relative_eq!(
                p.normalized_x(x),
                -p.normalized_x(p.width - x),
                epsilon = 1e-6
            );
        }
    }

    #[test]
    fn image_down_maps_to_scene_up() {
        let p = Projector::default();
        assert!(p.normalized_y(0.0) > 0.0);
        assert!(p.normalized_y(480.0) < 0.0);
        assert_relative_eq!(p.normalized_y(240.0), 0.0);
    }

    #[test]
    fn projects_center_pixel_to_origin() {
        let p = Projector::default();
        let pos = p.project(&Landmark::new(320.0, 240.0, 0.0));
        assert_relative_eq!(pos.x, 0.0);
        assert_relative_eq!(pos.y, 0.0);
        assert_relative_eq!(pos.z, 0.0);
    }

    #[test]
    fn depth_is_negated_and_exaggerated() {
        let p = Projector::default();
        let pos = p.project(&Landmark::new(320.0, 240.0, 2.0));
        assert_relative_eq!(pos.z, -10.0);
    }

    #[test]
    fn left_edge_lands_mirrored_at_positive_scale() {
        // a point at the image's left edge appears at the scene's right edge
        let p = Projector::default();
        let pos = p.project(&Landmark::new(0.0, 240.0, 0.0));
        assert_relative_eq!(pos.x, p.scale);
    }
}
