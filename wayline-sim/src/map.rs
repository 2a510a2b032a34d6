use nalgebra::Vector2;

/// Reflectance of the trace line.
const TRACE_LEVEL: f32 = 0.05;
/// Reflectance of the white guide lines.
const GUIDE_LEVEL: f32 = 0.95;
/// Reflectance of the surrounding field.
const FIELD_LEVEL: f32 = 0.55;

/// Procedural reflectance map.
///
/// A rectangular circuit: one black trace line flanked by a white
/// guide line on either side, all of equal thickness, on a mid-grey
/// field. The stand-in for the reference image a rendering host would
/// sample.
pub struct LineMap {
    half_extent: Vector2<f32>,
    line_width: f32,
}

impl LineMap {
    pub fn new(half_extent: Vector2<f32>, line_width: f32) -> Self {
        Self {
            half_extent,
            line_width,
        }
    }

    /// Reflectance under a world position.
    pub fn reflectance(&self, x: f32, y: f32) -> f32 {
        let distance = self.edge_distance(x, y).abs();
        let half_line = self.line_width / 2.0;

        if distance <= half_line {
            TRACE_LEVEL
        } else if distance <= half_line * 3.0 {
            GUIDE_LEVEL
        } else {
            FIELD_LEVEL
        }
    }

    /// Signed distance to the circuit outline.
    fn edge_distance(&self, x: f32, y: f32) -> f32 {
        let q = Vector2::new(x.abs(), y.abs()) - self.half_extent;
        let outside = Vector2::new(q.x.max(0.0), q.y.max(0.0)).norm();
        let inside = q.x.max(q.y).min(0.0);
        outside + inside
    }
}

impl Default for LineMap {
    fn default() -> Self {
        Self::new(Vector2::new(40.0, 22.0), 1.8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_guides_and_field() {
        let map = LineMap::default();

        // On the circuit outline.
        assert_eq!(map.reflectance(40.0, 0.0), TRACE_LEVEL);
        assert_eq!(map.reflectance(0.0, -22.0), TRACE_LEVEL);

        // In the guide band on either side of the line.
        assert_eq!(map.reflectance(41.5, 0.0), GUIDE_LEVEL);
        assert_eq!(map.reflectance(38.5, 0.0), GUIDE_LEVEL);

        // Far away from the circuit.
        assert_eq!(map.reflectance(0.0, 0.0), FIELD_LEVEL);
        assert_eq!(map.reflectance(60.0, 60.0), FIELD_LEVEL);
    }
}
