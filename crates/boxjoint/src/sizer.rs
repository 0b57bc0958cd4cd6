//! Tooth dimensions from the face's characteristic edge lengths.

use boxjoint_math::Vec3;

/// Dimensions of the exact-fit tooth plus the cutter clearance.
///
/// Joinery convention: the tooth spans half the long edge, the full short
/// edge, and protrudes by its own thickness. The cutter adds `clearance` to
/// each of the three dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToothSpec {
    /// Extent along the face tangent: half the long edge.
    pub width: f64,
    /// Extent along the binormal: the short edge.
    pub thickness: f64,
    /// Extent along the normal: equal to the thickness.
    pub protrusion: f64,
    /// Absolute enlargement of the cutter per axis.
    pub clearance: f64,
}

impl ToothSpec {
    /// Size a tooth from the long and short edge lengths.
    ///
    /// Pure arithmetic. Lengths are used as given even if `long < short`.
    pub fn size(long_edge: f64, short_edge: f64, clearance: f64) -> Self {
        let thickness = short_edge;
        Self {
            width: long_edge / 2.0,
            thickness,
            protrusion: thickness,
            clearance,
        }
    }

    /// Full extents of the exact-fit tooth `(width, thickness, protrusion)`.
    pub fn exact_extents(&self) -> Vec3 {
        Vec3::new(self.width, self.thickness, self.protrusion)
    }

    /// Full extents of the cutter tooth, each exact extent plus clearance.
    pub fn cutter_extents(&self) -> Vec3 {
        self.exact_extents().add_scalar(self.clearance)
    }

    /// Distance from the face plane to the tooth center along the normal.
    pub fn placement_offset(&self) -> f64 {
        self.protrusion / 2.0
    }
}
