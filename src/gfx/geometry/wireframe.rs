//! Wireframe cube layout and the struts that thicken its edges

use cgmath::{InnerSpace, MetricSpace, Quaternion, Rotation, Vector3};

/// Corners of a cube spanning -1..1 on every axis
pub const WIRE_CUBE_VERTICES: [[f32; 3]; 8] = [
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
];

/// Index pairs, one per edge
#[rustfmt::skip]
pub const WIRE_CUBE_EDGES: [u32; 24] = [
    0, 1, 1, 2, 2, 3, 3, 0, // front
    4, 5, 5, 6, 6, 7, 7, 4, // back
    0, 4, 1, 5, 2, 6, 3, 7, // connecting
];

/// A box stretched along one edge: local +Z points from the edge's start to its end
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeStrut {
    pub center: Vector3<f32>,
    pub rotation: Quaternion<f32>,
    pub length: f32,
}

/// Places one strut per index pair
///
/// Pairs referring to vertices that don't exist and degenerate (zero length)
/// edges are skipped. A trailing unpaired index is ignored.
pub fn edge_struts(vertices: &[[f32; 3]], indices: &[u32]) -> Vec<EdgeStrut> {
    indices
        .chunks_exact(2)
        .filter_map(|pair| {
            let p1: Vector3<f32> = (*vertices.get(pair[0] as usize)?).into();
            let p2: Vector3<f32> = (*vertices.get(pair[1] as usize)?).into();

            let length = p1.distance(p2);
            if length <= f32::EPSILON {
                return None;
            }

            let direction = p2 - p1;
            Some(EdgeStrut {
                center: p1 + direction * 0.5,
                rotation: Quaternion::between_vectors(Vector3::unit_z(), direction.normalize()),
                length,
            })
        })
        .collect()
}

/// Line segments for the given index pairs, for engines drawing a line system
pub fn edge_lines(vertices: &[[f32; 3]], indices: &[u32]) -> Vec<[[f32; 3]; 2]> {
    indices
        .chunks_exact(2)
        .filter_map(|pair| {
            Some([
                *vertices.get(pair[0] as usize)?,
                *vertices.get(pair[1] as usize)?,
            ])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_has_twelve_struts_of_length_two() {
        let struts = edge_struts(&WIRE_CUBE_VERTICES, &WIRE_CUBE_EDGES);
        assert_eq!(struts.len(), 12);
        for strut in &struts {
            assert!((strut.length - 2.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_strut_is_centered_and_oriented_along_edge() {
        // Edge 1 -> 2 runs along +Y at x = 1, z = -1
        let struts = edge_struts(&WIRE_CUBE_VERTICES, &[1, 2]);
        let strut = struts[0];
        assert!((strut.center - Vector3::new(1.0, 0.0, -1.0)).magnitude() < 1e-6);

        let forward = strut.rotation.rotate_vector(Vector3::unit_z());
        assert!((forward - Vector3::unit_y()).magnitude() < 1e-5);
    }

    #[test]
    fn test_invalid_and_degenerate_pairs_are_skipped() {
        let struts = edge_struts(&WIRE_CUBE_VERTICES, &[0, 0, 0, 42, 3, 7, 5]);
        assert_eq!(struts.len(), 1);
        assert_eq!(edge_lines(&WIRE_CUBE_VERTICES, &[0, 42, 4, 5]).len(), 1);
    }
}
