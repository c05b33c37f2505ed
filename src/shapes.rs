//! Hard-coded geometry.

use glam::Vec3;

use crate::abs::{ColorTexVertex, PositionVertex, TexVertex};

pub const RECTANGLE_POSITIONS: [PositionVertex; 4] = [
    PositionVertex { position: [0.5, 0.5, 0.0] },   // top right
    PositionVertex { position: [0.5, -0.5, 0.0] },  // bottom right
    PositionVertex { position: [-0.5, -0.5, 0.0] }, // bottom left
    PositionVertex { position: [-0.5, 0.5, 0.0] },  // top left
];

/// Two triangles sharing the bottom right to top left diagonal.
pub const RECTANGLE_INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];

/// The rectangle with a color per corner and texture coordinates covering the whole image.
pub fn textured_rectangle() -> [ColorTexVertex; 4] {
    [
        ColorTexVertex {
            position: [0.5, 0.5, 0.0],
            color: [1.0, 0.0, 0.0],
            tex_coords: [1.0, 1.0],
        },
        ColorTexVertex {
            position: [0.5, -0.5, 0.0],
            color: [0.0, 1.0, 0.0],
            tex_coords: [1.0, 0.0],
        },
        ColorTexVertex {
            position: [-0.5, -0.5, 0.0],
            color: [0.0, 0.0, 1.0],
            tex_coords: [0.0, 0.0],
        },
        ColorTexVertex {
            position: [-0.5, 0.5, 0.0],
            color: [1.0, 1.0, 0.0],
            tex_coords: [0.0, 1.0],
        },
    ]
}

/// A unit cube centred on the origin, four vertices per face so each face
/// carries the full texture. Faces wind counter-clockwise seen from outside.
pub fn cube() -> (Vec<TexVertex>, Vec<u32>) {
    // (normal, u axis, v axis) per face
    const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
    ];
    const CORNERS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for (normal, u_axis, v_axis) in FACES {
        let (normal, u_axis, v_axis) = (
            Vec3::from(normal),
            Vec3::from(u_axis),
            Vec3::from(v_axis),
        );
        let base = vertices.len() as u32;
        for [u, v] in CORNERS {
            let position = normal * 0.5 + u_axis * (u - 0.5) + v_axis * (v - 0.5);
            vertices.push(TexVertex {
                position: position.to_array(),
                tex_coords: [u, v],
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }

    (vertices, indices)
}

pub const CUBE_POSITIONS: [Vec3; 10] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(2.0, 5.0, -15.0),
    Vec3::new(-1.5, -2.2, -2.5),
    Vec3::new(-3.8, -2.0, -12.3),
    Vec3::new(2.4, -0.4, -3.5),
    Vec3::new(-1.7, 3.0, -7.5),
    Vec3::new(1.3, -2.0, -2.5),
    Vec3::new(1.5, 2.0, -2.5),
    Vec3::new(1.5, 0.2, -1.5),
    Vec3::new(-1.3, 1.0, -1.5),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangle_indices_stay_in_range() {
        assert!(
            RECTANGLE_INDICES
                .iter()
                .all(|&i| (i as usize) < RECTANGLE_POSITIONS.len())
        );
    }

    #[test]
    fn textured_rectangle_uv_matches_position() {
        for v in textured_rectangle() {
            assert_eq!(v.tex_coords[0], v.position[0] + 0.5);
            assert_eq!(v.tex_coords[1], v.position[1] + 0.5);
        }
    }

    #[test]
    fn cube_has_six_quads() {
        let (vertices, indices) = cube();
        assert_eq!(vertices.len(), 24);
        assert_eq!(indices.len(), 36);
        assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));
    }

    #[test]
    fn cube_vertices_sit_on_the_unit_cube() {
        let (vertices, _) = cube();
        for v in &vertices {
            assert!(v.position.iter().all(|c| (c.abs() - 0.5).abs() < 1e-6));
            assert!(v.tex_coords.iter().all(|c| (0.0..=1.0).contains(c)));
        }
    }

    #[test]
    fn cube_faces_wind_outward() {
        let (vertices, indices) = cube();
        for tri in indices.chunks(3) {
            let [a, b, c] =
                [tri[0], tri[1], tri[2]].map(|i| Vec3::from(vertices[i as usize].position));
            let normal = (b - a).cross(c - a);
            let centre = (a + b + c) / 3.0;
            assert!(normal.dot(centre) > 0.0);
        }
    }
}
