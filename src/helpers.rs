use glam::Vec3;

use crate::mesh::WireMesh;

/// Axis-aligned cube centered on the origin: 8 vertices, 12 edges.
pub fn sample_cube(side: f32) -> WireMesh {
    let h = side / 2.;
    let vertices = vec![
        Vec3::new(-h, -h, -h),
        Vec3::new(h, -h, -h),
        Vec3::new(h, h, -h),
        Vec3::new(-h, h, -h),
        Vec3::new(-h, -h, h),
        Vec3::new(h, -h, h),
        Vec3::new(h, h, h),
        Vec3::new(-h, h, h),
    ];
    let edges = vec![
        // back face
        [0, 1],
        [1, 2],
        [2, 3],
        [3, 0],
        // front face
        [4, 5],
        [5, 6],
        [6, 7],
        [7, 4],
        // connecting edges
        [0, 4],
        [1, 5],
        [2, 6],
        [3, 7],
    ];
    WireMesh::new(vertices, edges)
}

/// Square-based pyramid centered on the origin: 5 vertices, 8 edges.
pub fn sample_pyramid(side: f32) -> WireMesh {
    let h = side / 2.;
    let vertices = vec![
        Vec3::new(-h, -h, -h),
        Vec3::new(h, -h, -h),
        Vec3::new(h, -h, h),
        Vec3::new(-h, -h, h),
        Vec3::new(0., h, 0.),
    ];
    let edges = vec![
        [0, 1],
        [1, 2],
        [2, 3],
        [3, 0],
        [0, 4],
        [1, 4],
        [2, 4],
        [3, 4],
    ];
    WireMesh::new(vertices, edges)
}
