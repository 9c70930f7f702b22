use glam::Vec3;

/// Drawable wireframe geometry: a vertex buffer and a list of edges
/// referencing it by index.
///
/// The mesh-loading side of the application owns parsing and hands the
/// widget plain buffers; [`WireMesh`] is the validation boundary. After
/// construction every edge is guaranteed to reference two in-range
/// vertices, so drawing code may index without checks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WireMesh {
    vertices: Vec<Vec3>,
    edges: Vec<[u32; 2]>,
}

impl WireMesh {
    /// Creates a mesh from typed buffers. Edges referencing vertices out
    /// of range are dropped with a warning.
    pub fn new(vertices: Vec<Vec3>, edges: Vec<[u32; 2]>) -> Self {
        let count = vertices.len();
        let before = edges.len();
        let edges: Vec<_> = edges
            .into_iter()
            .filter(|e| (e[0] as usize) < count && (e[1] as usize) < count)
            .collect();
        if edges.len() < before {
            log::warn!(
                "dropped {} edge(s) referencing out-of-range vertices",
                before - edges.len()
            );
        }
        Self { vertices, edges }
    }

    /// Creates a mesh from the flat buffers a model controller typically
    /// exposes: xyz-interleaved vertex components and paired line
    /// indices. Trailing incomplete triples and pairs are ignored.
    pub fn from_buffers(vertex_components: &[f32], line_indices: &[u32]) -> Self {
        let vertices = vertex_components
            .chunks_exact(3)
            .map(|c| Vec3::new(c[0], c[1], c[2]))
            .collect();
        let edges = line_indices.chunks_exact(2).map(|p| [p[0], p[1]]).collect();
        Self::new(vertices, edges)
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn edges(&self) -> &[[u32; 2]] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Axis-aligned bounds of the vertex buffer, or `None` for an empty
    /// mesh.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.vertices.first()?;
        let mut min = first;
        let mut max = first;
        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }
        Some((min, max))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_buffers() {
        let m = WireMesh::from_buffers(
            &[0., 0., 0., 1., 0., 0., 1., 1., 0.],
            &[0, 1, 1, 2, 2, 0],
        );
        assert_eq!(m.vertex_count(), 3);
        assert_eq!(m.edge_count(), 3);
        assert_eq!(m.edges()[1], [1, 2]);
    }

    #[test]
    fn test_from_buffers_ignores_trailing_partials() {
        let m = WireMesh::from_buffers(&[0., 0., 0., 1., 0.], &[0, 0, 0]);
        assert_eq!(m.vertex_count(), 1);
        assert_eq!(m.edge_count(), 1);
    }

    #[test]
    fn test_dangling_edges_dropped() {
        let m = WireMesh::new(vec![Vec3::ZERO, Vec3::X], vec![[0, 1], [1, 2], [7, 0]]);
        assert_eq!(m.edge_count(), 1);
        assert_eq!(m.edges(), &[[0, 1]]);
    }

    #[test]
    fn test_bounds() {
        let m = WireMesh::new(
            vec![Vec3::new(-1., 2., 0.), Vec3::new(3., -4., 5.)],
            vec![[0, 1]],
        );
        let (min, max) = m.bounds().unwrap();
        assert_eq!(min, Vec3::new(-1., -4., 0.));
        assert_eq!(max, Vec3::new(3., 2., 5.));
    }

    #[test]
    fn test_empty_bounds() {
        assert!(WireMesh::default().bounds().is_none());
    }
}
