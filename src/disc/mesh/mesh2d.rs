use hashbrown::HashMap;
use nalgebra::Point2;
use tracing::debug;

use super::MeshGeometry;
use crate::disc::geometric::Geometric2D;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    pub x: f64,
    pub y: f64,
}
#[derive(Clone, Debug)]
pub struct Edge {
    pub inodes: [usize; 2],
    pub parents: Vec<usize>,
}
#[derive(Clone, Debug)]
pub struct PolygonElement {
    pub inodes: Vec<usize>,
    pub iedges: Vec<usize>,
}
#[derive(Clone, Debug)]
pub struct Mesh2d {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub elements: Vec<PolygonElement>,
    pub internal_edges: Vec<usize>,
    pub boundary_edges: Vec<usize>,
    pub elem_num: usize,
    pub node_num: usize,
}
impl Geometric2D for Mesh2d {}
impl Mesh2d {
    /// Builds the edge list from polygon connectivity. Corners are expected in
    /// counterclockwise order; an edge keeps the orientation of the first
    /// element that visits it.
    pub fn from_polygons(nodes: Vec<Node>, cells: Vec<Vec<usize>>) -> Mesh2d {
        let mut edges: Vec<Edge> = Vec::new();
        let mut edge_ids: HashMap<(usize, usize), usize> = HashMap::new();
        let mut elements = Vec::with_capacity(cells.len());
        for (ielem, inodes) in cells.into_iter().enumerate() {
            let n = inodes.len();
            let mut iedges = Vec::with_capacity(n);
            for local_id in 0..n {
                let a = inodes[local_id];
                let b = inodes[(local_id + 1) % n];
                let key = (a.min(b), a.max(b));
                let iedge = *edge_ids.entry(key).or_insert_with(|| {
                    edges.push(Edge {
                        inodes: [a, b],
                        parents: vec![],
                    });
                    edges.len() - 1
                });
                edges[iedge].parents.push(ielem);
                iedges.push(iedge);
            }
            elements.push(PolygonElement { inodes, iedges });
        }
        let (internal_edges, boundary_edges): (Vec<usize>, Vec<usize>) =
            (0..edges.len()).partition(|&i| edges[i].parents.len() > 1);
        let elem_num = elements.len();
        let node_num = nodes.len();
        debug!(elem_num, node_num, edge_num = edges.len(), "assembled polygonal mesh");
        Mesh2d {
            nodes,
            edges,
            elements,
            internal_edges,
            boundary_edges,
            elem_num,
            node_num,
        }
    }
    fn grid_nodes(x_num: usize, y_num: usize, x0: f64, x1: f64, y0: f64, y1: f64) -> Vec<Node> {
        let dx = (x1 - x0) / x_num as f64;
        let dy = (y1 - y0) / y_num as f64;
        let mut nodes = Vec::with_capacity((x_num + 1) * (y_num + 1));
        for j in 0..=y_num {
            for i in 0..=x_num {
                nodes.push(Node {
                    x: x0 + i as f64 * dx,
                    y: y0 + j as f64 * dy,
                });
            }
        }
        nodes
    }
    /// `x_num × y_num` quadrilaterals on `[x0, x1] × [y0, y1]`.
    pub fn create_rect_mesh(
        x_num: usize,
        y_num: usize,
        x0: f64,
        x1: f64,
        y0: f64,
        y1: f64,
    ) -> Mesh2d {
        let nodes = Self::grid_nodes(x_num, y_num, x0, x1, y0, y1);
        let mut cells = Vec::with_capacity(x_num * y_num);
        for j in 0..y_num {
            for i in 0..x_num {
                let n00 = j * (x_num + 1) + i;
                let n10 = n00 + 1;
                let n01 = n00 + x_num + 1;
                let n11 = n01 + 1;
                cells.push(vec![n00, n10, n11, n01]);
            }
        }
        Self::from_polygons(nodes, cells)
    }
    /// Same grid as [`Mesh2d::create_rect_mesh`], each quad split along its
    /// lower-left to upper-right diagonal.
    pub fn create_tri_mesh(
        x_num: usize,
        y_num: usize,
        x0: f64,
        x1: f64,
        y0: f64,
        y1: f64,
    ) -> Mesh2d {
        let nodes = Self::grid_nodes(x_num, y_num, x0, x1, y0, y1);
        let mut cells = Vec::with_capacity(2 * x_num * y_num);
        for j in 0..y_num {
            for i in 0..x_num {
                let n00 = j * (x_num + 1) + i;
                let n10 = n00 + 1;
                let n01 = n00 + x_num + 1;
                let n11 = n01 + 1;
                cells.push(vec![n00, n10, n11]);
                cells.push(vec![n00, n11, n01]);
            }
        }
        Self::from_polygons(nodes, cells)
    }
    fn coords(&self, inodes: &[usize]) -> (Vec<f64>, Vec<f64>) {
        let x = inodes.iter().map(|&i| self.nodes[i].x).collect();
        let y = inodes.iter().map(|&i| self.nodes[i].y).collect();
        (x, y)
    }
    pub fn element_area(&self, elem: &PolygonElement) -> f64 {
        let (x, y) = self.coords(&elem.inodes);
        Self::compute_element_area(&x, &y)
    }
}
impl MeshGeometry<PolygonElement> for Mesh2d {
    fn barycenter(&self, entity: &PolygonElement) -> Point2<f64> {
        let (x, y) = self.coords(&entity.inodes);
        Self::compute_barycenter(&x, &y)
    }
    fn diameter(&self, entity: &PolygonElement) -> f64 {
        let (x, y) = self.coords(&entity.inodes);
        Self::compute_diameter(&x, &y)
    }
    fn points(&self, entity: &PolygonElement) -> Vec<Point2<f64>> {
        entity
            .inodes
            .iter()
            .map(|&i| Point2::new(self.nodes[i].x, self.nodes[i].y))
            .collect()
    }
}
impl MeshGeometry<Edge> for Mesh2d {
    fn barycenter(&self, entity: &Edge) -> Point2<f64> {
        let (x, y) = self.coords(&entity.inodes);
        Self::compute_barycenter(&x, &y)
    }
    fn diameter(&self, entity: &Edge) -> f64 {
        let (x, y) = self.coords(&entity.inodes);
        Self::compute_diameter(&x, &y)
    }
    fn points(&self, entity: &Edge) -> Vec<Point2<f64>> {
        entity
            .inodes
            .iter()
            .map(|&i| Point2::new(self.nodes[i].x, self.nodes[i].y))
            .collect()
    }
}
