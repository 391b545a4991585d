//! # Mesh container
//!
//! A [`Mesh`] is what a read hands back: a dense `(n_points, dim)` array of point
//! coordinates plus connectivity arrays keyed by the kind of cell they describe.
//! Reading a plot3d grid always produces exactly one cell block, [`CellType::Triangle`].

use crate::prelude::*;

use std::collections::BTreeMap;

/// The kind of cell a connectivity array describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum CellType {
    #[display(fmt = "triangle")]
    Triangle,
}

impl CellType {
    /// tag used for this cell type by generic mesh tooling
    pub fn as_str(&self) -> &'static str {
        match self {
            CellType::Triangle => "triangle",
        }
    }

    /// number of point indices per cell
    pub fn nodes(&self) -> usize {
        match self {
            CellType::Triangle => 3,
        }
    }
}

/// Points and cell connectivity of an unstructured mesh
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh<F> {
    pub points: Array2<F>,
    pub cells: BTreeMap<CellType, Array2<usize>>,
}

impl<F> Mesh<F> {
    pub fn new(points: Array2<F>, cells: BTreeMap<CellType, Array2<usize>>) -> Self {
        Self { points, cells }
    }

    /// Construct a mesh made of a single block of triangles
    pub fn from_triangles(points: Array2<F>, triangles: Array2<usize>) -> Self {
        let mut cells = BTreeMap::new();
        cells.insert(CellType::Triangle, triangles);
        Self { points, cells }
    }

    /// `(n_triangles, 3)` connectivity, if this mesh has any triangle block
    pub fn triangles(&self) -> Option<&Array2<usize>> {
        self.cells.get(&CellType::Triangle)
    }

    pub fn n_points(&self) -> usize {
        self.points.nrows()
    }

    /// spatial dimension of the points
    pub fn dimension(&self) -> usize {
        self.points.ncols()
    }

    /// total number of cells across every cell block
    pub fn n_cells(&self) -> usize {
        self.cells.values().map(|block| block.nrows()).sum()
    }
}
