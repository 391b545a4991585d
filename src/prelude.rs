//! Common traits and types that are useful for working with `plot3d`
#![allow(unused_imports)]

pub use crate::mesh::{CellType, Mesh};
pub use crate::options::{Compression, ReadOptions};
pub use crate::parse::{Format, FormatSelection, Grid};
pub use crate::triangulate::{FixedDiagonal, ShortestDiagonal, Triangulation};

pub(crate) use crate::Error;
pub(crate) use crate::{parse, triangulate, utils};

pub(crate) use derive_more::{Constructor, Display, From};

pub(crate) use ndarray::{Array2, ArrayView2};
pub(crate) use num_traits::Float;
