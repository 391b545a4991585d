#![doc = include_str!("../README.md")]

pub mod mesh;
mod options;
pub mod parse;
pub mod prelude;
pub mod triangulate;
mod utils;
pub mod write;

pub use mesh::{CellType, Mesh};
pub use options::{Compression, ReadOptions};
pub use parse::{Format, FormatError, FormatSelection, Grid};
pub use triangulate::{FixedDiagonal, ShortestDiagonal, Triangulation};
pub use write::{write_mesh_plot3d, write_plot3d};

pub use ndarray;

use std::io::Read;
use std::path::Path;

/// general purpose error enumeration for possible causes of failure.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("An io error occured: `{0}`")]
    Io(#[from] std::io::Error),
    #[error("Could not convert file to utf8 encoding: `{0}`")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("Could not parse plot3d file: {0}")]
    Format(#[from] FormatError),
    #[error("{0}D plot3d meshes are not supported, only 2D")]
    UnsupportedDimension(usize),
    #[error("plot3d file has {block_count} blocks, only single block files are supported")]
    UnsupportedMultiblock { block_count: usize },
    #[error("a {rows}x{cols} grid cannot be built from a point array of shape {points:?}")]
    ShapeMismatch {
        rows: usize,
        cols: usize,
        points: (usize, usize),
    },
    #[error("file is gzip compressed but the `gzip` feature is disabled")]
    GzipUnsupported,
}

/// Read a plot3d file into a triangle mesh. Files ending in `.gz` are
/// decompressed first.
///
/// ```no_run
/// let mesh = plot3d::read("airfoil.xyz").unwrap();
/// println!("{} triangles", mesh.n_cells());
/// ```
pub fn read<P: AsRef<Path>>(path: P) -> Result<Mesh<f64>, Error> {
    read_with(path, &ReadOptions::default(), &FixedDiagonal)
}

/// Read a plot3d file with custom options and triangulation policy
pub fn read_with<P, T>(path: P, options: &ReadOptions, policy: &T) -> Result<Mesh<f64>, Error>
where
    P: AsRef<Path>,
    T: Triangulation,
{
    let path = path.as_ref();

    options.in_scope(|| {
        let compression = options.compression.for_path(path);
        tracing::debug!(path = %path.display(), ?compression, "reading plot3d file");

        let file = std::fs::File::open(path)?;
        let buffer = read_all(file, compression)?;

        read_buffer_inner(&buffer, options, policy)
    })
}

/// Parse the contents of an (uncompressed) plot3d file into a triangle mesh
///
/// ```
/// let text = b"2 2\n0.0 1.0 0.0 1.0\n0.0 0.0 1.0 1.0\n";
/// let mesh = plot3d::read_buffer(text).unwrap();
///
/// assert_eq!(mesh.n_points(), 4);
/// assert_eq!(mesh.n_cells(), 2);
/// ```
pub fn read_buffer(buffer: &[u8]) -> Result<Mesh<f64>, Error> {
    read_buffer_with(buffer, &ReadOptions::default(), &FixedDiagonal)
}

/// Parse the contents of a plot3d file with custom options and triangulation policy.
///
/// `options.compression` is not consulted here: `buffer` must already be plain text.
pub fn read_buffer_with<T: Triangulation>(
    buffer: &[u8],
    options: &ReadOptions,
    policy: &T,
) -> Result<Mesh<f64>, Error> {
    options.in_scope(|| read_buffer_inner(buffer, options, policy))
}

fn read_buffer_inner<T: Triangulation>(
    buffer: &[u8],
    options: &ReadOptions,
    policy: &T,
) -> Result<Mesh<f64>, Error> {
    let text = std::str::from_utf8(buffer)?;
    let tokens = parse::tokenize(text);

    let grid: Grid<f64> = parse::load(&tokens, &options.format)?;
    let (rows, cols) = (grid.rows(), grid.cols());

    let triangles = policy.triangulate(rows, cols, grid.points().view());
    tracing::debug!(
        n_points = grid.n_points(),
        n_triangles = triangles.nrows(),
        "triangulated plot3d grid"
    );

    Ok(Mesh::from_triangles(grid.into_points(), triangles))
}

fn read_all<R: Read>(reader: R, compression: Compression) -> Result<Vec<u8>, Error> {
    let mut buffer = Vec::new();

    match compression {
        Compression::Gzip => {
            #[cfg(feature = "gzip")]
            {
                let mut decoder = flate2::read::MultiGzDecoder::new(reader);
                decoder.read_to_end(&mut buffer)?;
            }
            #[cfg(not(feature = "gzip"))]
            {
                drop(reader);
                return Err(Error::GzipUnsupported);
            }
        }
        Compression::Plain | Compression::Auto => {
            let mut reader = reader;
            reader.read_to_end(&mut buffer)?;
        }
    }

    Ok(buffer)
}
