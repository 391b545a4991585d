//! # Reading plot3d grids
//!
//! ASCII plot3d files have no magic number and no version tag. A file is a stream of
//! whitespace separated tokens:
//!
//! ```text
//! [n_blocks] dim_0 dim_1 [dim_2]
//! x_0 x_1 ... x_n
//! y_0 y_1 ... y_n
//! [z_0 z_1 ... z_n]
//! ```
//!
//! All x values come before all y values (channel-major storage). Since the header is
//! not tagged, [`sniff`] guesses the layout by counting how many of the first four
//! tokens look like non-negative integers:
//!
//! | integer tokens | interpretation           | supported |
//! |----------------|--------------------------|-----------|
//! | 1              | single 1D block          | no        |
//! | 2              | single 2D block          | yes       |
//! | 3              | multiblock 2D            | one block |
//! | 4              | multiblock 3D            | no        |
//!
//! The guess is ambiguous: a 2D grid whose first coordinates happen to be written as
//! bare integers (`2 2 0 1 ...`) looks like a 3D header. When the layout of a file is
//! known ahead of time, pass [`FormatSelection::Explicit`] to [`load`] and skip the
//! heuristic entirely.

mod error;

pub use error::{FormatError, InvalidCoordinate, InvalidHeaderToken, MissingCoordinate};

use crate::prelude::*;

use std::str::FromStr;

/// number of leading tokens inspected by [`format_hint`]
const HINT_WINDOW: usize = 4;

/// Structural description of a plot3d file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    block_count: usize,
    grid_shape: Vec<usize>,
    header_len: usize,
}

impl Format {
    /// Describe a file with `block_count` blocks of shape `grid_shape` whose header occupies
    /// the first `header_len` tokens of the file.
    pub fn new(block_count: usize, grid_shape: Vec<usize>, header_len: usize) -> Self {
        Self {
            block_count,
            grid_shape,
            header_len,
        }
    }

    /// A single 2D block written without a block count: `rows cols x.. y..`
    pub fn single_block_2d(rows: usize, cols: usize) -> Self {
        Self::new(1, vec![rows, cols], 2)
    }

    /// A 2D file that starts with a block count: `n_blocks rows cols x.. y..`
    pub fn multiblock_2d(block_count: usize, rows: usize, cols: usize) -> Self {
        Self::new(block_count, vec![rows, cols], 3)
    }

    pub fn block_count(&self) -> usize {
        self.block_count
    }

    pub fn dimension(&self) -> usize {
        self.grid_shape.len()
    }

    pub fn grid_shape(&self) -> &[usize] {
        &self.grid_shape
    }

    /// number of tokens at the start of the file that belong to the header. The
    /// coordinate data starts directly after them.
    pub fn header_len(&self) -> usize {
        self.header_len
    }

    /// total number of grid points, or `None` if the product does not fit in a `usize`
    pub fn n_points(&self) -> Option<usize> {
        self.grid_shape
            .iter()
            .try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
    }

    /// check that this is a layout the loader can handle: one block of 2D points
    pub fn validate(&self) -> Result<(), Error> {
        match self.dimension() {
            2 => (),
            dim @ (1 | 3) => return Err(Error::UnsupportedDimension(dim)),
            _ => return Err(FormatError::BadlyFormatted.into()),
        }

        if self.block_count != 1 {
            return Err(Error::UnsupportedMultiblock {
                block_count: self.block_count,
            });
        }

        Ok(())
    }
}

/// How [`load`] decides on the layout of a file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormatSelection {
    /// infer the layout from the leading tokens with [`sniff`]
    #[default]
    Sniff,
    /// trust a layout declared by the caller
    Explicit(Format),
}

/// A single block of 2D grid points read from a file
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<F> {
    format: Format,
    points: Array2<F>,
}

impl<F> Grid<F> {
    pub fn format(&self) -> &Format {
        &self.format
    }

    /// number of points along the fast grid index
    pub fn rows(&self) -> usize {
        self.format.grid_shape[0]
    }

    /// number of points along the slow grid index
    pub fn cols(&self) -> usize {
        self.format.grid_shape[1]
    }

    pub fn n_points(&self) -> usize {
        self.points.nrows()
    }

    /// `(n_points, 2)` array of point coordinates
    pub fn points(&self) -> &Array2<F> {
        &self.points
    }

    pub fn into_points(self) -> Array2<F> {
        self.points
    }
}

/// Split the contents of a file into whitespace delimited tokens
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(utils::is_separator)
        .filter(|token| !token.is_empty())
        .collect()
}

/// count how many of the first four tokens are non-negative integers
pub fn format_hint(tokens: &[&str]) -> usize {
    tokens
        .iter()
        .take(HINT_WINDOW)
        .filter(|token| utils::is_unsigned_integer(token))
        .count()
}

/// Infer the layout of a file from its leading tokens.
///
/// Only the header is decoded here. The returned [`Format`] may still describe
/// something [`load`] refuses (several blocks), see [`Format::validate`].
pub fn sniff(tokens: &[&str]) -> Result<Format, Error> {
    let hint = format_hint(tokens);
    tracing::debug!(format_hint = hint, "sniffed plot3d header");

    match hint {
        1 => Err(Error::UnsupportedDimension(1)),
        2 => {
            let grid_shape = vec![header_value(tokens, 0)?, header_value(tokens, 1)?];
            Ok(Format::new(1, grid_shape, hint))
        }
        3 => {
            let block_count = header_value(tokens, 0)?;
            let grid_shape = vec![header_value(tokens, 1)?, header_value(tokens, 2)?];
            Ok(Format::new(block_count, grid_shape, hint))
        }
        4 => Err(Error::UnsupportedDimension(3)),
        _ => Err(FormatError::BadlyFormatted.into()),
    }
}

/// Load the points of a single block 2D grid from the tokens of a file.
///
/// Coordinates are stored channel-major: the x coordinate of point `p` is token
/// `header_len + p` and its y coordinate is token `header_len + n_points + p`.
/// Anything after the y channel is ignored.
///
/// ```
/// use plot3d::parse::{load, tokenize, FormatSelection};
///
/// let tokens = tokenize("2 2\n0.0 1.0 0.0 1.0\n0.0 0.0 1.0 1.0\n");
/// let grid = load::<f64>(&tokens, &FormatSelection::Sniff).unwrap();
///
/// assert_eq!(grid.rows(), 2);
/// assert_eq!(grid.points().row(3).to_vec(), vec![1.0, 1.0]);
/// ```
pub fn load<F>(tokens: &[&str], selection: &FormatSelection) -> Result<Grid<F>, Error>
where
    F: Float + FromStr,
{
    let format = match selection {
        FormatSelection::Sniff => sniff(tokens)?,
        FormatSelection::Explicit(format) => format.clone(),
    };

    format.validate()?;

    let n_points = format.n_points().ok_or(FormatError::BadlyFormatted)?;
    let offset = format.header_len();

    tracing::debug!(
        block_count = format.block_count(),
        rows = format.grid_shape()[0],
        cols = format.grid_shape()[1],
        n_points,
        "loading plot3d grid"
    );

    // check the y channel fits before allocating anything for it
    let end = n_points
        .checked_mul(2)
        .and_then(|len| len.checked_add(offset))
        .ok_or(FormatError::BadlyFormatted)?;

    if end > tokens.len() {
        return Err(FormatError::from(MissingCoordinate::new(
            tokens.len().max(offset),
            tokens.len(),
        ))
        .into());
    }

    let mut points = Array2::<F>::zeros((n_points, 2));

    for (point_index, mut point) in points.outer_iter_mut().enumerate() {
        point[0] = coordinate(tokens, offset + point_index)?;
        point[1] = coordinate(tokens, offset + n_points + point_index)?;
    }

    Ok(Grid { format, points })
}

fn header_value(tokens: &[&str], index: usize) -> Result<usize, Error> {
    let token = tokens.get(index).ok_or(FormatError::BadlyFormatted)?;

    token.parse().map_err(|_| {
        FormatError::from(InvalidHeaderToken::new(index, token.to_string())).into()
    })
}

fn coordinate<F: FromStr>(tokens: &[&str], index: usize) -> Result<F, Error> {
    let token = tokens.get(index).ok_or_else(|| {
        FormatError::from(MissingCoordinate::new(index, tokens.len()))
    })?;

    token.parse().map_err(|_| {
        FormatError::from(InvalidCoordinate::new(index, token.to_string())).into()
    })
}
