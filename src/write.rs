//! Writing single block 2D grids as ASCII plot3d files
use crate::prelude::*;

use std::io::Write;

/// number of values written on each line of a coordinate channel
const VALUES_PER_LINE: usize = 6;

/// Write the points of a `rows * cols` grid as an ASCII plot3d file.
///
/// The header is written without a block count (`rows cols`), followed by all of the
/// x coordinates and then all of the y coordinates. Coordinates are formatted with
/// `ryu`, which never writes a value as a bare integer (`1.0`, `1e-7`), so the output
/// never trips up format sniffing when read back in.
pub fn write_plot3d<W, F>(
    mut writer: W,
    rows: usize,
    cols: usize,
    points: ArrayView2<F>,
) -> Result<(), Error>
where
    W: Write,
    F: Float + ryu::Float,
{
    if rows.checked_mul(cols) != Some(points.nrows()) || points.ncols() != 2 {
        return Err(Error::ShapeMismatch {
            rows,
            cols,
            points: points.dim(),
        });
    }

    writeln!(writer, "{} {}", rows, cols)?;

    for channel in 0..2 {
        let mut buffer = ryu::Buffer::new();

        for (idx, value) in points.column(channel).iter().enumerate() {
            if idx > 0 {
                let sep = if idx % VALUES_PER_LINE == 0 { "\n" } else { " " };
                writer.write_all(sep.as_bytes())?;
            }
            writer.write_all(buffer.format(*value).as_bytes())?;
        }

        writer.write_all(b"\n")?;
    }

    tracing::debug!(rows, cols, "wrote plot3d grid");

    Ok(())
}

/// Write the points of `mesh` as a `rows * cols` plot3d grid. Connectivity is not
/// stored in plot3d files and is dropped.
pub fn write_mesh_plot3d<W, F>(
    writer: W,
    mesh: &Mesh<F>,
    rows: usize,
    cols: usize,
) -> Result<(), Error>
where
    W: Write,
    F: Float + ryu::Float,
{
    write_plot3d(writer, rows, cols, mesh.points.view())
}
