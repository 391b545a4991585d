use plot3d::ndarray::{array, Array2};
use plot3d::{CellType, Compression, Error, FixedDiagonal, Format, FormatError, ReadOptions};

use std::path::PathBuf;

/// channel-major text for a `rows * cols` grid with point `(i, j)` at `(i * 0.5, j * 0.25)`
fn grid_text(rows: usize, cols: usize) -> String {
    let mut x = Vec::new();
    let mut y = Vec::new();
    for j in 0..cols {
        for i in 0..rows {
            x.push(format!("{:.4}", i as f64 * 0.5));
            y.push(format!("{:.4}", j as f64 * 0.25));
        }
    }
    format!("{} {}\n{}\n{}\n", rows, cols, x.join(" "), y.join(" "))
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("plot3d-{}-{}", std::process::id(), name))
}

#[test]
fn unit_square_explicit_layout() {
    // integer coordinates are indistinguishable from a 3D header when sniffing
    let text = b"2 2 0 1 0 1 0 0 1 1";
    assert!(matches!(
        plot3d::read_buffer(text),
        Err(Error::UnsupportedDimension(3))
    ));

    let options = ReadOptions::default().with_format(Format::single_block_2d(2, 2));
    let mesh = plot3d::read_buffer_with(text, &options, &FixedDiagonal).unwrap();

    assert_eq!(mesh.points, array![[0., 0.], [1., 0.], [0., 1.], [1., 1.]]);
    assert_eq!(mesh.triangles(), Some(&array![[0, 1, 2], [1, 3, 2]]));
}

#[test]
fn point_and_cell_counts() {
    for (rows, cols) in [(2, 2), (3, 5), (8, 2), (6, 6), (1, 4), (4, 1)] {
        let mesh = plot3d::read_buffer(grid_text(rows, cols).as_bytes()).unwrap();

        assert_eq!(mesh.n_points(), rows * cols);
        assert_eq!(mesh.points.ncols(), 2);

        let triangles = mesh.triangles().unwrap();
        assert_eq!(triangles.nrows(), 2 * (rows - 1) * (cols - 1));
        assert!(triangles.iter().all(|&idx| idx < rows * cols));
        assert_eq!(mesh.cells.len(), 1);
    }
}

#[test]
fn points_follow_grid_index() {
    let mesh = plot3d::read_buffer(grid_text(3, 2).as_bytes()).unwrap();
    // point (i, j) is at flat index j * rows + i
    assert_eq!(mesh.points.row(4).to_vec(), vec![0.5, 0.25]);
    assert_eq!(mesh.points.row(2).to_vec(), vec![1.0, 0.0]);
}

#[test]
fn rejections() {
    assert!(matches!(
        plot3d::read_buffer(b"5 1.2 3.4"),
        Err(Error::UnsupportedDimension(1))
    ));
    assert!(matches!(
        plot3d::read_buffer(b"a b c d"),
        Err(Error::Format(FormatError::BadlyFormatted))
    ));
    assert!(matches!(
        plot3d::read_buffer(b""),
        Err(Error::Format(FormatError::BadlyFormatted))
    ));
    assert!(matches!(
        plot3d::read_buffer(b"2 2 2 0.0 1.0 0.0 1.0 0.0 0.0 1.0 1.0"),
        Err(Error::UnsupportedMultiblock { block_count: 2 })
    ));
}

#[test]
fn multiblock_header_with_one_block() {
    let text = format!("1\n{}", grid_text(3, 3));
    let with_count = plot3d::read_buffer(text.as_bytes()).unwrap();
    let without_count = plot3d::read_buffer(grid_text(3, 3).as_bytes()).unwrap();
    assert_eq!(with_count, without_count);
}

#[test]
fn empty_grid() {
    let mesh = plot3d::read_buffer(b"0 4").unwrap();
    assert_eq!(mesh.points.dim(), (0, 2));
    assert_eq!(mesh.cells[&CellType::Triangle].dim(), (0, 3));
}

#[test]
fn reading_is_deterministic() {
    let text = grid_text(7, 4);
    let first = plot3d::read_buffer(text.as_bytes()).unwrap();
    let second = plot3d::read_buffer(text.as_bytes()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn write_then_read() {
    let points: Array2<f64> = array![
        [0., 0.],
        [1.5, -0.5],
        [3., 0.],
        [0., 2.],
        [1.5, 2.5],
        [3., 2.]
    ];
    let mut out = Vec::new();
    plot3d::write_plot3d(&mut out, 3, 2, points.view()).unwrap();

    let mesh = plot3d::read_buffer(&out).unwrap();
    assert_eq!(mesh.points, points);

    let mut again = Vec::new();
    plot3d::write_mesh_plot3d(&mut again, &mesh, 3, 2).unwrap();
    assert_eq!(out, again);
}

#[test]
fn read_from_disk() {
    let path = temp_path("square.xyz");
    std::fs::write(&path, grid_text(4, 3)).unwrap();

    let mesh = plot3d::read(&path).unwrap();
    assert_eq!(mesh.n_points(), 12);
    assert_eq!(mesh.n_cells(), 12);

    std::fs::remove_file(&path).ok();
}

#[test]
fn missing_file() {
    let err = plot3d::read(temp_path("does-not-exist.xyz")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[cfg(feature = "gzip")]
#[test]
fn read_gzip_from_disk() {
    use std::io::Write;

    let text = grid_text(5, 5);

    let path = temp_path("square.xyz.gz");
    let file = std::fs::File::create(&path).unwrap();
    let mut encoder = flate2::write::GzEncoder::new(file, flate2::Compression::default());
    encoder.write_all(text.as_bytes()).unwrap();
    encoder.finish().unwrap();

    let mesh = plot3d::read(&path).unwrap();
    assert_eq!(mesh, plot3d::read_buffer(text.as_bytes()).unwrap());

    // the same bytes are garbage when decompression is switched off
    let options = ReadOptions::default().with_compression(Compression::Plain);
    assert!(plot3d::read_with(&path, &options, &FixedDiagonal).is_err());

    std::fs::remove_file(&path).ok();
}

#[cfg(feature = "gzip")]
#[test]
fn read_multi_member_gzip() {
    use std::io::Write;

    fn gzip(text: &str) -> Vec<u8> {
        let level = flate2::Compression::default();
        let mut encoder = flate2::write::GzEncoder::new(Vec::new(), level);
        encoder.write_all(text.as_bytes()).unwrap();
        encoder.finish().unwrap()
    }

    // what `cat a.gz b.gz` or a parallel compressor produces
    let mut bytes = gzip("2 2\n0.0 1.0 0.0 1.0\n");
    bytes.extend(gzip("0.0 0.0 1.0 1.0\n"));

    let path = temp_path("members.xyz.gz");
    std::fs::write(&path, &bytes).unwrap();

    let mesh = plot3d::read(&path).unwrap();
    assert_eq!(mesh.points, array![[0., 0.], [1., 0.], [0., 1.], [1., 1.]]);
    assert_eq!(mesh.triangles(), Some(&array![[0, 1, 2], [1, 3, 2]]));

    std::fs::remove_file(&path).ok();
}
