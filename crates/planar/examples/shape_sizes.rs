//! Print bounds and intrinsic sizes for a few stroked shapes.
//!
//! Usage:
//!   cargo run -p planar --example shape_sizes

use planar::prelude::*;

fn main() {
    let mut circle = Shape::default();
    circle.add_circle(Vector::new(50.0, 50.0), 25.0);

    let mut hexagon = Shape::default();
    hexagon.add_polygon(&regular_polygon(Vector::new(40.0, 40.0), 30.0, 6, 0.0), true);

    let mut line = Shape::default();
    line.add_line(Vector::new(0.0, 0.0), Vector::new(120.0, 35.0));

    for (name, mut shape, width) in [
        ("circle", circle, 2.0),
        ("hexagon", hexagon, 5.0),
        ("line", line, 1.0),
    ] {
        if let Err(err) = shape.set_line_width(width) {
            eprintln!("{name}: {err}");
            continue;
        }
        shape.adjust_to_fit_path();
        let size = shape.intrinsic_content_size();
        println!(
            "{name}: bounds=({:.2}, {:.2}, {:.2}, {:.2}) intrinsic={:.2}x{:.2}",
            shape.bounds.origin.x,
            shape.bounds.origin.y,
            shape.bounds.size.width,
            shape.bounds.size.height,
            size.width,
            size.height
        );
    }
}
