use std::path::PathBuf;

use clap::{Args, Parser};
use kurbo::BezPath;
use svg::{node::element::path::Data, Document};

use ringclip::{generators, Point, Polygon};

#[derive(Copy, Clone, Debug, clap::ValueEnum)]
enum Example {
    Squares,
    Comb,
    Polygons,
}

#[derive(Parser)]
struct Cli {
    #[arg(long)]
    output: PathBuf,

    #[command(flatten)]
    input: Input,

    /// Tolerance for flattening curves in the input paths.
    #[arg(long, default_value_t = 0.1)]
    tolerance: f64,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct Input {
    /// Two SVG path strings, the subject and then the clip polygon.
    #[arg(num_args = 2)]
    paths: Vec<String>,

    #[arg(long)]
    example: Option<Example>,
}

fn get_polygons(input: &Input, tolerance: f64) -> anyhow::Result<(Polygon, Polygon)> {
    if let Some(example) = input.example {
        let (a, b) = match example {
            Example::Squares => generators::squares(),
            Example::Comb => generators::comb_and_bar(5),
            Example::Polygons => (
                generators::regular_polygon(Point::new(0.0, 0.0), 5.0, 7, 0.0),
                generators::regular_polygon(Point::new(3.0, 1.0), 4.0, 5, 0.3),
            ),
        };
        return Ok((Polygon::new(a), Polygon::new(b)));
    }

    let [a, b] = input.paths.as_slice() else {
        anyhow::bail!("expected two paths");
    };
    let a = Polygon::from_bez_path(&BezPath::from_svg(a)?, tolerance)?;
    let b = Polygon::from_bez_path(&BezPath::from_svg(b)?, tolerance)?;
    Ok((a, b))
}

fn path_data(poly: &Polygon) -> Data {
    let mut data = Data::new();
    let mut points = poly.points.iter();
    if let Some(p) = points.next() {
        data = data.move_to((p.x, p.y));
        for p in points {
            data = data.line_to((p.x, p.y));
        }
        data = data.close();
    }
    data
}

pub fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let (subject, clip) = get_polygons(&args.input, args.tolerance)?;
    let out = ringclip::intersect(subject.points.iter().copied(), clip.points.iter().copied())?;

    let bbox = subject.bounding_box().union(clip.bounding_box());
    let pad = 0.05 * bbox.width().max(bbox.height());
    let stroke_width = bbox.width().max(bbox.height()) / 256.0;
    let mut document = Document::new().set(
        "viewBox",
        (
            bbox.x0 - pad,
            bbox.y0 - pad,
            bbox.width() + 2.0 * pad,
            bbox.height() + 2.0 * pad,
        ),
    );

    for input in [&subject, &clip] {
        let path = svg::node::element::Path::new()
            .set("stroke", "black")
            .set("stroke-width", stroke_width)
            .set("stroke-linejoin", "round")
            .set("opacity", 0.3)
            .set("fill", "none")
            .set("d", path_data(input));
        document = document.add(path);
    }

    let colors = ["#005F73", "#0A9396", "#EE9B00", "#CA6702", "#AE2012"];
    for (poly, color) in out.iter().zip(colors.iter().cycle()) {
        let path = svg::node::element::Path::new()
            .set("stroke", "black")
            .set("stroke-width", stroke_width)
            .set("stroke-linejoin", "round")
            .set("fill", *color)
            .set("d", path_data(poly));
        document = document.add(path);
    }

    svg::save(&args.output, &document)?;
    Ok(())
}
