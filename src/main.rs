use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use haversine_area::point::GeoPoint;
use haversine_area::polygon::Polygon;
use haversine_area::session::Session;
use haversine_area::sketch::{DEFAULT_SCALE, Sketch};
use haversine_area::{read_polygon, reference, report, svg};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "haversine-area")]
#[command(about = "Great-circle edge lengths and spherical area of a lat/lon polygon")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Measure a polygon read from a file or given as --point arguments
    Measure {
        /// .kml, .gpx, .geojson, or .txt/.csv with one `lat,lon` per line
        path: Option<PathBuf>,
        /// Vertex as `lat,lon`; repeat in polygon order
        #[arg(long = "point", allow_hyphen_values = true)]
        points: Vec<GeoPoint>,
        /// Also print the ellipsoidal result of the geo crate
        #[arg(long)]
        reference: bool,
        #[command(flatten)]
        sketch: SketchArgs,
    },
    /// Enter points line by line (`help` lists the commands)
    Interactive {
        #[command(flatten)]
        sketch: SketchArgs,
    },
}

#[derive(Args)]
struct SketchArgs {
    /// Write an SVG sketch of the polygon to this file
    #[arg(long)]
    svg: Option<PathBuf>,
    /// Canvas units per degree
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    scale: f64,
    #[arg(long, default_value_t = 500.0)]
    width: f64,
    #[arg(long, default_value_t = 500.0)]
    height: f64,
}

impl SketchArgs {
    fn write(&self, points: &[GeoPoint]) -> Result<()> {
        let Some(path) = &self.svg else {
            return Ok(());
        };
        let mut svg = svg::SVG::init(&Sketch::new(self.width, self.height, self.scale));
        svg.add_polygon(points);
        std::fs::write(path, svg.render())
            .with_context(|| format!("writing {}", path.display()))?;
        log::trace!("sketch written to {}", path.display());
        Ok(())
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Cli::parse();
    match args.command {
        Command::Measure {
            path,
            points,
            reference,
            sketch,
        } => measure(path, points, reference, &sketch),
        Command::Interactive { sketch } => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            interactive(stdin.lock(), stdout.lock(), &sketch)
        }
    }
}

fn measure(
    path: Option<PathBuf>,
    mut points: Vec<GeoPoint>,
    with_reference: bool,
    sketch: &SketchArgs,
) -> Result<()> {
    if let Some(path) = path {
        let mut read = read_polygon::read_polygon(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        read.append(&mut points);
        points = read;
    }
    if points.is_empty() {
        bail!("no points: give a file or at least one --point");
    }

    let polygon = Polygon::new(&points);
    polygon.info();
    let edges = polygon.edges();
    let area = polygon.area();
    print!("{}", report::make_report(&points, &edges, &area));

    if with_reference {
        match reference::geodesic(&points) {
            Some((perimeter, area)) => {
                println!();
                println!("geodesic perimeter: {:.2} m (geo crate)", perimeter);
                println!("geodesic area: {:.2} m² (geo crate)", area);
            }
            None => log::info!("reference: not enough points"),
        }
    }
    sketch.write(&points)
}

#[derive(Debug, PartialEq)]
enum Input {
    Add(GeoPoint),
    Undo,
    Redo,
    /// 1-based, as listed
    Edit(usize),
    Clear,
    Area,
    List,
    Help,
    Quit,
}

fn parse_input(line: &str) -> haversine_area::Result<Input> {
    let line = line.trim();
    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();
    let invalid = || haversine_area::Error::ParsePoint {
        input: line.to_string(),
    };
    Ok(match word {
        "add" => Input::Add(rest.parse()?),
        "undo" => Input::Undo,
        "redo" => Input::Redo,
        "edit" => Input::Edit(rest.parse().map_err(|_| invalid())?),
        "clear" => Input::Clear,
        "area" => Input::Area,
        "list" => Input::List,
        "help" => Input::Help,
        "quit" | "exit" => Input::Quit,
        _ => Input::Add(line.parse()?),
    })
}

const HELP: &str = "\
<lat> <lon> | add <lat>,<lon>   append a point
undo | redo                     remove / restore the last point
edit <n>                        take point n out for re-entry
clear                           remove all points
area                            polygon area
list                            points and distances
quit";

fn interactive<R: BufRead, W: Write>(input: R, mut out: W, sketch: &SketchArgs) -> Result<()> {
    let mut session = Session::new();
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match parse_input(&line) {
            Ok(c) => c,
            Err(e) => {
                log::debug!("{}", e);
                writeln!(out, "Invalid input. Please enter numeric values.")?;
                continue;
            }
        };
        let changed = match command {
            Input::Add(p) => {
                session.add(p);
                true
            }
            Input::Undo => session.undo().is_some(),
            Input::Redo => session.redo().is_some(),
            Input::Edit(n) => match n.checked_sub(1).map(|i| session.edit(i)) {
                Some(Ok(p)) => {
                    writeln!(out, "edit: {}, {}", p.lat(), p.lon())?;
                    true
                }
                _ => {
                    writeln!(out, "Error: Unable to edit the point.")?;
                    false
                }
            },
            Input::Clear => {
                session.clear();
                writeln!(out, "Points cleared.")?;
                true
            }
            Input::Area => {
                write!(out, "{}", report::area_text(&session.area()))?;
                false
            }
            Input::List => {
                write!(out, "{}", report::points_text(session.points()))?;
                write!(out, "{}", report::distances_text(&session.distances()))?;
                false
            }
            Input::Help => {
                writeln!(out, "{}", HELP)?;
                false
            }
            Input::Quit => break,
        };
        if changed {
            write!(out, "{}", report::points_text(session.points()))?;
            write!(out, "{}", report::distances_text(&session.distances()))?;
            sketch.write(session.points())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_sketch() -> SketchArgs {
        SketchArgs {
            svg: None,
            scale: DEFAULT_SCALE,
            width: 500.0,
            height: 500.0,
        }
    }

    fn run(script: &str) -> String {
        let mut out = Vec::new();
        interactive(script.as_bytes(), &mut out, &no_sketch()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(
            parse_input("30 31").unwrap(),
            Input::Add(GeoPoint::new(30.0, 31.0).unwrap())
        );
        assert_eq!(
            parse_input("add 30,31").unwrap(),
            Input::Add(GeoPoint::new(30.0, 31.0).unwrap())
        );
        assert_eq!(parse_input("edit 2").unwrap(), Input::Edit(2));
        assert_eq!(parse_input(" undo ").unwrap(), Input::Undo);
        assert!(parse_input("edit x").is_err());
        assert!(parse_input("north east").is_err());
    }

    #[test]
    fn test_session_area() {
        let out = run("0 0\n0 1\narea\n1 0\narea\nquit\n0 5\n");
        assert!(out.contains("Not enough points to form a polygon."));
        assert!(out.contains("Area: 6195699951.04 m²"));
        assert!(out.contains("Distance 3: 111194.93 m"));
        assert!(!out.contains("(0.000000, 5.000000)"));
    }

    #[test]
    fn test_session_edit_and_invalid() {
        let out = run("0 0\n0 1\nedit 2\nedit 9\nabc\nclear\n");
        assert!(out.contains("edit: 0, 1"));
        assert!(out.contains("Error: Unable to edit the point."));
        assert!(out.contains("Invalid input. Please enter numeric values."));
        assert!(out.ends_with("Points cleared.\n"));
    }
}
