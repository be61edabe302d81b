//! Hemicycle CLI
//!
//! Usage:
//!   hemicycle [OPTIONS] [FILE]
//!
//! Options:
//!   -p, --palette <FILE>   Palette file for party colors (TOML format)
//!   --previous <FILE>      Earlier chart to animate from
//!   -f, --format <FORMAT>  Output format: svg or json
//!   -w, --width <WIDTH>    Canvas width (height is always half)
//!   -h, --help             Print help

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};

use hemicycle::{
    render_json, render_transition, render_with_config, Chart, Palette, RenderConfig, RenderError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Svg,
    Json,
}

#[derive(Parser)]
#[command(name = "hemicycle")]
#[command(about = "Lay out and draw parliament seating charts")]
struct Cli {
    /// Chart file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Palette file for party colors (TOML format)
    #[arg(short, long)]
    palette: Option<PathBuf>,

    /// Earlier chart; the SVG output animates the change from it
    #[arg(long)]
    previous: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// Canvas width, overriding the chart
    #[arg(short, long)]
    width: Option<f64>,
}

impl Cli {
    /// Reject option combinations clap cannot express on its own
    fn check(&self) -> Result<(), clap::Error> {
        if self.previous.is_some() && self.format == Format::Json {
            return Err(Cli::command().error(
                ErrorKind::ArgumentConflict,
                "--previous only applies to svg output",
            ));
        }
        Ok(())
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = cli.check() {
        e.exit();
    }

    let palette = match &cli.palette {
        Some(path) => match Palette::from_file(path) {
            Ok(p) => Palette::default().with_overrides(&p),
            Err(e) => {
                eprintln!("Error loading palette '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => Palette::default(),
    };

    let (source, filename) = match &cli.input {
        Some(path) => (read_file(path), path.display().to_string()),
        None => {
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error reading from stdin: {}", e);
                process::exit(1);
            }
            (buffer, "<stdin>".to_string())
        }
    };

    let mut config = RenderConfig::new().with_palette(palette);
    if let Some(width) = cli.width {
        config = config.with_width(width);
    }

    let output = match cli.format {
        Format::Json => render_json(&source, &config),
        Format::Svg => match &cli.previous {
            Some(path) => {
                let previous = read_file(path);
                // Report errors in the earlier chart against its own source
                if let Err(e) = Chart::from_str(&previous) {
                    eprintln!("{}", e.format(&previous, &path.display().to_string()));
                    process::exit(1);
                }
                render_transition(&previous, &source, &config)
            }
            None => render_with_config(&source, &config),
        },
    };

    match output {
        Ok(text) => println!("{}", text),
        Err(RenderError::Chart(e)) => {
            eprintln!("{}", e.format(&source, &filename));
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn read_file(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", path.display(), e);
            process::exit(1);
        }
    }
}
