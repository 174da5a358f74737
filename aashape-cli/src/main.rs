use std::fs;
use std::io::{self, Read, Write};

use aashape::{Canvas, CanvasOptions, DEFAULT_TAB_WIDTH};
use facet::Facet;
use facet_args as args;

/// List the shapes and text recognized in an ASCII art diagram
#[derive(Facet, Debug)]
struct Args {
    /// Input file (reads from stdin if not provided)
    #[facet(default, args::positional)]
    input: Option<String>,

    /// Output file (writes to stdout if not provided)
    #[facet(default, args::named, args::short = 'o')]
    output: Option<String>,

    /// Columns per tab stop
    #[facet(default, args::named, args::short = 't')]
    tab_width: Option<usize>,

    /// Blank cells a text run may bridge
    #[facet(default, args::named)]
    merge_gap: Option<usize>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Args = match args::from_std_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let input = match &args.input {
        Some(path) => fs::read(path).unwrap_or_else(|e| {
            eprintln!("Failed to read {}: {}", path, e);
            std::process::exit(1);
        }),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf).unwrap_or_else(|e| {
                eprintln!("Failed to read stdin: {}", e);
                std::process::exit(1);
            });
            buf
        }
    };

    let mut options = CanvasOptions::new().with_tab_width(args.tab_width.unwrap_or(DEFAULT_TAB_WIDTH));
    if let Some(gap) = args.merge_gap {
        options = options.with_merge_gap(gap);
    }

    let canvas = Canvas::with_options(&input, &options).unwrap_or_else(|e| {
        eprintln!("Failed to parse diagram: {}", e);
        std::process::exit(1);
    });
    log::info!(
        "recognized {} objects on a {}x{} grid",
        canvas.objects().len(),
        canvas.size().0,
        canvas.size().1
    );

    let mut listing = String::new();
    for obj in canvas.objects() {
        listing.push_str(&obj.to_string());
        listing.push('\n');
    }

    match &args.output {
        Some(path) => {
            fs::write(path, &listing).unwrap_or_else(|e| {
                eprintln!("Failed to write {}: {}", path, e);
                std::process::exit(1);
            });
        }
        None => {
            io::stdout().write_all(listing.as_bytes()).unwrap_or_else(|e| {
                eprintln!("Failed to write stdout: {}", e);
                std::process::exit(1);
            });
        }
    }
}
