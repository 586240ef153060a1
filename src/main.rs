// Sat Aug 29 2026 - Alex

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use cpp_layout_inspector::{
    config::{Config, OutputFormat},
    frontend::JsonFrontend,
    layout::LayoutStats,
    locator::SourcePos,
    output::{JsonRenderer, TextRenderer},
    query::{QueryEngine, QueryOutcome, QueryRequest},
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "C++ class layout inspector", long_about = None)]
struct Args {
    /// Translation unit fact dump (JSON) produced by the frontend driver
    #[arg(short, long)]
    input: PathBuf,

    /// Cursor line, 1-based
    #[arg(short, long)]
    line: u32,

    /// Cursor column, 1-based
    #[arg(short, long)]
    column: u32,

    /// Extra compiler flags forwarded to the frontend
    #[arg(long = "extra-arg")]
    extra_args: Vec<String>,

    /// Print the layout as JSON instead of a text tree
    #[arg(long)]
    json: bool,

    /// Write the layout as JSON to this file as well
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Include padding statistics
    #[arg(long)]
    stats: bool,

    #[arg(long)]
    no_color: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    init_logging(args.verbose);

    let mut config = Config::new()
        .with_input_file(args.input)
        .with_position(args.line, args.column)
        .with_extra_args(args.extra_args);
    config.format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    config.output_file = args.output;
    config.show_statistics = args.stats;
    config.use_color = !args.no_color;

    if let Err(e) = config.validate() {
        eprintln!("{} Invalid arguments: {}", "[!]".red(), e);
        std::process::exit(2);
    }

    println!(
        "{} Inspecting {} at {}:{}",
        "[*]".blue(),
        config.input_file.display(),
        config.row,
        config.col
    );

    let engine = QueryEngine::new(JsonFrontend::new());
    let request = QueryRequest::new(
        config.input_file.clone(),
        SourcePos::new(config.row, config.col),
    )
    .with_extra_args(config.extra_args.clone());

    let outcome = match engine.run(&request) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("{} {}", "[!]".red(), e);
            std::process::exit(1);
        }
    };

    let tree = match outcome {
        QueryOutcome::Found(tree) => tree,
        QueryOutcome::NotFound => {
            println!("{} {}", "[!]".yellow(), QueryOutcome::NotFound);
            std::process::exit(1);
        }
    };

    println!(
        "{} Found {} ({} bytes, {} nodes)",
        "[+]".green(),
        tree.type_name,
        tree.size,
        tree.node_count()
    );
    println!();

    match config.format {
        OutputFormat::Text => {
            print!(
                "{}",
                TextRenderer::new().with_color(config.use_color).render(&tree)
            );
        }
        OutputFormat::Json => {
            let mut renderer = JsonRenderer::new().with_pretty_print(config.pretty_json);
            if config.show_statistics {
                renderer = renderer.with_statistics();
            }
            match renderer.render(&tree) {
                Ok(text) => println!("{}", text),
                Err(e) => {
                    eprintln!("{} Failed to serialize layout: {}", "[!]".red(), e);
                    std::process::exit(1);
                }
            }
        }
    }

    if config.show_statistics && config.format == OutputFormat::Text {
        let stats = LayoutStats::collect(&tree);
        println!();
        println!(
            "{} Padding: {} bytes ({:.1}%)",
            "[*]".blue(),
            stats.total_padding(),
            stats.padding_percentage()
        );
        for (offset, size) in &stats.padding {
            println!("    0x{:04X}  {} bytes", offset, size);
        }
    }

    if let Some(path) = &config.output_file {
        if let Err(e) = write_output(&config, &tree, path) {
            eprintln!("{} {:#}", "[!]".red(), e);
            std::process::exit(1);
        }
        println!("{} Layout saved to: {}", "[+]".green(), path.display());
    }
}

fn write_output(
    config: &Config,
    tree: &cpp_layout_inspector::LayoutNode,
    path: &std::path::Path,
) -> anyhow::Result<()> {
    let mut renderer = JsonRenderer::new().with_pretty_print(config.pretty_json);
    if config.show_statistics {
        renderer = renderer.with_statistics();
    }
    renderer
        .save_to_file(tree, path)
        .with_context(|| format!("failed to save layout to {}", path.display()))
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
