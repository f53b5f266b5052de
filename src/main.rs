//! Diplomap -- draws Diplomacy gamestates and orders onto an SVG map.
//!
//! Without a subcommand the binary reads render commands from stdin, one per
//! line, and writes responses to stdout. Logs go to stderr. The `batch`
//! subcommand renders a directory of orders-phase test cases instead.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use diplomap::batch::{render_batch, BatchConfig};
use diplomap::config::RenderConfig;
use diplomap::map::BackgroundMap;
use diplomap::protocol::{
    format_order, load_gamestate, load_orders, load_orders_test, load_text, parse_command,
    parse_standard_orders, Command,
};
use diplomap::render::RenderError;
use diplomap::session::{RenderOutcome, Session};

#[derive(Parser)]
#[command(name = "diplomap")]
#[command(about = "Draws Diplomacy gamestates and orders onto an SVG map", version)]
struct Cli {
    /// Background map SVG the overlay is composited onto
    #[arg(long, global = true)]
    map: Option<PathBuf>,

    /// Renderer configuration JSON
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every *.json orders-phase test case in a directory
    Batch {
        /// Directory holding the test cases
        input: PathBuf,

        /// Directory the SVG files are written to
        output: PathBuf,

        /// Number of worker threads
        #[arg(long, default_value_t = 4)]
        threads: usize,
    },
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("diplomap={}", level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let config = match &cli.config {
        Some(path) => match RenderConfig::load(path) {
            Ok(c) => c,
            Err(e) => {
                error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => RenderConfig::default(),
    };

    let background = match &cli.map {
        Some(path) => match BackgroundMap::load(path) {
            Ok(m) => Some(m),
            Err(e) => {
                error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => None,
    };

    match cli.command {
        Some(Commands::Batch {
            input,
            output,
            threads,
        }) => {
            let batch = BatchConfig {
                input_dir: input,
                output_dir: output,
                threads,
            };
            match render_batch(&batch, &config, background.as_ref()) {
                Ok(report) => {
                    for (path, e) in &report.failed {
                        error!(case = %path.display(), "{}", e);
                    }
                    println!(
                        "rendered {} failed {}",
                        report.rendered.len(),
                        report.failed.len()
                    );
                    if report.failed.is_empty() {
                        ExitCode::SUCCESS
                    } else {
                        ExitCode::FAILURE
                    }
                }
                Err(e) => {
                    error!("{}", e);
                    ExitCode::FAILURE
                }
            }
        }
        None => match run_command_loop(Session::new(config), background.as_ref()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("stdout closed: {}", e);
                ExitCode::FAILURE
            }
        },
    }
}

/// Reads commands from stdin until `quit` or end of input.
fn run_command_loop(mut session: Session, background: Option<&BackgroundMap>) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::IsReady => {
                writeln!(out, "readyok")?;
            }
            Command::Gamestate { path } => {
                let id = session.request();
                match load_gamestate(&path) {
                    Ok(gs) => report(&mut out, session.complete_gamestate(id, &gs))?,
                    Err(e) => {
                        session.fail(id, &e);
                        writeln!(out, "error {}", e)?;
                    }
                }
            }
            Command::OrdersTest { path } => {
                let id = session.request();
                match load_orders_test(&path) {
                    Ok(test) => {
                        info!(name = %test.long_name, "orders-phase test");
                        report(&mut out, session.complete_orders_test(id, &test))?;
                    }
                    Err(e) => {
                        session.fail(id, &e);
                        writeln!(out, "error {}", e)?;
                    }
                }
            }
            Command::Orders { path } => match load_orders(&path) {
                Ok(orders) => report_drawn(&mut out, session.draw_orders(&orders))?,
                Err(e) => {
                    error!("{}", e);
                    writeln!(out, "error {}", e)?;
                }
            },
            Command::Notation { path } => {
                let parsed = load_text(&path)
                    .map_err(|e| e.to_string())
                    .and_then(|text| parse_standard_orders(&text).map_err(|e| e.to_string()));
                match parsed {
                    Ok(orders) => {
                        for order in &orders {
                            debug!(country = %order.country, "{}", format_order(order));
                        }
                        report_drawn(&mut out, session.draw_orders(&orders))?;
                    }
                    Err(e) => {
                        error!("{}", e);
                        writeln!(out, "error {}", e)?;
                    }
                }
            }
            Command::Clear => {
                session.clear();
                writeln!(out, "cleared")?;
            }
            Command::Write { path } => {
                match fs::write(&path, session.document(background)) {
                    Ok(()) => writeln!(out, "written {}", path.display())?,
                    Err(e) => {
                        error!(path = %path.display(), "failed to write: {}", e);
                        writeln!(out, "error {}", e)?;
                    }
                }
            }
            Command::Print => {
                writeln!(out, "{}", session.document(background))?;
            }
            Command::Quit => {
                break;
            }
        }
        out.flush()?;
    }
    out.flush()
}

fn report<W: Write>(out: &mut W, result: Result<RenderOutcome, RenderError>) -> io::Result<()> {
    match result {
        Ok(RenderOutcome::Rendered { primitives }) => writeln!(out, "rendered {}", primitives),
        Ok(RenderOutcome::Stale) => writeln!(out, "stale"),
        Err(e) => {
            error!("{}", e);
            writeln!(out, "error {}", e)
        }
    }
}

fn report_drawn<W: Write>(out: &mut W, result: Result<usize, RenderError>) -> io::Result<()> {
    report(
        out,
        result.map(|primitives| RenderOutcome::Rendered { primitives }),
    )
}
