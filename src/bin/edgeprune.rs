use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::debug;

use edgeprune::config::{DEFAULT_CONFIG_FILE, EdgeConfig};
use edgeprune::graph::Graph;
use edgeprune::input::MatrixReader;
use edgeprune::options::Options;
use edgeprune::report::Reduction;

fn main() {
    if std::env::var("EDGEPRUNE_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("EDGEPRUNE_LOG")
            .write_style("EDGEPRUNE_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    if let Err(err) = run() {
        if let Some(clap_err) = err.downcast_ref::<clap::Error>() {
            clap_err.exit();
        }
        eprintln!("edgeprune: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let from_env = Options::parse_from_str(&std::env::var("EDGEPRUNE_FLAGS").unwrap_or_default())
        .context("Invalid EDGEPRUNE_FLAGS")?;
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let options = from_env.overlay(Options::parse_from_args(&args)?);
    debug!("edgeprune options: {:?}", options);

    let mut config = match &options.config {
        Some(path) => EdgeConfig::load_required(path)?,
        None => EdgeConfig::load_from_file(PathBuf::from(DEFAULT_CONFIG_FILE))?,
    };
    config.apply(&options);
    debug!("effective configuration: {:?}", config);

    let raw = MatrixReader::new(config.placeholders.clone()).read_path(&config.input)?;
    if config.print_matrix {
        print!("{raw}");
    }

    let graph = if config.strict {
        Graph::new_strict(raw)?
    } else {
        Graph::new(raw)?
    };

    let (mut reduction, tree) = Reduction::compute(&graph, config.engine)?;
    if config.trace {
        reduction = reduction.with_trace(&tree);
    }

    match &options.output {
        Some(path) => {
            config
                .format
                .write(path, &reduction)
                .with_context(|| format!("Failed to write report to {:?}", path))?;
            println!("Report saved to {:?}", path);
        }
        None => print!("{}", config.format.render(&reduction)?),
    }

    if let Some(path) = &options.dot {
        fs::write(path, tree.to_dot())
            .with_context(|| format!("Failed to write DOT file {:?}", path))?;
        println!("DOT representation saved to {:?}", path);
    }

    Ok(())
}
