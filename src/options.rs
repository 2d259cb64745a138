//! Parsing Options.
//! `edgeprune [INPUT] -e {scan|frontier|kruskal} -f {text|json|ron} ...`

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

use crate::mst::EngineKind;
use crate::report::ReportFormat;

fn make_options_parser() -> clap::Command {
    Command::new("edgeprune")
        .no_binary_name(true)
        .version("v0.1.0")
        .about("Reports how much a weighted network saves when reduced to its minimum spanning tree")
        .arg(
            Arg::new("input")
                .value_name("FILE")
                .help("Comma separated adjacency matrix, one row per line"),
        )
        .arg(
            Arg::new("engine")
                .short('e')
                .long("engine")
                .help("Spanning tree engine")
                .value_parser(EngineKind::NAMES),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help("Report format")
                .value_parser(ReportFormat::NAMES),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Write the report to FILE instead of stdout"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("TOML configuration file [default: edgeprune.toml]"),
        )
        .arg(
            Arg::new("dot")
                .long("dot")
                .value_name("FILE")
                .help("Write the spanning tree as a Graphviz file"),
        )
        .arg(
            Arg::new("print-matrix")
                .long("print-matrix")
                .action(ArgAction::SetTrue)
                .help("Print the matrix as read before validating it"),
        )
        .arg(
            Arg::new("trace")
                .short('t')
                .long("trace")
                .action(ArgAction::SetTrue)
                .help("Include the accepted edges in the report"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .help("Reject matrices whose weights are not symmetric"),
        )
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Options {
    pub input: Option<PathBuf>,
    pub engine: Option<EngineKind>,
    pub format: Option<ReportFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub dot: Option<PathBuf>,
    pub print_matrix: bool,
    pub trace: bool,
    pub strict: bool,
}

impl Options {
    pub fn parse_from_str(s: &str) -> Result<Self> {
        let flags = shellwords::split(s)?;
        Self::parse_from_args(&flags)
    }

    pub fn parse_from_args(flags: &[String]) -> Result<Self> {
        let app = make_options_parser();
        let matches = app.try_get_matches_from(flags.iter())?;

        let engine = match matches.get_one::<String>("engine") {
            Some(name) => Some(name.parse::<EngineKind>()?),
            None => None,
        };
        let format = match matches.get_one::<String>("format") {
            Some(name) => Some(name.parse::<ReportFormat>().map_err(anyhow::Error::msg)?),
            None => None,
        };

        Ok(Options {
            input: path_arg(&matches, "input"),
            engine,
            format,
            output: path_arg(&matches, "output"),
            config: path_arg(&matches, "config"),
            dot: path_arg(&matches, "dot"),
            print_matrix: matches.get_flag("print-matrix"),
            trace: matches.get_flag("trace"),
            strict: matches.get_flag("strict"),
        })
    }

    /// Layers `later` on top of `self`: values set in `later` win, flags
    /// accumulate.
    pub fn overlay(self, later: Options) -> Options {
        Options {
            input: later.input.or(self.input),
            engine: later.engine.or(self.engine),
            format: later.format.or(self.format),
            output: later.output.or(self.output),
            config: later.config.or(self.config),
            dot: later.dot.or(self.dot),
            print_matrix: self.print_matrix || later.print_matrix,
            trace: self.trace || later.trace,
            strict: self.strict || later.strict,
        }
    }
}

fn path_arg(matches: &ArgMatches, id: &str) -> Option<PathBuf> {
    matches.get_one::<String>(id).map(PathBuf::from)
}
