// Copyright (c) 2025 Paperfolio contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{arg, value_parser, Command};

pub fn build_cli() -> Command {
    Command::new("paperfolio")
        .about("Brokerage statement extraction, per-symbol consolidation, and live tracking")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(
            Command::new("scan")
                .about("Extract trades from statement documents and consolidate by symbol")
                .arg(
                    arg!(--dir <DIR> "Directory containing statement .txt documents")
                        .required(false)
                        .default_value("./statements"),
                )
                .arg(
                    arg!(--out <FILE> "Path for the consolidated CSV")
                        .required(false)
                        .default_value("consolidated_by_symbol.csv"),
                )
                .arg(arg!(--json "Print extracted records as pretty JSON"))
                .arg(arg!(--jsonl "Print extracted records as JSON lines")),
        )
        .subcommand(
            Command::new("watch")
                .about("Poll market prices and render a live performance table")
                .arg(
                    arg!(--file <FILE> "Consolidated CSV to track")
                        .required(false)
                        .default_value("consolidated_by_symbol.csv"),
                )
                .arg(
                    arg!(--interval <SECS> "Polling interval in seconds")
                        .required(false)
                        .value_parser(value_parser!(u64))
                        .default_value("60"),
                )
                .arg(arg!(--once "Render a single table and exit")),
        )
}
