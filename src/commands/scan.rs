// Copyright (c) 2025 Paperfolio contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use anyhow::Result;

use crate::aggregate::consolidate;
use crate::extract::Scanner;
use crate::models::TradeRecord;
use crate::store;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let dir = Path::new(m.get_one::<String>("dir").unwrap());
    let out = m.get_one::<String>("out").unwrap();
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");

    let records = scan_directory(dir)?;
    if !maybe_print_json(json_flag, jsonl_flag, &records)? {
        print_records(&records);
    }

    let summaries = consolidate(&records);
    if !json_flag && !jsonl_flag {
        let rows = summaries
            .iter()
            .map(|s| {
                vec![
                    s.symbol.clone(),
                    format!("{:.4}", s.total_quantity),
                    format!("{:.2}", s.weighted_average_price),
                ]
            })
            .collect();
        println!("\nConsolidated by symbol:");
        println!(
            "{}",
            pretty_table(&["Symbol", "Total Quantity", "Weighted Average Price"], rows)
        );
    }

    store::write_summaries(Path::new(out), &summaries)?;
    println!("Consolidated data saved to {}", out);
    Ok(())
}

/// Extract every trade from every page of every statement document in
/// `dir`, in file-name order. Documents contribute independent record
/// lists; the concatenation preserves per-document order.
pub fn scan_directory(dir: &Path) -> Result<Vec<TradeRecord>> {
    let mut records = Vec::new();
    for path in crate::source::statement_paths(dir)? {
        let doc = crate::source::load_document(&path)?;
        println!("Processing file: {}", doc.source_file);
        for page in &doc.pages {
            records.extend(Scanner::new(page, &doc.source_file));
        }
    }
    Ok(records)
}

fn print_records(records: &[TradeRecord]) {
    let rows = records
        .iter()
        .map(|r| {
            vec![
                r.symbol.clone(),
                r.company.clone(),
                r.action.clone(),
                r.execution_time.clone().unwrap_or_default(),
                format!("{:.4}", r.quantity),
                format!("{:.2}", r.price),
                r.trade_date.clone(),
                r.settle_date.clone(),
                r.capacity.clone(),
                r.source_file.clone(),
            ]
        })
        .collect();
    println!("\nExtracted trades:");
    println!(
        "{}",
        pretty_table(
            &[
                "Symbol",
                "Company",
                "Action",
                "Exec Time",
                "Qty",
                "Price",
                "Trade Date",
                "Settle Date",
                "Capacity",
                "Source",
            ],
            rows
        )
    );
}
