// Copyright (c) 2025 Paperfolio contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;

use crate::models::SymbolSummary;

pub const SUMMARY_HEADERS: [&str; 3] = ["Symbol", "Total Quantity", "Weighted Average Price"];

/// Persist consolidated summaries. The header row and plain decimal
/// formatting are a stable interface: `watch` and external tooling read
/// this file back.
pub fn write_summaries(path: &Path, summaries: &[SymbolSummary]) -> Result<()> {
    let mut wtr =
        csv::Writer::from_path(path).with_context(|| format!("Create CSV {}", path.display()))?;
    wtr.write_record(SUMMARY_HEADERS)?;
    for s in summaries {
        wtr.write_record([
            s.symbol.as_str(),
            &s.total_quantity.to_string(),
            &s.weighted_average_price.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn read_summaries(path: &Path) -> Result<Vec<SymbolSummary>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path.display()))?;

    let mut summaries = Vec::new();
    for result in rdr.records() {
        let rec = result?;
        let symbol = rec.get(0).context("symbol missing")?.trim().to_string();
        let qty_raw = rec.get(1).context("total quantity missing")?.trim();
        let price_raw = rec
            .get(2)
            .context("weighted average price missing")?
            .trim();
        let total_quantity = qty_raw
            .parse()
            .with_context(|| format!("Invalid quantity '{}' for {}", qty_raw, symbol))?;
        let weighted_average_price = price_raw
            .parse()
            .with_context(|| format!("Invalid price '{}' for {}", price_raw, symbol))?;
        summaries.push(SymbolSummary {
            symbol,
            total_quantity,
            weighted_average_price,
        });
    }
    Ok(summaries)
}
