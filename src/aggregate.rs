// Copyright (c) 2025 Paperfolio contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use crate::models::{SymbolSummary, TradeRecord};

/// Consolidate extracted trades into one summary per symbol: total
/// quantity and the quantity-weighted average price.
///
/// Output is sorted by symbol. Symbols whose quantities net to zero or
/// below are excluded outright; emitting them would either divide by
/// zero or break the positive-quantity invariant on `SymbolSummary`.
pub fn consolidate(records: &[TradeRecord]) -> Vec<SymbolSummary> {
    let mut groups: BTreeMap<&str, (f64, f64)> = BTreeMap::new();
    for record in records {
        let (qty, notional) = groups.entry(record.symbol.as_str()).or_insert((0.0, 0.0));
        *qty += record.quantity;
        *notional += record.price * record.quantity;
    }

    groups
        .into_iter()
        .filter(|&(_, (qty, _))| qty > 0.0)
        .map(|(symbol, (qty, notional))| SymbolSummary {
            symbol: symbol.to_string(),
            total_quantity: qty,
            weighted_average_price: notional / qty,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(symbol: &str, quantity: f64, price: f64) -> TradeRecord {
        TradeRecord {
            symbol: symbol.to_string(),
            company: format!("{symbol} Corp"),
            action: "Buy".to_string(),
            execution_time: None,
            quantity,
            price,
            trade_date: "01/06/2025".to_string(),
            settle_date: "01/08/2025".to_string(),
            capacity: "Agent".to_string(),
            source_file: "jan.txt".to_string(),
        }
    }

    #[test]
    fn weighted_average_across_trades() {
        let records = vec![record("AAA", 10.0, 100.0), record("AAA", 20.0, 130.0)];
        let summaries = consolidate(&records);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].symbol, "AAA");
        assert_eq!(summaries[0].total_quantity, 30.0);
        assert!((summaries[0].weighted_average_price - 120.0).abs() < 1e-9);
    }

    #[test]
    fn output_is_sorted_by_symbol() {
        let records = vec![
            record("MSFT", 1.0, 400.0),
            record("AAPL", 1.0, 190.0),
            record("VTI", 1.0, 220.0),
        ];
        let symbols: Vec<_> = consolidate(&records).into_iter().map(|s| s.symbol).collect();
        assert_eq!(symbols, vec!["AAPL", "MSFT", "VTI"]);
    }

    #[test]
    fn non_positive_totals_are_excluded() {
        let records = vec![
            record("GONE", 5.0, 100.0),
            record("GONE", -5.0, 110.0),
            record("SHORT", -2.0, 50.0),
            record("KEPT", 1.0, 10.0),
        ];
        let summaries = consolidate(&records);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].symbol, "KEPT");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(consolidate(&[]).is_empty());
    }

    #[test]
    fn consolidation_is_idempotent() {
        let records = vec![
            record("AAA", 10.0, 100.0),
            record("BBB", 3.5, 42.0),
            record("AAA", 20.0, 130.0),
        ];
        let first = consolidate(&records);
        let second = consolidate(&records);
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.symbol, b.symbol);
            assert_eq!(a.total_quantity, b.total_quantity);
            assert_eq!(a.weighted_average_price, b.weighted_average_price);
        }
    }
}
