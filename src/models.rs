// Copyright (c) 2025 Paperfolio contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::{Deserialize, Serialize};

/// One trade recovered from a brokerage statement page.
///
/// Text fields are carried verbatim from the statement; only `quantity`
/// and `price` are required to parse numerically before a record exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeRecord {
    pub symbol: String,
    pub company: String,
    pub action: String,
    pub execution_time: Option<String>,
    pub quantity: f64,
    pub price: f64,
    pub trade_date: String,
    pub settle_date: String,
    pub capacity: String,
    pub source_file: String,
}

/// Per-symbol consolidation of all extracted trades.
///
/// `total_quantity` is always positive: symbols netting to zero or below
/// are dropped during aggregation rather than emitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolSummary {
    pub symbol: String,
    pub total_quantity: f64,
    pub weighted_average_price: f64,
}
