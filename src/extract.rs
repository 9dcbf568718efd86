// Copyright (c) 2025 Paperfolio contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::TradeRecord;

static TICKER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{1,5}$").unwrap());

/// Default anchor heuristic: a line that is nothing but 1-5 uppercase
/// letters is assumed to start a transaction block.
///
/// This is a guess, not a ticker lookup. Any short uppercase word in
/// boilerplate can anchor a candidate; bogus candidates are rejected
/// later when their quantity/price lines fail to parse as numbers.
pub fn default_anchor(line: &str) -> bool {
    TICKER_RE.is_match(line)
}

/// The two recognized transaction block layouts. Statements print an
/// execution time for market orders and omit it otherwise, shifting
/// every following field up by one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    WithExecutionTime,
    WithoutExecutionTime,
}

/// Line offsets of the numeric and trailing fields, relative to the
/// anchor line.
#[derive(Debug, Clone, Copy)]
pub struct Offsets {
    pub quantity: usize,
    pub price: usize,
    pub trade_date: usize,
    pub settle_date: usize,
    pub capacity: usize,
}

impl Shape {
    /// Discriminate by the line four past the anchor: an execution time
    /// ("HH:MM:SS") carries a colon, a bare quantity does not.
    pub fn detect(line: &str) -> Shape {
        if line.contains(':') {
            Shape::WithExecutionTime
        } else {
            Shape::WithoutExecutionTime
        }
    }

    /// Total lines a block of this shape occupies, anchor included.
    pub fn line_count(self) -> usize {
        match self {
            Shape::WithExecutionTime => 10,
            Shape::WithoutExecutionTime => 9,
        }
    }

    pub fn offsets(self) -> Offsets {
        match self {
            Shape::WithExecutionTime => Offsets {
                quantity: 5,
                price: 6,
                trade_date: 7,
                settle_date: 8,
                capacity: 9,
            },
            Shape::WithoutExecutionTime => Offsets {
                quantity: 4,
                price: 5,
                trade_date: 6,
                settle_date: 7,
                capacity: 8,
            },
        }
    }
}

/// Single forward pass over one statement page, yielding a `TradeRecord`
/// for every anchor whose fixed-shape parse succeeds.
///
/// Rejected candidates follow the skip-and-resume policy: the scanner
/// advances by exactly one line (not the full shape width) so that a
/// real transaction starting one line later is still found, and nothing
/// is reported. Partial corruption of a page must never abort the scan.
pub struct Scanner<'a, F = fn(&str) -> bool> {
    lines: &'a [String],
    source_file: &'a str,
    cursor: usize,
    is_anchor: F,
}

impl<'a> Scanner<'a> {
    pub fn new(lines: &'a [String], source_file: &'a str) -> Self {
        Scanner::with_anchor(lines, source_file, default_anchor)
    }
}

impl<'a, F: Fn(&str) -> bool> Scanner<'a, F> {
    /// Scan with a custom anchor predicate, for callers that want a
    /// tighter (or looser) ticker heuristic.
    pub fn with_anchor(lines: &'a [String], source_file: &'a str, is_anchor: F) -> Self {
        Scanner {
            lines,
            source_file,
            cursor: 0,
            is_anchor,
        }
    }

    /// Fixed-shape parse rooted at the anchor line `i`. Returns the
    /// record and the block width, or `None` if any referenced line is
    /// out of range or quantity/price is not a number.
    fn parse_candidate(&self, i: usize) -> Option<(TradeRecord, usize)> {
        let line = |off: usize| self.lines.get(i + off).map(String::as_str);

        let symbol = line(0)?;
        let company = line(1)?;
        // line i+2 is the trade reference, not carried on the record
        let action = line(3)?;

        let shape = Shape::detect(line(4)?);
        let off = shape.offsets();
        let execution_time = match shape {
            Shape::WithExecutionTime => Some(line(4)?.to_string()),
            Shape::WithoutExecutionTime => None,
        };
        let quantity: f64 = line(off.quantity)?.trim().parse().ok()?;
        let price: f64 = line(off.price)?.trim().parse().ok()?;

        let record = TradeRecord {
            symbol: symbol.to_string(),
            company: company.to_string(),
            action: action.to_string(),
            execution_time,
            quantity,
            price,
            trade_date: line(off.trade_date)?.to_string(),
            settle_date: line(off.settle_date)?.to_string(),
            capacity: line(off.capacity)?.to_string(),
            source_file: self.source_file.to_string(),
        };
        Some((record, shape.line_count()))
    }
}

impl<'a, F: Fn(&str) -> bool> Iterator for Scanner<'a, F> {
    type Item = TradeRecord;

    fn next(&mut self) -> Option<TradeRecord> {
        while self.cursor < self.lines.len() {
            let i = self.cursor;
            if (self.is_anchor)(&self.lines[i]) {
                if let Some((record, width)) = self.parse_candidate(i) {
                    self.cursor = i + width;
                    return Some(record);
                }
            }
            self.cursor = i + 1;
        }
        None
    }
}
