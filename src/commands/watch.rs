// Copyright (c) 2025 Paperfolio contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::Utc;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use serde::Deserialize;

use crate::models::SymbolSummary;
use crate::store;
use crate::utils::http_client;

const MAX_RUNTIME: Duration = Duration::from_secs(9 * 3600);

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let file = m.get_one::<String>("file").unwrap();
    let interval = *m.get_one::<u64>("interval").unwrap();
    let once = m.get_flag("once");

    let summaries = store::read_summaries(Path::new(file))?;
    if summaries.is_empty() {
        println!("No positions in {}", file);
        return Ok(());
    }

    let client = http_client()?;
    let started = Instant::now();
    loop {
        render(&client, &summaries, interval);
        if once {
            break;
        }
        if started.elapsed() >= MAX_RUNTIME {
            println!("Maximum watch runtime reached. Exiting.");
            break;
        }
        std::thread::sleep(Duration::from_secs(interval));
    }
    Ok(())
}

fn render(client: &reqwest::blocking::Client, summaries: &[SymbolSummary], interval: u64) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header([
        "Symbol",
        "Qty",
        "Avg Price",
        "Current Price",
        "Last Day %",
        "Last Day $",
        "Last Week %",
        "Last Week $",
        "Last Month %",
        "Last Month $",
        "Total Asset",
    ]);

    let mut totals = Totals::default();
    for s in summaries {
        let perf = match fetch_closes(client, &s.symbol) {
            Ok(closes) => performance(&closes, s.total_quantity),
            Err(err) => {
                eprintln!("Price fetch failed for {}: {err:#}", s.symbol);
                None
            }
        };

        match perf {
            Some(p) => {
                totals.add(&p);
                table.add_row([
                    Cell::new(&s.symbol),
                    Cell::new(format!("{:.2}", s.total_quantity)),
                    Cell::new(format!("${:.2}", s.weighted_average_price)),
                    Cell::new(format!("${:.2}", p.current_price)),
                    pct_cell(p.day.percent),
                    money_cell(p.day.dollars),
                    pct_cell(p.week.percent),
                    money_cell(p.week.dollars),
                    pct_cell(p.month.percent),
                    money_cell(p.month.dollars),
                    money_cell(p.market_value),
                ]);
            }
            None => {
                let mut row = vec![
                    Cell::new(&s.symbol),
                    Cell::new(format!("{:.2}", s.total_quantity)),
                    Cell::new(format!("${:.2}", s.weighted_average_price)),
                ];
                row.extend((0..8).map(|_| Cell::new("N/A")));
                table.add_row(row);
            }
        }
    }

    let mut total_row = vec![Cell::new("TOTAL"), Cell::new(""), Cell::new(""), Cell::new("")];
    total_row.extend([
        pct_cell(totals.weighted_pct_day()),
        money_cell(totals.day_dollars),
        pct_cell(totals.weighted_pct_week()),
        money_cell(totals.week_dollars),
        pct_cell(totals.weighted_pct_month()),
        money_cell(totals.month_dollars),
        money_cell(totals.market_value),
    ]);
    table.add_row(total_row);

    println!(
        "\nStock performance as of {} (refreshing every {}s)",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
        interval
    );
    println!("{table}");
}

fn money_cell(v: f64) -> Cell {
    let color = if v >= 0.0 { Color::Green } else { Color::Red };
    Cell::new(format!("${v:.2}")).fg(color)
}

fn pct_cell(v: f64) -> Cell {
    let color = if v >= 0.0 { Color::Green } else { Color::Red };
    Cell::new(format!("{v:.2}%")).fg(color)
}

/// Price move over one lookback window, scaled to the held quantity.
#[derive(Debug, Clone, Copy, Default)]
struct PriceMove {
    percent: f64,
    dollars: f64,
}

#[derive(Debug, Clone, Copy)]
struct Performance {
    current_price: f64,
    day: PriceMove,
    week: PriceMove,
    month: PriceMove,
    market_value: f64,
}

/// Derive day/week/month performance from a month of daily closes.
/// Windows the series is too short for report as flat, matching how a
/// freshly listed symbol should read. Empty series means no quote.
fn performance(closes: &[f64], quantity: f64) -> Option<Performance> {
    let current = *closes.last()?;
    let move_against = |baseline: f64| PriceMove {
        percent: ((current - baseline) / baseline) * 100.0,
        dollars: (current - baseline) * quantity,
    };
    let lookback = |sessions: usize| {
        if closes.len() > sessions {
            move_against(closes[closes.len() - 1 - sessions])
        } else {
            PriceMove::default()
        }
    };

    Some(Performance {
        current_price: current,
        day: lookback(1),
        week: lookback(5),
        month: if closes.len() > 1 {
            move_against(closes[0])
        } else {
            PriceMove::default()
        },
        market_value: current * quantity,
    })
}

#[derive(Debug, Default)]
struct Totals {
    market_value: f64,
    day_dollars: f64,
    week_dollars: f64,
    month_dollars: f64,
    day_weight: f64,
    week_weight: f64,
    month_weight: f64,
}

impl Totals {
    fn add(&mut self, p: &Performance) {
        self.market_value += p.market_value;
        self.day_dollars += p.day.dollars;
        self.week_dollars += p.week.dollars;
        self.month_dollars += p.month.dollars;
        self.day_weight += p.market_value * p.day.percent;
        self.week_weight += p.market_value * p.week.percent;
        self.month_weight += p.market_value * p.month.percent;
    }

    fn weighted_pct(&self, weight: f64) -> f64 {
        if self.market_value > 0.0 {
            weight / self.market_value
        } else {
            0.0
        }
    }

    fn weighted_pct_day(&self) -> f64 {
        self.weighted_pct(self.day_weight)
    }

    fn weighted_pct_week(&self) -> f64 {
        self.weighted_pct(self.week_weight)
    }

    fn weighted_pct_month(&self) -> f64 {
        self.weighted_pct(self.month_weight)
    }
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}
#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
}
#[derive(Debug, Deserialize)]
struct ChartResult {
    indicators: Indicators,
}
#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteBlock>,
}
#[derive(Debug, Deserialize)]
struct QuoteBlock {
    close: Option<Vec<Option<f64>>>,
}

/// One month of daily closes for `symbol`, oldest first, nulls dropped
/// (Yahoo pads holidays and the in-progress session with null).
fn fetch_closes(client: &reqwest::blocking::Client, symbol: &str) -> Result<Vec<f64>> {
    let url = format!(
        "https://query1.finance.yahoo.com/v8/finance/chart/{}?range=1mo&interval=1d",
        symbol
    );
    let resp = client.get(url).send()?.error_for_status()?;
    let chart: ChartResponse = resp.json()?;

    let result = chart
        .chart
        .result
        .and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0)) })
        .with_context(|| format!("Empty chart result for {}", symbol))?;
    let closes = result
        .indicators
        .quote
        .into_iter()
        .next()
        .and_then(|q| q.close)
        .unwrap_or_default();
    Ok(closes.into_iter().flatten().collect())
}
