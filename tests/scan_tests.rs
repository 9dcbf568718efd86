// Copyright (c) 2025 Paperfolio contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use paperfolio::commands::scan;
use paperfolio::{cli, store};
use tempfile::tempdir;

// Two transaction blocks wrapped in statement boilerplate, split over
// two pages by a form feed. The second block omits the execution time.
const STATEMENT: &str = "\
Account Statement
Period: January 2025
VTI
Vanguard Total Stock Market ETF
REF 123456
Buy
10:31:02
10
100
01/06/2025
01/08/2025
Agent\u{0C}Page 2 of 2
VTI
Vanguard Total Stock Market ETF
REF 123457
Buy
20
130
01/21/2025
01/23/2025
Agent
End of statement
";

#[test]
fn scan_directory_extracts_across_pages_and_files() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("jan.txt"), STATEMENT).unwrap();
    std::fs::write(dir.path().join("notes.md"), "not a statement").unwrap();

    let records = scan::scan_directory(dir.path()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].execution_time.as_deref(), Some("10:31:02"));
    assert_eq!(records[0].quantity, 10.0);
    assert_eq!(records[1].execution_time, None);
    assert_eq!(records[1].price, 130.0);
    assert!(records.iter().all(|r| r.source_file == "jan.txt"));
}

#[test]
fn scan_command_writes_consolidated_csv() {
    let dir = tempdir().unwrap();
    let docs = dir.path().join("statements");
    std::fs::create_dir(&docs).unwrap();
    std::fs::write(docs.join("jan.txt"), STATEMENT).unwrap();
    let out = dir.path().join("consolidated.csv");

    let matches = cli::build_cli().get_matches_from([
        "paperfolio",
        "scan",
        "--dir",
        docs.to_string_lossy().as_ref(),
        "--out",
        out.to_string_lossy().as_ref(),
    ]);
    let Some(("scan", scan_m)) = matches.subcommand() else {
        panic!("no scan subcommand");
    };
    scan::handle(scan_m).unwrap();

    let summaries = store::read_summaries(&out).unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].symbol, "VTI");
    assert!((summaries[0].total_quantity - 30.0).abs() < 1e-9);
    // (10*100 + 20*130) / 30
    assert!((summaries[0].weighted_average_price - 120.0).abs() < 1e-9);
}

#[test]
fn scan_of_empty_directory_writes_header_only_csv() {
    let dir = tempdir().unwrap();
    let docs = dir.path().join("statements");
    std::fs::create_dir(&docs).unwrap();
    let out = dir.path().join("consolidated.csv");

    let matches = cli::build_cli().get_matches_from([
        "paperfolio",
        "scan",
        "--dir",
        docs.to_string_lossy().as_ref(),
        "--out",
        out.to_string_lossy().as_ref(),
    ]);
    let Some(("scan", scan_m)) = matches.subcommand() else {
        panic!("no scan subcommand");
    };
    scan::handle(scan_m).unwrap();

    let contents = std::fs::read_to_string(&out).unwrap();
    assert_eq!(
        contents.lines().collect::<Vec<_>>(),
        vec!["Symbol,Total Quantity,Weighted Average Price"]
    );
}

#[test]
fn scan_of_missing_directory_is_an_error() {
    let dir = tempdir().unwrap();
    assert!(scan::scan_directory(&dir.path().join("nope")).is_err());
}

#[test]
fn documents_are_processed_in_file_name_order() {
    let dir = tempdir().unwrap();
    let block = |symbol: &str| {
        format!(
            "{symbol}\n{symbol} Corp\nREF 1\nBuy\n1\n50\n01/06/2025\n01/08/2025\nAgent\n"
        )
    };
    std::fs::write(dir.path().join("b.txt"), block("BBB")).unwrap();
    std::fs::write(dir.path().join("a.txt"), block("AAA")).unwrap();

    let records = scan::scan_directory(dir.path()).unwrap();
    let sources: Vec<_> = records.iter().map(|r| r.source_file.as_str()).collect();
    assert_eq!(sources, vec!["a.txt", "b.txt"]);
}
