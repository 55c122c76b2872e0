// cleantext-core/tests/headless_tests.rs
//
// Kept to a single test: it changes the process working directory, which
// would race with any other test in the same binary.
use anyhow::Result;
use tempfile::tempdir;

use cleantext_core::{parse_token_list, stop_and_stem, stop_clean, Cell, Dataset, DEFAULT_OUTPUT_FILE};

fn sample() -> Dataset {
    let mut dataset = Dataset::new(vec!["id".to_string(), "message".to_string()]);
    dataset.push_row(vec![Cell::from("1"), Cell::from("Hi, the runners were running!")]);
    dataset.push_row(vec![Cell::from("2"), Cell::Missing]);
    dataset
}

fn written_messages() -> Result<Vec<Vec<String>>> {
    let mut reader = csv::Reader::from_path(DEFAULT_OUTPUT_FILE)?;
    Ok(reader
        .records()
        .map(|r| parse_token_list(&r.unwrap()[1]).unwrap())
        .collect())
}

#[test]
fn stop_clean_and_stop_and_stem_write_clean_csv_in_working_directory() -> Result<()> {
    let dir = tempdir()?;
    std::env::set_current_dir(dir.path())?;

    let mut dataset = sample();
    let report = stop_clean(&mut dataset, "message")?;
    assert_eq!(report.rows, 2);
    assert_eq!(
        written_messages()?,
        vec![vec!["runners".to_string(), "running".to_string()], Vec::new()]
    );

    let mut dataset = sample();
    stop_and_stem(&mut dataset, "message")?;
    assert_eq!(
        written_messages()?,
        vec![vec!["runner".to_string(), "run".to_string()], Vec::new()]
    );
    assert_eq!(std::fs::read_to_string(DEFAULT_OUTPUT_FILE)?.lines().count(), 3);
    Ok(())
}
