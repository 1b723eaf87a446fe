use std::io::Write;
use std::process::Command;
use tempfile::{tempdir, NamedTempFile};

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_stock_trend"))
}

#[test]
fn test_missing_input_file_exits_one_with_io_error() {
    let output = binary()
        .args(["-i", "no/such/file.csv"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("IO error:"),
        "stderr was: {stderr:?}"
    );
}

#[test]
fn test_bad_window_string_exits_one_with_parse_error() {
    let output = binary()
        .args(["-i", "irrelevant.csv", "-l", "fourw"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Parse error:"),
        "stderr was: {stderr:?}"
    );
}

#[test]
fn test_malformed_date_exits_one_with_parse_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Date,Open,High,Low,Close,Volume").unwrap();
    writeln!(file, "2015-01-01,1,1,1,99.0,1000").unwrap();

    let output = binary()
        .arg("-i")
        .arg(file.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Parse error:"),
        "stderr was: {stderr:?}"
    );
}

#[test]
fn test_valid_input_writes_chart_and_exits_zero() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Date,Open,High,Low,Close,Volume").unwrap();
    for day in 1..=28 {
        writeln!(file, "{day:02}-Jan-15,1,1,1,{}.0,1000", 100 + day).unwrap();
    }

    let dir = tempdir().unwrap();
    let chart_path = dir.path().join("chart.svg");

    // Default "4w"/"2w" windows
    let output = binary()
        .arg("-i")
        .arg(file.path())
        .arg("-o")
        .arg(&chart_path)
        .output()
        .unwrap();

    let stderr = String::from_utf8_lossy(&output.stderr);
    if output.status.success() {
        let meta = std::fs::metadata(&chart_path).unwrap();
        assert!(meta.len() > 0, "chart file is empty");
    } else {
        // Hosts without any installed fonts cannot lay out axis labels
        assert_eq!(output.status.code(), Some(1));
        assert!(
            stderr.contains("Chart error:") && stderr.to_lowercase().contains("font"),
            "stderr was: {stderr:?}"
        );
    }
}
