//! End-to-end runs over JSON sheet exports on disk.

use std::fs;
use std::path::PathBuf;

use callwork_lib::cli::{OutputArgs, OutputFormat};
use callwork_lib::commands::{analyze_batch, analyze_file};
use callwork_lib::settings::{Settings, SettingsStore};
use tempfile::TempDir;

fn write_day(dir: &TempDir, name: &str, date: &str, outbound_length: &str) -> PathBuf {
    let rows = serde_json::json!([
        {
            "Call Start Time": format!("{date} 08:00:00"),
            "Call Length": outbound_length,
            "Call Direction": "Outbound",
            "Result": "Connected",
            "To Number": "+15550100"
        },
        {
            "Call Start Time": format!("{date} 09:00:00"),
            "Call Length": "00:05:00",
            "Call Direction": "Inbound",
            "Result": "Connected",
            "From Number": "+15550199"
        }
    ]);
    let path = dir.path().join(name);
    fs::write(&path, rows.to_string()).unwrap();
    path
}

fn json_output() -> OutputArgs {
    OutputArgs {
        sheet: None,
        format: OutputFormat::Json,
    }
}

#[test]
fn batch_summary_over_three_days() {
    let dir = tempfile::tempdir().unwrap();
    let paths = vec![
        write_day(&dir, "wed.json", "2024-03-06", "06:30:00"),
        write_day(&dir, "mon.json", "2024-03-04", "07:30:00"),
        write_day(&dir, "tue.json", "2024-03-05", "08:00:00"),
    ];

    let output = analyze_batch(&paths, &json_output(), &Settings::default()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(report["summary"]["fileCount"], 3);
    assert_eq!(report["summary"]["totalWorkHours"], 22.0);
    let avg = report["summary"]["avgWorkHoursPerDay"].as_f64().unwrap();
    assert!((avg - 22.0 / 3.0).abs() < 1e-12);

    let dates: Vec<&str> = report["days"]
        .as_array()
        .unwrap()
        .iter()
        .map(|day| day["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2024-03-04", "2024-03-05", "2024-03-06"]);
}

#[test]
fn workbook_sheet_selection_follows_settings() {
    let dir = tempfile::tempdir().unwrap();
    let workbook = serde_json::json!({
        "sheets": [
            {"name": "Calls", "rows": [{
                "Call Start Time": "2024-03-04 08:00:00",
                "Call Length": "01:00:00",
                "Call Direction": "Outbound",
                "Result": "Connected"
            }]},
            {"name": "Notes", "rows": [{"Note": "nothing here"}]}
        ]
    });
    let path = dir.path().join("workbook.json");
    fs::write(&path, workbook.to_string()).unwrap();

    // The default picks the second sheet, which has no calls.
    assert!(analyze_file(&path, &json_output(), &Settings::default()).is_err());

    let config_path = dir.path().join("callwork.json");
    fs::write(&config_path, r#"{"sheet": {"index": 0}}"#).unwrap();
    let settings = SettingsStore::new(config_path).unwrap().settings().clone();

    let output = analyze_file(&path, &json_output(), &settings).unwrap();
    let day: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(day["actualWorkSecs"], 3600.0);
    assert_eq!(day["outboundCalls"], 1);
}

#[test]
fn text_report_lists_idle_periods_and_numbers() {
    let dir = tempfile::tempdir().unwrap();
    let rows = serde_json::json!([
        {"Call Start Time": 45355.375, "Call Length": 0.000694444444444444,
         "Call Direction": "Outbound", "Result": "Connected", "To Number": "+15550100"},
        {"Call Start Time": "2024-03-04 09:10:00", "Call Length": "00:02:00",
         "Call Direction": "Inbound", "Result": "Connected", "From Number": "+15550199"},
        {"Call Start Time": "2024-03-04 09:30:00", "Call Length": "00:01:00",
         "Call Direction": "Outbound", "Result": "Voicemail"}
    ]);
    let path = dir.path().join("day.json");
    fs::write(&path, rows.to_string()).unwrap();

    let output = analyze_file(
        &path,
        &OutputArgs {
            sheet: None,
            format: OutputFormat::Text,
        },
        &Settings::default(),
    )
    .unwrap();

    // 09:01 -> 09:30 is 29 minutes, 2 of them on an inbound call.
    assert!(output.contains("09:01:00 - 09:30:00  gap 00:29:00  inbound 00:02:00  idle 00:27:00"));
    assert!(output.contains("+15550100"));
    assert!(output.contains("+15550199"));
    assert!(output.contains("Actual work time:  00:31:00"));
}
