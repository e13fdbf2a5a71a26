//! Unit tests for the pure rastime modules
//!
//! These cover date parsing, output file name derivation, command execution
//! and error formatting without touching any raster file.

use std::path::Path;

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use rastime::{
    command::run_command,
    dates::{string_to_date, string_to_date_at},
    errors::RastimeError,
    paths::generate_output_fname,
};

fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_time(NaiveTime::MIN)
}

#[test]
fn test_string_to_date_iso_layout() {
    let date = string_to_date("2002-05-28").expect("ISO date should parse");
    assert_eq!(date, midnight(2002, 5, 28));
}

#[test]
fn test_string_to_date_verbose_layout() {
    let date = string_to_date("January 1, 2001").expect("verbose date should parse");
    assert_eq!(date, midnight(2001, 1, 1));

    // Case and whitespace are ignored
    let date = string_to_date("  DECEMBER  31,2019 ").expect("verbose date should parse");
    assert_eq!(date, midnight(2019, 12, 31));
}

#[test]
fn test_string_to_date_present_uses_wall_clock() {
    let before = Local::now().naive_local();
    let date = string_to_date("Present").expect("'Present' should parse");
    let after = Local::now().naive_local();

    assert!(date >= before && date <= after);
}

#[test]
fn test_string_to_date_at_pins_present() {
    let pinned = midnight(2010, 6, 15);
    let date = string_to_date_at("present", pinned).expect("'present' should parse");
    assert_eq!(date, pinned);

    // The pinned clock only affects 'present'
    let date = string_to_date_at("2002-05-28", pinned).expect("ISO date should parse");
    assert_eq!(date, midnight(2002, 5, 28));
}

#[test]
fn test_string_to_date_rejects_unknown_layouts() {
    let err = string_to_date("not-a-date").expect_err("garbage should not parse");

    match &err {
        RastimeError::DateParse { input, attempts } => {
            assert_eq!(input, "not-a-date");
            assert_eq!(attempts.len(), 2);
            // ISO attempt comes first
            assert_eq!(attempts[0].0, "%Y-%m-%d");
        }
        other => panic!("expected DateParse error, got {:?}", other),
    }

    // The rendered message leads with the ISO layout's diagnostic
    let msg = format!("{}", err);
    assert!(msg.contains("not-a-date"));
    let iso_pos = msg.find("%Y-%m-%d").expect("ISO layout in message");
    let verbose_pos = msg.find("%B%d,%Y").expect("verbose layout in message");
    assert!(iso_pos < verbose_pos);
}

#[test]
fn test_string_to_date_rejects_time_suffix() {
    // Only the three documented layouts are accepted
    assert!(string_to_date("2002-05-28T12:00:00").is_err());
    assert!(string_to_date("28/05/2002").is_err());
}

#[test]
fn test_generate_output_fname() {
    let out = generate_output_fname(Path::new("/out/monthly"), Path::new("/data/ndvi_2020.tif"));
    assert_eq!(out, Path::new("/out/monthly/ndvi_2020.monthly.tif"));
}

#[test]
fn test_generate_output_fname_bare_source_name() {
    let out = generate_output_fname(Path::new("results/smoothed"), Path::new("evi.img"));
    assert_eq!(out, Path::new("results/smoothed/evi.smoothed.tif"));
}

#[test]
fn test_generate_output_fname_extensionless_source() {
    let out = generate_output_fname(Path::new("/out/interpolated"), Path::new("/data/stack"));
    assert_eq!(out, Path::new("/out/interpolated/stack.interpolated.tif"));
}

#[cfg(unix)]
#[test]
fn test_run_command_success() {
    run_command("true", &[]).expect("'true' should exit zero");
}

#[cfg(unix)]
#[test]
fn test_run_command_failure_carries_command_text() {
    let err = run_command("false", &[]).expect_err("'false' should exit non-zero");

    match &err {
        RastimeError::CommandFailed {
            command, status, ..
        } => {
            assert_eq!(command, "false");
            assert_eq!(*status, Some(1));
        }
        other => panic!("expected CommandFailed error, got {:?}", other),
    }

    let msg = format!("{}", err);
    assert!(msg.contains("false"));
    assert!(msg.contains("failed"));
}

#[cfg(unix)]
#[test]
fn test_run_command_failure_captures_stderr() {
    let err = run_command("sh", &["-c", "echo boom >&2; exit 3"])
        .expect_err("script should exit non-zero");

    match &err {
        RastimeError::CommandFailed { status, stderr, .. } => {
            assert_eq!(*status, Some(3));
            assert!(stderr.contains("boom"));
        }
        other => panic!("expected CommandFailed error, got {:?}", other),
    }
}

#[test]
fn test_run_command_missing_program_is_io_error() {
    let err = run_command("rastime-no-such-program", &[]).expect_err("spawn should fail");
    assert!(matches!(err, RastimeError::IoError(_)));
}

#[test]
fn test_error_types() {
    let missing = RastimeError::MetadataKeyNotFound {
        key: "RANGEBEGINNINGDATE".to_string(),
        context: "band 2 of 'stack.tif'".to_string(),
    };
    let msg = format!("{}", missing);
    assert!(msg.contains("RANGEBEGINNINGDATE"));
    assert!(msg.contains("band 2 of 'stack.tif'"));

    let failed = RastimeError::CommandFailed {
        command: "gdalwarp in.tif out.tif".to_string(),
        status: None,
        stderr: String::new(),
    };
    let msg = format!("{}", failed);
    assert!(msg.contains("gdalwarp in.tif out.tif"));
    assert!(msg.contains("signal"));

    let io = RastimeError::IoError(std::io::Error::new(std::io::ErrorKind::Other, "oops"));
    assert!(format!("{}", io).contains("I/O error"));
}
