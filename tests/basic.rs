// tests/basic.rs

mod common;

use assert_cmd::prelude::*;
use common::csvclean_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_trims_and_removes_empty_lines() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let input = temp.path().join("input.csv");
    fs::write(&input, "  a,b,c  \n\n  \n d,e,f\n")?;

    csvclean_cmd()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::eq("a,b,c\nd,e,f\n"))
        .stderr(predicate::str::is_empty());

    temp.close()?;
    Ok(())
}

#[test]
fn test_whitespace_only_input_yields_empty_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let input = temp.path().join("blank.csv");
    fs::write(&input, "   \n\t\n \t \n")?;

    csvclean_cmd()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    temp.close()?;
    Ok(())
}

#[test]
fn test_empty_file_yields_empty_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let input = temp.path().join("empty.csv");
    fs::write(&input, "")?;

    csvclean_cmd()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    temp.close()?;
    Ok(())
}

#[test]
fn test_output_preserves_input_order() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let input = temp.path().join("ordered.csv");
    fs::write(&input, "third,3\n\nfirst,1\n   \nsecond,2\n")?;

    csvclean_cmd()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::eq("third,3\nfirst,1\nsecond,2\n"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_crlf_input_is_normalized() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let input = temp.path().join("windows.csv");
    fs::write(&input, "a,b\r\n\r\n  c,d  \r\n")?;

    csvclean_cmd()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::eq("a,b\nc,d\n"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_cleaning_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let input = temp.path().join("input.csv");
    fs::write(&input, "  a,b,c  \n\n  \n d,e,f\n")?;

    let first = csvclean_cmd().arg(&input).assert().success();
    let first_output = first.get_output().stdout.clone();

    // Run the cleaner on its own output; it must be byte-identical.
    let cleaned = temp.path().join("cleaned.csv");
    fs::write(&cleaned, &first_output)?;

    csvclean_cmd()
        .arg(&cleaned)
        .assert()
        .success()
        .stdout(first_output);

    temp.close()?;
    Ok(())
}

#[test]
fn test_commas_and_quotes_are_not_interpreted() -> Result<(), Box<dyn std::error::Error>> {
    // The tool is line-oriented, not CSV-aware: quoted fields spanning lines
    // are still treated as separate lines.
    let temp = tempdir()?;
    let input = temp.path().join("quoted.csv");
    fs::write(&input, "  \"a\n  b\",c\n")?;

    csvclean_cmd()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::eq("\"a\nb\",c\n"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_help_flag_succeeds() -> Result<(), Box<dyn std::error::Error>> {
    csvclean_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("trims whitespace"));
    Ok(())
}
