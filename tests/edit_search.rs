use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use tempfile::tempdir;

fn phonebook_file(dir: &tempfile::TempDir) -> Result<std::path::PathBuf, std::io::Error> {
    let phonebook = dir.path().join("phonebook.json");
    fs::write(
        &phonebook,
        r#"{
            "1112223333": {"first_name": "John", "last_name": "Smith", "city": "Paris"},
            "4445556666": {"first_name": "John", "last_name": "Doe", "city": "London"}
        }"#,
    )?;
    Ok(phonebook)
}

#[test]
fn edit_search() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let phonebook = phonebook_file(&dir)?;

    // Search by first and last name together
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .arg(&phonebook)
        .write_stdin("3\n\njohn\nSMITH\n6\n")
        .assert()
        .success()
        .stdout(contains("Number: 1112223333"))
        .stdout(contains("Number: 4445556666").not());

    // Edit the contact: keep the names, move to another city
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .arg(&phonebook)
        .write_stdin("5\n4445556666\n\n\nberlin\n6\n")
        .assert()
        .success()
        .stdout(contains("Contact updated successfully"));

    // Search by the new city
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .arg(&phonebook)
        .write_stdin("3\n\n\n\nBerlin\n6\n")
        .assert()
        .success()
        .stdout(contains("Number: 4445556666"))
        .stdout(contains("\"city\": \"Berlin\""));

    // A number that is not there stops the search
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .arg(&phonebook)
        .write_stdin("3\n9999999999\n6\n")
        .assert()
        .success()
        .stdout(contains("No matches found for your request!"))
        .stdout(contains("first_name: ").not());

    Ok(())
}

#[test]
fn update_unknown_number() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let phonebook = phonebook_file(&dir)?;

    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .arg(&phonebook)
        .write_stdin("5\n0000000000\n6\n")
        .assert()
        .success()
        .stdout(contains("Use option \"2\" to create a new contact"));

    Ok(())
}
