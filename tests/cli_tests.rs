//! End-to-end CLI tests over temporary JSON record files.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_json(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".json").unwrap();
    write!(file, "{content}").unwrap();
    file.flush().unwrap();
    file
}

fn recipient_json() -> NamedTempFile {
    write_json(
        r#"{
            "id": "R-1",
            "full_name": "Recipient One",
            "blood_type": "A+",
            "pra": 20,
            "crossmatch_requirement": "Negative",
            "hla_typing": { "hla_a": "A1", "hla_b": "B7,B8", "hla_dr": "DR15" }
        }"#,
    )
}

fn donors_json() -> NamedTempFile {
    write_json(
        r#"[
            {
                "id": "D-1",
                "full_name": "Donor One",
                "blood_type": "O-",
                "crossmatch_result": "Negative",
                "hla_typing": { "hla_a": "A1,A2", "hla_b": "B7", "hla_dr": "DR15" }
            },
            {
                "id": "D-2",
                "full_name": "Donor Two",
                "blood_type": "B+",
                "crossmatch_result": "Negative"
            },
            {
                "id": "D-3",
                "full_name": "Donor Three",
                "blood_type": "O-",
                "crossmatch_result": "Negative",
                "donor_antibodies": "A1",
                "hla_typing": { "hla_a": "A1" }
            }
        ]"#,
    )
}

fn kidney_match() -> Command {
    Command::cargo_bin("kidney-match").unwrap()
}

#[test]
fn match_text_report_summarizes_batch() {
    // Recipient lists A1 as unacceptable only in the variant below; here D-3
    // stays a plain candidate, so: D-1 compatible, D-2 blood-incompatible.
    let recipient = recipient_json();
    let donors = donors_json();

    kidney_match()
        .args(["match", "--recipient"])
        .arg(recipient.path())
        .arg("--donors")
        .arg(donors.path())
        .arg("--report-id")
        .arg("TESTID00")
        .assert()
        .success()
        .stdout(predicate::str::contains("Kidney Match Report [TESTID00]"))
        .stdout(predicate::str::contains("3 donors analyzed"))
        .stdout(predicate::str::contains("Donor One"))
        .stdout(predicate::str::contains("blood type incompatible"));
}

#[test]
fn match_excludes_donor_with_unacceptable_antigen() {
    let recipient = write_json(
        r#"{
            "id": "R-1",
            "full_name": "Recipient One",
            "blood_type": "A+",
            "pra": 20,
            "crossmatch_requirement": "Negative",
            "unacceptable_antigens": "A1,B8",
            "hla_typing": { "hla_a": "A1" }
        }"#,
    );
    let donors = donors_json();

    kidney_match()
        .args(["match", "--recipient"])
        .arg(recipient.path())
        .arg("--donors")
        .arg(donors.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1 excluded"))
        .stdout(predicate::str::contains(
            "Donor carries unacceptable antigen(s): A1",
        ));
}

#[test]
fn match_json_report_is_structured() {
    let recipient = recipient_json();
    let donors = donors_json();

    let output = kidney_match()
        .args(["match", "--format", "json", "--recipient"])
        .arg(recipient.path())
        .arg("--donors")
        .arg(donors.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["summary"]["total"], 3);
    assert_eq!(report["results"][0]["donor"]["id"], "D-1");
    assert_eq!(report["results"][0]["details"]["hla_matches"], 3);
    assert_eq!(report["results"][0]["compatibility_score"], 0.2);
    assert_eq!(report["results"][1]["classification"], "Incompatible");
}

#[test]
fn match_rejects_out_of_range_pra() {
    let recipient = write_json(
        r#"{
            "id": "R-1",
            "full_name": "Recipient One",
            "blood_type": "A+",
            "pra": 150,
            "crossmatch_requirement": "Negative"
        }"#,
    );
    let donors = donors_json();

    kidney_match()
        .args(["match", "--recipient"])
        .arg(recipient.path())
        .arg("--donors")
        .arg(donors.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("PRA must be between 0 and 100"));
}

#[test]
fn match_rejects_utilized_donor() {
    let recipient = recipient_json();
    let donors = write_json(
        r#"[{
            "id": "D-9",
            "full_name": "Utilized Donor",
            "blood_type": "O-",
            "crossmatch_result": "Negative",
            "status": "Utilized"
        }]"#,
    );

    kidney_match()
        .args(["match", "--recipient"])
        .arg(recipient.path())
        .arg("--donors")
        .arg(donors.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("D-9"))
        .stderr(predicate::str::contains("not available"));
}

#[test]
fn match_rejects_malformed_donor_file() {
    let recipient = recipient_json();
    let donors = write_json(r#"[{"id": "D-1"}]"#);

    kidney_match()
        .args(["match", "--recipient"])
        .arg(recipient.path())
        .arg("--donors")
        .arg(donors.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid donor records"));
}

#[test]
fn score_shows_per_locus_breakdown() {
    let recipient = recipient_json();
    let donor = write_json(
        r#"{
            "id": "D-1",
            "full_name": "Donor One",
            "blood_type": "O-",
            "crossmatch_result": "Negative",
            "hla_typing": { "hla_a": "A1,A2", "hla_b": "B7", "hla_dr": "DR15" }
        }"#,
    );

    kidney_match()
        .args(["score", "--donor"])
        .arg(donor.path())
        .arg("--recipient")
        .arg(recipient.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 20.0%"))
        .stdout(predicate::str::contains("Classification: Compatible"))
        .stdout(predicate::str::contains("HLA-A:"))
        .stdout(predicate::str::contains("HLA-DP:"));
}

#[test]
fn score_tsv_single_row() {
    let recipient = recipient_json();
    let donor = write_json(
        r#"{
            "id": "D-1",
            "full_name": "Donor One",
            "blood_type": "O-",
            "crossmatch_result": "Positive"
        }"#,
    );

    kidney_match()
        .args(["score", "--format", "tsv", "--donor"])
        .arg(donor.path())
        .arg("--recipient")
        .arg(recipient.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("D-1\t0.00\tIncompatible"));
}

#[test]
fn tsv_report_has_one_row_per_donor() {
    let recipient = recipient_json();
    let donors = donors_json();

    let output = kidney_match()
        .args(["match", "--format", "tsv", "--recipient"])
        .arg(recipient.path())
        .arg("--donors")
        .arg(donors.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4); // header + 3 donors
    assert!(lines[0].starts_with("donor_id\t"));
    assert!(lines[1].starts_with("D-1\t"));
}
