use std::fs;
use std::io::{Read, Write};

use flate2::{read::MultiGzDecoder, write::GzEncoder, Compression};
use tempfile::tempdir;

use fastaswap::*;

const MULTILINE: &str = ">seq1\nATGG\nTGAG\n>seq2\nCCCC\n";

#[test]
fn rewrites_a_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.fasta");
    let output = dir.path().join("out.fasta");
    fs::write(&input, MULTILINE).unwrap();

    let config = Config::new("ATGGTGAG", "XX", 3).unwrap();
    let count = process_fasta(&input, &output, &config).unwrap();

    assert_eq!(count, 2);
    assert_eq!(fs::read_to_string(&output).unwrap(), ">seq1\nXX\n>seq2\nCCC\nC\n");
}

#[test]
fn overwrites_existing_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.fasta");
    let output = dir.path().join("out.fasta");
    fs::write(&input, ">only\nAC\n").unwrap();
    fs::write(&output, "stale contents that are much longer than the new output\n").unwrap();

    process_fasta(&input, &output, &Config::default()).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), ">only\nAC\n");
}

#[test]
fn unchanged_sequences_round_trip() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.fasta");
    let output = dir.path().join("out.fasta");

    let seq = "ACGT".repeat(53);
    let mut contents = String::from("; comment before any header\n>chr1 some description\n");
    for line in seq.as_bytes().chunks(70) {
        contents.push_str(std::str::from_utf8(line).unwrap());
        contents.push_str("\r\n");
    }
    contents.push_str("\n>chr2\n");
    fs::write(&input, contents).unwrap();

    let count = process_fasta(&input, &output, &Config::default()).unwrap();
    assert_eq!(count, 2);

    let out = fs::read_to_string(&output).unwrap();
    let lines = out.lines().collect::<Vec<_>>();
    assert_eq!(lines[0], ">chr1 some description");
    assert_eq!(lines[1..lines.len() - 1].concat(), seq);
    assert_eq!(lines.last(), Some(&">chr2"));
    assert_eq!(lines.len(), 1 + (seq.len() + 79) / 80 + 1);
}

#[test]
fn count_matches_header_lines() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.fasta");
    let output = dir.path().join("out.fasta");

    let mut contents = String::new();
    for i in 0..250 {
        contents.push_str(&format!(">read{i}\n"));
        if i % 3 != 0 {
            contents.push_str("ACGTTGCA\nGG\n");
        }
    }
    fs::write(&input, contents).unwrap();

    let count = process_fasta(&input, &output, &Config::default()).unwrap();
    assert_eq!(count, 250);

    let out = fs::read_to_string(&output).unwrap();
    assert_eq!(out.lines().filter(|l| l.starts_with('>')).count(), 250);
    assert_eq!(out.matches(">read249\nACGTTGCAGG\n").count(), 1);
}

#[test]
fn last_record_written_once() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.fasta");
    let output = dir.path().join("out.fasta");
    fs::write(&input, ">a\nAAAA\n>b\nCC\nGG").unwrap();

    let config = Config::new("CG", "-", 2).unwrap();
    process_fasta(&input, &output, &config).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), ">a\nAA\nAA\n>b\nC-\nG\n");
}

#[test]
fn gzip_in_and_out() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.fasta.gz");
    let output = dir.path().join("out.fasta.gz");

    let mut encoder = GzEncoder::new(fs::File::create(&input).unwrap(), Compression::default());
    encoder.write_all(MULTILINE.as_bytes()).unwrap();
    encoder.finish().unwrap();

    let config = Config::new("ATGGTGAG", "XX", 3).unwrap();
    assert_eq!(process_fasta(&input, &output, &config).unwrap(), 2);

    let mut out = String::new();
    MultiGzDecoder::new(fs::File::open(&output).unwrap())
        .read_to_string(&mut out)
        .unwrap();
    assert_eq!(out, ">seq1\nXX\n>seq2\nCCC\nC\n");
}

#[test]
fn config_file_drives_substitution() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.fasta");
    let output = dir.path().join("out.fasta");
    let yaml = dir.path().join("swap.yaml");
    fs::write(&input, MULTILINE).unwrap();
    fs::write(&yaml, "needle: CCCC\nreplacement: GGGGG\nwidth: 2\n").unwrap();

    let config = Config::from_yaml_file(&yaml).unwrap();
    process_fasta(&input, &output, &config).unwrap();
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        ">seq1\nAT\nGG\nTG\nAG\n>seq2\nGG\nGG\nG\n"
    );
}

#[test]
fn missing_input_fails_without_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("missing.fasta");
    let output = dir.path().join("out.fasta");

    let res = process_fasta(&input, &output, &Config::default());
    assert!(matches!(res, Err(Error::InputNotFound { .. })));
    assert!(!output.exists());
}

#[test]
fn unwritable_output_is_an_io_error() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.fasta");
    fs::write(&input, MULTILINE).unwrap();
    let output = dir.path().join("no_such_dir").join("out.fasta");

    let res = process_fasta(&input, &output, &Config::default());
    assert!(matches!(res, Err(Error::FileIo { .. })));
}

#[test]
fn broken_config_file_is_reported() {
    let dir = tempdir().unwrap();
    let yaml = dir.path().join("swap.yaml");
    fs::write(&yaml, "needle: [not, a, string]\n").unwrap();

    match Config::from_yaml_file(&yaml) {
        Err(Error::Config { file, .. }) => assert!(file.ends_with("swap.yaml")),
        other => panic!("expected a config error, got {other:?}"),
    }
}

#[test]
fn old_mac_line_endings_keep_records_apart() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.fasta");
    let output = dir.path().join("out.fasta");
    fs::write(&input, ">a\rACGT\r>b\rCC\r").unwrap();

    let config = Config::new("ZZ", "Y", 80).unwrap();
    assert_eq!(process_fasta(&input, &output, &config).unwrap(), 2);
    assert_eq!(fs::read_to_string(&output).unwrap(), ">a\nACGT\n>b\nCC\n");
}
