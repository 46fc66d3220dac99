use std::fs;
use username_permuter::{
    generate, load_names_from_path, run, CaseMode, OutputTarget, PermuteError, PermuteRequest,
    MAX_INPUT_BYTES,
};

const STAFF_LIST: &str = "# exported from the staff directory\n\
\n\
John Doe\n\
  jane ROE  \n\
john doe\n\
administrator\n\
Mary Jane Watson\n";

fn lines(path: &std::path::Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("output readable")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn run_writes_sorted_unique_lowercase_permutations() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("names.txt");
    let output = dir.path().join("users.txt");
    fs::write(&input, STAFF_LIST).expect("seed input");

    let request = PermuteRequest::new(&input).with_output(OutputTarget::File(output.clone()));
    let summary = run(&request).expect("run succeeds");

    let written = lines(&output);
    let mut sorted = written.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(written, sorted, "output is sorted and unique");

    assert_eq!(summary.names, 4);
    assert_eq!(summary.permutations, written.len());
    assert_eq!(written.len(), 11 + 11 + 1 + 1);

    for expected in ["john", "doe", "j.doe", "j+doe", "doe.john", "j.roe", "roejane"] {
        assert!(written.iter().any(|line| line == expected), "missing {expected}");
    }
    assert!(written.iter().any(|line| line == "administrator"));
    assert!(written.iter().any(|line| line == "mary jane watson"));
    assert!(!written.iter().any(|line| line.contains('#') || line.is_empty()));
}

#[test]
fn uppercase_run_adds_capitalized_and_upper_forms() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("names.txt");
    let output = dir.path().join("users.txt");
    fs::write(&input, "John Doe\nroot\n").expect("seed input");

    let request = PermuteRequest::new(&input)
        .with_output(OutputTarget::File(output.clone()))
        .with_case_mode(CaseMode::WithUppercase);
    run(&request).expect("run succeeds");

    let written = lines(&output);
    for expected in [
        "John", "Doe", "JOHN", "DOE", "J.Doe", "J-Doe", "J_Doe", "J+Doe", "JDoe", "JohnDoe",
        "DoeJohn", "John.Doe", "Doe.John", "J.DOE", "J-DOE", "J_DOE", "J+DOE", "JDOE", "JOHNDOE",
        "DOEJOHN", "JOHN.DOE", "DOE.JOHN", "ROOT", "root", "jdoe",
    ] {
        assert!(written.iter().any(|line| line == expected), "missing {expected}");
    }
    assert_eq!(written.len(), 11 + 22 + 2);
}

#[test]
fn comment_only_input_produces_empty_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("names.txt");
    let output = dir.path().join("users.txt");
    fs::write(&input, "# nothing yet\n\n   \n").expect("seed input");

    let summary = run(&PermuteRequest::new(&input).with_output(OutputTarget::File(output.clone())))
        .expect("run succeeds");
    assert_eq!(summary.permutations, 0);
    assert_eq!(fs::read_to_string(&output).expect("read"), "");
}

#[test]
fn missing_input_is_reported_before_anything_else() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("users.txt");
    let request = PermuteRequest::new(dir.path().join("absent.txt"))
        .with_output(OutputTarget::File(output.clone()));

    let err = run(&request).expect_err("missing input");
    assert!(matches!(err, PermuteError::MissingInput { .. }));
    assert!(!output.exists());

    let err = load_names_from_path(dir.path(), MAX_INPUT_BYTES).expect_err("directory rejected");
    assert!(matches!(err, PermuteError::MissingInput { .. }));
}

#[test]
fn existing_output_is_left_untouched() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("names.txt");
    let output = dir.path().join("users.txt");
    fs::write(&input, "John Doe\n").expect("seed input");
    fs::write(&output, "previous run\n").expect("seed output");

    let err = run(&PermuteRequest::new(&input).with_output(OutputTarget::File(output.clone())))
        .expect_err("existing output");
    assert!(matches!(err, PermuteError::OutputExists { .. }));
    assert_eq!(fs::read_to_string(&output).expect("read"), "previous run\n");
}

#[test]
fn oversized_input_is_rejected_without_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("names.txt");
    let output = dir.path().join("users.txt");
    fs::write(&input, "John Doe\nJane Roe\n").expect("seed input");

    let request = PermuteRequest::new(&input)
        .with_output(OutputTarget::File(output.clone()))
        .with_max_input_bytes(8);
    let err = run(&request).expect_err("oversized");
    assert!(matches!(err, PermuteError::SizeLimit { size: 18, max: 8 }));
    assert!(!output.exists());
}

#[test]
fn non_ascii_input_is_rejected_without_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("names.txt");
    let output = dir.path().join("users.txt");
    fs::write(&input, "Zo\u{eb} Saldana\n").expect("seed input");

    let err = run(&PermuteRequest::new(&input).with_output(OutputTarget::File(output.clone())))
        .expect_err("non-ascii");
    assert!(matches!(err, PermuteError::Encoding { offset: 2, .. }));
    assert!(!output.exists());
}

#[test]
fn every_name_contributes_at_least_one_value() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("names.txt");
    fs::write(&input, STAFF_LIST).expect("seed input");

    let names = load_names_from_path(&input, MAX_INPUT_BYTES).expect("load");
    for mode in [CaseMode::LowercaseOnly, CaseMode::WithUppercase] {
        let values = generate(&names, mode);
        assert!(values.len() >= names.len());
    }
}
