//! Cross-crate pipeline tests exercising the library surface directly

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use blocklist_content::FormatSpec;
use blocklist_export::{
    WriteOutcome, WritePolicy, compile_files, discover_files_sorted, write_format,
};

fn hosts_spec() -> FormatSpec {
    FormatSpec::new("0.0.0.0 {url}", "hosts")
        .with_comment_replacement("#")
        .with_hosts_mode()
}

#[test]
fn discovery_order_drives_output_order() {
    let dir = TempDir::new().unwrap();
    let lists = dir.path().join("lists");
    fs::create_dir_all(&lists).unwrap();
    fs::write(lists.join("b-second.txt"), "second.com\n").unwrap();
    fs::write(lists.join("A-first.txt"), "first.com\n").unwrap();

    let inputs = discover_files_sorted(&lists);
    let dest = dir.path().join("out.txt");
    write_format(&dest, &inputs, &hosts_spec(), WritePolicy::default()).unwrap();

    let written = fs::read_to_string(&dest).unwrap();
    let first = written.find("first.com").unwrap();
    let second = written.find("second.com").unwrap();
    assert!(first < second);
}

#[test]
fn path_entries_survive_hosts_rendering_as_comments() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("list.txt");
    fs::write(&input, "! // H\nplain.com\nsub.example.com/page\n").unwrap();
    let dest = dir.path().join("hosts.txt");

    write_format(&dest, &[input], &hosts_spec(), WritePolicy::default()).unwrap();

    let written = fs::read_to_string(&dest).unwrap();
    assert!(written.contains("0.0.0.0 plain.com\n"));
    // The path entry is preserved inertly, never templated.
    assert!(written.contains("#       sub.example.com/page\n"));
    assert!(!written.contains("0.0.0.0 sub.example.com/page"));
}

#[test]
fn compile_matches_concatenation_property() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("A.txt");
    let b = dir.path().join("B.txt");
    fs::write(&a, "line a1\nline a2\n").unwrap();
    fs::write(&b, "line b1\n").unwrap();
    let dest = dir.path().join("compiled.txt");

    let outcome = compile_files(
        &dest,
        &[a.clone(), b.clone()],
        "TITLE",
        WritePolicy::default(),
    )
    .unwrap();
    assert_eq!(outcome, WriteOutcome::Written);

    let expected = format!(
        "TITLE\n{}\n{}\n",
        fs::read_to_string(&a).unwrap(),
        fs::read_to_string(&b).unwrap()
    );
    assert_eq!(fs::read_to_string(&dest).unwrap(), expected);
}

#[test]
fn rendered_output_then_compiled_is_byte_stable() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("list.txt");
    fs::write(&input, "! // H\na.com\n").unwrap();

    let rendered: PathBuf = dir.path().join("rendered.txt");
    write_format(&rendered, &[input], &hosts_spec(), WritePolicy::default()).unwrap();
    let rendered_content = fs::read_to_string(&rendered).unwrap();

    let compiled = dir.path().join("compiled.txt");
    compile_files(&compiled, &[rendered], "# T", WritePolicy::default()).unwrap();

    // Compilation never re-renders; the constituent appears verbatim.
    let compiled_content = fs::read_to_string(&compiled).unwrap();
    assert_eq!(compiled_content, format!("# T\n{rendered_content}\n"));
}
