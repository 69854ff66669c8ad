//! Whole-pipeline tests for header reorganization.
//!
//! Fixtures (.qml) and their snapshots (.snap) are co-located in `fixtures/`.

use pretty_assertions::assert_eq;

use super::{HeaderError, organize_block, organize_lines};

// Fixture-based snapshot tests

#[test]
fn fixture_singleton_pragma() {
    assert_fixture("singleton_pragma");
}

#[test]
fn fixture_mixed_imports() {
    assert_fixture("mixed_imports");
}

#[test]
fn fixture_block_comment_license() {
    assert_fixture("block_comment_license");
}

fn fixtures_dir() -> String {
    format!("{}/src/header/tests/fixtures", env!("CARGO_MANIFEST_DIR"))
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("{}/{name}.qml", fixtures_dir())).unwrap()
}

fn assert_fixture(name: &str) {
    let fixtures_dir = fixtures_dir();
    let qml = read_fixture(name);
    let lines: Vec<&str> = qml.split('\n').collect();

    let output = organize_lines(&lines).unwrap().join("\n");
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, output);
    });
}

// Block organization

#[test]
fn organize_block_empty() {
    let lines: [&str; 0] = [];
    assert!(organize_block(&lines, 0).unwrap().is_empty());
}

#[test]
fn organize_block_single_import() {
    assert_eq!(
        organize_block(&["import QtQuick"], 0).unwrap(),
        vec!["import QtQuick"]
    );
}

#[test]
fn organize_block_sorts_framework_imports() {
    assert_eq!(
        organize_block(&[" import QtQuick", "import Qt5Compat.GraphicalEffects"], 0).unwrap(),
        vec!["import Qt5Compat.GraphicalEffects", "import QtQuick"]
    );
}

#[test]
fn organize_block_drops_comments() {
    let lines = [
        " //",
        " import QtQuick",
        " */",
        " *",
        "/*",
        "// import QtQuick.Controls",
    ];
    assert_eq!(organize_block(&lines, 0).unwrap(), vec!["import QtQuick"]);
}

#[test]
fn organize_block_separates_sections() {
    let lines = [
        "",
        "pragma ComponentBehavior: Bound",
        " import QtQuick",
        "// import QtQuick.Controls",
        "import \"../views\"",
    ];
    assert_eq!(
        organize_block(&lines, 0).unwrap(),
        vec![
            "pragma ComponentBehavior: Bound",
            "",
            "import QtQuick",
            "",
            "import \"../views\"",
        ]
    );
}

#[test]
fn organize_block_all_buckets() {
    let lines = [
        "import  pyobjects",
        " import QtQuick.Window",
        " import   io.github.whatever.MyTheme",
        " import   IO.github.whatever.MyTheme",
        "",
        "import QtQuick",
        "import \"../views\"",
        " import QtQuick.Layouts",
        "  import   QtQuick.Controls.Material  ",
        "pragma ComponentBehavior: Bound",
        "",
        "",
        "",
    ];
    assert_eq!(
        organize_block(&lines, 0).unwrap(),
        vec![
            "pragma ComponentBehavior: Bound",
            "",
            "import QtQuick",
            "import QtQuick.Controls.Material",
            "import QtQuick.Layouts",
            "import QtQuick.Window",
            "",
            "import IO.github.whatever.MyTheme",
            "import io.github.whatever.MyTheme",
            "",
            "import pyobjects",
            "",
            "import \"../views\"",
        ]
    );
}

#[test]
fn organize_block_reports_document_index() {
    let lines = ["import QtQuick", "", "import ;"];
    assert_eq!(
        organize_block(&lines, 4),
        Err(HeaderError::UnclassifiableStatement {
            index: 6,
            text: "import ;".to_string(),
        })
    );
}

// Whole documents

#[test]
fn organize_lines_unclassifiable_statement_fails() {
    let lines = ["import QtQuick", "import", "Item {", "}"];
    let err = organize_lines(&lines).unwrap_err();

    assert_eq!(
        err,
        HeaderError::UnclassifiableStatement {
            index: 1,
            text: "import".to_string(),
        }
    );
    assert_eq!(
        err.to_string(),
        "cannot identify import type (one of pragma, framework, library, module, relative) in line 2: 'import'"
    );
}

#[test]
fn organize_lines_without_header_fails() {
    let lines = ["// just a comment", "", "Item {", "}"];
    assert_eq!(organize_lines(&lines), Err(HeaderError::BoundaryNotFound));
    assert_eq!(
        HeaderError::BoundaryNotFound.to_string(),
        "could not identify relevant lines"
    );
}

#[test]
fn organize_lines_collapses_surrounding_blank_lines() {
    let lines = [
        "// comment",
        "",
        "",
        "import QtQuick",
        "",
        "",
        "",
        "Item {",
        "}",
        "",
    ];
    assert_eq!(
        organize_lines(&lines).unwrap(),
        vec!["// comment", "", "import QtQuick", "", "Item {", "}", ""]
    );
}

#[test]
fn organize_lines_leaves_body_untouched() {
    let lines = [
        "import QtQuick",
        "Item {",
        "    // import QtQuick.Controls",
        "    import_like {}",
        "",
        "",
        "}",
    ];
    let organized = organize_lines(&lines).unwrap();
    assert_eq!(&organized[2..], &lines[1..]);
}

#[test]
fn organize_lines_is_idempotent() {
    for name in ["singleton_pragma", "mixed_imports", "block_comment_license"] {
        let qml = read_fixture(name);
        let lines: Vec<&str> = qml.split('\n').collect();

        let once = organize_lines(&lines).unwrap();
        let twice = organize_lines(&once).unwrap();
        assert_eq!(once, twice, "fixture {name} is not stable");
    }
}
