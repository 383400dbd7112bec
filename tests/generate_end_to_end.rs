//! End-to-end generation tests
//!
//! Exercise the full parse -> render -> write pipeline against temporary
//! output directories, covering the supported configuration scenarios.

use infogen::core::error::{InfoGenError, VersionRole};
use infogen::core::generator::{render, GenerationRequest, DEFAULT_CLASS_NAME};
use infogen::core::writer::write_artifact;

/// Extract the rendered body of one accessor, e.g. "1" or "false".
fn accessor_body(source: &str, name: &str) -> String {
    let heading = format!("pub const fn {}()", name);
    let start = source.find(&heading).expect("accessor present");
    let rest = &source[start..];
    let open = rest.find('{').expect("body opens");
    let close = rest.find('}').expect("body closes");
    rest[open + 1..close].trim().to_string()
}

#[test]
fn generates_artifact_for_release_spec_and_snapshot_impl() {
    let request = GenerationRequest::from_raw(
        "1.0",
        "2.3.1-SNAPSHOT",
        "io.smallrye.config",
        DEFAULT_CLASS_NAME,
    )
    .unwrap();
    let source = render(&request);

    let dir = tempfile::tempdir().unwrap();
    let dest = write_artifact(dir.path(), DEFAULT_CLASS_NAME, &source).unwrap();

    assert_eq!(dest.file_name().unwrap(), "small_rye_info.rs");
    let written = std::fs::read_to_string(&dest).unwrap();
    assert_eq!(written, source);

    assert_eq!(accessor_body(&written, "spec_major_version"), "1");
    assert_eq!(accessor_body(&written, "spec_minor_version"), "0");
    assert_eq!(accessor_body(&written, "spec_micro_version"), "0");
    assert_eq!(accessor_body(&written, "is_spec_snapshot"), "false");
    assert_eq!(accessor_body(&written, "impl_major_version"), "2");
    assert_eq!(accessor_body(&written, "impl_minor_version"), "3");
    assert_eq!(accessor_body(&written, "impl_micro_version"), "1");
    assert_eq!(accessor_body(&written, "is_impl_snapshot"), "true");
    assert_eq!(accessor_body(&written, "info_version"), "1");
}

#[test]
fn generates_artifact_when_spec_and_impl_match() {
    let request =
        GenerationRequest::from_raw("1.2.3", "1.2.3", "io.smallrye.health", "HealthInfo").unwrap();
    let source = render(&request);

    for name in [
        "spec_major_version",
        "impl_major_version",
    ] {
        assert_eq!(accessor_body(&source, name), "1");
    }
    for name in ["spec_micro_version", "impl_micro_version"] {
        assert_eq!(accessor_body(&source, name), "3");
    }
    for name in ["is_spec_snapshot", "is_impl_snapshot"] {
        assert_eq!(accessor_body(&source, name), "false");
    }

    let dir = tempfile::tempdir().unwrap();
    let dest = write_artifact(dir.path(), "HealthInfo", &source).unwrap();
    assert_eq!(dest.file_name().unwrap(), "health_info.rs");
}

#[test]
fn malformed_spec_version_aborts_with_no_artifact() {
    let dir = tempfile::tempdir().unwrap();

    let err = GenerationRequest::from_raw(
        "bad-version",
        "1.0",
        "io.smallrye.config",
        DEFAULT_CLASS_NAME,
    )
    .unwrap_err();

    match err {
        InfoGenError::MalformedVersion { role, source } => {
            assert_eq!(role, VersionRole::Specification);
            assert_eq!(source.raw, "bad-version");
        }
        other => panic!("expected MalformedVersion, got {:?}", other),
    }

    // nothing reached the writer
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn repeated_runs_produce_byte_identical_output() {
    let raw = ("4.0", "4.1.2", "org.acme.metrics", "MetricsInfo");
    let first = render(
        &GenerationRequest::from_raw(raw.0, raw.1, raw.2, raw.3).unwrap(),
    );
    let second = render(
        &GenerationRequest::from_raw(raw.0, raw.1, raw.2, raw.3).unwrap(),
    );
    assert_eq!(first, second);

    let dir = tempfile::tempdir().unwrap();
    let dest_a = write_artifact(&dir.path().join("a"), raw.3, &first).unwrap();
    let dest_b = write_artifact(&dir.path().join("b"), raw.3, &second).unwrap();
    assert_eq!(
        std::fs::read(&dest_a).unwrap(),
        std::fs::read(&dest_b).unwrap()
    );
}

#[test]
fn artifact_is_balanced_and_namespaced() {
    let request = GenerationRequest::from_raw("1", "1", "a.b.c.d", "Info").unwrap();
    let source = render(&request);

    for module in ["pub mod a {", "pub mod b {", "pub mod c {", "pub mod d {"] {
        assert!(source.contains(module), "missing {}", module);
    }
    assert!(source.contains("pub struct Info {"));
    assert_eq!(source.matches('{').count(), source.matches('}').count());
    assert!(source.starts_with("// Generated by infogen. Do not edit."));
}
