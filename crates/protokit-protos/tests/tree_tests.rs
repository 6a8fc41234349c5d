use assert_fs::prelude::*;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use protokit_fs::NormalizedPath;
use protokit_protos::{Codegen, Error, Protoc, organize, rewrite_imports};

const QUERY_PROTO: &str = "syntax = \"proto3\";\n\nimport \"services/basic_types.proto\";\nimport \"google/protobuf/wrappers.proto\";\n";

#[test]
fn organize_copies_requested_files_and_reports_missing() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("upstream/services/query.proto").write_str(QUERY_PROTO).unwrap();
    temp.child("upstream/services/auxiliary/tss/tss_vote.proto")
        .write_str("syntax = \"proto3\";\n")
        .unwrap();

    let files = vec![
        "services/query.proto".to_string(),
        "services/auxiliary/tss/tss_vote.proto".to_string(),
        "services/does_not_exist.proto".to_string(),
    ];
    let report = organize(
        &NormalizedPath::new(temp.child("upstream").path()),
        &NormalizedPath::new(temp.child("Protos").path()),
        &files,
    );

    assert_eq!(
        report.copied,
        vec![
            "services/query.proto".to_string(),
            "services/auxiliary/tss/tss_vote.proto".to_string()
        ]
    );
    assert_eq!(report.not_found, vec!["services/does_not_exist.proto".to_string()]);
    assert!(report.failed.is_empty());
    temp.child("Protos/services/query.proto").assert(QUERY_PROTO);
    temp.child("Protos/services/auxiliary/tss/tss_vote.proto")
        .assert(predicate::path::is_file());
}

#[test]
fn rewrite_imports_skips_sdk_and_mirror() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("Protos/services/query.proto").write_str(QUERY_PROTO).unwrap();
    temp.child("Protos/sdk/transaction_list.proto").write_str(QUERY_PROTO).unwrap();
    temp.child("Protos/mirror/mirror_network_service.proto")
        .write_str(QUERY_PROTO)
        .unwrap();
    temp.child("Protos/services/notes.txt").write_str("import \"a/b.proto\"").unwrap();

    let skip = vec!["sdk".to_string(), "mirror".to_string()];
    let updated = rewrite_imports(&NormalizedPath::new(temp.child("Protos").path()), &skip).unwrap();

    assert_eq!(updated.len(), 1);
    assert!(updated[0].as_str().ends_with("Protos/services/query.proto"));
    temp.child("Protos/services/query.proto").assert(
        "syntax = \"proto3\";\n\nimport \"basic_types.proto\";\nimport \"google/protobuf/wrappers.proto\";\n",
    );
    temp.child("Protos/sdk/transaction_list.proto").assert(QUERY_PROTO);
    temp.child("Protos/mirror/mirror_network_service.proto").assert(QUERY_PROTO);
    temp.child("Protos/services/notes.txt").assert("import \"a/b.proto\"");
}

#[test]
fn rewrite_imports_is_idempotent() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("Protos/services/query.proto").write_str(QUERY_PROTO).unwrap();
    let root = NormalizedPath::new(temp.child("Protos").path());

    rewrite_imports(&root, &[]).unwrap();
    let second = rewrite_imports(&root, &[]).unwrap();

    assert!(second.is_empty());
}

#[test]
fn rewrite_imports_requires_existing_root() {
    let temp = assert_fs::TempDir::new().unwrap();
    let result = rewrite_imports(&NormalizedPath::new(temp.child("absent").path()), &[]);
    assert!(matches!(result, Err(Error::DirectoryNotFound { .. })));
}

#[test]
fn missing_protoc_binary_is_a_spawn_error() {
    let temp = assert_fs::TempDir::new().unwrap();
    let protoc = Protoc::new(
        "protokit-test-no-such-protoc",
        NormalizedPath::new(temp.child("Protos").path()),
        NormalizedPath::new(temp.child("Generated").path()),
    );

    let result = protoc.generate(Codegen::Messages, &["services/query.proto".to_string()]);

    assert!(matches!(result, Err(Error::ProtocSpawn { .. })));
    temp.child("Generated").assert(predicate::path::is_dir());
}

#[cfg(unix)]
#[test]
fn failing_protoc_reports_exit_status() {
    let temp = assert_fs::TempDir::new().unwrap();
    let protoc = Protoc::new(
        "false",
        NormalizedPath::new(temp.child("Protos").path()),
        NormalizedPath::new(temp.child("Generated").path()),
    );

    let result = protoc.generate(Codegen::Services, &["services/query.proto".to_string()]);

    match result {
        Err(Error::ProtocFailed { program, .. }) => assert_eq!(program, "false"),
        other => panic!("expected ProtocFailed, got {:?}", other),
    }
}
