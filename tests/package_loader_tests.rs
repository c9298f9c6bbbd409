//! Package loader tests against the in-memory resolution context

use std::collections::HashMap;
use std::sync::Arc;

use lsd_metadata::package::{descriptor_path, PackageError, PackageMetadata, PackageMetadataLoader};
use lsd_metadata::resolution::{MemoryResolutionContext, ResolutionError};
use lsd_metadata::utils::join_path;

mod common;
use common::FOO_DESCRIPTOR;

fn memory_loader(files: &[(&str, &str)]) -> (PackageMetadataLoader, Arc<MemoryResolutionContext>) {
    let context = Arc::new(
        files
            .iter()
            .fold(MemoryResolutionContext::new(), |ctx, (path, content)| {
                ctx.with_file(path, *content)
            }),
    );
    (PackageMetadataLoader::new(context.clone()), context)
}

#[tokio::test]
async fn test_paths_are_joined_onto_root() {
    let (loader, _) = memory_loader(&[("/pkgs/foo/package.json", FOO_DESCRIPTOR)]);

    let metadata = loader.load("/pkgs/foo").await.unwrap();

    let descriptor: serde_json::Value = serde_json::from_str(FOO_DESCRIPTOR).unwrap();
    assert_eq!(
        metadata.components_path,
        join_path("/pkgs/foo", descriptor["lsd:components"].as_str().unwrap())
    );

    let declared = descriptor["lsd:contexts"].as_object().unwrap();
    assert_eq!(metadata.contexts.len(), declared.len());
    for (iri, relative) in declared {
        assert_eq!(
            metadata.contexts[iri],
            join_path("/pkgs/foo", relative.as_str().unwrap())
        );
        assert!(metadata.contexts[iri].starts_with("/pkgs/foo/"));
    }
    assert_eq!(
        metadata.context_path("http://ex.org/ctx-extra"),
        Some("/pkgs/foo/contexts/extra.jsonld")
    );
}

#[tokio::test]
async fn test_loading_twice_is_idempotent() {
    let (loader, context) = memory_loader(&[("/pkgs/foo/package.json", FOO_DESCRIPTOR)]);

    let first = loader.load("/pkgs/foo").await.unwrap();
    let second = loader.load("/pkgs/foo").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(context.read_count(), 2);
}

#[tokio::test]
async fn test_reload_sees_updated_content() {
    let (loader, context) = memory_loader(&[("/pkgs/foo/package.json", FOO_DESCRIPTOR)]);
    let before = loader.load("/pkgs/foo").await.unwrap();

    context
        .insert(
            "/pkgs/foo/package.json",
            r#"{"lsd:module": "http://ex.org/foo2", "lsd:components": "c.jsonld", "lsd:contexts": {}}"#,
        )
        .await;
    let after = loader.load("/pkgs/foo").await.unwrap();

    assert_ne!(before, after);
    assert_eq!(after.module_iri, "http://ex.org/foo2");
    assert_eq!(after.name, None);
}

#[tokio::test]
async fn test_error_taxonomy() {
    let root = "/pkgs/foo";
    let path = descriptor_path(root);
    let cases: Vec<(&str, &str)> = vec![
        ("{", "Syntax error"),
        (r#"{"name": "foo"}"#, "lsd:module"),
        (r#"{"lsd:module": "m"}"#, "lsd:components"),
        (r#"{"lsd:module": "m", "lsd:components": "c"}"#, "lsd:contexts"),
    ];

    for (descriptor, expected) in cases {
        let (loader, _) = memory_loader(&[(path.as_str(), descriptor)]);
        let err = loader.load(root).await.unwrap_err();
        let message = err.to_string();

        assert!(message.contains(expected), "{message}");
        assert!(message.contains(&path), "{message}");
        assert_eq!(err.descriptor_path(), Some(path.as_str()));
    }
}

#[tokio::test]
async fn test_missing_descriptor_error_is_unwrapped() {
    let (loader, _) = memory_loader(&[]);

    let err = loader.load("/pkgs/none").await.unwrap_err();
    match err {
        PackageError::Resolution(ResolutionError::NotFound(ref path)) => {
            assert_eq!(path, "/pkgs/none/package.json");
        }
        ref other => panic!("unexpected error: {other:?}"),
    }
    assert!(!err.is_invalid_package());
}

#[tokio::test]
async fn test_concurrent_loads_from_shared_loader() {
    let mut files = Vec::new();
    for i in 0..16 {
        files.push((
            format!("/pkgs/p{i}/package.json"),
            format!(
                r#"{{"name": "p{i}", "lsd:module": "urn:p{i}", "lsd:components": "c.jsonld", "lsd:contexts": {{"urn:ctx": "ctx.jsonld"}}}}"#
            ),
        ));
    }
    let borrowed: Vec<(&str, &str)> = files.iter().map(|(p, c)| (p.as_str(), c.as_str())).collect();
    let (loader, context) = memory_loader(&borrowed);

    let mut handles = Vec::new();
    for i in 0..16 {
        let loader = loader.clone();
        handles.push(tokio::spawn(async move {
            loader.load(&format!("/pkgs/p{i}")).await
        }));
    }

    for (i, handle) in handles.into_iter().enumerate() {
        let metadata: PackageMetadata = handle.await.unwrap().unwrap();
        assert_eq!(metadata.name, Some(format!("p{i}")));
        assert_eq!(
            metadata.contexts,
            HashMap::from([("urn:ctx".to_string(), format!("/pkgs/p{i}/ctx.jsonld"))])
        );
    }
    assert_eq!(context.read_count(), 16);
}

#[tokio::test]
async fn test_relative_root() {
    let (loader, _) = memory_loader(&[("node_modules/foo/package.json", FOO_DESCRIPTOR)]);

    let metadata = loader.load("./node_modules/foo").await.unwrap();
    assert_eq!(metadata.components_path, "node_modules/foo/components/index.jsonld");
}
