#![no_main]
use libfuzzer_sys::fuzz_target;
use lsd_metadata::package::{PackageError, PackageMetadataLoader};
use lsd_metadata::resolution::MemoryResolutionContext;
use std::sync::Arc;

const ROOT: &str = "/fuzz/pkg";

fuzz_target!(|data: &[u8]| {
    // Arbitrary descriptor text must never panic the loader
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let context = MemoryResolutionContext::new().with_file("/fuzz/pkg/package.json", text);
    let loader = PackageMetadataLoader::new(Arc::new(context));

    match futures::executor::block_on(loader.load(ROOT)) {
        Ok(metadata) => {
            assert!(metadata.components_path.starts_with("/"));
            for path in metadata.contexts.values() {
                assert!(path.starts_with("/"));
            }
        }
        Err(PackageError::Resolution(e)) => panic!("descriptor was registered: {e}"),
        Err(e) => {
            assert_eq!(e.descriptor_path(), Some("/fuzz/pkg/package.json"));
        }
    }
});
