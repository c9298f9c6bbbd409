#![no_main]
use libfuzzer_sys::fuzz_target;
use lsd_metadata::utils::{is_absolute, join_path, normalize_path};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let (base, relative) = text.split_once('\0').unwrap_or((text, ""));

    let joined = join_path(base, relative);
    assert_eq!(normalize_path(&joined), joined);
    if is_absolute(base) {
        assert!(is_absolute(&joined));
    }
});
