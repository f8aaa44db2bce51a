#![no_main]

use libfuzzer_sys::fuzz_target;
use sourcemap_remap::{remap, LoadedSource, LoaderContext, RemapOptions};

fuzz_target!(|data: &[u8]| {
    if let Ok(json) = std::str::from_utf8(data) {
        let mut loader = sourcemap_remap::from_fn(|_: &str, _: &LoaderContext<'_>| {
            Ok(LoadedSource::original())
        });
        let _ = remap(json, &mut loader, &RemapOptions::default());
    }
});
