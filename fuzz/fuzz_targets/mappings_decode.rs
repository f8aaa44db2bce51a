#![no_main]

use libfuzzer_sys::fuzz_target;
use sourcemap_remap::codec::{decode, encode};

fuzz_target!(|data: &[u8]| {
    if let Ok(mappings) = std::str::from_utf8(data) {
        if let Ok(decoded) = decode(mappings) {
            let _ = encode(&decoded);
        }
    }
});
