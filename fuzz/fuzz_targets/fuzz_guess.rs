#![no_main]

use idnum::core::guess_kinds;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let split = s.char_indices().nth(2).map_or(s.len(), |(i, _)| i);
        let (country, number) = s.split_at(split);
        let _ = guess_kinds(number, Some(country));
        let _ = guess_kinds(s, None);
    }
});
