#![no_main]

use idnum::core::IdentifierKind;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        for kind in IdentifierKind::ALL {
            // Errors are fine, panics and broken invariants are bugs.
            let compact = kind.compact(s);
            assert_eq!(kind.compact(&compact), compact, "{kind}: compact not idempotent");

            let result = kind.validate(s);
            assert_eq!(kind.is_valid(s), result.is_ok(), "{kind}: is_valid disagrees");

            let formatted = kind.format(s);
            if result.is_ok() {
                assert_eq!(kind.compact(&formatted), compact, "{kind}: format lost data");
            }
        }
    }
});
