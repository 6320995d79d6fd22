#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Any content must encode to a fixed-width ASCII line, never panic.
        for layout in csb32::csb32::LAYOUTS {
            let mut values = csb32::csb32::FieldValues::new();
            for field in layout.fields {
                values.insert(field.name, s.to_string());
            }
            let line = csb32::csb32::encode(layout, &values);
            assert_eq!(line.len(), csb32::csb32::RECORD_LENGTH);
            assert!(line.is_ascii());
        }
    }
});
