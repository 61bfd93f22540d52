#![no_main]
use libfuzzer_sys::fuzz_target;
use zenbmpart::{BmpReader, Limits};

fuzz_target!(|data: &[u8]| {
    // Must never panic, whatever the header claims.
    let mut reader = BmpReader::with_limits(Limits {
        max_memory_bytes: Some(64 * 1024 * 1024),
        ..Limits::default()
    });
    if reader
        .open_stream(std::io::Cursor::new(data), enough::Unstoppable)
        .is_ok()
    {
        let _ = reader.render_to_string(enough::Unstoppable);
    }
    reader.close();
    let _ = reader.render_to_string(enough::Unstoppable);
});
