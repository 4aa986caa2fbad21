#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // First two bytes give the expected depacked size
    if data.len() < 2 {
        return;
    }
    let size = u16::from_le_bytes([data[0], data[1]]) as usize;

    // Arbitrary input may fail to depack - that's OK
    // We're looking for panics/crashes, not errors
    let mut dst = vec![0u8; size];
    let _ = crush::depack(&data[2..], &mut dst);
});
