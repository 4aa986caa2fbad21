#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // First byte picks the level, the rest is the input
    let Some((&selector, src)) = data.split_first() else {
        return;
    };
    if src.len() > 1 << 20 {
        return;
    }
    let level = 5 + (selector % 6) as i32;

    let mut packed = vec![0u8; crush::max_packed_size(src.len())];
    let mut workmem = vec![0u32; crush::workmem_size(src.len(), level).unwrap() / 4];
    let size = crush::pack(src, &mut packed, &mut workmem, level).unwrap();

    let mut depacked = vec![0u8; src.len()];
    crush::depack(&packed[..size], &mut depacked).unwrap();
    assert_eq!(src, depacked.as_slice());
});
