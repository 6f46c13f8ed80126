#![no_main]

use libfuzzer_sys::fuzz_target;
use sftrig::{cosf, cosf_bits, sinf, sinf_bits};

fn ulp_distance(a: f32, b: f32) -> u32 {
    let key = |v: f32| {
        let b = v.to_bits() as i64;
        if b < 0x8000_0000 { b } else { 0x8000_0000 - b }
    };
    (key(a) - key(b)).unsigned_abs() as u32
}

fuzz_target!(|data: u32| {
    let x = f32::from_bits(data);

    let c = cosf(x);
    let s = sinf(x);
    if !x.is_finite() {
        assert_eq!(c.to_bits(), 0x7fc0_0000);
        assert_eq!(s.to_bits(), 0x7fc0_0000);
        return;
    }

    assert!((-1.0..=1.0).contains(&c), "cosf({x:e}) = {c}");
    assert!((-1.0..=1.0).contains(&s), "sinf({x:e}) = {s}");
    assert_eq!(cosf_bits(data), cosf_bits(data ^ 0x8000_0000));
    assert_eq!(sinf_bits(data) ^ 0x8000_0000, sinf_bits(data ^ 0x8000_0000));

    let expected = (x as f64).cos() as f32;
    assert!(ulp_distance(c, expected) <= 3, "cosf({x:e}) = {c}, expected {expected}");
    let expected = (x as f64).sin() as f32;
    assert!(ulp_distance(s, expected) <= 3, "sinf({x:e}) = {s}, expected {expected}");
});
