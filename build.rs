use std::env;

const WIDTHS: [(&str, u32); 3] = [("INT16", 16), ("INT32", 32), ("INT128", 128)];

fn prelude() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rustc-check-cfg=cfg(integer_bits, values(\"16\", \"32\", \"64\", \"128\"))");
}

fn main() {
    self::prelude();
    let selected: Vec<u32> = WIDTHS
        .iter()
        .filter(|(feature, _)| env::var_os(format!("CARGO_FEATURE_{}", feature)).is_some())
        .map(|(_, bits)| *bits)
        .collect();
    let bits = match selected.as_slice() {
        [] => 64,
        [bits] => *bits,
        _ => panic!(
            "at most one of the `int16`, `int32`, and `int128` features may be enabled (found {:?})",
            selected,
        ),
    };
    println!("cargo:rustc-cfg=integer_bits=\"{}\"", bits);
}
