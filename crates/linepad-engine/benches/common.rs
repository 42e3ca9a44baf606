// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_lines(count: usize) -> String {
    (0..count)
        .map(|n| format!("Line {n} with some content to edit and search through."))
        .collect::<Vec<_>>()
        .join("\n")
}
