// This binary crate is intentionally minimal.
// All neural network logic lives in the library (src/lib.rs and its modules).
// Run demos with:
//   cargo run --example xor
//   cargo run --example blobs
fn main() {
    println!("hematite-nn: a from-scratch sigmoid MLP trainer in Rust.");
    println!("Run `cargo run --example xor` or `cargo run --example blobs` to see it learn.");
}
