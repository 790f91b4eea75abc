fn main() {
    // Fixture-driven tests are generated from the files on disk.
    println!("cargo:rerun-if-changed=tests/fixtures");
}
