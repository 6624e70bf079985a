fn main() {
    uniffi::generate_scaffolding("src/icesafe.udl").unwrap();
}
