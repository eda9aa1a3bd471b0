//! Entry point for the WASM application

pub fn main() {
    okosor_site::start();
}
