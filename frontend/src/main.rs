fn main() {
    // Initialize the logger for WebAssembly
    wasm_logger::init(wasm_logger::Config::default());

    prevos_frontend::start();
}
