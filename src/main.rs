fn main() {
    if let Err(e) = magnetic_sim::app::run() {
        eprintln!("[ERROR] {}", e);
        std::process::exit(1);
    }
}
