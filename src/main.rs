fn main() {
    if let Err(e) = labsite::run() {
        eprintln!("labsite: {}", e);
        std::process::exit(1);
    }
}
