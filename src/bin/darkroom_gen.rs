fn main() {
    if let Err(err) = darkroom_scaffold::cli::run_cli() {
        eprintln!("❌ {err:#}");
        std::process::exit(1);
    }
}
