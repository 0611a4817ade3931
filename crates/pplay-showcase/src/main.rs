#![forbid(unsafe_code)]

fn main() {
    if let Err(error) = pplay_showcase::run_from_env() {
        eprintln!("pplay: {error}");
        std::process::exit(error.exit_code());
    }
}
