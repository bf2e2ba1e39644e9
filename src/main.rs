use std::process::exit;

fn main() {
    if let Err(err) = hubget::run() {
        eprintln!("Error: {err}");
        exit(err.exit_code());
    }
}
