fn main() {
    if let Err(err) = learning_path_layout::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
