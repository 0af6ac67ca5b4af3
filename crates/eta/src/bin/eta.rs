fn main() {
    if let Err(err) = eta::run() {
        eprintln!("{}", eta::format_error(&err));
        std::process::exit(1);
    }
}
