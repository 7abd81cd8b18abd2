fn main() {
    if let Err(err) = daily_nav::entry() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
