fn main() {
    std::process::exit(infogen::app::startup::run());
}
