fn main() {
    boot::app::cli::run();
}
