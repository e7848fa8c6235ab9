fn main() {
    tac0de_cascade::app::cli::run();
}
