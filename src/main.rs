// src/main.rs
use hlstats_watch::cli;

fn main() {
    cli::run();
}
