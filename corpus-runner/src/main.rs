mod app;
mod cli;
mod discovery;
mod execution;
mod panic_message;
mod runner;

fn main() {
    app::run();
}
