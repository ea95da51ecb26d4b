use std::process;

use expense_ledger::application::the_app;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = the_app() {
        log::error!("{err}");
        println!("App failed: {err}");
        process::exit(1);
    }
}
