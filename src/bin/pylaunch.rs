//! pylaunch binary: run launcher.py next to this executable

use pylaunch::exit_codes::EXIT_PANIC;
use std::{env, io, panic, process};

fn main() {
    // Set up panic handler to return specific exit code
    panic::set_hook(Box::new(|panic_info| {
        eprintln!("PANIC: {panic_info}");
        process::exit(EXIT_PANIC);
    }));

    let result = panic::catch_unwind(run);

    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(_) => {
            eprintln!("Fatal: Unhandled panic in pylaunch");
            process::exit(EXIT_PANIC);
        }
    }
}

fn run() -> i32 {
    let settings = pylaunch::logger::JsonLogger::init();

    log::debug!(
        "🚀 pylaunch {} started (log level {}{})",
        pylaunch::version::full_version(),
        settings.filter,
        if settings.json { ", json" } else { "" }
    );

    // The shim takes no arguments and forwards none
    let ignored: Vec<String> = env::args().skip(1).collect();
    if !ignored.is_empty() {
        log::debug!("📋 Ignoring {} argument(s): {:?}", ignored.len(), ignored);
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut console = io::stderr();

    let code = pylaunch::launch(&mut input, &mut console);
    log::debug!("🏁 Exiting with status {code}");
    code
}
