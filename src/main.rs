//! rStatusLog main entrypoint.

use rstatuslog::run;
use rstatuslog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
