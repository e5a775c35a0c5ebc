//! kajilog main entrypoint.

use kajilog::run;
use kajilog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
