//! sessiondraft main entrypoint.

use sessiondraft::run;
use sessiondraft::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
