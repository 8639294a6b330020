//! geoclock main entrypoint.

use geoclock::run;
use geoclock::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
