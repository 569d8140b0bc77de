//! agriweather main entrypoint.

use agriweather::run;
use agriweather::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
