//! callreport main entrypoint.

use callreport::run;
use callreport::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
