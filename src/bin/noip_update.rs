//! noip-update entrypoint: one dynamic-DNS update, output echoed verbatim.

use rattendance::run_noip_update;
use rattendance::ui::messages::error;

fn main() {
    if let Err(e) = run_noip_update() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
