mod runtime;

use runtime::logging::{initialize, LogDestination};

fn main() {
    initialize(LogDestination::Terminal);
    runtime::run_demo();
}
