//! Fuzz the syllog REPL execution
//!
//! This target exercises the full pipeline: parsing, elaboration,
//! composition and the validity check. It should never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use syllog::repl::ReplState;

fuzz_target!(|data: &[u8]| {
    // Try to interpret the data as UTF-8
    if let Ok(input) = std::str::from_utf8(data) {
        // Fresh state per input, no persistence
        let mut state = ReplState::new();

        // Statement handling should return errors, never panic
        let _ = state.execute_text(input);
    }
});
