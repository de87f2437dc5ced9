#![no_main]

use libfuzzer_sys::fuzz_target;
use runstats::config::AnalysisConfig;
use runstats::table::Shape;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Reading and analysis must never panic, whatever the input
        let _ = runstats::reader::RecordReader::default().read(input);
        if let Ok(shape) = Shape::new(3, 2) {
            let _ = runstats::analyze(input, shape, &AnalysisConfig::strict());
        }
    }
});
