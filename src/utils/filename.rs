use chrono::{Local, NaiveDate};
use std::path::PathBuf;

const OUTPUT_DIR: &str = "output";

/// `output/windgrid-{YYMMDD}.json` for today's local date.
pub fn generate_default_output_filename() -> PathBuf {
    output_filename_for(Local::now().date_naive())
}

pub fn output_filename_for(date: NaiveDate) -> PathBuf {
    PathBuf::from(OUTPUT_DIR).join(format!("windgrid-{}.json", date.format("%y%m%d")))
}
