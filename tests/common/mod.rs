#![allow(dead_code)]

use std::fs;

use unidup::args::{CheckArgs, PlanArgs};
use unidup::document::args::InputArgs;

pub fn ensure_out_dir() {
    fs::create_dir_all("out").unwrap();
}

pub fn write_input_file(file_name: &str, contents: &str) -> String {
    ensure_out_dir();
    let path = format!("out/{}", file_name);
    fs::write(&path, contents).expect("write input file");
    path
}

pub fn input_args(path: &str, lenient: bool) -> InputArgs {
    InputArgs {
        file: path.to_string(),
        lenient,
    }
}

pub fn check_args(path: &str) -> CheckArgs {
    CheckArgs {
        input: input_args(path, false),
        stats: false,
    }
}

pub fn lenient_check_args(path: &str) -> CheckArgs {
    CheckArgs {
        input: input_args(path, true),
        stats: false,
    }
}

pub fn plan_args(path: &str) -> PlanArgs {
    PlanArgs {
        input: input_args(path, false),
    }
}

/// Run the check and return the report as text.
pub fn run_check(args: &CheckArgs) -> (unidup::commands::DuplicateStats, String) {
    let mut buf = Vec::new();
    let stats = unidup::commands::check::check_file(args, &mut buf).expect("check succeeds");
    (stats, String::from_utf8(buf).expect("utf-8 report"))
}

pub const CROSS_COUNTRY: &str = r#"{
  "data": {
    "US": { "universities": [ { "id": 1, "name": "A" } ] },
    "CA": { "universities": [ { "id": 1, "name": "B" } ] }
  }
}"#;
