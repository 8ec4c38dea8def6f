//! Smoke driver: the basic init / log / cleanup cycle against `./errorlog.txt`.

use std::process::ExitCode;

use errlog::{error_record, global, init_tracing, Classify, ErrorKind, ErrorRecord, RecordError};

type Step = (&'static str, ErrorKind);

fn main() -> ExitCode {
    init_tracing();

    // Built here so the record names `main` as its function.
    let record = error_record!(ErrorKind::Success, "testing if this works");
    match run(record) {
        Ok(()) => {
            println!("All tests passed!");
            ExitCode::SUCCESS
        }
        Err((step, kind)) => {
            if kind.is_lifecycle_violation() {
                tracing::error!(step, %kind, "record handle misused");
            } else {
                tracing::error!(step, %kind, "smoke step failed");
            }
            eprintln!("{step} returned {kind}");
            ExitCode::from(kind.code())
        }
    }
}

fn run(record: Result<ErrorRecord, RecordError>) -> Result<(), Step> {
    check("init_global_ctx", global::init_global_ctx().kind())?;
    check("set_log_on", global::set_log_on().kind())?;
    check("set_log_file", global::set_log_file("./errorlog.txt").kind())?;

    let rec = record
        .and_then(global::insert_record)
        .map_err(|err| ("init_error_struct", err.kind()))?;

    check("log_error", global::log_error(rec).kind())?;
    check("cleanup_global_ctx", global::cleanup_global_ctx().kind())?;
    check("destroy_error_struct", global::destroy_error_struct(rec).kind())
}

fn check(step: &'static str, kind: ErrorKind) -> Result<(), Step> {
    if kind.is_success() {
        Ok(())
    } else {
        Err((step, kind))
    }
}
