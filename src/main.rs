use std::process::ExitCode;

fn main() -> ExitCode {
    loadprobe::entry::run()
}
