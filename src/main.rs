//! fixomax (fx) - civic issue reporting tool
//!
//! Citizens submit and look up issues; administrators triage them behind a
//! password gate. One local `SQLite` table, no daemon, no background work.

fn main() {
    if let Err(e) = fixomax::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
