//! Example: Display what the probe sees
//!
//! Run with: cargo run -p term-probe --example probe_info
//! Then again with stderr redirected: cargo run -p term-probe --example probe_info 2>/dev/null

use term_probe::{ProbeReport, StdStream, console_size, try_console_width};

fn main() {
    let report = ProbeReport::default();

    println!("=== Width (stderr) ===\n");
    match try_console_width() {
        Ok(cols) => println!("Columns: {cols}"),
        Err(e) => println!("Columns: unknown ({e})"),
    }
    if let Some((cols, rows)) = console_size() {
        println!("Size:    {cols}x{rows}");
    }

    println!("\n=== TTY ===\n");
    for stream in StdStream::ALL {
        println!(
            "{:<7} {}",
            format!("{stream}:"),
            if report.is_tty(stream) { "yes" } else { "no" }
        );
    }
}
