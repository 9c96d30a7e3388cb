//! Mock indexing daemon binary for integration testing
//!
//! Emits the same output markers as the real daemon so the harness's
//! handshake and registration synchronization can run without an indexer.
//! Misbehavior is selected through the socket path it is handed: a socket
//! name containing "silent" never prints anything (for exercising marker
//! timeouts), "exit-early" exits before the readiness marker.

use std::io::Write;
use std::thread;
use std::time::Duration;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let socket = args
        .windows(2)
        .find(|pair| pair[0] == "-n")
        .map(|pair| pair[1].clone())
        .unwrap_or_default();

    if socket.contains("exit-early") {
        return;
    }
    if socket.contains("silent") {
        loop {
            thread::sleep(Duration::from_secs(1));
        }
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Includepaths: /usr/include").ok();
    out.flush().ok();

    // One completion line per tick; the harness only scans for the marker,
    // so a periodic emission stands in for real indexing jobs.
    loop {
        thread::sleep(Duration::from_millis(50));
        writeln!(out, "Jobs took 0.01s").ok();
        out.flush().ok();
    }
}
