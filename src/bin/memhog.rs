//! Idle process holding a fixed block of resident memory.
//!
//! `memhog [INSTANCE]` keeps `SIZES_MB[INSTANCE % 8]` MiB resident, prints
//! `ready <pid> <mib>` once the memory is touched, then sleeps until killed.

use std::{io::Write, thread, time::Duration};

use gumdrop::Options;

const SIZES_MB: [usize; 8] = [10, 20, 30, 40, 50, 60, 70, 80];

#[derive(Options)]
struct Args {
    #[options(free, help = "Instance number, picks the size")]
    instance: Option<usize>,

    #[options(help = "Print help message")]
    help: bool,
}

fn main() {
    let ops = Args::parse_args_default_or_exit();
    let instance = ops.instance.unwrap_or(0);
    let mib = SIZES_MB[instance % SIZES_MB.len()];

    //non-zero fill so every page is really resident
    let buffer = std::hint::black_box(vec![1u8; mib * 1024 * 1024]);

    let mut stdout = std::io::stdout();
    let _ = writeln!(stdout, "ready {} {}", std::process::id(), mib);
    let _ = stdout.flush();

    loop {
        thread::sleep(Duration::from_secs(60));
        let _ = std::hint::black_box(&buffer);
    }
}
