use formato::Formato;

/// Human readable size for a value in KiB.
pub fn nice_kib(kib: u64) -> String {
    let format = "#.0";
    let val = kib as f64;
    if kib == 0 {
        "0K".to_string()
    } else if val < 5000.0 {
        format!("{}K", val.formato(format))
    } else if val < 50000.0 * 1024.0 {
        format!("{}M", (val / 1024.).formato(format))
    } else {
        format!("{}G", (val / 1024. / 1024.).formato(format))
    }
}
