/// One row of a process table snapshot. `memory` is resident memory in KiB.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessRecord {
    pub pid: u32,
    pub name: String,
    pub memory: u64,
}

impl ProcessRecord {
    pub fn new(pid: u32, name: impl Into<String>, memory: u64) -> Self {
        Self {
            pid,
            name: name.into(),
            memory,
        }
    }
}
