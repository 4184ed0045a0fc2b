use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System};
use tracing::debug;

use crate::{
    error::{Error, Result},
    record::ProcessRecord,
};

/// Read-only access to the process table.
pub trait ProcessLister {
    /// Take one snapshot. Processes that exit while it is taken are simply absent.
    fn snapshot(&mut self) -> Result<Vec<ProcessRecord>>;
}

/// Live process table as reported by the OS.
pub struct SysinfoLister {
    system: System,
}

impl SysinfoLister {
    pub fn new() -> Self {
        Self {
            system: System::new(),
        }
    }
}

impl Default for SysinfoLister {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessLister for SysinfoLister {
    fn snapshot(&mut self) -> Result<Vec<ProcessRecord>> {
        //only memory is needed, name comes with every refresh
        self.system.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing().with_memory(),
        );

        let procs = self
            .system
            .processes()
            .values()
            .filter(|x| x.thread_kind() != Some(sysinfo::ThreadKind::Userland))
            .map(|x| {
                ProcessRecord::new(
                    x.pid().as_u32(),
                    x.name().to_string_lossy(),
                    x.memory() / 1024,
                )
            })
            .filter(|x| x.pid != 0) //dont want root or errors
            .collect::<Vec<ProcessRecord>>();

        let me = sysinfo::get_current_pid().map_err(|e| Error::Enumeration(e.to_string()))?;
        check_complete(&procs, me.as_u32())?;
        debug!(count = procs.len(), "process table snapshot");
        Ok(procs)
    }
}

///the platform layer has no error channel, so an unreadable table shows up as
///one that is empty or does not even contain ourselves
fn check_complete(procs: &[ProcessRecord], own_pid: u32) -> Result<()> {
    if procs.is_empty() {
        return Err(Error::Enumeration("process table is empty".to_string()));
    }
    if !procs.iter().any(|p| p.pid == own_pid) {
        return Err(Error::Enumeration(format!(
            "own process {own_pid} missing from process table"
        )));
    }
    Ok(())
}

/// Fixed in-memory table, for exercising the ranking without the OS.
#[cfg(test)]
pub struct StaticLister {
    pub procs: Vec<ProcessRecord>,
    pub fail: bool,
}

#[cfg(test)]
impl StaticLister {
    pub fn new(procs: Vec<ProcessRecord>) -> Self {
        Self { procs, fail: false }
    }
    pub fn failing() -> Self {
        Self {
            procs: vec![],
            fail: true,
        }
    }
}

#[cfg(test)]
impl ProcessLister for StaticLister {
    fn snapshot(&mut self) -> Result<Vec<ProcessRecord>> {
        if self.fail {
            return Err(Error::Enumeration("permission denied".to_string()));
        }
        Ok(self.procs.clone())
    }
}
