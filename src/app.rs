use std::path::Path;

use tracing::{debug, info, warn};

use crate::{
    error::Result,
    filter::FilterSpec,
    helpers::nice_kib,
    manager::ProcessLister,
    output,
    ranker::{self, Ranking},
};

/// Snapshot, rank and write the output file. Nothing is written if the
/// snapshot fails. No match still writes an empty file.
pub fn run(lister: &mut dyn ProcessLister, filter: &FilterSpec, out: &Path) -> Result<Ranking> {
    let procs = lister.snapshot()?;
    let ranking = ranker::rank(&procs, filter);

    if ranking.is_empty() {
        warn!(pattern = filter.pattern(), "no process matches");
    } else {
        info!(
            pattern = filter.pattern(),
            matched = ranking.matched,
            pids = ?ranking.pids(),
            "ranked processes"
        );
        for (i, p) in ranking.entries.iter().enumerate() {
            debug!(rank = i + 1, pid = p.pid, name = %p.name, rss = %nice_kib(p.memory));
        }
    }

    output::write_atomic(out, output::serialize(&ranking).as_bytes())?;
    info!(path = %out.display(), "wrote pids");
    Ok(ranking)
}
