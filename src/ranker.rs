use std::cmp::Reverse;

use crate::{filter::FilterSpec, record::ProcessRecord};

/// Most processes a ranking keeps.
pub const TOP_COUNT: usize = 3;

/// Matching processes, largest resident memory first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ranking {
    pub entries: Vec<ProcessRecord>,
    /// Number of matching processes before truncation.
    pub matched: usize,
}

impl Ranking {
    pub fn pids(&self) -> Vec<u32> {
        self.entries.iter().map(|p| p.pid).collect()
    }

    /// Nothing matched the filter.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Filter the snapshot and keep the `TOP_COUNT` largest by resident memory.
///
/// Equal memory is ordered by ascending pid, so a fixed snapshot always ranks
/// the same way whatever order the records arrive in.
pub fn rank(procs: &[ProcessRecord], filter: &FilterSpec) -> Ranking {
    let mut entries: Vec<ProcessRecord> =
        procs.iter().filter(|p| filter.matches(p)).cloned().collect();
    let matched = entries.len();

    entries.sort_by_key(|a| (Reverse(a.memory), a.pid));
    entries.truncate(TOP_COUNT);

    Ranking { entries, matched }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const MB: u64 = 1024;

    fn workers() -> Vec<ProcessRecord> {
        vec![
            ProcessRecord::new(1, "systemd", 12 * MB),
            ProcessRecord::new(101, "worker", 80 * MB),
            ProcessRecord::new(102, "worker", 10 * MB),
            ProcessRecord::new(7, "bash", 4 * MB),
            ProcessRecord::new(103, "worker", 50 * MB),
            ProcessRecord::new(104, "worker", 30 * MB),
            ProcessRecord::new(105, "worker", 20 * MB),
            ProcessRecord::new(900, "postgres", 300 * MB),
        ]
    }

    #[test]
    fn top_three_workers() {
        let filter = FilterSpec::new("worker").unwrap();
        let ranking = rank(&workers(), &filter);
        assert_eq!(ranking.pids(), vec![101, 103, 104]);
        assert_eq!(ranking.matched, 5);
    }

    #[test]
    fn no_match() {
        let filter = FilterSpec::new("nginx").unwrap();
        let ranking = rank(&workers(), &filter);
        assert!(ranking.is_empty());
        assert_eq!(ranking.matched, 0);
    }

    #[test]
    fn single_match() {
        let filter = FilterSpec::new("postgres").unwrap();
        assert_eq!(rank(&workers(), &filter).pids(), vec![900]);
    }

    #[test]
    fn ties_go_to_lower_pid() {
        let procs = vec![
            ProcessRecord::new(220, "worker", 40 * MB),
            ProcessRecord::new(210, "worker", 40 * MB),
            ProcessRecord::new(230, "worker", 90 * MB),
            ProcessRecord::new(200, "worker", 40 * MB),
        ];
        let filter = FilterSpec::new("worker").unwrap();
        assert_eq!(rank(&procs, &filter).pids(), vec![230, 200, 210]);
    }

    #[test]
    fn matches_short_name_only() {
        let procs = vec![
            ProcessRecord::new(10, "python3", 90 * MB),
            ProcessRecord::new(11, "dummy_process", 10 * MB),
        ];
        let filter = FilterSpec::new("dummy").unwrap();
        assert_eq!(rank(&procs, &filter).pids(), vec![11]);
    }

    fn table() -> impl Strategy<Value = Vec<ProcessRecord>> {
        let names = prop::sample::select(vec!["worker", "coworker", "Worker", "bash", "sshd"]);
        prop::collection::btree_map(1u32..5000, (names, 0u64..4), 0..40).prop_map(|m| {
            m.into_iter()
                //coarse memory values so ties are common
                .map(|(pid, (name, mem))| ProcessRecord::new(pid, name, mem * MB))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn ranking_invariants(procs in table()) {
            let filter = FilterSpec::new("worker").unwrap();
            let ranking = rank(&procs, &filter);

            prop_assert!(ranking.entries.len() <= TOP_COUNT);
            prop_assert_eq!(ranking.entries.len(), ranking.matched.min(TOP_COUNT));
            for p in &ranking.entries {
                prop_assert!(p.name.contains("worker"));
                prop_assert!(procs.contains(p));
            }
            for pair in ranking.entries.windows(2) {
                prop_assert!(pair[0].memory >= pair[1].memory);
                prop_assert!(pair[0].pid != pair[1].pid);
            }
            //nothing left out is bigger than the last one kept
            if let Some(last) = ranking.entries.last() {
                let kept = ranking.pids();
                for p in procs.iter().filter(|p| filter.matches(p) && !kept.contains(&p.pid)) {
                    prop_assert!(p.memory <= last.memory);
                }
            }
        }

        #[test]
        fn ranking_ignores_input_order(procs in table(), seed in any::<u64>()) {
            let filter = FilterSpec::new("worker").unwrap();
            let mut shuffled = procs.clone();
            //cheap deterministic permutation
            let n = shuffled.len().max(1);
            shuffled.rotate_left((seed as usize) % n);
            shuffled.reverse();
            prop_assert_eq!(rank(&procs, &filter), rank(&shuffled, &filter));
        }
    }
}
