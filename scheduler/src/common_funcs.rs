use std::fmt;

use log::trace;

use crate::{DecisionContext, Pid, ProcessSnapshot};

/// Start-up rule shared by the policies that need a running process.
///
/// While nothing is running yet, the first process of the snapshot is
/// picked, blocked or not. Returns `None` once a process is running, so the
/// caller goes on with its own rule.
pub fn bootstrap(ctx: &DecisionContext) -> Option<Option<Pid>> {
    match ctx.running {
        None => Some(ctx.first_pid()),
        Some(_) => None,
    }
}

/// Returns the eligible process with the smallest `key`.
///
/// Ties keep the process seen first in the snapshot.
pub fn pick_shortest<F, K>(ctx: &DecisionContext, key: F) -> Option<Pid>
where
    F: Fn(&ProcessSnapshot) -> K,
    K: Ord + Copy + fmt::Display,
{
    ctx.eligible()
        .map(|proc| {
            let value = key(proc);
            trace!("candidate pid {} scores {}", proc.pid, value);
            (proc.pid, value)
        })
        .min_by_key(|&(_, value)| value)
        .map(|(pid, _)| pid)
}
