use std::env;

use anyhow::{anyhow, bail, Context, Result};
use log::{debug, info};

use scheduler::{resolve_policy, DecisionContext, Pid, Policy, Scheduler, Timestamp};

mod logger;
mod workload;

use workload::Workload;

const DEFAULT_TICKS: usize = 60;

/// Replays `workload` under `policy` and returns the pid chosen at every
/// tick, `None` for the ticks the CPU idled
pub fn replay(policy: &dyn Scheduler, workload: &mut Workload, ticks: usize) -> Vec<Option<Pid>> {
    let mut decisions = Vec::new();
    let mut running: Option<Pid> = None;

    for tick in 0..ticks {
        if workload.is_done() {
            break;
        }

        let snapshot = workload.snapshot(tick);
        let decision = {
            let ctx = DecisionContext::new(&snapshot, Timestamp::new(tick), running, &*workload);
            policy.select_next(&ctx)
        };

        if let Some(pid) = decision {
            if !workload.execute(pid, tick) {
                debug!("tick {}: pid {} is blocked, cpu wasted", tick, pid);
            }
        }

        running = decision.filter(|&pid| workload.is_live(pid));
        decisions.push(decision);
    }

    decisions
}

fn main() -> Result<()> {
    logger::init().map_err(|err| anyhow!("cannot install the logger: {:?}", err))?;

    let mut args = env::args().skip(1);
    let Some(name) = args.next() else {
        bail!("usage: runner <{}> [ticks]", Policy::NAMES.join("|"));
    };
    let ticks = match args.next() {
        Some(value) => value
            .parse::<usize>()
            .with_context(|| format!("invalid tick count '{}'", value))?,
        None => DEFAULT_TICKS,
    };

    let policy = resolve_policy(&name);
    info!("replaying the demo workload with {} for {} ticks", policy, ticks);

    let mut workload = Workload::demo();
    for (tick, decision) in replay(&policy, &mut workload, ticks).iter().enumerate() {
        match decision {
            Some(pid) => println!("{:>4} {}", tick, pid),
            None => println!("{:>4} idle", tick),
        }
    }

    Ok(())
}
