use std::path::PathBuf;

use slipgrid_core::{EvalConfig, Policy, policy_evaluation};
use slipgrid_env::{LakeLayout, build_dynamics, load_layout};

fn main() {
    let layout = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => load_layout(&path).expect("failed to load layout YAML"),
        None => LakeLayout::default(),
    };

    let dynamics = build_dynamics(&layout).expect("failed to build dynamics table");

    // The reference policy for the canonical 4x4 board; any other board gets
    // an all-Down placeholder.
    let policy = if layout.num_states() == 16 {
        Policy::from_indices(&[2, 0, 1, 3, 0, 1, 2, 3, 3, 1, 3, 3, 0, 2, 2, 3])
    } else {
        Policy::from_indices(&vec![1; layout.num_states()])
    };

    let config = EvalConfig {
        gamma: 0.9,
        ..EvalConfig::default()
    };

    let values = policy_evaluation(&policy, &dynamics, &config, &layout.terminal_states())
        .expect("policy evaluation failed");

    for row in 0..layout.grid_size {
        let line = (0..layout.grid_size)
            .map(|col| format!("{:8.5}", values[layout.state_at(row, col)]))
            .collect::<Vec<_>>()
            .join(" ");
        println!("{line}");
    }
}
