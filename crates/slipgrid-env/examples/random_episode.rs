use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use slipgrid_env::{Action, LakeEnv, LakeLayout};

fn main() {
    let mut env = LakeEnv::new(LakeLayout::default(), 12345).expect("failed to build environment");
    env.reset(Some(2024), None).expect("reset failed");

    let mut agent_rng = ChaCha8Rng::seed_from_u64(99);

    println!("{}", env.render_to_string());
    loop {
        let action = agent_rng.gen_range(0..Action::ALL.len());
        let step = env.step(action).expect("step failed");
        println!("{}", env.render_to_string());

        if step.done {
            if step.reward > 0.0 {
                println!("Reached the goal in {} steps.", step.info.step_count);
            } else {
                println!("Fell into a hole after {} steps.", step.info.step_count);
            }
            break;
        }
    }

    env.close();
}
