mod action;
mod dynamics;
mod env;
mod error;
mod io;
mod layout;

pub use action::Action;
pub use dynamics::build_dynamics;
pub use env::{LakeEnv, Step, StepInfo};
pub use error::LakeError;
pub use io::{dynamics_from_yaml, load_layout, save_layout};
pub use layout::LakeLayout;
