use std::{fmt, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::mdp::{
    error::EvalError,
    ids::StateId,
    policy::Policy,
    table::DynamicsTable,
};

const DEFAULT_EVAL_CONFIG_YAML: &str = include_str!("../../config/eval.default.yaml");

/// Configuration for iterative policy evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Discount factor in `[0, 1]`.
    pub gamma: f64,
    /// Convergence threshold on the max-norm sweep delta.
    pub theta: f64,
    /// Safety cap on sweeps; exceeding it fails with `NonConvergence`.
    pub max_sweeps: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            gamma: 1.0,
            theta: 1e-10,
            max_sweeps: 1_000_000,
        }
    }
}

impl EvalConfig {
    /// Parse an evaluation config from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, EvalConfigError> {
        let config: EvalConfig = serde_yaml::from_str(yaml).map_err(EvalConfigError::Yaml)?;
        config
            .validate()
            .map_err(|err| EvalConfigError::Invalid(err.to_string()))?;
        Ok(config)
    }

    /// Parse an evaluation config from a YAML file path.
    pub fn from_yaml_path(path: impl AsRef<Path>) -> Result<Self, EvalConfigError> {
        let yaml = fs::read_to_string(path).map_err(EvalConfigError::Io)?;
        Self::from_yaml_str(&yaml)
    }

    /// Return the default YAML config included with this crate.
    pub fn default_yaml() -> &'static str {
        DEFAULT_EVAL_CONFIG_YAML
    }

    /// Parse the default YAML config included with this crate.
    pub fn from_default_yaml() -> Result<Self, EvalConfigError> {
        Self::from_yaml_str(Self::default_yaml())
    }

    fn validate(&self) -> Result<(), EvalError> {
        if !self.gamma.is_finite() || !(0.0..=1.0).contains(&self.gamma) {
            return Err(EvalError::InvalidGamma { value: self.gamma });
        }
        if !self.theta.is_finite() || self.theta <= 0.0 {
            return Err(EvalError::InvalidTheta { value: self.theta });
        }
        if self.max_sweeps == 0 {
            return Err(EvalError::ZeroSweepCap);
        }
        Ok(())
    }
}

/// Error type for loading and validating `EvalConfig`.
#[derive(Debug)]
pub enum EvalConfigError {
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
    Invalid(String),
}

impl fmt::Display for EvalConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalConfigError::Io(err) => write!(f, "failed to read config file: {err}"),
            EvalConfigError::Yaml(err) => write!(f, "failed to parse config YAML: {err}"),
            EvalConfigError::Invalid(err) => write!(f, "invalid evaluation config: {err}"),
        }
    }
}

impl std::error::Error for EvalConfigError {}

/// Per-sweep metrics emitted by the evaluator.
#[derive(Debug, Clone, Copy)]
pub struct SweepMetrics {
    pub sweep: usize,
    pub max_delta: f64,
}

/// Result of a converged evaluation run.
#[derive(Debug, Clone)]
pub struct EvalRun {
    pub values: Vec<f64>,
    pub sweeps_completed: usize,
    pub final_delta: f64,
}

/// Compute the value function of a fixed policy.
///
/// Runs synchronous sweeps of the Bellman expectation update until the
/// max-norm difference between consecutive sweeps drops below
/// `config.theta`, and returns the converged value vector. States listed in
/// `terminal_states` are absorbing with value 0 by convention, regardless of
/// what the table encodes for them.
pub fn policy_evaluation(
    policy: &Policy,
    table: &DynamicsTable,
    config: &EvalConfig,
    terminal_states: &[StateId],
) -> Result<Vec<f64>, EvalError> {
    policy_evaluation_with_hook(policy, table, config, terminal_states, |_| {})
        .map(|run| run.values)
}

/// Run policy evaluation and invoke a callback after each completed sweep.
pub fn policy_evaluation_with_hook<FHook>(
    policy: &Policy,
    table: &DynamicsTable,
    config: &EvalConfig,
    terminal_states: &[StateId],
    mut on_sweep: FHook,
) -> Result<EvalRun, EvalError>
where
    FHook: FnMut(&SweepMetrics),
{
    config.validate()?;

    let num_states = table.num_states();
    let mut terminal = vec![false; num_states];
    for state in terminal_states {
        if state.index() >= num_states {
            return Err(EvalError::TerminalStateOutOfRange {
                state: *state,
                num_states,
            });
        }
        terminal[state.index()] = true;
    }

    // All domain errors surface here, before the first sweep.
    policy.validate(table, &terminal)?;

    let mut previous = vec![0.0_f64; num_states];
    let mut current = vec![0.0_f64; num_states];
    let mut max_delta = f64::INFINITY;

    for sweep in 0..config.max_sweeps {
        for s in 0..num_states {
            if terminal[s] {
                current[s] = 0.0;
                continue;
            }

            let state = StateId::from(s);
            let mut value = 0.0;
            if let Some(outcomes) = table.outcomes(state, policy.action(state)) {
                for t in outcomes {
                    let carry = if t.terminal {
                        0.0
                    } else {
                        previous[t.next.index()]
                    };
                    value += t.probability * (t.reward + config.gamma * carry);
                }
            }
            current[s] = value;
        }

        max_delta = previous
            .iter()
            .zip(&current)
            .map(|(p, c)| (p - c).abs())
            .fold(0.0, f64::max);

        on_sweep(&SweepMetrics { sweep, max_delta });

        if max_delta < config.theta {
            return Ok(EvalRun {
                values: current,
                sweeps_completed: sweep + 1,
                final_delta: max_delta,
            });
        }

        previous.copy_from_slice(&current);
    }

    Err(EvalError::NonConvergence {
        sweeps: config.max_sweeps,
        max_delta,
    })
}
