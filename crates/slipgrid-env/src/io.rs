use std::{fs, path::Path};

use slipgrid_core::DynamicsTable;

use crate::{LakeError, LakeLayout, build_dynamics};

/// Load a lake layout from YAML on disk.
pub fn load_layout(path: impl AsRef<Path>) -> Result<LakeLayout, LakeError> {
    let yaml = fs::read_to_string(path)?;
    let layout: LakeLayout = serde_yaml::from_str(&yaml)?;
    Ok(layout)
}

/// Load a layout from a YAML file and build its dynamics table.
pub fn dynamics_from_yaml(path: impl AsRef<Path>) -> Result<DynamicsTable, LakeError> {
    let layout = load_layout(path)?;
    build_dynamics(&layout)
}

/// Serialize and write a lake layout to YAML.
pub fn save_layout(path: impl AsRef<Path>, layout: &LakeLayout) -> Result<(), LakeError> {
    let yaml = serde_yaml::to_string(layout)?;
    fs::write(path, yaml)?;
    Ok(())
}
