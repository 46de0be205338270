// src/azure/group.rs
use super::{get_path, require_non_empty, to_args, AzError, AzureCli, CommandRunner};

const SUCCEEDED: &str = "Succeeded";

/// Resource group operations
pub struct GroupCli<'a, R: CommandRunner> {
    pub(super) az: &'a AzureCli<R>,
}

impl<R: CommandRunner> GroupCli<'_, R> {
    /// Create a resource group, or report on it if it already exists.
    ///
    /// Returns true only when `properties.provisioningState` is exactly
    /// `Succeeded`.
    pub fn create(&self, name: &str, region: &str) -> Result<bool, AzError> {
        require_non_empty("create_resource_group", "group name", name)?;
        require_non_empty("create_resource_group", "region", region)?;

        let response = self
            .az
            .run_json(&to_args(&["group", "create", "-n", name, "-l", region]))?;

        let state = get_path(&response, &["properties", "provisioningState"])
            .and_then(|v| v.as_str());
        tracing::info!(group = name, region, state = ?state, "resource group create");

        Ok(state == Some(SUCCEEDED))
    }
}
