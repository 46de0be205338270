// src/azure/account.rs
use super::{require_non_empty, to_args, AzError, AzureCli, CommandRunner};

/// Account operations (subscription selection)
pub struct AccountCli<'a, R: CommandRunner> {
    pub(super) az: &'a AzureCli<R>,
}

impl<R: CommandRunner> AccountCli<'_, R> {
    /// Make `subscription_id` the default for every later `az` call
    pub fn set_subscription(&self, subscription_id: &str) -> Result<(), AzError> {
        require_non_empty("set_subscription", "subscription id", subscription_id)?;

        self.az
            .run(&to_args(&["account", "set", "-s", subscription_id]))?;
        tracing::info!(subscription = subscription_id, "active subscription set");
        Ok(())
    }
}
