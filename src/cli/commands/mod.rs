mod helpers;
mod init;
mod list;
mod outputs;
mod provision;

pub use init::execute_init;
pub use list::execute_list;
pub use outputs::execute_outputs;
pub use provision::{execute_provision, provision, ProvisionReport};
