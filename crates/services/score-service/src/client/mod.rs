//! Clients for the services this one depends on.

mod debts_client;

pub use debts_client::{DebtsClient, HttpDebtsClient, RemoteDebt};

#[cfg(any(test, feature = "test-utils"))]
pub use debts_client::MockDebtsClient;
