pub mod actors;
pub mod clock;
pub mod models;
pub mod types;

pub use actors::{AccountActor, AccountHandle, ActorError};
pub use clock::{Clock, ManualClock, SystemClock};
pub use models::{Account, AccountCounter, AccountError, AccountStatus, Transaction, TransactionKind};
pub use types::AccountId;
