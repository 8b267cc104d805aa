mod account_actor;
#[cfg(test)]
mod tests;

pub use account_actor::{AccountActor, AccountHandle, ActorError};
