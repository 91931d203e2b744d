mod client;
mod error;
mod gateway;
mod poller;
mod types;

pub use client::TelegramClient;
pub use error::{Result, TelegramError};
pub use gateway::{ChatGateway, DeliveryOutcome, deliver};
pub use poller::run_update_poller;
pub use types::{Chat, Message, Update, User};
