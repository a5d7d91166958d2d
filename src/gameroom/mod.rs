pub mod agent;
pub use agent::*;

pub mod bot;
pub use bot::*;

pub mod channel;
pub use channel::*;

pub mod claim;
pub use claim::*;

pub mod config;
pub use config::*;

pub mod dealer;
pub use dealer::*;

pub mod event;
pub use event::*;

pub mod ui;
pub use ui::*;
