//! Host environment: the platform services the form runs inside

mod terminal;
mod traits;

pub use terminal::TerminalHost;
pub use traits::{ColorScheme, HostEnvironment, HostUser, ThemeParams};

#[cfg(test)]
pub use traits::MockHostEnvironment;
