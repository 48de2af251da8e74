mod execute;
pub use execute::*;
mod progress;
pub use progress::Progress;
pub mod verbs;
