//! Global Tokio runtime for async HTTP operations.
//!
//! egui renders on the main thread and has no async context of its own, but
//! reqwest requires a tokio runtime. Handlers spawn network tasks here and
//! results return to the main thread over the app event channel.
//!
//! Usage:
//! ```rust,ignore
//! use crate::utils::runtime::TOKIO_RT;
//!
//! TOKIO_RT.spawn(async move {
//!     let result = api.list_expenses(30).await;
//!     let _ = event_tx.send(AppEvent::ExpensesLoaded { seq, result }).await;
//! });
//! ```

use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Runtime::new().expect("Failed to create Tokio runtime for async HTTP operations")
});
