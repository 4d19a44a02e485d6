//! `savora-app` — the session layer over the ordering domain.
//!
//! **Responsibility:** own the catalog, cart, and checkout state for one
//! user session, turn UI-level operations into domain commands, and emit
//! navigation/notification signals through the [`Router`] and [`Notifier`]
//! collaborators. No module-level state: everything lives on [`AppSession`].

pub mod session;
pub mod signals;
pub mod view;

pub use session::{AppSession, PromoOutcome};
pub use signals::{Notification, Notifier, Route, Router, Severity};
pub use view::{CartView, HomeView};
