//! Outbound signals: navigation targets and user-visible notifications.
//!
//! The router and the notification presenter are external collaborators; the
//! session only hands them values and never knows how they render.

use serde::{Deserialize, Serialize};

use savora_catalog::RestaurantId;

/// Default toast duration, matching the UI's short toasts.
pub const DEFAULT_TOAST_MS: u32 = 3_000;

/// Navigation targets. Opaque to the session; the router decides what a
/// route means.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    Home,
    Restaurants {
        category: Option<String>,
        search: Option<String>,
    },
    RestaurantMenu(RestaurantId),
    Cart,
    Checkout,
}

/// Toast severity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Destructive,
}

/// User-visible toast payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub message: Option<String>,
    pub severity: Severity,
    pub duration_ms: u32,
}

impl Notification {
    pub fn info(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: None,
            severity: Severity::Info,
            duration_ms: DEFAULT_TOAST_MS,
        }
    }

    pub fn destructive(title: impl Into<String>) -> Self {
        Self {
            severity: Severity::Destructive,
            ..Self::info(title)
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

/// Receives navigation signals.
pub trait Router {
    fn navigate(&mut self, route: Route);
}

/// Presents notifications to the user.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}
