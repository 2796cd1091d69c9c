//! Location permission state machine.
//!
//! Tracks the user's position-sharing consent for the discovery view. The
//! platform's distances are authored into the catalog and are **not**
//! recomputed when permission is granted: the grant is acknowledged and
//! nothing else changes. That is a known limitation of the current product,
//! not something this module should quietly fix.
//!
//! Transitions:
//!
//! ```text
//! idle ──(settle, no user action)──► fallback
//! idle/fallback/granted/denied ──(user requests)──► loading
//! loading ──(platform grants)──► granted
//! loading ──(platform denies)──► denied
//! ```
//!
//! There are no automatic retries; only an explicit user action re-enters
//! `loading`.

use serde::{Deserialize, Serialize};

/// Consent status for using the device position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationStatus {
    /// Initial state, before the view has settled.
    #[default]
    Idle,
    /// A platform permission request is in flight.
    Loading,
    Granted,
    Denied,
    /// No request was ever made; the view uses the city-centre default.
    Fallback,
}

/// The permission flow for one discovery session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocationPermission {
    status: LocationStatus,
}

impl LocationPermission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> LocationStatus {
        self.status
    }

    /// Settles an untouched session into the fallback state.
    ///
    /// Called when the view mounts with no prior status; a session in any
    /// other state is left alone.
    pub fn settle_fallback(&mut self) {
        if self.status == LocationStatus::Idle {
            self.status = LocationStatus::Fallback;
        }
    }

    /// An explicit user action asking to use the device position.
    ///
    /// Valid from every state except an already-in-flight request: asking
    /// again while `loading` is a no-op, re-asking after a denial starts a
    /// fresh request.
    pub fn request(&mut self) {
        if self.status != LocationStatus::Loading {
            self.status = LocationStatus::Loading;
        }
    }

    /// Platform response: permission granted.
    ///
    /// Only meaningful while a request is in flight; a stray response in any
    /// other state is ignored. Returns whether the transition happened.
    pub fn grant(&mut self) -> bool {
        if self.status == LocationStatus::Loading {
            self.status = LocationStatus::Granted;
            true
        } else {
            false
        }
    }

    /// Platform response: permission denied (or geolocation unavailable).
    ///
    /// Only meaningful while a request is in flight. Returns whether the
    /// transition happened.
    pub fn deny(&mut self) -> bool {
        if self.status == LocationStatus::Loading {
            self.status = LocationStatus::Denied;
            true
        } else {
            false
        }
    }
}
