//! # Auth Module
//!
//! The logged-in flag and the page gate built on it.
//!
//! There are no credentials: a session is either logged in or a guest. The
//! gate decides, per page, whether to render it or send the visitor
//! elsewhere.
//!
//! | Page             | Guest                  | Logged in            |
//! |------------------|------------------------|----------------------|
//! | `/`              | render                 | render               |
//! | `/dashboard`     | → `/demo-dashboard`    | render               |
//! | `/demo-dashboard`| render                 | → `/dashboard`       |
//! | `/upload`        | → `/`                  | render               |
//! | `/analysis`      | render                 | render               |

use crate::route::Page;
use serde::{Deserialize, Serialize};

/// Per-visitor session state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Whether the visitor has signed in.
    pub logged_in: bool,
}

impl Session {
    /// A visitor who has not signed in.
    #[must_use]
    pub const fn guest() -> Self {
        Self { logged_in: false }
    }

    /// A signed-in visitor.
    #[must_use]
    pub const fn member() -> Self {
        Self { logged_in: true }
    }

    /// Set the flag.
    pub fn login(&mut self) {
        self.logged_in = true;
    }

    /// Clear the flag.
    pub fn logout(&mut self) {
        self.logged_in = false;
    }
}

/// Outcome of the gate for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Show the requested page.
    Render,
    /// Send the visitor to another page instead.
    Redirect(Page),
}

impl Access {
    /// Check if the page may be rendered.
    #[must_use]
    pub fn is_render(self) -> bool {
        matches!(self, Self::Render)
    }
}

/// Decide what a visitor with `session` sees when requesting `page`.
#[must_use]
pub fn gate(page: Page, session: Session) -> Access {
    match (page, session.logged_in) {
        (Page::Dashboard, false) => Access::Redirect(Page::DemoDashboard),
        (Page::DemoDashboard, true) => Access::Redirect(Page::Dashboard),
        (Page::Upload, false) => Access::Redirect(Page::Home),
        _ => Access::Render,
    }
}

/// The page a visitor should land on for "the dashboard".
#[must_use]
pub fn dashboard_for(session: Session) -> Page {
    if session.logged_in {
        Page::Dashboard
    } else {
        Page::DemoDashboard
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guest_is_sent_to_demo_dashboard() {
        assert_eq!(
            gate(Page::Dashboard, Session::guest()),
            Access::Redirect(Page::DemoDashboard)
        );
        assert!(gate(Page::DemoDashboard, Session::guest()).is_render());
    }

    #[test]
    fn member_is_sent_away_from_demo_dashboard() {
        assert_eq!(
            gate(Page::DemoDashboard, Session::member()),
            Access::Redirect(Page::Dashboard)
        );
        assert!(gate(Page::Dashboard, Session::member()).is_render());
    }

    #[test]
    fn upload_requires_login() {
        assert_eq!(
            gate(Page::Upload, Session::guest()),
            Access::Redirect(Page::Home)
        );
        assert!(gate(Page::Upload, Session::member()).is_render());
    }

    #[test]
    fn public_pages_render_for_everyone() {
        for session in [Session::guest(), Session::member()] {
            assert!(gate(Page::Home, session).is_render());
            assert!(gate(Page::Analysis, session).is_render());
        }
    }

    #[test]
    fn no_redirect_targets_a_page_that_redirects_back() {
        for session in [Session::guest(), Session::member()] {
            for page in Page::ALL {
                if let Access::Redirect(target) = gate(page, session) {
                    assert!(gate(target, session).is_render(), "{page} -> {target}");
                }
            }
        }
    }

    #[test]
    fn login_and_logout_toggle_flag() {
        let mut session = Session::default();
        assert!(!session.logged_in);
        session.login();
        assert_eq!(session, Session::member());
        session.logout();
        assert_eq!(session, Session::guest());
        assert_eq!(dashboard_for(session), Page::DemoDashboard);
    }
}
