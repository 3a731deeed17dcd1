//! Hash-route discriminator
//!
//! The admin surface is reached through its own route value, independent of
//! the main flow step.

/// The view selected by the current route string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The five-step main application.
    Main,
    /// Admin login form.
    AdminLogin,
    /// Admin earnings dashboard; requires an authenticated session, callers
    /// redirect to [`Route::AdminLogin`] otherwise.
    AdminDashboard,
}

impl Route {
    pub fn parse(hash: &str) -> Self {
        match hash {
            "#/admin" => Self::AdminLogin,
            "#/dashboard" => Self::AdminDashboard,
            _ => Self::Main,
        }
    }
}
