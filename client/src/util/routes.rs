//! Client route paths.

pub const HOME_ROUTE: &str = "/";
pub const LOGIN_ROUTE: &str = "/login";
pub const FAQ_ROUTE: &str = "/faq";
pub const SIGNUP_ROUTE: &str = "/signup";
pub const RESET_PASSWORD_ROUTE: &str = "/reset-password";
