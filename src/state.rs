use std::sync::Arc;

use crate::config::Config;
use crate::rate_limit::LoginRateLimiter;
use crate::tenancy::TenantRegistry;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub tenants: TenantRegistry,
    pub config: Config,
    /// Embedded-font bytes for invoice rendering. Absent when the TTF is not
    /// installed; only the invoice route degrades.
    pub invoice_font: Option<Arc<Vec<u8>>>,
    pub login_limiter: LoginRateLimiter,
}
