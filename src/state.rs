use std::sync::Arc;
use crate::config::Config;
use crate::domain::services::membership::MembershipService;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub membership_service: Arc<MembershipService>,
}
