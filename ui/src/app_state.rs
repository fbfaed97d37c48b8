use api::portfolio::SolanaPortfolioService;
use api::prefs::user_prefs::UserPrefs;
use std::ops::Deref;
use std::sync::Arc;

pub struct AppStateData {
    pub prefs: UserPrefs,
    pub portfolio_service: SolanaPortfolioService,
}

/// Immutable app-wide state, shared through a Dioxus context.
#[derive(Clone)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(prefs: UserPrefs) -> Self {
        let portfolio_service = SolanaPortfolioService::from_prefs(&prefs);
        Self(Arc::new(AppStateData {
            prefs,
            portfolio_service,
        }))
    }
}
