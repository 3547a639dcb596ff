use log::{error, warn};
use sedir_business::{BusinessConfig, Route, SearchState, UserDetailsState, build_state_ctx};
use sedir_states::StateCtx;

/// The main application state.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl Default for State {
    /// Reads `SEDIR_*` variables, falling back to the public API.
    fn default() -> Self {
        let config = BusinessConfig::from_env().unwrap_or_else(|err| {
            warn!("Ignoring invalid environment configuration: {err}");
            BusinessConfig::default()
        });
        Self::with_config(config)
    }
}

impl State {
    pub fn with_config(config: BusinessConfig) -> Self {
        let ctx = match build_state_ctx(config.clone()) {
            Ok(ctx) => ctx,
            Err(err) => {
                // Screens still render; every fetch reports the missing client.
                error!("Failed to build the HTTP client: {err}");
                let mut ctx = StateCtx::new();
                ctx.add_state(config);
                ctx.add_state(SearchState::default());
                ctx.add_state(Route::default());
                ctx.add_state(UserDetailsState::default());
                ctx
            }
        };
        Self { ctx }
    }

    pub fn test(base_url: String) -> Self {
        Self::with_config(BusinessConfig::new(base_url))
    }
}
