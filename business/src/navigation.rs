//! Navigation by state: the current [`Route`] plus the user shown on the
//! details screen.

use log::info;
use sedir_states::{State, StateCtx};

use crate::model::User;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Search,
    Details,
}

impl State for Route {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDetailsState {
    pub user: Option<User>,
}

impl UserDetailsState {
    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
    }

    pub fn clear(&mut self) {
        self.user = None;
    }
}

impl State for UserDetailsState {}

pub fn open_details(ctx: &mut StateCtx, user: User) {
    info!("Opening details for user {}", user.id);
    if let Some(details) = ctx.state_mut::<UserDetailsState>() {
        details.set_user(user);
    }
    if let Some(route) = ctx.state_mut::<Route>() {
        *route = Route::Details;
    }
}

/// Returns to the list and forgets the selected user.
pub fn back_to_search(ctx: &mut StateCtx) {
    if let Some(details) = ctx.state_mut::<UserDetailsState>() {
        details.clear();
    }
    if let Some(route) = ctx.state_mut::<Route>() {
        *route = Route::Search;
    }
}

/// The route to render. Details without a selected user falls back to search.
pub fn current_route(ctx: &StateCtx) -> Route {
    match ctx.state::<Route>().copied().unwrap_or_default() {
        Route::Details
            if ctx
                .state::<UserDetailsState>()
                .is_some_and(|details| details.user.is_some()) =>
        {
            Route::Details
        }
        _ => Route::Search,
    }
}
