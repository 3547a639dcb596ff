//! Search screen state and the commands that fill it.
//!
//! UI code stays declarative: it reads [`SearchState`], edits the query through
//! [`set_query`] and triggers network work only through [`load_users`],
//! [`submit_search`] or [`retry`]. Both commands share [`USER_FETCH_TASK`], so a
//! newer fetch cancels an older one and the older response is never applied.

use log::{error, info};
use sedir_states::{Command, CommandFuture, CommandSnapshot, State, StateCtx, TaskId, Updater};
use ustr::Ustr;

use crate::directory_state::DirectoryState;
use crate::model::User;
use crate::repository::DirectoryError;
use crate::BusinessConfig;

pub const USER_FETCH_TASK: &str = "users.fetch";

/// Which fetch produced (or is producing) the current list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchAction {
    LoadInitial,
    Search,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    /// Server order.
    pub users: Vec<User>,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub last_action: Option<FetchAction>,
}

impl State for SearchState {}

impl SearchState {
    /// Edits the query only; nothing is fetched until submit.
    pub fn on_query_change(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn dismiss_error(&mut self) {
        self.error_message = None;
    }

    pub fn begin(&mut self, action: FetchAction) {
        self.is_loading = true;
        self.last_action = Some(action);
    }

    /// Success replaces the list; failure keeps it and records the message.
    pub fn finish(&mut self, result: Result<Vec<User>, DirectoryError>) {
        self.is_loading = false;
        match result {
            Ok(users) => {
                self.users = users;
                self.error_message = None;
            }
            Err(err) => {
                self.error_message = Some(err.to_string());
            }
        }
    }
}

fn prepare(
    snapshot: &CommandSnapshot,
    context: &str,
) -> Result<(DirectoryState, u32), sedir_states::Error> {
    let directory = snapshot.require::<DirectoryState>(context)?.clone();
    let page_size = snapshot.require::<BusinessConfig>(context)?.page_size();
    Ok((directory, page_size))
}

/// Fetches one unfiltered page. The first page is dispatched at startup.
#[derive(Debug, Clone, Copy)]
pub struct LoadUsersCommand {
    pub page: u32,
}

impl Default for LoadUsersCommand {
    fn default() -> Self {
        Self { page: 1 }
    }
}

impl Command for LoadUsersCommand {
    fn task_key(&self) -> Ustr {
        Ustr::from(USER_FETCH_TASK)
    }

    fn run(&self, snapshot: CommandSnapshot, updater: Updater) -> CommandFuture {
        let prepared = prepare(&snapshot, "LoadUsersCommand");
        let page = self.page;

        Box::pin(async move {
            let result = match prepared {
                Ok((directory, page_size)) => {
                    info!("LoadUsersCommand: fetching page {page} ({page_size} per page)");
                    directory.get_users().call(page, page_size).await
                }
                Err(err) => {
                    error!("LoadUsersCommand: {err}");
                    Err(DirectoryError::Unavailable(err.to_string()))
                }
            };
            updater.update(move |state: &mut SearchState| state.finish(result));
        })
    }
}

/// Fetches one page matching the query captured at dispatch.
#[derive(Debug, Clone, Copy)]
pub struct SearchUsersCommand {
    pub page: u32,
}

impl Default for SearchUsersCommand {
    fn default() -> Self {
        Self { page: 1 }
    }
}

impl Command for SearchUsersCommand {
    fn task_key(&self) -> Ustr {
        Ustr::from(USER_FETCH_TASK)
    }

    fn run(&self, snapshot: CommandSnapshot, updater: Updater) -> CommandFuture {
        let prepared = prepare(&snapshot, "SearchUsersCommand");
        let query = snapshot
            .get::<SearchState>()
            .map(|state| state.query.clone())
            .unwrap_or_default();
        let page = self.page;

        Box::pin(async move {
            let result = match prepared {
                Ok((directory, page_size)) => {
                    info!("SearchUsersCommand: searching for {query:?} (page {page})");
                    directory.search_users().call(&query, page, page_size).await
                }
                Err(err) => {
                    error!("SearchUsersCommand: {err}");
                    Err(DirectoryError::Unavailable(err.to_string()))
                }
            };
            updater.update(move |state: &mut SearchState| state.finish(result));
        })
    }
}

pub fn set_query(ctx: &mut StateCtx, query: impl Into<String>) {
    if let Some(state) = ctx.state_mut::<SearchState>() {
        state.on_query_change(query);
    }
}

fn begin(ctx: &mut StateCtx, action: FetchAction) {
    if let Some(state) = ctx.state_mut::<SearchState>() {
        state.begin(action);
    }
}

pub fn load_users(ctx: &mut StateCtx) -> TaskId {
    fetch_page(ctx, FetchAction::LoadInitial, 1)
}

pub fn submit_search(ctx: &mut StateCtx) -> TaskId {
    fetch_page(ctx, FetchAction::Search, 1)
}

/// Dispatches `action` for a specific page. Pages below 1 are treated as 1.
pub fn fetch_page(ctx: &mut StateCtx, action: FetchAction, page: u32) -> TaskId {
    begin(ctx, action);
    let page = page.max(1);
    match action {
        FetchAction::LoadInitial => ctx.dispatch(LoadUsersCommand { page }),
        FetchAction::Search => ctx.dispatch(SearchUsersCommand { page }),
    }
}

/// Re-runs whatever produced the current error, clearing the banner.
///
/// A failed search is repeated with the query currently in the box, so an
/// edit made while the error was shown is what gets sent.
pub fn retry(ctx: &mut StateCtx) -> TaskId {
    let last = ctx.state_mut::<SearchState>().and_then(|state| {
        state.dismiss_error();
        state.last_action
    });
    match last {
        Some(FetchAction::Search) => submit_search(ctx),
        Some(FetchAction::LoadInitial) | None => load_users(ctx),
    }
}

pub fn dismiss_error(ctx: &mut StateCtx) {
    if let Some(state) = ctx.state_mut::<SearchState>() {
        state.dismiss_error();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::api::ApiError;
    use crate::setup::build_state_ctx_with_api;
    use crate::test_utils::{StubApi, StubCall, users_response};

    fn ctx_with(api: &Arc<StubApi>) -> StateCtx {
        build_state_ctx_with_api(BusinessConfig::default(), api.clone())
    }

    fn search_state(ctx: &StateCtx) -> SearchState {
        ctx.state::<SearchState>().cloned().unwrap_or_default()
    }

    #[tokio::test]
    async fn initial_load_fills_users_in_server_order() {
        let api = Arc::new(StubApi::ok(users_response(&["Alice", "Bob"])));
        let mut ctx = ctx_with(&api);

        load_users(&mut ctx);
        assert!(search_state(&ctx).is_loading);
        ctx.settle().await;

        let state = search_state(&ctx);
        assert!(!state.is_loading);
        assert_eq!(state.users.len(), 2);
        assert_eq!(state.users[0].username, "Alice");
        assert_eq!(state.users[1].username, "Bob");
        assert!(state.error_message.is_none());
        assert_eq!(api.calls(), vec![StubCall::List { page: 1, page_size: 20 }]);
    }

    #[tokio::test]
    async fn initial_load_failure_sets_message() {
        let api = Arc::new(StubApi::err(ApiError::Transport("Network error".to_owned())));
        let mut ctx = ctx_with(&api);

        load_users(&mut ctx);
        ctx.settle().await;

        let state = search_state(&ctx);
        assert!(!state.is_loading);
        assert!(state.users.is_empty());
        assert_eq!(state.error_message.as_deref(), Some("Network error"));
    }

    #[tokio::test]
    async fn query_change_does_not_fetch() {
        let api = Arc::new(StubApi::ok(users_response(&[])));
        let mut ctx = ctx_with(&api);

        set_query(&mut ctx, "john");
        ctx.settle().await;

        assert_eq!(search_state(&ctx).query, "john");
        assert!(api.calls().is_empty());
        assert_eq!(ctx.task_count(), 0);
    }

    #[tokio::test]
    async fn submit_searches_with_current_query() {
        let api = Arc::new(StubApi::ok(users_response(&["John Doe", "Johnny"])));
        let mut ctx = ctx_with(&api);

        set_query(&mut ctx, "john");
        submit_search(&mut ctx);
        ctx.settle().await;

        let state = search_state(&ctx);
        assert_eq!(state.users.len(), 2);
        assert_eq!(state.users[0].username, "John Doe");
        assert_eq!(state.last_action, Some(FetchAction::Search));
        assert_eq!(
            api.calls(),
            vec![StubCall::Search {
                inname: "john".to_owned(),
                page: 1,
                page_size: 20
            }]
        );
    }

    #[tokio::test]
    async fn blank_submit_lists_all_users() {
        let api = Arc::new(StubApi::ok(users_response(&["Alice"])));
        let mut ctx = ctx_with(&api);

        set_query(&mut ctx, "  ");
        submit_search(&mut ctx);
        ctx.settle().await;

        assert_eq!(api.calls(), vec![StubCall::List { page: 1, page_size: 20 }]);
        assert_eq!(search_state(&ctx).users.len(), 1);
    }

    #[test]
    fn failure_keeps_previous_users() {
        let mut state = SearchState::default();
        state.finish(Ok(vec![User::new(1, "Alice", 10)]));
        state.begin(FetchAction::Search);
        state.finish(Err(DirectoryError::Api(ApiError::Transport(
            "Search failed".to_owned(),
        ))));

        assert_eq!(state.users.len(), 1);
        assert_eq!(state.error_message.as_deref(), Some("Search failed"));
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn typing_during_fetch_survives_completion() {
        let api = Arc::new(StubApi::ok(users_response(&["Alice"])));
        let mut ctx = ctx_with(&api);

        load_users(&mut ctx);
        set_query(&mut ctx, "ali");
        ctx.settle().await;

        let state = search_state(&ctx);
        assert_eq!(state.query, "ali");
        assert_eq!(state.users.len(), 1);
    }

    #[tokio::test]
    async fn retry_repeats_the_failed_search() {
        let api = Arc::new(StubApi::err(ApiError::Transport("offline".to_owned())));
        let mut ctx = ctx_with(&api);

        set_query(&mut ctx, "bob");
        submit_search(&mut ctx);
        ctx.settle().await;
        assert_eq!(search_state(&ctx).error_message.as_deref(), Some("offline"));

        retry(&mut ctx);
        assert!(search_state(&ctx).error_message.is_none());
        ctx.settle().await;

        let calls = api.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], calls[1]);
    }

    #[tokio::test]
    async fn retry_sends_the_query_edited_after_the_failure() {
        let api = Arc::new(StubApi::err(ApiError::Transport("offline".to_owned())));
        let mut ctx = ctx_with(&api);

        set_query(&mut ctx, "bob");
        submit_search(&mut ctx);
        ctx.settle().await;

        set_query(&mut ctx, "alice");
        retry(&mut ctx);
        ctx.settle().await;

        let calls = api.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(
            calls[1],
            StubCall::Search {
                inname: "alice".to_owned(),
                page: 1,
                page_size: 20
            }
        );
    }

    #[tokio::test]
    async fn missing_directory_reports_instead_of_panicking() {
        let mut ctx = StateCtx::new();
        ctx.add_state(SearchState::default());

        load_users(&mut ctx);
        ctx.settle().await;

        let state = search_state(&ctx);
        assert!(!state.is_loading);
        let message = state.error_message.unwrap_or_default();
        assert!(message.contains("DirectoryState"), "message was {message}");
    }

    #[tokio::test]
    async fn fetch_page_forwards_page_number() {
        let api = Arc::new(StubApi::ok(users_response(&["Zed"])));
        let mut ctx = ctx_with(&api);

        set_query(&mut ctx, "zed");
        fetch_page(&mut ctx, FetchAction::Search, 3);
        ctx.settle().await;
        fetch_page(&mut ctx, FetchAction::LoadInitial, 0);
        ctx.settle().await;

        assert_eq!(
            api.calls(),
            vec![
                StubCall::Search {
                    inname: "zed".to_owned(),
                    page: 3,
                    page_size: 20
                },
                StubCall::List { page: 1, page_size: 20 },
            ]
        );
    }

    #[test]
    fn dismiss_clears_banner_only() {
        let mut state = SearchState {
            query: "x".to_owned(),
            error_message: Some("boom".to_owned()),
            ..SearchState::default()
        };
        state.dismiss_error();

        assert!(state.error_message.is_none());
        assert_eq!(state.query, "x");
    }
}
