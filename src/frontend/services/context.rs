//! Session context shared by every component in the tree.

use crate::backend::api::{ApiClient, AuthClient, Credentials, HttpSessionSource};
use crate::backend::session::{BoxedSource, Session, SessionError, SessionQuery, SessionSource};
use crate::backend::utils::config::AppConfig;
use dioxus::prelude::*;

/// Handle to the application-wide session cache.
///
/// Provided once at the root. `revision` is bumped on every invalidation so
/// mounted [`use_session`] hooks query again.
#[derive(Clone)]
pub struct SessionHandle {
    query: SessionQuery<BoxedSource>,
    auth: AuthClient,
    revision: Signal<u64>,
}

impl SessionHandle {
    pub fn new(config: &AppConfig, revision: Signal<u64>) -> Self {
        let api = ApiClient::new(&config.api);
        let source = HttpSessionSource::new(api.clone(), config.api.session_path.clone());
        Self::with_source(api, config, source, revision)
    }

    /// Builds a handle that reads the session from `source`. Sign-in and
    /// sign-out still go through `api`.
    pub fn with_source(
        api: ApiClient,
        config: &AppConfig,
        source: impl SessionSource,
        revision: Signal<u64>,
    ) -> Self {
        Self {
            query: SessionQuery::new(BoxedSource::new(source), config.session.stale_time()),
            auth: AuthClient::new(
                api,
                config.api.login_path.clone(),
                config.api.logout_path.clone(),
            ),
            revision,
        }
    }

    /// Forgets the cached session and makes every guard ask again.
    pub fn invalidate(&self) {
        self.query.invalidate();
        let mut revision = self.revision;
        revision += 1;
    }

    /// Signs in and invalidates the session on success.
    pub async fn login(&self, credentials: &Credentials) -> Result<(), SessionError> {
        self.auth.login(credentials).await?;
        self.invalidate();
        Ok(())
    }

    /// Signs out. The session is invalidated even when the request fails, so
    /// the server decides what the next session read returns.
    pub async fn logout(&self) {
        if let Err(e) = self.auth.logout().await {
            tracing::warn!("Sign-out request failed: {e}");
        }
        self.invalidate();
    }
}

/// Current session, loading until the shared query resolves.
///
/// A component mounted while a fresh answer is cached sees it on its first
/// render.
pub fn use_session() -> Session {
    let handle = use_context::<SessionHandle>();
    let query = handle.query.clone();
    let revision = handle.revision;
    let resource = use_resource(move || {
        let query = query.clone();
        let _ = revision();
        async move { query.fetch().await }
    });

    match &*resource.read() {
        Some(result) => Session::resolved(result.clone()),
        None => handle
            .query
            .cached()
            .map_or_else(Session::loading, Session::resolved),
    }
}

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::backend::session::query::SessionResult;
    use crate::frontend::app::route::Route;
    use dioxus::dioxus_core::DynamicNode;
    use dioxus_history::{History, MemoryHistory};
    use dioxus_router::Router;
    use std::rc::Rc;

    /// Session source that always answers with the same result.
    #[derive(Clone)]
    pub struct FixedSource(pub SessionResult);

    impl SessionSource for FixedSource {
        async fn fetch_session(&self) -> SessionResult {
            self.0.clone()
        }
    }

    /// Session source whose request never resolves.
    #[derive(Clone)]
    pub struct PendingSource;

    impl SessionSource for PendingSource {
        async fn fetch_session(&self) -> SessionResult {
            std::future::pending().await
        }
    }

    #[derive(Clone)]
    struct ShellProps {
        history: Rc<MemoryHistory>,
        source: BoxedSource,
    }

    fn shell(props: ShellProps) -> Element {
        let revision = use_signal(|| 0_u64);
        let ShellProps { history, source } = props;
        use_context_provider(move || history as Rc<dyn History>);
        use_context_provider(move || {
            let config = AppConfig::default();
            SessionHandle::with_source(ApiClient::new(&config.api), &config, source, revision)
        });

        rsx! { Router::<Route> {} }
    }

    /// The routed app rendered in memory at a starting path.
    pub struct TestApp {
        dom: VirtualDom,
        history: Rc<MemoryHistory>,
    }

    impl TestApp {
        pub fn mount(path: &str, source: impl SessionSource) -> Self {
            let history = Rc::new(MemoryHistory::with_initial_path(path));
            let props = ShellProps {
                history: Rc::clone(&history),
                source: BoxedSource::new(source),
            };
            let mut dom = VirtualDom::new_with_props(shell, props);
            dom.rebuild_in_place();
            settle(&mut dom);
            Self { dom, history }
        }

        /// Current location after any redirects.
        pub fn path(&self) -> String {
            self.history.current_route()
        }

        pub fn shows(&self, component: &str) -> bool {
            rendered(&self.dom).contains(&component)
        }
    }

    /// Runs queued tasks and re-renders until the tree stops changing.
    pub fn settle(dom: &mut VirtualDom) {
        for _ in 0..10 {
            dom.render_immediate_to_vec();
        }
    }

    /// Names of every component currently mounted in `dom`.
    pub fn rendered(dom: &VirtualDom) -> Vec<&'static str> {
        let mut names = Vec::new();
        for id in 0..512 {
            if let Some(node) = dom.get_scope(ScopeId(id)).and_then(|s| s.try_root_node()) {
                collect(node, &mut names);
            }
        }
        names
    }

    fn collect(node: &VNode, names: &mut Vec<&'static str>) {
        for dynamic in node.dynamic_nodes.iter() {
            match dynamic {
                DynamicNode::Component(component) => {
                    let name = component.name.rsplit("::").next().unwrap_or(component.name);
                    names.push(name);
                }
                DynamicNode::Fragment(children) => {
                    for child in children {
                        collect(child, names);
                    }
                }
                _ => {}
            }
        }
    }
}
