// ============================================================================
// SESSION - one status check shared by every consumer
// ============================================================================
// The route guard, the header and the auth pages all read the same context
// instead of each firing their own /auth/status request.

use yew::prelude::*;

use crate::services::ApiClient;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SessionStatus {
    /// The mount-time status request is still outstanding. Guarded content
    /// must not render yet.
    Checking,
    Authenticated,
    Anonymous,
}

#[derive(Clone, PartialEq)]
pub struct SessionHandle {
    pub status: SessionStatus,
    /// Re-run the status check (after login).
    pub refresh: Callback<()>,
    /// Best-effort backend logout; the local status drops to Anonymous
    /// without waiting for the response.
    pub logout: Callback<()>,
}

/// Builds the session state. Only `SessionProvider` calls this; everything
/// else goes through `use_session`.
#[hook]
pub fn use_session_state() -> SessionHandle {
    let status = use_state(|| SessionStatus::Checking);

    let refresh = {
        let status = status.clone();
        Callback::from(move |_| {
            let status = status.clone();
            status.set(SessionStatus::Checking);
            wasm_bindgen_futures::spawn_local(async move {
                // Any failure counts as signed out, never as access
                match ApiClient::new().auth_status().await {
                    Ok(response) if response.authenticated => {
                        log::info!("🔐 Session check: authenticated");
                        status.set(SessionStatus::Authenticated);
                    }
                    Ok(_) => {
                        status.set(SessionStatus::Anonymous);
                    }
                    Err(e) => {
                        log::warn!("⚠️ Session check failed: {}", e);
                        status.set(SessionStatus::Anonymous);
                    }
                }
            });
        })
    };

    // Single attempt per mount, no retry
    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    let logout = {
        let status = status.clone();
        Callback::from(move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = ApiClient::new().logout().await {
                    log::warn!("⚠️ Logout call failed: {}", e);
                }
            });
            log::info!("👋 Logout");
            status.set(SessionStatus::Anonymous);
        })
    };

    SessionHandle {
        status: *status,
        refresh,
        logout,
    }
}

#[hook]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().expect("SessionProvider missing from the component tree")
}
