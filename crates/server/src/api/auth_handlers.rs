//! Authentication HTTP handlers for the OAuth/PKCE callback

use std::sync::Arc;

use axum::{
    extract::{RawQuery, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use metrics::counter;

use super::server::AppState;
use crate::analytics::{PendingConversion, queue_conversion};
use crate::auth::flow::{CallbackFlow, CallbackRequest, Navigation};
use crate::auth::view::render_state;
use crate::auth::{AuthCallbackParams, route_callback};
use crate::layout::{PageOptions, SITE, render_page};

/// Handler for the identity provider's redirect
///
/// Sends the browser to the login page on error, to the completion page when
/// a code is present, and home otherwise.
pub async fn callback_redirect_handler(RawQuery(query): RawQuery) -> Redirect {
    let params = AuthCallbackParams::from_query(query.as_deref());
    let location = route_callback(&params);
    counter!("auth.callback.redirect", "branch" => location.label()).increment(1);
    Redirect::temporary(&location.to_uri())
}

/// Handler for the callback completion page
///
/// Exchanges the code (or falls back to an existing session) and either
/// redirects home with the session cookie set, or renders the error panel
/// with a delayed redirect to the login page. A first sign in also queues
/// the sign-up conversion for the home page.
pub async fn callback_handle_handler(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    RawQuery(query): RawQuery,
) -> Response {
    let request = CallbackRequest {
        params: AuthCallbackParams::from_query(query.as_deref()),
        code_verifier: state.cookies.code_verifier(&jar),
        access_token: state.cookies.access_token(&jar),
    };

    let mut flow = CallbackFlow::new(request, state.config.auth.redirect_delay());
    let outcome = flow.run(state.auth_client.as_ref()).await;
    counter!("auth.callback.outcome", "state" => outcome.state.label()).increment(1);

    match &outcome.navigation {
        Navigation::Immediate(to) => {
            let jar = match &outcome.session {
                Some(session) if outcome.exchanged => {
                    let jar = state.cookies.store_session(jar, session);
                    if session.is_first_sign_in() {
                        queue_conversion(jar, PendingConversion::SignUp, state.cookies.is_secure())
                    } else {
                        jar
                    }
                }
                _ => jar,
            };
            tracing::info!("sign in completed");
            (jar, Redirect::to(&to.to_uri())).into_response()
        }
        Navigation::Delayed { to, after } => {
            let target = to.to_uri();
            let options = PageOptions {
                title: Some("Signing in"),
                refresh: Some((*after, target.as_str())),
                analytics: Some(&state.config.analytics),
                tags: None,
            };
            let body = render_state(&outcome.state);
            Html(render_page(
                &SITE,
                &state.config.server.site_origin,
                &options,
                &body,
            ))
            .into_response()
        }
    }
}
