//! Login Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    accounts::{errors::into_api_error, handlers::CredentialsRequest},
    errors::{ApiError, MessageResponse},
    extensions::*,
    state::State,
};

/// Login Handler
///
/// Checks an email and password pair. No session or token is issued.
#[endpoint(tags("accounts"), summary = "Log In")]
#[tracing::instrument(
    name = "accounts.login",
    skip(json, depot),
    fields(user_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CredentialsRequest>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let user = state
        .app
        .accounts
        .login(json.into_inner().into())
        .await
        .map_err(|error| into_api_error(error, "Error comparing passwords"))?;

    tracing::Span::current().record("user_uuid", tracing::field::display(user.uuid));

    Ok(Json(MessageResponse::new("Login successful")))
}
