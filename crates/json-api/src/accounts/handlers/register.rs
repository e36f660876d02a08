//! Register Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    accounts::{errors::into_api_error, handlers::CredentialsRequest},
    errors::{ApiError, MessageResponse},
    extensions::*,
    state::State,
};

/// Register Handler
///
/// Creates a user account from an email address and password.
#[endpoint(
    tags("accounts"),
    summary = "Register User",
    responses(
        (status_code = StatusCode::CREATED, description = "User registered"),
    ),
)]
#[tracing::instrument(
    name = "accounts.register",
    skip(json, depot, res),
    fields(user_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CredentialsRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<MessageResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let user = state
        .app
        .accounts
        .register(json.into_inner().into())
        .await
        .map_err(|error| into_api_error(error, "Error hashing password"))?;

    tracing::Span::current().record("user_uuid", tracing::field::display(user.uuid));

    tracing::info!("registered user");

    res.status_code(StatusCode::CREATED);

    Ok(Json(MessageResponse::new("User registered successfully")))
}
