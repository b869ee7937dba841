// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! API error response
//!

use crate::helpers::ErrorMsg;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use resource_planner_crud::{BackupRestoreError, CrudError};

/// Container for API errors.  Can be sent back to the client
pub struct ApiError(pub (StatusCode, Json<ErrorMsg>));

impl ApiError {
    /// A 400 with a message: the payload itself is wrong
    pub fn bad_request<M: ToString>(msg: M) -> Self {
        ApiError((
            StatusCode::BAD_REQUEST,
            Json(ErrorMsg {
                error_msg: msg.to_string(),
            }),
        ))
    }

    /// A 404 with a message: the row the request names does not exist
    pub fn not_found<M: ToString>(msg: M) -> Self {
        ApiError((
            StatusCode::NOT_FOUND,
            Json(ErrorMsg {
                error_msg: msg.to_string(),
            }),
        ))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.0.into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(value: sqlx::Error) -> Self {
        let value: CrudError = value.into();
        value.into()
    }
}

impl From<CrudError> for ApiError {
    fn from(value: CrudError) -> Self {
        let status = match &value {
            CrudError::IdNotInDb | CrudError::NameNotInDb => StatusCode::NOT_FOUND,
            CrudError::IdNotSet
            | CrudError::PersonNameAlreadyInUse(_)
            | CrudError::ClientNameAlreadyInUse(_)
            | CrudError::ProjectNameAlreadyInUse(_)
            | CrudError::NotUniqueInDb(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        ApiError((
            status,
            Json(ErrorMsg {
                error_msg: value.to_string(),
            }),
        ))
    }
}

impl From<BackupRestoreError> for ApiError {
    fn from(value: BackupRestoreError) -> Self {
        match value {
            BackupRestoreError::CrudError(crud_error) => crud_error.into(),
            other => ApiError((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorMsg {
                    error_msg: other.to_string(),
                }),
            )),
        }
    }
}
