//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors, the way axum would call them, and
//! the resulting responses are checked for status, headers and body.

mod auth;
mod document;
mod document_category;
mod equipment;
mod maintenance;
mod order;
mod quote;
mod report;
mod user;

use allevapp_test_utils::prelude::*;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::util::TestContextExt;
