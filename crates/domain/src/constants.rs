//! Application constants
//!
//! Centralized location for domain-level constants shared by the server, the
//! storage adapters and the typed client.

// HTTP surface
pub const API_BASE_PATH: &str = "/api";
pub const AUTH_SCOPE_PATH: &str = "/auth";
pub const DATES_RESOURCE: &str = "/dates";
pub const BEARER_PREFIX: &str = "Bearer ";

// Server defaults
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3001";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Client-facing messages
pub const MSG_MISSING_TOKEN: &str = "Missing or invalid token format";
pub const MSG_INVALID_TOKEN: &str = "Invalid token or user not found";
pub const MSG_DATE_REQUIRED: &str = "Date is required";
pub const MSG_RECORD_NOT_FOUND: &str = "Date record not found or not authorized";
pub const MSG_RECORD_DELETED: &str = "Date record deleted successfully";

// Storage collaborator
pub const DATES_TABLE: &str = "dates";
