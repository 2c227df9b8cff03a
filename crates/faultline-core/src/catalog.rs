//! Predefined error templates
//!
//! Each template is a `const`, so every use site gets its own copy and may
//! attach detail or a cause without affecting other requests.

use std::error::Error as StdError;
use std::fmt;

use crate::{Category, ClassifiedError};

// Validation

pub const INVALID_CPF: ClassifiedError = ClassifiedError::template(Category::Validation, "CPF_INVALIDO", "Invalid CPF");
pub const INVALID_CNPJ: ClassifiedError = ClassifiedError::template(Category::Validation, "CNPJ_INVALIDO", "Invalid CNPJ");
pub const INVALID_EMAIL: ClassifiedError = ClassifiedError::template(Category::Validation, "EMAIL_INVALIDO", "Invalid email");
pub const INVALID_PHONE: ClassifiedError =
    ClassifiedError::template(Category::Validation, "TELEFONE_INVALIDO", "Invalid phone number");
pub const INVALID_CEP: ClassifiedError = ClassifiedError::template(Category::Validation, "CEP_INVALIDO", "Invalid CEP");
pub const INVALID_PASSWORD: ClassifiedError =
    ClassifiedError::template(Category::Validation, "SENHA_INVALIDA", "Invalid password");
pub const INVALID_UUID: ClassifiedError = ClassifiedError::template(Category::Validation, "UUID_INVALIDO", "Invalid UUID");
pub const INVALID_ID: ClassifiedError = ClassifiedError::template(Category::Validation, "ID_INVALIDO", "Invalid ID");
pub const REQUIRED_FIELD: ClassifiedError =
    ClassifiedError::template(Category::Validation, "CAMPO_OBRIGATORIO", "Required field not provided");
pub const INVALID_JSON: ClassifiedError = ClassifiedError::template(Category::Validation, "JSON_INVALIDO", "Invalid JSON");
pub const INVALID_SIZE: ClassifiedError = ClassifiedError::template(Category::Validation, "TAMANHO_INVALIDO", "Invalid size");
pub const DUPLICATE_VALUE: ClassifiedError =
    ClassifiedError::template(Category::Validation, "VALOR_DUPLICADO", "Duplicate value");
pub const INVALID_VALUE: ClassifiedError = ClassifiedError::template(Category::Validation, "VALOR_INVALIDO", "Invalid value");
pub const INVALID_DATE: ClassifiedError =
    ClassifiedError::template(Category::Validation, "DATA_INVALIDA", "Invalid date format");
pub const FUTURE_DATE: ClassifiedError =
    ClassifiedError::template(Category::Validation, "DATA_FUTURA", "Date cannot be in the future");
pub const PAST_DATE: ClassifiedError =
    ClassifiedError::template(Category::Validation, "DATA_PASSADA", "Date cannot be in the past");
pub const INVALID_AGE: ClassifiedError = ClassifiedError::template(Category::Validation, "IDADE_INVALIDA", "Invalid age");

// Database

pub const DB_CONNECTION: ClassifiedError =
    ClassifiedError::template(Category::Database, "DB_CONNECTION_ERROR", "Database connection error");
pub const DB_TIMEOUT: ClassifiedError =
    ClassifiedError::template(Category::Database, "DB_TIMEOUT", "Database operation timed out");
pub const DB_INVALID_QUERY: ClassifiedError = ClassifiedError::template(Category::Database, "DB_INVALID_QUERY", "Invalid query");
pub const DB_CONSTRAINT_VIOLATION: ClassifiedError =
    ClassifiedError::template(Category::Database, "DB_CONSTRAINT_VIOLATION", "Database constraint violation");
pub const DB_TRANSACTION_FAILED: ClassifiedError =
    ClassifiedError::template(Category::Database, "DB_TRANSACTION_FAILED", "Transaction failed");
pub const DB_UNAVAILABLE: ClassifiedError =
    ClassifiedError::template(Category::Database, "DB_UNAVAILABLE", "Database unavailable");
pub const DB_TABLE_NOT_FOUND: ClassifiedError =
    ClassifiedError::template(Category::Database, "DB_TABLE_NOT_FOUND", "Table not found");
pub const DB_COLUMN_NOT_FOUND: ClassifiedError =
    ClassifiedError::template(Category::Database, "DB_COLUMN_NOT_FOUND", "Column not found");
pub const DB_FOREIGN_KEY: ClassifiedError =
    ClassifiedError::template(Category::Database, "DB_FOREIGN_KEY_ERROR", "Foreign key error");
pub const DB_PRIMARY_KEY: ClassifiedError =
    ClassifiedError::template(Category::Database, "DB_PRIMARY_KEY_ERROR", "Primary key error");

// Connection

pub const CONNECTION_REFUSED: ClassifiedError =
    ClassifiedError::template(Category::Connection, "CONNECTION_REFUSED", "Connection refused");
pub const CONNECTION_TIMEOUT: ClassifiedError =
    ClassifiedError::template(Category::Connection, "CONNECTION_TIMEOUT", "Connection timed out");
pub const CONNECTION_INTERRUPTED: ClassifiedError =
    ClassifiedError::template(Category::Connection, "CONNECTION_INTERRUPTED", "Connection interrupted");
pub const SERVICE_UNAVAILABLE: ClassifiedError =
    ClassifiedError::template(Category::Connection, "SERVICE_UNAVAILABLE", "Service unavailable");
pub const NETWORK_UNREACHABLE: ClassifiedError =
    ClassifiedError::template(Category::Connection, "NETWORK_UNREACHABLE", "Network unreachable");
pub const DNS_RESOLUTION_FAILED: ClassifiedError =
    ClassifiedError::template(Category::Connection, "DNS_RESOLUTION_FAILED", "DNS resolution failed");
pub const TLS_HANDSHAKE_FAILED: ClassifiedError =
    ClassifiedError::template(Category::Connection, "SSL_HANDSHAKE_FAILED", "TLS handshake failed");
pub const EXTERNAL_API_UNAVAILABLE: ClassifiedError =
    ClassifiedError::template(Category::Connection, "EXTERNAL_API_UNAVAILABLE", "External API unavailable");

// Not found

pub const USER_NOT_FOUND: ClassifiedError =
    ClassifiedError::template(Category::NotFound, "USER_NOT_FOUND", "User not found");
pub const RESOURCE_NOT_FOUND: ClassifiedError =
    ClassifiedError::template(Category::NotFound, "RESOURCE_NOT_FOUND", "Resource not found");
pub const FILE_NOT_FOUND: ClassifiedError =
    ClassifiedError::template(Category::NotFound, "FILE_NOT_FOUND", "File not found");
pub const PAGE_NOT_FOUND: ClassifiedError =
    ClassifiedError::template(Category::NotFound, "PAGE_NOT_FOUND", "Page not found");
pub const ENDPOINT_NOT_FOUND: ClassifiedError =
    ClassifiedError::template(Category::NotFound, "ENDPOINT_NOT_FOUND", "Endpoint not found");
pub const CLIENT_NOT_FOUND: ClassifiedError =
    ClassifiedError::template(Category::NotFound, "CLIENT_NOT_FOUND", "Client not found");
pub const PRODUCT_NOT_FOUND: ClassifiedError =
    ClassifiedError::template(Category::NotFound, "PRODUCT_NOT_FOUND", "Product not found");
pub const ORDER_NOT_FOUND: ClassifiedError =
    ClassifiedError::template(Category::NotFound, "ORDER_NOT_FOUND", "Order not found");
pub const CATEGORY_NOT_FOUND: ClassifiedError =
    ClassifiedError::template(Category::NotFound, "CATEGORY_NOT_FOUND", "Category not found");
pub const COMPANY_NOT_FOUND: ClassifiedError =
    ClassifiedError::template(Category::NotFound, "COMPANY_NOT_FOUND", "Company not found");

// Authentication

pub const INVALID_TOKEN: ClassifiedError =
    ClassifiedError::template(Category::Authentication, "INVALID_TOKEN", "Invalid token");
pub const TOKEN_EXPIRED: ClassifiedError =
    ClassifiedError::template(Category::Authentication, "TOKEN_EXPIRED", "Token expired");
pub const INVALID_CREDENTIALS: ClassifiedError =
    ClassifiedError::template(Category::Authentication, "INVALID_CREDENTIALS", "Invalid credentials");
pub const SESSION_EXPIRED: ClassifiedError =
    ClassifiedError::template(Category::Authentication, "SESSION_EXPIRED", "Session expired");
pub const USER_INACTIVE: ClassifiedError =
    ClassifiedError::template(Category::Authentication, "USER_INACTIVE", "User inactive");
pub const ACCOUNT_BLOCKED: ClassifiedError =
    ClassifiedError::template(Category::Authentication, "ACCOUNT_BLOCKED", "Account blocked");
pub const TOO_MANY_ATTEMPTS: ClassifiedError =
    ClassifiedError::template(Category::Authentication, "TOO_MANY_ATTEMPTS", "Too many login attempts");
pub const AUTHENTICATION_REQUIRED: ClassifiedError =
    ClassifiedError::template(Category::Authentication, "AUTHENTICATION_REQUIRED", "Authentication required");

// Authorization

pub const NO_PERMISSION: ClassifiedError =
    ClassifiedError::template(Category::Authorization, "NO_PERMISSION", "No permission for this action");
pub const ACCESS_DENIED: ClassifiedError = ClassifiedError::template(Category::Authorization, "ACCESS_DENIED", "Access denied");
pub const INSUFFICIENT_LEVEL: ClassifiedError =
    ClassifiedError::template(Category::Authorization, "INSUFFICIENT_LEVEL", "Insufficient access level");
pub const PROTECTED_RESOURCE: ClassifiedError =
    ClassifiedError::template(Category::Authorization, "PROTECTED_RESOURCE", "Protected resource");
pub const OPERATION_NOT_ALLOWED: ClassifiedError =
    ClassifiedError::template(Category::Authorization, "OPERATION_NOT_ALLOWED", "Operation not allowed");
pub const ADMIN_REQUIRED: ClassifiedError =
    ClassifiedError::template(Category::Authorization, "ADMIN_REQUIRED", "Administrator privileges required");

// Conflict

pub const EMAIL_EXISTS: ClassifiedError =
    ClassifiedError::template(Category::Conflict, "EMAIL_EXISTS", "This email is already in use");
pub const CPF_EXISTS: ClassifiedError =
    ClassifiedError::template(Category::Conflict, "CPF_EXISTS", "This CPF is already registered");
pub const CNPJ_EXISTS: ClassifiedError =
    ClassifiedError::template(Category::Conflict, "CNPJ_EXISTS", "This CNPJ is already registered");
pub const USER_EXISTS: ClassifiedError = ClassifiedError::template(Category::Conflict, "USER_EXISTS", "User already exists");
pub const RESOURCE_EXISTS: ClassifiedError =
    ClassifiedError::template(Category::Conflict, "RESOURCE_EXISTS", "Resource already exists");
pub const NAME_ALREADY_USED: ClassifiedError =
    ClassifiedError::template(Category::Conflict, "NAME_ALREADY_USED", "Name is already in use");
pub const CODE_EXISTS: ClassifiedError = ClassifiedError::template(Category::Conflict, "CODE_EXISTS", "Code already exists");
pub const VERSION_CONFLICT: ClassifiedError =
    ClassifiedError::template(Category::Conflict, "VERSION_CONFLICT", "Version conflict");
pub const OPERATION_IN_PROGRESS: ClassifiedError =
    ClassifiedError::template(Category::Conflict, "OPERATION_IN_PROGRESS", "Operation already in progress");

// Internal

pub const INTERNAL_SERVER_ERROR: ClassifiedError =
    ClassifiedError::template(Category::Internal, "INTERNAL_SERVER_ERROR", "Internal server error");
pub const INVALID_CONFIGURATION: ClassifiedError =
    ClassifiedError::template(Category::Internal, "INVALID_CONFIGURATION", "Invalid configuration");
pub const INSUFFICIENT_MEMORY: ClassifiedError =
    ClassifiedError::template(Category::Internal, "INSUFFICIENT_MEMORY", "Insufficient memory");
pub const FILE_SYSTEM_ERROR: ClassifiedError =
    ClassifiedError::template(Category::Internal, "FILE_SYSTEM_ERROR", "File system error");
pub const PROCESSING_FAILED: ClassifiedError =
    ClassifiedError::template(Category::Internal, "PROCESSING_FAILED", "Processing failed");
pub const MAINTENANCE_MODE: ClassifiedError =
    ClassifiedError::template(Category::Internal, "MAINTENANCE_MODE", "System under maintenance");

// Rate limit

pub const REQUEST_LIMIT: ClassifiedError =
    ClassifiedError::template(Category::RateLimit, "RATE_LIMIT", "Request limit exceeded");
pub const UPLOAD_LIMIT: ClassifiedError = ClassifiedError::template(Category::RateLimit, "UPLOAD_LIMIT", "Upload limit exceeded");
pub const USER_LIMIT: ClassifiedError = ClassifiedError::template(Category::RateLimit, "USER_LIMIT", "User limit exceeded");
pub const BANDWIDTH_LIMIT: ClassifiedError =
    ClassifiedError::template(Category::RateLimit, "BANDWIDTH_LIMIT", "Bandwidth limit exceeded");
pub const STORAGE_LIMIT: ClassifiedError =
    ClassifiedError::template(Category::RateLimit, "STORAGE_LIMIT", "Storage limit exceeded");
pub const CONNECTION_LIMIT: ClassifiedError =
    ClassifiedError::template(Category::RateLimit, "CONNECTION_LIMIT", "Connection limit exceeded");

// Method

pub const METHOD_NOT_ALLOWED: ClassifiedError =
    ClassifiedError::template(Category::MethodNotAllowed, "METHOD_NOT_ALLOWED", "HTTP method not allowed");
pub const METHOD_NOT_SUPPORTED: ClassifiedError =
    ClassifiedError::template(Category::MethodNotAllowed, "METHOD_NOT_SUPPORTED", "HTTP method not supported");
pub const POST_REQUIRED: ClassifiedError =
    ClassifiedError::template(Category::MethodNotAllowed, "POST_REQUIRED", "POST method is required");
pub const GET_REQUIRED: ClassifiedError =
    ClassifiedError::template(Category::MethodNotAllowed, "GET_REQUIRED", "GET method is required");
pub const PUT_REQUIRED: ClassifiedError =
    ClassifiedError::template(Category::MethodNotAllowed, "PUT_REQUIRED", "PUT method is required");
pub const DELETE_REQUIRED: ClassifiedError =
    ClassifiedError::template(Category::MethodNotAllowed, "DELETE_REQUIRED", "DELETE method is required");

// File

pub const FILE_TOO_LARGE: ClassifiedError = ClassifiedError::template(Category::FileError, "FILE_TOO_LARGE", "File too large");
pub const INVALID_FILE_TYPE: ClassifiedError =
    ClassifiedError::template(Category::FileError, "INVALID_FILE_TYPE", "Invalid file type");
pub const CORRUPTED_FILE: ClassifiedError = ClassifiedError::template(Category::FileError, "CORRUPTED_FILE", "Corrupted file");
pub const INVALID_FILE_FORMAT: ClassifiedError =
    ClassifiedError::template(Category::FileError, "INVALID_FILE_FORMAT", "Invalid file format");
pub const UPLOAD_FAILED: ClassifiedError =
    ClassifiedError::template(Category::FileError, "UPLOAD_FAILED", "File upload failed");

/// Not-found error naming the resource and the identifier looked up
pub fn resource_not_found(resource: impl fmt::Display, identifier: impl fmt::Display) -> ClassifiedError {
    ClassifiedError::not_found("RESOURCE_NOT_FOUND", resource).with_detail(format!("Identifier: {identifier}"))
}

/// Validation error for a single field
pub fn field_validation(field: impl fmt::Display, reason: impl fmt::Display) -> ClassifiedError {
    ClassifiedError::validation("FIELD_VALIDATION_ERROR", "Field validation error")
        .with_detail(format!("Field: {field}, Reason: {reason}"))
}

/// Connection error for a named downstream service
pub fn service_connection(service: impl fmt::Display, detail: impl Into<String>) -> ClassifiedError {
    ClassifiedError::connection("SERVICE_CONNECTION_ERROR", format!("Connection error with {service}"))
        .with_detail(detail.into())
}

/// Database error for an operation on a table, wrapping the driver error
pub fn database_operation<E>(operation: impl fmt::Display, table: impl fmt::Display, cause: E) -> ClassifiedError
where
    E: StdError + Send + Sync + 'static,
{
    ClassifiedError::database("DB_OPERATION_ERROR", format!("Error during {operation} operation"))
        .with_detail(format!("Table: {table}"))
        .with_cause(cause)
}

/// Authorization error for an operation on a resource
pub fn operation_not_authorized(operation: impl fmt::Display, resource: impl fmt::Display) -> ClassifiedError {
    ClassifiedError::authorization("OPERATION_NOT_AUTHORIZED", "Operation not authorized")
        .with_detail(format!("Operation: {operation}, Resource: {resource}"))
}

/// Rate-limit error reporting the configured limit and the observed value
pub fn limit_exceeded(kind: impl fmt::Display, limit: u64, current: u64) -> ClassifiedError {
    ClassifiedError::rate_limit("LIMIT_EXCEEDED", format!("{kind} limit exceeded"))
        .with_detail(format!("Limit: {limit}, Current: {current}"))
}
