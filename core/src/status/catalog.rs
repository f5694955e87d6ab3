//! Canonical status code table.
//!
//! The integer values and message strings below are part of the wire
//! contract: consumers match on them, so entries may be added but never
//! renumbered or reworded.

use super::code::StatusCode;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// One registered status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub code: StatusCode,
    pub name: &'static str,
    pub message: &'static str,
}

macro_rules! status_catalog {
    ($( $(#[$doc:meta])* ($code:literal, $name:ident, $message:literal); )+) => {
        impl StatusCode {
            $(
                $(#[$doc])*
                pub const $name: StatusCode = StatusCode::new($code);
            )+
        }

        static ENTRIES: &[CatalogEntry] = &[
            $(
                CatalogEntry {
                    code: StatusCode::new($code),
                    name: stringify!($name),
                    message: $message,
                },
            )+
        ];
    };
}

status_catalog! {
    // 1xx: Information
    (100, CONTINUE, "Continue");
    (101, SWITCHING_PROTOCOLS, "Switching Protocols");
    (102, PROCESSING, "Processing");

    // 2xx: Success
    (200, OK, "OK");
    (201, CREATED, "Created");
    (202, ACCEPTED, "Accepted");
    (203, NON_AUTHORITATIVE_INFORMATION, "Non-Authoritative Information");
    (204, NO_CONTENT, "No Content");
    (205, RESET_CONTENT, "Reset Content");
    (206, PARTIAL_CONTENT, "Partial Content");

    // 3xx: Redirection
    (300, MULTIPLE_CHOICES, "Multiple Choices");
    (301, MOVED_PERMANENTLY, "Moved Permanently");
    (302, FOUND, "Found");
    (303, SEE_OTHER, "See Other");
    (304, NOT_MODIFIED, "Not Modified");
    (307, TEMPORARY_REDIRECT, "Temporary Redirect");
    (308, PERMANENT_REDIRECT, "Permanent Redirect");

    // 4xx: Client Error
    (400, BAD_REQUEST, "Bad Request");
    (401, UNAUTHORIZED, "Unauthorized");
    (402, PAYMENT_REQUIRED, "Payment Required");
    (403, FORBIDDEN, "Forbidden");
    (404, NOT_FOUND, "Not Found");
    (405, METHOD_NOT_ALLOWED, "Method Not Allowed");
    (406, NOT_ACCEPTABLE, "Not Acceptable");
    (407, PROXY_AUTHENTICATION_REQUIRED, "Proxy Authentication Required");
    (408, REQUEST_TIMEOUT, "Request Timeout");
    (409, CONFLICT, "Conflict");
    (410, GONE, "Gone");
    (411, LENGTH_REQUIRED, "Length Required");
    (412, PRECONDITION_FAILED, "Precondition Failed");
    (413, PAYLOAD_TOO_LARGE, "Payload Too Large");
    (414, URI_TOO_LONG, "URI Too Long");
    (415, UNSUPPORTED_MEDIA_TYPE, "Unsupported Media Type");
    (416, RANGE_NOT_SATISFIABLE, "Range Not Satisfiable");
    (417, EXPECTATION_FAILED, "Expectation Failed");
    (418, IM_A_TEAPOT, "I'm a teapot");
    (422, UNPROCESSABLE_ENTITY, "Unprocessable Entity");
    (423, LOCKED, "Locked");
    (424, FAILED_DEPENDENCY, "Failed Dependency");
    (425, TOO_EARLY, "Too Early");
    (426, UPGRADE_REQUIRED, "Upgrade Required");
    (428, PRECONDITION_REQUIRED, "Precondition Required");
    (429, TOO_MANY_REQUESTS, "Too Many Requests");
    (431, REQUEST_HEADER_FIELDS_TOO_LARGE, "Request Header Fields Too Large");
    (451, UNAVAILABLE_FOR_LEGAL_REASONS, "Unavailable For Legal Reasons");

    // 5xx: Server Error
    (500, INTERNAL_SERVER_ERROR, "Internal Server Error");
    (501, NOT_IMPLEMENTED, "Not Implemented");
    (502, BAD_GATEWAY, "Bad Gateway");
    (503, SERVICE_UNAVAILABLE, "Service Unavailable");
    (504, GATEWAY_TIMEOUT, "Gateway Timeout");
    (505, HTTP_VERSION_NOT_SUPPORTED, "HTTP Version Not Supported");
    (506, VARIANT_ALSO_NEGOTIATES, "Variant Also Negotiates");
    (507, INSUFFICIENT_STORAGE, "Insufficient Storage");
    (508, LOOP_DETECTED, "Loop Detected");
    (510, NOT_EXTENDED, "Not Extended");
    (511, NETWORK_AUTHENTICATION_REQUIRED, "Network Authentication Required");

    // 40xx: account and profile
    (4000, SUCCESS, "SUCCESS");
    (4001, INVALID_MAIL_FORMAT, "Invalid mail format");
    (4002, ACCOUNT_ALREADY_WITHDRAWN, "This account has already been withdrawn");
    (4003, EMAIL_ALREADY_EXISTS, "This email is already");
    (4004, USER_NOT_FOUND, "User not found");
    (4005, WRONG_PASSWORD, "Wrong email or password");
    (4006, EMAIL_TIMEOUT, "email authentication is time out");
    (4007, AUTHENTICATION_CODE_MISMATCH, "The authentication code does not match.");
    (4008, INVALID_EMAIL, "Invalid email format");
    (4009, NICKNAME_CONFLICT, "Nickname conflicts with an existing one");
    (4010, REQUIRED_TYPE, "Type is required");
    (4011, NICKNAME_INVALID, "Invalid nickname");
    (4012, NICKNAME_ALREADY_TAKEN, "Nickname is already taken");
    (4013, NO_DATA_EXISTS, "No data exists");

    // 41xx: generic failures and input formats
    (4100, FAIL, "Fail");
    (4101, BUSINESS_INFO_ERROR, "Business information error");
    (4102, PLEASE_TRY_AGAIN_LATER, "Please try again later");
    (4108, INVALID_EMAIL_ADDRESS, "Invalid email address");
    (4109, INVALID_PHONE_NUMBER_FORMAT, "Invalid phone number format");
    (4110, INVALID_PASSWORD, "Invalid password");

    // 42xx-49xx: feature failures
    (4200, SOURCING_REQUEST_CREATE_FAILED, "Failed to create sourcing request");
    (4201, CREATE_MALL_FAILED, "Failed to create mall");
    (4300, TOKEN_EXPIRED, "Token expired");
    (4500, UPSTREAM_CALL_ERROR, "Upstream request failed");
    (4900, CONFLICT_CODE, "Conflict");

    // 50xx-70xx: infrastructure
    (5000, INTERNAL_SERVER_ERROR_CODE, "Internal server error");
    (5001, REDIS_ERROR, "Cache storage error");
    (5100, SMS_OTP_FAILED, "Failed to send SMS OTP");
    (7001, CONFLICT_CELEB, "Celebrity already exists");

    // 205xxx
    (205001, RESET_CONTENT_TOKEN, "Access token expired and must be reissued");

    // 400xxx
    (400000, BAD_REQUEST_BASE, "Bad request");
    (400001, BAD_REQUEST_USER, "Invalid user data");
    (400002, BAD_REQUEST_SOURCING_REQUEST, "Invalid sourcing request data");
    (400003, BAD_REQUEST_MATCHING_CONTRACT_DEAL, "Invalid contract deal data");
    (400004, BAD_REQUEST_LIMIT, "Invalid limit");
    (400005, BAD_REQUEST_CATEGORY, "Invalid category data");
    (400006, BAD_REQUEST_PRODUCT, "Invalid product data");
    (400007, BAD_REQUEST_USER_CRAWLING, "User data is being updated");
    (400008, BAD_REQUEST_PRODUCT_CRAWLING, "Product data is being updated");
    (400009, BAD_REQUEST_USER_CRAWLING_FAILED, "Invalid SNS data. Please update your SNS information");
    (400010, BAD_REQUEST_SOURCING_REQUEST_IS_COMPLETED, "Sourcing request has been completed");
    (400011, BAD_REQUEST_SHIPPING_POLICY, "The product has no shipping policy. Please add one to the product");
    (400012, BAD_REQUEST_PATH_INVALID, "Invalid path");
    (400013, BAD_REQUEST_PATH_FORBIDDEN, "Address is not available");
    (400014, BAD_REQUEST_PRODUCT_INSUFFICIENT_STOCK, "Some products have insufficient stock. Please check the quantities and try again");
    (400015, BAD_REQUEST_POINT_INSUFFICIENT, "Not enough points to redeem");
    (400016, BAD_REQUEST_ARTICLE_NOT_SUPPORTED, "Analysis of this article is not supported");
    (400017, BAD_REQUEST_PRODUCT_NOT_ON_SALE, "The product is no longer on sale");
    (400018, BAD_REQUEST_VERTEX_INVALID_ARGUMENT, "Google Vertex AI invalid argument");
    (400019, BAD_REQUEST_VERTEX_FAILED_PRECONDITION, "Google Vertex AI failed precondition");
    (400020, BAD_REQUEST_WAREHOUSE_USED, "This warehouse is in use");
    (400021, BAD_REQUEST_RESELL_COMMISSION_NOT_SET, "Resale commission is not set. Please create a new request");
    (400022, BAD_REQUEST_SELLER_NOT_SELECTED, "Please select a seller");
    (400023, BAD_REQUEST_OTP_NOT_VERIFIED, "OTP has not been verified");
    (400024, BAD_REQUEST_SOURCING_REQUEST_COMPLETED, "Sourcing request is completed and can no longer be updated");
    (400025, BAD_REQUEST_URL_EXPIRED, "URL has expired");
    (400026, BAD_REQUEST_OTP_EXPIRED, "OTP has expired");
    (400027, BAD_REQUEST_OTP_INVALID, "Invalid OTP");
    (400028, BAD_REQUEST_SHIPPING_POLICY_DELETE, "Products are using this shipping policy. Move them to another policy first");
    (400029, BAD_REQUEST_SHIPPING_POLICY_DELETE_NOT_ALLOWED, "You are not allowed to delete this shipping policy");

    // 403xxx
    (403001, FORBIDDEN_ACCESS, "You do not have access");
    (403002, FORBIDDEN_ACCESS_TOKEN, "Token does not have access");
    (403003, FORBIDDEN_VERTEX_PERMISSION_DENIED, "Google Vertex AI permission denied");

    // 404xxx
    (404000, NOT_FOUND_BASE, "Not found");
    (404001, NOT_FOUND_USER, "User not found");
    (404002, NOT_FOUND_SOURCING_REQUEST, "Sourcing request not found");
    (404003, NOT_FOUND_MATCHING_CONTRACT_DEAL, "Contract deal not found");
    (404004, NOT_FOUND_PRODUCT, "Product not found");
    (404005, NOT_FOUND_SHIPPING_POLICY, "Shipping policy not found");
    (404006, NOT_FOUND_CATEGORY, "Category not found");
    (404007, NOT_FOUND_SALE_POLICY, "Sale policy not found");
    (404008, NOT_FOUND_PRODUCT_PROMPT, "Product prompt not found. Please create a prompt for the product");
    (404009, NOT_FOUND_VERTEX_RESOURCE, "Google Vertex AI resource not found");
    (404010, NOT_FOUND_SHIPMENT, "Shipment not found");

    // 409xxx
    (409000, CONFLICT_BASE, "Conflict");
    (409001, CONFLICT_USER, "User already exists");
    (409002, CONFLICT_SOURCING_REQUEST, "Sourcing request already created");
    (409003, CONFLICT_MATCHING_CONTRACT_DEAL, "Cannot request this product because it is already sold jointly");
    (409004, CONFLICT_PATH, "Domain already exists");
    (409005, CONFLICT_NICKNAME, "Nickname already exists");
    (409006, CONFLICT_SHIPPING_POLICY, "Shipping policy already exists");
    (409007, CONFLICT_SHIPPING_POLICY_DELETE, "Products are using this shipping policy");
    (409008, CONFLICT_ORDER_NOT_PROCESSED, "This order cannot be processed");

    // 429xxx-504xxx: upstream AI provider
    (429001, TOO_MANY_REQUESTS_VERTEX_RESOURCE_EXHAUSTED, "Google Vertex AI resource exhausted");
    (499002, CANCELLED_VERTEX_REQUEST, "Google Vertex AI request cancelled");
    (500001, UNKNOWN_VERTEX_ERROR, "Google Vertex AI unknown error");
    (503001, UNAVAILABLE_VERTEX_ERROR, "Google Vertex AI unavailable");
    (504001, DEADLINE_VERTEX_EXCEEDED, "Google Vertex AI deadline exceeded");
}

static INDEX: Lazy<HashMap<StatusCode, &'static CatalogEntry>> =
    Lazy::new(|| ENTRIES.iter().map(|entry| (entry.code, entry)).collect());

/// Look up the full catalog entry for `code`
pub fn lookup(code: StatusCode) -> Option<&'static CatalogEntry> {
    INDEX.get(&code).copied()
}

/// Canonical message for `code`, or `None` when unregistered
pub fn message_for(code: StatusCode) -> Option<&'static str> {
    lookup(code).map(|entry| entry.message)
}

/// Constant name for `code`, e.g. `"NOT_FOUND"`
pub fn name_of(code: StatusCode) -> Option<&'static str> {
    lookup(code).map(|entry| entry.name)
}

/// Whether `code` has a canonical message
pub fn is_registered(code: StatusCode) -> bool {
    INDEX.contains_key(&code)
}

/// All registered entries in table order
pub fn entries() -> impl Iterator<Item = &'static CatalogEntry> {
    ENTRIES.iter()
}
