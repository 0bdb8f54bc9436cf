//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

// =============================================================================
// Routing
// =============================================================================

/// Root of the versioned API
pub const API_ROOT_PATH: &str = "/api/v1/";

/// User collection route
pub const USERS_PATH: &str = "/api/v1/users";

/// Single user route, keyed by numeric id
pub const USER_PATH: &str = "/api/v1/users/:id";

/// Greeting returned by the API root
pub const API_GREETING: &str = "Hello World";

// =============================================================================
// Validation
// =============================================================================

/// Fields that must be non-empty when a user record is replaced, in the
/// order their errors are reported
pub const REQUIRED_USER_FIELDS: &[&str] = &["username", "password", "name"];
