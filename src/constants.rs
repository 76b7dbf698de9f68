/// Storage key under which the session bearer token is persisted
pub const TOKEN_KEY: &str = "bullana_auth_token";
/// Storage key under which the cached user profile is persisted
pub const USER_KEY: &str = "bullana_user_data";
/// Legacy storage key for wallet data, removed on a full session clear
pub const WALLET_KEY: &str = "wallet_data";
/// Route the navigator is pointed at after an unauthorized response
pub const LOGIN_ROUTE: &str = "/login";
/// Default base URL for the Bullana REST API if not configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:13578";
/// Default timeout in seconds for REST API requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = "bullana-auth/0.3.0";
