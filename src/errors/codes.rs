pub struct ErrorCode;

impl ErrorCode {
    // Docker engine errors: D1xx
    pub const DOCKER_TLS_SETUP_FAILED: &'static str = "D100";
    pub const DOCKER_REQUEST_FAILED: &'static str = "D101";
    pub const DOCKER_HTTP_STATUS: &'static str = "D102";
    pub const DOCKER_DECODE_FAILED: &'static str = "D103";
    pub const DOCKER_TLS_HANDSHAKE_FAILED: &'static str = "D104";

    // Render errors: R1xx
    pub const RENDER_OUTPUT_FAILED: &'static str = "R100";
}
