//! Exit codes for unbiasctl

/// Exit code for success
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for general errors
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Exit code when the input is blank and no request was made
pub const EXIT_EMPTY_INPUT: i32 = 64;

/// Exit code when a service answered with an unusable response
pub const EXIT_INVALID_RESPONSE: i32 = 65;

/// Exit code when a service is unreachable or timed out
pub const EXIT_SERVICE_UNAVAILABLE: i32 = 70;

/// Map a failed call to its exit code
pub fn exit_code_for(error: &unbias_common::ApiError) -> i32 {
    if error.is_unavailable() {
        EXIT_SERVICE_UNAVAILABLE
    } else if error.is_invalid_response() {
        EXIT_INVALID_RESPONSE
    } else {
        EXIT_GENERAL_ERROR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unbias_common::ApiError;

    #[test]
    fn test_exit_codes_by_error_class() {
        let timeout = ApiError::Timeout {
            endpoint: "x".to_string(),
            secs: 30,
        };
        let status = ApiError::Status {
            endpoint: "x".to_string(),
            status: 500,
        };
        assert_eq!(exit_code_for(&timeout), EXIT_SERVICE_UNAVAILABLE);
        assert_eq!(exit_code_for(&status), EXIT_INVALID_RESPONSE);
        assert_eq!(exit_code_for(&ApiError::ClientBuild("tls".to_string())), EXIT_GENERAL_ERROR);
    }
}
