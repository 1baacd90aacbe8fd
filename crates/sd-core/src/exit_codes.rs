//! Exit codes for the salesdash CLI.
//!
//! Exit codes communicate the dashboard outcome without requiring output
//! parsing.

/// Exit codes for salesdash operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Nothing to flag
    Clean = 0,

    /// At least one warn or error alert fired
    AlertsRaised = 1,

    /// Every submission was refused for the caller's role
    Forbidden = 4,

    /// Configuration error
    ConfigError = 10,

    /// Malformed input file
    InputError = 11,

    /// I/O error
    IoError = 13,

    /// Internal/unknown error
    InternalError = 99,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Map a shared error onto the exit code for its class.
    pub fn for_error(err: &sd_common::Error) -> Self {
        match err.code() {
            10..=19 => ExitCode::ConfigError,
            20..=29 => ExitCode::InputError,
            40..=49 => ExitCode::Forbidden,
            60 => ExitCode::IoError,
            61 => ExitCode::InputError,
            _ => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes() {
        assert_eq!(ExitCode::Clean.as_i32(), 0);
        assert_eq!(ExitCode::AlertsRaised.as_i32(), 1);
        assert_eq!(ExitCode::Forbidden.as_i32(), 4);
        assert_eq!(ExitCode::InternalError.as_i32(), 99);
    }

    #[test]
    fn error_mapping() {
        use sd_common::Error;
        assert_eq!(ExitCode::for_error(&Error::Config("x".into())), ExitCode::ConfigError);
        assert_eq!(
            ExitCode::for_error(&Error::UnknownSector("x".into())),
            ExitCode::InputError
        );
        let io = Error::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(ExitCode::for_error(&io), ExitCode::IoError);
    }
}
