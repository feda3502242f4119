use std::fmt;

/// Transient upstream failure : timeout, connection failure, non-2xx
/// status, or malformed JSON. The client never surfaces this to its
/// caller -- `expand` and `probe` both swallow it into an empty result --
/// but it is kept as a distinct type so the places that do the swallowing
/// can log what actually happened.
#[derive(Debug)]
pub enum ClientError {
    Transport(String),
    Status(u16),
    Decode(String),
    Cancelled,
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "transport error: {msg}"),
            Self::Status(code) => write!(f, "non-2xx status: {code}"),
            Self::Decode(msg) => write!(f, "decode failure: {msg}"),
            Self::Cancelled => f.write_str("request cancelled"),
        }
    }
}

impl std::error::Error for ClientError {}
