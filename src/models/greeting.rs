use serde::{Deserialize, Serialize};

/// The fixed payload every request is answered with.
///
/// `BODY` is what goes on the wire. It is kept as a literal rather than
/// produced by `serde_json::to_string`, which would drop the space after the
/// colon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub message: String,
}

impl Greeting {
    pub const BODY: &'static str = r#"{"message": "hello world"}"#;

    /// The typed form of `BODY`, for clients decoding the response.
    pub fn hello() -> Self {
        Greeting {
            message: "hello world".to_string(),
        }
    }
}
