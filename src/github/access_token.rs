use serde::{Deserialize, Serialize};
use std::fmt;

/// Pre-obtained GitHub credential. Never printed in full.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        AccessToken(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

impl From<&str> for AccessToken {
    fn from(token: &str) -> Self {
        AccessToken::new(token)
    }
}

impl From<String> for AccessToken {
    fn from(token: String) -> Self {
        AccessToken(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_not_leak_the_token_in_debug_output() {
        let token = AccessToken::new("ghp_secret");

        assert_eq!(format!("{:?}", token), "AccessToken(***)");
        assert_eq!(token.expose(), "ghp_secret");
    }
}
