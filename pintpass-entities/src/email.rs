use std::{fmt, str::FromStr};

use thiserror::Error;

/// An e-mail address that serves as the account identity.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub const fn new_unchecked(address: String) -> Self {
        Self(address)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

#[derive(Debug, Error)]
#[error("Invalid e-mail address")]
pub struct EmailAddressParseError;

impl FromStr for EmailAddress {
    type Err = EmailAddressParseError;

    fn from_str(s: &str) -> Result<EmailAddress, Self::Err> {
        let s = s.trim();
        let (local, domain) = s.split_once('@').ok_or(EmailAddressParseError)?;
        if local.is_empty()
            || domain.is_empty()
            || domain.contains('@')
            || !domain.contains('.')
            || s.contains(char::is_whitespace)
        {
            return Err(EmailAddressParseError);
        }
        Ok(Self(s.to_owned()))
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_addresses() {
        assert!("foo@bar.io".parse::<EmailAddress>().is_ok());
        assert!(" foo.baz@bar.example.com ".parse::<EmailAddress>().is_ok());
    }

    #[test]
    fn reject_invalid_addresses() {
        assert!("".parse::<EmailAddress>().is_err());
        assert!("foo".parse::<EmailAddress>().is_err());
        assert!("foo@".parse::<EmailAddress>().is_err());
        assert!("@bar.io".parse::<EmailAddress>().is_err());
        assert!("foo@bar".parse::<EmailAddress>().is_err());
        assert!("foo bar@baz.io".parse::<EmailAddress>().is_err());
    }
}
