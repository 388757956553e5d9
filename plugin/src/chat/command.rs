use std::fmt;

/// Currencies the exchange server always reports.
pub const DEFAULT_CURRENCIES: [&str; 2] = ["EUR", "USD"];

/// The server's `exchange <days> <currency...>` command.
///
/// Only sent when configured with [`ChatConfig::with_initial_command`](crate::ChatConfig::with_initial_command)
/// or through [`ChatClient::send_command`](crate::ChatClient::send_command).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeCommand {
    pub days: u32,
    pub currencies: Vec<String>,
}

impl ExchangeCommand {
    pub fn new<I, S>(days: u32, currencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            days,
            currencies: currencies.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for ExchangeCommand {
    fn default() -> Self {
        Self::new(1, DEFAULT_CURRENCIES)
    }
}

impl fmt::Display for ExchangeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "exchange {}", self.days)?;
        for currency in &self.currencies {
            write!(f, " {}", currency)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_format() {
        assert_eq!(
            ExchangeCommand::new(3, ["EUR", "USD"]).to_string(),
            "exchange 3 EUR USD"
        );
        assert_eq!(ExchangeCommand::new(2, ["PLN"]).to_string(), "exchange 2 PLN");
    }

    #[test]
    fn test_command_without_currencies_has_no_trailing_space() {
        let command = ExchangeCommand::new(5, Vec::<String>::new());
        assert_eq!(command.to_string(), "exchange 5");
    }

    #[test]
    fn test_default_command() {
        assert_eq!(ExchangeCommand::default().to_string(), "exchange 1 EUR USD");
    }
}
