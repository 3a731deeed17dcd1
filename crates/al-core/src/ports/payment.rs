//! Payment gateway port.

use async_trait::async_trait;

/// Card form input collected by the Payment step. Passed through to the
/// gateway and never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDetails {
    pub number: String,
    pub expiry: String,
    pub cvc: String,
}

impl CardDetails {
    /// Last four digits for log output; the full number never appears in
    /// logs.
    pub fn masked_number(&self) -> String {
        let digits: String = self.number.chars().filter(|c| c.is_ascii_digit()).collect();
        let tail = digits
            .get(digits.len().saturating_sub(4)..)
            .unwrap_or_default();
        format!("****{tail}")
    }
}

/// Charges one report bundle. The shipped implementation is a fixed-delay
/// simulation; counter mutation stays with the flow, not the gateway.
#[async_trait]
pub trait PaymentGatewayPort: Send + Sync {
    async fn charge(&self, card: &CardDetails) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masked_number_keeps_last_four_digits() {
        let card = CardDetails {
            number: "4242 4242 4242 4242".to_string(),
            expiry: "12/30".to_string(),
            cvc: "123".to_string(),
        };
        assert_eq!(card.masked_number(), "****4242");
    }

    #[test]
    fn masked_number_handles_short_input() {
        let card = CardDetails {
            number: "12".to_string(),
            ..Default::default()
        };
        assert_eq!(card.masked_number(), "****12");
    }
}
