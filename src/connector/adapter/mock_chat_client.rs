use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::{ChatClient, ChatMessage};
use crate::domain::DomainError;

pub const SAMPLE_PRICE_ESTIMATE: &str = "\
**PRICE RANGE:**
- Minimum Value: $14,200
- Maximum Value: $16,800
- Most Likely Price: $15,500

**KEY PRICING FACTORS:**
- Mileage Impact: Mileage is close to the average for its age, so it neither adds nor removes much value.
- Condition Assessment: Good overall condition supports a price in the upper half of the range.
- Market Demand: Reliable compact cars remain in steady demand with used buyers.
- Depreciation: Most of the steep early depreciation has already happened.

**MARKET ANALYSIS:**
Used prices for this segment have eased slightly over the last quarter. Sellers should \
keep service records at hand; buyers should compare at least three local listings.";

pub const SAMPLE_COMPARISON: &str = "\
## Performance and Engine
- Car 1 offers stronger acceleration.
- Car 2 is smoother at highway speeds.

## Fuel Efficiency and Running Costs
- Car 2 uses noticeably less fuel in mixed driving.

## Recommendation
- Commuting: Car 2, for its lower running costs.
- Performance: Car 1, for its livelier engine.";

pub const SAMPLE_DETAILS: &str = "\
Make: Not specified
Model: Not specified
Year: Not specified
Condition: Not specified";

/// A [`ChatClient`] that returns a canned reply (or failure) without any
/// network access. Calls are recorded so tests can inspect the prompts.
pub struct MockChatClient {
    reply: Result<String, String>,
    calls: Mutex<Vec<Vec<ChatMessage>>>,
}

impl MockChatClient {
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            reply: Ok(reply.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn pricing() -> Self {
        Self::with_reply(SAMPLE_PRICE_ESTIMATE)
    }

    pub fn comparison() -> Self {
        Self::with_reply(SAMPLE_COMPARISON)
    }

    pub fn details() -> Self {
        Self::with_reply(SAMPLE_DETAILS)
    }

    /// Conversations received so far, oldest first.
    pub fn calls(&self) -> Vec<Vec<ChatMessage>> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, DomainError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(messages.to_vec());
        }
        self.reply.clone().map_err(DomainError::completion)
    }
}
