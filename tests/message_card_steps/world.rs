//! Shared world state for message card BDD scenarios.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use rstest::fixture;
use whisper::{
    card::{
        adapters::{
            memory::{InMemoryClipboard, InMemoryMessageStore, MessageList, RecordingNotifier},
            timestamp::PatternTimestampFormatter,
        },
        services::{CardPorts, CardResult, CopyOutcome, DeleteOutcome, MessageCardController},
    },
    message::{
        domain::{Message, MessageSubmission, ValidSubmission},
        ports::validator::ValidationResult,
        validation::DefaultSubmissionValidator,
    },
};

/// Card controller type used by the BDD world.
pub type TestController = MessageCardController<
    InMemoryMessageStore,
    RecordingNotifier,
    InMemoryClipboard,
    PatternTimestampFormatter,
>;

/// Port bundle used by the BDD world.
pub type TestPorts =
    CardPorts<InMemoryMessageStore, RecordingNotifier, InMemoryClipboard, PatternTimestampFormatter>;

/// A displayed card with its collaborators.
pub struct DisplayedCard {
    pub ports: TestPorts,
    pub list: Arc<MessageList>,
    pub controller: TestController,
}

/// Scenario world for message card behaviour tests.
pub struct MessageCardWorld {
    pub validator: DefaultSubmissionValidator,
    pub submission: Option<MessageSubmission>,
    pub validation_result: Option<ValidationResult<ValidSubmission>>,
    pub clipboard_denied: bool,
    pub card: Option<DisplayedCard>,
    pub delete_outcome: Option<CardResult<DeleteOutcome>>,
    pub copy_outcome: Option<CardResult<CopyOutcome>>,
}

impl MessageCardWorld {
    /// Creates a world with no submission and no displayed card.
    #[must_use]
    pub fn new() -> Self {
        Self {
            validator: DefaultSubmissionValidator::new(),
            submission: None,
            validation_result: None,
            clipboard_denied: false,
            card: None,
            delete_outcome: None,
            copy_outcome: None,
        }
    }

    /// Displays `message` in a single-card list over in-memory ports.
    pub fn display(&mut self, message: Message) -> Result<(), eyre::Report> {
        let clipboard = if self.clipboard_denied {
            InMemoryClipboard::denied()
        } else {
            InMemoryClipboard::new()
        };
        let ports = CardPorts {
            store: Arc::new(InMemoryMessageStore::with_messages([message.clone()])),
            notifier: Arc::new(RecordingNotifier::new()),
            clipboard: Arc::new(clipboard),
            formatter: Arc::new(PatternTimestampFormatter::new()),
        };
        let list = Arc::new(MessageList::new([message.clone()]));
        let handle = list
            .get(message.id())
            .ok_or_else(|| eyre::eyre!("displayed message missing from list"))?;
        let controller = MessageCardController::new(handle, ports.clone(), list.clone());
        self.card = Some(DisplayedCard {
            ports,
            list,
            controller,
        });
        Ok(())
    }

    /// Returns the displayed card.
    pub fn card(&self) -> Result<&DisplayedCard, eyre::Report> {
        self.card
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing displayed card in scenario world"))
    }

    /// Returns the displayed card mutably.
    pub fn card_mut(&mut self) -> Result<&mut DisplayedCard, eyre::Report> {
        self.card
            .as_mut()
            .ok_or_else(|| eyre::eyre!("missing displayed card in scenario world"))
    }
}

impl Default for MessageCardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Creation time shared by scenario messages: `Mar 5, 2024 2:07 PM` UTC.
pub fn scenario_timestamp() -> Result<DateTime<Utc>, eyre::Report> {
    Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 0)
        .single()
        .ok_or_else(|| eyre::eyre!("invalid scenario timestamp"))
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> MessageCardWorld {
    MessageCardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
