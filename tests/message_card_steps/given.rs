//! Given steps for message card BDD scenarios.

use super::world::{MessageCardWorld, scenario_timestamp};
use rstest_bdd_macros::given;
use whisper::message::domain::{Message, MessageId, MessageSubmission, PersistedMessageData, StarRating};

#[given(r#"a submission with content "{content}""#)]
fn submission_with_content(world: &mut MessageCardWorld, content: String) {
    world.submission = Some(MessageSubmission::new(content));
}

#[given(r#"the submission is signed "{sender_name}""#)]
fn submission_signed(
    world: &mut MessageCardWorld,
    sender_name: String,
) -> Result<(), eyre::Report> {
    let submission = world
        .submission
        .take()
        .ok_or_else(|| eyre::eyre!("missing submission in scenario world"))?;
    world.submission = Some(submission.with_sender_name(sender_name));
    Ok(())
}

#[given(r#"the submission is rated "{stars}""#)]
fn submission_rated(world: &mut MessageCardWorld, stars: String) -> Result<(), eyre::Report> {
    let submission = world
        .submission
        .take()
        .ok_or_else(|| eyre::eyre!("missing submission in scenario world"))?;
    world.submission = Some(submission.with_stars(stars.as_str()));
    Ok(())
}

#[given("the clipboard denies access")]
fn clipboard_denies_access(world: &mut MessageCardWorld) {
    world.clipboard_denied = true;
}

#[given(r#"a displayed message "{id}" from "{sender_name}" rated {stars:u8} stars"#)]
fn displayed_message(
    world: &mut MessageCardWorld,
    id: String,
    sender_name: String,
    stars: u8,
) -> Result<(), eyre::Report> {
    let message = Message::from_persisted(PersistedMessageData {
        id: MessageId::from(id),
        content: "Hello there, this is a test".to_owned(),
        sender_name: Some(sender_name),
        stars: Some(StarRating::new(stars)?),
        created_at: scenario_timestamp()?,
    })?;
    world.display(message)
}

#[given("the message store is unreachable")]
fn message_store_unreachable(world: &mut MessageCardWorld) -> Result<(), eyre::Report> {
    world
        .card()?
        .ports
        .store
        .fail_with(whisper::card::ports::DeleteRequestError::without_description());
    Ok(())
}

#[given("the user has requested deletion")]
fn user_has_requested_deletion(world: &mut MessageCardWorld) -> Result<(), eyre::Report> {
    world.card_mut()?.controller.request_delete()?;
    Ok(())
}
