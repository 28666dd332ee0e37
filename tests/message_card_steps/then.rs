//! Then steps for message card BDD scenarios.

use super::world::MessageCardWorld;
use rstest_bdd_macros::then;
use whisper::{
    card::{
        domain::{Notification, TemplateFormat},
        services::{CopyOutcome, DeleteOutcome},
    },
    message::domain::MessageId,
};

fn last_notification(world: &MessageCardWorld) -> Result<Notification, eyre::Report> {
    world
        .card()?
        .ports
        .notifier
        .last()
        .ok_or_else(|| eyre::eyre!("no notification was shown"))
}

#[then("the submission is accepted")]
fn submission_accepted(world: &MessageCardWorld) -> Result<(), eyre::Report> {
    match world.validation_result.as_ref() {
        Some(Ok(_)) => Ok(()),
        other => Err(eyre::eyre!("expected an accepted submission, got {other:?}")),
    }
}

#[then(r#"the accepted rating is {stars:u8} stars"#)]
fn accepted_rating(world: &MessageCardWorld, stars: u8) -> Result<(), eyre::Report> {
    let Some(Ok(valid)) = world.validation_result.as_ref() else {
        return Err(eyre::eyre!("missing accepted submission"));
    };
    let actual = valid.stars().map(|rating| rating.value());
    if actual != Some(stars) {
        return Err(eyre::eyre!("expected {stars} stars, found {actual:?}"));
    }
    Ok(())
}

#[then(r#"the "{field}" field reports "{message}""#)]
fn field_reports(
    world: &MessageCardWorld,
    field: String,
    message: String,
) -> Result<(), eyre::Report> {
    let Some(Err(error)) = world.validation_result.as_ref() else {
        return Err(eyre::eyre!("expected a rejected submission"));
    };
    let reported = error
        .field_errors()
        .into_iter()
        .find(|(key, _)| key.as_str() == field)
        .map(|(_, text)| text);
    if reported.as_deref() != Some(message.as_str()) {
        return Err(eyre::eyre!(
            "expected {field} to report {message:?}, found {reported:?}"
        ));
    }
    Ok(())
}

#[then(r#"message "{id}" is no longer displayed"#)]
fn message_not_displayed(world: &MessageCardWorld, id: String) -> Result<(), eyre::Report> {
    let card = world.card()?;
    if card.list.contains(&MessageId::from(id.as_str())) {
        return Err(eyre::eyre!("message {id} is still displayed"));
    }
    if !matches!(world.delete_outcome, Some(Ok(DeleteOutcome::Deleted { .. }))) {
        return Err(eyre::eyre!(
            "expected a successful delete, got {:?}",
            world.delete_outcome
        ));
    }
    Ok(())
}

#[then(r#"message "{id}" is still displayed"#)]
fn message_still_displayed(world: &MessageCardWorld, id: String) -> Result<(), eyre::Report> {
    if !world.card()?.list.contains(&MessageId::from(id.as_str())) {
        return Err(eyre::eyre!("message {id} was removed"));
    }
    Ok(())
}

#[then(r#"a notification titled "{title}" is shown"#)]
fn notification_titled(world: &MessageCardWorld, title: String) -> Result<(), eyre::Report> {
    let notification = last_notification(world)?;
    if notification.title != title {
        return Err(eyre::eyre!(
            "expected notification {title:?}, found {:?}",
            notification.title
        ));
    }
    Ok(())
}

#[then(r#"the notification reads "{description}""#)]
fn notification_reads(world: &MessageCardWorld, description: String) -> Result<(), eyre::Report> {
    let notification = last_notification(world)?;
    if notification.description.as_deref() != Some(description.as_str()) {
        return Err(eyre::eyre!(
            "expected description {description:?}, found {:?}",
            notification.description
        ));
    }
    Ok(())
}

#[then("the notification is destructive")]
fn notification_destructive(world: &MessageCardWorld) -> Result<(), eyre::Report> {
    if !last_notification(world)?.is_destructive() {
        return Err(eyre::eyre!("expected a destructive notification"));
    }
    Ok(())
}

#[then("no notification is shown")]
fn no_notification(world: &MessageCardWorld) -> Result<(), eyre::Report> {
    let shown = world.card()?.ports.notifier.notifications();
    if !shown.is_empty() {
        return Err(eyre::eyre!("expected no notifications, found {shown:?}"));
    }
    Ok(())
}

#[then("the card is idle")]
fn card_is_idle(world: &MessageCardWorld) -> Result<(), eyre::Report> {
    let state = world.card()?.controller.confirmation_state();
    if !state.is_idle() {
        return Err(eyre::eyre!("expected idle card, found {state}"));
    }
    Ok(())
}

#[then(r#"the clipboard holds the "{format}" template"#)]
fn clipboard_holds_template(world: &MessageCardWorld, format: String) -> Result<(), eyre::Report> {
    let format = TemplateFormat::try_from(format.as_str())?;
    let card = world.card()?;
    let expected = card.controller.generate_template(format)?;
    if card.ports.clipboard.contents().as_deref() != Some(expected.as_str()) {
        return Err(eyre::eyre!("clipboard does not hold the {format} template"));
    }
    if world.copy_outcome != Some(Ok(CopyOutcome::Copied(expected))) {
        return Err(eyre::eyre!("unexpected copy outcome {:?}", world.copy_outcome));
    }
    Ok(())
}

#[then("the clipboard is empty")]
fn clipboard_empty(world: &MessageCardWorld) -> Result<(), eyre::Report> {
    if let Some(contents) = world.card()?.ports.clipboard.contents() {
        return Err(eyre::eyre!("expected empty clipboard, found {contents:?}"));
    }
    Ok(())
}
