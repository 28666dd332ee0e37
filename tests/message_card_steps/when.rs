//! When steps for message card BDD scenarios.

use super::world::{MessageCardWorld, run_async};
use rstest_bdd_macros::when;
use whisper::{card::domain::TemplateFormat, message::ports::validator::SubmissionValidator};

#[when("the submission is validated")]
fn submission_validated(world: &mut MessageCardWorld) -> Result<(), eyre::Report> {
    let submission = world
        .submission
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing submission in scenario world"))?;
    world.validation_result = Some(world.validator.validate(submission));
    Ok(())
}

#[when("the user requests deletion")]
fn user_requests_deletion(world: &mut MessageCardWorld) -> Result<(), eyre::Report> {
    world.card_mut()?.controller.request_delete()?;
    Ok(())
}

#[when("the user cancels deletion")]
fn user_cancels_deletion(world: &mut MessageCardWorld) -> Result<(), eyre::Report> {
    world.card_mut()?.controller.cancel_delete()?;
    Ok(())
}

#[when("the user confirms deletion")]
fn user_confirms_deletion(world: &mut MessageCardWorld) -> Result<(), eyre::Report> {
    let card = world.card_mut()?;
    let outcome = run_async(card.controller.confirm_delete());
    world.delete_outcome = Some(outcome);
    Ok(())
}

#[when(r#"the user copies the "{format}" template"#)]
fn user_copies_template(world: &mut MessageCardWorld, format: String) -> Result<(), eyre::Report> {
    let format = TemplateFormat::try_from(format.as_str())?;
    let card = world.card()?;
    let outcome = card.controller.copy_template(format);
    world.copy_outcome = Some(outcome);
    Ok(())
}
