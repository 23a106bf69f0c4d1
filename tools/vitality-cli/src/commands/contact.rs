//! Contact form.

use anyhow::{bail, Result};
use dialoguer::{Input, Select};
use vitality_commerce::submission::{ContactMessage, ContactSubject, SubmissionService};

use super::subscribe::print_receipt;
use super::ContactArgs;
use crate::context::Context;

/// Run the contact command.
pub async fn run(args: ContactArgs, ctx: &Context, service: &dyn SubmissionService) -> Result<()> {
    let interactive = ctx.output.is_interactive();

    let name = field(args.name, "Name", interactive)?;
    let email = field(args.email, "Email", interactive)?;
    let subject = match args.subject {
        Some(subject) => subject.parse::<ContactSubject>()?,
        None if interactive => pick_subject()?,
        None => ContactSubject::default(),
    };
    let message = field(args.message, "Message", interactive)?;

    let spinner = ctx.output.spinner("Sending message...");
    let result = service
        .send_message(ContactMessage::new(name, email, subject, message))
        .await;
    spinner.finish_and_clear();

    print_receipt(&result?, ctx);
    Ok(())
}

/// Use the flag value, or prompt for it when a terminal is attached.
///
/// Blank values pass through so the service reports which field is missing.
fn field(value: Option<String>, prompt: &str, interactive: bool) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None if interactive => Ok(Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?),
        None => bail!("--{} is required when not running interactively", prompt.to_lowercase()),
    }
}

fn pick_subject() -> Result<ContactSubject> {
    let items: Vec<&str> = ContactSubject::ALL.iter().map(|s| s.display_name()).collect();
    let selection = Select::new()
        .with_prompt("Subject")
        .items(&items)
        .default(0)
        .interact()?;
    Ok(ContactSubject::ALL[selection])
}
