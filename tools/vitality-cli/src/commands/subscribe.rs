//! Newsletter signup.

use anyhow::Result;
use vitality_commerce::submission::{NewsletterSignup, SubmissionReceipt, SubmissionService};

use super::SubscribeArgs;
use crate::context::Context;

/// Run the subscribe command.
pub async fn run(args: SubscribeArgs, ctx: &Context, service: &dyn SubmissionService) -> Result<()> {
    let spinner = ctx.output.spinner("Subscribing...");
    let result = service.subscribe(NewsletterSignup::new(args.email)).await;
    spinner.finish_and_clear();

    print_receipt(&result?, ctx);
    Ok(())
}

/// Print the acknowledgement for a submission.
pub fn print_receipt(receipt: &SubmissionReceipt, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(receipt);
        return;
    }
    ctx.output.success(&receipt.title);
    ctx.output.line(&format!("  {}", receipt.message));
}
