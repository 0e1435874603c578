use crate::ui::style;
use dialoguer::Confirm;

/// Decides whether a freshly generated draft goes out.
pub trait PublishApproval {
    fn approve(&mut self, text: &str) -> bool;
}

/// Publish every draft (one-shot and scheduled modes).
pub struct AutoApprove;

impl PublishApproval for AutoApprove {
    fn approve(&mut self, _text: &str) -> bool {
        true
    }
}

/// Draft only.
pub struct NeverPublish;

impl PublishApproval for NeverPublish {
    fn approve(&mut self, _text: &str) -> bool {
        false
    }
}

/// Show the draft and ask the operator. A failed prompt counts as "no".
pub struct ConfirmApproval;

impl PublishApproval for ConfirmApproval {
    fn approve(&mut self, text: &str) -> bool {
        println!("{}", style::header("Generated post"));
        println!("{}", style::separator());
        println!("{text}");
        println!("{}", style::separator());

        match Confirm::new()
            .with_prompt("Publish this post to LinkedIn?")
            .default(false)
            .interact()
        {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!("publish confirmation failed, skipping publish: {e}");
                false
            }
        }
    }
}
