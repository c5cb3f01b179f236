//! Interactive confirmations.

use crate::error::Result;
use dialoguer::Confirm;

/// Asks a yes/no question defaulting to "no"; `skip` answers "yes" without asking.
pub fn confirm<S: Into<String>>(skip: bool, prompt: S) -> Result<bool> {
    if skip {
        return Ok(true);
    }

    Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
}
