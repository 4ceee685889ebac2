//! Interactive input
//!
//! Each prompt returns a validated value; parsing lives in plain functions so it
//! can be tested without a terminal.

use dialoguer::Input;
use fleetkey_cloud::{AccessError, Target};
use std::path::PathBuf;

const INVALID_TARGET_MESSAGE: &str =
    "Please Enter a Valid Fleet ID or Build ID, Accepted Formats are fleet-### or build-###";

/// Output directory, defaulting to the current directory
pub fn output_dir() -> anyhow::Result<PathBuf> {
    let default = std::env::current_dir()?;

    let answer: String = Input::new()
        .with_prompt("Output Directory")
        .default(default.display().to_string())
        .interact_text()?;

    Ok(parse_output_dir(&answer, default))
}

pub fn parse_output_dir(answer: &str, default: PathBuf) -> PathBuf {
    let answer = answer.trim();
    if answer.is_empty() {
        default
    } else {
        PathBuf::from(answer)
    }
}

/// Ask the operator to confirm the region the SDK resolved
pub fn confirm_region(region: Option<&str>) -> Result<(), AccessError> {
    let region = region.ok_or(AccessError::RegionNotConfigured)?;

    let answer: Option<String> = Input::new()
        .with_prompt(format!("Is Current AWS Region \"{}\" Correct: (y/n)", region))
        .default("y".to_string())
        .interact_text()
        .ok();

    check_region_answer(answer.as_deref())
}

/// `None` means the answer could not be read
///
/// The prompt's `y` default replaces an empty line before it gets here, so the
/// empty case below only covers an unreadable answer, not pressing Enter.
pub fn check_region_answer(answer: Option<&str>) -> Result<(), AccessError> {
    let answer = answer
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .ok_or(AccessError::InvalidRegionConfirmation)?;

    if answer.eq_ignore_ascii_case("n") {
        return Err(AccessError::RegionRejected);
    }
    Ok(())
}

/// Fleet or build id, re-asked until it parses
pub fn target() -> anyhow::Result<Target> {
    let answer: String = Input::new()
        .with_prompt("Enter a Fleet Id or Build Id")
        .validate_with(|input: &String| -> Result<(), &'static str> {
            Target::parse(input).map(|_| ()).map_err(|_| INVALID_TARGET_MESSAGE)
        })
        .interact_text()?;

    Ok(Target::parse(&answer)?)
}
