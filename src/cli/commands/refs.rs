//! Refs command implementation

use crate::audit::{FormulaText, UsedReferences, extract_references};
use crate::cli::args::RefsArgs;
use crate::cli::error::CliError;
use crate::cli::output::format_references;
use std::io::Read;

/// Load formula segments, reading stdin for `-`
fn load_formula(segments: &[String]) -> Result<FormulaText, CliError> {
    if let [only] = segments
        && only == "-"
    {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| CliError::InvalidArgument(format!("Failed to read stdin: {}", e)))?;
        return Ok(FormulaText::from(content.as_str()));
    }
    Ok(FormulaText::from(segments.to_vec()))
}

/// Handle the refs command
pub fn handle_refs(args: &RefsArgs) -> Result<(), CliError> {
    let formula = load_formula(&args.formula)?;
    let refs = UsedReferences::new(extract_references(&formula));
    print!("{}", format_references(&refs.sorted()));
    Ok(())
}
