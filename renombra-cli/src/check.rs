use anyhow::Result;
use renombra_core::{check_operation, MonthTable, OutputFormatter};

use crate::OutputFormat;

pub fn handle_check(names: &[String], output: OutputFormat) -> Result<()> {
    let result = check_operation(names, &MonthTable::spanish())?;

    match output {
        OutputFormat::Json => println!("{}", result.format_json()),
        OutputFormat::Summary => print!("{}", result.format_summary()),
    }

    Ok(())
}
