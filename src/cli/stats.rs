use crate::analysis::analyze;
use crate::error::Result;
use crate::symbol::SymbolString;
use std::path::Path;

/// Analyze a symbol-sequence file and render the text report.
/// ASCII whitespace is stripped before parsing, as for decrypt input.
pub fn show_stats(path: &Path) -> Result<String> {
    let text = std::fs::read_to_string(path)?;
    let stripped: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let sequence: SymbolString = stripped.parse()?;

    let report = analyze(&sequence);
    Ok(report.to_text(&path.display().to_string()))
}
