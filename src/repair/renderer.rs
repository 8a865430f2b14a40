//! Renders the repair bay HTML document for the last damaged system.

use tracing::debug;

use crate::catalog::SystemName;
use crate::error::RepairError;

/// Rendered repair bay document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairPage {
    /// System the page was rendered for.
    pub system: SystemName,
    /// Repair code embedded in the anchor element.
    pub code: &'static str,
    /// Full HTML document.
    pub html: String,
}

/// Render the repair bay for `last`, failing if no system was reported yet.
pub fn render_repair_page(last: Option<SystemName>) -> Result<RepairPage, RepairError> {
    let system = last.ok_or(RepairError::NoDamagedSystem)?;
    let code = system.repair_code();
    debug!(%system, code, "Rendering repair bay");

    Ok(RepairPage {
        system,
        code,
        html: repair_html(code),
    })
}

fn repair_html(code: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Repair</title>
</head>
<body>
    <div class="anchor-point">{code}</div>
</body>
</html>
"#
    )
}
