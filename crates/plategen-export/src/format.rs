use maker_rs::WalkedPath;

use crate::ExportError;

/// Shortest round-trip representation, without a trailing `.0` and with `-0` folded to `0`.
pub(crate) fn fmt_num(v: f64) -> String {
    let v = if v.abs() < 1e-9 { 0.0 } else { v };
    let mut buf = ryu::Buffer::new();
    let s = buf.format(v);
    s.strip_suffix(".0").unwrap_or(s).to_string()
}

pub(crate) fn finite(v: f64, what: &'static str, walked: &WalkedPath) -> Result<f64, ExportError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ExportError::NonFinite {
            what,
            route: walked.route.clone(),
        })
    }
}
