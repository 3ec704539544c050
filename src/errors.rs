use std::error;
use std::fmt;

/// Renders an error and its full source chain, one cause per line.
/// The error enums use this as their `Debug` impl so a failed
/// bootstrap reports every layer of what went wrong.
pub fn error_chain_fmt(e: &impl error::Error, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{e}")?;
    let mut source = e.source();

    while let Some(cause) = source {
        writeln!(f, "Caused by:\n\t{cause}")?;
        source = cause.source();
    }

    Ok(())
}
