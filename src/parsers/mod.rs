//! CPE format parsers.
//!
//! This module provides one parser per textual CPE binding and a dispatcher
//! that picks the right one from the input's prefix:
//!
//! | Prefix     | Format                     | Parser                    |
//! |------------|----------------------------|---------------------------|
//! | `wfn:`     | Well-Formed Name literal   | [`WfnParser`]             |
//! | `cpe:/`    | CPE 2.2 URI                | [`UriParser`]             |
//! | `cpe:2.3:` | CPE 2.3 formatted string   | [`FormattedStringParser`] |
//!
//! ## Usage
//!
//! ```
//! use cpe_tools::parsers::{parse, CpeFormat};
//!
//! let cpe = parse("cpe:/a:microsoft:internet_explorer:8.%02:sp%01").unwrap();
//! assert_eq!(cpe.version().as_str(), Some("8.*"));
//! assert_eq!(CpeFormat::detect("wfn:[]"), Some(CpeFormat::Wfn));
//! ```

mod detection;
mod formatted;
mod traits;
mod uri;
mod wfn;

pub use detection::CpeFormat;
pub use formatted::FormattedStringParser;
pub use traits::CpeParser;
pub use uri::UriParser;
pub use wfn::WfnParser;

use crate::error::{CpeError, Result};
use crate::model::Cpe;

/// Parser for the given format.
#[must_use]
pub fn parser_for(format: CpeFormat) -> &'static dyn CpeParser {
    match format {
        CpeFormat::Wfn => &WfnParser,
        CpeFormat::Uri => &UriParser,
        CpeFormat::FormattedString => &FormattedStringParser,
    }
}

/// Parse a CPE in any of the three textual forms.
///
/// The format is chosen by prefix; input with no known prefix fails with
/// [`CpeError::UnrecognizedFormat`].
pub fn parse(input: &str) -> Result<Cpe> {
    let format = CpeFormat::detect(input).ok_or_else(|| CpeError::unrecognized(input))?;
    tracing::debug!("Parsing {:?} as {}", input, format);
    parser_for(format).parse_str(input)
}

/// Parse a CPE that must be in a specific format.
pub fn parse_as(input: &str, format: CpeFormat) -> Result<Cpe> {
    parser_for(format).parse_str(input)
}
