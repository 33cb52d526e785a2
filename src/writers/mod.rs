//! CPE serializers.
//!
//! One writer per textual binding:
//! - [`WfnWriter`]: `wfn:[part="a",...]`, always all eleven attributes
//! - [`UriWriter`]: `cpe:/a:vendor:product`, first seven attributes
//! - [`FormattedStringWriter`]: `cpe:2.3:a:vendor:...`, all eleven attributes
//!
//! Every writer lower-cases concrete values on output.

mod formatted;
mod uri;
mod wfn;

pub use formatted::FormattedStringWriter;
pub use uri::UriWriter;
pub use wfn::WfnWriter;

use crate::model::Cpe;
use crate::parsers::CpeFormat;
use std::io::Write;

/// Trait for CPE serializers
pub trait CpeWriter {
    /// The format this writer produces
    fn format(&self) -> CpeFormat;

    /// Bind a CPE to its textual form
    fn write(&self, cpe: &Cpe) -> String;

    /// Write the textual form to a writer
    fn write_to(&self, cpe: &Cpe, writer: &mut dyn Write) -> std::io::Result<()> {
        writer.write_all(self.write(cpe).as_bytes())
    }
}

/// Writer for the given format.
#[must_use]
pub fn writer_for(format: CpeFormat) -> &'static dyn CpeWriter {
    match format {
        CpeFormat::Wfn => &WfnWriter,
        CpeFormat::Uri => &UriWriter,
        CpeFormat::FormattedString => &FormattedStringWriter,
    }
}
