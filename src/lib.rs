//! hdrdoc — generate a Markdown API reference from documented C headers.
//!
//! Every `/** ... */` comment directly followed by a declaration becomes
//! one section of the reference:
//!
//! ```text
//! /** ring_push
//!  *
//!  *  Appends a byte to the buffer.
//!  *
//!  *  [Parameter: ring] The buffer
//!  *  [Parameter: byte] The value to append
//!  *  [Return value] 0 on success, `RING_FULL` when there is no room
//!  */
//! int ring_push(struct ring *ring, uint8_t byte);
//! ```
//!
//! The pipeline is scan → normalize → parse → render, one pass, no state
//! shared between entries.

pub mod error;
pub mod model;
pub mod options;
pub mod parser;
pub mod render;
pub mod scanner;

pub use error::{EntryError, Error, Result};
pub use model::{DocEntry, Parameter, RawPair};
pub use options::Options;
pub use scanner::Scanner;

use tracing::{debug, info, warn};

/// Generate the complete Markdown document for `source`.
///
/// Fails on the first malformed entry; nothing is returned for the
/// entries before it.
pub fn generate(source: &str, options: &Options) -> Result<String> {
    let scanner = Scanner::new(options.constant_prefix.as_deref())?;
    let mut output = render::preamble(&options.include, &options.lang);
    let mut count = 0;

    for pair in scanner.scan(source) {
        let entry = parser::parse_pair(&pair)?;
        debug!(
            index = pair.index,
            line = pair.line,
            name = %entry.name,
            parameters = entry.parameters.len(),
            "parsed entry"
        );
        output.push_str(&render::render_entry(&entry, &pair.signature, &options.lang));
        count += 1;
    }

    if count == 0 {
        warn!("no documentation comments found");
    }
    info!(entries = count, "rendered documentation");
    Ok(output)
}
