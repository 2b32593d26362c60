use std::io::{self, Write};
use std::path::Path;

use ron::ser::PrettyConfig;

use scriptck::analysis::SymbolTable;

use super::config::SymbolsOutputFormat;

pub fn dump_symbols_to(
    format: SymbolsOutputFormat,
    path: &Path,
    symbols: &SymbolTable,
    mut out: impl Write,
) -> io::Result<()> {
    match format {
        SymbolsOutputFormat::Text => {
            writeln!(out, "# {}", path.display())?;
            write!(out, "{}", symbols)
        }

        SymbolsOutputFormat::Debug => writeln!(out, "{:#?}", symbols),

        SymbolsOutputFormat::Ron => {
            let dump = ron::ser::to_string_pretty(symbols, PrettyConfig::default())
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

            writeln!(out, "{}", dump)
        }
    }
}
