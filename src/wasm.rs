use std::fmt::Write;

use wasm_bindgen::prelude::*;

use crate::analysis;
use crate::ast::Program;

fn produce_error_message(errors: impl IntoIterator<Item = String>) -> String {
    let mut result = String::from("Type checking failed due to the following errors:");

    for message in errors {
        write!(&mut result, "\n{message}").unwrap();
    }

    result
}

/// Checks a program tree serialized as RON.
///
/// On success returns the symbol table, one `name: type` line per variable.
#[wasm_bindgen]
pub fn check_from_ron(tree: &str) -> Result<String, String> {
    console_error_panic_hook::set_once();

    let program: Program =
        ron::from_str(tree).map_err(|e| produce_error_message([e.to_string()]))?;
    let (symbols, diagnostics) =
        analysis::check(&program).map_err(|e| produce_error_message([e.to_string()]))?;

    if !diagnostics.is_empty() {
        return Err(produce_error_message(
            diagnostics.into_iter().map(|diagnostic| diagnostic.to_string()),
        ));
    }

    Ok(symbols.to_string())
}
