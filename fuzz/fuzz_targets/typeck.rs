#![no_main]

use libfuzzer_sys::fuzz_target;

use scriptck::analysis::{self, StructuralViolation, TypeckOptions};
use scriptck::ast::Program;

fuzz_target!(|input: &[u8]| {
    let Ok(text) = std::str::from_utf8(input) else { return };
    let Ok(program) = ron::from_str::<Program>(text) else { return };

    let options = TypeckOptions {
        require_bool_conditions: input.len() % 2 == 0,
    };

    match analysis::check_with_options(&program, options) {
        Ok((symbols, diagnostics)) => {
            for diagnostic in &diagnostics {
                assert!(diagnostic.line().is_some());
            }

            for (name, ty) in symbols.iter() {
                assert_eq!(symbols.get(name), Some(ty));
            }
        }

        Err(StructuralViolation::OperatorChain { op_count, .. }) => assert_ne!(op_count, 1),
        Err(_) => {}
    }
});
