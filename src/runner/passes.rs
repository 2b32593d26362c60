use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use scriptck::analysis::{SymbolTable, TypeChecker, TypeckResult};
use scriptck::ast::Program;

use super::dump::dump_symbols_to;
use super::{LoadedProgram, PassOutput, RunnerCtx};

fn load_program(path: &Path) -> Result<Program, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;

    Ok(ron::from_str(&contents)?)
}

pub fn load_programs(ctx: &mut RunnerCtx<'_>) -> PassOutput<Vec<LoadedProgram>> {
    let mut programs = Vec::with_capacity(ctx.config.paths.len());

    for path in &ctx.config.paths {
        match load_program(path) {
            Ok(program) => {
                debug!(path = %path.display(), stmts = program.stmts.len(), "loaded a program");
                programs.push(LoadedProgram {
                    path: path.clone(),
                    program,
                });
            }

            Err(e) => ctx
                .diagnostics
                .error()
                .with_message(format!("could not load file {}", path.display()))
                .with_source(e)
                .emit(),
        }
    }

    ctx.stop_if_errors(programs)
}

/// Checks every program independently, each with its own symbol table.
pub fn typeck_all(
    ctx: &mut RunnerCtx<'_>,
    programs: Vec<LoadedProgram>,
) -> PassOutput<Vec<(PathBuf, SymbolTable)>> {
    let mut result = Vec::with_capacity(programs.len());

    for LoadedProgram { path, program } in programs {
        info!(path = %path.display(), "checking");

        let typeck = TypeChecker::with_options(&mut ctx.diagnostics, ctx.config.options.clone());

        match typeck.check(&program) {
            Ok(TypeckResult { symbols }) => result.push((path, symbols)),

            Err(e) => {
                ctx.diagnostics.fatal().with_span_and_error(e).emit();

                return PassOutput::stop_with_output(result);
            }
        }
    }

    // typing errors do not prevent the tables from being dumped
    PassOutput::continue_with_output(result)
}

pub fn dump_symbols(
    ctx: &mut RunnerCtx<'_>,
    checked: &[(PathBuf, SymbolTable)],
) -> PassOutput<()> {
    let mut stdout = io::stdout().lock();

    for (path, symbols) in checked {
        if let Err(e) = dump_symbols_to(ctx.config.format, path, symbols, &mut stdout) {
            ctx.diagnostics
                .error()
                .with_message("could not dump the symbol table to stdout".to_owned())
                .with_source(Box::new(e))
                .emit();

            return PassOutput::stop_with_output(());
        }
    }

    PassOutput::continue_with_output(())
}
