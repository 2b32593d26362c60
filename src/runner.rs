use std::path::PathBuf;
use std::process::ExitCode;

use scriptck::errors::Diagnostics;

use self::config::{parse_args_or_exit, CheckConfig};
use self::errors::print_diagnostic;

pub mod config;
mod dump;
mod errors;
mod passes;

pub enum CompilationControl {
    Continue,
    Stop,
}

pub struct PassOutput<O> {
    pub output: O,
    pub compilation_control: CompilationControl,
}

impl<O> PassOutput<O> {
    pub fn stop_with_output(output: O) -> Self {
        Self {
            output,
            compilation_control: CompilationControl::Stop,
        }
    }

    pub fn continue_with_output(output: O) -> Self {
        Self {
            output,
            compilation_control: CompilationControl::Continue,
        }
    }
}

pub struct RunnerCtx<'emt> {
    pub config: CheckConfig,
    pub diagnostics: Diagnostics<'emt>,
}

impl RunnerCtx<'_> {
    pub fn stop_if_errors<O>(&self, output: O) -> PassOutput<O> {
        PassOutput {
            output,
            compilation_control: if self.diagnostics.has_errors() {
                CompilationControl::Stop
            } else {
                CompilationControl::Continue
            },
        }
    }
}

/// A program tree together with the file it was loaded from.
pub struct LoadedProgram {
    pub path: PathBuf,
    pub program: scriptck::ast::Program,
}

macro_rules! return_if_stopped {
    ($ctx:expr, $e:expr) => {
        match $e {
            PassOutput {
                compilation_control: CompilationControl::Stop,
                ..
            } => {
                return if $ctx.diagnostics.has_errors() {
                    ExitCode::FAILURE
                } else {
                    ExitCode::SUCCESS
                }
            }

            PassOutput { output, .. } => output,
        }
    };
}

fn run(mut ctx: RunnerCtx<'_>) -> ExitCode {
    let programs = return_if_stopped!(ctx, passes::load_programs(&mut ctx));
    let checked = return_if_stopped!(ctx, passes::typeck_all(&mut ctx, programs));
    return_if_stopped!(ctx, passes::dump_symbols(&mut ctx, &checked));

    if ctx.diagnostics.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

pub fn prepare_and_run() -> ExitCode {
    let config = parse_args_or_exit();
    let mut diagnostics = Diagnostics::new();
    diagnostics.set_emitter(Box::new(print_diagnostic));

    let ctx = RunnerCtx {
        config,
        diagnostics,
    };

    run(ctx)
}
