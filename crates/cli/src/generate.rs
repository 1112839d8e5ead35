use std::io::Write as _;
use std::path::PathBuf;

use clap::Args;
use gqlbind_codegen::{CodegenConfig, GenerateError, generate, generate_file, read_schema};
use tracing::debug;

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Introspection result (JSON) to generate bindings for
    #[arg(long, value_name = "SCHEMA_JSON")]
    pub schema: PathBuf,
    /// File to write the bindings to; stdout when omitted
    #[arg(long, short, value_name = "OUTPUT_RS")]
    pub output: Option<PathBuf>,
    /// Generator configuration (TOML)
    #[arg(long, value_name = "CONFIG_TOML")]
    pub config: Option<PathBuf>,
}

pub fn run(args: GenerateArgs) -> i32 {
    match execute(&args) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{err}");
            1
        }
    }
}

fn execute(args: &GenerateArgs) -> Result<(), GenerateError> {
    let config = match &args.config {
        Some(path) => CodegenConfig::from_path(path)?,
        None => CodegenConfig::default(),
    };
    debug!(?config, "Loaded generator configuration.");

    match &args.output {
        Some(output) => {
            generate_file(&args.schema, output, &config)?;
            eprintln!("Generated {}", output.display());
        }
        None => {
            let code = generate(&read_schema(&args.schema)?, &config)?;
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(code.as_bytes())
                .map_err(|source| GenerateError::Write {
                    path: PathBuf::from("<stdout>"),
                    source,
                })?;
        }
    }
    Ok(())
}
