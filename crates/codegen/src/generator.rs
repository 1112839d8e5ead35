use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::CodegenConfig;
use crate::emit::Generator;
use crate::error::GenerateError;
use crate::schema::{self, SchemaModel};

/// Generates bindings for an introspection result.
pub fn generate(introspection_json: &str, config: &CodegenConfig) -> Result<String, GenerateError> {
    let schema = schema::parse(introspection_json)?;
    Ok(generate_from_model(&schema, config))
}

/// Generates bindings for an already built schema.
pub fn generate_from_model(schema: &SchemaModel, config: &CodegenConfig) -> String {
    debug!(
        types = schema.types().len(),
        runtime = %config.runtime,
        "Generating Rust bindings."
    );
    Generator::new(schema, config).emit_module()
}

/// Reads a schema file and writes the generated bindings to `output`,
/// creating parent directories as needed.
pub fn generate_file(
    schema_path: &Path,
    output: &Path,
    config: &CodegenConfig,
) -> Result<(), GenerateError> {
    let introspection_json = read_schema(schema_path)?;
    debug!(
        schema_path = %schema_path.display(),
        schema_len = introspection_json.len(),
        "Read introspection schema."
    );

    let code = generate(&introspection_json, config)?;

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent).map_err(|source| GenerateError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(output, &code).map_err(|source| GenerateError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    debug!(
        output = %output.display(),
        code_len = code.len(),
        "Rust bindings generated successfully."
    );
    Ok(())
}

pub fn read_schema(schema_path: &Path) -> Result<String, GenerateError> {
    fs::read_to_string(schema_path).map_err(|source| GenerateError::Read {
        path: schema_path.to_path_buf(),
        source,
    })
}
