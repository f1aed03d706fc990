//! Interactive generator prompts.

use std::error::Error;
use std::io::{BufRead, Write};

use lapjv_core::{FillMode, GeneratorConfig};

/// Asks for the matrix size and fill mode. An empty answer keeps the value
/// already in `config`.
pub fn prompt_config<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    mut config: GeneratorConfig,
) -> Result<GeneratorConfig, Box<dyn Error>> {
    if let Some(answer) = ask(&mut input, &mut output, "Matrix size", &config.size.to_string())? {
        config.size = answer
            .parse()
            .map_err(|err| format!("invalid matrix size `{answer}`: {err}"))?;
    }
    if let Some(answer) = ask(
        &mut input,
        &mut output,
        "Fill type (random/constant)",
        config.fill.as_str(),
    )? {
        config.fill = answer.parse::<FillMode>()?;
    }
    Ok(config)
}

fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    default: &str,
) -> Result<Option<String>, Box<dyn Error>> {
    write!(output, "{question} [{default}]: ")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(format!("unexpected end of input while reading {question}").into());
    }
    let answer = line.trim();
    Ok((!answer.is_empty()).then(|| answer.to_string()))
}
