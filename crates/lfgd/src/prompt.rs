//! Interactive configuration prompts.
//!
//! Any value the config file did not supply (or supplied invalid) is asked
//! for on stdin, re-prompting until the answer parses and passes its
//! check. The max-time ceiling clamp is applied after all values are
//! collected.

use std::io::{BufRead, Write};
use std::str::FromStr;

use lfg_core::{RawConfig, SimConfig};

/// Fill in every missing field of `raw` by prompting, validate, and clamp.
pub fn complete_config<R: BufRead, W: Write>(
    raw: RawConfig,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<SimConfig> {
    let max_instances = match raw.max_instances {
        Some(v) => v,
        None => prompt_number(
            input,
            output,
            "Enter maximum number of concurrent instances (must be > 0): ",
            |v: &u32| *v > 0,
            "Error: value must be a positive integer.",
        )?,
    };
    let tanks = match raw.tanks {
        Some(v) => v,
        None => prompt_number(
            input,
            output,
            "Enter number of tank players in the queue (must be > 0): ",
            |v: &u32| *v > 0,
            "Error: value must be a positive integer.",
        )?,
    };
    let healers = match raw.healers {
        Some(v) => v,
        None => prompt_number(
            input,
            output,
            "Enter number of healer players in the queue (must be > 0): ",
            |v: &u32| *v > 0,
            "Error: value must be a positive integer.",
        )?,
    };
    let dps = match raw.dps {
        Some(v) => v,
        None => prompt_number(
            input,
            output,
            "Enter number of DPS players in the queue (must be > 0): ",
            |v: &u32| *v > 0,
            "Error: value must be a positive integer.",
        )?,
    };
    let min_time = match raw.min_time {
        Some(v) => v,
        None => prompt_number(
            input,
            output,
            "Enter minimum clear time in seconds (must be > 0): ",
            |v: &u64| *v > 0,
            "Error: value must be a positive integer.",
        )?,
    };
    let max_time = match raw.max_time {
        // A file value that no longer beats the prompted minimum gets
        // re-asked, like any other invalid answer.
        Some(v) if v > min_time => v,
        _ => {
            let message = format!("Error: value must be greater than min-time ({min_time}).");
            prompt_number(
                input,
                output,
                &format!("Enter maximum clear time in seconds (must be > {min_time}): "),
                |v: &u64| *v > min_time,
                &message,
            )?
        }
    };

    let config = SimConfig {
        max_instances,
        tanks,
        healers,
        dps,
        min_time,
        max_time,
    };
    config.validate()?;
    Ok(config.clamp_max_time())
}

/// Prompt until a line parses as `T` and satisfies `valid`.
fn prompt_number<T, R, W>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    valid: impl Fn(&T) -> bool,
    error: &str,
) -> anyhow::Result<T>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            anyhow::bail!("input ended before configuration was complete");
        }
        match line.trim().parse::<T>() {
            Ok(v) if valid(&v) => return Ok(v),
            _ => writeln!(output, "{error}")?,
        }
    }
}
