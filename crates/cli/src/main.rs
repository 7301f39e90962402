// remitcert CLI - headless Form 15CB preparation
// Reads flat field dictionaries as JSON, writes JSON or document paths.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use remitcert_config::Settings;
use remitcert_master::fields::ensure_defaults;
use remitcert_master::validate::{
    mask_pan, validate_bsr_code, validate_dtaa_rate, validate_pan, validate_purpose_code,
};
use remitcert_master::{
    normalize, suggest_from_master, AliasSet, FieldDict, MasterData, MasterIndex, Resolver,
};
use remitcert_xml::{generate, parse_fields};

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;

#[derive(Parser)]
#[command(name = "rcert")]
#[command(about = "Form 15CB preparation (suggest, generate, parse, validate)")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve extracted fields against the master data and print suggestions
    #[command(after_help = "\
Examples:
  rcert suggest extracted.json
  rcert suggest extracted.json --master data/master/master_data.json")]
    Suggest {
        /// Extracted field dictionary (JSON object of string -> string)
        fields: PathBuf,

        /// Reference dataset (defaults to the settings path)
        #[arg(long)]
        master: Option<PathBuf>,

        /// Alias tables (defaults to the settings path; missing file = none)
        #[arg(long)]
        aliases: Option<PathBuf>,

        /// Bank name -> bank code lookup (defaults to the settings path)
        #[arg(long)]
        bank_codes: Option<PathBuf>,

        /// Print the input merged with the suggestions instead of the
        /// suggestions alone
        #[arg(long)]
        merge: bool,
    },

    /// Generate a Form 15CB XML document from a field dictionary
    #[command(after_help = "\
Examples:
  rcert generate fields.json
  rcert generate fields.json --out data/output --defaults")]
    Generate {
        /// Field dictionary (JSON object of string -> string)
        fields: PathBuf,

        /// Placeholder template (defaults to the settings path)
        #[arg(long)]
        template: Option<PathBuf>,

        /// Output directory (defaults to the settings path)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Seed the fixed creation-metadata defaults first
        #[arg(long)]
        defaults: bool,
    },

    /// Parse a generated document back into a field dictionary
    Parse {
        /// Document to read
        xml: PathBuf,
    },

    /// Check the codified fields (PAN, BSR, purpose code, treaty rate)
    Validate {
        /// Field dictionary (JSON object of string -> string)
        fields: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let settings = Settings::load();

    let result = match cli.command {
        Commands::Suggest { fields, master, aliases, bank_codes, merge } => cmd_suggest(
            &fields,
            &master.unwrap_or_else(|| settings.master_path.clone()),
            &aliases.unwrap_or_else(|| settings.aliases_path.clone()),
            &bank_codes.unwrap_or_else(|| settings.bank_codes_path.clone()),
            merge,
        ),
        Commands::Generate { fields, template, out, defaults } => cmd_generate(
            &fields,
            &template.unwrap_or_else(|| settings.template_path.clone()),
            &out.unwrap_or_else(|| settings.output_dir.clone()),
            defaults,
        ),
        Commands::Parse { xml } => cmd_parse(&xml),
        Commands::Validate { fields } => cmd_validate(&fields),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn load_fields(path: &Path) -> Result<FieldDict, String> {
    let raw = fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;
    serde_json::from_str(&raw).map_err(|e| format!("{}: {e}", path.display()))
}

/// Bank-code lookups are keyed by normalized bank name on disk or not;
/// normalize on load so either convention works.
fn load_bank_codes(path: &Path) -> Result<BTreeMap<String, String>, String> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let raw = fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;
    let parsed: BTreeMap<String, String> =
        serde_json::from_str(&raw).map_err(|e| format!("{}: {e}", path.display()))?;
    Ok(parsed.into_iter().map(|(k, v)| (normalize(&k), v)).collect())
}

fn cmd_suggest(
    fields_path: &Path,
    master_path: &Path,
    aliases_path: &Path,
    bank_codes_path: &Path,
    merge: bool,
) -> Result<u8, String> {
    let extracted = load_fields(fields_path)?;
    let data = MasterData::from_file(master_path).map_err(|e| e.to_string())?;
    let aliases = AliasSet::from_file(aliases_path).map_err(|e| e.to_string())?;
    let bank_codes = load_bank_codes(bank_codes_path)?;

    let index = MasterIndex::build(&data);
    let resolver = Resolver::new(&index, &aliases);
    let (suggestions, events) = suggest_from_master(&resolver, &extracted, &bank_codes);

    for event in &events {
        eprintln!(
            "{}: '{}' -> '{}' ({})",
            event.lookup_domain, event.input, event.resolved, event.match_type
        );
    }
    if let Some(pan) = suggestions.get("RemitterPAN") {
        eprintln!("remitter PAN suggested: {}", mask_pan(pan));
    }

    let output = if merge {
        let mut merged = extracted;
        merged.extend(suggestions.clone());
        serde_json::json!({ "fields": merged, "events": events })
    } else {
        serde_json::json!({ "suggestions": suggestions, "events": events })
    };
    println!("{}", serde_json::to_string_pretty(&output).map_err(|e| e.to_string())?);
    Ok(EXIT_SUCCESS)
}

fn cmd_generate(
    fields_path: &Path,
    template_path: &Path,
    output_dir: &Path,
    defaults: bool,
) -> Result<u8, String> {
    let mut fields = load_fields(fields_path)?;
    if defaults {
        ensure_defaults(&mut fields);
    }
    let path = generate(&fields, template_path, output_dir).map_err(|e| e.to_string())?;
    println!("{}", path.display());
    Ok(EXIT_SUCCESS)
}

fn cmd_parse(xml_path: &Path) -> Result<u8, String> {
    let fields = parse_fields(xml_path).map_err(|e| e.to_string())?;
    println!("{}", serde_json::to_string_pretty(&fields).map_err(|e| e.to_string())?);
    Ok(EXIT_SUCCESS)
}

fn cmd_validate(fields_path: &Path) -> Result<u8, String> {
    let fields = load_fields(fields_path)?;

    let checks: [(&str, fn(&str) -> bool, &str); 4] = [
        ("RemitterPAN", validate_pan, "expected AAAAA9999A"),
        ("BsrCode", validate_bsr_code, "expected exactly 7 digits"),
        ("RevPurCode", validate_purpose_code, "expected RB-NN.N or RB-NN.N-SNNNN"),
        ("RateTdsADtaa", validate_dtaa_rate, "expected a number in 0..=100"),
    ];

    let mut failures = 0usize;
    for (key, check, hint) in checks {
        let Some(value) = fields.get(key) else {
            continue;
        };
        let shown = if key == "RemitterPAN" { mask_pan(value) } else { value.clone() };
        if check(value) {
            println!("{key}: ok ({shown})");
        } else {
            println!("{key}: INVALID ({shown}) - {hint}");
            failures += 1;
        }
    }

    if failures == 0 {
        Ok(EXIT_SUCCESS)
    } else {
        Err(format!("{failures} field(s) failed validation"))
    }
}
