use clap::{Args, Parser, Subcommand};
use neo2_common::keycodes::KeyClass;
use neo2_config::{
    describe::{describe_action, describe_event, find_key, render_layer},
    function_index, keycodes, layer_index, macro_by_name,
    validate::validate_keymap,
};
use neo2_firmware::{
    dispatch::{self, DispatchContext},
    keymaps::neo2::{LAYER_NAMES, NEO2},
    layer_state::LayerState,
    mapper::macros::{MacroEvent, MacroPlayer},
};
use std::process;

use anyhow::{Context, Result, anyhow};

/// Inspect the Neo2 ErgoDox keymap
#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the layers with their function key counts
    Layers,
    /// Print the keycodes of a layer as they sit on the board
    Show(ShowArgs),
    /// Show what a function key does on a layer
    Resolve(ResolveArgs),
    /// Show the events a macro expands to
    Macro(MacroArgs),
    /// Show where a keycode sits on each layer
    Find(FindArgs),
    /// List keycode names
    KeycodesList(ListKeycodesArgs),
    /// Check that every function key resolves
    Validate(ValidateArgs),
}

#[derive(Args)]
struct ShowArgs {
    /// Layer number or name
    layer: String,
}

#[derive(Args)]
struct ResolveArgs {
    /// Layer number or name
    layer: String,

    /// Function key; FN3 or 3
    function: String,
}

#[derive(Args)]
struct MacroArgs {
    /// Macro name, e.g. left_angle_bracket
    name: String,

    /// Leave out the delays
    #[clap(long, short)]
    keys_only: bool,
}

#[derive(Args)]
struct FindArgs {
    /// Keycode name or alias, e.g. nubs or FN4
    key: String,
}

#[derive(Args)]
struct ListKeycodesArgs {
    /// Include the keycode hex value
    #[clap(long, short)]
    verbose: bool,

    /// Sort results by keycode; Defaults to sorting by name
    #[clap(long, short)]
    sort_by_keycode: bool,

    /// Only list key names than contains pattern (case insensitive) if pattern starts with 0x then
    /// key names matching the key code will be shown.
    #[clap()]
    pattern: Option<String>,
}

#[derive(Args)]
struct ValidateArgs {
    /// Display the key counts of each layer
    #[clap(long, short)]
    verbose: bool,
}

fn layer_name(layer: u8) -> &'static str {
    LAYER_NAMES.get(layer as usize).copied().unwrap_or("?")
}

fn list_layers() -> Result<()> {
    for layer in 0..NEO2.layer_count() as u8 {
        println!(
            "{layer}: {:<12} {} function keys, {} table entries",
            layer_name(layer),
            NEO2.function_keys(layer).count(),
            NEO2.actions(layer).len()
        );
    }
    Ok(())
}

fn show_layer(args: &ShowArgs) -> Result<()> {
    let layer = layer_index(&args.layer)?;
    print!("{}", render_layer(&NEO2, layer, layer_name(layer))?);
    Ok(())
}

fn resolve(args: &ResolveArgs) -> Result<()> {
    let layer = layer_index(&args.layer)?;
    let function = function_index(&args.function)?;
    let ctx = DispatchContext::new(LayerState::from_bits(1 << layer));
    let action = dispatch::resolve(&NEO2, &ctx, function);
    let from_base = layer != 0 && NEO2.layer_action(layer, function).is_none() && !action.is_no();

    println!(
        "FN{function} on layer {layer} ({}): {}{}",
        layer_name(layer),
        describe_action(&action, &LAYER_NAMES),
        if from_base { " (from base layer)" } else { "" }
    );
    Ok(())
}

fn show_macro(args: &MacroArgs) -> Result<()> {
    let id = macro_by_name(&args.name)?;
    for event in MacroPlayer::new(id.steps()) {
        if args.keys_only && matches!(event, MacroEvent::Delay(_)) {
            continue;
        }
        println!("{}", describe_event(&event));
    }
    Ok(())
}

fn find(args: &FindArgs) -> Result<()> {
    let code = keycodes::key_code(&args.key)
        .ok_or_else(|| anyhow!("Unknown keycode {:?}", args.key))?;
    let found = find_key(&NEO2, code);
    if found.is_empty() {
        println!("{} is not in the keymap", keycodes::key_name(code));
    }
    for (layer, row, column) in found {
        println!(
            "{}: layer {layer} ({}) key ({row}, {column})",
            keycodes::key_name(code),
            layer_name(layer)
        );
    }
    Ok(())
}

fn list_keycodes(args: &ListKeycodesArgs) -> Result<()> {
    let iter = keycodes::keycodes_iter();
    let mut codes = if let Some(pattern) = &args.pattern {
        let pattern = pattern.to_lowercase();
        if let Some(hex) = pattern.strip_prefix("0x") {
            let pattern = u16::from_str_radix(hex, 16)
                .with_context(|| format!("Invalid hex keycode {hex:?}"))?;
            iter.filter(|p| p.code == pattern).collect::<Vec<_>>()
        } else {
            let pattern = pattern.as_str();
            iter.filter(|p| p.name.to_lowercase().contains(pattern))
                .collect::<Vec<_>>()
        }
    } else {
        iter.collect::<Vec<_>>()
    };
    if args.sort_by_keycode {
        codes.sort_by(|a, b| match a.code.cmp(&b.code) {
            std::cmp::Ordering::Equal => a.name.cmp(b.name),
            i => i,
        });
    } else {
        codes.sort_by_key(|k| k.name);
    }
    if args.verbose {
        let mut prev_code = 0;
        let mut names = vec![];
        if args.sort_by_keycode {
            for d in codes {
                if prev_code != d.code {
                    if !names.is_empty() {
                        verbose_print(prev_code, &names.join(", "));
                        names = vec![];
                    }
                    prev_code = d.code
                }
                names.push(d.name);
            }
            if !names.is_empty() {
                verbose_print(prev_code, &names.join(", "));
            }
        } else {
            for d in codes {
                verbose_print(d.code, d.name);
            }
        }
    } else {
        for d in codes {
            println!("{}", d.name);
        }
    }
    Ok(())
}

fn verbose_print(code: u16, name: &str) {
    let kind = match KeyClass::of(code) {
        KeyClass::Function(_) => " (function)",
        KeyClass::Modifier(_) => " (modifier)",
        _ => "",
    };
    println!("{code:02X}: {name}{kind}");
}

fn validate(args: &ValidateArgs) -> Result<()> {
    let report = validate_keymap(&NEO2, &LAYER_NAMES);
    if args.verbose {
        for (i, stats) in report.layers.iter().enumerate() {
            println!(
                "{i}: {:<12} NO: {:>2}  TRNS: {:>2}  FN: {:>2}",
                stats.name, stats.no, stats.transparent, stats.function_keys
            );
        }
    }
    if report.is_ok() {
        return Ok(());
    }
    for problem in &report.problems {
        eprintln!("{problem}");
    }
    Err(anyhow!(
        "Keymap has {} unresolved function keys",
        report.problems.len()
    ))
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = run(&cli);

    if let Err(message) = result {
        eprintln!("{message}");
        process::exit(1);
    };
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Layers => list_layers(),
        Commands::Show(args) => show_layer(args),
        Commands::Resolve(args) => resolve(args),
        Commands::Macro(args) => show_macro(args),
        Commands::Find(args) => find(args),
        Commands::KeycodesList(args) => list_keycodes(args),
        Commands::Validate(args) => validate(args),
    }
}
