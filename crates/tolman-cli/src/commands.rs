use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span};

use tolman_cli::shell::{EditShell, ShellReply};
use tolman_model::{Item, ItemId, ToleranceId};
use tolman_persistence::{StoreFile, load_or_seed, save_store, seed_items};
use tolman_validate::validate;

use crate::cli::CheckArgs;
use crate::summary::{print_error_table, print_item_table};

pub fn run_list(store_path: &Path) -> Result<()> {
    let store_file = load_or_seed(store_path).context("load store")?;
    print_item_table(&store_file.items);
    Ok(())
}

/// Returns true when validation reported at least one error.
pub fn run_check(store_path: &Path, args: &CheckArgs) -> Result<bool> {
    let store_file = load_or_seed(store_path).context("load store")?;
    let item_id = ItemId::new(args.item_id.as_str());
    let item = store_file
        .items
        .iter()
        .find(|item| item.id == item_id)
        .ok_or_else(|| anyhow!("unknown item `{item_id}`"))?;
    let candidates = parse_overrides(item, &args.set)?;
    let errors = validate(item, &candidates);
    if errors.is_empty() {
        println!("{}  {}: no validation errors.", item.id, item.label);
        return Ok(false);
    }
    print_error_table(item, &errors);
    Ok(true)
}

pub fn run_edit(store_path: &Path) -> Result<()> {
    let store_file = load_or_seed(store_path).context("load store")?;
    let span = info_span!("edit", store = %store_path.display());
    let _guard = span.enter();
    info!(items = store_file.items.len(), "edit shell starting");

    let mut shell = EditShell::new(store_file, store_path.to_path_buf());
    println!("Tolerance edit shell. `help` lists commands, `quit` leaves.");
    let mut input = io::stdin().lock();
    let mut stdout = io::stdout();
    loop {
        print!("tolman> ");
        stdout.flush().context("flush prompt")?;
        let mut line = String::new();
        if input.read_line(&mut line).context("read input")? == 0 {
            println!();
            break;
        }
        match shell.handle_line(&line) {
            ShellReply::Continue(text) => {
                if !text.is_empty() {
                    println!("{text}");
                }
            }
            ShellReply::Quit(text) => {
                if !text.is_empty() {
                    println!("{text}");
                }
                break;
            }
        }
    }
    Ok(())
}

pub fn run_reset(store_path: &Path) -> Result<()> {
    let mut store_file = StoreFile::new(seed_items());
    save_store(&mut store_file, store_path).context("save store")?;
    println!(
        "Store reset to {} seed item(s) at {}.",
        store_file.items.len(),
        store_path.display()
    );
    Ok(())
}

fn parse_overrides(item: &Item, overrides: &[String]) -> Result<BTreeMap<ToleranceId, f64>> {
    let mut candidates = BTreeMap::new();
    for entry in overrides {
        let (name, raw_value) = entry
            .split_once('=')
            .ok_or_else(|| anyhow!("expected NAME=VALUE, got `{entry}`"))?;
        let name = name.trim();
        let raw_value = raw_value.trim();
        let value: f64 = raw_value
            .parse()
            .map_err(|_| anyhow!("`{raw_value}` is not a number"))?;
        if !value.is_finite() {
            return Err(anyhow!("`{raw_value}` is not a finite number"));
        }
        let tolerance = item
            .tolerance(&ToleranceId::new(name))
            .or_else(|| item.tolerance_named(name))
            .ok_or_else(|| anyhow!("item `{}` has no tolerance `{name}`", item.id))?;
        candidates.insert(tolerance.id.clone(), value);
    }
    Ok(candidates)
}
