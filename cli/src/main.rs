//! assetledger CLI — drive the registry contract from the terminal.
//!
//! State lives in a local JSON file (default `assetledger-state.json`), so
//! this is a dev/demo harness, not the platform's transaction pipeline.
//!
//! Usage:
//! ```bash
//! assetledger init
//! assetledger create --id asset3 --owner owner3 --status available
//! assetledger get --id asset3 --json
//! assetledger transfer --id asset3 --owner owner4
//! assetledger list
//! ```

use std::env;
use std::process;

use assetledger_contract::AssetRegistry;
use assetledger_core::{Asset, LedgerError};
use assetledger_state::FileState;

const DEFAULT_STATE_FILE: &str = "assetledger-state.json";

#[tokio::main]
async fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "init" => cmd_init(&args[2..]).await,
        "create" => cmd_create(&args[2..]).await,
        "get" => cmd_get(&args[2..]).await,
        "list" => cmd_list(&args[2..]).await,
        "exists" => cmd_exists(&args[2..]).await,
        "transfer" => cmd_transfer(&args[2..]).await,
        "delete" => cmd_delete(&args[2..]).await,
        "whoami" => cmd_whoami(&args[2..]).await,
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("assetledger {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn print_usage() {
    println!("assetledger {}", env!("CARGO_PKG_VERSION"));
    println!("Asset registry over a local world-state file\n");
    println!("USAGE:");
    println!("    assetledger <COMMAND> [FLAGS]\n");
    println!("COMMANDS:");
    println!("    init      Seed the ledger with the bootstrap assets");
    println!("    create    Store an asset (upsert)");
    println!("    get       Fetch one asset by id");
    println!("    list      Fetch every stored asset");
    println!("    exists    Check whether an id is stored");
    println!("    transfer  Reassign an asset to a new owner");
    println!("    delete    Remove an asset");
    println!("    whoami    Print the caller identity string");
    println!("    version   Print version");
    println!("    help      Print this help\n");
    println!("COMMON FLAGS:");
    println!("    --state <PATH>    State file (default: {DEFAULT_STATE_FILE})");
    println!("    --id <ID>         Asset id");
    println!("    --owner <OWNER>   Asset owner");
    println!("    --status <LABEL>  Asset status");
    println!("    --json            Output as JSON");
}

/// Parsed command flags shared by every subcommand.
#[derive(Default)]
struct Flags {
    state: Option<String>,
    id: Option<String>,
    owner: Option<String>,
    status: Option<String>,
    json: bool,
}

impl Flags {
    fn parse(args: &[String]) -> Self {
        let mut flags = Self::default();
        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--state" => {
                    i += 1;
                    flags.state = args.get(i).cloned();
                }
                "--id" => {
                    i += 1;
                    flags.id = args.get(i).cloned();
                }
                "--owner" => {
                    i += 1;
                    flags.owner = args.get(i).cloned();
                }
                "--status" => {
                    i += 1;
                    flags.status = args.get(i).cloned();
                }
                "--json" => flags.json = true,
                flag => {
                    eprintln!("Unknown flag: {flag}");
                    process::exit(1);
                }
            }
            i += 1;
        }
        flags
    }

    fn open_state(&self) -> Result<FileState, LedgerError> {
        FileState::open(self.state.as_deref().unwrap_or(DEFAULT_STATE_FILE))
    }

    fn require(&self, name: &str, value: &Option<String>) -> String {
        match value {
            Some(v) => v.clone(),
            None => {
                eprintln!("Error: --{name} is required");
                process::exit(1);
            }
        }
    }
}

fn print_asset(asset: &Asset, as_json: bool) {
    if as_json {
        match serde_json::to_string_pretty(asset) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("JSON serialization error: {e}");
                process::exit(1);
            }
        }
    } else {
        println!("{}  owner={}  status={}", asset.id, asset.owner, asset.status);
    }
}

async fn cmd_init(args: &[String]) -> Result<(), LedgerError> {
    let flags = Flags::parse(args);
    let ctx = flags.open_state()?;
    AssetRegistry::new().init_ledger(&ctx).await?;
    println!("Ledger initialized ({} assets stored)", ctx.len());
    Ok(())
}

async fn cmd_create(args: &[String]) -> Result<(), LedgerError> {
    let flags = Flags::parse(args);
    let id = flags.require("id", &flags.id);
    let owner = flags.require("owner", &flags.owner);
    let status = flags.require("status", &flags.status);

    let ctx = flags.open_state()?;
    AssetRegistry::new().create_asset(&ctx, &id, &owner, &status).await?;
    println!("Stored asset '{id}'");
    Ok(())
}

async fn cmd_get(args: &[String]) -> Result<(), LedgerError> {
    let flags = Flags::parse(args);
    let id = flags.require("id", &flags.id);

    let ctx = flags.open_state()?;
    let asset = AssetRegistry::new().query_asset(&ctx, &id).await?;
    print_asset(&asset, flags.json);
    Ok(())
}

async fn cmd_list(args: &[String]) -> Result<(), LedgerError> {
    let flags = Flags::parse(args);
    let ctx = flags.open_state()?;
    let assets = AssetRegistry::new().query_all_assets(&ctx).await?;

    if flags.json {
        match serde_json::to_string_pretty(&assets) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("JSON serialization error: {e}");
                process::exit(1);
            }
        }
    } else if assets.is_empty() {
        println!("(empty ledger)");
    } else {
        for asset in &assets {
            print_asset(asset, false);
        }
    }
    Ok(())
}

async fn cmd_exists(args: &[String]) -> Result<(), LedgerError> {
    let flags = Flags::parse(args);
    let id = flags.require("id", &flags.id);

    let ctx = flags.open_state()?;
    let exists = AssetRegistry::new().asset_exists(&ctx, &id).await?;
    println!("{exists}");
    Ok(())
}

async fn cmd_transfer(args: &[String]) -> Result<(), LedgerError> {
    let flags = Flags::parse(args);
    let id = flags.require("id", &flags.id);
    let owner = flags.require("owner", &flags.owner);

    let ctx = flags.open_state()?;
    AssetRegistry::new().transfer_asset(&ctx, &id, &owner).await?;
    println!("Asset '{id}' transferred to '{owner}'");
    Ok(())
}

async fn cmd_delete(args: &[String]) -> Result<(), LedgerError> {
    let flags = Flags::parse(args);
    let id = flags.require("id", &flags.id);

    let ctx = flags.open_state()?;
    let deleted = AssetRegistry::new().delete_asset(&ctx, &id).await?;
    println!("Deleted:");
    print_asset(&deleted, flags.json);
    Ok(())
}

async fn cmd_whoami(args: &[String]) -> Result<(), LedgerError> {
    let flags = Flags::parse(args);
    let ctx = flags.open_state()?;
    println!("{}", AssetRegistry::new().caller_identity(&ctx)?);
    Ok(())
}
