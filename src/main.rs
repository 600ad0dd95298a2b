use anyhow::{anyhow, Context, Result};
use gtree::avl_tree::AvlMap;
use gtree::red_black_tree::RedBlackMap;
use gtree::{Key, OrderedMap};
use log::{debug, info};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::env;
use std::io::{self, Write};

const LOG_LEVEL_VAR: &str = "GTREE_LOG";

fn init_logger() -> Result<()> {
    let level = match env::var(LOG_LEVEL_VAR) {
        Ok(level) => level
            .parse::<LevelFilter>()
            .map_err(|_| anyhow!("invalid {} level '{}'", LOG_LEVEL_VAR, level))?,
        Err(_) => LevelFilter::Info,
    };
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)
        .context("failed to initialize logger")?;
    Ok(())
}

fn fill<M>(map: &mut M, keys: &[Key])
where
    M: OrderedMap<Key>,
{
    for &key in keys {
        if map.insert(key, key).is_some() {
            debug!("overwrote key {}", key);
        }
    }
}

fn main() -> Result<()> {
    init_logger()?;

    let keys = env::args()
        .skip(1)
        .map(|arg| {
            arg.parse::<Key>()
                .with_context(|| format!("invalid key '{}'", arg))
        })
        .collect::<Result<Vec<Key>>>()?;

    let mut avl = AvlMap::new();
    let mut rb = RedBlackMap::new();
    fill(&mut avl, &keys);
    fill(&mut rb, &keys);
    info!(
        "inserted {} keys: avl tree holds {}, red black tree holds {}",
        keys.len(),
        avl.count(),
        rb.count(),
    );

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    rb.to_html(&mut handle)?;
    handle.flush()?;
    Ok(())
}
