#[macro_use]
extern crate log;

use balanced_trees::avl_tree::AvlSet;
use balanced_trees::red_black_tree::RedBlackSet;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::env;
use std::str::FromStr;

const LOG_LEVEL_VAR: &str = "BALANCED_TREES_LOG";

fn log_level() -> LevelFilter {
    match env::var(LOG_LEVEL_VAR) {
        Ok(value) => LevelFilter::from_str(&value).unwrap_or_else(|_| {
            eprintln!("Unknown log level {:?} in {}, using info.", value, LOG_LEVEL_VAR);
            LevelFilter::Info
        }),
        Err(_) => LevelFilter::Info,
    }
}

fn join<'a, I>(keys: I) -> String
where
    I: IntoIterator<Item = &'a u32>,
{
    keys.into_iter()
        .map(|key| key.to_string())
        .collect::<Vec<String>>()
        .join(" ")
}

fn run_avl() {
    let mut set = AvlSet::new();
    for key in &[30, 24, 20] {
        set.insert(*key);
    }

    println!("Initial avl tree:");
    print!("{}", set.shape());
    println!("\nIn-order: {}", join(&set));

    set.insert(31);
    println!("\nAfter inserting 31:");
    print!("{}", set.shape());

    set.remove(&35);
    println!("\nAfter removing 35:");
    print!("{}", set.shape());
    info!("avl tree holds {} keys with height {}", set.len(), set.height());
}

fn run_red_black() {
    let mut set = RedBlackSet::new();
    for key in &[10, 20, 30, 15, 25] {
        set.insert(*key);
    }

    println!("\nRed black tree in-order: {}", join(&set));
    info!(
        "red black tree holds {} keys with black height {}",
        set.len(),
        set.black_height(),
    );
}

fn main() {
    if let Err(err) = TermLogger::init(
        log_level(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Failed to initialize logger: {}", err);
    }

    run_avl();
    run_red_black();
}
