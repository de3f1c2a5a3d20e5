/*
 *  main.rs
 *
 *  calcbridge - calculator boundary adapter
 *  (c) 2020-26 Stuart Hunter
 *
 *  Console harness entry point
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use std::io;
use anyhow::Context;
use env_logger::Env;
use log::{debug, info};

use calcbridge::config;
use calcbridge::console;

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

fn main() -> anyhow::Result<()> {
    let loaded = config::load().context("loading configuration")?;
    let cfg = loaded.config;

    if loaded.dump {
        println!("{}", config::dump(&cfg)?);
        return Ok(());
    }

    // logs go to stderr, results to stdout
    env_logger::Builder::from_env(Env::default().default_filter_or(cfg.log_level()))
        .format_timestamp_secs()
        .init();

    info!("{} v.{} built {} ({})", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"), BUILD_DATE, BUILD_PROFILE);
    debug!("effective config: {:?}", cfg);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let engine = console::run(stdin.lock(), &mut stdout, &cfg.console_options())
        .context("console session")?;

    info!("Session ended with {} history item(s)", engine.history().len());
    Ok(())
}
